//! Typed section content.
//!
//! Stored content is untyped JSON written by the editor, so parsing here is total:
//! scalars are coerced to text, empty strings count as absent, and list entries that
//! are not objects are dropped. A section kind this service does not know is parsed
//! into `Generic` items by probing the common label fields.

use serde_json::Value;

use crate::models::resume::SectionKind;
use crate::render::coerce_to_string;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub avatar: Option<String>,
}

impl PersonalInfo {
    pub fn from_value(value: &Value) -> Self {
        PersonalInfo {
            full_name: text(value, "fullName"),
            job_title: text(value, "jobTitle"),
            email: text(value, "email"),
            phone: text(value, "phone"),
            location: text(value, "location"),
            website: text(value, "website"),
            linkedin: text(value, "linkedin"),
            github: text(value, "github"),
            avatar: text(value, "avatar"),
        }
    }

    /// Non-empty contact fields in display order. Social profiles are only included
    /// when `with_social` is set.
    pub fn contacts(&self, with_social: bool) -> Vec<&str> {
        let mut fields = vec![&self.email, &self.phone, &self.location, &self.website];
        if with_social {
            fields.push(&self.linkedin);
            fields.push(&self.github);
        }
        fields.into_iter().filter_map(|f| f.as_deref()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkItem {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
    pub highlights: Vec<String>,
}

impl WorkItem {
    fn from_value(value: &Value) -> Self {
        WorkItem {
            company: text(value, "company"),
            position: text(value, "position"),
            location: text(value, "location"),
            start_date: text(value, "startDate"),
            end_date: text(value, "endDate"),
            current: flag(value, "current"),
            description: text(value, "description"),
            highlights: text_list(value, "highlights"),
        }
    }

    /// End of the date range: "Present" while the position is current.
    pub fn end_label(&self) -> Option<&str> {
        if self.current {
            Some("Present")
        } else {
            self.end_date.as_deref()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationItem {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub highlights: Vec<String>,
}

impl EducationItem {
    fn from_value(value: &Value) -> Self {
        EducationItem {
            institution: text(value, "institution"),
            degree: text(value, "degree"),
            field: text(value, "field"),
            location: text(value, "location"),
            start_date: text(value, "startDate"),
            end_date: text(value, "endDate"),
            gpa: text(value, "gpa"),
            description: text(value, "description"),
            highlights: text_list(value, "highlights"),
        }
    }

    /// "Degree in Field", or whichever half is present.
    pub fn qualification(&self) -> Option<String> {
        match (self.degree.as_deref(), self.field.as_deref()) {
            (Some(degree), Some(field)) => Some(format!("{degree} in {field}")),
            (Some(degree), None) => Some(degree.to_string()),
            (None, Some(field)) => Some(field.to_string()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCategory {
    pub name: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub technologies: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub highlights: Vec<String>,
}

impl ProjectItem {
    fn from_value(value: &Value) -> Self {
        ProjectItem {
            name: text(value, "name"),
            description: text(value, "description"),
            url: text(value, "url"),
            technologies: text_list(value, "technologies"),
            start_date: text(value, "startDate"),
            end_date: text(value, "endDate"),
            highlights: text_list(value, "highlights"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificationItem {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageItem {
    pub language: Option<String>,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomItem {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl CustomItem {
    fn from_value(value: &Value) -> Self {
        CustomItem {
            title: first_text(value, &["title", "name", "language"]),
            subtitle: first_text(value, &["subtitle", "issuer", "proficiency"]),
            date: text(value, "date"),
            description: text(value, "description"),
        }
    }
}

/// An item of a section kind with no dedicated renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericItem {
    pub label: Option<String>,
    pub detail: Option<String>,
    pub description: Option<String>,
}

impl GenericItem {
    fn from_value(value: &Value) -> Self {
        if value.is_string() || value.is_number() {
            return GenericItem {
                label: non_empty(coerce_to_string(value)),
                ..GenericItem::default()
            };
        }
        GenericItem {
            label: first_text(
                value,
                &["name", "title", "language", "position", "degree", "institution"],
            ),
            detail: first_text(value, &["subtitle", "company", "issuer", "proficiency"]),
            description: first_text(value, &["description", "text"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    PersonalInfo(PersonalInfo),
    Summary(Summary),
    WorkExperience(Vec<WorkItem>),
    Education(Vec<EducationItem>),
    Skills(Vec<SkillCategory>),
    Projects(Vec<ProjectItem>),
    Certifications(Vec<CertificationItem>),
    Languages(Vec<LanguageItem>),
    Custom(Vec<CustomItem>),
    Generic(Vec<GenericItem>),
}

impl SectionContent {
    pub fn parse(kind: &SectionKind, value: &Value) -> Self {
        match kind {
            SectionKind::PersonalInfo => SectionContent::PersonalInfo(PersonalInfo::from_value(value)),
            SectionKind::Summary => SectionContent::Summary(Summary {
                text: text(value, "text"),
            }),
            SectionKind::WorkExperience => {
                SectionContent::WorkExperience(objects(value).map(WorkItem::from_value).collect())
            }
            SectionKind::Education => {
                SectionContent::Education(objects(value).map(EducationItem::from_value).collect())
            }
            SectionKind::Skills => SectionContent::Skills(
                list(value, "categories")
                    .iter()
                    .filter(|c| c.is_object())
                    .map(|c| SkillCategory {
                        name: text(c, "name"),
                        skills: text_list(c, "skills"),
                    })
                    .collect(),
            ),
            SectionKind::Projects => {
                SectionContent::Projects(objects(value).map(ProjectItem::from_value).collect())
            }
            SectionKind::Certifications => SectionContent::Certifications(
                objects(value)
                    .map(|v| CertificationItem {
                        name: text(v, "name"),
                        issuer: text(v, "issuer"),
                        date: text(v, "date"),
                        url: text(v, "url"),
                    })
                    .collect(),
            ),
            SectionKind::Languages => SectionContent::Languages(
                objects(value)
                    .map(|v| LanguageItem {
                        language: text(v, "language"),
                        proficiency: text(v, "proficiency"),
                    })
                    .collect(),
            ),
            SectionKind::Custom => {
                SectionContent::Custom(objects(value).map(CustomItem::from_value).collect())
            }
            SectionKind::Other(_) => SectionContent::Generic(
                items(value)
                    .iter()
                    .map(GenericItem::from_value)
                    .filter(|item| item != &GenericItem::default())
                    .collect(),
            ),
        }
    }

    /// Whether the section has nothing to render. Personal info is never empty; it
    /// feeds the document header rather than a section body.
    pub fn is_empty(&self) -> bool {
        match self {
            SectionContent::PersonalInfo(_) => false,
            SectionContent::Summary(summary) => summary.text.is_none(),
            SectionContent::Skills(categories) => categories.iter().all(|c| c.skills.is_empty()),
            SectionContent::WorkExperience(items) => items.is_empty(),
            SectionContent::Education(items) => items.is_empty(),
            SectionContent::Projects(items) => items.is_empty(),
            SectionContent::Certifications(items) => items.is_empty(),
            SectionContent::Languages(items) => items.is_empty(),
            SectionContent::Custom(items) => items.is_empty(),
            SectionContent::Generic(items) => items.is_empty(),
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Array(_) | Value::Object(_) => None,
        scalar => non_empty(coerce_to_string(scalar)),
    }
}

fn first_text(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text(value, key))
}

fn flag(value: &Value, key: &str) -> bool {
    match value.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

/// Scalar list entries coerced to text. Empty entries are kept; renderers skip them.
fn text_list(value: &Value, key: &str) -> Vec<String> {
    list(value, key)
        .iter()
        .filter(|v| !v.is_array() && !v.is_object())
        .map(coerce_to_string)
        .collect()
}

fn list<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The `items` list, or the content itself when it was stored as a bare array.
fn items(value: &Value) -> &[Value] {
    match value {
        Value::Array(values) => values,
        _ => list(value, "items"),
    }
}

fn objects(value: &Value) -> impl Iterator<Item = &Value> {
    items(value).iter().filter(|v| v.is_object())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_personal_info_coerces_and_drops_empty_fields() {
        let info = PersonalInfo::from_value(&json!({
            "fullName": "Jane Doe",
            "email": "",
            "phone": 5551234,
            "website": null
        }));
        assert_eq!(info.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(info.email, None);
        assert_eq!(info.phone.as_deref(), Some("5551234"));
        assert_eq!(info.contacts(false), vec!["5551234"]);
    }

    #[test]
    fn test_contacts_include_social_only_when_asked() {
        let info = PersonalInfo::from_value(&json!({
            "email": "a@b.c",
            "github": "gh/jane",
            "linkedin": "in/jane"
        }));
        assert_eq!(info.contacts(false), vec!["a@b.c"]);
        assert_eq!(info.contacts(true), vec!["a@b.c", "in/jane", "gh/jane"]);
    }

    #[test]
    fn test_work_items_parse_current_flag_and_highlights() {
        let content = SectionContent::parse(
            &SectionKind::WorkExperience,
            &json!({ "items": [
                { "position": "Engineer", "company": "Acme", "current": true,
                  "endDate": "2021-01", "highlights": ["Shipped", "", null, 42] },
                "not an item"
            ]}),
        );
        let SectionContent::WorkExperience(items) = content else {
            panic!("expected work items");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].end_label(), Some("Present"));
        assert_eq!(items[0].highlights, vec!["Shipped", "", "", "42"]);
    }

    #[test]
    fn test_malformed_items_parse_as_empty() {
        let content = SectionContent::parse(&SectionKind::Projects, &json!({ "items": "oops" }));
        assert!(content.is_empty());
        let content = SectionContent::parse(&SectionKind::Education, &Value::Null);
        assert!(content.is_empty());
    }

    #[test]
    fn test_skills_emptiness_counts_skills_not_categories() {
        let empty = SectionContent::parse(
            &SectionKind::Skills,
            &json!({ "categories": [{ "name": "X", "skills": [] }] }),
        );
        assert!(empty.is_empty());
        let filled = SectionContent::parse(
            &SectionKind::Skills,
            &json!({ "categories": [{ "name": "X", "skills": ["Y"] }] }),
        );
        assert!(!filled.is_empty());
        assert!(SectionContent::parse(&SectionKind::Skills, &json!({})).is_empty());
    }

    #[test]
    fn test_summary_without_text_is_empty() {
        assert!(SectionContent::parse(&SectionKind::Summary, &json!({ "text": "" })).is_empty());
        assert!(!SectionContent::parse(&SectionKind::Summary, &json!({ "text": "Hi" })).is_empty());
    }

    #[test]
    fn test_unknown_kind_probes_label_fields() {
        let content = SectionContent::parse(
            &SectionKind::Other("awards".to_string()),
            &json!({ "items": [
                { "title": "Best Paper", "issuer": "ACM" },
                { "language": "French" },
                "Dean's List",
                {}
            ]}),
        );
        let SectionContent::Generic(items) = content else {
            panic!("expected generic items");
        };
        let labels: Vec<_> = items.iter().map(|i| i.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("Best Paper"), Some("French"), Some("Dean's List")]);
        assert_eq!(items[0].detail.as_deref(), Some("ACM"));
    }

    #[test]
    fn test_education_qualification() {
        let item = EducationItem {
            degree: Some("BSc".to_string()),
            field: Some("Physics".to_string()),
            ..EducationItem::default()
        };
        assert_eq!(item.qualification().as_deref(), Some("BSc in Physics"));
        assert_eq!(EducationItem::default().qualification(), None);
    }
}
