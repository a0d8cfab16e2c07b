use crate::models::content::{PersonalInfo, SectionContent};
use crate::models::resume::{Resume, Section, SectionKind};

pub fn is_section_empty(section: &Section) -> bool {
    section.content.is_empty()
}

/// Sections that get a titled block in HTML output: visible, non-empty, and not the
/// personal info section (which feeds the header). Stored order is preserved.
pub fn get_visible_sections(resume: &Resume) -> Vec<&Section> {
    resume
        .sections
        .iter()
        .filter(|s| s.visible && s.kind != SectionKind::PersonalInfo && !is_section_empty(s))
        .collect()
}

/// Content of the personal info section, or an all-empty record when there is none.
pub fn get_personal_info(resume: &Resume) -> PersonalInfo {
    resume
        .sections
        .iter()
        .find_map(|s| match &s.content {
            SectionContent::PersonalInfo(info) => Some(info.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::{resume, section};
    use serde_json::json;

    #[test]
    fn test_visible_sections_exclude_personal_info_hidden_and_empty() {
        let mut hidden = section("summary", "Hidden", json!({ "text": "secret" }));
        hidden.visible = false;
        let doc = resume(
            "classic",
            vec![
                section("personal_info", "", json!({ "fullName": "Jane" })),
                hidden,
                section("skills", "Empty skills", json!({ "categories": [{ "name": "X", "skills": [] }] })),
                section("skills", "Skills", json!({ "categories": [{ "name": "X", "skills": ["Y"] }] })),
                section("work_experience", "No items", json!({})),
                section("summary", "Summary", json!({ "text": "Hello" })),
            ],
        );

        let titles: Vec<_> = get_visible_sections(&doc).iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Skills", "Summary"]);
    }

    #[test]
    fn test_visible_sections_keep_stored_order() {
        let mut late = section("summary", "B", json!({ "text": "b" }));
        late.sort_order = 9;
        let mut early = section("summary", "A", json!({ "text": "a" }));
        early.sort_order = 1;
        let doc = resume("classic", vec![late, early]);
        let titles: Vec<_> = get_visible_sections(&doc).iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_personal_info_defaults_when_absent() {
        let doc = resume("classic", vec![section("summary", "S", json!({ "text": "x" }))]);
        assert_eq!(get_personal_info(&doc), PersonalInfo::default());

        let doc = resume("classic", vec![section("personal_info", "", json!({ "fullName": "Jane" }))]);
        assert_eq!(get_personal_info(&doc).full_name.as_deref(), Some("Jane"));
    }
}
