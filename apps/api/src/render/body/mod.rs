//! Per-section-kind body renderers.
//!
//! A body style implements `SectionBody`, overriding only the kinds it styles; every
//! other kind falls through to the classic markup via the trait's default methods.

pub mod chips;
pub mod classic;
pub mod compact;
pub mod infographic;
pub mod timeline;

use crate::models::content::{
    CertificationItem, CustomItem, EducationItem, GenericItem, LanguageItem, ProjectItem,
    SectionContent, SkillCategory, Summary, WorkItem,
};
use crate::render::escape::Html;

/// Colors and contrast mode a body renders with.
#[derive(Debug, Clone, Copy)]
pub struct BodyCtx {
    pub accent: &'static str,
    pub tint: &'static str,
    /// Rendering on dark chrome; text classes switch to light shades.
    pub inverted: bool,
}

impl BodyCtx {
    pub fn title_class(&self) -> &'static str {
        if self.inverted {
            "font-semibold text-white"
        } else {
            "font-semibold text-gray-900"
        }
    }

    pub fn meta_class(&self) -> &'static str {
        if self.inverted {
            "text-sm text-gray-300"
        } else {
            "text-sm text-gray-500"
        }
    }

    pub fn text_class(&self) -> &'static str {
        if self.inverted {
            "text-sm text-gray-100"
        } else {
            "text-sm text-gray-700"
        }
    }
}

pub trait SectionBody: Sync {
    fn summary(&self, w: &mut Html, summary: &Summary, cx: &BodyCtx) {
        classic::summary(w, summary, cx)
    }

    fn work(&self, w: &mut Html, items: &[WorkItem], cx: &BodyCtx) {
        classic::work(w, items, cx)
    }

    fn education(&self, w: &mut Html, items: &[EducationItem], cx: &BodyCtx) {
        classic::education(w, items, cx)
    }

    fn skills(&self, w: &mut Html, categories: &[SkillCategory], cx: &BodyCtx) {
        classic::skills(w, categories, cx)
    }

    fn projects(&self, w: &mut Html, items: &[ProjectItem], cx: &BodyCtx) {
        classic::projects(w, items, cx)
    }

    fn certifications(&self, w: &mut Html, items: &[CertificationItem], cx: &BodyCtx) {
        classic::certifications(w, items, cx)
    }

    fn languages(&self, w: &mut Html, items: &[LanguageItem], cx: &BodyCtx) {
        classic::languages(w, items, cx)
    }

    fn custom(&self, w: &mut Html, items: &[CustomItem], cx: &BodyCtx) {
        classic::custom(w, items, cx)
    }

    fn generic(&self, w: &mut Html, items: &[GenericItem], cx: &BodyCtx) {
        classic::generic(w, items, cx)
    }
}

/// Renders a section's content (never its title) with the given body style.
pub fn render_section_body(body: &dyn SectionBody, content: &SectionContent, cx: &BodyCtx) -> String {
    let mut w = Html::new();
    match content {
        // The header block owns personal info.
        SectionContent::PersonalInfo(_) => {}
        SectionContent::Summary(summary) => body.summary(&mut w, summary, cx),
        SectionContent::WorkExperience(items) => body.work(&mut w, items, cx),
        SectionContent::Education(items) => body.education(&mut w, items, cx),
        SectionContent::Skills(categories) => body.skills(&mut w, categories, cx),
        SectionContent::Projects(items) => body.projects(&mut w, items, cx),
        SectionContent::Certifications(items) => body.certifications(&mut w, items, cx),
        SectionContent::Languages(items) => body.languages(&mut w, items, cx),
        SectionContent::Custom(items) => body.custom(&mut w, items, cx),
        SectionContent::Generic(items) => body.generic(&mut w, items, cx),
    }
    w.finish()
}

/// `start – end`, or whichever end is known.
pub fn date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    join_present(&[start, end], " – ")
}

/// Joins the present, non-empty parts with `sep`; `None` when nothing is left.
pub fn join_present(parts: &[Option<&str>], sep: &str) -> Option<String> {
    let present: Vec<&str> = parts
        .iter()
        .filter_map(|p| *p)
        .filter(|p| !p.is_empty())
        .collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(sep))
    }
}

/// List entries worth rendering; empty strings are dropped.
pub fn filled(values: &[String]) -> impl Iterator<Item = &str> {
    values.iter().map(String::as_str).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SectionKind;
    use serde_json::json;

    const CX: BodyCtx = BodyCtx {
        accent: "#2563eb",
        tint: "#dbeafe",
        inverted: false,
    };

    #[test]
    fn test_date_range() {
        assert_eq!(date_range(Some("2020"), Some("Present")).as_deref(), Some("2020 – Present"));
        assert_eq!(date_range(None, Some("2021")).as_deref(), Some("2021"));
        assert_eq!(date_range(Some(""), None), None);
    }

    #[test]
    fn test_personal_info_has_no_body() {
        let content = SectionContent::parse(&SectionKind::PersonalInfo, &json!({ "fullName": "X" }));
        assert_eq!(render_section_body(&classic::ClassicBody, &content, &CX), "");
    }

    #[test]
    fn test_every_style_escapes_user_text() {
        let styles: [&dyn SectionBody; 5] = [
            &classic::ClassicBody,
            &chips::ChipsBody,
            &timeline::TimelineBody,
            &compact::CompactBody,
            &infographic::InfographicBody,
        ];
        let contents = [
            SectionContent::parse(&SectionKind::Summary, &json!({ "text": "<b>bold</b>" })),
            SectionContent::parse(&SectionKind::WorkExperience, &json!({ "items": [{ "position": "<b>bold</b>", "highlights": ["<b>bold</b>"] }] })),
            SectionContent::parse(&SectionKind::Education, &json!({ "items": [{ "degree": "<b>bold</b>" }] })),
            SectionContent::parse(&SectionKind::Skills, &json!({ "categories": [{ "name": "<b>bold</b>", "skills": ["<b>bold</b>"] }] })),
            SectionContent::parse(&SectionKind::Projects, &json!({ "items": [{ "name": "<b>bold</b>", "technologies": ["<b>bold</b>"] }] })),
            SectionContent::parse(&SectionKind::Certifications, &json!({ "items": [{ "name": "<b>bold</b>" }] })),
            SectionContent::parse(&SectionKind::Languages, &json!({ "items": [{ "language": "<b>bold</b>", "proficiency": "<b>bold</b>" }] })),
            SectionContent::parse(&SectionKind::Custom, &json!({ "items": [{ "title": "<b>bold</b>" }] })),
            SectionContent::parse(&SectionKind::Other("x".into()), &json!({ "items": [{ "name": "<b>bold</b>" }] })),
        ];
        for style in styles {
            for content in &contents {
                let html = render_section_body(style, content, &CX);
                assert!(!html.contains("<b>"), "unescaped text in {html}");
                assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"), "missing text in {html}");
            }
        }
    }

    #[test]
    fn test_every_style_skips_empty_list_entries() {
        let styles: [&dyn SectionBody; 5] = [
            &classic::ClassicBody,
            &chips::ChipsBody,
            &timeline::TimelineBody,
            &compact::CompactBody,
            &infographic::InfographicBody,
        ];
        let work = SectionContent::parse(
            &SectionKind::WorkExperience,
            &json!({ "items": [{ "position": "Dev", "highlights": ["", ""] }] }),
        );
        let projects = SectionContent::parse(
            &SectionKind::Projects,
            &json!({ "items": [{ "name": "P", "technologies": [""] }] }),
        );
        for style in styles {
            assert!(!render_section_body(style, &work, &CX).contains("<li"));
            let html = render_section_body(style, &projects, &CX);
            assert!(!html.contains("data-chip"), "empty chip in {html}");
            assert!(!html.contains("Technologies"), "empty technology list in {html}");
        }
    }
}
