//! Dense one-line entries for templates that trade whitespace for content.

use crate::models::content::{CertificationItem, EducationItem, SkillCategory, WorkItem};
use crate::render::body::classic::bullet_list;
use crate::render::body::{date_range, filled, join_present, BodyCtx, SectionBody};
use crate::render::escape::Html;

pub struct CompactBody;

impl SectionBody for CompactBody {
    fn work(&self, w: &mut Html, items: &[WorkItem], cx: &BodyCtx) {
        for item in items {
            let dates = date_range(item.start_date.as_deref(), item.end_label());
            w.raw("<div data-item class=\"mb-2\">");
            headline(
                w,
                item.position.as_deref(),
                join_present(&[item.company.as_deref(), item.location.as_deref()], ", ").as_deref(),
                dates.as_deref(),
                cx,
            );
            let class = format!("{} whitespace-pre-line", cx.text_class());
            w.element("p", &class, item.description.as_deref());
            bullet_list(w, &item.highlights, cx);
            w.raw("</div>");
        }
    }

    fn education(&self, w: &mut Html, items: &[EducationItem], cx: &BodyCtx) {
        for item in items {
            let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref());
            let qualification = item.qualification();
            let gpa = item.gpa.as_ref().map(|gpa| format!("GPA {gpa}"));
            w.raw("<div data-item class=\"mb-2\">");
            headline(
                w,
                qualification.as_deref(),
                join_present(&[item.institution.as_deref(), gpa.as_deref()], ", ").as_deref(),
                dates.as_deref(),
                cx,
            );
            w.raw("</div>");
        }
    }

    fn skills(&self, w: &mut Html, categories: &[SkillCategory], cx: &BodyCtx) {
        for category in categories {
            if filled(&category.skills).next().is_none() {
                continue;
            }
            w.raw("<p data-item class=\"").raw(cx.text_class()).raw("\">");
            if let Some(name) = &category.name {
                w.open("span", cx.title_class()).text(name).raw(": ").close("span");
            }
            for (i, skill) in filled(&category.skills).enumerate() {
                if i > 0 {
                    w.raw(" · ");
                }
                w.element("span", "skill", Some(skill));
            }
            w.raw("</p>");
        }
    }

    fn certifications(&self, w: &mut Html, items: &[CertificationItem], cx: &BodyCtx) {
        for item in items {
            w.raw("<p data-item class=\"").raw(cx.text_class()).raw("\">");
            w.element("span", cx.title_class(), item.name.as_deref());
            let detail = join_present(&[item.issuer.as_deref(), item.date.as_deref()], ", ");
            if let Some(detail) = detail {
                w.raw(" <span class=\"").raw(cx.meta_class()).raw("\">(").text(&detail).raw(")</span>");
            }
            w.raw("</p>");
        }
    }
}

/// `Title, subtitle  (dates)` on one line.
fn headline(w: &mut Html, title: Option<&str>, subtitle: Option<&str>, dates: Option<&str>, cx: &BodyCtx) {
    w.raw("<p class=\"").raw(cx.text_class()).raw("\">");
    w.element("span", cx.title_class(), title);
    if let Some(subtitle) = subtitle {
        if title.is_some() {
            w.raw(", ");
        }
        w.text(subtitle);
    }
    if let Some(dates) = dates {
        w.raw(" <span class=\"").raw(cx.meta_class()).raw("\">(").text(dates).raw(")</span>");
    }
    w.raw("</p>");
}

#[cfg(test)]
mod tests {
    use super::*;

    const CX: BodyCtx = BodyCtx { accent: "#000", tint: "#fff", inverted: false };

    #[test]
    fn test_work_fits_on_one_line() {
        let mut w = Html::new();
        CompactBody.work(
            &mut w,
            &[WorkItem {
                position: Some("Engineer".into()),
                company: Some("Acme".into()),
                start_date: Some("2020".into()),
                current: true,
                ..WorkItem::default()
            }],
            &CX,
        );
        let html = w.finish();
        assert!(html.contains("Engineer</span>, Acme <span class=\"text-sm text-gray-500\">(2020 – Present)</span>"));
    }

    #[test]
    fn test_skills_join_with_middle_dots() {
        let mut w = Html::new();
        CompactBody.skills(
            &mut w,
            &[SkillCategory { name: None, skills: vec!["A".into(), "".into(), "B".into()] }],
            &CX,
        );
        assert!(w.finish().contains("<span class=\"skill\">A</span> · <span class=\"skill\">B</span>"));
    }
}
