//! The reference markup every other body style falls back to.

use crate::models::content::{
    CertificationItem, CustomItem, EducationItem, GenericItem, LanguageItem, ProjectItem,
    SkillCategory, Summary, WorkItem,
};
use crate::render::body::{date_range, filled, join_present, BodyCtx, SectionBody};
use crate::render::escape::Html;

pub struct ClassicBody;

impl SectionBody for ClassicBody {}

pub fn summary(w: &mut Html, summary: &Summary, cx: &BodyCtx) {
    let class = format!("{} leading-relaxed whitespace-pre-line", cx.text_class());
    w.element("p", &class, summary.text.as_deref());
}

/// Title on the left, dates on the right.
pub fn title_row(w: &mut Html, title: Option<&str>, dates: Option<&str>, cx: &BodyCtx) {
    if title.is_none() && dates.is_none() {
        return;
    }
    w.raw("<div class=\"flex justify-between items-baseline gap-4\">");
    w.element("h3", cx.title_class(), title);
    let class = format!("{} whitespace-nowrap", cx.meta_class());
    w.element("span", &class, dates);
    w.raw("</div>");
}

pub fn description(w: &mut Html, text: Option<&str>, cx: &BodyCtx) {
    let class = format!("{} mt-1 whitespace-pre-line", cx.text_class());
    w.element("p", &class, text);
}

pub fn bullet_list(w: &mut Html, entries: &[String], cx: &BodyCtx) {
    let mut entries = filled(entries).peekable();
    if entries.peek().is_none() {
        return;
    }
    let class = format!("list-disc ml-5 mt-1 space-y-0.5 {}", cx.text_class());
    w.open("ul", &class);
    for entry in entries {
        w.element("li", "", Some(entry));
    }
    w.close("ul");
}

/// `a, b, c` with every entry in its own span.
pub fn inline_list(w: &mut Html, entries: &[String], class: &str) {
    for (i, entry) in filled(entries).enumerate() {
        if i > 0 {
            w.raw(", ");
        }
        w.element("span", class, Some(entry));
    }
}

pub fn work(w: &mut Html, items: &[WorkItem], cx: &BodyCtx) {
    for item in items {
        w.raw("<div data-item class=\"mb-4\">");
        let dates = date_range(item.start_date.as_deref(), item.end_label());
        title_row(w, item.position.as_deref(), dates.as_deref(), cx);
        let employer = join_present(&[item.company.as_deref(), item.location.as_deref()], " · ");
        w.element("div", cx.text_class(), employer.as_deref());
        description(w, item.description.as_deref(), cx);
        bullet_list(w, &item.highlights, cx);
        w.raw("</div>");
    }
}

pub fn education(w: &mut Html, items: &[EducationItem], cx: &BodyCtx) {
    for item in items {
        w.raw("<div data-item class=\"mb-4\">");
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref());
        let qualification = item.qualification();
        title_row(w, qualification.as_deref(), dates.as_deref(), cx);
        let school = join_present(&[item.institution.as_deref(), item.location.as_deref()], " · ");
        w.element("div", cx.text_class(), school.as_deref());
        if let Some(gpa) = &item.gpa {
            w.element("div", cx.meta_class(), Some(format!("GPA: {gpa}").as_str()));
        }
        description(w, item.description.as_deref(), cx);
        bullet_list(w, &item.highlights, cx);
        w.raw("</div>");
    }
}

pub fn skills(w: &mut Html, categories: &[SkillCategory], cx: &BodyCtx) {
    for category in categories {
        if filled(&category.skills).next().is_none() {
            continue;
        }
        let class = format!("mb-1 {}", cx.text_class());
        w.raw("<div data-item class=\"").raw(&class).raw("\">");
        if let Some(name) = &category.name {
            w.open("span", cx.title_class()).text(name).raw(": ").close("span");
        }
        inline_list(w, &category.skills, "skill");
        w.raw("</div>");
    }
}

pub fn projects(w: &mut Html, items: &[ProjectItem], cx: &BodyCtx) {
    for item in items {
        w.raw("<div data-item class=\"mb-4\">");
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref());
        title_row(w, item.name.as_deref(), dates.as_deref(), cx);
        w.element("div", cx.meta_class(), item.url.as_deref());
        description(w, item.description.as_deref(), cx);
        if filled(&item.technologies).next().is_some() {
            let class = format!("{} mt-1", cx.meta_class());
            w.open("p", &class).raw("Technologies: ");
            inline_list(w, &item.technologies, "technology");
            w.close("p");
        }
        bullet_list(w, &item.highlights, cx);
        w.raw("</div>");
    }
}

pub fn certifications(w: &mut Html, items: &[CertificationItem], cx: &BodyCtx) {
    for item in items {
        w.raw("<div data-item class=\"mb-2\">");
        title_row(w, item.name.as_deref(), item.date.as_deref(), cx);
        w.element("div", cx.text_class(), item.issuer.as_deref());
        w.element("div", cx.meta_class(), item.url.as_deref());
        w.raw("</div>");
    }
}

pub fn languages(w: &mut Html, items: &[LanguageItem], cx: &BodyCtx) {
    for item in items {
        w.raw("<div data-item class=\"flex justify-between gap-4 mb-1\">");
        let class = format!("{} font-medium", cx.text_class());
        w.element("span", &class, item.language.as_deref());
        w.element("span", cx.meta_class(), item.proficiency.as_deref());
        w.raw("</div>");
    }
}

pub fn custom(w: &mut Html, items: &[CustomItem], cx: &BodyCtx) {
    for item in items {
        w.raw("<div data-item class=\"mb-3\">");
        title_row(w, item.title.as_deref(), item.date.as_deref(), cx);
        w.element("div", cx.text_class(), item.subtitle.as_deref());
        description(w, item.description.as_deref(), cx);
        w.raw("</div>");
    }
}

pub fn generic(w: &mut Html, items: &[GenericItem], cx: &BodyCtx) {
    for item in items {
        w.raw("<div data-item class=\"mb-2\">");
        w.element("h3", cx.title_class(), item.label.as_deref());
        w.element("div", cx.text_class(), item.detail.as_deref());
        description(w, item.description.as_deref(), cx);
        w.raw("</div>");
    }
}
