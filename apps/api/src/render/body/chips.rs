//! Skills, technologies and languages as rounded tags.

use crate::models::content::{LanguageItem, ProjectItem, SkillCategory};
use crate::render::body::classic::{bullet_list, description, title_row};
use crate::render::body::{date_range, filled, join_present, BodyCtx, SectionBody};
use crate::render::escape::Html;

pub struct ChipsBody;

impl SectionBody for ChipsBody {
    fn skills(&self, w: &mut Html, categories: &[SkillCategory], cx: &BodyCtx) {
        for category in categories {
            if filled(&category.skills).next().is_none() {
                continue;
            }
            w.raw("<div data-item class=\"mb-3\">");
            let class = format!("{} text-xs uppercase tracking-wide mb-1", cx.meta_class());
            w.element("div", &class, category.name.as_deref());
            chip_row(w, &category.skills, cx);
            w.raw("</div>");
        }
    }

    fn projects(&self, w: &mut Html, items: &[ProjectItem], cx: &BodyCtx) {
        for item in items {
            w.raw("<div data-item class=\"mb-4\">");
            let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref());
            title_row(w, item.name.as_deref(), dates.as_deref(), cx);
            w.element("div", cx.meta_class(), item.url.as_deref());
            description(w, item.description.as_deref(), cx);
            chip_row(w, &item.technologies, cx);
            bullet_list(w, &item.highlights, cx);
            w.raw("</div>");
        }
    }

    fn languages(&self, w: &mut Html, items: &[LanguageItem], cx: &BodyCtx) {
        w.raw("<div class=\"flex flex-wrap\">");
        for item in items {
            let label = join_present(&[item.language.as_deref(), item.proficiency.as_deref()], " · ");
            if let Some(label) = label {
                w.raw("<div data-item>");
                chip(w, &label, cx);
                w.raw("</div>");
            }
        }
        w.raw("</div>");
    }
}

pub fn chip(w: &mut Html, text: &str, cx: &BodyCtx) {
    let style = if cx.inverted {
        "background-color: rgba(255, 255, 255, 0.15); color: #ffffff".to_string()
    } else {
        format!("background-color: {}; color: {}", cx.tint, cx.accent)
    };
    w.raw("<span data-chip class=\"inline-block px-2 py-0.5 mr-1 mb-1 text-xs font-medium rounded-full\" style=\"")
        .raw(&style)
        .raw("\">")
        .text(text)
        .raw("</span>");
}

/// A wrapping row of chips; nothing at all when every entry is empty.
pub fn chip_row(w: &mut Html, entries: &[String], cx: &BodyCtx) {
    let mut entries = filled(entries).peekable();
    if entries.peek().is_none() {
        return;
    }
    w.raw("<div class=\"flex flex-wrap mt-1\">");
    for entry in entries {
        chip(w, entry, cx);
    }
    w.raw("</div>");
}
