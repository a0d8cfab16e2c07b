//! Proficiency bars for languages, outlined tags for skills.

use crate::models::content::{LanguageItem, SkillCategory};
use crate::render::body::{filled, BodyCtx, SectionBody};
use crate::render::escape::Html;

pub struct InfographicBody;

impl SectionBody for InfographicBody {
    fn skills(&self, w: &mut Html, categories: &[SkillCategory], cx: &BodyCtx) {
        for category in categories {
            if filled(&category.skills).next().is_none() {
                continue;
            }
            w.raw("<div data-item class=\"mb-3\">");
            w.element("div", cx.title_class(), category.name.as_deref());
            w.raw("<div class=\"flex flex-wrap mt-1\">");
            for skill in filled(&category.skills) {
                w.raw("<span data-chip class=\"inline-block px-2 py-0.5 mr-1 mb-1 text-xs rounded border-2\" style=\"border-color: ")
                    .raw(cx.accent)
                    .raw("\">")
                    .text(skill)
                    .raw("</span>");
            }
            w.raw("</div></div>");
        }
    }

    fn languages(&self, w: &mut Html, items: &[LanguageItem], cx: &BodyCtx) {
        for item in items {
            w.raw("<div data-item class=\"mb-2\">");
            w.raw("<div class=\"flex justify-between gap-4\">");
            let class = format!("{} font-medium", cx.text_class());
            w.element("span", &class, item.language.as_deref());
            w.element("span", cx.meta_class(), item.proficiency.as_deref());
            w.raw("</div>");
            let track = if cx.inverted { "bg-white/20" } else { "bg-gray-200" };
            w.raw("<div class=\"h-1.5 mt-1 rounded-full ").raw(track).raw("\">");
            let percent = proficiency_percent(item.proficiency.as_deref());
            w.raw(&format!(
                "<div class=\"h-1.5 rounded-full\" style=\"width: {percent}%; background-color: {}\"></div>",
                cx.accent
            ));
            w.raw("</div></div>");
        }
    }
}

/// Bar fill for a free-text proficiency, matching CEFR levels and common wording.
pub fn proficiency_percent(proficiency: Option<&str>) -> u8 {
    let Some(level) = proficiency.map(str::to_lowercase) else {
        return 50;
    };
    let has = |words: &[&str]| words.iter().any(|w| level.contains(w));
    if has(&["native", "bilingual", "mother"]) {
        100
    } else if has(&["fluent", "c2"]) {
        90
    } else if has(&["advanced", "c1"]) {
        80
    } else if has(&["professional", "upper", "b2"]) {
        70
    } else if has(&["intermediate", "b1"]) {
        60
    } else if has(&["conversational", "elementary", "a2"]) {
        40
    } else if has(&["basic", "beginner", "a1"]) {
        25
    } else {
        50
    }
}
