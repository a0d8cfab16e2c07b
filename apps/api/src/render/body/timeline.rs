//! Work and education hung off a vertical accent rule.

use crate::models::content::{EducationItem, WorkItem};
use crate::render::body::classic::{bullet_list, description};
use crate::render::body::{date_range, join_present, BodyCtx, SectionBody};
use crate::render::escape::Html;

pub struct TimelineBody;

impl SectionBody for TimelineBody {
    fn work(&self, w: &mut Html, items: &[WorkItem], cx: &BodyCtx) {
        open_rail(w, cx);
        for item in items {
            let dates = date_range(item.start_date.as_deref(), item.end_label());
            open_entry(w, dates.as_deref(), cx);
            w.element("h3", cx.title_class(), item.position.as_deref());
            let employer = join_present(&[item.company.as_deref(), item.location.as_deref()], " · ");
            w.element("div", cx.text_class(), employer.as_deref());
            description(w, item.description.as_deref(), cx);
            bullet_list(w, &item.highlights, cx);
            w.raw("</div>");
        }
        w.raw("</div>");
    }

    fn education(&self, w: &mut Html, items: &[EducationItem], cx: &BodyCtx) {
        open_rail(w, cx);
        for item in items {
            let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref());
            open_entry(w, dates.as_deref(), cx);
            let qualification = item.qualification();
            w.element("h3", cx.title_class(), qualification.as_deref());
            w.element("div", cx.text_class(), item.institution.as_deref());
            if let Some(gpa) = &item.gpa {
                w.element("div", cx.meta_class(), Some(format!("GPA: {gpa}").as_str()));
            }
            description(w, item.description.as_deref(), cx);
            bullet_list(w, &item.highlights, cx);
            w.raw("</div>");
        }
        w.raw("</div>");
    }
}

fn open_rail(w: &mut Html, cx: &BodyCtx) {
    w.raw("<div class=\"relative border-l-2 pl-5 ml-1\" style=\"border-color: ")
        .raw(cx.accent)
        .raw("\">");
}

/// Opens an entry with its dot and the date caption above the title.
fn open_entry(w: &mut Html, dates: Option<&str>, cx: &BodyCtx) {
    w.raw("<div data-item class=\"relative mb-5\">");
    w.raw("<span class=\"absolute -left-[27px] top-1.5 w-3 h-3 rounded-full border-2 border-white\" style=\"background-color: ")
        .raw(cx.accent)
        .raw("\"></span>");
    let class = format!("{} text-xs uppercase tracking-wide", cx.meta_class());
    w.element("div", &class, dates);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_puts_dates_before_title() {
        let cx = BodyCtx { accent: "#0d9488", tint: "#ccfbf1", inverted: false };
        let mut w = Html::new();
        TimelineBody.work(
            &mut w,
            &[WorkItem {
                position: Some("Lead".into()),
                start_date: Some("2019".into()),
                current: true,
                ..WorkItem::default()
            }],
            &cx,
        );
        let html = w.finish();
        let dates = html.find("2019 – Present").unwrap();
        let title = html.find("Lead").unwrap();
        assert!(dates < title);
        assert!(html.contains("border-color: #0d9488"));
    }
}
