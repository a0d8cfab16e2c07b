//! Page shell: header block, section loop and layout regions for one template.
//!
//! Markup contract relied on by the theme and print stylesheets:
//! - every section sits in `<section data-section="<kind>">`, every entry in `[data-item]`;
//! - containers painted with dark chrome carry `data-chrome="dark"`;
//! - the fragment root is `.resume-template` and never includes `<html>`/`<body>`.

use crate::models::content::PersonalInfo;
use crate::models::resume::{Resume, Section, SectionKind};
use crate::render::accessors::{get_personal_info, get_visible_sections};
use crate::render::body::{render_section_body, BodyCtx};
use crate::render::escape::{Escape, Html};
use crate::render::templates::{HeaderStyle, HeadingStyle, Layout, Side, Template};

/// Kinds that move into the narrow column of a sidebar layout.
pub const SIDEBAR_KINDS: &[SectionKind] = &[
    SectionKind::Skills,
    SectionKind::Languages,
    SectionKind::Certifications,
    SectionKind::Custom,
];

pub fn is_sidebar_section(section: &Section) -> bool {
    SIDEBAR_KINDS.contains(&section.kind)
}

/// Renders `resume` with `template` into a self-contained HTML fragment.
pub fn render_template(template: &Template, resume: &Resume) -> String {
    let info = get_personal_info(resume);
    let sections = get_visible_sections(resume);
    let full_bleed = template.is_background();
    let cx = BodyCtx {
        accent: template.palette.accent,
        tint: template.palette.tint,
        inverted: false,
    };

    let mut w = Html::new();
    w.raw(&format!(
        "<div class=\"resume-template template-{name} {font} bg-white text-gray-800\" data-template=\"{name}\">",
        name = template.name,
        font = template.font,
    ));

    match template.layout {
        Layout::Single => {
            render_header(&mut w, template, &info, full_bleed);
            open_main(&mut w, full_bleed, "");
            for section in &sections {
                render_section(&mut w, template, section, &cx, SectionFrame::Plain);
            }
            w.raw("</main>");
        }
        Layout::ZigZag => {
            render_header(&mut w, template, &info, full_bleed);
            open_main(&mut w, full_bleed, "");
            for (index, section) in sections.iter().enumerate() {
                let side = if index % 2 == 0 { Side::Left } else { Side::Right };
                render_section(&mut w, template, section, &cx, SectionFrame::Aligned(side));
            }
            w.raw("</main>");
        }
        Layout::Mosaic { colors, columns } => {
            render_header(&mut w, template, &info, full_bleed);
            let grid = if columns > 1 {
                "grid grid-cols-2 gap-4"
            } else {
                "grid grid-cols-1 gap-5"
            };
            open_main(&mut w, full_bleed, grid);
            for (index, section) in sections.iter().enumerate() {
                let palette = colors.get(index % colors.len().max(1)).copied().unwrap_or(template.palette);
                let tile_cx = BodyCtx { accent: palette.accent, tint: palette.tint, ..cx };
                render_section(&mut w, template, section, &tile_cx, SectionFrame::Tile(palette.accent));
            }
            w.raw("</main>");
        }
        Layout::Sidebar {
            side,
            background,
            dark,
            header_in_sidebar,
        } => {
            let (aside, main): (Vec<&Section>, Vec<&Section>) =
                sections.iter().copied().partition(|s| is_sidebar_section(s));
            let direction = match side {
                Side::Left => "flex",
                Side::Right => "flex flex-row-reverse",
            };
            w.raw("<div class=\"").raw(direction).raw(" min-h-[1056px]\">");

            let aside_cx = BodyCtx { inverted: dark, ..cx };
            w.raw("<aside data-region=\"sidebar\"");
            if dark {
                w.raw(" data-chrome=\"dark\"");
            }
            w.raw(&format!(
                " class=\"w-1/3 shrink-0 px-6 py-8{}\" style=\"background: {background}\">",
                if dark { " text-white" } else { "" }
            ));
            if header_in_sidebar {
                render_sidebar_profile(&mut w, template, &info, dark);
            }
            for section in &aside {
                render_section(&mut w, template, section, &aside_cx, SectionFrame::Plain);
            }
            w.raw("</aside>");

            w.raw("<main data-region=\"main\" class=\"flex-1 px-8 py-8\">");
            if !header_in_sidebar {
                render_header(&mut w, template, &info, false);
            }
            for section in &main {
                render_section(&mut w, template, section, &cx, SectionFrame::Plain);
            }
            w.raw("</main></div>");
        }
    }

    w.raw("</div>");
    w.finish()
}

fn open_main(w: &mut Html, full_bleed: bool, extra: &str) {
    let mut class = String::new();
    if full_bleed {
        class.push_str("px-10 py-8");
    }
    if !extra.is_empty() {
        if !class.is_empty() {
            class.push(' ');
        }
        class.push_str(extra);
    }
    w.raw("<main data-region=\"main\"");
    if !class.is_empty() {
        w.raw(" class=\"").raw(&class).raw("\"");
    }
    w.raw(">");
}

#[derive(Debug, Clone, Copy)]
enum SectionFrame {
    Plain,
    Aligned(Side),
    Tile(&'static str),
}

fn render_section(w: &mut Html, template: &Template, section: &Section, cx: &BodyCtx, frame: SectionFrame) {
    let kind = Escape(section.kind.as_str());
    match frame {
        SectionFrame::Plain => {
            w.raw(&format!("<section data-section=\"{kind}\" class=\"resume-section mb-6\">"));
        }
        SectionFrame::Aligned(Side::Left) => {
            w.raw(&format!(
                "<section data-section=\"{kind}\" data-align=\"left\" class=\"resume-section mb-6 text-left border-l-4 pl-4 mr-16\" style=\"border-color: {}\">",
                cx.accent
            ));
        }
        SectionFrame::Aligned(Side::Right) => {
            w.raw(&format!(
                "<section data-section=\"{kind}\" data-align=\"right\" class=\"resume-section mb-6 text-right border-r-4 pr-4 ml-16\" style=\"border-color: {}\">",
                cx.accent
            ));
        }
        SectionFrame::Tile(color) => {
            w.raw(&format!(
                "<section data-section=\"{kind}\" class=\"resume-section p-4 rounded-lg bg-gray-50\" style=\"border-top: 4px solid {color}\">"
            ));
        }
    }

    let tint = match frame {
        SectionFrame::Tile(color) => Some(color),
        _ => None,
    };
    render_heading(w, template.heading, &section.title, cx, tint);
    let body = render_section_body(template.body.renderer(), &section.content, cx);
    w.raw(&body);
    w.raw("</section>");
}

/// Section heading. `tint` recolors the heading for palette-indexed layouts.
fn render_heading(w: &mut Html, style: HeadingStyle, title: &str, cx: &BodyCtx, tint: Option<&str>) {
    if title.is_empty() {
        return;
    }
    let ink = if cx.inverted { "text-white" } else { "text-gray-900" };
    let rule = if cx.inverted { "border-white/30" } else { "border-gray-300" };
    match style {
        HeadingStyle::Underline => {
            w.raw(&format!(
                "<h2 class=\"text-sm font-bold uppercase tracking-wider {ink} border-b {rule} pb-1 mb-3\""
            ));
            color_style(w, tint);
        }
        HeadingStyle::Plain => {
            w.raw(&format!("<h2 class=\"text-xl font-semibold {ink} mb-3\""));
            color_style(w, tint);
        }
        HeadingStyle::Bar => {
            w.raw(&format!(
                "<h2 class=\"text-lg font-bold {ink} mb-3 pl-3 border-l-4\" style=\"border-color: {}",
                tint.unwrap_or(cx.accent)
            ));
            if let Some(color) = tint {
                w.raw("; color: ").raw(color);
            }
            w.raw("\"");
        }
        HeadingStyle::Pill => {
            w.raw(&format!(
                "<h2 class=\"inline-block text-xs font-bold uppercase tracking-wider text-white px-3 py-1 rounded mb-3\" style=\"background: {}\"",
                tint.unwrap_or(cx.accent)
            ));
        }
        HeadingStyle::Caps => {
            let muted = if cx.inverted { "text-gray-300" } else { "text-gray-500" };
            w.raw(&format!(
                "<h2 class=\"text-xs font-semibold uppercase tracking-[0.2em] {muted} mb-3\""
            ));
            color_style(w, tint);
        }
    }
    w.raw(">").text(title).raw("</h2>");
}

fn color_style(w: &mut Html, color: Option<&str>) {
    if let Some(color) = color {
        w.raw(" style=\"color: ").raw(color).raw("\"");
    }
}

/// Avatar image, only for http(s) and inline image sources.
fn render_avatar(w: &mut Html, info: &PersonalInfo, class: &str) {
    let Some(src) = info.avatar.as_deref() else {
        return;
    };
    let allowed = ["https://", "http://", "data:image/"];
    if !allowed.iter().any(|scheme| src.starts_with(scheme)) {
        return;
    }
    w.raw(&format!(
        "<img src=\"{}\" alt=\"{}\" class=\"{class}\">",
        Escape(src),
        Escape(info.full_name.as_deref().unwrap_or(""))
    ));
}

fn render_contacts_inline(w: &mut Html, contacts: &[&str], class: &str, separator: &str) {
    if contacts.is_empty() {
        return;
    }
    w.open("div", class);
    for (i, contact) in contacts.iter().enumerate() {
        if i > 0 {
            w.raw(separator);
        }
        w.element("span", "contact", Some(contact));
    }
    w.close("div");
}

fn render_contacts_stacked(w: &mut Html, contacts: &[&str], class: &str) {
    if contacts.is_empty() {
        return;
    }
    w.open("ul", class);
    for contact in contacts {
        w.element("li", "contact", Some(contact));
    }
    w.close("ul");
}

fn render_header(w: &mut Html, template: &Template, info: &PersonalInfo, full_bleed: bool) {
    let contacts = info.contacts(template.social);
    let name = info.full_name.as_deref();
    let title = info.job_title.as_deref();

    match template.header {
        HeaderStyle::Centered => {
            w.raw("<header data-header class=\"text-center pb-4 mb-6 border-b border-gray-300\">");
            render_avatar(w, info, "w-20 h-20 rounded-full object-cover mx-auto mb-3");
            w.element("h1", "text-3xl font-bold text-gray-900", name);
            if let Some(title) = title {
                w.raw(&format!("<p class=\"text-lg mt-1\" style=\"color: {}\">", template.palette.accent))
                    .text(title)
                    .raw("</p>");
            }
            render_contacts_inline(w, &contacts, "mt-2 text-sm text-gray-600", "<span class=\"mx-2\">•</span>");
            w.raw("</header>");
        }
        HeaderStyle::Left | HeaderStyle::Split => {
            if template.header == HeaderStyle::Split {
                w.raw(&format!(
                    "<header data-header class=\"flex justify-between items-start gap-6 pb-4 mb-6 border-b-4\" style=\"border-color: {}\">",
                    template.palette.accent
                ));
            } else {
                w.raw("<header data-header class=\"flex justify-between items-start gap-6 pb-4 mb-6 border-b border-gray-200\">");
            }
            w.raw("<div class=\"flex items-center gap-4\">");
            render_avatar(w, info, "w-16 h-16 rounded-full object-cover");
            w.raw("<div>");
            w.element("h1", "text-3xl font-bold text-gray-900", name);
            w.element("p", "text-lg text-gray-600", title);
            w.raw("</div></div>");
            render_contacts_stacked(w, &contacts, "text-sm text-right text-gray-600 space-y-0.5");
            w.raw("</header>");
        }
        HeaderStyle::Minimal => {
            w.raw("<header data-header class=\"mb-8\">");
            w.element("h1", "text-4xl font-light tracking-tight text-gray-900", name);
            w.element("p", "mt-1 text-sm uppercase tracking-widest text-gray-500", title);
            render_contacts_inline(w, &contacts, "mt-3 text-xs text-gray-500", " / ");
            w.raw("</header>");
        }
        HeaderStyle::Banner { background } => {
            let frame = if full_bleed { "px-10 py-8" } else { "px-8 py-6 mb-6 rounded-lg" };
            w.raw(&format!(
                "<header data-header data-chrome=\"dark\" class=\"{frame} text-white\" style=\"background: {background}\">"
            ));
            w.raw("<div class=\"flex items-center gap-6\">");
            render_avatar(w, info, "w-20 h-20 rounded-full object-cover border-4 border-white/30");
            w.raw("<div>");
            w.element("h1", "text-3xl font-bold text-white", name);
            w.element("p", "text-lg text-white/80", title);
            render_contacts_inline(w, &contacts, "mt-2 text-sm text-white/80", "<span class=\"mx-2\">|</span>");
            w.raw("</div></div></header>");
        }
    }
}

/// Avatar, name, title and stacked contacts at the top of a sidebar.
fn render_sidebar_profile(w: &mut Html, template: &Template, info: &PersonalInfo, dark: bool) {
    let contacts = info.contacts(template.social);
    let (ink, muted) = if dark {
        ("text-white", "text-gray-300")
    } else {
        ("text-gray-900", "text-gray-600")
    };
    w.raw("<header data-header class=\"mb-8 text-center\">");
    render_avatar(w, info, "w-28 h-28 rounded-full object-cover mx-auto mb-4");
    w.element("h1", &format!("text-2xl font-bold {ink}"), info.full_name.as_deref());
    w.element("p", &format!("mt-1 text-sm {muted}"), info.job_title.as_deref());
    render_contacts_stacked(w, &contacts, &format!("mt-4 space-y-1 text-xs break-words {muted}"));
    w.raw("</header>");
}
