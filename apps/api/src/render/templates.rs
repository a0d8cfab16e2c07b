//! The template catalogue.
//!
//! Every template is a declarative `Template` record; `shell::render_template` turns a
//! record plus a resume into markup. Names are stable keys stored on resumes, so a
//! template is never renamed, only added.

use serde::Serialize;
use tracing::debug;

use crate::render::body::{self, SectionBody};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Headline color for rules, chips and accents.
    pub accent: &'static str,
    /// Light wash of the accent used behind chips and cards.
    pub tint: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Name, title and contacts centered over a rule.
    Centered,
    /// Name left, contacts stacked on the right.
    Left,
    /// Like `Left`, closed by a heavy accent rule.
    Split,
    /// Oversized light name with a single quiet contact line.
    Minimal,
    /// Colored block with white text. Full-bleed on background templates.
    Banner { background: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    Underline,
    Plain,
    /// Accent bar on the left edge.
    Bar,
    /// White text on an accent pill.
    Pill,
    /// Small letter-spaced caps.
    Caps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Single,
    /// Narrow column for `SIDEBAR_KINDS`, wide column for everything else.
    Sidebar {
        side: Side,
        background: &'static str,
        dark: bool,
        header_in_sidebar: bool,
    },
    /// Sections alternate left and right alignment.
    ZigZag,
    /// Each section is a card colored from a rotating list of palettes.
    Mosaic {
        colors: &'static [Palette],
        columns: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStyle {
    Classic,
    Chips,
    Timeline,
    Compact,
    Infographic,
}

impl BodyStyle {
    pub fn renderer(self) -> &'static dyn SectionBody {
        match self {
            BodyStyle::Classic => &body::classic::ClassicBody,
            BodyStyle::Chips => &body::chips::ChipsBody,
            BodyStyle::Timeline => &body::timeline::TimelineBody,
            BodyStyle::Compact => &body::compact::CompactBody,
            BodyStyle::Infographic => &body::infographic::InfographicBody,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub label: &'static str,
    /// Tailwind font class on the template root; the theme font overrides it.
    pub font: &'static str,
    pub palette: Palette,
    pub header: HeaderStyle,
    pub heading: HeadingStyle,
    pub layout: Layout,
    pub body: BodyStyle,
    /// Show LinkedIn and GitHub next to the other contact fields.
    pub social: bool,
}

impl Template {
    /// Full-bleed templates draw their own padding and skip the theme's page margin.
    pub fn is_background(&self) -> bool {
        BACKGROUND_TEMPLATES.contains(&self.name)
    }
}

/// Catalogue entry exposed to template pickers.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub background: bool,
}

pub fn template_catalogue() -> Vec<TemplateInfo> {
    TEMPLATES
        .iter()
        .map(|t| TemplateInfo {
            name: t.name,
            label: t.label,
            background: t.is_background(),
        })
        .collect()
}

pub fn find_template(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.name == name)
}

/// The template stored on a resume, or `classic` when the name is unknown.
pub fn resolve_template(name: &str) -> &'static Template {
    find_template(name).unwrap_or_else(|| {
        debug!(requested = name, "Unknown template, rendering with {DEFAULT_TEMPLATE}");
        &TEMPLATES[0]
    })
}

pub const DEFAULT_TEMPLATE: &str = "classic";

pub const BACKGROUND_TEMPLATES: &[&str] = &[
    "executive", "bold", "corporate", "gradient", "midnight", "sunset", "ocean", "forest",
    "royal", "headline", "sidebar", "creative", "sleek", "metro", "slate", "ivory",
    "charcoal", "aqua", "crimson", "sapphire", "lavender", "graphite", "tiles", "spectrum",
    "dashboard",
];

const SLATE: Palette = Palette { accent: "#334155", tint: "#f1f5f9" };
const BLUE: Palette = Palette { accent: "#2563eb", tint: "#dbeafe" };
const INDIGO: Palette = Palette { accent: "#4f46e5", tint: "#e0e7ff" };
const EMERALD: Palette = Palette { accent: "#059669", tint: "#d1fae5" };
const TEAL: Palette = Palette { accent: "#0d9488", tint: "#ccfbf1" };
const ROSE: Palette = Palette { accent: "#e11d48", tint: "#ffe4e6" };
const VIOLET: Palette = Palette { accent: "#7c3aed", tint: "#ede9fe" };
const AMBER: Palette = Palette { accent: "#d97706", tint: "#fef3c7" };
const ORANGE: Palette = Palette { accent: "#ea580c", tint: "#ffedd5" };
const NEUTRAL: Palette = Palette { accent: "#171717", tint: "#f5f5f5" };

const fn tile(accent: &'static str, tint: &'static str) -> Palette {
    Palette { accent, tint }
}

const BRIGHT: &[Palette] = &[
    tile("#2563eb", "#dbeafe"),
    tile("#db2777", "#fce7f3"),
    tile("#059669", "#d1fae5"),
    tile("#d97706", "#fef3c7"),
    tile("#7c3aed", "#ede9fe"),
];
const OCEANIC: &[Palette] = &[
    tile("#0e7490", "#cffafe"),
    tile("#1d4ed8", "#dbeafe"),
    tile("#0f766e", "#ccfbf1"),
    tile("#4338ca", "#e0e7ff"),
];
const EARTH: &[Palette] = &[
    tile("#92400e", "#fef3c7"),
    tile("#3f6212", "#ecfccb"),
    tile("#9f1239", "#ffe4e6"),
    tile("#1e3a8a", "#dbeafe"),
];
const RAINBOW: &[Palette] = &[
    tile("#dc2626", "#fee2e2"),
    tile("#ea580c", "#ffedd5"),
    tile("#ca8a04", "#fef9c3"),
    tile("#16a34a", "#dcfce7"),
    tile("#0891b2", "#cffafe"),
    tile("#2563eb", "#dbeafe"),
    tile("#9333ea", "#f3e8ff"),
];
const SOFT: &[Palette] = &[
    tile("#f472b6", "#fce7f3"),
    tile("#60a5fa", "#dbeafe"),
    tile("#34d399", "#d1fae5"),
    tile("#fbbf24", "#fef3c7"),
    tile("#a78bfa", "#ede9fe"),
];

const CLASSIC: Template = Template {
    name: "classic",
    label: "Classic",
    font: "font-serif",
    palette: SLATE,
    header: HeaderStyle::Centered,
    heading: HeadingStyle::Underline,
    layout: Layout::Single,
    body: BodyStyle::Classic,
    social: false,
};

const BANNER: Template = Template {
    font: "font-sans",
    header: HeaderStyle::Banner { background: "#1e293b" },
    ..CLASSIC
};

const fn sidebar(side: Side, background: &'static str, dark: bool, header_in_sidebar: bool) -> Layout {
    Layout::Sidebar {
        side,
        background,
        dark,
        header_in_sidebar,
    }
}

const SIDEBAR: Template = Template {
    font: "font-sans",
    header: HeaderStyle::Left,
    layout: sidebar(Side::Left, "#1f2937", true, true),
    ..CLASSIC
};

pub static TEMPLATES: &[Template] = &[
    CLASSIC,
    // Single column on a white page.
    Template { name: "modern", label: "Modern", font: "font-sans", palette: BLUE, header: HeaderStyle::Left, heading: HeadingStyle::Bar, body: BodyStyle::Chips, ..CLASSIC },
    Template { name: "minimal", label: "Minimal", font: "font-sans", palette: NEUTRAL, header: HeaderStyle::Minimal, heading: HeadingStyle::Caps, ..CLASSIC },
    Template { name: "professional", label: "Professional", font: "font-sans", palette: INDIGO, header: HeaderStyle::Split, ..CLASSIC },
    Template { name: "elegant", label: "Elegant", header: HeaderStyle::Centered, heading: HeadingStyle::Caps, palette: AMBER, ..CLASSIC },
    Template { name: "compact", label: "Compact", font: "font-sans", header: HeaderStyle::Left, body: BodyStyle::Compact, ..CLASSIC },
    Template { name: "timeline", label: "Timeline", font: "font-sans", palette: TEAL, header: HeaderStyle::Left, heading: HeadingStyle::Bar, body: BodyStyle::Timeline, ..CLASSIC },
    Template { name: "academic", label: "Academic", social: true, ..CLASSIC },
    Template { name: "technical", label: "Technical", font: "font-mono", palette: EMERALD, header: HeaderStyle::Left, heading: HeadingStyle::Plain, body: BodyStyle::Chips, social: true, ..CLASSIC },
    Template { name: "clean", label: "Clean", font: "font-sans", palette: BLUE, header: HeaderStyle::Minimal, heading: HeadingStyle::Plain, ..CLASSIC },
    Template { name: "swiss", label: "Swiss", font: "font-sans", palette: ROSE, header: HeaderStyle::Minimal, heading: HeadingStyle::Caps, body: BodyStyle::Compact, ..CLASSIC },
    Template { name: "newspaper", label: "Newspaper", palette: NEUTRAL, body: BodyStyle::Compact, ..CLASSIC },
    Template { name: "harvard", label: "Harvard", palette: ROSE, ..CLASSIC },
    Template { name: "ats", label: "ATS Friendly", font: "font-sans", palette: NEUTRAL, header: HeaderStyle::Left, ..CLASSIC },
    Template { name: "developer", label: "Developer", font: "font-mono", palette: VIOLET, header: HeaderStyle::Split, heading: HeadingStyle::Bar, body: BodyStyle::Chips, social: true, ..CLASSIC },
    Template { name: "startup", label: "Startup", font: "font-sans", palette: ORANGE, header: HeaderStyle::Left, heading: HeadingStyle::Pill, body: BodyStyle::Chips, social: true, ..CLASSIC },
    Template { name: "consultant", label: "Consultant", font: "font-sans", palette: SLATE, header: HeaderStyle::Split, body: BodyStyle::Compact, ..CLASSIC },
    Template { name: "scholar", label: "Scholar", palette: INDIGO, heading: HeadingStyle::Plain, body: BodyStyle::Timeline, ..CLASSIC },
    Template { name: "journal", label: "Journal", palette: AMBER, heading: HeadingStyle::Caps, body: BodyStyle::Timeline, ..CLASSIC },
    Template { name: "nordic", label: "Nordic", font: "font-sans", palette: TEAL, header: HeaderStyle::Minimal, heading: HeadingStyle::Plain, body: BodyStyle::Chips, ..CLASSIC },
    Template { name: "pastel", label: "Pastel", font: "font-sans", palette: VIOLET, header: HeaderStyle::Left, heading: HeadingStyle::Pill, body: BodyStyle::Chips, ..CLASSIC },
    Template { name: "monochrome", label: "Monochrome", font: "font-sans", palette: NEUTRAL, header: HeaderStyle::Minimal, ..CLASSIC },
    Template { name: "ribbon", label: "Ribbon", palette: ROSE, heading: HeadingStyle::Pill, body: BodyStyle::Chips, header: HeaderStyle::Banner { background: "#9f1239" }, font: "font-sans", ..CLASSIC },
    Template { name: "card", label: "Card", palette: BLUE, heading: HeadingStyle::Bar, header: HeaderStyle::Banner { background: "#1e3a8a" }, font: "font-sans", ..CLASSIC },
    // Full-bleed banner headers.
    Template { name: "executive", label: "Executive", font: "font-serif", palette: SLATE, header: HeaderStyle::Banner { background: "#0f172a" }, ..BANNER },
    Template { name: "bold", label: "Bold", palette: NEUTRAL, header: HeaderStyle::Banner { background: "#000000" }, heading: HeadingStyle::Bar, body: BodyStyle::Chips, ..BANNER },
    Template { name: "corporate", label: "Corporate", palette: BLUE, header: HeaderStyle::Banner { background: "#1d4ed8" }, body: BodyStyle::Compact, ..BANNER },
    Template { name: "gradient", label: "Gradient", palette: VIOLET, header: HeaderStyle::Banner { background: "linear-gradient(135deg, #4f46e5 0%, #7c3aed 100%)" }, heading: HeadingStyle::Pill, body: BodyStyle::Chips, ..BANNER },
    Template { name: "midnight", label: "Midnight", palette: INDIGO, header: HeaderStyle::Banner { background: "#0f172a" }, heading: HeadingStyle::Caps, body: BodyStyle::Timeline, ..BANNER },
    Template { name: "sunset", label: "Sunset", palette: ORANGE, header: HeaderStyle::Banner { background: "linear-gradient(135deg, #c2410c 0%, #be185d 100%)" }, heading: HeadingStyle::Pill, body: BodyStyle::Infographic, ..BANNER },
    Template { name: "ocean", label: "Ocean", palette: TEAL, header: HeaderStyle::Banner { background: "linear-gradient(135deg, #1e3a8a 0%, #0f766e 100%)" }, heading: HeadingStyle::Bar, body: BodyStyle::Timeline, ..BANNER },
    Template { name: "forest", label: "Forest", palette: EMERALD, header: HeaderStyle::Banner { background: "#14532d" }, ..BANNER },
    Template { name: "royal", label: "Royal", font: "font-serif", palette: VIOLET, header: HeaderStyle::Banner { background: "#4c1d95" }, heading: HeadingStyle::Caps, ..BANNER },
    Template { name: "headline", label: "Headline", palette: NEUTRAL, header: HeaderStyle::Banner { background: "#111827" }, heading: HeadingStyle::Plain, body: BodyStyle::Compact, ..BANNER },
    // Two columns.
    Template { name: "sidebar", label: "Sidebar", ..SIDEBAR },
    Template { name: "creative", label: "Creative", palette: VIOLET, layout: sidebar(Side::Left, "linear-gradient(180deg, #4c1d95 0%, #6d28d9 100%)", true, true), heading: HeadingStyle::Pill, body: BodyStyle::Chips, social: true, ..SIDEBAR },
    Template { name: "sleek", label: "Sleek", palette: SLATE, layout: sidebar(Side::Right, "#f1f5f9", false, false), heading: HeadingStyle::Caps, body: BodyStyle::Chips, ..SIDEBAR },
    Template { name: "metro", label: "Metro", palette: TEAL, layout: sidebar(Side::Left, "#0f766e", true, true), heading: HeadingStyle::Bar, body: BodyStyle::Infographic, ..SIDEBAR },
    Template { name: "slate", label: "Slate", palette: SLATE, layout: sidebar(Side::Left, "#334155", true, true), body: BodyStyle::Timeline, ..SIDEBAR },
    Template { name: "ivory", label: "Ivory", font: "font-serif", palette: AMBER, layout: sidebar(Side::Right, "#faf7f0", false, false), header: HeaderStyle::Split, ..SIDEBAR },
    Template { name: "charcoal", label: "Charcoal", palette: NEUTRAL, layout: sidebar(Side::Left, "#18181b", true, true), heading: HeadingStyle::Caps, body: BodyStyle::Compact, ..SIDEBAR },
    Template { name: "aqua", label: "Aqua", palette: BLUE, layout: sidebar(Side::Left, "#e0f2fe", false, true), heading: HeadingStyle::Bar, body: BodyStyle::Chips, ..SIDEBAR },
    Template { name: "crimson", label: "Crimson", palette: ROSE, layout: sidebar(Side::Left, "#7f1d1d", true, true), ..SIDEBAR },
    Template { name: "sapphire", label: "Sapphire", palette: BLUE, layout: sidebar(Side::Right, "#1e3a8a", true, true), heading: HeadingStyle::Caps, body: BodyStyle::Infographic, social: true, ..SIDEBAR },
    Template { name: "lavender", label: "Lavender", palette: VIOLET, layout: sidebar(Side::Left, "#ede9fe", false, true), heading: HeadingStyle::Pill, body: BodyStyle::Chips, ..SIDEBAR },
    Template { name: "graphite", label: "Graphite", font: "font-mono", palette: NEUTRAL, layout: sidebar(Side::Right, "#262626", true, true), heading: HeadingStyle::Plain, body: BodyStyle::Timeline, ..SIDEBAR },
    // Alternating alignment.
    Template { name: "zigzag", label: "Zig Zag", font: "font-sans", palette: BLUE, heading: HeadingStyle::Bar, layout: Layout::ZigZag, ..CLASSIC },
    Template { name: "balance", label: "Balance", font: "font-sans", palette: EMERALD, header: HeaderStyle::Minimal, heading: HeadingStyle::Caps, layout: Layout::ZigZag, body: BodyStyle::Chips, ..CLASSIC },
    Template { name: "cascade", label: "Cascade", font: "font-sans", palette: INDIGO, header: HeaderStyle::Left, layout: Layout::ZigZag, body: BodyStyle::Timeline, ..CLASSIC },
    Template { name: "mirror", label: "Mirror", palette: SLATE, header: HeaderStyle::Split, heading: HeadingStyle::Plain, layout: Layout::ZigZag, body: BodyStyle::Compact, ..CLASSIC },
    // Palette-indexed cards.
    Template { name: "infographic", label: "Infographic", font: "font-sans", palette: BLUE, heading: HeadingStyle::Pill, layout: Layout::Mosaic { colors: BRIGHT, columns: 1 }, body: BodyStyle::Infographic, social: true, ..CLASSIC },
    Template { name: "mosaic", label: "Mosaic", font: "font-sans", palette: TEAL, header: HeaderStyle::Left, heading: HeadingStyle::Plain, layout: Layout::Mosaic { colors: OCEANIC, columns: 2 }, body: BodyStyle::Chips, ..CLASSIC },
    Template { name: "palette", label: "Palette", font: "font-sans", palette: AMBER, header: HeaderStyle::Minimal, heading: HeadingStyle::Caps, layout: Layout::Mosaic { colors: EARTH, columns: 2 }, body: BodyStyle::Chips, ..CLASSIC },
    Template { name: "rainbow", label: "Rainbow", font: "font-sans", palette: ROSE, heading: HeadingStyle::Bar, layout: Layout::Mosaic { colors: RAINBOW, columns: 1 }, body: BodyStyle::Infographic, ..CLASSIC },
    Template { name: "tiles", label: "Tiles", palette: SLATE, header: HeaderStyle::Banner { background: "#1e293b" }, heading: HeadingStyle::Plain, layout: Layout::Mosaic { colors: OCEANIC, columns: 2 }, body: BodyStyle::Compact, ..BANNER },
    Template { name: "spectrum", label: "Spectrum", palette: VIOLET, header: HeaderStyle::Banner { background: "linear-gradient(90deg, #dc2626 0%, #2563eb 50%, #9333ea 100%)" }, heading: HeadingStyle::Pill, layout: Layout::Mosaic { colors: RAINBOW, columns: 1 }, body: BodyStyle::Infographic, ..BANNER },
    Template { name: "confetti", label: "Confetti", font: "font-sans", palette: ROSE, header: HeaderStyle::Left, heading: HeadingStyle::Pill, layout: Layout::Mosaic { colors: SOFT, columns: 2 }, body: BodyStyle::Chips, ..CLASSIC },
    Template { name: "dashboard", label: "Dashboard", palette: INDIGO, header: HeaderStyle::Banner { background: "#0f172a" }, heading: HeadingStyle::Caps, layout: Layout::Mosaic { colors: BRIGHT, columns: 2 }, body: BodyStyle::Infographic, social: true, ..BANNER },
    Template { name: "blocks", label: "Blocks", palette: SLATE, header: HeaderStyle::Split, layout: Layout::Mosaic { colors: EARTH, columns: 1 }, ..CLASSIC },
    Template { name: "prism", label: "Prism", font: "font-sans", palette: VIOLET, heading: HeadingStyle::Bar, layout: Layout::Mosaic { colors: RAINBOW, columns: 2 }, body: BodyStyle::Chips, ..CLASSIC },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_classic_is_first_and_default() {
        assert_eq!(TEMPLATES[0].name, DEFAULT_TEMPLATE);
        assert_eq!(resolve_template("not-a-real-template").name, "classic");
        assert_eq!(resolve_template("").name, "classic");
        assert_eq!(resolve_template("modern").name, "modern");
    }

    #[test]
    fn test_template_names_are_unique() {
        let names: HashSet<_> = TEMPLATES.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), TEMPLATES.len());
        assert_eq!(TEMPLATES.len(), 60);
    }

    #[test]
    fn test_background_templates_are_catalogued() {
        for name in BACKGROUND_TEMPLATES {
            assert!(find_template(name).is_some(), "unknown background template {name}");
        }
        assert!(resolve_template("executive").is_background());
        assert!(!resolve_template("classic").is_background());
    }

    #[test]
    fn test_sidebar_layouts_are_full_bleed() {
        for template in TEMPLATES {
            if matches!(template.layout, Layout::Sidebar { .. }) {
                assert!(template.is_background(), "{} should be full-bleed", template.name);
            }
        }
    }

    #[test]
    fn test_catalogue_preserves_order() {
        let catalogue = template_catalogue();
        assert_eq!(catalogue.len(), TEMPLATES.len());
        assert_eq!(catalogue[0].name, "classic");
        assert!(catalogue.iter().any(|t| t.name == "bold" && t.background));
    }
}
