//! Theme stylesheet layered over a template.
//!
//! Every rule is scoped to `.resume-export`, the wrapper `generate_html` puts around the
//! template fragment, so theme overrides win over the template's utility classes
//! without leaking into the rest of a preview page.

use std::fmt::Write;

use crate::models::theme::ThemeConfig;
use crate::render::templates::BACKGROUND_TEMPLATES;

const ROOT: &str = ".resume-export";

/// Luminance below which the primary color counts as dark.
pub const DARK_LUMINANCE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    pub body: u32,
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
}

pub fn font_scale(size: &str) -> FontScale {
    match size {
        "small" => FontScale { body: 12, h1: 24, h2: 16, h3: 13 },
        "large" => FontScale { body: 16, h1: 32, h2: 20, h3: 17 },
        _ => FontScale { body: 14, h1: 28, h2: 18, h3: 15 },
    }
}

pub fn build_theme_css(theme: &ThemeConfig, template_name: &str) -> String {
    let defaults = ThemeConfig::default();
    let primary = sanitize_color(&theme.primary_color).unwrap_or(&defaults.primary_color);
    let accent = sanitize_color(&theme.accent_color).unwrap_or(&defaults.accent_color);
    let family = sanitize_font_family(&theme.font_family).unwrap_or_else(|| defaults.font_family.clone());
    let scale = font_scale(&theme.font_size);
    let line_height = if theme.line_spacing.is_finite() && theme.line_spacing > 0.0 {
        theme.line_spacing
    } else {
        defaults.line_spacing
    };

    let mut css = String::with_capacity(2048);
    // Writing into a String cannot fail.
    let _ = writeln!(
        css,
        "{ROOT} {{ font-family: {family}, ui-sans-serif, system-ui, sans-serif; line-height: {line_height}; }}"
    );
    let _ = writeln!(
        css,
        "{ROOT} p, {ROOT} li, {ROOT} span, {ROOT} td {{ font-size: {}px; line-height: {line_height}; }}",
        scale.body
    );
    for (tag, size) in [("h1", scale.h1), ("h2", scale.h2), ("h3", scale.h3)] {
        let _ = writeln!(css, "{ROOT} {tag} {{ font-size: {size}px; line-height: 1.25; }}");
    }
    let _ = writeln!(
        css,
        "{ROOT} h1:not(.text-white), {ROOT} h2:not(.text-white), {ROOT} h3:not(.text-white) {{ color: {primary}; }}"
    );
    let _ = writeln!(
        css,
        "{ROOT} .border-gray-200, {ROOT} .border-gray-300, {ROOT} hr, {ROOT} .divide-gray-200 > * + * {{ border-color: {accent}; }}"
    );
    let _ = writeln!(
        css,
        "{ROOT} [data-section] {{ margin-bottom: {}px; }}",
        non_negative(theme.section_spacing)
    );

    if !BACKGROUND_TEMPLATES.contains(&template_name) {
        let m = &theme.margin;
        let _ = writeln!(
            css,
            "{ROOT} {{ padding: {}px {}px {}px {}px; }}",
            non_negative(m.top),
            non_negative(m.right),
            non_negative(m.bottom),
            non_negative(m.left)
        );
    }

    if luminance(primary).is_some_and(|l| l < DARK_LUMINANCE_THRESHOLD) {
        let selectors: Vec<String> = ["[data-chrome=\"dark\"]", ".bg-black"]
            .iter()
            .flat_map(|chrome| ["h1", "h2", "h3"].map(|tag| format!("{ROOT} {chrome} {tag}")))
            .collect();
        let _ = writeln!(css, "{} {{ color: #ffffff !important; }}", selectors.join(", "));
    }

    css
}

/// Perceived luminance in `0.0..=1.0`, or `None` when the color cannot be parsed.
pub fn luminance(color: &str) -> Option<f64> {
    let (r, g, b) = parse_rgb(color)?;
    Some((0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0)
}

fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let color = color.trim().to_ascii_lowercase();
    if let Some(hex) = color.strip_prefix('#') {
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        return match hex.len() {
            3 | 4 => {
                let digits: Vec<String> = hex.chars().take(3).map(|c| format!("{c}{c}")).collect();
                Some((channel(&digits[0])?, channel(&digits[1])?, channel(&digits[2])?))
            }
            6 | 8 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            _ => None,
        };
    }
    if let Some(args) = color
        .strip_prefix("rgba(")
        .or_else(|| color.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let mut channels = args
            .split(|c: char| c == ',' || c.is_whitespace() || c == '/')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().ok().map(|v| v.clamp(0.0, 255.0) as u8));
        return Some((channels.next()??, channels.next()??, channels.next()??));
    }
    match color.as_str() {
        "black" => Some((0, 0, 0)),
        "white" => Some((255, 255, 255)),
        "navy" => Some((0, 0, 128)),
        "maroon" => Some((128, 0, 0)),
        "gray" | "grey" => Some((128, 128, 128)),
        _ => None,
    }
}

/// Accepts hex, plain named colors and `rgb()`/`hsl()` notations; anything else could
/// close the declaration and is rejected.
pub fn sanitize_color(color: &str) -> Option<&str> {
    let color = color.trim();
    let lower = color.to_ascii_lowercase();
    let ok = if let Some(hex) = color.strip_prefix('#') {
        matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(open) = ["rgb(", "rgba(", "hsl(", "hsla("].iter().find(|p| lower.starts_with(**p)) {
        color.ends_with(')')
            && color[open.len()..color.len() - 1]
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, ' ' | ',' | '.' | '%' | '/'))
    } else {
        !color.is_empty() && color.len() <= 32 && color.chars().all(|c| c.is_ascii_alphabetic())
    };
    ok.then_some(color)
}

/// Keeps letters, digits, spaces, hyphens, commas and quotes.
pub fn sanitize_font_family(family: &str) -> Option<String> {
    let cleaned: String = family
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | ',' | '\'' | '"'))
        .collect();
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
