//! Resume rendering: HTML documents for screen and print, plain text, and Word HTML.
//!
//! Everything here is a pure function of the resume it is given.

pub mod accessors;
pub mod body;
pub mod docx;
pub mod document;
pub mod escape;
pub mod plain_text;
pub mod shell;
pub mod templates;
pub mod theme_css;

#[cfg(test)]
pub(crate) mod fixtures;

pub use document::{generate_html, generate_html_with_template};
pub use docx::generate_docx;
pub use escape::coerce_to_string;
pub use plain_text::generate_plain_text;
pub use templates::{resolve_template, template_catalogue, TemplateInfo};
