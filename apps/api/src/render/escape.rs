//! Escaping and the markup buffer every HTML renderer writes into.
//!
//! `Html::text` is the only way user text enters a buffer; `Html::raw` is reserved for
//! markup the renderers spell out themselves.

use std::fmt;

use serde_json::Value;

/// Escapes `& < > "` so text can sit in element content or a double-quoted attribute.
pub fn escape_html(value: &str) -> String {
    Escape(value).to_string()
}

/// Text form of a JSON value: `null` is empty, strings are taken as-is, arrays are
/// comma-joined, objects have no text form.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(values) => values
            .iter()
            .map(coerce_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => String::new(),
    }
}

/// Display adapter that escapes while formatting.
pub struct Escape<'a>(pub &'a str);

impl fmt::Display for Escape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut last = 0;
        for (i, byte) in self.0.bytes().enumerate() {
            let entity = match byte {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => continue,
            };
            f.write_str(&self.0[last..i])?;
            f.write_str(entity)?;
            last = i + 1;
        }
        f.write_str(&self.0[last..])
    }
}

#[derive(Debug, Default)]
pub struct Html {
    buf: String,
}

impl Html {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
        }
    }

    /// Appends renderer-authored markup verbatim.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    /// Appends user text, escaped.
    pub fn text(&mut self, text: &str) -> &mut Self {
        use fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(self.buf, "{}", Escape(text));
        self
    }

    /// `<tag class="..">text</tag>`, skipped entirely when there is no text.
    pub fn element(&mut self, tag: &str, class: &str, text: Option<&str>) -> &mut Self {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.open(tag, class).text(text).close(tag);
        }
        self
    }

    pub fn open(&mut self, tag: &str, class: &str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        if !class.is_empty() {
            self.buf.push_str(" class=\"");
            self.buf.push_str(class);
            self.buf.push('"');
        }
        self.buf.push('>');
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_removes_raw_angle_brackets() {
        let escaped = escape_html("<script>alert(\"x\")</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert_eq!(escaped, "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;");
    }

    #[test]
    fn test_escape_encodes_existing_entities_as_text() {
        // An already-encoded entity is user text like any other and survives one decode.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_escape_leaves_plain_and_multibyte_text_alone() {
        assert_eq!(escape_html("Zürich – 2020"), "Zürich – 2020");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_coerce_to_string() {
        assert_eq!(coerce_to_string(&Value::Null), "");
        assert_eq!(coerce_to_string(&json!(3.5)), "3.5");
        assert_eq!(coerce_to_string(&json!(true)), "true");
        assert_eq!(coerce_to_string(&json!(["a", 1])), "a,1");
        assert_eq!(coerce_to_string(&json!("<b>")), "<b>");
    }

    #[test]
    fn test_element_skips_missing_text_and_escapes_present_text() {
        let mut html = Html::new();
        html.element("p", "x", None)
            .element("p", "", Some(""))
            .element("h3", "font-bold", Some("R&D"));
        assert_eq!(html.finish(), "<h3 class=\"font-bold\">R&amp;D</h3>");
    }
}
