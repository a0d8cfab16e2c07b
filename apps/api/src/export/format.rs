use chrono::{DateTime, TimeZone};

/// Query values accepted by the export endpoint, in the order error responses list them.
pub const SUPPORTED_FORMATS: &[&str] = &["json", "html", "txt", "docx", "pdf"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Html,
    Txt,
    Docx,
    Pdf,
}

impl ExportFormat {
    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "html" => Some(ExportFormat::Html),
            "txt" => Some(ExportFormat::Txt),
            "docx" => Some(ExportFormat::Docx),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Txt => "text/plain; charset=utf-8",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// File extension of the download. Word HTML is saved as `.doc` so Word opens it.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
            ExportFormat::Txt => "txt",
            ExportFormat::Docx => "doc",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// `{title}-{YYYYMMDDHHMMSS}.{ext}`, URL-encoded. The timestamp is taken in the
/// caller's time zone (server local time in production).
pub fn export_filename<Tz>(title: &str, format: ExportFormat, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let title = title.trim();
    let title = if title.is_empty() { "resume" } else { title };
    let name = format!("{title}-{}.{}", at.format("%Y%m%d%H%M%S"), format.extension());
    urlencoding::encode(&name).into_owned()
}

pub fn content_disposition(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_parse_formats() {
        for name in SUPPORTED_FORMATS {
            assert!(ExportFormat::parse(name).is_some(), "{name}");
        }
        assert_eq!(ExportFormat::parse(" PDF "), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::parse("xml"), None);
        assert_eq!(ExportFormat::parse(""), None);
    }

    #[test]
    fn test_content_types_and_extensions() {
        assert_eq!(ExportFormat::Html.content_type(), "text/html; charset=utf-8");
        assert_eq!(ExportFormat::Txt.content_type(), "text/plain; charset=utf-8");
        assert_eq!(ExportFormat::Pdf.content_type(), "application/pdf");
        assert_eq!(
            ExportFormat::Docx.content_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(ExportFormat::Docx.extension(), "doc");
    }

    #[test]
    fn test_filename_is_timestamped_and_encoded() {
        let at = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 7, 8, 9)
            .unwrap();
        assert_eq!(
            export_filename("My CV", ExportFormat::Html, &at),
            "My%20CV-20240305070809.html"
        );
        assert_eq!(
            export_filename("Résumé/2024", ExportFormat::Docx, &at),
            "R%C3%A9sum%C3%A9%2F2024-20240305070809.doc"
        );
    }

    #[test]
    fn test_blank_title_falls_back_to_resume() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(export_filename("  ", ExportFormat::Pdf, &at), "resume-20241231235959.pdf");
        assert_eq!(
            content_disposition("resume-20241231235959.pdf"),
            "attachment; filename=\"resume-20241231235959.pdf\""
        );
    }
}
