//! Word-compatible HTML.
//!
//! Word opens HTML carrying the Office namespaces and `ProgId` meta as a native
//! document, so the `docx` export is this markup served as a `.doc`. Sections are
//! taken as stored, skipping only hidden ones.

use crate::models::content::{PersonalInfo, SectionContent};
use crate::models::resume::{Resume, Section};
use crate::render::body::{date_range, filled, join_present};
use crate::render::escape::{Escape, Html};

const WORD_CSS: &str = "\
@page WordSection1 { size: 8.5in 11.0in; margin: 0.8in 0.9in 0.8in 0.9in; }
div.WordSection1 { page: WordSection1; }
body { font-family: Calibri, Arial, sans-serif; font-size: 11pt; color: #1f2937; line-height: 1.35; }
h1 { font-size: 22pt; margin: 0 0 4pt 0; color: #111827; }
h2 { font-size: 13pt; margin: 16pt 0 6pt 0; padding-bottom: 2pt; border-bottom: 1px solid #9ca3af; color: #111827; text-transform: uppercase; }
p { margin: 0 0 4pt 0; }
ul { margin: 2pt 0 6pt 18pt; padding: 0; }
li { margin: 0 0 2pt 0; }
.subtitle { font-size: 13pt; color: #374151; }
.contact { color: #4b5563; }
.meta { color: #6b7280; font-size: 10pt; }
.item { margin: 0 0 8pt 0; }
";

const MSO_SETTINGS: &str = "<!--[if gte mso 9]><xml><w:WordDocument><w:View>Print</w:View><w:Zoom>100</w:Zoom><w:DoNotOptimizeForBrowser/></w:WordDocument></xml><![endif]-->";

pub fn generate_docx(resume: &Resume) -> String {
    let mut w = Html::new();
    w.raw(
        "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
         xmlns:w=\"urn:schemas-microsoft-com:office:word\" \
         xmlns=\"http://www.w3.org/TR/REC-html40\">\n",
    );
    w.raw("<head>\n<meta charset=\"utf-8\">\n");
    w.raw("<meta name=\"ProgId\" content=\"Word.Document\">\n");
    w.raw("<meta name=\"Generator\" content=\"Microsoft Word 15\">\n");
    w.raw(&format!("<title>{}</title>\n", Escape(&resume.title)));
    w.raw(MSO_SETTINGS).raw("\n");
    w.raw("<style>\n").raw(WORD_CSS).raw("</style>\n</head>\n");
    w.raw("<body>\n<div class=\"WordSection1\">\n");

    for section in resume.sections.iter().filter(|s| s.visible) {
        render_section(&mut w, section);
    }

    w.raw("</div>\n</body>\n</html>\n");
    w.finish()
}

fn render_section(w: &mut Html, section: &Section) {
    if let SectionContent::PersonalInfo(info) = &section.content {
        personal_info(w, info);
        return;
    }

    let title = if section.title.trim().is_empty() {
        section.kind.as_str()
    } else {
        section.title.as_str()
    };
    w.element("h2", "", Some(title)).raw("\n");

    match &section.content {
        SectionContent::PersonalInfo(_) => {}
        SectionContent::Summary(summary) => {
            w.element("p", "", summary.text.as_deref());
        }
        SectionContent::WorkExperience(items) => {
            for item in items {
                w.raw("<div class=\"item\">");
                lead(w, item.position.as_deref(), item.company.as_deref(), " at ");
                meta(w, &[
                    date_range(item.start_date.as_deref(), item.end_label()).as_deref(),
                    item.location.as_deref(),
                ]);
                w.element("p", "", item.description.as_deref());
                bullets(w, &item.highlights);
                w.raw("</div>\n");
            }
        }
        SectionContent::Education(items) => {
            for item in items {
                w.raw("<div class=\"item\">");
                let qualification = item.qualification();
                lead(w, qualification.as_deref(), item.institution.as_deref(), ", ");
                let gpa = item.gpa.as_deref().map(|gpa| format!("GPA: {gpa}"));
                meta(w, &[
                    date_range(item.start_date.as_deref(), item.end_date.as_deref()).as_deref(),
                    gpa.as_deref(),
                ]);
                w.element("p", "", item.description.as_deref());
                bullets(w, &item.highlights);
                w.raw("</div>\n");
            }
        }
        SectionContent::Skills(categories) => {
            for category in categories {
                let skills: Vec<&str> = filled(&category.skills).collect();
                if category.name.is_none() && skills.is_empty() {
                    continue;
                }
                w.raw("<p>");
                if let Some(name) = &category.name {
                    w.raw("<strong>").text(name).raw(":</strong> ");
                }
                w.text(&skills.join(", "));
                w.raw("</p>\n");
            }
        }
        SectionContent::Projects(items) => {
            for item in items {
                w.raw("<div class=\"item\">");
                lead(w, item.name.as_deref(), None, "");
                meta(w, &[
                    date_range(item.start_date.as_deref(), item.end_date.as_deref()).as_deref(),
                    item.url.as_deref(),
                ]);
                w.element("p", "", item.description.as_deref());
                let technologies: Vec<&str> = filled(&item.technologies).collect();
                if !technologies.is_empty() {
                    w.raw("<p class=\"meta\">Technologies: ").text(&technologies.join(", ")).raw("</p>");
                }
                bullets(w, &item.highlights);
                w.raw("</div>\n");
            }
        }
        SectionContent::Certifications(items) => {
            for item in items {
                w.raw("<div class=\"item\">");
                lead(w, item.name.as_deref(), item.issuer.as_deref(), " - ");
                meta(w, &[item.date.as_deref(), item.url.as_deref()]);
                w.raw("</div>\n");
            }
        }
        SectionContent::Languages(items) => {
            for item in items {
                lead(w, item.language.as_deref(), item.proficiency.as_deref(), ": ");
            }
        }
        SectionContent::Custom(items) => {
            for item in items {
                w.raw("<div class=\"item\">");
                lead(w, item.title.as_deref(), item.subtitle.as_deref(), " - ");
                meta(w, &[item.date.as_deref()]);
                w.element("p", "", item.description.as_deref());
                w.raw("</div>\n");
            }
        }
        SectionContent::Generic(items) => {
            for item in items {
                w.raw("<div class=\"item\">");
                lead(w, item.label.as_deref(), item.detail.as_deref(), " - ");
                w.element("p", "", item.description.as_deref());
                w.raw("</div>\n");
            }
        }
    }
}

fn personal_info(w: &mut Html, info: &PersonalInfo) {
    if let Some(name) = &info.full_name {
        w.raw("<h1>").text(name).raw("</h1>\n");
    }
    w.element("p", "subtitle", info.job_title.as_deref());
    let contacts = info.contacts(true);
    if !contacts.is_empty() {
        w.element("p", "contact", Some(contacts.join(" | ").as_str())).raw("\n");
    }
}

/// `<p><strong>head</strong>{sep}tail</p>`, with either half optional.
fn lead(w: &mut Html, head: Option<&str>, tail: Option<&str>, sep: &str) {
    let head = head.filter(|h| !h.is_empty());
    let tail = tail.filter(|t| !t.is_empty());
    if head.is_none() && tail.is_none() {
        return;
    }
    w.raw("<p>");
    if let Some(head) = head {
        w.raw("<strong>").text(head).raw("</strong>");
    }
    if let Some(tail) = tail {
        if head.is_some() {
            w.text(sep);
        }
        w.text(tail);
    }
    w.raw("</p>");
}

fn meta(w: &mut Html, parts: &[Option<&str>]) {
    let line = join_present(parts, " | ");
    w.element("p", "meta", line.as_deref());
}

fn bullets(w: &mut Html, entries: &[String]) {
    let mut entries = filled(entries).peekable();
    if entries.peek().is_none() {
        return;
    }
    w.raw("<ul>");
    for entry in entries {
        w.element("li", "", Some(entry));
    }
    w.raw("</ul>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::{full_resume, jane_doe, resume, section};
    use serde_json::json;

    #[test]
    fn test_word_document_envelope() {
        let doc = generate_docx(&jane_doe("classic"));
        assert!(doc.contains("xmlns:o=\"urn:schemas-microsoft-com:office:office\""));
        assert!(doc.contains("xmlns:w=\"urn:schemas-microsoft-com:office:word\""));
        assert!(doc.contains("<meta name=\"Generator\""));
        assert!(doc.contains("<!--[if gte mso 9]>"));
        assert!(doc.contains("<title>My Resume</title>"));
    }

    #[test]
    fn test_jane_doe_docx() {
        let doc = generate_docx(&jane_doe("classic"));
        assert!(doc.contains("<h1>Jane Doe</h1>"));
        let start = doc.find("<div class=\"item\">").unwrap();
        let end = start + doc[start..].find("</div>").unwrap();
        let item = &doc[start..end];
        assert!(item.contains("<p><strong>Engineer</strong> at Acme</p>"));
        assert!(item.contains("2020-01 – Present"));
        assert!(!item.contains("<li"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let doc = generate_docx(&full_resume("classic"));
        assert!(doc.contains("<h1>Alex &lt;Admin&gt; Smith</h1>"));
        assert!(!doc.contains("<Admin>"));
        assert!(doc.contains("Builds &quot;reliable&quot; systems &amp; teams."));
    }

    #[test]
    fn test_visibility_is_the_only_filter() {
        let mut hidden = section("summary", "Secret", json!({ "text": "x" }));
        hidden.visible = false;
        let doc = generate_docx(&resume(
            "classic",
            vec![hidden, section("skills", "Skills", json!({ "categories": [] }))],
        ));
        assert!(!doc.contains("Secret"));
        assert!(doc.contains("<h2>Skills</h2>"));
    }

    #[test]
    fn test_every_section_kind_renders() {
        let doc = generate_docx(&full_resume("classic"));
        assert!(doc.contains("<li>Cut latency 40%</li><li>Hired 6 engineers</li>"));
        assert!(doc.contains("<p><strong>MSc in Computer Science</strong>, TU Berlin</p>"));
        assert!(doc.contains("<p><strong>Languages:</strong> Rust, Go</p>"));
        assert!(doc.contains("Technologies: Rust, Tokio"));
        assert!(doc.contains("<p><strong>English</strong>: Native</p>"));
        assert!(doc.contains("<p><strong>Hackathon Winner</strong> - HackBerlin</p>"));
        assert!(doc.contains("linkedin.com/in/alex"));
    }
}
