//! Plain-text export.
//!
//! Unlike the HTML path this walks `resume.sections` directly: hidden sections are
//! skipped, but personal info is emitted as the opening block and empty sections still
//! get their heading. No escaping is applied.

use crate::models::content::{PersonalInfo, SectionContent};
use crate::models::resume::{Resume, Section};
use crate::render::body::join_present;

pub fn generate_plain_text(resume: &Resume) -> String {
    let blocks: Vec<String> = resume
        .sections
        .iter()
        .filter(|s| s.visible)
        .map(render_section)
        .filter(|block| !block.is_empty())
        .collect();
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

fn render_section(section: &Section) -> String {
    let mut lines = Lines::default();
    if let SectionContent::PersonalInfo(info) = &section.content {
        personal_info(&mut lines, info);
        return lines.finish();
    }

    let title = if section.title.trim().is_empty() {
        section.kind.as_str()
    } else {
        section.title.as_str()
    };
    lines.push(format!("== {title} =="));

    match &section.content {
        SectionContent::PersonalInfo(_) => {}
        SectionContent::Summary(summary) => lines.paragraph("", summary.text.as_deref()),
        SectionContent::WorkExperience(items) => {
            for item in items {
                let heading = join_present(&[item.position.as_deref(), item.company.as_deref()], " at ");
                lines.entry(heading.as_deref());
                lines.indented(dates(item.start_date.as_deref(), item.end_label()).as_deref());
                lines.indented(item.location.as_deref());
                lines.paragraph("  ", item.description.as_deref());
                lines.bullets(&item.highlights);
            }
        }
        SectionContent::Education(items) => {
            for item in items {
                let qualification = item.qualification();
                let heading = join_present(&[qualification.as_deref(), item.institution.as_deref()], ", ");
                lines.entry(heading.as_deref());
                lines.indented(dates(item.start_date.as_deref(), item.end_date.as_deref()).as_deref());
                lines.indented(item.gpa.as_deref().map(|gpa| format!("GPA: {gpa}")).as_deref());
                lines.paragraph("  ", item.description.as_deref());
                lines.bullets(&item.highlights);
            }
        }
        SectionContent::Skills(categories) => {
            for category in categories {
                let skills = list(&category.skills);
                let line = match (category.name.as_deref(), skills.as_deref()) {
                    (Some(name), Some(skills)) => Some(format!("{name}: {skills}")),
                    (name, skills) => name.or(skills).map(str::to_string),
                };
                lines.entry(line.as_deref());
            }
        }
        SectionContent::Projects(items) => {
            for item in items {
                lines.entry(item.name.as_deref());
                lines.indented(dates(item.start_date.as_deref(), item.end_date.as_deref()).as_deref());
                lines.indented(item.url.as_deref());
                lines.paragraph("  ", item.description.as_deref());
                let technologies = list(&item.technologies).map(|t| format!("Technologies: {t}"));
                lines.indented(technologies.as_deref());
                lines.bullets(&item.highlights);
            }
        }
        SectionContent::Certifications(items) => {
            for item in items {
                let heading = join_present(&[item.name.as_deref(), item.issuer.as_deref()], " - ");
                lines.entry(heading.as_deref());
                lines.indented(item.date.as_deref());
                lines.indented(item.url.as_deref());
            }
        }
        SectionContent::Languages(items) => {
            for item in items {
                let line = join_present(&[item.language.as_deref(), item.proficiency.as_deref()], ": ");
                lines.entry(line.as_deref());
            }
        }
        SectionContent::Custom(items) => {
            for item in items {
                let heading = join_present(&[item.title.as_deref(), item.subtitle.as_deref()], " - ");
                lines.entry(heading.as_deref());
                lines.indented(item.date.as_deref());
                lines.paragraph("  ", item.description.as_deref());
            }
        }
        SectionContent::Generic(items) => {
            for item in items {
                let heading = join_present(&[item.label.as_deref(), item.detail.as_deref()], " - ");
                lines.entry(heading.as_deref());
                lines.paragraph("  ", item.description.as_deref());
            }
        }
    }
    lines.finish()
}

fn personal_info(lines: &mut Lines, info: &PersonalInfo) {
    lines.line(info.full_name.as_deref());
    lines.line(info.job_title.as_deref());
    let contact = join_present(
        &[info.email.as_deref(), info.phone.as_deref(), info.location.as_deref()],
        " | ",
    );
    lines.line(contact.as_deref());
    lines.line(info.website.as_deref());
    lines.line(info.linkedin.as_deref());
    lines.line(info.github.as_deref());
}

/// `start - end` with an ASCII separator.
fn dates(start: Option<&str>, end: Option<&str>) -> Option<String> {
    join_present(&[start, end], " - ")
}

fn list(values: &[String]) -> Option<String> {
    let present: Vec<&str> = values.iter().map(String::as_str).filter(|v| !v.is_empty()).collect();
    (!present.is_empty()).then(|| present.join(", "))
}

#[derive(Default)]
struct Lines(Vec<String>);

impl Lines {
    fn push(&mut self, line: String) {
        self.0.push(line);
    }

    fn line(&mut self, text: Option<&str>) {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.push(text.to_string());
        }
    }

    fn entry(&mut self, text: Option<&str>) {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.push(format!("- {text}"));
        }
    }

    fn indented(&mut self, text: Option<&str>) {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.push(format!("  {text}"));
        }
    }

    /// Multi-line text, each line prefixed with `indent`.
    fn paragraph(&mut self, indent: &str, text: Option<&str>) {
        let Some(text) = text else { return };
        for line in text.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            self.push(format!("{indent}{line}"));
        }
    }

    fn bullets(&mut self, entries: &[String]) {
        for entry in entries.iter().filter(|e| !e.is_empty()) {
            self.push(format!("  * {entry}"));
        }
    }

    fn finish(self) -> String {
        self.0.join("\n")
    }
}
