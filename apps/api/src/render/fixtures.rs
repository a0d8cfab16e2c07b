//! Resume builders shared by the renderer and endpoint tests.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::models::resume::{Resume, Section, SectionRow};

pub fn section(kind: &str, title: &str, content: Value) -> Section {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Section::from(SectionRow {
        id: Uuid::new_v4(),
        resume_id: Uuid::nil(),
        kind: kind.to_string(),
        title: title.to_string(),
        sort_order: 0,
        visible: true,
        content,
        created_at: at,
        updated_at: at,
    })
}

pub fn resume(template: &str, sections: Vec<Section>) -> Resume {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Resume {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        title: "My Resume".to_string(),
        template: template.to_string(),
        theme_config: None,
        is_default: false,
        language: None,
        sections,
        created_at: at,
        updated_at: at,
    }
}

/// Jane Doe, one current engineering role at Acme.
pub fn jane_doe(template: &str) -> Resume {
    resume(
        template,
        vec![
            section(
                "personal_info",
                "Personal Info",
                json!({ "fullName": "Jane Doe", "email": "jane@x.com" }),
            ),
            section(
                "work_experience",
                "Experience",
                json!({ "items": [{
                    "position": "Engineer",
                    "company": "Acme",
                    "startDate": "2020-01",
                    "current": true
                }]}),
            ),
        ],
    )
}

/// One section of every kind, each with enough content to exercise its renderer.
pub fn full_resume(template: &str) -> Resume {
    resume(
        template,
        vec![
            section(
                "personal_info",
                "",
                json!({
                    "fullName": "Alex <Admin> Smith",
                    "jobTitle": "Staff Engineer",
                    "email": "alex@example.com",
                    "phone": "+1 555 0100",
                    "location": "Berlin",
                    "website": "https://alex.dev",
                    "linkedin": "linkedin.com/in/alex",
                    "github": "github.com/alex",
                    "avatar": "https://alex.dev/me.png"
                }),
            ),
            section("summary", "Summary", json!({ "text": "Builds \"reliable\" systems & teams." })),
            section(
                "work_experience",
                "Experience",
                json!({ "items": [
                    { "position": "Staff Engineer", "company": "Globex", "location": "Remote",
                      "startDate": "2021-03", "current": true,
                      "description": "Led platform work.",
                      "highlights": ["Cut latency 40%", "", "Hired 6 engineers"] },
                    { "position": "Engineer", "company": "Initech",
                      "startDate": "2017-01", "endDate": "2021-02" }
                ]}),
            ),
            section(
                "education",
                "Education",
                json!({ "items": [{ "institution": "TU Berlin", "degree": "MSc",
                                    "field": "Computer Science", "gpa": 1.3,
                                    "startDate": "2015", "endDate": "2017" }]}),
            ),
            section(
                "skills",
                "Skills",
                json!({ "categories": [
                    { "name": "Languages", "skills": ["Rust", "", "Go"] },
                    { "name": "Ops", "skills": ["Kubernetes"] }
                ]}),
            ),
            section(
                "projects",
                "Projects",
                json!({ "items": [{ "name": "fastq", "url": "https://github.com/alex/fastq",
                                    "description": "Queue library.",
                                    "technologies": ["Rust", "", "Tokio"] }]}),
            ),
            section(
                "certifications",
                "Certifications",
                json!({ "items": [{ "name": "CKA", "issuer": "CNCF", "date": "2022-05" }]}),
            ),
            section(
                "languages",
                "Languages",
                json!({ "items": [
                    { "language": "English", "proficiency": "Native" },
                    { "language": "German", "proficiency": "Intermediate" }
                ]}),
            ),
            section(
                "custom",
                "Volunteering",
                json!({ "items": [{ "title": "Mentor", "subtitle": "Rust Bridge",
                                    "date": "2023", "description": "Weekly sessions." }]}),
            ),
            section(
                "awards",
                "Awards",
                json!({ "items": [{ "title": "Hackathon Winner", "issuer": "HackBerlin" }]}),
            ),
        ],
    )
}
