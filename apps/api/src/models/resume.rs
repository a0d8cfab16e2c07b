use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::content::SectionContent;

/// The section kinds a resume can hold. Anything else is kept as `Other` and rendered
/// through the generic item fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKind {
    PersonalInfo,
    Summary,
    WorkExperience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Custom,
    Other(String),
}

impl SectionKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "personal_info" => SectionKind::PersonalInfo,
            "summary" => SectionKind::Summary,
            "work_experience" => SectionKind::WorkExperience,
            "education" => SectionKind::Education,
            "skills" => SectionKind::Skills,
            "projects" => SectionKind::Projects,
            "certifications" => SectionKind::Certifications,
            "languages" => SectionKind::Languages,
            "custom" => SectionKind::Custom,
            other => SectionKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SectionKind::PersonalInfo => "personal_info",
            SectionKind::Summary => "summary",
            SectionKind::WorkExperience => "work_experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Languages => "languages",
            SectionKind::Custom => "custom",
            SectionKind::Other(raw) => raw,
        }
    }
}

fn default_visible() -> bool {
    true
}

/// A section exactly as stored: the `type` tag and the untyped JSON content.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SectionRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub content: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One content block of a resume.
///
/// `content` is parsed once from the stored JSON; the stored JSON itself is kept so a
/// section serializes back to exactly what the repository returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "SectionRow", into = "SectionRow")]
pub struct Section {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub kind: SectionKind,
    pub title: String,
    pub sort_order: i32,
    pub visible: bool,
    pub content: SectionContent,
    raw_content: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SectionRow> for Section {
    fn from(row: SectionRow) -> Self {
        let kind = SectionKind::parse(&row.kind);
        let content = SectionContent::parse(&kind, &row.content);
        Section {
            id: row.id,
            resume_id: row.resume_id,
            kind,
            title: row.title,
            sort_order: row.sort_order,
            visible: row.visible,
            content,
            raw_content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<Section> for SectionRow {
    fn from(section: Section) -> Self {
        SectionRow {
            id: section.id,
            resume_id: section.resume_id,
            kind: section.kind.as_str().to_string(),
            title: section.title,
            sort_order: section.sort_order,
            visible: section.visible,
            content: section.raw_content,
            created_at: section.created_at,
            updated_at: section.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub template: String,
    pub theme_config: Option<Value>,
    pub is_default: bool,
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A resume together with its ordered sections. Read-only for the duration of an export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub template: String,
    #[serde(default)]
    pub theme_config: Option<Value>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resume {
    /// Sections are taken in the order given; callers load them sorted by `sort_order`.
    pub fn from_rows(row: ResumeRow, sections: Vec<SectionRow>) -> Self {
        Resume {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            template: row.template,
            theme_config: row.theme_config,
            is_default: row.is_default,
            language: row.language,
            sections: sections.into_iter().map(Section::from).collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    /// Document language code, `en` when unset.
    pub fn language(&self) -> &str {
        match self.language.as_deref() {
            Some(lang) if !lang.trim().is_empty() => lang,
            _ => "en",
        }
    }
}
