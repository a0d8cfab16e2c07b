use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::{Resume, ResumeRow, SectionRow};

/// Read access to stored resumes.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// The resume with its sections in `sort_order`, or `None` if no such resume exists.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resume>>;
}

pub struct PgResumeRepository {
    pool: PgPool,
}

impl PgResumeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeRepository for PgResumeRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resume>> {
        let row: Option<ResumeRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, title, template, theme_config, is_default, language,
                   created_at, updated_at
            FROM resumes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to load resume {id}"))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let sections: Vec<SectionRow> = sqlx::query_as(
            r#"
            SELECT id, resume_id, type, title, sort_order, visible, content,
                   created_at, updated_at
            FROM sections
            WHERE resume_id = $1
            ORDER BY sort_order ASC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to load sections of resume {id}"))?;

        Ok(Some(Resume::from_rows(row, sections)))
    }
}
