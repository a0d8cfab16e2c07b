use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::Local;
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::format::{content_disposition, export_filename, ExportFormat};
use crate::identity::fingerprint_from_headers;
use crate::models::resume::Resume;
use crate::render::{
    generate_docx, generate_html, generate_html_with_template, generate_plain_text, resolve_template,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    /// Renders with this template instead of the stored one.
    pub template: Option<String>,
    /// Renders the print variant that PDF export sends to the rasterizer.
    #[serde(default)]
    pub print: bool,
}

/// Resolves the caller and loads the resume, enforcing 401 → 404 → 403 in that order.
async fn load_owned_resume(state: &AppState, id: &str, headers: &HeaderMap) -> Result<Resume, AppError> {
    let fingerprint = fingerprint_from_headers(headers).ok_or(AppError::Unauthorized)?;
    let user = state
        .users
        .resolve_user(&fingerprint)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let not_found = || AppError::NotFound("Resume not found".to_string());
    let resume_id = Uuid::parse_str(id).map_err(|_| not_found())?;
    let resume = state.resumes.find_by_id(resume_id).await?.ok_or_else(not_found)?;

    if resume.user_id != user.id {
        info!(resume_id = %resume_id, user_id = %user.id, "Rejected export of a resume owned by another user");
        return Err(AppError::Forbidden);
    }
    Ok(resume)
}

/// The single `format` value of an export query. Missing or repeated values are rejected.
fn requested_format(pairs: &[(String, String)]) -> Result<ExportFormat, AppError> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == "format")
        .map(|(_, value)| value.as_str())
        .collect();
    match values.as_slice() {
        [one] => ExportFormat::parse(one).ok_or_else(|| AppError::UnsupportedFormat(one.to_string())),
        many => Err(AppError::UnsupportedFormat(many.join(","))),
    }
}

/// GET /api/resume/:id/export?format=json|html|txt|docx|pdf
///
/// The query is taken as raw pairs so that a malformed one still goes through
/// authorization first and fails with the JSON 400.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let resume = load_owned_resume(&state, &id, &headers).await?;

    let format = requested_format(&query)?;
    info!(resume_id = %resume.id, format = ?format, template = %resume.template, "Exporting resume");

    let body: Bytes = match format {
        // Stored data as-is; the raw section content round-trips untouched.
        ExportFormat::Json => return Ok(Json(resume).into_response()),
        ExportFormat::Html => generate_html(&resume, false).into(),
        ExportFormat::Txt => generate_plain_text(&resume).into(),
        ExportFormat::Docx => generate_docx(&resume).into(),
        ExportFormat::Pdf => {
            let html = generate_html(&resume, true);
            state.pdf.generate_pdf(&html).await?
        }
    };
    debug!(resume_id = %resume.id, bytes = body.len(), "Export rendered");

    let filename = export_filename(&resume.title, format, &Local::now());
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        body,
    )
        .into_response())
}

/// GET /api/resume/:id/preview?template=<name>&print=<bool>
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let resume = load_owned_resume(&state, &id, &headers).await?;
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let template = resolve_template(query.template.as_deref().unwrap_or(&resume.template));
    info!(resume_id = %resume.id, template = template.name, print = query.print, "Rendering preview");
    Ok(Html(generate_html_with_template(&resume, template, query.print)))
}
