//! HTML → PDF rasterization.
//!
//! The rest of the service only sees `PdfGenerator`; which backend runs is decided
//! once at startup from `PDF_BACKEND`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::{Config, PdfBackend};

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PDF service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rasterizer failed: {0}")]
    Process(String),

    #[error("Rasterizer timed out after {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait PdfGenerator: Send + Sync {
    async fn generate_pdf(&self, html: &str) -> Result<Bytes, PdfError>;
}

/// Builds the backend selected in `config`.
pub fn build_pdf_generator(config: &Config) -> Result<Arc<dyn PdfGenerator>, PdfError> {
    let timeout = Duration::from_secs(config.pdf_timeout_secs);
    let generator: Arc<dyn PdfGenerator> = match config.pdf_backend {
        PdfBackend::Http => {
            let generator = HttpPdfGenerator::new(&config.pdf_service_url, timeout)?;
            info!(endpoint = generator.endpoint(), "Using HTTP PDF service");
            Arc::new(generator)
        }
        PdfBackend::Chromium => {
            info!(binary = %config.chromium_path, "Using local headless Chromium");
            Arc::new(ChromiumPdfGenerator::new(&config.chromium_path, timeout))
        }
    };
    Ok(generator)
}

// ────────────────────────────────────────────────────────────────────────────
// Gotenberg-compatible conversion service
// ────────────────────────────────────────────────────────────────────────────

const CONVERT_HTML_ROUTE: &str = "/forms/chromium/convert/html";
/// Longest slice of a failing service's response body kept in the error.
const MAX_ERROR_BODY: usize = 512;

#[derive(Clone)]
pub struct HttpPdfGenerator {
    client: Client,
    endpoint: String,
}

impl HttpPdfGenerator {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PdfError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{CONVERT_HTML_ROUTE}", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PdfGenerator for HttpPdfGenerator {
    async fn generate_pdf(&self, html: &str) -> Result<Bytes, PdfError> {
        let index = Part::text(html.to_string())
            .file_name("index.html")
            .mime_str("text/html")?;
        let form = Form::new()
            .part("files", index)
            .text("printBackground", "true")
            .text("preferCssPageSize", "true")
            .text("marginTop", "0")
            .text("marginBottom", "0")
            .text("marginLeft", "0")
            .text("marginRight", "0");

        debug!(endpoint = %self.endpoint, bytes = html.len(), "Sending document to PDF service");
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let mut message = response.text().await.unwrap_or_default();
            if message.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY).rev().find(|i| message.is_char_boundary(*i)).unwrap_or(0);
                message.truncate(cut);
            }
            return Err(PdfError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let pdf = response.bytes().await?;
        info!(bytes = pdf.len(), "PDF service returned document");
        Ok(pdf)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Local headless Chromium
// ────────────────────────────────────────────────────────────────────────────

pub struct ChromiumPdfGenerator {
    binary: PathBuf,
    timeout: Duration,
}

impl ChromiumPdfGenerator {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }
}

#[async_trait]
impl PdfGenerator for ChromiumPdfGenerator {
    async fn generate_pdf(&self, html: &str) -> Result<Bytes, PdfError> {
        // Removed with everything in it when dropped.
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("index.html");
        let output = workdir.path().join("resume.pdf");
        tokio::fs::write(&input, html).await?;

        let mut command = Command::new(&self.binary);
        command
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--no-pdf-header-footer")
            .arg("--run-all-compositor-stages-before-draw")
            .arg(format!("--print-to-pdf={}", output.display()))
            .arg(format!("file://{}", input.display()))
            .kill_on_drop(true);

        debug!(binary = %self.binary.display(), "Spawning headless Chromium");
        let result = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| PdfError::Timeout(self.timeout))??;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let last_line = stderr.lines().rev().find(|l| !l.trim().is_empty()).unwrap_or("");
            return Err(PdfError::Process(format!(
                "exit code {}: {last_line}",
                result.status.code().unwrap_or(-1)
            )));
        }

        let pdf = tokio::fs::read(&output).await?;
        if pdf.is_empty() {
            return Err(PdfError::Process("Chromium produced an empty file".to_string()));
        }
        info!(bytes = pdf.len(), "Chromium rendered PDF");
        Ok(Bytes::from(pdf))
    }
}
