use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which rasterizer turns export HTML into PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfBackend {
    /// Gotenberg-compatible HTTP service at `PDF_SERVICE_URL`.
    Http,
    /// Headless Chromium binary at `CHROMIUM_PATH`.
    Chromium,
}

impl FromStr for PdfBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(PdfBackend::Http),
            "chromium" => Ok(PdfBackend::Chromium),
            other => bail!("PDF_BACKEND must be 'http' or 'chromium', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub pdf_backend: PdfBackend,
    pub pdf_service_url: String,
    pub chromium_path: String,
    pub pdf_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            pdf_backend: env_or("PDF_BACKEND", "http").parse()?,
            pdf_service_url: env_or("PDF_SERVICE_URL", "http://localhost:3000"),
            chromium_path: env_or("CHROMIUM_PATH", "chromium"),
            pdf_timeout_secs: env_or("PDF_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("PDF_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
