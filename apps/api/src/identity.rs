//! Fingerprint-based caller identity.
//!
//! Accounts are anonymous: a browser fingerprint, sent as the `x-fingerprint` header
//! or the `fingerprint` cookie, maps to at most one user.

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use sqlx::PgPool;

use crate::models::user::User;

pub const FINGERPRINT_HEADER: &str = "x-fingerprint";
pub const FINGERPRINT_COOKIE: &str = "fingerprint";

#[async_trait]
pub trait UserResolver: Send + Sync {
    async fn resolve_user(&self, fingerprint: &str) -> Result<Option<User>>;
}

/// The caller's fingerprint: the header wins over the cookie; blank values count as absent.
pub fn fingerprint_from_headers(headers: &HeaderMap) -> Option<String> {
    let from_header = headers
        .get(FINGERPRINT_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    if let Some(fingerprint) = from_header {
        return Some(fingerprint.to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == FINGERPRINT_COOKIE)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|v| !v.is_empty())
}

pub struct PgUserResolver {
    pool: PgPool,
}

impl PgUserResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserResolver for PgUserResolver {
    async fn resolve_user(&self, fingerprint: &str) -> Result<Option<User>> {
        sqlx::query_as("SELECT id, fingerprint, created_at FROM users WHERE fingerprint = $1")
            .bind(fingerprint)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to resolve user by fingerprint")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_header_takes_precedence_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(FINGERPRINT_HEADER, HeaderValue::from_static(" abc "));
        headers.insert(header::COOKIE, HeaderValue::from_static("fingerprint=zzz"));
        assert_eq!(fingerprint_from_headers(&headers).as_deref(), Some("abc"));
    }

    #[test]
    fn test_cookie_is_used_without_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; fingerprint=\"f-123\"; other=1"),
        );
        assert_eq!(fingerprint_from_headers(&headers).as_deref(), Some("f-123"));
    }

    #[test]
    fn test_blank_or_missing_fingerprint_is_none() {
        let mut headers = HeaderMap::new();
        assert_eq!(fingerprint_from_headers(&headers), None);
        headers.insert(FINGERPRINT_HEADER, HeaderValue::from_static("  "));
        headers.insert(header::COOKIE, HeaderValue::from_static("fingerprints=x; fingerprint="));
        assert_eq!(fingerprint_from_headers(&headers), None);
    }
}
