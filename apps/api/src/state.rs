use std::sync::Arc;

use crate::export::pdf::PdfGenerator;
use crate::identity::UserResolver;
use crate::repository::ResumeRepository;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every collaborator sits behind a trait so handlers can be driven against
/// in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub resumes: Arc<dyn ResumeRepository>,
    pub users: Arc<dyn UserResolver>,
    pub pdf: Arc<dyn PdfGenerator>,
}
