pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod startup;

use books_api::BooksApiClient;
use services::pdf::PdfRenderer;
use std::sync::Arc;

use crate::config::AuthSettings;

/// Shared application state: the upstream client, the PDF renderer, and the
/// configured operator credentials. Session state itself lives in the
/// session layer, never in a global.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<BooksApiClient>,
    pub pdf: Arc<PdfRenderer>,
    pub auth: Arc<AuthSettings>,
}

impl AppState {
    pub fn new(api: Arc<BooksApiClient>, pdf: Arc<PdfRenderer>, auth: Arc<AuthSettings>) -> Self {
        Self { api, pdf, auth }
    }
}
