// Library exports for the api binary and tests
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use config::Config;
use services::{gemini::GeminiClient, sheets::SheetsClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sheets: Arc<SheetsClient>,
    pub gemini: Arc<GeminiClient>,
}
