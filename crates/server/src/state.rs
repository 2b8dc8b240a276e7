use std::path::Path;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;
use parking_lot::Mutex;
use resolver::Resolver;
use serde::{Deserialize, Serialize};

use crate::config::{SiteConfig, SitePaths};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub paths: Arc<SitePaths>,
    pub resolver: Arc<Resolver>,
    /// Serializes appends to the booking requests file.
    pub requests_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: SiteConfig, config_path: &Path) -> Self {
        let paths = SitePaths::resolve(config_path, &config);
        let resolver = Resolver::new(config.releases.clone());
        Self {
            config: Arc::new(config),
            paths: Arc::new(paths),
            resolver: Arc::new(resolver),
            requests_lock: Arc::new(Mutex::new(())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub details: Option<String>,
}

pub type JsonResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;
