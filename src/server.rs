// Preview Server Module
//
// Purpose: serve the static site locally, plus a server-rendered copy of the
// project list (no-script fallback) and a JSON view of the parsed data file.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::dom::Element;
use crate::error::{LoadError, Result};
use crate::gallery::loader::{fill_page, load_projects, FetchedBody, ProjectSource};
use crate::page::Page;
use crate::project::Project;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub site_dir: PathBuf,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(site_dir: impl Into<PathBuf>, config: SiteConfig) -> Self {
        Self {
            site_dir: site_dir.into(),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Data File Source
// ============================================================================

/// Reads the data file straight from the site directory. A missing file
/// answers 404, like the static file service would.
pub struct FileSource<'a> {
    site_dir: &'a Path,
}

impl<'a> FileSource<'a> {
    pub fn new(site_dir: &'a Path) -> Self {
        Self { site_dir }
    }
}

impl ProjectSource for FileSource<'_> {
    async fn fetch(&self, url: &str) -> Result<FetchedBody> {
        let path = self.site_dir.join(url.trim_start_matches('/'));
        match tokio::fs::read_to_string(&path).await {
            Ok(body) => Ok(FetchedBody { status: 200, body }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FetchedBody {
                status: 404,
                body: String::new(),
            }),
            Err(e) => Err(LoadError::network(url, e)),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.site_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Parsed data file (JSON)
        .route("/api/projects", get(get_projects))

        // Server-rendered project list (HTML fragment)
        .route("/fragments/projects", get(projects_fragment))

        // Everything else is the static site
        .fallback_service(static_files)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn get_projects(State(state): State<AppState>) -> std::result::Result<Json<Vec<Project>>, AppError> {
    let source = FileSource::new(&state.site_dir);
    let projects = load_projects(&source, &state.config.projects_url).await?;
    Ok(Json(projects))
}

/// The list container exactly as the page would fill it
async fn projects_fragment(State(state): State<AppState>) -> Html<String> {
    let source = FileSource::new(&state.site_dir);
    let mut page = Page::with_list_container(&state.config.list_container_id);
    fill_page(&mut page, &source, &state.config).await;
    Html(page.list().map(Element::to_html).unwrap_or_default())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    NotFound(String),
    Internal(String),
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        match &err {
            LoadError::Status { status: 404, .. } => AppError::NotFound(err.to_string()),
            _ => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
