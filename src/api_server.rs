// Axum API Server Module
//
// Purpose: JSON API over the in-memory plant catalog (browse, search, detail)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use std::sync::Arc;

use crate::catalog::{Catalog, SearchKind, FEATURED_COUNT};
use crate::plant::PlantRecord;
use crate::view_models::{cards, SearchResults};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// State backed by the built-in catalog
    pub fn new() -> anyhow::Result<Self> {
        tracing::info!("Loading built-in plant catalog...");
        let catalog = Catalog::builtin()?;
        Ok(Self::with_catalog(catalog))
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Plant endpoints
        // Static segments ("featured", "search") win over :id
        .route("/api/plants", get(list_plants))
        .route("/api/plants/featured", get(featured_plants))
        .route("/api/plants/search", get(search_plants))
        .route("/api/plants/:id", get(get_plant))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "plants": state.catalog.len(),
    }))
}

/// Browse all herbs
async fn list_plants(State(state): State<AppState>) -> Json<serde_json::Value> {
    let data = cards(state.catalog.all());

    Json(serde_json::json!({
        "rows": data.len(),
        "data": data,
    }))
}

/// Home page featured strip
async fn featured_plants(State(state): State<AppState>) -> Json<serde_json::Value> {
    let data = cards(state.catalog.featured(FEATURED_COUNT));

    Json(serde_json::json!({
        "rows": data.len(),
        "data": data,
    }))
}

/// GET /api/plants/search?q=stress&type=ailment
///
/// `type` defaults to name search. An empty result is a normal 200 response;
/// the client renders its own "no results" state.
async fn search_plants(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResults>, AppError> {
    let kind = match params.kind.as_deref() {
        Some(raw) => raw
            .parse::<SearchKind>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?,
        None => SearchKind::default(),
    };
    let query = params.q.unwrap_or_default();

    let start = std::time::Instant::now();
    let plants = state.catalog.search(kind, &query);
    let elapsed = start.elapsed();

    tracing::debug!("{} search '{}' returned {} results in {:?}",
        kind, query, plants.len(), elapsed);

    Ok(Json(SearchResults::new(&query, kind, &plants)))
}

/// Plant detail; 404 when the id is unknown
async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlantRecord>, AppError> {
    tracing::debug!("Fetching plant {}", id);

    state
        .catalog
        .get_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Plant {} not found", id)))
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(serde::Deserialize, Debug)]
struct SearchQuery {
    q: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
