use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    models::{
        DocumentListResponse, DocumentResponse, FilterCriteria, OptionsResponse, SORT_OPTIONS,
    },
    store::DocumentStore,
};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;
type ApiError = (StatusCode, Json<Value>);

fn not_found_error(message: &str) -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message })))
}

/// Elapsed wall-clock time in milliseconds, rounded to two decimal places.
fn elapsed_ms(start: Instant) -> f64 {
    (start.elapsed().as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
}

pub fn create_app() -> Router {
    let state = AppState {
        store: Arc::new(DocumentStore::with_sample_data()),
    };
    build_router(state)
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/documents", get(list_documents))
        .route("/documents/{id}", get(get_document))
        .route("/options", get(get_options))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "service": "Medical Document Catalog Service",
        "version": "1.0.0",
        "description": "In-memory catalog of medical journal documents with search and filters",
        "endpoints": {
            "GET /documents": "List documents, filterable by search, type and category",
            "GET /documents/{id}": "Get the full content of a single document",
            "GET /options": "Get the available filter options",
            "GET /health": "Health check"
        }
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// GET /documents
///
/// Optional query parameters:
/// - `search`: term matched case-insensitively against title or abstract
/// - `type`: document type (e.g. Review, Case Report, Clinical Study)
/// - `category`: document category (e.g. Cardiology, Neurology, Oncology)
async fn list_documents(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Json<DocumentListResponse> {
    let start = Instant::now();

    let documents = state.store.filter(&criteria);
    info!(
        "Listing documents: {} of {} matched",
        documents.len(),
        state.store.all().len()
    );

    Json(DocumentListResponse {
        documents,
        response_time_ms: elapsed_ms(start),
    })
}

/// GET /documents/{id}
///
/// Returns the full document with the given id, or a 404 error body if no
/// document has that id. Non-integer ids are rejected by the extractor
/// with a 400 before reaching the lookup.
async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<DocumentResponse> {
    let start = Instant::now();

    match state.store.get(id) {
        Some(document) => Ok(Json(DocumentResponse {
            document: document.clone(),
            response_time_ms: elapsed_ms(start),
        })),
        None => {
            info!("Document {} not found", id);
            Err(not_found_error("Document not found"))
        }
    }
}

/// GET /options
///
/// Returns the distinct categories and types present in the store, plus
/// the static sort descriptors used by clients to populate filter widgets.
async fn get_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    let start = Instant::now();

    Json(OptionsResponse {
        categories: state.store.categories(),
        types: state.store.types(),
        sort_options: SORT_OPTIONS.to_vec(),
        response_time_ms: elapsed_ms(start),
    })
}
