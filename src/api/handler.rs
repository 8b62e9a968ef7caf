//! # Request Handlers
//!
//! Handlers for the review query and health endpoints. Raw query pairs
//! are extracted as a sequence so repeated `platforms`/`behaviors` keys
//! survive the transport; normalization collapses them into sets before
//! the engine sees them.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use crate::observability::Logger;
use crate::query::{QueryEngine, QueryRequest};
use crate::store::RecordStore;

use super::errors::{ApiError, ApiResult};
use super::response::{HealthResponse, QueryResponse};

/// Lists review items matching the given filters, paginated.
pub async fn list_review_items(
    State(store): State<Arc<RecordStore>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<QueryResponse>> {
    let request = QueryRequest::normalize(&params);
    let result = QueryEngine::execute(store.records(), &request);

    Logger::info(
        "QUERY_EXECUTED",
        &[
            ("matched", &result.total.to_string()),
            ("page", &request.page.to_string()),
            ("page_size", &request.page_size.to_string()),
        ],
    );

    Ok(Json(QueryResponse::from_result(&result)))
}

/// Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Fallback for paths outside the API surface.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
