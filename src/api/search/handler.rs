// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::search::SearchError;

use super::request::SearchApiRequest;
use super::response::SearchApiResponse;

/// POST /search - Resolve a query into a guide
///
/// # Request
/// - `query`: Free-text search query (required, max 500 chars)
/// - `credential`: Optional model access key
///
/// # Errors
/// - 400 Bad Request: invalid query, or missing credential (needsCredential)
/// - 401 Unauthorized: credential rejected upstream (needsCredential)
/// - 404 Not Found: nothing usable found for the query
/// - 500 Internal Server Error: model processing failed
pub async fn search_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchApiRequest>,
) -> Result<Json<SearchApiResponse>, ApiError> {
    debug!("Search request: {:?}", request.query);

    request.validate().map_err(ApiError::InvalidRequest)?;

    let outcome = state
        .search
        .search(&request.query, request.credential.as_deref())
        .await
        .map_err(|e| {
            if let SearchError::Upstream { ref message } = e {
                warn!("Model processing failed for '{}': {}", request.query, message);
            }
            ApiError::from(e)
        })?;

    info!(
        "Search complete for '{}' (cached: {})",
        request.query, outcome.cached
    );

    Ok(Json(SearchApiResponse::new(outcome)))
}
