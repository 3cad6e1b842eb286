//! Set analysis handlers

use axum::{extract::State, response::Json};

use custdedup_types::{DeduplicationResult, SourceComparisonResult};

use super::error::{from_app_error, ApiError};
use crate::state::AppState;

/// Total records, distinct customer ids and duplicates across all sources.
pub async fn analyze_deduplication(
    State(state): State<AppState>,
) -> Result<Json<DeduplicationResult>, ApiError> {
    state
        .service()
        .deduplicate_customers()
        .await
        .map(Json)
        .map_err(|e| from_app_error("Failed to analyze customers", e))
}

/// Customers present in every source, and customers exclusive to each source.
pub async fn compare_sources(
    State(state): State<AppState>,
) -> Result<Json<SourceComparisonResult>, ApiError> {
    state
        .service()
        .compare_sources()
        .await
        .map(Json)
        .map_err(|e| from_app_error("Failed to compare sources", e))
}
