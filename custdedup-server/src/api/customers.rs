//! Customer record handlers: create, bulk upload, list, list by source, clear

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::debug;

use custdedup_types::{CustomerBulkUpload, CustomerCreate, CustomerRecord, MessageResponse};

use super::error::{api_error, from_app_error, from_write_error, ApiError};
use crate::state::AppState;

pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<CustomerRecord>), ApiError> {
    const CONTEXT: &str = "Failed to create customer";

    let Json(payload) = payload
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("{CONTEXT}: {}", e.body_text())))?;

    let record = state
        .service()
        .create_customer(payload)
        .await
        .map_err(|e| from_write_error(CONTEXT, e))?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn bulk_upload_customers(
    State(state): State<AppState>,
    payload: Result<Json<CustomerBulkUpload>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    const CONTEXT: &str = "Failed to bulk upload customers";

    let Json(upload) = payload
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("{CONTEXT}: {}", e.body_text())))?;
    debug!("Received bulk upload of {} customers", upload.customers.len());

    let records = state
        .service()
        .bulk_create_customers(upload)
        .await
        .map_err(|e| from_write_error(CONTEXT, e))?;

    let count = records.len();
    Ok((
        StatusCode::CREATED,
        Json(
            MessageResponse::new(format!("Successfully uploaded {count} customer records"))
                .with_details(serde_json::json!({"count": count})),
        ),
    ))
}

pub async fn get_all_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerRecord>>, ApiError> {
    state
        .service()
        .list_customers()
        .await
        .map(Json)
        .map_err(|e| from_app_error("Failed to list customers", e))
}

pub async fn get_customers_by_source(
    State(state): State<AppState>,
    Path(source): Path<String>,
) -> Result<Json<Vec<CustomerRecord>>, ApiError> {
    state
        .service()
        .customers_by_source_tag(&source)
        .await
        .map(Json)
        .map_err(|e| from_app_error("Failed to list customers by source", e))
}

pub async fn clear_all_customers(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state
        .service()
        .clear_all_customers()
        .await
        .map_err(|e| from_app_error("Failed to delete customers", e))?;

    Ok(Json(
        MessageResponse::new("Successfully deleted all customer records")
            .with_details(serde_json::json!({"deleted_count": deleted})),
    ))
}
