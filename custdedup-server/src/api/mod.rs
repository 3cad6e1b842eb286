//! API Routes
//!
//! REST endpoints over the customer service, mounted under `/api/v1`.

mod customers;
mod deduplication;
mod error;


use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

pub use error::ErrorBody;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // Customers
        .route(
            "/customers",
            get(customers::get_all_customers)
                .post(customers::create_customer)
                .delete(customers::clear_all_customers),
        )
        .route("/customers/bulk", post(customers::bulk_upload_customers))
        .route("/customers/source/:source", get(customers::get_customers_by_source))
        // Deduplication
        .route("/deduplication/analyze", get(deduplication::analyze_deduplication))
        .route("/deduplication/compare-sources", get(deduplication::compare_sources))
        // API fallback: return 404 for unknown API endpoints
        .fallback(api_not_found)
}

async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}
