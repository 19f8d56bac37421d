use axum::{Router, routing::post};

use crate::state::AppState;

pub mod autofill;
pub mod doc;
pub mod health;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/autofill-product", post(autofill::autofill_product))
        .route("/create-product", post(products::create_product))
}
