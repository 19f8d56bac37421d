use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppResult, models::ProductPayload, services::catalog_service, state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/create-product",
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Upstream catalog response, relayed verbatim"),
        (status = 400, description = "Payload failed field validation"),
        (status = 502, description = "Catalog API unreachable"),
        (status = 504, description = "Catalog API timed out"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<Response> {
    let upstream = catalog_service::create_product(&state, payload).await?;

    // Mirror the upstream status code and body unchanged.
    Ok((
        upstream.status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response())
}
