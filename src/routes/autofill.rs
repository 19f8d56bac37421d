use axum::{Json, extract::State};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::AutofillResult,
    services::autofill_service,
    state::AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AutofillRequest {
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/api/autofill-product",
    request_body = AutofillRequest,
    responses(
        (status = 200, description = "Generated listing copy", body = AutofillResult),
        (status = 400, description = "Name missing or empty"),
        (status = 500, description = "Upstream LLM failure or unparseable completion"),
        (status = 504, description = "Upstream LLM timed out"),
    ),
    tag = "Autofill"
)]
pub async fn autofill_product(
    State(state): State<AppState>,
    Json(payload): Json<AutofillRequest>,
) -> AppResult<Json<serde_json::Value>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    let data = autofill_service::generate(&state, payload.name.trim()).await?;
    Ok(Json(data))
}
