use crate::{
    clients::CatalogResponse,
    error::{AppError, AppResult},
    form,
    models::ProductPayload,
    state::AppState,
};

/// Forward one record to the catalog. The payload is re-checked against the
/// same field rules the form applies — the boundary does not trust the
/// client — and the upstream answer comes back untouched for relaying.
pub async fn create_product(
    state: &AppState,
    payload: ProductPayload,
) -> AppResult<CatalogResponse> {
    form::validate(&payload.draft).map_err(AppError::Validation)?;

    // The catalog expects a batch-shaped array even for a single record.
    state
        .catalog
        .create_nomenclature(std::slice::from_ref(&payload))
        .await
}
