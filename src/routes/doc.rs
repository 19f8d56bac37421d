use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{AutofillResult, CategoryHint, ProductDraft, ProductKind, ProductPayload},
    routes::{autofill, health, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        autofill::autofill_product,
        products::create_product,
    ),
    components(
        schemas(
            ProductKind,
            ProductDraft,
            ProductPayload,
            AutofillResult,
            CategoryHint,
            autofill::AutofillRequest,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Autofill", description = "LLM listing-copy generation"),
        (name = "Products", description = "Catalog forwarding"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
