use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Json,
    body::{Bytes, to_bytes},
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};

use marketplace_entry_api::{
    clients::{CatalogClient, CatalogResponse, ChatClient},
    error::{AppError, AppResult},
    form::ProductForm,
    models::{ProductDraft, ProductPayload},
    routes::{
        autofill::{AutofillRequest, autofill_product},
        products::create_product,
    },
    state::AppState,
};

// Scripted doubles for the two upstream seams.

struct ScriptedChat(&'static str);

#[async_trait]
impl ChatClient for ScriptedChat {
    async fn complete(&self, _system: &str, _user: &str) -> AppResult<String> {
        Ok(self.0.to_string())
    }
}

struct TimedOutChat;

#[async_trait]
impl ChatClient for TimedOutChat {
    async fn complete(&self, _system: &str, _user: &str) -> AppResult<String> {
        Err(AppError::Timeout("chat API request timed out".into()))
    }
}

struct RecordingCatalog {
    status: StatusCode,
    body: &'static str,
    seen: Mutex<Vec<Value>>,
}

impl RecordingCatalog {
    fn new(status: StatusCode, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CatalogClient for RecordingCatalog {
    async fn create_nomenclature(&self, batch: &[ProductPayload]) -> AppResult<CatalogResponse> {
        self.seen
            .lock()
            .unwrap()
            .push(serde_json::to_value(batch).unwrap());
        Ok(CatalogResponse {
            status: self.status,
            body: Bytes::from_static(self.body.as_bytes()),
        })
    }
}

fn state_with(chat: Arc<dyn ChatClient>, catalog: Arc<dyn CatalogClient>) -> AppState {
    AppState { chat, catalog }
}

fn valid_payload() -> ProductPayload {
    let mut form = ProductForm::new();
    form.draft_mut().name = "X".into();
    form.draft_mut().code = "C1".into();
    form.payload().expect("valid draft")
}

async fn body_of(response: axum::response::Response) -> Bytes {
    to_bytes(response.into_body(), usize::MAX).await.unwrap()
}

#[tokio::test]
async fn autofill_relays_the_parsed_completion_verbatim() {
    // Extra keys must survive the relay; the server does not re-shape.
    let state = state_with(
        Arc::new(ScriptedChat(
            r#"{"description":"D","seoTitle":"T","seoKeywords":["a"],"title":"extra"}"#,
        )),
        RecordingCatalog::new(StatusCode::OK, "[]"),
    );

    let Json(data) = autofill_product(
        State(state),
        Json(AutofillRequest {
            name: "Smart Kettle".into(),
        }),
    )
    .await
    .expect("autofill succeeds");

    assert_eq!(
        data,
        json!({"description":"D","seoTitle":"T","seoKeywords":["a"],"title":"extra"})
    );
}

#[tokio::test]
async fn autofill_without_a_name_is_a_400_and_never_calls_upstream() {
    struct PanickingChat;

    #[async_trait]
    impl ChatClient for PanickingChat {
        async fn complete(&self, _system: &str, _user: &str) -> AppResult<String> {
            panic!("autofill must not reach the chat client without a name");
        }
    }

    let state = state_with(
        Arc::new(PanickingChat),
        RecordingCatalog::new(StatusCode::OK, "[]"),
    );

    let err = autofill_product(State(state), Json(AutofillRequest { name: "  ".into() }))
        .await
        .expect_err("empty name must be rejected");

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body_of(response).await).unwrap();
    assert_eq!(body, json!({"error": "Name is required"}));
}

#[tokio::test]
async fn malformed_completion_is_a_500_upstream_error() {
    let state = state_with(
        Arc::new(ScriptedChat("not json at all")),
        RecordingCatalog::new(StatusCode::OK, "[]"),
    );

    let err = autofill_product(
        State(state),
        Json(AutofillRequest {
            name: "Smart Kettle".into(),
        }),
    )
    .await
    .expect_err("garbage completion must fail");

    assert!(matches!(err, AppError::Upstream(_)));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn chat_timeout_maps_to_504() {
    let state = state_with(
        Arc::new(TimedOutChat),
        RecordingCatalog::new(StatusCode::OK, "[]"),
    );

    let err = autofill_product(
        State(state),
        Json(AutofillRequest {
            name: "Smart Kettle".into(),
        }),
    )
    .await
    .expect_err("timeout must surface");

    assert_eq!(err.into_response().status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn create_product_wraps_the_record_in_a_single_element_batch() {
    let catalog = RecordingCatalog::new(StatusCode::OK, r#"[{"id":1}]"#);
    let state = state_with(Arc::new(ScriptedChat("{}")), catalog.clone());

    let response = create_product(State(state), Json(valid_payload()))
        .await
        .expect("forwarding succeeds");
    assert_eq!(response.status(), StatusCode::OK);

    let seen = catalog.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let batch = seen[0].as_array().expect("batch-shaped body");
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0]["name"], "X");
    assert_eq!(batch[0]["code"], "C1");
    assert_eq!(batch[0]["global_category_id"], 127);
}

#[tokio::test]
async fn upstream_status_and_body_are_relayed_unchanged() {
    let catalog = RecordingCatalog::new(StatusCode::UNPROCESSABLE_ENTITY, r#"{"error":"dup code"}"#);
    let state = state_with(Arc::new(ScriptedChat("{}")), catalog);

    let response = create_product(State(state), Json(valid_payload()))
        .await
        .expect("non-2xx upstream is not a local error");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(&body_of(response).await[..], &br#"{"error":"dup code"}"#[..]);
}

#[tokio::test]
async fn create_product_revalidates_before_forwarding() {
    let catalog = RecordingCatalog::new(StatusCode::OK, "[]");
    let state = state_with(Arc::new(ScriptedChat("{}")), catalog.clone());

    // Client-shaped payload with an empty SKU; the boundary must not trust it.
    let mut draft = ProductDraft::default();
    draft.name = "X".into();
    let err = create_product(State(state), Json(ProductPayload::from_draft(draft)))
        .await
        .expect_err("invalid payload must be rejected");

    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    assert!(catalog.seen.lock().unwrap().is_empty());
}
