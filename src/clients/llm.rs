use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::error::{AppError, AppResult};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    response_format: ResponseFormat<'a>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(serde::Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat-completion seam. The autofill service talks to this trait so tests
/// can script completions without a network.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Run one system+user exchange and return the completion content.
    async fn complete(&self, system: &str, user: &str) -> AppResult<String>;
}

/// HTTP client for the Groq OpenAI-compatible chat-completion API.
///
/// Every request forces JSON-object output, so the content of the first
/// choice is expected to parse as a JSON document. The API key stays inside
/// this client; error messages carry only the upstream status and body.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

impl GroqClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base: String = base_url.into();
        let trimmed = base.trim_end_matches('/');
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url: format!("{trimmed}{CHAT_COMPLETIONS_PATH}"),
        }
    }
}

#[async_trait]
impl ChatClient for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> AppResult<String> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| super::upstream_error("chat API", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, "chat API rejected the request");
            return Err(AppError::Upstream(format!("chat API returned {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| {
                AppError::Upstream(format!(
                    "chat API response did not parse: {}",
                    e.without_url()
                ))
            })?;

        // Mirror the upstream convention of an empty completion meaning "{}".
        Ok(api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_else(|| "{}".to_string()))
    }
}
