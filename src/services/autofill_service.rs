use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

const SYSTEM_PROMPT: &str =
    "You are a marketplace listing expert. Respond with pure JSON only, no Markdown formatting.";

fn user_prompt(name: &str) -> String {
    format!(
        "Generate SEO data for the product: \"{name}\". \
         Format: {{ \"description\": \"...\", \"seoTitle\": \"...\", \"seoDescription\": \"...\", \
         \"seoKeywords\": [\"...\", \"...\"], \"category\": 2477 }}"
    )
}

/// Ask the chat model for listing copy and parse the forced-JSON completion.
/// The parsed document is relayed to the caller as-is; mapping its keys onto
/// the draft is the form's job, which also tolerates missing fields.
pub async fn generate(state: &AppState, name: &str) -> AppResult<Value> {
    let content = state.chat.complete(SYSTEM_PROMPT, &user_prompt(name)).await?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::Upstream(format!("chat completion was not valid JSON: {e}")))
}
