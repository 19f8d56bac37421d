use std::{env, time::Duration};

use anyhow::Context;

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai";
/// Pinned completion model; override only with another JSON-mode model.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_CATALOG_URL: &str = "https://app.tablecrm.com/api/v1/nomenclature";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub groq_model: String,
    pub catalog_url: String,
    pub catalog_token: String,
    /// Deadline applied to both outbound calls.
    pub upstream_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let groq_api_key = env::var("GROQ_API_KEY").context("GROQ_API_KEY must be set")?;
        let catalog_token = env::var("CATALOG_TOKEN").context("CATALOG_TOKEN must be set")?;
        let groq_base_url =
            env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_GROQ_BASE_URL.to_string());
        let groq_model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string());
        let catalog_url =
            env::var("CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        let upstream_timeout = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(30));
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            host,
            port,
            groq_api_key,
            groq_base_url,
            groq_model,
            catalog_url,
            catalog_token,
            upstream_timeout,
        })
    }
}
