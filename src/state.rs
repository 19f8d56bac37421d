use std::sync::Arc;

use crate::clients::{CatalogClient, ChatClient, GroqClient, TableCrmClient};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<dyn ChatClient>,
    pub catalog: Arc<dyn CatalogClient>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            chat: Arc::new(GroqClient::new(
                config.groq_api_key.clone(),
                config.groq_model.clone(),
                config.groq_base_url.clone(),
                config.upstream_timeout,
            )),
            catalog: Arc::new(TableCrmClient::new(
                config.catalog_url.clone(),
                config.catalog_token.clone(),
                config.upstream_timeout,
            )),
        }
    }
}
