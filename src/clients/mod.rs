pub mod catalog;
pub mod llm;

pub use catalog::{CatalogClient, CatalogResponse, TableCrmClient};
pub use llm::{ChatClient, GroqClient};

use crate::error::AppError;

// The catalog token rides in the query string and reqwest includes the full
// URL in its error messages, so strip the URL before the message can reach a
// log line or a client response.
pub(crate) fn upstream_error(upstream: &str, err: reqwest::Error) -> AppError {
    let err = err.without_url();
    if err.is_timeout() {
        AppError::Timeout(format!("{upstream} request timed out"))
    } else if err.is_connect() {
        AppError::Unreachable(format!("{upstream} is unreachable: {err}"))
    } else {
        AppError::Unreachable(format!("{upstream} request failed: {err}"))
    }
}
