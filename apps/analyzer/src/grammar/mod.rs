//! Grammar Checker: counts grammar and style issues in résumé text.
//!
//! The checking engine is an external LanguageTool server reached over HTTP.
//! One client is built at startup and carried in `AppState` as
//! `Arc<dyn GrammarChecker>`; nothing else talks to the server.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::IgnoredAny, Deserialize};
use thiserror::Error;
use tracing::debug;

const CHECK_PATH: &str = "/v2/check";

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("grammar check timed out")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// The grammar checker trait. Only the total issue count is exposed; individual
/// matches are never inspected.
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    async fn count_issues(&self, text: &str) -> Result<usize, GrammarError>;
}

/// Body of a `/v2/check` response. Matches are counted, not read.
#[derive(Debug, Deserialize)]
struct CheckResponse {
    matches: Vec<IgnoredAny>,
}

/// LanguageTool HTTP client with a bounded request timeout.
#[derive(Clone)]
pub struct LanguageToolClient {
    client: Client,
    check_url: String,
    language: String,
}

impl LanguageToolClient {
    pub fn new(base_url: &str, language: &str, timeout: Duration) -> Result<Self, GrammarError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            check_url: check_url(base_url),
            language: language.to_string(),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolClient {
    async fn count_issues(&self, text: &str) -> Result<usize, GrammarError> {
        if text.trim().is_empty() {
            return Ok(0);
        }

        let response = self
            .client
            .post(&self.check_url)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GrammarError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CheckResponse = response.json().await.map_err(map_transport_error)?;

        debug!(
            "Grammar check succeeded: chars={}, issues={}",
            text.len(),
            body.matches.len()
        );

        Ok(body.matches.len())
    }
}

fn map_transport_error(e: reqwest::Error) -> GrammarError {
    if e.is_timeout() {
        GrammarError::Timeout
    } else {
        GrammarError::Http(e)
    }
}

/// Joins the server base URL with the check endpoint, tolerating a trailing slash
/// or a base URL that already ends in `/v2`.
fn check_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let base = base.strip_suffix("/v2").unwrap_or(base);
    format!("{base}{CHECK_PATH}")
}
