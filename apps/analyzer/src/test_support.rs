//! Stub seam implementations shared by unit tests.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;
use crate::extract::DocumentExtractor;
use crate::grammar::{GrammarChecker, GrammarError};

/// Returns a fixed résumé text for any document, or fails as unreadable.
pub struct StubExtractor(Option<String>);

impl StubExtractor {
    pub fn new(text: &str) -> Self {
        Self(Some(text.to_string()))
    }

    pub fn unreadable() -> Self {
        Self(None)
    }
}

#[async_trait]
impl DocumentExtractor for StubExtractor {
    async fn extract_text(&self, _document: Bytes) -> Result<String, AppError> {
        self.0
            .clone()
            .ok_or_else(|| AppError::UnreadableDocument("stub".to_string()))
    }
}

pub struct FixedGrammar(pub usize);

#[async_trait]
impl GrammarChecker for FixedGrammar {
    async fn count_issues(&self, _text: &str) -> Result<usize, GrammarError> {
        Ok(self.0)
    }
}

pub struct FailingGrammar;

#[async_trait]
impl GrammarChecker for FailingGrammar {
    async fn count_issues(&self, _text: &str) -> Result<usize, GrammarError> {
        Err(GrammarError::Timeout)
    }
}
