//! Text Extractor: turns an uploaded document into plain text.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Pluggable document-to-text backend, carried in `AppState` as `Arc<dyn DocumentExtractor>`.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError>;
}

const PDF_MAGIC: &[u8] = b"%PDF-";

/// PDF extraction via `pdf-extract`. Parsing is CPU-bound and runs on the blocking pool;
/// a panic inside the parser is reported as an unreadable document.
pub struct PdfExtractor;

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    async fn extract_text(&self, document: Bytes) -> Result<String, AppError> {
        if !looks_like_pdf(&document) {
            return Err(AppError::UnreadableDocument(
                "upload is not a PDF document".to_string(),
            ));
        }

        let size = document.len();
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&document))
            .await
            .map_err(|e| AppError::UnreadableDocument(format!("PDF parser aborted: {e}")))?
            .map_err(|e| AppError::UnreadableDocument(format!("PDF parse failed: {e}")))?;

        debug!("Extracted {} chars from {} byte PDF", text.len(), size);
        Ok(text)
    }
}

/// Accepts leading whitespace/garbage within the first KiB, as PDF readers do.
fn looks_like_pdf(document: &[u8]) -> bool {
    let head = &document[..document.len().min(1024)];
    head.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}
