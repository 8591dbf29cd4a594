use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;

/// GET /download/:report
///
/// Streams a previously generated report as an attachment. Unknown or
/// malformed names are 404s.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(report): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let path = state.storage.resolve_report(&report).await?;
    let file = tokio::fs::File::open(&path).await?;
    let len = file.metadata().await?.len();
    debug!("Serving report {report} ({len} bytes)");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_LENGTH, len.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{report}\""),
            ),
        ],
        Body::from_stream(ReaderStream::new(file)),
    ))
}
