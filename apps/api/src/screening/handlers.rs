use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::errors::AppError;
use crate::screening::document::Document;
use crate::screening::evaluate::{evaluate_batch, BatchReport};
use crate::screening::{THRESHOLD_MAX, THRESHOLD_MIN};
use crate::state::AppState;

/// POST /api/v1/screenings
///
/// Multipart form: one or more `files` parts (the résumés) and an optional
/// `threshold` text field. Extraction and scoring run on the blocking pool
/// since pdf/docx parsing is synchronous CPU work.
pub async fn handle_screening(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<BatchReport>, AppError> {
    let mut documents: Vec<Document> = Vec::new();
    let mut threshold = state.config.default_threshold;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("files") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::Validation("each 'files' part needs a filename".to_string())
                    })?
                    .to_string();
                let bytes = field.bytes().await?;
                documents.push(Document::new(filename, bytes));
            }
            Some("threshold") => {
                let raw = field.text().await?;
                threshold = parse_threshold(&raw)?;
            }
            _ => {} // unknown fields are ignored
        }
    }

    if documents.is_empty() {
        return Err(AppError::Validation(
            "at least one 'files' part is required".to_string(),
        ));
    }

    let report = tokio::task::spawn_blocking(move || evaluate_batch(&documents, threshold))
        .await
        .map_err(|e| AppError::Internal(anyhow!("screening task panicked: {e}")))?;

    Ok(Json(report))
}

fn parse_threshold(raw: &str) -> Result<u32, AppError> {
    let value: u32 = raw.trim().parse().map_err(|_| {
        AppError::Validation(format!("threshold must be an integer, got '{raw}'"))
    })?;
    if !(THRESHOLD_MIN..=THRESHOLD_MAX).contains(&value) {
        return Err(AppError::Validation(format!(
            "threshold must be between {THRESHOLD_MIN} and {THRESHOLD_MAX}, got {value}"
        )));
    }
    Ok(value)
}
