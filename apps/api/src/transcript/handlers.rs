//! Axum route handlers for the Transcript API.

use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::student::StudentProfile;
use crate::transcript::parser::parse_transcript_text;

const FILE_FIELD: &str = "file";
/// Request body cap for uploads. Scanned transcripts run well past axum's 2 MB default.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct TranscriptUploadResponse {
    pub success: bool,
    pub profile: StudentProfile,
    pub message: String,
}

/// POST /api/v1/transcript/upload
///
/// Multipart upload with a `file` field holding a PDF transcript. Extraction
/// failures are reported in-band (`success: false`), not as HTTP errors.
pub async fn handle_upload(
    mut multipart: Multipart,
) -> Result<Json<TranscriptUploadResponse>, AppError> {
    let (filename, data) = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
            .ok_or_else(|| AppError::Validation(format!("Missing '{FILE_FIELD}' field")))?;

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !filename.ends_with(".pdf") {
            return Err(AppError::Validation(
                "Only PDF files are allowed".to_string(),
            ));
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        break (filename, data);
    };

    info!("Parsing transcript '{filename}' ({} bytes)", data.len());

    let extracted =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)).await;

    let response = match extracted {
        Ok(Ok(text)) => TranscriptUploadResponse {
            success: true,
            profile: parse_transcript_text(&text),
            message: "Transcript parsed successfully".to_string(),
        },
        Ok(Err(e)) => failed_upload(e.to_string()),
        Err(e) => failed_upload(e.to_string()),
    };

    Ok(Json(response))
}

fn failed_upload(reason: String) -> TranscriptUploadResponse {
    warn!("Transcript extraction failed: {reason}");
    TranscriptUploadResponse {
        success: false,
        profile: StudentProfile::default(),
        message: format!("Error parsing transcript: {reason}"),
    }
}
