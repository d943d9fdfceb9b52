// src/error.rs
use rclayout_document::DocumentError;
use rclayout_preview::PreviewError;
use thiserror::Error;

/// A comprehensive error type for config ingestion and conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid layout config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document generation failed: {0}")]
    Document(#[from] DocumentError),

    #[error("Preview failed: {0}")]
    Preview(#[from] PreviewError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
