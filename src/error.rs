use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while finding ingredients
#[derive(Error, Debug)]
pub enum FinderError {
    /// The reference file could not be opened or read
    #[error("Failed to read reference file {}: {source}", .path.display())]
    ReferenceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reference file has no line to read
    #[error("Reference file {} is empty", .0.display())]
    EmptyReferenceFile(PathBuf),

    /// The text source could not produce any text
    #[error("Failed to read text: {0}")]
    TextSource(String),

    /// Text recognition failed or returned nothing
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// HTTP request to the OCR service failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// No API key for the OCR service
    #[error("GOOGLE_API_KEY environment variable not set")]
    MissingApiKey,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
