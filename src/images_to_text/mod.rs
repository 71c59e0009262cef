//! Sources of the raw text that ingredients are searched in.
//!
//! Photos go through Google Cloud Vision; text that was recognized
//! elsewhere can be passed in directly or read from a file.

pub mod ocr;

pub use ocr::VisionClient;

use crate::FinderError;
use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;

/// Represents the source of an image for OCR processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Image from a file path
    Path(String),
    /// Image as base64-encoded data
    Base64(String),
}

impl ImageSource {
    /// Label used in reports
    pub fn label(&self) -> &str {
        match self {
            ImageSource::Path(path) => path,
            ImageSource::Base64(_) => "base64-image",
        }
    }
}

/// Anything that can supply the raw text for one run
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn read_text(&self) -> Result<String, FinderError>;

    /// Short description of where the text came from
    fn describe(&self) -> String;
}

/// Text that is already in memory
#[derive(Debug, Clone)]
pub struct PlainText(pub String);

#[async_trait]
impl TextSource for PlainText {
    async fn read_text(&self) -> Result<String, FinderError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "direct-input".to_string()
    }
}

/// Text stored in a file, e.g. the output of another OCR tool
#[derive(Debug, Clone)]
pub struct TextFile(pub PathBuf);

#[async_trait]
impl TextSource for TextFile {
    async fn read_text(&self) -> Result<String, FinderError> {
        tokio::fs::read_to_string(&self.0).await.map_err(|e| {
            FinderError::TextSource(format!("Failed to read {}: {}", self.0.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.0.display().to_string()
    }
}

/// One or more images recognized with Google Cloud Vision.
///
/// Images are processed in order and their texts joined by a blank line.
#[derive(Debug, Clone)]
pub struct ImageText {
    client: VisionClient,
    images: Vec<ImageSource>,
}

impl ImageText {
    pub fn new(client: VisionClient, images: Vec<ImageSource>) -> Self {
        Self { client, images }
    }
}

#[async_trait]
impl TextSource for ImageText {
    async fn read_text(&self) -> Result<String, FinderError> {
        if self.images.is_empty() {
            return Err(FinderError::TextSource("No images given".to_string()));
        }

        let mut all_text = Vec::with_capacity(self.images.len());
        for image in &self.images {
            debug!("Recognizing text in {}", image.label());
            all_text.push(self.client.extract(image).await?);
        }

        Ok(all_text.join("\n\n"))
    }

    fn describe(&self) -> String {
        self.images
            .iter()
            .map(ImageSource::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_image_source_label() {
        assert_eq!(ImageSource::Path("a.jpg".to_string()).label(), "a.jpg");
        assert_eq!(
            ImageSource::Base64("aGVsbG8=".to_string()).label(),
            "base64-image"
        );
    }

    #[tokio::test]
    async fn test_plain_text_source() {
        let source = PlainText("2 cups flour".to_string());
        assert_eq!(source.read_text().await.unwrap(), "2 cups flour");
        assert_eq!(source.describe(), "direct-input");
    }

    #[tokio::test]
    async fn test_missing_text_file() {
        let source = TextFile(PathBuf::from("/nonexistent/ocr.txt"));
        assert!(matches!(
            source.read_text().await,
            Err(FinderError::TextSource(_))
        ));
    }

    #[tokio::test]
    async fn test_image_text_requires_images() {
        let client =
            VisionClient::new("key", "http://localhost:1", Duration::from_secs(1)).unwrap();
        let source = ImageText::new(client, Vec::new());
        assert!(source.read_text().await.is_err());
    }

    #[test]
    fn test_image_text_description() {
        let client =
            VisionClient::new("key", "http://localhost:1", Duration::from_secs(1)).unwrap();
        let source = ImageText::new(
            client,
            vec![
                ImageSource::Path("front.jpg".to_string()),
                ImageSource::Base64("aGVsbG8=".to_string()),
            ],
        );
        assert_eq!(source.describe(), "front.jpg, base64-image");
    }
}
