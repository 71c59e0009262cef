use super::ImageSource;
use crate::config::OcrConfig;
use crate::FinderError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const ANNOTATE_PATH: &str = "/v1/images:annotate";

/// Client for the Google Cloud Vision `TEXT_DETECTION` feature
#[derive(Debug, Clone)]
pub struct VisionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl VisionClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FinderError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from configuration
    ///
    /// The API key comes from `ocr.api_key`, or the GOOGLE_API_KEY
    /// environment variable when the config has none.
    ///
    /// # Errors
    /// Returns `FinderError::MissingApiKey` if neither is set.
    pub fn from_config(config: &OcrConfig) -> Result<Self, FinderError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or(FinderError::MissingApiKey)?;

        Self::new(
            api_key,
            config.base_url.as_str(),
            Duration::from_secs(config.timeout),
        )
    }

    /// Extracts text from an image source
    ///
    /// # Errors
    /// Returns an error if:
    /// - The image file cannot be read
    /// - The Vision API request fails or reports an error
    /// - No text is detected in the image
    pub async fn extract(&self, source: &ImageSource) -> Result<String, FinderError> {
        match source {
            ImageSource::Path(path) => {
                let image_data = tokio::fs::read(path).await.map_err(|e| {
                    FinderError::TextSource(format!("Failed to read image {}: {}", path, e))
                })?;
                self.detect_text(&STANDARD.encode(&image_data)).await
            }
            ImageSource::Base64(data) => self.detect_text(data).await,
        }
    }

    async fn detect_text(&self, base64_image: &str) -> Result<String, FinderError> {
        let url = format!("{}{}", self.base_url, ANNOTATE_PATH);

        let request_body = json!({
            "requests": [{
                "image": {
                    "content": base64_image
                },
                "features": [{
                    "type": "TEXT_DETECTION"
                }]
            }]
        });

        debug!("Sending OCR request to Google Vision API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Accept-Encoding", "identity")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(FinderError::Ocr(format!(
                "Google Vision API error ({}): {}",
                status, error_text
            )));
        }

        let response_body: Value = response.json().await?;
        parse_annotation(&response_body)
    }
}

/// Reads the detected text out of an `images:annotate` response
fn parse_annotation(body: &Value) -> Result<String, FinderError> {
    let annotation = &body["responses"][0];

    // per-image failures come back with a 200 status
    if let Some(message) = annotation["error"]["message"].as_str() {
        return Err(FinderError::Ocr(message.to_string()));
    }

    let text = annotation["fullTextAnnotation"]["text"]
        .as_str()
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(FinderError::Ocr("No text detected in image".to_string()));
    }

    debug!("Extracted text from image: {} characters", text.len());

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_annotation_text() {
        let body = json!({
            "responses": [{
                "fullTextAnnotation": { "text": "Flour\nSugar\n" }
            }]
        });
        assert_eq!(parse_annotation(&body).unwrap(), "Flour\nSugar\n");
    }

    #[test]
    fn test_parse_annotation_without_text() {
        let body = json!({ "responses": [{}] });
        let err = parse_annotation(&body).unwrap_err();
        assert!(err.to_string().contains("No text detected"));
    }

    #[test]
    fn test_parse_annotation_blank_text() {
        let body = json!({
            "responses": [{ "fullTextAnnotation": { "text": "  \n" } }]
        });
        assert!(matches!(parse_annotation(&body), Err(FinderError::Ocr(_))));
    }

    #[test]
    fn test_parse_annotation_error() {
        let body = json!({
            "responses": [{ "error": { "code": 3, "message": "Bad image data." } }]
        });
        match parse_annotation(&body) {
            Err(FinderError::Ocr(message)) => assert_eq!(message, "Bad image data."),
            other => panic!("Expected OCR error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_uses_configured_key() {
        let config = OcrConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        let client = VisionClient::from_config(&config).unwrap();
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, "https://vision.googleapis.com");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client =
            VisionClient::new("key", "http://localhost:1234/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url, "http://localhost:1234");
    }

    #[tokio::test]
    async fn test_missing_image_file() {
        let client =
            VisionClient::new("key", "http://localhost:1", Duration::from_secs(1)).unwrap();
        let source = ImageSource::Path("/nonexistent/recipe.jpg".to_string());
        let result = client.extract(&source).await;
        assert!(matches!(result, Err(FinderError::TextSource(_))));
    }
}
