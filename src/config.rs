use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// File whose first line lists the known ingredient names
    #[serde(default = "default_reference_file")]
    pub reference_file: PathBuf,
    /// Trim whitespace around reference entries before matching
    #[serde(default)]
    pub trim_entries: bool,
    /// Text recognition settings
    #[serde(default)]
    pub ocr: OcrConfig,
}

/// Configuration for the Google Cloud Vision text detection API
#[derive(Deserialize, Clone)]
pub struct OcrConfig {
    /// API key (falls back to the GOOGLE_API_KEY environment variable)
    pub api_key: Option<String>,
    /// Base URL for the Vision API (for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            reference_file: default_reference_file(),
            trim_entries: false,
            ocr: OcrConfig::default(),
        }
    }
}

impl fmt::Debug for OcrConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OcrConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_reference_file() -> PathBuf {
    PathBuf::from("RawIngredients.txt")
}

fn default_base_url() -> String {
    "https://vision.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with INGREDIENT_FINDER__ prefix
    /// 2. ingredient-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: INGREDIENT_FINDER__OCR__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Parse configuration from a TOML string, without reading the environment
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// Load configuration from file and environment variables
///
/// See [`FinderConfig::load`] for the lookup order.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("ingredient-finder").required(false))
        // Use double underscore for nested: INGREDIENT_FINDER__OCR__BASE_URL
        .add_source(
            Environment::with_prefix("INGREDIENT_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FinderConfig::default();
        assert_eq!(config.reference_file, PathBuf::from("RawIngredients.txt"));
        assert!(!config.trim_entries);
        assert!(config.ocr.api_key.is_none());
        assert_eq!(config.ocr.base_url, "https://vision.googleapis.com");
        assert_eq!(config.ocr.timeout, 30);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = FinderConfig::from_toml("").unwrap();
        assert_eq!(config.reference_file, PathBuf::from("RawIngredients.txt"));
        assert_eq!(config.ocr.timeout, 30);
    }

    #[test]
    fn test_toml_overrides() {
        let config = FinderConfig::from_toml(
            r#"
            reference_file = "data/pantry.txt"
            trim_entries = true

            [ocr]
            api_key = "test-key"
            timeout = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.reference_file, PathBuf::from("data/pantry.txt"));
        assert!(config.trim_entries);
        assert_eq!(config.ocr.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.ocr.timeout, 5);
        assert_eq!(config.ocr.base_url, "https://vision.googleapis.com");
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = FinderConfig::from_toml("[ocr]\napi_key = \"SECRET123\"\n").unwrap();
        let printed = format!("{:#?}", config);
        assert!(!printed.contains("SECRET123"));
        assert!(printed.contains("***"));
        assert!(format!("{:?}", FinderConfig::default()).contains("api_key: None"));
    }

    #[test]
    fn test_invalid_type_is_rejected() {
        let result = FinderConfig::from_toml("trim_entries = \"sometimes\"");
        assert!(result.is_err());
    }
}
