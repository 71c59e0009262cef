use std::path::PathBuf;
use std::time::Duration;

use log::{debug, warn};

use crate::{
    config::FinderConfig,
    filter::filter_ingredients,
    images_to_text::{ImageSource, ImageText, PlainText, TextFile, TextSource, VisionClient},
    pipelines::IngredientReport,
    words::extract_words,
    FinderError, ReferenceList,
};

/// Represents the input source for a run
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Already recognized text
    Text(String),
    /// File holding recognized text
    TextFile(PathBuf),
    /// Images to OCR using Google Vision
    Images(Vec<ImageSource>),
}

/// Builder for configuring and executing an ingredient search
#[derive(Debug, Default)]
pub struct IngredientFinderBuilder {
    source: Option<InputSource>,
    config: FinderConfig,
    reference: Option<ReferenceList>,
    timeout: Option<Duration>,
}

impl IngredientFinderBuilder {
    /// Set the input source to already recognized text
    ///
    /// # Example
    /// ```
    /// use ingredient_finder::IngredientFinder;
    ///
    /// let builder = IngredientFinder::builder()
    ///     .text("2 cups Flour, 1 cup sugar");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to a file with recognized text
    pub fn text_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::TextFile(path.into()));
        self
    }

    /// Add an image file to OCR
    ///
    /// Can be called several times; texts are combined in the order the
    /// images were added. Requires an API key, either set with
    /// [`api_key`](Self::api_key), in the config, or in GOOGLE_API_KEY.
    ///
    /// # Example
    /// ```
    /// use ingredient_finder::IngredientFinder;
    ///
    /// let builder = IngredientFinder::builder()
    ///     .image("/path/to/pantry-shelf.jpg")
    ///     .image("/path/to/fridge.jpg");
    /// ```
    pub fn image(self, image_path: impl Into<String>) -> Self {
        self.push_image(ImageSource::Path(image_path.into()))
    }

    /// Add base64-encoded image data to OCR
    pub fn image_base64(self, data: impl Into<String>) -> Self {
        self.push_image(ImageSource::Base64(data.into()))
    }

    fn push_image(mut self, image: ImageSource) -> Self {
        match &mut self.source {
            Some(InputSource::Images(images)) => images.push(image),
            _ => self.source = Some(InputSource::Images(vec![image])),
        }
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the reference file to load ingredient names from
    pub fn reference_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.reference_file = path.into();
        self
    }

    /// Use an already loaded reference list instead of reading a file
    pub fn reference_list(mut self, reference: ReferenceList) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Trim whitespace around reference entries before matching
    pub fn trim_entries(mut self, trim: bool) -> Self {
        self.config.trim_entries = trim;
        self
    }

    /// Set the API key for Google Vision
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.ocr.api_key = Some(key.into());
        self
    }

    /// Set the Google Vision base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.ocr.base_url = url.into();
        self
    }

    /// Set a timeout for OCR requests
    ///
    /// # Example
    /// ```
    /// use ingredient_finder::IngredientFinder;
    /// use std::time::Duration;
    ///
    /// let builder = IngredientFinder::builder()
    ///     .image("/path/to/recipe.jpg")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build and execute the search
    ///
    /// Equivalent to [`extract`](Self::extract) followed by
    /// [`ExtractedWords::filter`].
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - No input source was specified
    /// - The text source fails (unreadable file, OCR error, missing API key)
    /// - The reference file is missing or empty
    ///
    /// # Example
    /// ```no_run
    /// # use ingredient_finder::IngredientFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let report = IngredientFinder::builder()
    ///     .image("/path/to/recipe.jpg")
    ///     .reference_file("RawIngredients.txt")
    ///     .build()
    ///     .await?;
    /// println!("{:?}", report.ingredients);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<IngredientReport, FinderError> {
        self.extract().await?.filter()
    }

    /// Reads the text and extracts its words, without touching the
    /// reference list yet
    ///
    /// The words are available even when the reference file later turns
    /// out to be missing or empty.
    ///
    /// # Errors
    /// Returns `FinderError` if no input source was specified or the text
    /// source fails.
    pub async fn extract(self) -> Result<ExtractedWords, FinderError> {
        let source = self.source.ok_or_else(|| {
            FinderError::BuilderError(
                "No input source specified. Use .text(), .text_file() or .image()".to_string(),
            )
        })?;

        let mut config = self.config;
        if let Some(timeout) = self.timeout {
            config.ocr.timeout = timeout.as_secs().max(1);
        }

        let text_source: Box<dyn TextSource> = match source {
            InputSource::Text(text) => Box::new(PlainText(text)),
            InputSource::TextFile(path) => Box::new(TextFile(path)),
            InputSource::Images(images) => {
                let client = VisionClient::from_config(&config.ocr)?;
                Box::new(ImageText::new(client, images))
            }
        };

        let text = text_source.read_text().await?;

        Ok(ExtractedWords {
            words: extract_words(&text),
            source: text_source.describe(),
            reference: self.reference,
            config,
        })
    }
}

/// Words read from the input, waiting to be filtered
#[derive(Debug)]
pub struct ExtractedWords {
    words: Vec<String>,
    source: String,
    reference: Option<ReferenceList>,
    config: FinderConfig,
}

impl ExtractedWords {
    /// Every alphabetic word found in the text, in order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Where the text came from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Loads the reference list and keeps the known ingredients
    ///
    /// # Errors
    /// Returns `FinderError` if the reference file is missing or empty.
    pub fn filter(self) -> Result<IngredientReport, FinderError> {
        let reference = match self.reference {
            Some(reference) => reference,
            None => ReferenceList::load(&self.config.reference_file)?,
        };

        let reference = if self.config.trim_entries {
            reference.with_trimmed_entries()
        } else {
            let padded = reference.padded_entries();
            if padded > 0 {
                warn!(
                    "{} reference entries have surrounding whitespace and will only match if trimmed",
                    padded
                );
            }
            reference
        };

        debug!(
            "Filtering {} words from {} against {} reference entries",
            self.words.len(),
            self.source,
            reference.len()
        );

        let ingredients = filter_ingredients(&self.words, &reference);
        Ok(IngredientReport {
            words: self.words,
            ingredients,
            source: self.source,
        })
    }
}

/// Main entry point for the builder API
pub struct IngredientFinder;

impl IngredientFinder {
    /// Creates a new builder for an ingredient search
    ///
    /// # Example
    /// ```
    /// use ingredient_finder::IngredientFinder;
    ///
    /// let builder = IngredientFinder::builder();
    /// ```
    pub fn builder() -> IngredientFinderBuilder {
        IngredientFinderBuilder::default()
    }
}
