pub mod builder;
pub mod config;
pub mod error;
pub mod filter;
pub mod images_to_text;
pub mod pipelines;
pub mod reference;
pub mod words;

use std::path::Path;

pub use builder::{ExtractedWords, IngredientFinder, IngredientFinderBuilder, InputSource};
pub use crate::config::FinderConfig;
pub use error::FinderError;
pub use filter::filter_ingredients;
pub use images_to_text::{ImageSource, TextSource, VisionClient};
pub use pipelines::IngredientReport;
pub use reference::ReferenceList;
pub use words::{extract_words, WordExtractor};

/// Finds the known ingredients in `text`.
///
/// Loads the reference list from the first line of `reference_file` and
/// returns the matching words in their original order and case.
pub fn find_ingredients(
    text: &str,
    reference_file: impl AsRef<Path>,
) -> Result<Vec<String>, FinderError> {
    let reference = ReferenceList::load(reference_file)?;
    Ok(pipelines::text::process(text, &reference).ingredients)
}

/// Recognizes text in one image with Google Vision and finds the known
/// ingredients in it.
///
/// Requires the GOOGLE_API_KEY environment variable to be set.
pub async fn find_ingredients_in_image(
    image_path: &str,
    reference_file: impl AsRef<Path>,
) -> Result<IngredientReport, FinderError> {
    IngredientFinder::builder()
        .image(image_path)
        .reference_file(reference_file.as_ref())
        .build()
        .await
}
