pub mod image;
pub mod text;

use crate::filter::filter_ingredients;
use crate::images_to_text::TextSource;
use crate::reference::ReferenceList;
use crate::words::extract_words;
use crate::FinderError;
use serde::Serialize;

/// Result of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientReport {
    /// Every alphabetic word found in the text, in order
    pub words: Vec<String>,
    /// The words that are known ingredients, in order
    pub ingredients: Vec<String>,
    /// Where the text came from
    pub source: String,
}

/// Extracts words from `text` and keeps the known ingredients
pub fn find_in_text(text: &str, source: &str, reference: &ReferenceList) -> IngredientReport {
    let words = extract_words(text);
    let ingredients = filter_ingredients(&words, reference);

    IngredientReport {
        words,
        ingredients,
        source: source.to_string(),
    }
}

/// Reads text from `source` and runs it through [`find_in_text`]
pub async fn run(
    source: &dyn TextSource,
    reference: &ReferenceList,
) -> Result<IngredientReport, FinderError> {
    let text = source.read_text().await?;
    Ok(find_in_text(&text, &source.describe(), reference))
}
