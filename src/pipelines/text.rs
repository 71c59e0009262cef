use super::{find_in_text, IngredientReport};
use crate::reference::ReferenceList;

/// Runs already recognized text through the extractor and filter
pub fn process(text: &str, reference: &ReferenceList) -> IngredientReport {
    find_in_text(text, "direct-input", reference)
}
