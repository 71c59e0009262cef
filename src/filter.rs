use crate::reference::ReferenceList;
use log::debug;

/// Keeps the tokens whose lowercase form is a reference entry.
///
/// Matching tokens are returned in their original order and case.
pub fn filter_ingredients(tokens: &[String], reference: &ReferenceList) -> Vec<String> {
    let ingredients: Vec<String> = tokens
        .iter()
        .filter(|token| reference.contains(&token.to_lowercase()))
        .cloned()
        .collect();
    debug!(
        "{} of {} words are known ingredients",
        ingredients.len(),
        tokens.len()
    );
    ingredients
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_match_keeps_original_case() {
        let reference = ReferenceList::parse_line("flour,sugar,salt");
        let result = filter_ingredients(&tokens(&["Flour", "sugar", "Eggs"]), &reference);
        assert_eq!(result, vec!["Flour", "sugar"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let reference = ReferenceList::parse_line("salt");
        let result = filter_ingredients(&tokens(&["Salt", "pepper", "SALT"]), &reference);
        assert_eq!(result, vec!["Salt", "SALT"]);
    }

    #[test]
    fn test_uppercase_reference_entries_never_match() {
        let reference = ReferenceList::parse_line("Butter,milk");
        let result = filter_ingredients(&tokens(&["Butter", "butter", "Milk"]), &reference);
        assert_eq!(result, vec!["Milk"]);
    }

    #[test]
    fn test_padded_entries_need_trimming() {
        let reference = ReferenceList::parse_line("flour, sugar");
        let words = tokens(&["sugar"]);
        assert!(filter_ingredients(&words, &reference).is_empty());
        assert_eq!(
            filter_ingredients(&words, &reference.with_trimmed_entries()),
            vec!["sugar"]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let reference = ReferenceList::parse_line("flour");
        assert!(filter_ingredients(&[], &reference).is_empty());
        assert!(filter_ingredients(&tokens(&["flour"]), &ReferenceList::default()).is_empty());
    }
}
