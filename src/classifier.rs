//! Interaction Classifier
//!
//! Classifies user inputs as either:
//! - CountryLookup: the input names a country the knowledge tables know
//!   (e.g. "Japan", "financial details for India")
//! - GeneralQuery: anything else, answered by the LLM when one is configured

use crate::knowledge;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionType {
    CountryLookup(String),
    GeneralQuery,
}

/// Filler phrases stripped before retrying a direct table lookup, longest
/// first so longer phrases are removed intact.
const FILLER_PHRASES: &[&str] = &[
    "currency and stock market details for",
    "financial information for",
    "information about",
    "details for",
    "give me",
    "show me",
    "get",
];

/// Interaction classifier
pub struct InteractionClassifier;

impl InteractionClassifier {
    /// Classify user input by scanning for a known country alias. Falls back
    /// to stripping filler phrases and retrying, which covers inputs like
    /// "give me details for japan" with stray punctuation around the name.
    pub fn classify(input: &str) -> InteractionType {
        if let Some(alias) = knowledge::detect_country(input) {
            return InteractionType::CountryLookup(alias.to_string());
        }

        let stripped = strip_fillers(input);
        if let Some(alias) = knowledge::detect_country(&stripped) {
            return InteractionType::CountryLookup(alias.to_string());
        }

        InteractionType::GeneralQuery
    }
}

fn strip_fillers(input: &str) -> String {
    let mut text = knowledge::normalize(input);
    for phrase in FILLER_PHRASES {
        text = text.replace(phrase, " ");
    }
    text.trim().to_string()
}
