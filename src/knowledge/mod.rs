//! Static knowledge tables
//!
//! Process-wide immutable mappings from country and exchange names to
//! identifying facts. Initialized once on first access, read concurrently
//! without locking, never mutated at runtime.

mod currencies;
mod locations;
mod markets;

pub use currencies::{currency_for, CurrencyInfo};
pub use locations::{location_for, ExchangeLocation};
pub use markets::{market_for, IndexDef, MarketInfo};

/// Normalize a free-text country or exchange name into a table key.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Title-case a normalized name for display ("south korea" → "South Korea").
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// All country aliases known to either table, longest first so that
/// "united states" wins over "usa" when both appear in an input.
pub fn known_countries() -> Vec<&'static str> {
    let mut aliases: Vec<&'static str> = currencies::countries()
        .chain(markets::countries())
        .collect();
    aliases.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    aliases.dedup();
    aliases
}

/// Scan free text for a known country alias. Matches whole words only, so
/// "india" does not fire inside unrelated tokens.
pub fn detect_country(input: &str) -> Option<&'static str> {
    let haystack = normalize(input);
    known_countries()
        .into_iter()
        .find(|alias| contains_word(&haystack, alias))
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let begin = start + pos;
        let end = begin + needle.len();
        let boundary_before = begin == 0
            || !haystack[..begin]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let boundary_after = end == haystack.len()
            || !haystack[end..].chars().next().is_some_and(char::is_alphanumeric);
        if boundary_before && boundary_after {
            return true;
        }
        start = begin + 1;
        if start >= haystack.len() {
            break;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Japan "), "japan");
        assert_eq!(normalize("SOUTH KOREA"), "south korea");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("japan"), "Japan");
        assert_eq!(title_case("south korea"), "South Korea");
    }

    #[test]
    fn test_detect_country_prefers_longest_alias() {
        assert_eq!(
            detect_country("financial details for the united states please"),
            Some("united states")
        );
        assert_eq!(detect_country("how is the UK market doing?"), Some("uk"));
    }

    #[test]
    fn test_detect_country_whole_words_only() {
        assert_eq!(detect_country("what is RSI?"), None);
        assert_eq!(detect_country("tell me about Atlantis"), None);
    }

    #[test]
    fn test_detect_country_natural_question() {
        assert_eq!(detect_country("What is the currency of Japan?"), Some("japan"));
        assert_eq!(detect_country("show me india"), Some("india"));
    }

    #[test]
    fn test_primary_exchange_has_location_entry() {
        // Referential integrity: every primary exchange in the market table
        // must resolve in the location table.
        for alias in known_countries() {
            if let Some(market) = market_for(alias) {
                assert!(
                    location_for(market.primary_exchange).is_some(),
                    "no location entry for primary exchange {:?} (country {:?})",
                    market.primary_exchange,
                    alias
                );
            }
        }
    }

    #[test]
    fn test_coordinates_within_valid_ranges() {
        for alias in known_countries() {
            if let Some(market) = market_for(alias) {
                let (_, location) = location_for(market.primary_exchange).unwrap();
                assert!((-90.0..=90.0).contains(&location.lat));
                assert!((-180.0..=180.0).contains(&location.lng));
            }
        }
    }

    #[test]
    fn test_currency_codes_are_iso_shaped() {
        for alias in known_countries() {
            if let Some(info) = currency_for(alias) {
                assert_eq!(info.code.len(), 3, "bad code for {:?}", alias);
                assert!(info.code.chars().all(|c| c.is_ascii_uppercase()));
            }
        }
    }

    #[test]
    fn test_primary_exchange_is_listed() {
        // The primary exchange corresponds to a member of the exchange list.
        // Listed names may carry an abbreviation suffix like "(TSE)", and the
        // primary name may be the long form of a listed short form.
        fn strip_abbreviation(name: &str) -> String {
            let stripped = match name.find(" (") {
                Some(pos) => &name[..pos],
                None => name,
            };
            normalize(stripped)
        }

        for alias in known_countries() {
            if let Some(market) = market_for(alias) {
                assert!(!market.exchanges.is_empty());
                let primary = normalize(market.primary_exchange);
                assert!(
                    market.exchanges.iter().any(|e| {
                        let listed = strip_abbreviation(e);
                        primary.starts_with(&listed) || listed.starts_with(&primary)
                    }),
                    "primary exchange {:?} not among exchanges for {:?}",
                    market.primary_exchange,
                    alias
                );
            }
        }
    }
}
