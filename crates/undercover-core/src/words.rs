//! Built-in secret words.

/// Word used when a random pick is requested from an empty list.
pub const FALLBACK_WORD: &str = "Sun";

/// Default list for random secret words: places and activities everyone
/// can describe without naming them.
pub const DEFAULT_WORDS: &[&str] = &[
    "Pizza",
    "Airport",
    "Beach",
    "Library",
    "Hospital",
    "Football",
    "Concert",
    "Museum",
    "Restaurant",
    "Zoo",
    "Camping",
    "Cinema",
    "Supermarket",
    "Office",
    "Gym",
    "School",
    "Bakery",
    "Hotel",
    "Train",
    "Park",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_words_are_usable_secret_words() {
        for word in DEFAULT_WORDS {
            assert!(!word.is_empty());
            assert_eq!(word.trim(), *word);
        }
    }

    #[test]
    fn default_words_are_distinct() {
        let unique: HashSet<_> = DEFAULT_WORDS.iter().collect();
        assert_eq!(unique.len(), DEFAULT_WORDS.len());
    }
}
