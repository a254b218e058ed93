use super::vocabulary::{irregular_singular, symbol_alias};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

/// Maps irregular plurals to their singular. Numbers and aliased symbols
/// pass through untouched; symbol aliasing happens in the resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, token: &str) -> String {
        if NUMERIC_TOKEN.is_match(token) || symbol_alias(token).is_some() {
            return token.to_string();
        }

        irregular_singular(token)
            .map(str::to_string)
            .unwrap_or_else(|| token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::vocabulary::SYMBOL_ALIASES;
    use proptest::prelude::*;

    #[test]
    fn irregular_plurals_are_singularized() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("children"), "child");
        assert_eq!(n.normalize("people"), "person");
        assert_eq!(n.normalize("mice"), "mouse");
        assert_eq!(n.normalize("criteria"), "criterion");
    }

    #[test]
    fn regular_plurals_are_left_alone() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("tables"), "tables");
        assert_eq!(n.normalize("trees"), "trees");
    }

    #[test]
    fn numbers_and_symbols_pass_through() {
        let n = Normalizer::new();
        for token in ["0", "7", "42", "0042", "1234567890"] {
            assert_eq!(n.normalize(token), token);
        }
        assert_eq!(n.normalize("+"), "+");
        assert_eq!(n.normalize("("), "(");
    }

    proptest! {
        #[test]
        fn digit_strings_are_unchanged(token in "[0-9]{1,16}") {
            prop_assert_eq!(Normalizer::new().normalize(&token), token);
        }

        #[test]
        fn aliased_symbols_are_unchanged(
            symbol in proptest::sample::select(
                SYMBOL_ALIASES.keys().copied().collect::<Vec<&'static str>>()
            )
        ) {
            prop_assert_eq!(Normalizer::new().normalize(symbol), symbol);
        }
    }
}
