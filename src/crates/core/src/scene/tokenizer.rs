use super::vocabulary::{is_stop_word, SCENE_SYMBOLS};
use serde::{Deserialize, Serialize};

/// A word kept by the tokenizer together with its word index in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub position: usize,
}

/// Lowercases, strips characters outside the allow-list, splits on
/// whitespace and drops stop words and short tokens. Order and duplicates
/// are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_len: usize,
    symbols: &'static [char],
}

impl Tokenizer {
    /// Letters and digits only; tokens shorter than three characters are dropped.
    pub fn nouns() -> Self {
        Self {
            min_len: 3,
            symbols: &[],
        }
    }

    /// Also keeps symbols that have assets, so single characters survive.
    pub fn objects() -> Self {
        Self {
            min_len: 1,
            symbols: SCENE_SYMBOLS,
        }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    fn is_allowed(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch.is_whitespace() || self.symbols.contains(&ch)
    }

    pub fn tokens(&self, text: &str) -> Vec<Token> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|ch| self.is_allowed(*ch))
            .collect();

        cleaned
            .split_whitespace()
            .enumerate()
            .filter(|(_, word)| word.chars().count() >= self.min_len && !is_stop_word(word))
            .map(|(position, word)| Token {
                text: word.to_string(),
                position,
            })
            .collect()
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokens(text).into_iter().map(|t| t.text).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::nouns()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::vocabulary::STOP_WORDS;
    use proptest::prelude::*;

    #[test]
    fn noun_tokenizer_drops_stop_words_and_short_tokens() {
        let tokens = Tokenizer::nouns().tokenize("A sunny beach with palm trees");
        assert_eq!(tokens, vec!["sunny", "beach", "palm", "trees"]);
    }

    #[test]
    fn stop_words_and_punctuation_yield_nothing() {
        for input in ["", "   ", "the a an", "Is it... there?!", "., ; : \" '"] {
            assert!(Tokenizer::nouns().tokenize(input).is_empty(), "{input:?}");
        }
        for input in ["", "The, and; OR.", "\"it\" 'is'"] {
            assert!(Tokenizer::objects().tokenize(input).is_empty(), "{input:?}");
        }
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        let tokens = Tokenizer::nouns().tokenize("dog cat DOG, bird");
        assert_eq!(tokens, vec!["dog", "cat", "dog", "bird"]);
    }

    #[test]
    fn object_tokenizer_keeps_symbols_and_digits() {
        let tokens = Tokenizer::objects().tokenize("3 + 4 = 7!");
        assert_eq!(tokens, vec!["3", "+", "4", "=", "7!"]);

        let tokens = Tokenizer::nouns().tokenize("3 + 4 = 7!");
        assert!(tokens.is_empty());
    }

    #[test]
    fn positions_refer_to_input_words() {
        let tokens = Tokenizer::nouns().tokens("the red balloon");
        assert_eq!(
            tokens,
            vec![
                Token { text: "red".to_string(), position: 1 },
                Token { text: "balloon".to_string(), position: 2 },
            ]
        );
    }

    fn filler() -> impl Strategy<Value = String> {
        let mut stop_words: Vec<&'static str> = STOP_WORDS.iter().copied().collect();
        stop_words.sort_unstable();
        prop_oneof![
            (proptest::sample::select(stop_words), any::<bool>()).prop_map(|(word, upper)| {
                if upper {
                    word.to_uppercase()
                } else {
                    word.to_string()
                }
            }),
            "[!-/:-@\\[-`{-~]{1,4}",
        ]
    }

    proptest! {
        #[test]
        fn stop_words_and_punctuation_never_produce_tokens(
            words in proptest::collection::vec(filler(), 0..12)
        ) {
            let text = words.join(" ");
            prop_assert!(Tokenizer::nouns().tokenize(&text).is_empty(), "{:?}", text);
        }
    }
}
