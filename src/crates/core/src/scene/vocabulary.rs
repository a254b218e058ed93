//! Fixed word tables used by the scene pipeline

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Function words dropped before resolution.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", //
        "to", "of", "in", "on", "at", "for", "with", "under", "over", "this", //
        "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", //
        "my", "your", "his", "her", "its", "our", "their", "there", "here",
    ])
});

/// Closed set of irregular plurals. Regular plurals are left alone.
pub static IRREGULAR_PLURALS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("children", "child"),
        ("people", "person"),
        ("mice", "mouse"),
        ("lice", "louse"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("men", "man"),
        ("women", "woman"),
        ("teeth", "tooth"),
        ("feet", "foot"),
        ("geese", "goose"),
        ("oxen", "ox"),
        ("cacti", "cactus"),
        ("fungi", "fungus"),
        ("knives", "knife"),
        ("wolves", "wolf"),
        ("leaves", "leaf"),
        ("dice", "die"),
    ])
});

/// Symbols whose images are stored under a descriptive filename.
pub static SYMBOL_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("+", "plus"),
        ("-", "minus"),
        ("*", "multiply"),
        ("/", "divide"),
        ("=", "equals"),
        ("!", "exclamation"),
        ("?", "question"),
        ("@", "at"),
        ("#", "hash"),
        ("$", "dollar"),
        ("%", "percent"),
        ("^", "caret"),
        ("&", "ampersand"),
        ("(", "open_paren"),
        (")", "close_paren"),
    ])
});

/// Punctuation kept by the object tokenizer because assets exist for it.
pub const SCENE_SYMBOLS: &[char] = &[
    '+', '-', '*', '/', '=', '!', '?', '@', '#', '$', '%', '^', '&', '(', ')',
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

pub fn symbol_alias(term: &str) -> Option<&'static str> {
    SYMBOL_ALIASES.get(term).copied()
}

pub fn irregular_singular(word: &str) -> Option<&'static str> {
    IRREGULAR_PLURALS.get(word).copied()
}
