use super::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the extension candidates of one term (and the terms of one scene)
/// are probed. Both strategies select results in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStrategy {
    Concurrent,
    Sequential,
}

/// What a successful scene does to the session's image list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageListPolicy {
    Append,
    Replace,
}

/// Bundles every behaviour that differs between the noun and object
/// flavours of the scene pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneVariant {
    /// Words of three or more letters, `.jpg` first, concurrent, appends.
    #[default]
    Noun,
    /// Words, numbers and symbols, `.png` first, sequential, replaces.
    Object,
}

const NOUN_EXTENSIONS: &[&str] = &[".jpg", ".png", ".jpeg", ".webp"];
const OBJECT_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".webp"];

impl SceneVariant {
    pub fn tokenizer(self) -> Tokenizer {
        match self {
            Self::Noun => Tokenizer::nouns(),
            Self::Object => Tokenizer::objects(),
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Noun => NOUN_EXTENSIONS,
            Self::Object => OBJECT_EXTENSIONS,
        }
    }

    pub fn probe_strategy(self) -> ProbeStrategy {
        match self {
            Self::Noun => ProbeStrategy::Concurrent,
            Self::Object => ProbeStrategy::Sequential,
        }
    }

    pub fn list_policy(self) -> ImageListPolicy {
        match self {
            Self::Noun => ImageListPolicy::Append,
            Self::Object => ImageListPolicy::Replace,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for SceneVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noun" | "nouns" => Ok(Self::Noun),
            "object" | "objects" => Ok(Self::Object),
            other => Err(format!(
                "Unknown scene variant '{}', expected 'noun' or 'object'",
                other
            )),
        }
    }
}
