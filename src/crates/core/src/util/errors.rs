//! Error types
//!
//! `VisuweaveError` covers configuration, IO and transport failures.
//! `SceneError` is the user-facing taxonomy of the resolution pipeline; the
//! session layer turns every variant into a transcript message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type VisuweaveResult<T> = Result<T, VisuweaveError>;

#[derive(Debug, Error)]
pub enum VisuweaveError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

impl VisuweaveError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}

impl From<reqwest::Error> for VisuweaveError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<toml::de::Error> for VisuweaveError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(format!("Invalid TOML: {}", e))
    }
}

impl From<serde_json::Error> for VisuweaveError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Outcomes of the resolution pipeline that are reported to the user rather
/// than treated as failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("Please describe a scene")]
    EmptyInput,

    #[error("No identifiable objects found in the description")]
    NoTermsExtracted,

    #[error("No images found for any objects in \"{input}\"")]
    NoAssetsResolved { input: String },

    #[error("{0}")]
    CaptureUnavailable(CaptureError),
}

/// Failure conditions reported by a speech capture collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum CaptureError {
    #[error("Microphone access was denied. Please allow microphone access.")]
    PermissionDenied,

    #[error("No speech detected. Try again.")]
    NoSpeechDetected,

    #[error("No microphone found. Ensure a microphone is connected.")]
    NoMicrophone,

    #[error("Speech recognition not supported in your browser.")]
    Unsupported,

    #[error("Error occurred in speech recognition")]
    Other(String),
}

impl CaptureError {
    /// Message shown in the transcript and status line.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Whether the capture path should be abandoned for the rest of the session.
    pub fn disables_capture(&self) -> bool {
        matches!(
            self,
            Self::Unsupported | Self::PermissionDenied | Self::NoMicrophone
        )
    }
}
