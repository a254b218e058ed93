//! Speech capture capability
//!
//! Speech-to-text lives outside this crate. Front ends inject a
//! `SpeechCapture` so the session can tell whether voice input is possible
//! and fall back to text-only mode when it is not.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tokio::sync::Mutex;

pub use crate::util::errors::CaptureError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "reason")]
pub enum CaptureCapability {
    Available,
    Unavailable(CaptureError),
}

impl CaptureCapability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

#[async_trait]
pub trait SpeechCapture: Send + Sync {
    fn capability(&self) -> CaptureCapability;

    /// Capture a single utterance and return its finalized transcript.
    async fn listen(&self) -> Result<String, CaptureError>;
}

/// Capture backend for environments without any speech recognizer.
pub struct UnavailableCapture {
    reason: CaptureError,
}

impl UnavailableCapture {
    pub fn new(reason: CaptureError) -> Self {
        Self { reason }
    }
}

impl Default for UnavailableCapture {
    fn default() -> Self {
        Self::new(CaptureError::Unsupported)
    }
}

#[async_trait]
impl SpeechCapture for UnavailableCapture {
    fn capability(&self) -> CaptureCapability {
        CaptureCapability::Unavailable(self.reason.clone())
    }

    async fn listen(&self) -> Result<String, CaptureError> {
        Err(self.reason.clone())
    }
}

/// Replays prepared transcripts in order. An exhausted script behaves like a
/// recognizer that heard nothing.
pub struct ScriptedCapture {
    script: Mutex<VecDeque<Result<String, CaptureError>>>,
}

impl ScriptedCapture {
    pub fn new(script: impl IntoIterator<Item = Result<String, CaptureError>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    /// Build a script from transcript lines, skipping blank ones.
    pub fn from_lines(content: &str) -> Self {
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| Ok(line.to_string())),
        )
    }

    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

#[async_trait]
impl SpeechCapture for ScriptedCapture {
    fn capability(&self) -> CaptureCapability {
        CaptureCapability::Available
    }

    async fn listen(&self) -> Result<String, CaptureError> {
        self.script
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(CaptureError::NoSpeechDetected))
            .map(|transcript| transcript.trim().to_string())
    }
}
