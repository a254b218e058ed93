//! Interactive session state
//!
//! One session per front end. The composer is its only writer; the front end
//! reads it to render the transcript and image strip.

use super::types::{ChatMessage, ResolvedAsset};
use super::variant::ImageListPolicy;
use crate::infrastructure::capture::CaptureCapability;
use crate::util::errors::{CaptureError, SceneError};
use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Welcome! Describe a scene and I'll find all matching images.";
pub const CLEARED_MESSAGE: &str = "Canvas cleared. Ready for new scenes.";
pub const LISTENING_MESSAGE: &str = "Listening... Describe a scene";
pub const NO_TERMS_MESSAGE: &str = "I couldn't find any objects in that description.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSession {
    pub id: String,
    pub images: Vec<ResolvedAsset>,
    pub transcript: Vec<ChatMessage>,
    /// Last user-visible error, cleared by the next successful scene.
    #[serde(default)]
    pub status: Option<String>,
    pub capture: CaptureCapability,
}

impl SceneSession {
    pub fn new() -> Self {
        Self {
            id: format!("scene-{}", uuid::Uuid::new_v4()),
            images: Vec::new(),
            transcript: vec![ChatMessage::assistant(WELCOME_MESSAGE)],
            status: None,
            capture: CaptureCapability::Available,
        }
    }

    pub fn with_capture(capture: CaptureCapability) -> Self {
        let mut session = Self::new();
        if let CaptureCapability::Unavailable(reason) = &capture {
            session.push_assistant(reason.user_message());
            session.status = Some(reason.user_message());
        }
        session.capture = capture;
        session
    }

    pub fn clear(&mut self) {
        self.images.clear();
        self.transcript = vec![ChatMessage::assistant(CLEARED_MESSAGE)];
        self.status = None;
    }

    pub fn is_text_only(&self) -> bool {
        !self.capture.is_available()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.transcript.push(ChatMessage::user(text));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.transcript.push(ChatMessage::assistant(text));
    }

    pub(crate) fn apply_images(&mut self, policy: ImageListPolicy, found: Vec<ResolvedAsset>) {
        match policy {
            ImageListPolicy::Append => self.images.extend(found),
            ImageListPolicy::Replace => self.images = found,
        }
    }

    /// Turns a pipeline outcome into the transcript entry and status line the
    /// user sees.
    pub(crate) fn report(&mut self, error: &SceneError) {
        match error {
            SceneError::EmptyInput => {}
            SceneError::NoTermsExtracted => self.push_assistant(NO_TERMS_MESSAGE),
            SceneError::NoAssetsResolved { .. } | SceneError::CaptureUnavailable(_) => {
                self.push_assistant(error.to_string())
            }
        }
        self.status = Some(error.to_string());
    }

    pub(crate) fn report_capture_error(&mut self, error: &CaptureError) {
        if error.disables_capture() {
            self.capture = CaptureCapability::Unavailable(error.clone());
        }
        self.report(&SceneError::CaptureUnavailable(error.clone()));
    }
}

impl Default for SceneSession {
    fn default() -> Self {
        Self::new()
    }
}
