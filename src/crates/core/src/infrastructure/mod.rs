//! Infrastructure layer
//!
//! Asset existence probes, speech capture capability and logging helpers.

pub mod capture;
pub mod logging;
pub mod probe;

pub use capture::{CaptureCapability, ScriptedCapture, SpeechCapture, UnavailableCapture};
pub use logging::{level_to_str, parse_log_level, resolve_default_level, LOG_LEVEL_ENV};
pub use probe::{AssetProbe, HttpAssetProbe};
