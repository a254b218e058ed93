// VisuWeave Core Library - Platform-agnostic scene resolution
// Four-layer architecture: Util -> Infrastructure -> Service -> Scene

pub mod infrastructure; // Infrastructure layer - Asset probes, speech capture, logging
pub mod scene; // Scene layer - Tokenizer, normalizer, resolver, session orchestration
pub mod service; // Service layer - Config
pub mod util; // Utility layer - Errors

// Export main types
pub use util::errors::*;

// Export infrastructure components
pub use infrastructure::{
    capture::{CaptureCapability, CaptureError, ScriptedCapture, SpeechCapture, UnavailableCapture},
    probe::{AssetProbe, HttpAssetProbe},
};

// Export service layer components
pub use service::config::{AppConfig, ConfigManager, HostConfig, ResolverConfig};

// Export scene layer core types
pub use scene::{
    AssetResolver, ChatMessage, ImageListPolicy, Normalizer, ProbeStrategy, ResolvedAsset,
    SceneComposer, SceneOutcome, SceneSession, SceneVariant, Speaker, Tokenizer,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CORE_NAME: &str = "VisuWeave Core";
