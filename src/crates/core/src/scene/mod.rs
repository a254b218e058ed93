//! Scene Layer
//!
//! Turns a free-form scene description into an ordered list of images
//! served by the Asset Host, and keeps the interactive session state.

pub mod normalizer;
pub mod pipeline;
pub mod resolver;
pub mod session;
pub mod tokenizer;
pub mod types;
pub mod variant;
pub mod vocabulary;

pub use normalizer::Normalizer;
pub use pipeline::{SceneComposer, SceneOutcome};
pub use resolver::AssetResolver;
pub use session::SceneSession;
pub use tokenizer::{Token, Tokenizer};
pub use types::{ChatMessage, ResolvedAsset, Speaker};
pub use variant::{ImageListPolicy, ProbeStrategy, SceneVariant};
