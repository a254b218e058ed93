//! Scene composition
//!
//! text -> tokens -> terms -> one resolution per term -> session image list.
//! Every `SceneError` is caught here and becomes a transcript message.

use super::normalizer::Normalizer;
use super::resolver::AssetResolver;
use super::session::{SceneSession, LISTENING_MESSAGE};
use super::tokenizer::Tokenizer;
use super::types::ResolvedAsset;
use super::variant::{ImageListPolicy, ProbeStrategy, SceneVariant};
use crate::infrastructure::capture::{CaptureCapability, CaptureError, SpeechCapture};
use crate::infrastructure::probe::AssetProbe;
use crate::service::config::AppConfig;
use crate::util::errors::SceneError;
use futures::stream::{self, StreamExt};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Upper bound on terms probed at once by the concurrent strategy.
pub const MAX_CONCURRENT_TERMS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "detail")]
pub enum SceneOutcome {
    /// Number of images found by this scene.
    Resolved(usize),
    EmptyInput,
    NoTerms,
    NothingFound,
    CaptureFailed(CaptureError),
}

impl From<SceneError> for SceneOutcome {
    fn from(error: SceneError) -> Self {
        match error {
            SceneError::EmptyInput => Self::EmptyInput,
            SceneError::NoTermsExtracted => Self::NoTerms,
            SceneError::NoAssetsResolved { .. } => Self::NothingFound,
            SceneError::CaptureUnavailable(reason) => Self::CaptureFailed(reason),
        }
    }
}

#[derive(Clone)]
pub struct SceneComposer {
    tokenizer: Tokenizer,
    normalizer: Normalizer,
    resolver: AssetResolver,
    term_strategy: ProbeStrategy,
    list_policy: ImageListPolicy,
}

impl SceneComposer {
    pub fn new(variant: SceneVariant, probe: Arc<dyn AssetProbe>, base_url: impl Into<String>) -> Self {
        let extensions = variant.extensions().iter().map(|e| e.to_string()).collect();
        Self::with_extensions(variant, probe, base_url, extensions)
    }

    pub fn with_extensions(
        variant: SceneVariant,
        probe: Arc<dyn AssetProbe>,
        base_url: impl Into<String>,
        extensions: Vec<String>,
    ) -> Self {
        Self {
            tokenizer: variant.tokenizer(),
            normalizer: Normalizer::new(),
            resolver: AssetResolver::new(probe, base_url, extensions, variant.probe_strategy()),
            term_strategy: variant.probe_strategy(),
            list_policy: variant.list_policy(),
        }
    }

    pub fn from_config(config: &AppConfig, probe: Arc<dyn AssetProbe>) -> Self {
        Self::with_extensions(
            config.variant,
            probe,
            config.resolver.base_url.clone(),
            config.extensions(),
        )
    }

    pub fn resolver(&self) -> &AssetResolver {
        &self.resolver
    }

    pub fn list_policy(&self) -> ImageListPolicy {
        self.list_policy
    }

    /// Tokenize and normalize, keeping input order and duplicates.
    pub fn extract_terms(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokens(text)
            .into_iter()
            .map(|token| self.normalizer.normalize(&token.text))
            .collect()
    }

    /// Resolves every term and keeps the hits in term order. Concurrent
    /// resolution is capped at `MAX_CONCURRENT_TERMS` terms in flight.
    pub async fn resolve_terms(&self, terms: &[String]) -> Vec<ResolvedAsset> {
        let found: Vec<Option<ResolvedAsset>> = match self.term_strategy {
            ProbeStrategy::Concurrent => {
                // `buffered` yields in input order even when later terms finish first.
                stream::iter(terms.iter().map(|term| self.resolver.resolve(term)))
                    .buffered(MAX_CONCURRENT_TERMS)
                    .collect()
                    .await
            }
            ProbeStrategy::Sequential => {
                let mut found = Vec::with_capacity(terms.len());
                for term in terms {
                    found.push(self.resolver.resolve(term).await);
                }
                found
            }
        };

        for (term, asset) in terms.iter().zip(&found) {
            match asset {
                Some(asset) => debug!("Resolved term: term={}, url={}", term, asset.url),
                None => debug!("No asset for term: term={}", term),
            }
        }

        found.into_iter().flatten().collect()
    }

    pub async fn resolve_scene(&self, text: &str) -> Result<Vec<ResolvedAsset>, SceneError> {
        let terms = self.scene_terms(text)?;
        self.scene_assets(text, &terms).await
    }

    fn scene_terms(&self, text: &str) -> Result<Vec<String>, SceneError> {
        if text.trim().is_empty() {
            return Err(SceneError::EmptyInput);
        }

        let terms = self.extract_terms(text);
        if terms.is_empty() {
            return Err(SceneError::NoTermsExtracted);
        }
        Ok(terms)
    }

    async fn scene_assets(&self, text: &str, terms: &[String]) -> Result<Vec<ResolvedAsset>, SceneError> {
        let found = self.resolve_terms(terms).await;
        if found.is_empty() {
            return Err(SceneError::NoAssetsResolved {
                input: text.to_string(),
            });
        }
        Ok(found)
    }

    /// Runs one typed (or transcribed) description against the session.
    pub async fn process_scene(&self, session: &mut SceneSession, text: &str) -> SceneOutcome {
        match self.compose_into(session, text).await {
            Ok(count) => {
                info!("Scene resolved: session_id={}, images={}", session.id, count);
                SceneOutcome::Resolved(count)
            }
            Err(error) => {
                info!("Scene not resolved: session_id={}, reason={}", session.id, error);
                session.report(&error);
                error.into()
            }
        }
    }

    async fn compose_into(&self, session: &mut SceneSession, text: &str) -> Result<usize, SceneError> {
        if text.trim().is_empty() {
            return Err(SceneError::EmptyInput);
        }

        session.push_user(format!("Processing scene: \"{}\"", text));
        let terms = self.scene_terms(text)?;

        session.push_assistant(format!("Looking for: {}", terms.join(", ")));
        let found = self.scene_assets(text, &terms).await?;

        let count = found.len();
        session.apply_images(self.list_policy, found);
        session.push_assistant(format!("Found {} images matching your scene", count));
        session.status = None;
        Ok(count)
    }

    /// Captures one utterance and processes it as a scene. Without a usable
    /// capture backend, or once the user has denied access, the session
    /// drops to text-only mode and stays there.
    pub async fn listen_and_process(
        &self,
        session: &mut SceneSession,
        capture: &dyn SpeechCapture,
    ) -> SceneOutcome {
        if let CaptureCapability::Unavailable(reason) = session.capture.clone() {
            session.report(&SceneError::CaptureUnavailable(reason.clone()));
            return SceneOutcome::CaptureFailed(reason);
        }

        if let CaptureCapability::Unavailable(reason) = capture.capability() {
            session.report_capture_error(&reason);
            session.capture = CaptureCapability::Unavailable(reason.clone());
            return SceneOutcome::CaptureFailed(reason);
        }

        session.push_assistant(LISTENING_MESSAGE);
        session.status = None;

        let transcript = match capture.listen().await {
            Ok(transcript) if !transcript.trim().is_empty() => transcript.trim().to_string(),
            Ok(_) => {
                session.report_capture_error(&CaptureError::NoSpeechDetected);
                return SceneOutcome::CaptureFailed(CaptureError::NoSpeechDetected);
            }
            Err(error) => {
                session.report_capture_error(&error);
                return SceneOutcome::CaptureFailed(error);
            }
        };

        session.push_user(format!("Described scene: {}", transcript));
        self.process_scene(session, &transcript).await
    }
}
