//! Asset resolution
//!
//! A term resolves to the first extension candidate, in configured order,
//! that the Asset Host serves. Symbols without a literal asset get a second
//! pass under their alias filename.

use super::types::ResolvedAsset;
use super::variant::ProbeStrategy;
use super::vocabulary::symbol_alias;
use crate::infrastructure::probe::AssetProbe;
use futures::future::join_all;
use log::debug;
use std::sync::Arc;

#[derive(Clone)]
pub struct AssetResolver {
    probe: Arc<dyn AssetProbe>,
    base_url: String,
    extensions: Vec<String>,
    strategy: ProbeStrategy,
}

impl AssetResolver {
    pub fn new(
        probe: Arc<dyn AssetProbe>,
        base_url: impl Into<String>,
        extensions: Vec<String>,
        strategy: ProbeStrategy,
    ) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            probe,
            base_url,
            extensions,
            strategy,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn strategy(&self) -> ProbeStrategy {
        self.strategy
    }

    /// Filenames are percent-encoded so symbols like `#` and `?` stay in the path.
    pub fn candidate_url(&self, name: &str, extension: &str) -> String {
        format!("{}{}{}", self.base_url, urlencoding::encode(name), extension)
    }

    pub async fn resolve(&self, term: &str) -> Option<ResolvedAsset> {
        if let Some(asset) = self.probe_name(term, term).await {
            return Some(asset);
        }

        let alias = symbol_alias(term)?;
        debug!("No direct asset, trying alias: term={}, alias={}", term, alias);
        self.probe_name(alias, term).await
    }

    async fn probe_name(&self, name: &str, display_name: &str) -> Option<ResolvedAsset> {
        match self.strategy {
            ProbeStrategy::Sequential => {
                for extension in &self.extensions {
                    let url = self.candidate_url(name, extension);
                    if self.probe.exists(&url).await {
                        return Some(self.asset(url, name, extension, display_name));
                    }
                }
                None
            }
            ProbeStrategy::Concurrent => {
                let checks = self.extensions.iter().map(|extension| async move {
                    let url = self.candidate_url(name, extension);
                    let found = self.probe.exists(&url).await;
                    found.then(|| self.asset(url, name, extension, display_name))
                });

                // join_all keeps input order, so the first hit is the
                // highest-priority extension regardless of completion time.
                join_all(checks).await.into_iter().flatten().next()
            }
        }
    }

    fn asset(&self, url: String, name: &str, extension: &str, display_name: &str) -> ResolvedAsset {
        ResolvedAsset {
            url,
            filename: format!("{}{}", name, extension),
            display_name: display_name.to_string(),
        }
    }
}
