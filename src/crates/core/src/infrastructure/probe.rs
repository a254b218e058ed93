//! Asset existence probes
//!
//! A probe answers one question: does a URL on the Asset Host resolve?
//! Transport errors, timeouts and non-success statuses all count as absent.

use crate::util::errors::VisuweaveResult;
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;

#[async_trait]
pub trait AssetProbe: Send + Sync {
    async fn exists(&self, url: &str) -> bool;
}

/// Probes the Asset Host over HTTP with a shared `reqwest` client.
#[derive(Clone)]
pub struct HttpAssetProbe {
    client: reqwest::Client,
}

impl HttpAssetProbe {
    pub fn new(timeout: Duration) -> VisuweaveResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("visuweave/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssetProbe for HttpAssetProbe {
    async fn exists(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                debug!("Asset probe: url={}, status={}", url, status);
                status.is_success()
            }
            Err(e) => {
                debug!("Asset probe failed: url={}, error={}", url, e);
                false
            }
        }
    }
}
