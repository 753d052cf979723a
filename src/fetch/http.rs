// SPDX-License-Identifier: MPL-2.0
//! `reqwest`-backed [`HttpFetcher`].

use super::{HttpFetcher, Url};
use crate::config::NetworkConfig;
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;

/// Fetches image bytes over HTTP(S) with a shared connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    max_body_bytes: u64,
}

impl ReqwestFetcher {
    /// Builds a fetcher with explicit redirect policy, timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the TLS backend or client cannot be
    /// initialized.
    pub fn new(config: &NetworkConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Fetch(e.to_string()))?;
        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
        })
    }

    /// Wraps an already configured client, accepting bodies up to
    /// `max_body_bytes`.
    pub fn with_client(client: reqwest::Client, max_body_bytes: u64) -> Self {
        Self {
            client,
            max_body_bytes,
        }
    }
}

impl HttpFetcher for ReqwestFetcher {
    fn fetch(&self, url: Url) -> BoxFuture<'static, Result<Vec<u8>>> {
        let client = self.client.clone();
        let limit = self.max_body_bytes;
        Box::pin(async move {
            let mut response = client.get(url).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::Status(status.as_u16()));
            }

            if response.content_length().is_some_and(|len| len > limit) {
                return Err(Error::TooLarge { limit });
            }

            // Content-Length is advisory; the cap applies to received bytes.
            let mut body = Vec::new();
            while let Some(chunk) = response.chunk().await? {
                if body.len() as u64 + chunk.len() as u64 > limit {
                    return Err(Error::TooLarge { limit });
                }
                body.extend_from_slice(&chunk);
            }
            Ok(body)
        })
    }
}
