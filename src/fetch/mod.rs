// SPDX-License-Identifier: MPL-2.0
//! Remote byte fetching port and the load pipeline built on it.
//!
//! [`HttpFetcher`] is the seam between the view and the network. The
//! production adapter is [`ReqwestFetcher`]; tests plug in their own.

mod http;

pub use http::ReqwestFetcher;

use crate::error::{Error, Result};
use crate::media::Animation;
use futures_util::future::BoxFuture;
pub use reqwest::Url;
use std::sync::Arc;

/// Port for reading the bytes behind a URL.
///
/// The returned future owns everything it needs so it can be moved onto
/// the runtime independently of the fetcher.
pub trait HttpFetcher: Send + Sync {
    /// Fetches the full body at `url`.
    ///
    /// Implementations must fail on transport errors and on non-success
    /// HTTP statuses.
    fn fetch(&self, url: Url) -> BoxFuture<'static, Result<Vec<u8>>>;
}

/// Fetches `url` and decodes the body as an animated GIF.
///
/// Decoding runs on a blocking worker to keep it off the async executor.
///
/// # Errors
///
/// Returns the fetcher's error, or [`Error::Decode`] if the body is not a
/// decodable GIF.
pub async fn load_remote(fetcher: &dyn HttpFetcher, url: Url) -> Result<Animation> {
    let bytes = fetcher.fetch(url).await?;
    tokio::task::spawn_blocking(move || Animation::decode(&bytes))
        .await
        .map_err(|e| Error::Decode(format!("decoder task failed: {e}")))?
}

/// Runs [`load_remote`] and reduces the outcome to the decoded animation.
///
/// Failures are logged once with the URL and collapsed to `None`.
pub async fn fetch_and_decode(fetcher: Arc<dyn HttpFetcher>, url: Url) -> Option<Arc<Animation>> {
    match load_remote(fetcher.as_ref(), url.clone()).await {
        Ok(animation) => {
            log::debug!(
                "Loaded GIF from {url}: {}x{}, {} frames",
                animation.width(),
                animation.height(),
                animation.frame_count()
            );
            Some(Arc::new(animation))
        }
        Err(err) => {
            log::warn!("Could not get data for GIF file located at {url}: {err}");
            None
        }
    }
}
