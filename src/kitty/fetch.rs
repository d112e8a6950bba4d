// SPDX-License-Identifier: MPL-2.0
//! One-shot retrieval of a random cat picture.
//!
//! The search endpoint answers with a JSON array of image records. The first
//! record is kept, then its pixels are downloaded so the UI can render them.
//! Every failure along the way is returned as a [`FetchError`] value; nothing
//! here panics on bad input.

use super::dimensions::Dimensions;
use iced::widget::image;
use serde::Deserialize;
use thiserror::Error;

/// Redirect hops allowed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Largest response body the viewer will buffer, search or image.
pub const MAX_BODY_BYTES: u64 = 32 * 1024 * 1024;

/// One record of the image-search response.
///
/// Only the fields the viewer needs are kept; the API sends more (`id`,
/// `breeds`, ...) and those are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchResult {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl FetchResult {
    /// Natural pixel size of the image.
    #[must_use]
    pub fn natural_size(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// A fetched record together with its downloaded pixels.
#[derive(Debug, Clone)]
pub struct Kitty {
    record: FetchResult,
    handle: image::Handle,
}

impl Kitty {
    #[must_use]
    pub fn new(record: FetchResult, handle: image::Handle) -> Self {
        Self { record, handle }
    }

    #[must_use]
    pub fn record(&self) -> &FetchResult {
        &self.record
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.record.url
    }

    /// Image handle backed by the downloaded bytes.
    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }
}

/// Why a fetch failed.
///
/// The UI shows the same message for every variant; the distinction only
/// reaches the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Parse(String),

    #[error("search returned no images")]
    Empty,

    #[error("image record has invalid size {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("image download failed: {0}")]
    Download(String),

    #[error("response larger than {limit} bytes")]
    TooLarge { limit: u64 },
}

/// Builds the HTTP client used for both the search and the image download.
///
/// # Errors
///
/// Returns [`FetchError::Transport`] if the TLS backend cannot be initialized.
pub fn build_client() -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))
}

/// Parses a search response body and returns its first record.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] when the body is not a JSON array of image
/// records, [`FetchError::Empty`] for `[]`, and
/// [`FetchError::InvalidDimensions`] when the first record has a zero side.
pub fn parse_search_response(body: &[u8]) -> Result<FetchResult, FetchError> {
    let records: Vec<FetchResult> =
        serde_json::from_slice(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let record = records.into_iter().next().ok_or(FetchError::Empty)?;

    if record.width == 0 || record.height == 0 {
        return Err(FetchError::InvalidDimensions {
            width: record.width,
            height: record.height,
        });
    }

    Ok(record)
}

/// Queries `endpoint` and downloads the first image it names.
///
/// # Errors
///
/// Returns a [`FetchError`] describing the first step that failed.
pub async fn fetch_kitty(client: reqwest::Client, endpoint: String) -> Result<Kitty, FetchError> {
    log::info!("Fetching kitty from {endpoint}");

    let body = get_bytes(&client, &endpoint).await?;
    let record = parse_search_response(&body)?;
    log::debug!(
        "Search returned {} ({}x{})",
        record.url,
        record.width,
        record.height
    );

    let pixels = get_bytes(&client, &record.url)
        .await
        .map_err(|e| FetchError::Download(e.to_string()))?;
    log::info!("Downloaded {} bytes from {}", pixels.len(), record.url);

    Ok(Kitty::new(record, image::Handle::from_bytes(pixels)))
}

async fn get_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    // Reject early when the server announces an oversized body.
    if response.content_length().is_some_and(|len| len > MAX_BODY_BYTES) {
        return Err(FetchError::TooLarge {
            limit: MAX_BODY_BYTES,
        });
    }

    let mut body = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?
    {
        if (body.len() + chunk.len()) as u64 > MAX_BODY_BYTES {
            return Err(FetchError::TooLarge {
                limit: MAX_BODY_BYTES,
            });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
