//! Resource discovery module.
//!
//! Provides:
//! - The fetch capability the locator and downloader run against
//! - Candidate URL generation for a board resource
//! - SVG content classification
//! - The resource locator itself

pub mod candidates;
pub mod classify;
pub mod locate;

use async_trait::async_trait;

use crate::error::Result;

pub use candidates::candidate_urls;
pub use classify::is_svg_content;
pub use locate::{locate, MatchedResource};

/// Number of body characters kept from a probe response.
pub const BODY_PREFIX_CHARS: usize = 200;

/// Outcome of a probing GET request.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    pub status: u16,
    /// Lowercased `Content-Type` header, empty if absent.
    pub content_type: String,
    /// First characters of the decoded body.
    pub body_prefix: String,
}

/// Outcome of a HEAD request.
#[derive(Debug, Clone, Default)]
pub struct HeadInfo {
    pub status: u16,
    pub content_disposition: Option<String>,
}

/// Authenticated access to resource URLs.
///
/// All requests follow redirects and are bounded by a timeout.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// GET `url` and capture enough of the response to classify it.
    async fn probe(&self, url: &str) -> Result<Probe>;

    /// HEAD `url`.
    async fn head(&self, url: &str) -> Result<HeadInfo>;

    /// GET `url` and return the whole body. Non-2xx is a `Download` error.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
