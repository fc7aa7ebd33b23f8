//! Application state shared across all request handlers.

use std::sync::Arc;

/// A document rendered once at startup and served as-is.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Rendered HTML string.
    pub html: String,
    /// Quoted ETag (xxh3 of the HTML).
    pub etag: String,
}

impl RenderedPage {
    /// Wrap a rendered document and compute its ETag.
    pub fn new(html: String) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
        let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
        Self { html, etag }
    }
}

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The one document this service serves.
    pub page: Arc<RenderedPage>,
}

impl AppState {
    /// Create the application state from a rendered document.
    pub fn new(html: String) -> Self {
        let page = RenderedPage::new(html);

        tracing::info!(
            bytes = page.html.len(),
            etag = %page.etag,
            "application state initialized"
        );

        Self {
            page: Arc::new(page),
        }
    }
}
