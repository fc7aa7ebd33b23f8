//! Metadata assembly: configuration in, resolved metadata bundle out.
//!
//! Runs in a fixed order, each step reading the previous one's output:
//!
//! 1. Sanitize `appUrl` and `targetUrl`
//! 2. Resolve the frame descriptor's URLs against `appUrl`
//! 3. Project OpenGraph and Twitter metadata (computed fields win)
//! 4. Serialize the resolved frame to attribute-escaped JSON
//! 5. Pick the SDK script URL out of the optional `cdn` section
//!
//! Nothing here does I/O, and the same configuration always yields the same
//! bundle.

use serde_json::Value;

use crate::config::{Configuration, OpenGraphMetadata, TwitterMetadata};
use crate::error::Result;
use crate::frame::FrameDescriptor;

/// Metadata projections consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataBundle {
    /// Document title, taken from the OpenGraph title.
    pub title: String,
    /// OpenGraph metadata with `url` and `image` computed.
    pub open_graph: OpenGraphMetadata,
    /// Twitter metadata with `image` computed.
    pub twitter: TwitterMetadata,
    /// Frame descriptor with absolute URLs.
    pub frame: FrameDescriptor,
    /// `frame` as compact JSON, escaped for a double-quoted HTML attribute.
    pub frame_json: String,
}

/// Everything the renderer needs for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledPage {
    pub bundle: MetadataBundle,
    /// Sanitized URL of the embedded page.
    pub target_url: String,
    /// Embedding SDK script URL, or empty when none is configured.
    pub sdk_url: String,
}

/// Validate a parsed configuration document and assemble it.
///
/// Fails with [`crate::Error::Validation`] before any metadata is built.
pub fn assemble(raw: &Value) -> Result<AssembledPage> {
    let config = Configuration::from_value(raw)?;
    Ok(assemble_config(&config))
}

/// Assemble an already-validated configuration.
pub fn assemble_config(config: &Configuration) -> AssembledPage {
    let app_url = sanitize_url(&config.app_url);
    let target_url = sanitize_url(&config.target_url);

    let frame = config.frame.resolve(&app_url);
    let image_url = frame.image_url().to_string();

    let open_graph = OpenGraphMetadata {
        url: Some(app_url.clone()),
        image: Some(image_url.clone()),
        ..config.metadata.open_graph.clone()
    };

    let twitter = TwitterMetadata {
        image: Some(image_url),
        ..config.metadata.twitter.clone()
    };

    let frame_json = escape_attribute(&frame.to_json());

    let sdk_url = config
        .cdn
        .as_ref()
        .and_then(|cdn| cdn.farcaster_sdk.clone())
        .unwrap_or_default();

    tracing::debug!(
        app_url = %app_url,
        target_url = %target_url,
        image_url = %frame.image_url(),
        has_sdk = !sdk_url.is_empty(),
        "metadata assembled"
    );

    AssembledPage {
        bundle: MetadataBundle {
            title: open_graph.title.clone().unwrap_or_default(),
            open_graph,
            twitter,
            frame,
            frame_json,
        },
        target_url,
        sdk_url,
    }
}

/// Strip characters that cannot appear in a URL.
///
/// Keeps ASCII letters, digits and `$-_.+!*'(),{}|\^~[]`<>#%";/?:@&=`; every
/// other character (whitespace, control characters, non-ASCII) is dropped.
/// This is cleanup, not validation: the result is not checked for
/// well-formedness.
pub fn sanitize_url(raw: &str) -> String {
    raw.chars().filter(|&c| is_url_char(c)).collect()
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=".contains(c)
}

/// Escape `& < > " '` so text is safe inside a double-quoted HTML attribute.
pub fn escape_attribute(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
