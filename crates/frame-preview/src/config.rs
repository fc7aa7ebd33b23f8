//! Page configuration loaded from a JSON document.
//!
//! The document has this shape:
//!
//! ```json
//! {
//!   "appUrl": "https://app.example",
//!   "targetUrl": "https://target.example/page",
//!   "frame": { "imageUrl": "/img.png", "button": { "action": { "splashImageUrl": "/splash.png" } } },
//!   "metadata": { "openGraph": { "title": "..." }, "twitter": { "imageAlt": "..." } },
//!   "cdn": { "farcaster-sdk": "https://cdn.example/sdk.js" }
//! }
//! ```
//!
//! Reading the file can fail with [`Error::Source`]; turning the parsed JSON
//! into a [`Configuration`] fails with [`Error::Validation`] naming the first
//! field that is missing or malformed. No defaults are filled in for required
//! fields.

use std::path::Path;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::frame::FrameDescriptor;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/setting.json";

/// Validated page configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Base URL of the hosting app, as written in the file (unsanitized).
    pub app_url: String,
    /// URL of the page shown inside the iframe (unsanitized).
    pub target_url: String,
    /// Frame descriptor with relative image paths.
    pub frame: FrameDescriptor,
    /// Social preview metadata.
    pub metadata: Metadata,
    /// Optional script locations.
    pub cdn: Option<CdnConfig>,
}

/// The `metadata` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub open_graph: OpenGraphMetadata,
    pub twitter: TwitterMetadata,
}

/// OpenGraph fields. Any field may be absent in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphMetadata {
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image_alt: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image_width: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image_height: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image_type: Option<String>,
}

/// Twitter Card fields. Any field may be absent in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterMetadata {
    /// Card type, e.g. `summary_large_image`.
    #[serde(default, deserialize_with = "text")]
    pub card: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image_alt: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image_width: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image_height: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image_type: Option<String>,
}

/// The optional `cdn` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CdnConfig {
    /// Script URL of the embedding SDK.
    #[serde(rename = "farcaster-sdk", default)]
    pub farcaster_sdk: Option<String>,
}

/// Accept a string or a number (e.g. `"imageWidth": 600`) as text.
fn text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::invalid_type(
            de::Unexpected::Other(json_kind(&other)),
            &"a string or number",
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read and parse the configuration file without validating its fields.
///
/// Fails with [`Error::Source`] when the file is missing, unreadable, not
/// valid JSON, or when the top level is not an object.
pub fn load_from(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Source {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| Error::Source {
        path: path.to_path_buf(),
        reason: format!("invalid JSON: {e}"),
    })?;

    if !value.is_object() {
        return Err(Error::Source {
            path: path.to_path_buf(),
            reason: format!("top level is a JSON {}, expected an object", json_kind(&value)),
        });
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "configuration file read");
    Ok(value)
}

impl Configuration {
    /// Load and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let value = load_from(path)?;
        let config = Self::from_value(&value)?;

        tracing::info!(
            path = %path.display(),
            app_url = %config.app_url,
            target_url = %config.target_url,
            has_cdn = config.cdn.is_some(),
            "page configuration loaded"
        );

        Ok(config)
    }

    /// Validate a parsed configuration document.
    ///
    /// Fields are checked in document order: `appUrl`, `targetUrl`, `frame`,
    /// `metadata.openGraph`, `metadata.twitter`, then the optional `cdn`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = value
            .as_object()
            .ok_or_else(|| Error::shape("configuration", "a JSON object"))?;

        let app_url = required_str(root, "appUrl")?;
        let target_url = required_str(root, "targetUrl")?;
        let frame = present(root, "frame").ok_or_else(|| Error::missing("frame"))?;
        let frame = FrameDescriptor::from_value(frame)?;
        let metadata = metadata(root)?;
        let cdn = match present(root, "cdn") {
            None => None,
            Some(v) => Some(
                serde_json::from_value::<CdnConfig>(v.clone()).map_err(|e| Error::Validation {
                    field: "cdn",
                    reason: e.to_string(),
                })?,
            ),
        };

        Ok(Self {
            app_url,
            target_url,
            frame,
            metadata,
            cdn,
        })
    }
}

/// Look up a key, treating an explicit `null` as absent.
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

fn required_str(map: &Map<String, Value>, field: &'static str) -> Result<String> {
    match present(map, field) {
        None => Err(Error::missing(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::shape(field, "a string")),
    }
}

fn metadata(root: &Map<String, Value>) -> Result<Metadata> {
    let section = match present(root, "metadata") {
        None => return Err(Error::missing("metadata.openGraph")),
        Some(Value::Object(map)) => map,
        Some(_) => return Err(Error::shape("metadata", "a JSON object")),
    };

    let open_graph = section_of(section, "openGraph", "metadata.openGraph")?;
    let twitter = section_of(section, "twitter", "metadata.twitter")?;

    Ok(Metadata {
        open_graph,
        twitter,
    })
}

fn section_of<T: DeserializeOwned>(
    section: &Map<String, Value>,
    key: &str,
    field: &'static str,
) -> Result<T> {
    let value = present(section, key).ok_or_else(|| Error::missing(field))?;
    if !value.is_object() {
        return Err(Error::shape(field, "a JSON object"));
    }
    serde_json::from_value(value.clone()).map_err(|e| Error::Validation {
        field,
        reason: e.to_string(),
    })
}
