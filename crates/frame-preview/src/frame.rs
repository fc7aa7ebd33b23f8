//! The `fc:frame` descriptor.
//!
//! The descriptor's schema belongs to the frame-protocol client, so it is kept
//! as an ordered JSON object. Only three paths are interpreted here:
//! `imageUrl`, `button.action.url` and `button.action.splashImageUrl`.
//! Every other key is carried through untouched, in its original position.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A frame descriptor as an ordered JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrameDescriptor(Map<String, Value>);

impl FrameDescriptor {
    /// Validate the shape needed for URL resolution.
    ///
    /// Requires an `imageUrl` string and a `button.action` object carrying a
    /// `splashImageUrl` string. `button.action.url` is optional since it is
    /// always overwritten.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| Error::shape("frame", "a JSON object"))?;

        if !map.get("imageUrl").is_some_and(Value::is_string) {
            return Err(missing_or_shape(map.get("imageUrl"), "frame.imageUrl"));
        }

        let button = match map.get("button") {
            Some(Value::Object(button)) => button,
            other => return Err(missing_or_object(other, "frame.button")),
        };

        let action = match button.get("action") {
            Some(Value::Object(action)) => action,
            other => return Err(missing_or_object(other, "frame.button.action")),
        };

        if !action.get("splashImageUrl").is_some_and(Value::is_string) {
            return Err(missing_or_shape(
                action.get("splashImageUrl"),
                "frame.button.action.splashImageUrl",
            ));
        }

        Ok(Self(map.clone()))
    }

    /// Top-level `imageUrl`.
    pub fn image_url(&self) -> &str {
        self.0.get("imageUrl").and_then(Value::as_str).unwrap_or_default()
    }

    /// `button.action.url`, if set.
    pub fn action_url(&self) -> Option<&str> {
        self.action().and_then(|a| a.get("url")).and_then(Value::as_str)
    }

    /// `button.action.splashImageUrl`.
    pub fn splash_image_url(&self) -> &str {
        self.action()
            .and_then(|a| a.get("splashImageUrl"))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Look up any top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Produce the descriptor with absolute URLs rooted at `app_url`.
    ///
    /// `imageUrl` and `splashImageUrl` are prefixed by plain concatenation (no
    /// slash normalization) and the action URL is replaced by `app_url`.
    pub fn resolve(&self, app_url: &str) -> Self {
        let image_url = format!("{app_url}{}", self.image_url());
        let splash_image_url = format!("{app_url}{}", self.splash_image_url());

        let mut resolved = self.clone();
        resolved
            .0
            .insert("imageUrl".to_string(), Value::String(image_url));

        if let Some(action) = resolved.action_mut() {
            action.insert("url".to_string(), Value::String(app_url.to_string()));
            action.insert(
                "splashImageUrl".to_string(),
                Value::String(splash_image_url),
            );
        }

        resolved
    }

    /// Compact JSON encoding, keys in descriptor order.
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    fn action(&self) -> Option<&Map<String, Value>> {
        self.0
            .get("button")
            .and_then(Value::as_object)
            .and_then(|b| b.get("action"))
            .and_then(Value::as_object)
    }

    fn action_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.0
            .get_mut("button")
            .and_then(Value::as_object_mut)
            .and_then(|b| b.get_mut("action"))
            .and_then(Value::as_object_mut)
    }
}

fn missing_or_shape(found: Option<&Value>, field: &'static str) -> Error {
    match found {
        None | Some(Value::Null) => Error::missing(field),
        Some(_) => Error::shape(field, "a string"),
    }
}

fn missing_or_object(found: Option<&Value>, field: &'static str) -> Error {
    match found {
        None | Some(Value::Null) => Error::missing(field),
        Some(_) => Error::shape(field, "a JSON object"),
    }
}
