//! Head and body fragments shared by the document renderer.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into the full page. Every interpolated value is escaped by maud unless it
//! is wrapped in `PreEscaped`.

use maud::{Markup, PreEscaped, html};

use crate::config::{OpenGraphMetadata, TwitterMetadata};

/// Element id of the embedded iframe. The ready script looks it up.
pub const FRAME_ELEMENT_ID: &str = "main-frame";

/// Inline CSS: the iframe fills the viewport with no chrome.
pub const PAGE_CSS: &str = r#"
body{margin:0;padding:0;display:flex;justify-content:center;align-items:center;height:100vh;background-color:#f0f0f0}
iframe{width:100%;height:100%;border:none}
"#;

/// Signals readiness to the embedding SDK once the iframe has loaded.
///
/// The ready call must not happen before the iframe's `load` event.
pub const READY_SCRIPT: &str = r#"
document.getElementById('main-frame').addEventListener('load', () => {
    frame.sdk.actions.ready();
});
"#;

/// OpenGraph `<meta property="og:*">` tags.
///
/// Every tag is emitted even when its value is absent, with empty content.
pub fn open_graph_tags(og: &OpenGraphMetadata) -> Markup {
    html! {
        meta property="og:title" content=(text(&og.title));
        meta property="og:description" content=(text(&og.description));
        meta property="og:type" content="website";
        meta property="og:url" content=(text(&og.url));
        meta property="og:image" content=(text(&og.image));
        meta property="og:image:alt" content=(text(&og.image_alt));
        meta property="og:image:width" content=(text(&og.image_width));
        meta property="og:image:height" content=(text(&og.image_height));
        meta property="og:image:type" content=(text(&og.image_type));
    }
}

/// Twitter Card `<meta name="twitter:*">` tags.
///
/// Image tags are always emitted; `card`, `title` and `description` only when
/// configured.
pub fn twitter_tags(twitter: &TwitterMetadata) -> Markup {
    html! {
        @if let Some(card) = &twitter.card {
            meta name="twitter:card" content=(card);
        }
        @if let Some(title) = &twitter.title {
            meta name="twitter:title" content=(title);
        }
        @if let Some(description) = &twitter.description {
            meta name="twitter:description" content=(description);
        }
        meta name="twitter:image" content=(text(&twitter.image));
        meta name="twitter:image:alt" content=(text(&twitter.image_alt));
        meta name="twitter:image:width" content=(text(&twitter.image_width));
        meta name="twitter:image:height" content=(text(&twitter.image_height));
        meta name="twitter:image:type" content=(text(&twitter.image_type));
    }
}

/// The `fc:frame` tag. `frame_json` must already be attribute-escaped.
pub fn frame_tag(frame_json: &str) -> Markup {
    html! {
        meta name="fc:frame" content=(PreEscaped(frame_json));
    }
}

/// The full-viewport iframe showing the target page.
pub fn embedded_frame(target_url: &str, title: &str) -> Markup {
    html! {
        iframe src=(target_url) id=(FRAME_ELEMENT_ID) title=(title) aria-label="Main content frame" {}
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_graph_tags_render_values() {
        let og = OpenGraphMetadata {
            title: Some("Title".to_string()),
            image: Some("https://app.example/img.png".to_string()),
            image_width: Some("600".to_string()),
            ..Default::default()
        };
        let html = open_graph_tags(&og).into_string();
        assert!(html.contains(r#"<meta property="og:title" content="Title">"#));
        assert!(html.contains(r#"<meta property="og:image" content="https://app.example/img.png">"#));
        assert!(html.contains(r#"<meta property="og:image:width" content="600">"#));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
    }

    #[test]
    fn open_graph_tags_emit_empty_for_missing() {
        let html = open_graph_tags(&OpenGraphMetadata::default()).into_string();
        assert!(html.contains(r#"<meta property="og:description" content="">"#));
        assert!(html.contains(r#"<meta property="og:image:type" content="">"#));
    }

    #[test]
    fn open_graph_tags_escape_values() {
        let og = OpenGraphMetadata {
            title: Some(r#""><script>alert(1)</script>"#.to_string()),
            ..Default::default()
        };
        let html = open_graph_tags(&og).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn twitter_optional_tags_only_when_set() {
        let html = twitter_tags(&TwitterMetadata::default()).into_string();
        assert!(!html.contains("twitter:card"));
        assert!(!html.contains("twitter:title"));
        assert!(html.contains(r#"<meta name="twitter:image" content="">"#));

        let twitter = TwitterMetadata {
            card: Some("summary_large_image".to_string()),
            ..Default::default()
        };
        let html = twitter_tags(&twitter).into_string();
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
    }

    #[test]
    fn frame_tag_is_not_double_escaped() {
        let html = frame_tag("{&quot;a&quot;:1}").into_string();
        assert_eq!(html, r#"<meta name="fc:frame" content="{&quot;a&quot;:1}">"#);
    }

    #[test]
    fn embedded_frame_carries_id() {
        let html = embedded_frame("https://target.example/page", "T").into_string();
        assert!(html.starts_with(r#"<iframe src="https://target.example/page" id="main-frame""#));
        assert!(html.ends_with("></iframe>"));
    }

    #[test]
    fn ready_script_targets_frame_element() {
        assert!(READY_SCRIPT.contains(&format!("getElementById('{FRAME_ELEMENT_ID}')")));
        assert!(READY_SCRIPT.contains("addEventListener('load'"));
    }
}
