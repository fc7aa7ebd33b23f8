//! HTML rendering of the frame-embedding page.
//!
//! Produces one static document: a `<head>` carrying OpenGraph, Twitter and
//! `fc:frame` metadata, and a body holding a single full-viewport iframe.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation. Configuration values are escaped by maud; only the frame JSON,
//! which the assembler has already escaped, is inserted verbatim.

pub mod components;

use maud::{DOCTYPE, PreEscaped, html};

use crate::assemble::{AssembledPage, MetadataBundle};

use components::{PAGE_CSS, READY_SCRIPT, embedded_frame, frame_tag, open_graph_tags, twitter_tags};

/// Rendering switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit `<script src="">` when no SDK URL is configured, instead of
    /// omitting the tag. Some older embeds relied on the tag being present.
    pub keep_empty_sdk_script: bool,
}

/// Render the document with default options.
pub fn render(bundle: &MetadataBundle, target_url: &str, sdk_url: &str) -> String {
    render_with(bundle, target_url, sdk_url, &RenderOptions::default())
}

/// Render an assembled page.
pub fn render_page(page: &AssembledPage, options: &RenderOptions) -> String {
    render_with(&page.bundle, &page.target_url, &page.sdk_url, options)
}

/// Render the document.
pub fn render_with(
    bundle: &MetadataBundle,
    target_url: &str,
    sdk_url: &str,
    options: &RenderOptions,
) -> String {
    let emit_sdk_script = !sdk_url.is_empty() || options.keep_empty_sdk_script;

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no";
                title { (bundle.title) }
                style { (PreEscaped(PAGE_CSS)) }

                (open_graph_tags(&bundle.open_graph))
                (twitter_tags(&bundle.twitter))
                (frame_tag(&bundle.frame_json))
            }
            body {
                (embedded_frame(target_url, &bundle.title))
                @if emit_sdk_script {
                    script src=(sdk_url) {}
                }
                script { (PreEscaped(READY_SCRIPT)) }
            }
        }
    };

    markup.into_string()
}
