//! Frame Preview - a single HTML page that embeds a third-party site in an
//! iframe and advertises it to social clients.
//!
//! # Architecture
//!
//! - **Config**: Reads the JSON configuration and validates required fields
//! - **Assemble**: Sanitizes URLs, resolves the `fc:frame` descriptor against
//!   the app URL, and projects OpenGraph / Twitter metadata
//! - **Render**: Generates the HTML document with maud (compile-time templates)
//! - **Routes**: Optional HTTP transport serving the rendered document
//!
//! Assembly and rendering are pure; the same configuration always renders to
//! the same bytes.
//!
//! # Security
//!
//! - Configuration values are HTML-escaped by maud
//! - The frame JSON is attribute-escaped before it reaches the template

pub mod assemble;
pub mod config;
pub mod error;
pub mod frame;
pub mod render;
pub mod routes;
pub mod state;

pub use assemble::{AssembledPage, MetadataBundle, assemble, assemble_config};
pub use config::Configuration;
pub use error::{Error, Result};
pub use render::{RenderOptions, render, render_page, render_with};
pub use routes::router;
pub use state::AppState;
