//! Frame Preview - renders the frame-embedding page to a file or stdout, or
//! serves it over HTTP.

use std::path::PathBuf;

use anyhow::Context;
use axum::http::Request;
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use frame_preview::config::DEFAULT_CONFIG_PATH;
use frame_preview::{AppState, Configuration, RenderOptions, assemble_config, render_page, router};

/// Frame Preview - frame-embedding page with social preview metadata.
#[derive(Parser, Debug)]
#[command(name = "frame-preview")]
#[command(about = "Render a frame-embedding HTML page from a JSON configuration", long_about = None)]
struct Args {
    /// Path to the page configuration (JSON).
    #[arg(long, env = "FRAME_CONFIG", default_value = DEFAULT_CONFIG_PATH, global = true)]
    config: PathBuf,

    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env", global = true)]
    dotenv: String,

    /// Emit `<script src="">` even when no SDK URL is configured.
    #[arg(long, env = "FRAME_KEEP_EMPTY_SDK_SCRIPT", global = true)]
    keep_empty_sdk_script: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the rendered document to stdout or a file.
    Render {
        /// Output file (defaults to stdout).
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Serve the rendered document over HTTP.
    Serve {
        /// Server bind address.
        #[arg(long, env = "FRAME_BIND_ADDR", default_value = "0.0.0.0:8080")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing; stdout is reserved for the document
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration and render; any failure aborts before output
    let config = Configuration::load(&args.config)?;
    let options = RenderOptions {
        keep_empty_sdk_script: args.keep_empty_sdk_script,
    };
    let page = assemble_config(&config);
    let html = render_page(&page, &options);

    match args.command {
        Command::Render { output } => write_document(&html, output.as_deref()),
        Command::Serve { bind } => serve(html, &bind).await,
    }
}

fn write_document(html: &str, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("writing document to {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "document written");
        }
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

async fn serve(html: String, bind_addr: &str) -> anyhow::Result<()> {
    let state = AppState::new(html);

    let app = router(state).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "starting frame preview server");

    axum::serve(listener, app).await?;

    Ok(())
}
