//! Archive Browser - browse a directory tree in your browser
//!
//! # Usage
//! ```bash
//! archive-browser                          # Serve ./archive on port 3000
//! archive-browser --root /srv/files --open # Serve a root and open browser
//! PORT=8080 ARCHIVE_ROOT=/data archive-browser
//! archive-browser ls mods --category mods  # Print a listing in the terminal
//! ```

mod archive;
mod browser;
mod error;
mod models;
mod rate_limit;
mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use clap::{Parser, Subcommand};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archive::Archive;
use browser::{CategoryFilter, UiState};

/// Archive Browser - a searchable file grid over a directory tree
#[derive(Parser)]
#[command(name = "archive-browser")]
#[command(about = "Browse a directory tree as a searchable file grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory the server is confined to
    #[arg(short, long, env = "ARCHIVE_ROOT", default_value = "archive", global = true)]
    root: PathBuf,

    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Open browser automatically after starting
    #[arg(short, long)]
    open: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one directory of the archive as the browser would show it
    Ls {
        /// Path relative to the archive root
        #[arg(default_value = "")]
        path: String,

        /// `all` or one of: images, videos, documents, soundtracks, mods, maps, folder
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Case-insensitive text to match against names and categories
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn handle_ls(archive: &Archive, path: &str, category: CategoryFilter, search: &str) -> bool {
    let mut state = UiState::new();
    let ok = state.navigate(archive, path);
    state.set_filter(category);
    state.set_search(search);

    let trail: Vec<String> = state.breadcrumbs().into_iter().map(|c| c.label).collect();
    println!("{}", trail.join(" › "));
    println!("{}", state.count_label());
    println!();
    print!("{}", state.render());
    ok
}

async fn serve(cli: Cli) -> anyhow::Result<()> {
    let archive = Arc::new(Archive::new(&cli.root));
    let root_display = archive.root().to_string_lossy().to_string();

    tracing::info!(root = %root_display, "archive root");
    if !archive.root_exists() {
        tracing::warn!(root = %root_display, "archive directory does not exist");
    }

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app: Router = routes::create_router(archive, routes::Limits::default())
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    let url = format!("http://{}:{}", cli.host, cli.port);
    println!();
    println!("  ┌─────────────────────────────────────────────┐");
    println!("  │               Archive Browser               │");
    println!("  └─────────────────────────────────────────────┘");
    println!();
    println!("  Archive: {}", root_display);
    println!("  Server:  {}", url);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    if cli.open {
        if let Err(e) = open::that(&url) {
            eprintln!("  Warning: Could not open browser: {}", e);
        }
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        println!("\n  Shutting down...");
    };

    // Peer addresses feed the per-client rate limiters
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ls {
            ref path,
            category,
            ref search,
        }) => {
            init_tracing("warn");
            let archive = Archive::new(&cli.root);
            if !handle_ls(&archive, path, category, search) {
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            init_tracing("info");
            serve(cli).await
        }
    }
}
