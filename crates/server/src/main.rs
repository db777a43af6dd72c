//! Nimbus static site server.
//!
//! Serves the compiled frontend bundle and exposes `/health` plus the
//! `/debug/db` database-check endpoint. All application logic lives in the
//! remote API; this binary only hands out files.

use anyhow::Result;
use clap::Parser;
use nimbus_http::server::{build_router, connect_database};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Nimbus web - static site server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(short = 'l', long, env = "NIMBUS_LISTEN", default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Directory with the compiled frontend bundle
    #[arg(short = 's', long, env = "NIMBUS_STATIC_DIR", default_value = "dist")]
    static_dir: PathBuf,

    /// Database URL for the debug check endpoint
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nimbus=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let db = match cli.database_url.as_deref() {
        Some(url) => match connect_database(url) {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!("database pool not created: {e}");
                None
            }
        },
        None => None,
    };

    let app = build_router(cli.static_dir.clone(), db);

    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    info!(
        "serving {} at http://{}/",
        cli.static_dir.display(),
        cli.listen
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received shutdown signal");
        })
        .await?;

    Ok(())
}
