use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use fairway::{
    config::Config, routes::create_app, state::AppState,
    store::memory::MemorySheets,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Golf tournament scoring service")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the listen address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }

    // The vendor spreadsheet binding is wired in by the deployment; local
    // runs serve out of the in-memory store.
    let state = AppState::new(Arc::new(MemorySheets::default()), config);
    let bind = state.config.bind.clone();
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
