use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod api;
mod blog;
mod config;
mod error;
mod prerender;
mod render;
mod routes;
mod state;
#[cfg(test)]
mod testing;

/// Browse posts and their comments from a JSONPlaceholder-style API.
#[derive(Parser, Debug)]
#[command(name = "posts")]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;
    let bind_addr = config.bind_addr.clone();

    let state = std::sync::Arc::new(state::State::new(config));
    prerender::warm_first_posts(state.clone()).await;

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "serving posts");

    routes::serve(listener, state).await?;

    Ok(())
}
