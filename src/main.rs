use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use repostar::github::{self, GraphqlClient, HttpTransport};
use repostar::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "repostar", version, about = "Search GitHub repositories and star them")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GraphQL endpoint, overriding GITHUB_API_URL and the config file
    #[arg(long)]
    api_url: Option<String>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let _guard = setup_logging(&config, cli.debug)?;

    info!("repostar starting");

    let api_url =
        github::auth::resolve_api_url(cli.api_url.as_deref(), &config.github, github::auth::env_var);

    // Resolve auth token before starting TUI
    let token = match github::auth::resolve_token(
        &config.github,
        github::auth::env_var,
        github::auth::gh_auth_token,
    ) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Authentication error: {e}");
            std::process::exit(1);
        }
    };

    let transport = HttpTransport::new(&api_url, &token, config.network.timeout())?;
    let client = GraphqlClient::new(Arc::new(transport))
        .with_request_limit(config.network.max_concurrent_requests);

    info!(api_url = %api_url, "Client ready");

    repostar::app::event_loop::run(client).await
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "repostar.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("repostar=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
