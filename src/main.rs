use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use safescribe_kiosk::{
    api::{HttpApiClient, KioskApi},
    cli::{
        handle_meetings_command, handle_status_command, handle_transcript_command, Cli,
        CliCommand,
    },
    config::Config,
    terminal,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Some(CliCommand::Version) = cli.command {
        println!("SafeScribe Kiosk {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::load()?.with_api_url(cli.api_url);
    info!("Using recorder backend at {}", config.api.base_url);
    let api: Arc<dyn KioskApi> = Arc::new(HttpApiClient::new(&config.api.base_url));

    match cli.command {
        Some(CliCommand::Status) => handle_status_command(api.as_ref()).await,
        Some(CliCommand::Meetings(args)) => {
            handle_meetings_command(api.as_ref(), args.id.as_deref()).await
        }
        Some(CliCommand::Transcript) => handle_transcript_command(api.as_ref()).await,
        Some(CliCommand::Run) | Some(CliCommand::Version) | None => {
            terminal::run(api, config.kiosk).await
        }
    }
}
