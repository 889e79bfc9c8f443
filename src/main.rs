//! Bot entry point: config, Discord sink, lifecycle controller, daily
//! scheduler, and the command gateway.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use seedcast::config::Config;
use seedcast::discord::{DiscordApi, DiscordSink};
use seedcast::gateway::{CommandHandler, CommandServer, CommandServerConfig};
use seedcast::prediction::PredictionController;
use seedcast::scheduler::spawn_daily_publish;

#[derive(Parser, Debug)]
#[command(name = "seedcast", version, about = "Daily Super Seed prediction bot")]
struct Cli {
    /// Env file loaded before configuration is read.
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)?;
        }
        None => {
            let _ = dotenvy::dotenv();
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seedcast=info")),
        )
        .init();

    let config = Config::from_env()?;

    let api = DiscordApi::new(config.discord.bot_token);
    let sink = Arc::new(DiscordSink::new(api, config.discord.channels.clone()));
    let controller = Arc::new(PredictionController::new(
        sink,
        config.schedule.footer_label.clone(),
    ));

    // Push the empty label to the status indicator so the channel name is
    // correct from the first moment online.
    controller.clear().await;

    let scheduler = spawn_daily_publish(controller.clone(), config.schedule.clone());

    let handler = Arc::new(CommandHandler::new(controller));
    let mut server = CommandServer::start(
        CommandServerConfig {
            addr: config.gateway.bind,
            token: config.gateway.token,
        },
        handler,
    )
    .await?;

    tracing::info!("seedcast is online");
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown requested");

    server.shutdown().await;
    scheduler.abort();

    Ok(())
}
