mod cli;
mod impls;
mod liveness;
mod relay;

use crate::{
    cli::{Arguments, assemble_config},
    impls::llm::create_llm,
    liveness::run_liveness,
    relay::Relay,
};

use std::process;

use anyhow::Result;
use clap::Parser;
use dsr_core::interface::client::RelayClient;
use dsr_telegram_client::TelegramRelayClient;
use tokio::spawn;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Arguments::parse();

    // 認証情報が欠けていれば何も起動せずに終了する
    let config = match assemble_config(&args).await {
        Ok(config) => config,
        Err(err) => {
            error!("failed to load configuration: {err}");
            process::exit(1);
        }
    };

    let llm = create_llm(&config.llm)?;
    let relay = Relay::new(llm);

    if config.liveness.enabled {
        info!("starting liveness responder");
        let config_liveness = config.liveness.clone();
        spawn(async move {
            if let Err(err) = run_liveness(&config_liveness).await {
                error!("liveness responder stopped: {err}");
            }
        });
    }

    info!("starting Telegram client");
    let telegram = TelegramRelayClient::new(&config.telegram, relay);
    telegram.execute().await?;

    info!("Telegram client stopped");
    Ok(())
}
