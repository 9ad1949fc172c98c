use anyhow::Context;
use dotenv::dotenv;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

mod cache;
mod commands;
mod config;
mod format;
mod handler;
mod telegram;
#[cfg(test)]
mod testutil;

use cache::QuoteCache;
use coinwatch_coinmarketcap::CoinMarketCapClient;
use config::BotConfig;
use handler::BotDeps;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let BotConfig {
        bot_token,
        cmc_api_key,
    } = BotConfig::from_env().context("bot is misconfigured")?;

    let bot = Bot::new(bot_token);
    let me = bot
        .get_me()
        .await
        .context("failed to validate the bot token")?;
    info!(
        "authorized as @{}",
        me.username.as_deref().unwrap_or("unknown")
    );

    let deps = Arc::new(BotDeps {
        client: CoinMarketCapClient::new(&cmc_api_key),
        cache: QuoteCache::new(),
    });

    tokio::select! {
        _ = telegram::run(bot, deps) => {}
        _ = shutdown_signal() => info!("shutdown signal received, stopping"),
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install the SIGTERM handler");

        tokio::select! {
            _ = ctrl_c => {}
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
    }
}
