//! Update polling and dispatch.

use crate::commands::{self, Command};
use crate::handler::{self, BotDeps};
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::UpdateKind;

const POLL_TIMEOUT_SECS: u32 = 10;
const GREETING_REPLY: &str = "Hey there!";

/// Long-poll for updates forever, answering each price query in its own task
/// so a slow upstream call only stalls the chat that asked.
pub async fn run(bot: Bot, deps: Arc<BotDeps>) {
    info!("listening for updates");
    let mut next_offset: i64 = 0;

    loop {
        let mut request = bot.get_updates().timeout(POLL_TIMEOUT_SECS);
        if next_offset > 0 {
            request = request.offset(next_offset as i32);
        }

        let updates = match request.await {
            Ok(updates) => updates,
            Err(e) => {
                warn!("update poll failed (will retry): {e}");
                tokio::time::sleep(Duration::from_secs(1)).await;
                continue;
            }
        };

        for update in updates {
            next_offset = update.id.0 as i64 + 1;

            let UpdateKind::Message(message) = update.kind else {
                continue;
            };
            let Some(command) = message.text().and_then(commands::parse_message) else {
                continue;
            };
            let chat_id = message.chat.id;

            match command {
                Command::Greeting => {
                    let bot = bot.clone();
                    tokio::spawn(async move {
                        if let Err(e) = bot.send_message(chat_id, GREETING_REPLY).await {
                            error!("failed to send greeting to chat {chat_id}: {e}");
                        }
                    });
                }
                Command::Price(symbol) => {
                    debug!("price request for {symbol} in chat {chat_id}");
                    let bot = bot.clone();
                    let deps = deps.clone();
                    tokio::spawn(async move {
                        handler::handle_price_request(&bot, chat_id, &deps, &symbol).await;
                    });
                }
            }
        }
    }
}
