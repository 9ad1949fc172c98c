//! Per-request orchestration: cache check, fetch, render, reply.

use crate::cache::{QuoteCache, FRESHNESS_WINDOW};
use crate::format;
use coinwatch_coinmarketcap::listings::{CoinListing, ListingsLatest, ListingsLatestParams};
use coinwatch_coinmarketcap::CoinMarketCapClient;
use log::{error, info};
use std::time::Instant;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};
use thiserror::Error;

/// Upper bound passed to the listings endpoint on every refetch.
pub const LISTINGS_LIMIT: u32 = 5000;

const FETCH_ERROR_REPLY: &str = "Error fetching data";
const NOT_FOUND_REPLY: &str = "Coin not found";
const SEND_ERROR_REPLY: &str = "Error sending data";

#[derive(Error, Debug)]
enum ReplyError {
    #[error("error fetching listings: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("error sending reply: {0}")]
    Send(#[from] teloxide::RequestError),
}

/// Everything a request needs, injected rather than ambient.
pub struct BotDeps {
    pub client: CoinMarketCapClient,
    pub cache: QuoteCache,
}

/// Answer one price query. Never fails the process: every error path ends in
/// a logged error and a generic chat reply.
pub async fn handle_price_request(bot: &Bot, chat_id: ChatId, deps: &BotDeps, symbol: &str) {
    let symbol = symbol.to_uppercase();

    if let Err(e) = respond(bot, chat_id, deps, &symbol).await {
        error!("price request for {symbol} failed: {e}");
        let fallback = match e {
            ReplyError::Fetch(_) => FETCH_ERROR_REPLY,
            ReplyError::Send(_) => SEND_ERROR_REPLY,
        };
        if let Err(e) = bot.send_message(chat_id, fallback).await {
            error!("failed to deliver error reply to chat {chat_id}: {e}");
        }
    }
}

async fn respond(
    bot: &Bot,
    chat_id: ChatId,
    deps: &BotDeps,
    symbol: &str,
) -> Result<(), ReplyError> {
    let now = Instant::now();

    if let Some(entry) = deps.cache.get(symbol) {
        if entry.is_fresh(now, FRESHNESS_WINDOW) {
            bot.send_message(chat_id, format::cache_notice(entry.age(now)))
                .parse_mode(ParseMode::Markdown)
                .await?;
            return send_quote(bot, chat_id, &entry.data).await;
        }
    }

    let response = deps
        .client
        .call::<ListingsLatest>(ListingsLatestParams::builder().limit(LISTINGS_LIMIT).build())
        .await?;
    let fetched_at = Instant::now();

    let Some(listing) = find_listing(&response.data, symbol) else {
        info!("{symbol} not present in the upstream listing");
        bot.send_message(chat_id, NOT_FOUND_REPLY).await?;
        return Ok(());
    };
    let listing = listing.clone();

    // One timestamp for everything this fetch produced. The bulk refresh
    // only fills gaps; the requested symbol itself is always renewed.
    deps.cache.fill_missing(&response.data, fetched_at);
    deps.cache.insert(symbol, listing.clone(), fetched_at);

    send_quote(bot, chat_id, &listing).await
}

/// Exact, case-sensitive match against the upper-cased request symbol.
fn find_listing<'a>(listings: &'a [CoinListing], symbol: &str) -> Option<&'a CoinListing> {
    listings.iter().find(|listing| listing.symbol == symbol)
}

async fn send_quote(bot: &Bot, chat_id: ChatId, listing: &CoinListing) -> Result<(), ReplyError> {
    let mut request = bot
        .send_message(chat_id, format::build_coin_message(listing))
        .parse_mode(ParseMode::Markdown);
    if let Some(markup) = coin_page_keyboard(listing) {
        request = request.reply_markup(markup);
    }
    request.await?;

    Ok(())
}

fn coin_page_keyboard(listing: &CoinListing) -> Option<InlineKeyboardMarkup> {
    match format::coin_page_url(listing).parse() {
        Ok(url) => Some(InlineKeyboardMarkup::new(vec![vec![
            InlineKeyboardButton::url("CoinMarketCap".to_string(), url),
        ]])),
        Err(_) => None,
    }
}
