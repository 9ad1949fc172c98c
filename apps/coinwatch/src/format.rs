//! Reply rendering: the quote template, the cache notice, and the coin link.

use crate::cache::FRESHNESS_WINDOW;
use coinwatch_coinmarketcap::listings::CoinListing;
use num_format::{Locale, ToFormattedString};
use std::time::Duration;

pub const COIN_PAGE_BASE_URL: &str = "https://coinmarketcap.com/currencies";

/// Fix `value` to two decimals with en-US thousands grouping.
fn localized(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!(
        "{sign}{}.{fraction:02}",
        whole.to_formatted_string(&Locale::en)
    )
}

/// The fixed multi-line quote template, Markdown bold on the coin name.
pub fn build_coin_message(listing: &CoinListing) -> String {
    let usd = &listing.quote.usd;
    let max_supply = listing
        .max_supply
        .map(localized)
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "*{name}*\n\
         \n\
         Price: ${price}\n\
         \n\
         Max Supply: {max_supply}\n\
         Circulating Supply: {circulating}\n\
         \n\
         Market Cap: ${market_cap}\n\
         \n\
         Volume 24h: ${volume}\n\
         Volume Change 24h: {volume_change}%\n\
         \n\
         Change 1h: {p1h}%\n\
         Change 24h: {p24h}%\n\
         Change 7d: {p7d}%\n\
         Change 30d: {p30d}%\n\
         Change 60d: {p60d}%\n\
         Change 90d: {p90d}%",
        name = listing.name,
        price = localized(usd.price),
        circulating = localized(listing.circulating_supply),
        market_cap = localized(usd.market_cap),
        volume = localized(usd.volume_24h),
        volume_change = localized(usd.volume_change_24h),
        p1h = localized(usd.percent_change_1h),
        p24h = localized(usd.percent_change_24h),
        p7d = localized(usd.percent_change_7d),
        p30d = localized(usd.percent_change_30d),
        p60d = localized(usd.percent_change_60d),
        p90d = localized(usd.percent_change_90d),
    )
}

/// Canonical coin page, built from the upstream slug.
pub fn coin_page_url(listing: &CoinListing) -> String {
    format!("{COIN_PAGE_BASE_URL}/{}", listing.slug)
}

/// Notice sent before a cached quote: how long until a refetch would happen.
pub fn cache_notice(age: Duration) -> String {
    let remaining_minutes = (FRESHNESS_WINDOW.as_secs_f64() - age.as_secs_f64()) / 60.0;

    format!("*Data from cache*\nWait for {remaining_minutes:.2} minutes for fresh data.")
}
