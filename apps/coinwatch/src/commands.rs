//! Interpretation of incoming chat messages.

use once_cell::sync::Lazy;
use regex::Regex;

/// Free-text query: `price <token>`, any alphanumeric token.
static PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^price\s+(\w+)").expect("invalid price pattern"));

/// Symbols with a dedicated slash command.
pub const REGISTERED_SYMBOLS: &[&str] = &[
    "BTC", "TON", "SOL", "WLD", "XRP", "ETH", "BNB", "USDT", "USDC",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quote request; the symbol is already upper-cased.
    Price(String),
    Greeting,
}

/// Map a message text to a command, or nothing if the bot should stay quiet.
pub fn parse_message(text: &str) -> Option<Command> {
    let text = text.trim();

    if text == "hi" {
        return Some(Command::Greeting);
    }

    if let Some(rest) = text.strip_prefix('/') {
        let name = rest
            .split_whitespace()
            .next()
            .unwrap_or("")
            .split('@')
            .next()
            .unwrap_or("");
        let symbol = name.to_uppercase();
        if REGISTERED_SYMBOLS.contains(&symbol.as_str()) {
            return Some(Command::Price(symbol));
        }
        return None;
    }

    PRICE_PATTERN
        .captures(text)
        .map(|caps| Command::Price(caps[1].to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(symbol: &str) -> Option<Command> {
        Some(Command::Price(symbol.to_string()))
    }

    #[test]
    fn every_registered_symbol_has_a_slash_command() {
        for symbol in REGISTERED_SYMBOLS {
            let command = format!("/{}", symbol.to_lowercase());
            assert_eq!(parse_message(&command), price(symbol));
        }
    }

    #[test]
    fn slash_commands_accept_a_bot_name_suffix() {
        assert_eq!(parse_message("/btc@CoinwatchBot"), price("BTC"));
    }

    #[test]
    fn unknown_slash_commands_are_ignored() {
        assert_eq!(parse_message("/doge"), None);
        assert_eq!(parse_message("/start"), None);
    }

    #[test]
    fn free_text_price_queries_are_upper_cased() {
        assert_eq!(parse_message("price btc"), price("BTC"));
        assert_eq!(parse_message("PRICE eth"), price("ETH"));
        assert_eq!(parse_message("Price  doge"), price("DOGE"));
    }

    #[test]
    fn price_pattern_is_anchored() {
        assert_eq!(parse_message("the price btc"), None);
        assert_eq!(parse_message("price"), None);
    }

    #[test]
    fn greeting_is_recognized() {
        assert_eq!(parse_message("hi"), Some(Command::Greeting));
        assert_eq!(parse_message("hi there"), None);
    }
}
