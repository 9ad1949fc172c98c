//! Fixture builders shared by the unit tests.

use coinwatch_coinmarketcap::listings::{CoinListing, Quote, UsdQuote};

pub fn listing(symbol: &str, price: f64) -> CoinListing {
    CoinListing {
        id: 1,
        name: symbol.to_string(),
        symbol: symbol.to_string(),
        slug: symbol.to_lowercase(),
        cmc_rank: Some(1),
        max_supply: Some(21_000_000.0),
        circulating_supply: 19_000_000.0,
        total_supply: Some(19_000_000.0),
        last_updated: None,
        quote: Quote {
            usd: UsdQuote {
                price,
                volume_24h: 5_000_000.0,
                volume_change_24h: -2.345,
                percent_change_1h: 0.1,
                percent_change_24h: -1.2,
                percent_change_7d: 3.45,
                percent_change_30d: -10.0,
                percent_change_60d: 20.5,
                percent_change_90d: 0.0,
                market_cap: 123_456_789.12,
                last_updated: None,
            },
        },
    }
}
