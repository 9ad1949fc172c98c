use crate::endpoint::Endpoint;
use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct ListingsLatestParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<String>,
}

impl Default for ListingsLatestParams {
    fn default() -> Self {
        Self {
            start: None,
            limit: Some(5000),
            convert: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListingsLatestResponse {
    pub status: ApiStatus,
    pub data: Vec<CoinListing>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiStatus {
    pub timestamp: String,
    pub error_code: i32,
    pub error_message: Option<String>,
    pub elapsed: i32,
    pub credit_count: i32,
    #[serde(default)]
    pub notice: Option<String>,
}

/// One coin row from the listings endpoint. Prices and supplies come back as
/// upstream reports them; only `max_supply` and `total_supply` may be absent.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CoinListing {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    #[serde(default)]
    pub cmc_rank: Option<i64>,
    pub max_supply: Option<f64>,
    pub circulating_supply: f64,
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
    pub quote: Quote,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Quote {
    #[serde(rename = "USD")]
    pub usd: UsdQuote,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UsdQuote {
    pub price: f64,
    pub volume_24h: f64,
    pub volume_change_24h: f64,
    pub percent_change_1h: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,
    pub percent_change_30d: f64,
    pub percent_change_60d: f64,
    pub percent_change_90d: f64,
    pub market_cap: f64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

pub struct ListingsLatest;

impl Endpoint for ListingsLatest {
    const URL: &'static str = "https://pro-api.coinmarketcap.com/v1/cryptocurrency/listings/latest";

    type Response = ListingsLatestResponse;
    type Params = ListingsLatestParams;
}
