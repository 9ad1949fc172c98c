use serde::Serialize;

/// A CoinMarketCap API endpoint: a fixed URL plus its query and response types.
pub trait Endpoint {
    const URL: &'static str;

    type Response: serde::de::DeserializeOwned;
    type Params: Serialize;
}
