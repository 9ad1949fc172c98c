pub mod endpoint;
pub mod listings;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Client for the CoinMarketCap Pro API. The API key is sent as the
/// `X-CMC_PRO_API_KEY` header on every request.
pub struct CoinMarketCapClient {
    reqwest: Client,
}

impl CoinMarketCapClient {
    pub fn new(api_key: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-CMC_PRO_API_KEY",
            HeaderValue::from_str(api_key).expect("Failed to create header value"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let reqwest = ClientBuilder::new()
            .default_headers(headers)
            .build()
            .expect("Failed to build reqwest client");

        Self { reqwest }
    }

    pub(crate) async fn get<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> reqwest::Result<T> {
        let response = self
            .reqwest
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(response)
    }

    pub async fn call<E: endpoint::Endpoint>(
        &self,
        params: E::Params,
    ) -> reqwest::Result<E::Response> {
        self.get(E::URL, &params).await
    }
}
