use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::{AppError, Result};
use crate::modules::rates::models::RateTable;

use super::rate_api::RateApi;

/// HTTP client for an exchangerate.host-compatible rate source
pub struct ExchangeRateHostApi {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ExchangeRateHostApi {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl RateApi for ExchangeRateHostApi {
    async fn latest(&self, base: &str) -> Result<RateTable> {
        let url = format!("{}/latest", self.base_url);

        #[derive(Deserialize)]
        struct LatestResponse {
            base: String,
            rates: HashMap<String, Decimal>,
        }

        let response = self
            .client
            .get(&url)
            .query(&[("base", base), ("access_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::rate_source(format!("Rate API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::rate_source(format!(
                "Rate API error {}: {}",
                status, error_body
            )));
        }

        let latest: LatestResponse = response
            .json()
            .await
            .map_err(|e| AppError::rate_source(format!("Failed to parse rate response: {}", e)))?;

        Ok(RateTable::new(&latest.base, latest.rates))
    }

    async fn symbols(&self) -> Result<Vec<String>> {
        let url = format!("{}/currencies", self.base_url);

        // code -> display name; only the codes matter here
        #[derive(Deserialize)]
        struct CurrenciesResponse {
            currencies: HashMap<String, String>,
        }

        let response = self
            .client
            .get(&url)
            .query(&[("access_key", &self.api_key)])
            .send()
            .await
            .map_err(|e| AppError::rate_source(format!("Rate API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::rate_source(format!(
                "Rate API error {}: {}",
                status, error_body
            )));
        }

        let currencies: CurrenciesResponse = response.json().await.map_err(|e| {
            AppError::rate_source(format!("Failed to parse currencies response: {}", e))
        })?;

        let mut codes: Vec<String> = currencies.currencies.into_keys().collect();
        codes.sort();
        Ok(codes)
    }

    fn name(&self) -> &str {
        "exchangerate.host"
    }
}
