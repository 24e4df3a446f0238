use std::env;

use serde::Deserialize;

use crate::core::Result;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub exchange_rates: RateProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Settings for the remote exchange-rate source
#[derive(Debug, Clone, Deserialize)]
pub struct RateProviderConfig {
    /// API credential; live lookups are disabled when empty
    pub api_key: String,
    pub base_url: String,
    /// Restricted demo deployments never make live network calls
    pub demo_mode: bool,
}

impl RateProviderConfig {
    pub fn disabled() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.exchangerate.host".to_string(),
            demo_mode: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config {
            exchange_rates: RateProviderConfig {
                api_key: env::var("EXCHANGE_RATE_API_KEY").unwrap_or_default(),
                base_url: env::var("EXCHANGE_RATE_BASE_URL")
                    .unwrap_or_else(|_| "https://api.exchangerate.host".to_string()),
                demo_mode: app_env == "demo",
            },
            app: AppConfig {
                env: app_env,
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.exchange_rates.base_url.is_empty() {
            return Err(crate::core::AppError::Configuration(
                "Exchange rate base URL must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
