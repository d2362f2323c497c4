use serde::Deserialize;
use std::env;

/// Application configuration, loaded once at startup and passed down
/// explicitly (no ambient singleton).
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Cap on rows returned by the list operations; the transport layer
    /// pages above this.
    #[serde(default = "default_listing_limit")]
    pub listing_limit: usize,
}

fn default_listing_limit() -> usize {
    100
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            listing_limit: default_listing_limit(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `VOYAGE_STORE__LISTING_LIMIT=50`
            .add_source(config::Environment::with_prefix("VOYAGE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
