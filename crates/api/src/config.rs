//! API configuration

use serde::{Deserialize, Serialize};

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Socket address to bind
    pub bind_addr: String,
    /// Path to the exported price model artifact
    pub model_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            model_path: "models/car_price_pipeline.onnx".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load from `config/api.toml` (optional) with `CAR_PRICE_*` environment
    /// overrides, falling back to defaults.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let defaults = ApiConfig::default();

        ::config::Config::builder()
            .set_default("bind_addr", defaults.bind_addr)?
            .set_default("model_path", defaults.model_path)?
            .add_source(::config::File::with_name("config/api").required(false))
            .add_source(::config::Environment::with_prefix("CAR_PRICE"))
            .build()?
            .try_deserialize()
    }
}
