//! Collaborator services
//!
//! Read interfaces the pricing engine consumes, plus the in-process
//! implementations shipped with it:
//! - [`ConfigProvider`]: tariff configuration snapshot
//! - [`RateResolver`]: contracted rate of a route

pub mod config_provider;
pub mod rate_resolver;

pub use config_provider::{
    CachedConfigProvider, ConfigProvider, FileConfigProvider, StaticConfigProvider,
};
pub use rate_resolver::{InMemoryRateResolver, RateResolver};

use shared::error::ErrorCode;
use shared::models::InvalidPricingConfig;
use thiserror::Error;

/// Collaborator failures, propagated to the caller unchanged
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("rate lookup failed: {0}")]
    RateLookup(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    InvalidConfig(#[from] InvalidPricingConfig),
}

impl ProviderError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Unavailable(_) | Self::Io { .. } => ErrorCode::ConfigUnavailable,
            Self::RateLookup(_) => ErrorCode::RateLookupFailed,
            Self::Parse { .. } | Self::InvalidConfig(_) => ErrorCode::InvalidConfig,
        }
    }
}
