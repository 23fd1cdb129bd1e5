//! Route rate resolvers

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{TransportMode, TransportRate, normalize_country_code};
use std::collections::HashMap;
use std::path::Path;

use super::ProviderError;

/// Looks up the contracted rate of a route
#[async_trait]
pub trait RateResolver: Send + Sync {
    /// Rate for `origin → destination` by `mode`, `None` when the route has
    /// no rate. Codes arrive upper-cased. Inactive rates may be returned;
    /// the engine ignores them.
    async fn transport_rate(
        &self,
        origin: &str,
        destination: &str,
        mode: TransportMode,
    ) -> Result<Option<TransportRate>, ProviderError>;
}

type RouteKey = (String, String, TransportMode);

/// In-memory rate table: "FR" / "BF" / AIR -> TransportRate
#[derive(Default)]
pub struct InMemoryRateResolver {
    rates: RwLock<HashMap<RouteKey, TransportRate>>,
}

impl std::fmt::Debug for InMemoryRateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRateResolver")
            .field("routes", &self.rates.read().len())
            .finish()
    }
}

impl InMemoryRateResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from trusted rates; invalid ones are logged and skipped
    pub fn from_rates(rates: impl IntoIterator<Item = TransportRate>) -> Self {
        let resolver = Self::new();
        for rate in rates {
            if let Err(e) = resolver.upsert(rate) {
                tracing::warn!(error = %e, "Skipping invalid transport rate");
            }
        }
        resolver
    }

    /// Load a JSON array of rates
    ///
    /// Every rate is validated; one bad entry fails the whole file.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ProviderError::Io {
                path: path_str.clone(),
                source,
            })?;
        let rates: Vec<TransportRate> = serde_json::from_str(&raw)
            .map_err(|source| ProviderError::Parse {
                path: path_str.clone(),
                source,
            })?;

        let resolver = Self::new();
        for rate in rates {
            resolver.upsert(rate)?;
        }
        tracing::info!(path = %path_str, routes = resolver.len(), "Loaded transport rate table");
        Ok(resolver)
    }

    /// Insert or replace the rate of a route; returns the previous one
    ///
    /// # Errors
    /// [`ProviderError::InvalidConfig`] when a rate is not finite and
    /// positive or a route surcharge table is out of range.
    pub fn upsert(&self, mut rate: TransportRate) -> Result<Option<TransportRate>, ProviderError> {
        rate.origin_code = normalize_country_code(&rate.origin_code);
        rate.destination_code = normalize_country_code(&rate.destination_code);
        rate.validate()?;
        let key = (
            rate.origin_code.clone(),
            rate.destination_code.clone(),
            rate.mode,
        );
        Ok(self.rates.write().insert(key, rate))
    }

    pub fn remove(&self, origin: &str, destination: &str, mode: TransportMode) -> Option<TransportRate> {
        self.rates.write().remove(&route_key(origin, destination, mode))
    }

    pub fn len(&self) -> usize {
        self.rates.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.read().is_empty()
    }
}

fn route_key(origin: &str, destination: &str, mode: TransportMode) -> RouteKey {
    (
        normalize_country_code(origin),
        normalize_country_code(destination),
        mode,
    )
}

#[async_trait]
impl RateResolver for InMemoryRateResolver {
    async fn transport_rate(
        &self,
        origin: &str,
        destination: &str,
        mode: TransportMode,
    ) -> Result<Option<TransportRate>, ProviderError> {
        let key = route_key(origin, destination, mode);
        Ok(self.rates.read().get(&key).cloned())
    }
}
