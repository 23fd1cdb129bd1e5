//! Configuration providers
//!
//! The engine asks for a [`PricingConfig`] snapshot on every quote. Caching
//! and invalidation live here, outside the engine.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::PricingConfig;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::ProviderError;

/// Supplies the tariff configuration snapshot
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Current snapshot. May be stale; never partially updated.
    async fn pricing_config(&self) -> Result<Arc<PricingConfig>, ProviderError>;
}

// =============================================================================
// StaticConfigProvider
// =============================================================================

/// Fixed snapshot, for embedding and tests
#[derive(Debug, Clone)]
pub struct StaticConfigProvider {
    config: Arc<PricingConfig>,
}

impl StaticConfigProvider {
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for StaticConfigProvider {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

#[async_trait]
impl ConfigProvider for StaticConfigProvider {
    async fn pricing_config(&self) -> Result<Arc<PricingConfig>, ProviderError> {
        Ok(self.config.clone())
    }
}

// =============================================================================
// FileConfigProvider
// =============================================================================

/// Reads a JSON snapshot from disk on every call
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    path: PathBuf,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ConfigProvider for FileConfigProvider {
    async fn pricing_config(&self) -> Result<Arc<PricingConfig>, ProviderError> {
        let path = self.path.display().to_string();
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ProviderError::Io {
                path: path.clone(),
                source,
            })?;
        let config: PricingConfig =
            serde_json::from_str(&raw).map_err(|source| ProviderError::Parse { path, source })?;
        config.validate()?;
        Ok(Arc::new(config))
    }
}

// =============================================================================
// CachedConfigProvider
// =============================================================================

struct CachedSnapshot {
    loaded_at: Instant,
    config: Arc<PricingConfig>,
}

/// Time-bounded cache around another provider
///
/// Failed refreshes are returned to the caller and leave the previous
/// snapshot in place.
pub struct CachedConfigProvider<P> {
    inner: P,
    ttl: Duration,
    cached: RwLock<Option<CachedSnapshot>>,
}

impl<P> std::fmt::Debug for CachedConfigProvider<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedConfigProvider")
            .field("ttl", &self.ttl)
            .field("cached", &self.cached.read().is_some())
            .finish()
    }
}

impl<P: ConfigProvider> CachedConfigProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: RwLock::new(None),
        }
    }

    /// Drop the cached snapshot; the next call reloads from the inner provider
    pub fn invalidate(&self) {
        if self.cached.write().take().is_some() {
            tracing::debug!("Pricing config cache invalidated");
        }
    }

    fn fresh(&self) -> Option<Arc<PricingConfig>> {
        let guard = self.cached.read();
        guard
            .as_ref()
            .filter(|snapshot| snapshot.loaded_at.elapsed() < self.ttl)
            .map(|snapshot| snapshot.config.clone())
    }
}

#[async_trait]
impl<P: ConfigProvider> ConfigProvider for CachedConfigProvider<P> {
    async fn pricing_config(&self) -> Result<Arc<PricingConfig>, ProviderError> {
        if let Some(config) = self.fresh() {
            return Ok(config);
        }

        let config = self.inner.pricing_config().await?;
        *self.cached.write() = Some(CachedSnapshot {
            loaded_at: Instant::now(),
            config: config.clone(),
        });
        tracing::info!(ttl_secs = self.ttl.as_secs(), "Pricing config snapshot refreshed");
        Ok(config)
    }
}
