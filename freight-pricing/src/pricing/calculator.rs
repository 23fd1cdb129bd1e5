//! Single-Line Pricing
//!
//! Composes volume, chargeable weight, rate selection and surcharge
//! stacking into the itemized price of one shipment line.

use rust_decimal::Decimal;
use shared::models::normalize_country_code;
use shared::quote::{PricingAdvisory, PricingInput, PricingResult, RouteDescriptor};
use std::sync::Arc;

use super::chargeable::compute_chargeable_weight;
use super::error::PricingError;
use super::money::{VOLUME_DECIMAL_PLACES, coefficient_to_f64, to_decimal, to_f64, to_f64_dp};
use super::rate::select_rate;
use super::surcharge::apply_surcharges;
use super::volume::shipment_volume_m3;
use crate::core::Config;
use crate::services::{
    CachedConfigProvider, ConfigProvider, FileConfigProvider, InMemoryRateResolver,
    ProviderError, RateResolver, StaticConfigProvider,
};

/// Smallest accepted real weight (1 g)
pub const MIN_WEIGHT_KG: f64 = 0.001;

/// Largest accepted real weight per line (1000 t)
pub const MAX_WEIGHT_KG: f64 = 1_000_000.0;

/// Freight pricing engine
///
/// Stateless apart from its two read-only collaborators; cheap to clone and
/// safe to share between tasks.
#[derive(Clone)]
pub struct FreightPricer {
    config_provider: Arc<dyn ConfigProvider>,
    rate_resolver: Arc<dyn RateResolver>,
}

impl std::fmt::Debug for FreightPricer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FreightPricer")
            .field("config_provider", &"<ConfigProvider>")
            .field("rate_resolver", &"<RateResolver>")
            .finish()
    }
}

/// Priced line plus the unrounded values the aggregator needs
#[derive(Debug, Clone)]
pub(crate) struct LineQuote {
    pub result: PricingResult,
    pub volume_m3: Decimal,
    pub priority_multiplier: Decimal,
}

impl FreightPricer {
    pub fn new(config_provider: Arc<dyn ConfigProvider>, rate_resolver: Arc<dyn RateResolver>) -> Self {
        Self {
            config_provider,
            rate_resolver,
        }
    }

    /// Build the engine from environment configuration
    ///
    /// With `PRICING_CONFIG_PATH` set, the snapshot is read from that file
    /// through a TTL cache; otherwise built-in defaults are used. The
    /// snapshot is loaded once here so a broken file fails at startup.
    pub async fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let config_provider: Arc<dyn ConfigProvider> = match &config.pricing_config_path {
            Some(path) => Arc::new(CachedConfigProvider::new(
                FileConfigProvider::new(path),
                config.config_cache_ttl(),
            )),
            None => Arc::new(StaticConfigProvider::default()),
        };
        config_provider.pricing_config().await?;

        let rate_resolver = match &config.rate_table_path {
            Some(path) => InMemoryRateResolver::from_json_file(path).await?,
            None => {
                tracing::warn!("RATE_TABLE_PATH not set, every quote will use default tariffs");
                InMemoryRateResolver::new()
            }
        };

        Ok(Self::new(config_provider, Arc::new(rate_resolver)))
    }

    /// Price one shipment line
    ///
    /// # Errors
    /// - [`PricingError::InvalidWeight`] when `real_weight_kg` is outside
    ///   [`MIN_WEIGHT_KG`]..=[`MAX_WEIGHT_KG`]
    /// - [`PricingError::InvalidDimensions`] for a partial or out-of-range
    ///   dimension triple (all three at zero is valid)
    /// - [`PricingError::AmountOutOfRange`] when the tariff pushes an
    ///   amount past what `Decimal` can hold
    /// - [`PricingError::Provider`] when a collaborator fails
    ///
    /// A route without an active rate is not an error: the default tariff is
    /// used and the result carries `route_rate_used = false`.
    pub async fn price_single_line(&self, input: &PricingInput) -> Result<PricingResult, PricingError> {
        self.quote_line(input).await.map(|quote| quote.result)
    }

    pub(crate) async fn quote_line(&self, input: &PricingInput) -> Result<LineQuote, PricingError> {
        // Input checks run before any collaborator call
        let (real_weight_kg, volume_m3) = validate_line(
            input.real_weight_kg,
            input.length_cm,
            input.width_cm,
            input.height_cm,
        )?;
        let route = RouteDescriptor {
            origin_code: normalize_country_code(&input.origin_code),
            destination_code: normalize_country_code(&input.destination_code),
            mode: input.mode,
        };

        let config = self.config_provider.pricing_config().await?;
        let chargeable = compute_chargeable_weight(real_weight_kg, volume_m3, input.mode, &config)?;

        let route_rate = self
            .rate_resolver
            .transport_rate(&route.origin_code, &route.destination_code, input.mode)
            .await?;
        let selection = select_rate(route_rate.as_ref(), &config, input.mode, chargeable.unit)?;

        let mut advisories = Vec::new();
        if !selection.route_rate_used {
            tracing::warn!(route = %route, "No active rate for route, using default tariff");
            advisories.push(PricingAdvisory::RouteRateNotConfigured {
                route: route.clone(),
            });
        }

        let base_cost = chargeable
            .quantity
            .checked_mul(selection.unit_rate)
            .ok_or(PricingError::AmountOutOfRange("base cost"))?;
        let breakdown = apply_surcharges(
            base_cost,
            input.cargo_type,
            input.priority,
            selection.cargo_surcharges,
            selection.priority_surcharges,
        )?;

        tracing::debug!(
            route = %route,
            chargeable = %chargeable.quantity,
            unit = %chargeable.unit,
            unit_rate = %selection.unit_rate,
            final_price = %breakdown.final_price,
            "Line priced"
        );

        let result = PricingResult {
            volume_m3: to_f64_dp(volume_m3, VOLUME_DECIMAL_PLACES),
            volumetric_weight_kg: to_f64(chargeable.volumetric_weight_kg),
            chargeable_weight: to_f64(chargeable.quantity),
            chargeable_weight_unit: chargeable.unit,
            unit_rate: to_f64(selection.unit_rate),
            base_cost: to_f64(breakdown.base_cost),
            cargo_type: input.cargo_type,
            cargo_surcharge_coefficient: coefficient_to_f64(breakdown.cargo_coefficient),
            cargo_surcharge_amount: to_f64(breakdown.cargo_surcharge),
            subtotal: to_f64(breakdown.subtotal),
            priority: input.priority,
            priority_coefficient: coefficient_to_f64(breakdown.priority_multiplier),
            priority_surcharge_amount: to_f64(breakdown.priority_surcharge),
            final_price: to_f64(breakdown.final_price),
            currency: config.currency.clone(),
            route,
            billed_on_volume: chargeable.billed_on_volume,
            route_rate_used: selection.route_rate_used,
            advisories,
        };

        Ok(LineQuote {
            result,
            volume_m3,
            priority_multiplier: breakdown.priority_multiplier,
        })
    }
}

/// Check weight and dimensions; returns `(weight, volume)` as decimals
pub(crate) fn validate_line(
    real_weight_kg: f64,
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
) -> Result<(Decimal, Decimal), PricingError> {
    // NaN fails the range check too
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&real_weight_kg) {
        return Err(PricingError::InvalidWeight(real_weight_kg));
    }
    let volume_m3 = shipment_volume_m3(length_cm, width_cm, height_cm)?;
    Ok((to_decimal(real_weight_kg), volume_m3))
}
