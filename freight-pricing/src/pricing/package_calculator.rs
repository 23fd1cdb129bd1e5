//! Multi-Package Pricing
//!
//! Prices every line as one piece at STANDARD priority, multiplies by the
//! line quantity, sums, then applies the shipment priority once on the
//! aggregate. Per-line priority would compound rounding across lines.

use rust_decimal::Decimal;
use shared::models::{CargoType, Priority};
use shared::quote::{
    MultiPackageInput, MultiPackageResult, PackageLine, PackageLineResult, PricingAdvisory,
    RouteDescriptor,
};

use super::calculator::{FreightPricer, validate_line};
use super::error::PricingError;
use super::money::{VOLUME_DECIMAL_PLACES, coefficient_to_f64, to_decimal, to_f64, to_f64_dp};

impl FreightPricer {
    /// Price a shipment made of several package lines
    ///
    /// All lines are validated before any collaborator call; the first bad
    /// line fails the whole request.
    ///
    /// # Errors
    /// - [`PricingError::EmptyPackageList`] when `packages` is empty
    /// - [`PricingError::InvalidQuantity`] for a line with quantity 0
    /// - [`PricingError::InvalidWeight`] / [`PricingError::InvalidDimensions`]
    ///   as in [`FreightPricer::price_single_line`]
    /// - [`PricingError::AmountOutOfRange`] when a line total or the
    ///   shipment total overflows
    /// - [`PricingError::Provider`] when a collaborator fails
    pub async fn price_multiple_packages(
        &self,
        input: &MultiPackageInput,
    ) -> Result<MultiPackageResult, PricingError> {
        validate_packages(&input.packages)?;

        let mut quotes = Vec::with_capacity(input.packages.len());
        for line in &input.packages {
            let line_input = input.line_input(line, Priority::Standard);
            quotes.push(self.quote_line(&line_input).await?);
        }

        let mut lines = Vec::with_capacity(input.packages.len());
        let mut advisories: Vec<PricingAdvisory> = Vec::new();
        let mut total_before_priority = Decimal::ZERO;
        let mut total_weight_kg = Decimal::ZERO;
        let mut total_volume_m3 = Decimal::ZERO;
        let mut total_package_count: u64 = 0;

        for (index, (line, quote)) in input.packages.iter().zip(quotes).enumerate() {
            let quantity = Decimal::from(line.quantity);
            // The rounded unit price is what the customer sees per piece
            let unit_price = to_decimal(quote.result.final_price);
            let line_total = unit_price
                .checked_mul(quantity)
                .ok_or(PricingError::AmountOutOfRange("line total"))?;

            total_before_priority = total_before_priority
                .checked_add(line_total)
                .ok_or(PricingError::AmountOutOfRange("shipment total"))?;
            total_weight_kg = to_decimal(line.unit_weight_kg)
                .checked_mul(quantity)
                .and_then(|weight| total_weight_kg.checked_add(weight))
                .ok_or(PricingError::AmountOutOfRange("total weight"))?;
            total_volume_m3 = quote
                .volume_m3
                .checked_mul(quantity)
                .and_then(|volume| total_volume_m3.checked_add(volume))
                .ok_or(PricingError::AmountOutOfRange("total volume"))?;
            total_package_count += u64::from(line.quantity);

            for advisory in &quote.result.advisories {
                if !advisories.contains(advisory) {
                    advisories.push(advisory.clone());
                }
            }

            lines.push(PackageLineResult {
                index,
                quantity: line.quantity,
                cargo_type: line.cargo_type,
                description: line.description.clone(),
                unit_price: to_f64(unit_price),
                line_total: to_f64(line_total),
                detail: quote.result,
            });
        }

        let priority_multiplier = if input.priority == Priority::Standard {
            Decimal::ONE
        } else {
            // Reference quote at the requested priority; only its
            // coefficient is used
            let reference = input.line_input(&input.packages[0], input.priority);
            self.quote_line(&reference).await?.priority_multiplier
        };

        let total_price = total_before_priority
            .checked_mul(priority_multiplier)
            .ok_or(PricingError::AmountOutOfRange("shipment total"))?;
        let priority_surcharge = total_price - total_before_priority;

        let first = &lines[0].detail;
        let route = RouteDescriptor {
            origin_code: first.route.origin_code.clone(),
            destination_code: first.route.destination_code.clone(),
            mode: input.mode,
        };
        let currency = first.currency.clone();
        let route_rate_used = lines.iter().all(|line| line.detail.route_rate_used);
        let dominant_cargo_type = dominant_cargo_type(&input.packages);

        tracing::info!(
            route = %route,
            lines = lines.len(),
            packages = total_package_count,
            priority = %input.priority,
            total_price = %total_price,
            "Multi-package shipment priced"
        );

        Ok(MultiPackageResult {
            lines,
            total_before_priority: to_f64(total_before_priority),
            priority: input.priority,
            priority_coefficient: coefficient_to_f64(priority_multiplier),
            priority_surcharge_amount: to_f64(priority_surcharge),
            total_price: to_f64(total_price),
            total_weight_kg: to_f64(total_weight_kg),
            total_volume_m3: to_f64_dp(total_volume_m3, VOLUME_DECIMAL_PLACES),
            total_package_count,
            dominant_cargo_type,
            currency,
            route,
            route_rate_used,
            advisories,
        })
    }
}

fn validate_packages(packages: &[PackageLine]) -> Result<(), PricingError> {
    if packages.is_empty() {
        return Err(PricingError::EmptyPackageList);
    }
    for (index, line) in packages.iter().enumerate() {
        if line.quantity == 0 {
            return Err(PricingError::InvalidQuantity { index });
        }
        validate_line(line.unit_weight_kg, line.length_cm, line.width_cm, line.height_cm)?;
    }
    Ok(())
}

/// Cargo type with the highest summed quantity; ties go to the type seen first
fn dominant_cargo_type(packages: &[PackageLine]) -> CargoType {
    let mut tally: Vec<(CargoType, u64)> = Vec::new();
    for line in packages {
        match tally.iter_mut().find(|(cargo, _)| *cargo == line.cargo_type) {
            Some((_, count)) => *count += u64::from(line.quantity),
            None => tally.push((line.cargo_type, u64::from(line.quantity))),
        }
    }

    tally
        .into_iter()
        .fold(None, |best: Option<(CargoType, u64)>, (cargo, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((cargo, count)),
        })
        .map(|(cargo, _)| cargo)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{InMemoryRateResolver, StaticConfigProvider};
    use shared::models::{PricingConfig, TransportMode, TransportRate};
    use std::sync::Arc;

    fn pricer() -> FreightPricer {
        FreightPricer::new(
            Arc::new(StaticConfigProvider::new(PricingConfig::default())),
            Arc::new(InMemoryRateResolver::from_rates([TransportRate::new(
                "FR",
                "BF",
                TransportMode::Air,
                7.25,
                900.0,
            )])),
        )
    }

    fn shipment(packages: Vec<PackageLine>, priority: Priority) -> MultiPackageInput {
        MultiPackageInput {
            packages,
            mode: TransportMode::Air,
            priority,
            origin_code: "FR".into(),
            destination_code: "BF".into(),
        }
    }

    #[tokio::test]
    async fn test_priority_applied_once_on_aggregate() {
        let input = shipment(
            vec![
                // 10 kg × 7.25 = 72.50, ×1.30 fragile = 94.25
                PackageLine::new(2, CargoType::Fragile, 10.0),
                // 4 kg × 7.25 = 29.00
                PackageLine::new(3, CargoType::General, 4.0).with_description("Cartons"),
            ],
            Priority::Express,
        );

        let result = pricer().price_multiple_packages(&input).await.unwrap();

        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].unit_price, 94.25);
        assert_eq!(result.lines[0].line_total, 188.5);
        assert_eq!(result.lines[0].detail.priority, Priority::Standard);
        assert_eq!(result.lines[1].unit_price, 29.0);
        assert_eq!(result.lines[1].line_total, 87.0);
        assert_eq!(result.lines[1].description.as_deref(), Some("Cartons"));

        // 275.50 × 1.15 = 316.825 → 316.83
        assert_eq!(result.total_before_priority, 275.5);
        assert_eq!(result.priority_coefficient, 1.15);
        assert_eq!(result.total_price, 316.83);
        assert_eq!(result.priority_surcharge_amount, 41.33);
        assert_eq!(result.total_weight_kg, 32.0);
        assert_eq!(result.total_package_count, 5);
        assert_eq!(result.dominant_cargo_type, CargoType::General);
        assert!(result.route_rate_used);
        assert!(result.advisories.is_empty());
    }

    #[tokio::test]
    async fn test_standard_priority_total_equals_sum() {
        let input = shipment(vec![PackageLine::new(4, CargoType::General, 2.0)], Priority::Standard);

        let result = pricer().price_multiple_packages(&input).await.unwrap();

        assert_eq!(result.priority_coefficient, 1.0);
        assert_eq!(result.priority_surcharge_amount, 0.0);
        assert_eq!(result.total_price, result.total_before_priority);
        assert_eq!(result.total_price, 58.0);
    }

    #[tokio::test]
    async fn test_volume_summed_per_piece() {
        let input = shipment(
            vec![PackageLine::new(2, CargoType::General, 1.0).with_dimensions(50.0, 40.0, 30.0)],
            Priority::Standard,
        );

        let result = pricer().price_multiple_packages(&input).await.unwrap();

        // 0.06 m³ per piece
        assert_eq!(result.lines[0].detail.volume_m3, 0.06);
        assert_eq!(result.total_volume_m3, 0.12);
        assert!(result.lines[0].detail.billed_on_volume);
    }

    #[tokio::test]
    async fn test_missing_route_advisory_reported_once() {
        let mut input = shipment(
            vec![
                PackageLine::new(1, CargoType::General, 5.0),
                PackageLine::new(1, CargoType::Bulk, 5.0),
            ],
            Priority::Standard,
        );
        input.destination_code = "ml".into();

        let result = pricer().price_multiple_packages(&input).await.unwrap();

        assert!(!result.route_rate_used);
        assert_eq!(result.advisories.len(), 1);
        assert_eq!(result.route.destination_code, "ML");
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let pricer = pricer();

        let empty = shipment(vec![], Priority::Standard);
        assert!(matches!(
            pricer.price_multiple_packages(&empty).await,
            Err(PricingError::EmptyPackageList)
        ));

        let zero_quantity = shipment(
            vec![
                PackageLine::new(1, CargoType::General, 5.0),
                PackageLine::new(0, CargoType::General, 5.0),
            ],
            Priority::Standard,
        );
        assert!(matches!(
            pricer.price_multiple_packages(&zero_quantity).await,
            Err(PricingError::InvalidQuantity { index: 1 })
        ));

        let bad_weight = shipment(vec![PackageLine::new(1, CargoType::General, 0.0)], Priority::Standard);
        assert!(matches!(
            pricer.price_multiple_packages(&bad_weight).await,
            Err(PricingError::InvalidWeight(_))
        ));
    }

    #[tokio::test]
    async fn test_quantity_overflow_is_an_error() {
        let pricer = FreightPricer::new(
            Arc::new(StaticConfigProvider::new(PricingConfig::default())),
            Arc::new(InMemoryRateResolver::from_rates([TransportRate::new(
                "FR",
                "BF",
                TransportMode::Air,
                1e15,
                900.0,
            )])),
        );
        // 1e6 kg × 1e15 = 1e21 per piece, times 4e9 pieces
        let input = shipment(
            vec![
                PackageLine::new(u32::MAX, CargoType::General, 1_000_000.0),
                PackageLine::new(u32::MAX, CargoType::General, 1_000_000.0),
            ],
            Priority::Standard,
        );

        let err = pricer.price_multiple_packages(&input).await.unwrap_err();
        assert!(matches!(err, PricingError::AmountOutOfRange(_)));
    }

    #[test]
    fn test_dominant_cargo_type() {
        let lines = vec![
            PackageLine::new(2, CargoType::Fragile, 1.0),
            PackageLine::new(3, CargoType::General, 1.0),
            PackageLine::new(2, CargoType::Fragile, 1.0),
        ];
        assert_eq!(dominant_cargo_type(&lines), CargoType::Fragile);
    }

    #[test]
    fn test_dominant_cargo_type_tie_goes_to_first_seen() {
        let lines = vec![
            PackageLine::new(3, CargoType::Perishable, 1.0),
            PackageLine::new(3, CargoType::Dangerous, 1.0),
        ];
        assert_eq!(dominant_cargo_type(&lines), CargoType::Perishable);
    }
}
