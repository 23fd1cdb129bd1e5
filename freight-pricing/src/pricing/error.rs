//! Pricing errors

use super::calculator::{MAX_WEIGHT_KG, MIN_WEIGHT_KG};
use super::volume::{MAX_DIMENSION_CM, MIN_DIMENSION_CM};
use crate::services::ProviderError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by the pricing engine
///
/// Input errors are raised before any collaborator is called. Collaborator
/// failures are wrapped unchanged.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("real weight must be between {min} and {max} kg, got {0}", min = MIN_WEIGHT_KG, max = MAX_WEIGHT_KG)]
    InvalidWeight(f64),

    #[error(
        "invalid dimensions {length}×{width}×{height} cm: each must be between {min} and {max} cm",
        min = MIN_DIMENSION_CM,
        max = MAX_DIMENSION_CM
    )]
    InvalidDimensions { length: f64, width: f64, height: f64 },

    /// An intermediate amount left the decimal range
    #[error("{0} exceeds the supported amount range")]
    AmountOutOfRange(&'static str),

    #[error("package line {index} has quantity 0")]
    InvalidQuantity { index: usize },

    #[error("no package lines supplied")]
    EmptyPackageList,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl PricingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidWeight(_) => ErrorCode::InvalidWeight,
            Self::InvalidDimensions { .. } => ErrorCode::InvalidDimensions,
            Self::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            Self::EmptyPackageList => ErrorCode::EmptyPackageList,
            Self::AmountOutOfRange(_) => ErrorCode::AmountOutOfRange,
            Self::Provider(e) => e.code(),
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            PricingError::InvalidWeight(value) => app
                .with_detail("field", "real_weight_kg")
                .with_detail("value", value),
            PricingError::InvalidDimensions {
                length,
                width,
                height,
            } => app
                .with_detail("length_cm", length)
                .with_detail("width_cm", width)
                .with_detail("height_cm", height),
            PricingError::InvalidQuantity { index } => app.with_detail("line", index),
            PricingError::AmountOutOfRange(amount) => app.with_detail("amount", amount),
            PricingError::EmptyPackageList | PricingError::Provider(_) => app,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCategory;

    #[test]
    fn test_invalid_weight_to_app_error() {
        let app: AppError = PricingError::InvalidWeight(0.0).into();
        assert_eq!(app.code, ErrorCode::InvalidWeight);
        assert!(app.is_validation());
        let details = app.details.unwrap();
        assert_eq!(details["field"], "real_weight_kg");
    }

    #[test]
    fn test_dimensions_message() {
        let err = PricingError::InvalidDimensions {
            length: 10.0,
            width: 0.0,
            height: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid dimensions 10×0×5 cm: each must be between 0.1 and 10000 cm"
        );
    }

    #[test]
    fn test_provider_error_is_tariff_category() {
        let err = PricingError::from(ProviderError::Unavailable("timeout".into()));
        let app: AppError = err.into();
        assert_eq!(app.code.category(), ErrorCategory::Tariff);
        assert!(app.code.is_retryable());
        assert!(!app.is_validation());
    }
}
