//! Unified error codes for the freight pricing workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Shipment input errors
//! - 2xxx: Tariff and configuration errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// Serialized as a bare u16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Input rejected without a more specific code
    ValidationFailed = 2,

    // ==================== 1xxx: Shipment ====================
    /// Real weight is not a number or outside the accepted range
    InvalidWeight = 1001,
    /// Dimension triple is partial or a value is outside the accepted range
    InvalidDimensions = 1002,
    /// Package quantity is zero
    InvalidQuantity = 1003,
    /// Multi-package quote without any package line
    EmptyPackageList = 1004,
    /// Shipment too large for the decimal range of the engine
    AmountOutOfRange = 1005,

    // ==================== 2xxx: Tariff ====================
    /// Pricing configuration snapshot could not be loaded
    ConfigUnavailable = 2001,
    /// Route rate lookup failed
    RateLookupFailed = 2002,
    /// Pricing configuration snapshot is malformed
    InvalidConfig = 2003,

    // ==================== 9xxx: System ====================
    /// Unexpected engine failure
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",

            // Shipment
            ErrorCode::InvalidWeight => "Weight is outside the accepted range",
            ErrorCode::InvalidDimensions => "Dimensions are partial or outside the accepted range",
            ErrorCode::InvalidQuantity => "Package quantity must be at least one",
            ErrorCode::EmptyPackageList => "At least one package is required",
            ErrorCode::AmountOutOfRange => "Shipment is too large to price",

            // Tariff
            ErrorCode::ConfigUnavailable => "Pricing configuration is unavailable",
            ErrorCode::RateLookupFailed => "Transport rate lookup failed",
            ErrorCode::InvalidConfig => "Pricing configuration is invalid",

            // System
            ErrorCode::InternalError => "Internal pricing error",
        }
    }

    /// Whether the caller may retry the same request later
    pub const fn is_retryable(&self) -> bool {
        matches!(self, ErrorCode::ConfigUnavailable | ErrorCode::RateLookupFailed)
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),

            // Shipment
            1001 => Ok(ErrorCode::InvalidWeight),
            1002 => Ok(ErrorCode::InvalidDimensions),
            1003 => Ok(ErrorCode::InvalidQuantity),
            1004 => Ok(ErrorCode::EmptyPackageList),
            1005 => Ok(ErrorCode::AmountOutOfRange),

            // Tariff
            2001 => Ok(ErrorCode::ConfigUnavailable),
            2002 => Ok(ErrorCode::RateLookupFailed),
            2003 => Ok(ErrorCode::InvalidConfig),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::InvalidWeight.code(), 1001);
        assert_eq!(ErrorCode::InvalidDimensions.code(), 1002);
        assert_eq!(ErrorCode::InvalidQuantity.code(), 1003);
        assert_eq!(ErrorCode::EmptyPackageList.code(), 1004);
        assert_eq!(ErrorCode::AmountOutOfRange.code(), 1005);
        assert_eq!(ErrorCode::ConfigUnavailable.code(), 2001);
        assert_eq!(ErrorCode::RateLookupFailed.code(), 2002);
        assert_eq!(ErrorCode::InvalidConfig.code(), 2003);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::InvalidWeight));
        assert_eq!(ErrorCode::try_from(2002), Ok(ErrorCode::RateLookupFailed));
        assert_eq!(ErrorCode::try_from(2), Ok(ErrorCode::ValidationFailed));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(
            InvalidErrorCode(4242).to_string(),
            "invalid error code: 4242"
        );
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::EmptyPackageList).unwrap();
        assert_eq!(json, "1004");

        let code: ErrorCode = serde_json::from_str("1002").unwrap();
        assert_eq!(code, ErrorCode::InvalidDimensions);

        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }

    #[test]
    fn test_retryable() {
        assert!(ErrorCode::ConfigUnavailable.is_retryable());
        assert!(ErrorCode::RateLookupFailed.is_retryable());
        assert!(!ErrorCode::InvalidWeight.is_retryable());
        assert!(!ErrorCode::InvalidConfig.is_retryable());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::InvalidWeight.to_string(), "1001");
    }
}
