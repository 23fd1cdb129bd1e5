//! Freight Pricing Engine
//!
//! Itemized freight quotes for air, sea, road and rail shipments.
//!
//! # Overview
//!
//! - **Pricing** (`pricing`): volume, chargeable weight, rate selection,
//!   surcharge stacking, single-line and multi-package quotes
//! - **Services** (`services`): tariff configuration and route rate
//!   collaborators, with file-backed and cached implementations
//! - **Core** (`core`): environment configuration
//! - **Utils** (`utils`): logging setup
//!
//! # Module Structure
//!
//! ```text
//! freight-pricing/src/
//! ├── core/          # Config
//! ├── pricing/       # Engine
//! ├── services/      # ConfigProvider, RateResolver
//! └── utils/         # Logger
//! ```
//!
//! # Example
//!
//! ```ignore
//! let config = Config::from_env();
//! let pricer = FreightPricer::from_config(&config).await?;
//! let quote = pricer
//!     .price_single_line(&PricingInput::new(50.0, TransportMode::Air, "FR", "BF"))
//!     .await?;
//! println!("{} {}", quote.final_price, quote.currency);
//! ```

pub mod core;
pub mod pricing;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::Config;
pub use pricing::{FreightPricer, PricingError};
pub use services::{ConfigProvider, ProviderError, RateResolver};

// Re-export shared quote types so callers need a single dependency
pub use shared::models::{CargoType, Priority, PricingConfig, TransportMode, TransportRate};
pub use shared::quote::{
    MultiPackageInput, MultiPackageResult, PackageLine, PricingInput, PricingResult,
};
pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` if present, then install the logger from the environment
///
/// Returns the loaded configuration.
pub fn setup_environment() -> Config {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    tracing::debug!(?config, "Environment loaded");
    config
}
