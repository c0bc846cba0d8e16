//! # Pricing Configuration
//!
//! The values a deployment sets once: where parcels ship from and what each
//! distance tier costs per unit. This module only describes and validates
//! them; reading `pricing.toml` and the environment is the app's job.
//!
//! ## File Format
//! ```toml
//! [origin]
//! street = "22 avenue du Bois"
//! city = "Roissy-en-Brie"
//! country = "France"
//!
//! [rates]
//! same_city_cents = 100
//! same_country_cents = 200
//! international_cents = 1500
//! ```
//!
//! Every section and key is optional. An absent origin is the all-empty
//! address; absent rates fall back to the defaults in [`crate::shipping`].

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::shipping::ShippingRates;
use crate::types::Address;

/// Deployment-level pricing settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Address every cart ships from.
    pub origin: Address,

    /// Per-unit tier rates.
    pub rates: ShippingRates,
}

impl PricingConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> CoreResult<()> {
        self.rates.validate()
    }
}
