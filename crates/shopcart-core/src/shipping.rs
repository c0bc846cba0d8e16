//! # Shipping Module
//!
//! Distance-tier and method-tier shipping surcharge.
//!
//! ## Pricing Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shipping Cost Computation                            │
//! │                                                                         │
//! │  origin ─┐                                                              │
//! │          ├──► ShippingTier ──► tier rate (per unit)                     │
//! │  dest ───┘    SameCity / SameCountry / International                   │
//! │                                   │                                     │
//! │  Σ item.quantity ──► total units ─┤                                     │
//! │                                   ▼                                     │
//! │  (customer, method) ──► multiplier ──► (rate × multiplier) × units     │
//! │                                                                         │
//! │  The multiplier is applied to the per-unit rate and rounded once, so   │
//! │  cost stays exactly linear in units for any configured rate.           │
//! │  Only city and country take part in tiering. Street never does.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Method Multipliers
//! ```text
//!   Method      Standard customer   Premium customer
//!   ─────────   ─────────────────   ────────────────
//!   Standard          1.0                 1.0
//!   Expedited         1.2                 1.0
//!   Priority          2.0                 1.0
//!   Express           2.5                 2.5
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

use crate::config::PricingConfig;
use crate::error::CoreResult;
use crate::money::{Money, BPS_SCALE};
use crate::types::{Address, Cart, CustomerType, ShippingMethod};
use crate::validation::validate_rate_cents;

// =============================================================================
// Default Rates
// =============================================================================

/// Per-unit rate when origin and destination share city and country.
pub const SAME_CITY_RATE: Money = Money::from_cents(100);

/// Per-unit rate when only the country matches.
pub const SAME_COUNTRY_RATE: Money = Money::from_cents(200);

/// Per-unit rate when the countries differ.
pub const INTERNATIONAL_SHIPPING_RATE: Money = Money::from_cents(1500);

// =============================================================================
// Shipping Rates
// =============================================================================

/// The three per-unit tier rates a calculator prices with.
///
/// Serialized as whole cents so `pricing.toml` stays integer-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ShippingRates {
    #[serde(rename = "same_city_cents")]
    pub same_city: Money,

    #[serde(rename = "same_country_cents")]
    pub same_country: Money,

    #[serde(rename = "international_cents")]
    pub international: Money,
}

impl ShippingRates {
    /// Rejects any rate that is zero or negative.
    pub fn validate(&self) -> CoreResult<()> {
        validate_rate_cents("same_city rate", self.same_city.cents())?;
        validate_rate_cents("same_country rate", self.same_country.cents())?;
        validate_rate_cents("international rate", self.international.cents())?;
        Ok(())
    }

    /// Rate for a tier.
    #[inline]
    pub const fn rate_for(&self, tier: ShippingTier) -> Money {
        match tier {
            ShippingTier::SameCity => self.same_city,
            ShippingTier::SameCountry => self.same_country,
            ShippingTier::International => self.international,
        }
    }
}

impl Default for ShippingRates {
    fn default() -> Self {
        ShippingRates {
            same_city: SAME_CITY_RATE,
            same_country: SAME_COUNTRY_RATE,
            international: INTERNATIONAL_SHIPPING_RATE,
        }
    }
}

// =============================================================================
// Shipping Tier
// =============================================================================

/// Geographic proximity between origin and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingTier {
    SameCity,
    SameCountry,
    International,
}

impl ShippingTier {
    /// Classifies a destination relative to an origin.
    ///
    /// Exact string equality on `country`, then `city`.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Address, ShippingTier};
    ///
    /// let paris = Address::new("1 Rue de Rivoli", "Paris", "France");
    /// let lyon = Address::new("2 Quai", "Lyon", "France");
    /// assert_eq!(ShippingTier::between(&paris, &lyon), ShippingTier::SameCountry);
    /// ```
    pub fn between(origin: &Address, destination: &Address) -> Self {
        if origin.country != destination.country {
            ShippingTier::International
        } else if origin.city != destination.city {
            ShippingTier::SameCountry
        } else {
            ShippingTier::SameCity
        }
    }
}

// =============================================================================
// Method Multiplier
// =============================================================================

/// Multiplier, in basis points, for a shipping method bought by a customer.
///
/// Premium customers are relieved of the Expedited and Priority surcharge.
/// Express is surcharged for everyone.
pub const fn method_multiplier_bps(customer: CustomerType, method: ShippingMethod) -> u32 {
    match (method, customer) {
        (ShippingMethod::Standard, _) => BPS_SCALE,
        (ShippingMethod::Expedited | ShippingMethod::Priority, CustomerType::Premium) => BPS_SCALE,
        (ShippingMethod::Expedited, CustomerType::Standard) => 12_000,
        (ShippingMethod::Priority, CustomerType::Standard) => 20_000,
        (ShippingMethod::Express, _) => 25_000,
    }
}

// =============================================================================
// Shipping Calculator
// =============================================================================

/// Computes the shipping surcharge for a cart.
///
/// Origin and rates are fixed at construction; the calculator holds no
/// other state and is safe to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingCalculator {
    origin: Address,
    rates: ShippingRates,
}

impl ShippingCalculator {
    /// Creates a calculator shipping from `origin` at the default rates.
    pub fn new(origin: Address) -> Self {
        ShippingCalculator {
            origin,
            rates: ShippingRates::default(),
        }
    }

    /// Creates a calculator with explicit rates.
    ///
    /// Fails when any rate is not positive.
    pub fn with_rates(origin: Address, rates: ShippingRates) -> CoreResult<Self> {
        rates.validate()?;
        Ok(ShippingCalculator { origin, rates })
    }

    /// Creates a calculator from loaded pricing configuration.
    pub fn from_config(config: &PricingConfig) -> CoreResult<Self> {
        Self::with_rates(config.origin.clone(), config.rates)
    }

    /// The address every cart ships from.
    pub fn origin(&self) -> &Address {
        &self.origin
    }

    pub fn rates(&self) -> &ShippingRates {
        &self.rates
    }

    /// Tier of a destination relative to this calculator's origin.
    pub fn tier_for(&self, destination: &Address) -> ShippingTier {
        ShippingTier::between(&self.origin, destination)
    }

    /// Shipping cost for a cart: (tier rate × method multiplier) × total units.
    ///
    /// The per-unit charge is rounded half-up to the cent before it is
    /// multiplied by the unit count. An empty cart (or one with only zero-quantity lines) costs nothing,
    /// whatever the tier or method.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Address, Cart, Item, Money, ShippingCalculator, SAME_CITY_RATE};
    ///
    /// let origin = Address::new("22 avenue du Bois", "Roissy-en-Brie", "France");
    /// let calculator = ShippingCalculator::new(origin.clone());
    ///
    /// let mut cart = Cart::new("cart-1", origin);
    /// cart.items.push(Item::new("p", "Mug", Money::from_cents(500), 4));
    ///
    /// assert_eq!(calculator.calculate_shipping_cost(&cart), SAME_CITY_RATE * 4);
    /// ```
    pub fn calculate_shipping_cost(&self, cart: &Cart) -> Money {
        let tier = self.tier_for(&cart.shipping_address);
        trace!(cart_id = %cart.id, ?tier, "Resolved shipping tier");

        let units = cart.total_units();
        let multiplier_bps = method_multiplier_bps(cart.customer_type, cart.shipping_method);

        let per_unit = self.rates.rate_for(tier).apply_multiplier_bps(multiplier_bps);
        let cost = per_unit.multiply_quantity(units);

        debug!(
            cart_id = %cart.id,
            ?tier,
            units,
            multiplier_bps,
            per_unit = %per_unit,
            cost = %cost,
            "Calculated shipping cost"
        );

        cost
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
