//! # shopcart-core: Pure Checkout Pricing
//!
//! Computes what a cart costs at checkout: item subtotal, a distance- and
//! method-dependent shipping surcharge, and the loyalty discount.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          API layer / checkout-cli (outside this crate)          │   │
//! │  │     receives cart snapshot ──► returns CheckoutTotals           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopcart-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐   ┌────────────┐   ┌────────────┐             │   │
//! │  │   │ validation │   │  shipping  │◄──│  checkout  │             │   │
//! │  │   │  Address   │   │ Calculator │   │   Engine   │             │   │
//! │  │   │ Validator  │   │  tiers     │   │  discount  │             │   │
//! │  │   └────────────┘   └────────────┘   └────────────┘             │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Cart snapshot and totals (Address, Item, Cart, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`shipping`] - Shipping tiers, method multipliers, calculator
//! - [`checkout`] - Checkout engine and discount rule
//! - [`validation`] - Address and cart precondition gates
//! - [`config`] - Pricing configuration (origin, rates)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{
//!     Address, AddressValidator, Cart, CheckoutEngine, CustomerType, Item, Money,
//!     ShippingCalculator, ShippingMethod, INTERNATIONAL_SHIPPING_RATE,
//! };
//!
//! let warehouse = Address::new("22 avenue du Bois", "Roissy-en-Brie", "France");
//! let engine = CheckoutEngine::builder()
//!     .shipping_calculator(ShippingCalculator::new(warehouse))
//!     .build()?;
//!
//! let mut cart = Cart::new("cart-42", Address::new("5 Main St", "Boston", "USA"));
//! cart.shipping_method = ShippingMethod::Express;
//! cart.items.push(Item::new("sku-1", "Kettle", Money::zero(), 1));
//!
//! assert!(AddressValidator::is_valid(Some(&cart.shipping_address)));
//!
//! let totals = engine.calculate_totals(&cart);
//! assert_eq!(totals.customer_discount, 0);
//! assert_eq!(totals.shipping_cost, INTERNATIONAL_SHIPPING_RATE.apply_multiplier_bps(25_000));
//! # assert_eq!(cart.customer_type, CustomerType::Standard);
//! # Ok::<(), shopcart_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod config;
pub mod error;
pub mod money;
pub mod shipping;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{CheckoutEngine, CheckoutEngineBuilder, PREMIUM_DISCOUNT_PERCENT};
pub use config::PricingConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use shipping::{
    method_multiplier_bps, ShippingCalculator, ShippingRates, ShippingTier,
    INTERNATIONAL_SHIPPING_RATE, SAME_CITY_RATE, SAME_COUNTRY_RATE,
};
pub use types::*;
pub use validation::{validate_cart, validate_item, AddressValidator};
