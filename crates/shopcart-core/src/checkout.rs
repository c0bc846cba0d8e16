//! # Checkout Module
//!
//! Aggregates item pricing and shipping into the payable total, then applies
//! the loyalty discount.
//!
//! ## Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart                                                                   │
//! │   │                                                                     │
//! │   ├──► Σ price × quantity ─────────────────┐                            │
//! │   │                                        ├──► raw total               │
//! │   └──► ShippingCalculator ──► shipping ────┘        │                   │
//! │                                                     ▼                   │
//! │                          Premium? 10% off : 0% off ──► total           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Assembly
//! The engine cannot exist without a shipping calculator. Wiring layers that
//! resolve the calculator at runtime go through [`CheckoutEngineBuilder`],
//! which fails at `build()` rather than on the first cart.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::BPS_SCALE;
use crate::shipping::ShippingCalculator;
use crate::types::{Cart, CheckoutTotals, CustomerType};

/// Discount, in whole percent, granted to Premium customers.
pub const PREMIUM_DISCOUNT_PERCENT: u32 = 10;

/// Discount in whole percent for a customer tier.
#[inline]
pub const fn customer_discount_percent(customer: CustomerType) -> u32 {
    if customer.is_premium() {
        PREMIUM_DISCOUNT_PERCENT
    } else {
        0
    }
}

// =============================================================================
// Checkout Engine
// =============================================================================

/// Computes the final payable total for a cart.
#[derive(Debug, Clone)]
pub struct CheckoutEngine {
    shipping: ShippingCalculator,
}

impl CheckoutEngine {
    /// Creates an engine around a shipping calculator.
    pub fn new(shipping: ShippingCalculator) -> Self {
        CheckoutEngine { shipping }
    }

    /// Starts an engine whose collaborators are supplied step by step.
    pub fn builder() -> CheckoutEngineBuilder {
        CheckoutEngineBuilder::default()
    }

    pub fn shipping_calculator(&self) -> &ShippingCalculator {
        &self.shipping
    }

    /// Prices a cart.
    ///
    /// ## Steps
    /// 1. items subtotal = Σ price × quantity
    /// 2. shipping = calculator result
    /// 3. raw total = subtotal + shipping
    /// 4. discount = 10% for Premium, 0% otherwise
    /// 5. total = raw total × (100 − discount) / 100, the total itself
    ///    rounded half-up to the cent
    ///
    /// Amounts saturate rather than wrap, so the total is never negative.
    /// Use [`validate_cart`](crate::validate_cart) to reject carts that large.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Address, Cart, CheckoutEngine, CustomerType, Item, Money, ShippingCalculator};
    ///
    /// let origin = Address::new("22 avenue du Bois", "Roissy-en-Brie", "France");
    /// let engine = CheckoutEngine::new(ShippingCalculator::new(origin.clone()));
    ///
    /// let mut cart = Cart::new("cart-1", origin);
    /// cart.customer_type = CustomerType::Premium;
    /// cart.items.push(Item::new("p", "Mug", Money::from_cents(900), 1));
    ///
    /// let totals = engine.calculate_totals(&cart);
    /// assert_eq!(totals.customer_discount, 10);
    /// assert_eq!(totals.total.cents(), 900); // (900 + 100) × 0.9
    /// ```
    pub fn calculate_totals(&self, cart: &Cart) -> CheckoutTotals {
        let items_subtotal = cart.items_subtotal();
        let shipping_cost = self.shipping.calculate_shipping_cost(cart);
        let raw_total = items_subtotal + shipping_cost;

        let customer_discount = customer_discount_percent(cart.customer_type);
        // whole percent off → factor in basis points (10% → 9 000)
        let total = raw_total.apply_multiplier_bps(BPS_SCALE - customer_discount * 100);

        debug!(
            cart_id = %cart.id,
            customer_id = %cart.customer_id,
            subtotal = %items_subtotal,
            shipping = %shipping_cost,
            discount_pct = customer_discount,
            total = %total,
            "Calculated checkout totals"
        );

        CheckoutTotals {
            customer_discount,
            items_subtotal,
            shipping_cost,
            total,
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Step-by-step assembly of a [`CheckoutEngine`].
#[derive(Debug, Clone, Default)]
pub struct CheckoutEngineBuilder {
    shipping: Option<ShippingCalculator>,
}

impl CheckoutEngineBuilder {
    pub fn shipping_calculator(mut self, calculator: ShippingCalculator) -> Self {
        self.shipping = Some(calculator);
        self
    }

    /// Finishes assembly.
    ///
    /// ## Errors
    /// [`CoreError::MissingShippingCalculator`] when no calculator was given.
    pub fn build(self) -> CoreResult<CheckoutEngine> {
        let shipping = self.shipping.ok_or(CoreError::MissingShippingCalculator)?;
        Ok(CheckoutEngine::new(shipping))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
