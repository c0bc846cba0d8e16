//! # Domain Types
//!
//! The cart snapshot the pricing engines read, and the totals they produce.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Cart       │   │      Item       │   │    Address      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  product_id     │   │  street         │       │
//! │  │  customer_id    │   │  product_name   │   │  city           │       │
//! │  │  customer_type  │   │  price (Money)  │   │  country        │       │
//! │  │  items ─────────┼──►│  quantity (u32) │   └─────────────────┘       │
//! │  │  address ───────┼──────────────────────────────►                     │
//! │  │  method         │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CustomerType   │   │ ShippingMethod  │   │ CheckoutTotals  │       │
//! │  │  Standard       │   │  Standard       │   │  (output only)  │       │
//! │  │  Premium        │   │  Expedited      │   └─────────────────┘       │
//! │  └─────────────────┘   │  Priority       │                              │
//! │                        │  Express        │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! A `Cart` is assembled by the caller for one pricing computation. Nothing
//! in this crate mutates it; every engine takes `&Cart`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Address
// =============================================================================

/// A postal address.
///
/// Identity is structural. Missing fields on the wire deserialize to empty
/// strings, which the validator then rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

impl Address {
    /// Creates an address from its three parts.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Address {
            street: street.into(),
            city: city.into(),
            country: country.into(),
        }
    }

    /// An address with every field empty.
    ///
    /// Used as the origin when none is configured.
    pub fn empty() -> Self {
        Address::default()
    }
}

// =============================================================================
// Item
// =============================================================================

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    /// Descriptive only, never used in pricing.
    #[serde(default)]
    pub product_id: String,

    /// Descriptive only, never used in pricing.
    #[serde(default)]
    pub product_name: String,

    /// Unit price.
    #[serde(default)]
    pub price: Money,

    /// Units ordered. Unsigned, so never negative.
    #[serde(default)]
    pub quantity: u32,
}

impl Item {
    /// Creates a cart line.
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Self {
        Item {
            product_id: product_id.into(),
            product_name: product_name.into(),
            price,
            quantity,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(u64::from(self.quantity))
    }
}

// =============================================================================
// Customer Type
// =============================================================================

/// Loyalty tier of the customer owning the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CustomerType {
    #[default]
    Standard,
    /// Earns the checkout discount and relief on Expedited/Priority fees.
    Premium,
}

impl CustomerType {
    #[inline]
    pub const fn is_premium(&self) -> bool {
        matches!(self, CustomerType::Premium)
    }
}

// =============================================================================
// Shipping Method
// =============================================================================

/// Requested shipping urgency, ordered from cheapest to most expensive.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ShippingMethod {
    #[default]
    Standard,
    Expedited,
    Priority,
    Express,
}

// =============================================================================
// Cart
// =============================================================================

/// Snapshot of a cart at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub customer_id: String,

    #[serde(default)]
    pub customer_type: CustomerType,

    /// Ordered lines; may be empty.
    #[serde(default)]
    pub items: Vec<Item>,

    /// Destination. Required on the wire: a cart without one is a caller
    /// error, not something to price.
    pub shipping_address: Address,

    #[serde(default)]
    pub shipping_method: ShippingMethod,
}

impl Cart {
    /// Creates an empty cart shipping to `shipping_address` with Standard
    /// customer and method.
    pub fn new(id: impl Into<String>, shipping_address: Address) -> Self {
        Cart {
            id: id.into(),
            customer_id: String::new(),
            customer_type: CustomerType::default(),
            items: Vec::new(),
            shipping_address,
            shipping_method: ShippingMethod::default(),
        }
    }

    /// Total units across every line.
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Σ price × quantity.
    pub fn items_subtotal(&self) -> Money {
        self.items.iter().map(Item::line_total).sum()
    }
}

// =============================================================================
// Checkout Totals
// =============================================================================

/// Result of pricing a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutTotals {
    /// Loyalty discount in whole percent (0 or 10).
    pub customer_discount: u32,

    /// Σ price × quantity, before discount.
    pub items_subtotal: Money,

    /// Shipping surcharge, before discount.
    pub shipping_cost: Money,

    /// Final payable amount.
    pub total: Money,
}

impl CheckoutTotals {
    /// Subtotal plus shipping, before the discount is applied.
    #[inline]
    pub fn raw_total(&self) -> Money {
        self.items_subtotal + self.shipping_cost
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
