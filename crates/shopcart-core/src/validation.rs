//! # Validation Module
//!
//! Precondition gates a caller runs before asking for a quote.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Sits                              │
//! │                                                                         │
//! │  Caller builds Cart                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AddressValidator::is_valid / validate  ← THIS MODULE                  │
//! │  validate_cart                           ← THIS MODULE                  │
//! │       │                                                                 │
//! │       ├── fails? → reject the checkout, do NOT price                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CheckoutEngine::calculate_totals                                      │
//! │                                                                         │
//! │  The engines never call into this module themselves: a structurally    │
//! │  present address always prices, even with empty fields.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::{Address, AddressValidator};
//!
//! let address = Address::new("22 avenue du Bois", "Roissy-en-Brie", "France");
//! assert!(AddressValidator::is_valid(Some(&address)));
//! assert!(!AddressValidator::is_valid(None));
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Address, Cart, Item};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Address Validator
// =============================================================================

/// Decides whether a destination is well-formed enough to be priced.
///
/// Fields are checked for emptiness exactly as given. No trimming, no case
/// folding.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressValidator;

impl AddressValidator {
    /// True only when an address is present and street, city and country are
    /// all non-empty.
    pub fn is_valid(address: Option<&Address>) -> bool {
        Self::validate(address).is_ok()
    }

    /// Same rule as [`is_valid`](Self::is_valid), naming the first field that
    /// fails.
    ///
    /// Fields are checked in the order country, city, street.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Address, AddressValidator, ValidationError};
    ///
    /// let no_city = Address::new("1 Main St", "", "France");
    /// assert_eq!(
    ///     AddressValidator::validate(Some(&no_city)),
    ///     Err(ValidationError::Required { field: "city".to_string() })
    /// );
    /// ```
    pub fn validate(address: Option<&Address>) -> ValidationResult<()> {
        let address = address.ok_or_else(|| required("shipping address"))?;

        if address.country.is_empty() {
            return Err(required("country"));
        }
        if address.city.is_empty() {
            return Err(required("city"));
        }
        if address.street.is_empty() {
            return Err(required("street"));
        }

        Ok(())
    }
}

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates a single cart line.
///
/// ## Rules
/// - Price must be non-negative (zero is a free item)
///
/// Quantity is unsigned and needs no check.
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    if item.price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: format!("price of {}", item.product_id),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates every line of a cart.
///
/// ## Rules
/// - Every line passes [`validate_item`]
/// - Each line total, and the running items subtotal, fit in `Money`
///
/// A cart passing this check always prices to a non-negative total.
/// An empty cart is valid.
pub fn validate_cart(cart: &Cart) -> ValidationResult<()> {
    let mut subtotal = Money::zero();

    for item in &cart.items {
        validate_item(item)?;

        let line_total = item
            .price
            .checked_multiply_quantity(u64::from(item.quantity))
            .ok_or_else(|| too_large(format!("line total of {}", item.product_id)))?;

        subtotal = subtotal
            .checked_add(line_total)
            .ok_or_else(|| too_large("items subtotal".to_string()))?;
    }

    Ok(())
}

fn too_large(field: String) -> ValidationError {
    ValidationError::OutOfRange {
        field,
        min: 0,
        max: i64::MAX,
    }
}

/// Validates a per-unit shipping rate in cents.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_rate_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Address {
        Address::new("22 avenue du Bois", "Roissy-en-Brie", "France")
    }

    #[test]
    fn test_absent_address_is_invalid() {
        assert!(!AddressValidator::is_valid(None));
        assert_eq!(
            AddressValidator::validate(None),
            Err(required("shipping address"))
        );
    }

    #[test]
    fn test_complete_address_is_valid() {
        assert!(AddressValidator::is_valid(Some(&full())));
    }

    #[test]
    fn test_each_empty_field_is_invalid() {
        let mut address = full();
        address.country.clear();
        assert_eq!(
            AddressValidator::validate(Some(&address)),
            Err(required("country"))
        );

        let mut address = full();
        address.city.clear();
        assert_eq!(
            AddressValidator::validate(Some(&address)),
            Err(required("city"))
        );

        let mut address = full();
        address.street.clear();
        assert_eq!(
            AddressValidator::validate(Some(&address)),
            Err(required("street"))
        );
    }

    #[test]
    fn test_empty_address_reports_country_first() {
        assert_eq!(
            AddressValidator::validate(Some(&Address::empty())),
            Err(required("country"))
        );
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let address = Address::new(" ", " ", " ");
        assert!(AddressValidator::is_valid(Some(&address)));
    }

    #[test]
    fn test_validate_item() {
        assert!(validate_item(&Item::new("a", "A", Money::zero(), 0)).is_ok());
        assert!(validate_item(&Item::new("a", "A", Money::from_cents(1099), 3)).is_ok());
        assert!(validate_item(&Item::new("a", "A", Money::from_cents(-1), 1)).is_err());
    }

    #[test]
    fn test_validate_cart() {
        let mut cart = Cart::new("c", full());
        assert!(validate_cart(&cart).is_ok());

        cart.items.push(Item::new("a", "A", Money::from_cents(100), 1));
        assert!(validate_cart(&cart).is_ok());

        cart.items.push(Item::new("b", "B", Money::from_cents(-100), 1));
        assert!(matches!(
            validate_cart(&cart),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_cart_rejects_line_total_overflow() {
        let mut cart = Cart::new("c", full());
        cart.items
            .push(Item::new("bulk", "Bulk", Money::from_cents(i64::MAX / 2), 3));

        assert_eq!(
            validate_cart(&cart),
            Err(ValidationError::OutOfRange {
                field: "line total of bulk".to_string(),
                min: 0,
                max: i64::MAX,
            })
        );
    }

    #[test]
    fn test_validate_cart_rejects_subtotal_overflow() {
        let mut cart = Cart::new("c", full());
        cart.items
            .push(Item::new("a", "A", Money::from_cents(i64::MAX / 2), 2));
        assert!(validate_cart(&cart).is_ok());

        cart.items
            .push(Item::new("b", "B", Money::from_cents(i64::MAX / 2), 2));
        assert_eq!(
            validate_cart(&cart),
            Err(ValidationError::OutOfRange {
                field: "items subtotal".to_string(),
                min: 0,
                max: i64::MAX,
            })
        );
    }

    #[test]
    fn test_validate_rate_cents() {
        assert!(validate_rate_cents("same_city", 1).is_ok());
        assert!(validate_rate_cents("same_city", 0).is_err());
        assert!(validate_rate_cents("same_city", -100).is_err());
    }
}
