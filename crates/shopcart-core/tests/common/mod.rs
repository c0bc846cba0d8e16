//! Test-data factory shared by the integration suites.

#![allow(dead_code)]

use shopcart_core::{Address, Cart, CustomerType, Item, Money, ShippingMethod};

pub fn roissy() -> Address {
    Address::new("22 avenue du Bois", "Roissy-en-Brie", "France")
}

/// Same country as [`roissy`], different city.
pub fn paris() -> Address {
    Address::new("10 rue de Rivoli", "Paris", "France")
}

/// Different country from [`roissy`].
pub fn berlin() -> Address {
    Address::new("Unter den Linden 1", "Berlin", "Germany")
}

/// Zero-priced lines with the given quantities.
pub fn items(quantities: &[u32]) -> Vec<Item> {
    quantities
        .iter()
        .enumerate()
        .map(|(i, qty)| Item::new(format!("sku-{i}"), format!("Product {i}"), Money::zero(), *qty))
        .collect()
}

/// Priced lines from `(price_cents, quantity)` pairs.
pub fn priced_items(lines: &[(i64, u32)]) -> Vec<Item> {
    lines
        .iter()
        .enumerate()
        .map(|(i, (price, qty))| {
            Item::new(
                format!("sku-{i}"),
                format!("Product {i}"),
                Money::from_cents(*price),
                *qty,
            )
        })
        .collect()
}

pub fn cart(
    destination: Address,
    customer_type: CustomerType,
    shipping_method: ShippingMethod,
    items: Vec<Item>,
) -> Cart {
    Cart {
        id: "cart-1".to_string(),
        customer_id: "customer-1".to_string(),
        customer_type,
        items,
        shipping_address: destination,
        shipping_method,
    }
}
