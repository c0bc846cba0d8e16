//! Checkout totals, discount rule and engine assembly.

mod common;

use common::{berlin, cart, items, priced_items, roissy};
use shopcart_core::{
    AddressValidator, CheckoutEngine, CoreError, CustomerType, Money, ShippingCalculator,
    ShippingMethod, ValidationError, INTERNATIONAL_SHIPPING_RATE, SAME_CITY_RATE,
};

#[test]
fn engine_without_shipping_calculator_fails_at_build() {
    let err = CheckoutEngine::builder().build().unwrap_err();
    assert!(matches!(err, CoreError::MissingShippingCalculator));
}

#[test]
fn premium_same_city_expedited_scenario() {
    let engine = CheckoutEngine::new(ShippingCalculator::new(roissy()));
    let cart = cart(
        roissy(),
        CustomerType::Premium,
        ShippingMethod::Expedited,
        items(&[2, 3]),
    );

    let totals = engine.calculate_totals(&cart);

    assert_eq!(totals.shipping_cost, SAME_CITY_RATE * 5);
    assert_eq!(totals.customer_discount, 10);
    assert_eq!(totals.total, totals.shipping_cost.apply_multiplier_bps(9_000));
    assert_eq!(totals.total.cents(), 450);
}

#[test]
fn premium_total_is_ninety_percent_with_default_origin() {
    let engine = CheckoutEngine::new(ShippingCalculator::default());
    let cart = cart(
        roissy(),
        CustomerType::Premium,
        ShippingMethod::Expedited,
        items(&[2, 3]),
    );

    let totals = engine.calculate_totals(&cart);

    let raw = INTERNATIONAL_SHIPPING_RATE * 5;
    assert_eq!(totals.raw_total(), raw);
    assert_eq!(totals.customer_discount, 10);
    assert_eq!(totals.total.cents(), raw.cents() * 90 / 100);
}

#[test]
fn standard_customer_pays_items_plus_shipping() {
    let engine = CheckoutEngine::new(ShippingCalculator::new(roissy()));
    let cart = cart(
        berlin(),
        CustomerType::Standard,
        ShippingMethod::Priority,
        priced_items(&[(1099, 2), (450, 1)]),
    );

    let totals = engine.calculate_totals(&cart);

    assert_eq!(totals.customer_discount, 0);
    assert_eq!(totals.items_subtotal.cents(), 1099 * 2 + 450);
    assert_eq!(totals.shipping_cost.cents(), 1500 * 3 * 2);
    assert_eq!(totals.total, totals.raw_total());
}

#[test]
fn premium_discount_applies_to_items_and_shipping() {
    let engine = CheckoutEngine::new(ShippingCalculator::new(roissy()));
    let cart = cart(
        roissy(),
        CustomerType::Premium,
        ShippingMethod::Standard,
        priced_items(&[(1900, 1)]),
    );

    let totals = engine.calculate_totals(&cart);

    // (1900 + 100) × 0.9
    assert_eq!(totals.total.cents(), 1800);
}

#[test]
fn validated_cart_flow() {
    let engine = CheckoutEngine::builder()
        .shipping_calculator(ShippingCalculator::new(roissy()))
        .build()
        .unwrap();
    let cart = cart(
        berlin(),
        CustomerType::Standard,
        ShippingMethod::Standard,
        priced_items(&[(500, 2)]),
    );

    assert!(AddressValidator::is_valid(Some(&cart.shipping_address)));
    assert!(shopcart_core::validate_cart(&cart).is_ok());

    let totals = engine.calculate_totals(&cart);
    assert_eq!(totals.total.cents(), 1000 + 3000);
}

#[test]
fn oversized_cart_is_rejected_and_never_wraps() {
    let engine = CheckoutEngine::new(ShippingCalculator::new(roissy()));
    let cart = cart(
        berlin(),
        CustomerType::Standard,
        ShippingMethod::Express,
        priced_items(&[(i64::MAX / 2, 3)]),
    );

    assert!(matches!(
        shopcart_core::validate_cart(&cart),
        Err(ValidationError::OutOfRange { .. })
    ));

    let totals = engine.calculate_totals(&cart);
    assert_eq!(totals.items_subtotal, Money::from_cents(i64::MAX));
    assert_eq!(totals.total, Money::from_cents(i64::MAX));
}

#[test]
fn totals_serialize_camel_case() {
    let engine = CheckoutEngine::new(ShippingCalculator::new(roissy()));
    let cart = cart(
        roissy(),
        CustomerType::Premium,
        ShippingMethod::Standard,
        items(&[1]),
    );

    let json = serde_json::to_value(engine.calculate_totals(&cart)).unwrap();
    assert_eq!(json["customerDiscount"], 10);
    assert_eq!(json["shippingCost"], 100);
    assert_eq!(json["itemsSubtotal"], 0);
    assert_eq!(json["total"], 90);
}
