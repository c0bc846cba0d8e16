//! # shopcart-quote
//!
//! Prices a single cart snapshot read as JSON and prints the totals.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Parse arguments
//! 3. Load pricing config (defaults → pricing.toml → environment)
//! 4. Read the cart (file or stdin)
//! 5. Validate destination and lines
//! 6. Price and print
//!
//! ## Cart JSON
//! ```json
//! {
//!   "id": "cart-42",
//!   "customerId": "c-7",
//!   "customerType": "premium",
//!   "shippingMethod": "expedited",
//!   "shippingAddress": { "street": "22 avenue du Bois", "city": "Roissy-en-Brie", "country": "France" },
//!   "items": [ { "productId": "sku-1", "productName": "Kettle", "price": 2599, "quantity": 2 } ]
//! }
//! ```

pub mod config;
pub mod error;

use std::io::Read;
use std::path::PathBuf;

use shopcart_core::{
    validate_cart, AddressValidator, Cart, CheckoutEngine, CheckoutTotals, PricingConfig,
    ShippingCalculator,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use error::{AppError, AppResult};

// =============================================================================
// Arguments
// =============================================================================

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct QuoteArgs {
    pub config_path: Option<PathBuf>,
    /// `None` reads the cart from stdin.
    pub cart_path: Option<PathBuf>,
    pub help: bool,
}

impl QuoteArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = QuoteArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--config" => {
                    let value = args
                        .next()
                        .ok_or_else(|| AppError::Usage(format!("{arg} needs a path")))?;
                    parsed.config_path = Some(PathBuf::from(value));
                }
                "--cart" => {
                    let value = args
                        .next()
                        .ok_or_else(|| AppError::Usage(format!("{arg} needs a path")))?;
                    parsed.cart_path = Some(PathBuf::from(value));
                }
                "-h" | "--help" => parsed.help = true,
                other => return Err(AppError::Usage(format!("unknown argument: {other}"))),
            }
        }

        Ok(parsed)
    }
}

pub const USAGE: &str = "\
Usage: shopcart-quote [OPTIONS]

Reads a cart snapshot as JSON and prints its checkout totals.

Options:
  -c, --config <PATH>   Pricing config file (default: platform config dir/pricing.toml)
      --cart <PATH>     Cart JSON file (default: stdin)
  -h, --help            Show this help message

Environment:
  SHOPCART_ORIGIN_STREET, SHOPCART_ORIGIN_CITY, SHOPCART_ORIGIN_COUNTRY
  SHOPCART_SAME_CITY_CENTS, SHOPCART_SAME_COUNTRY_CENTS, SHOPCART_INTERNATIONAL_CENTS
  RUST_LOG (default: info,shopcart=debug)";

// =============================================================================
// Quote
// =============================================================================

/// Validates and prices one cart under `config`.
///
/// The destination and lines are checked first; a cart that fails either
/// check is never priced.
pub fn quote(config: &PricingConfig, cart_json: &str) -> AppResult<CheckoutTotals> {
    let cart: Cart = serde_json::from_str(cart_json)?;

    AddressValidator::validate(Some(&cart.shipping_address))?;
    validate_cart(&cart)?;

    let engine = CheckoutEngine::builder()
        .shipping_calculator(ShippingCalculator::from_config(config)?)
        .build()?;

    let totals = engine.calculate_totals(&cart);
    info!(cart_id = %cart.id, total = %totals.total, "Quoted cart");

    Ok(totals)
}

/// Entry point used by the binary.
pub fn run<I>(args: I) -> AppResult<()>
where
    I: IntoIterator<Item = String>,
{
    init_tracing();

    let args = QuoteArgs::parse(args)?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = config::load(args.config_path.as_deref())?;
    let cart_json = read_cart(args.cart_path)?;

    let totals = quote(&config, &cart_json)?;
    println!("{}", serde_json::to_string_pretty(&totals)?);

    Ok(())
}

fn read_cart(path: Option<PathBuf>) -> AppResult<String> {
    match path {
        Some(path) => std::fs::read_to_string(&path).map_err(|source| AppError::Io { path, source }),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(AppError::Stdin)?;
            Ok(buffer)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopcart=trace` - Show tier decisions
/// - Default: INFO level, DEBUG for shopcart crates
///
/// Logs go to stderr so stdout carries only the totals JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopcart=debug"));

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::{Address, ShippingRates, ValidationError};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn roissy_config() -> PricingConfig {
        PricingConfig {
            origin: Address::new("22 avenue du Bois", "Roissy-en-Brie", "France"),
            rates: ShippingRates::default(),
        }
    }

    #[test]
    fn test_parse_args() {
        let parsed = QuoteArgs::parse(args(&["--config", "p.toml", "--cart", "c.json"])).unwrap();
        assert_eq!(parsed.config_path, Some(PathBuf::from("p.toml")));
        assert_eq!(parsed.cart_path, Some(PathBuf::from("c.json")));
        assert!(!parsed.help);

        assert!(QuoteArgs::parse(args(&["-h"])).unwrap().help);
        assert_eq!(QuoteArgs::parse(args(&[])).unwrap(), QuoteArgs::default());
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(matches!(
            QuoteArgs::parse(args(&["--cart"])),
            Err(AppError::Usage(_))
        ));
        assert!(matches!(
            QuoteArgs::parse(args(&["--verbose"])),
            Err(AppError::Usage(_))
        ));
    }

    #[test]
    fn test_quote_premium_same_city() {
        let json = r#"{
            "id": "cart-1",
            "customerType": "premium",
            "shippingMethod": "expedited",
            "shippingAddress": {"street": "22 avenue du Bois", "city": "Roissy-en-Brie", "country": "France"},
            "items": [{"quantity": 2}, {"quantity": 3}]
        }"#;

        let totals = quote(&roissy_config(), json).unwrap();
        assert_eq!(totals.shipping_cost.cents(), 500);
        assert_eq!(totals.customer_discount, 10);
        assert_eq!(totals.total.cents(), 450);
    }

    #[test]
    fn test_quote_rejects_incomplete_address() {
        let json = r#"{
            "shippingAddress": {"street": "1 Main St", "country": "USA"},
            "items": [{"price": 100, "quantity": 1}]
        }"#;

        let err = quote(&roissy_config(), json).unwrap_err();
        assert!(matches!(
            err,
            AppError::Rejected(ValidationError::Required { ref field }) if field == "city"
        ));
    }

    #[test]
    fn test_quote_rejects_negative_price() {
        let json = r#"{
            "shippingAddress": {"street": "1 Main St", "city": "Boston", "country": "USA"},
            "items": [{"productId": "refund", "price": -100, "quantity": 1}]
        }"#;

        assert!(matches!(
            quote(&roissy_config(), json),
            Err(AppError::Rejected(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_quote_rejects_malformed_json() {
        assert!(matches!(
            quote(&roissy_config(), "{not json"),
            Err(AppError::Json(_))
        ));
    }

    #[test]
    fn test_quote_rejects_bad_rates() {
        let mut config = roissy_config();
        config.rates.same_city = shopcart_core::Money::zero();
        let json = r#"{"shippingAddress": {"street": "s", "city": "c", "country": "k"}}"#;

        assert!(matches!(quote(&config, json), Err(AppError::Core(_))));
    }
}
