//! # shopcart-quote entry point
//!
//! ## Usage
//! ```bash
//! # Quote a cart file with the default config location
//! cargo run -p shopcart-cli --bin shopcart-quote -- --cart ./cart.json
//!
//! # Explicit config, cart on stdin
//! cat cart.json | cargo run -p shopcart-cli --bin shopcart-quote -- --config ./pricing.toml
//! ```

fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(err) = shopcart_cli::run(std::env::args().skip(1)) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}
