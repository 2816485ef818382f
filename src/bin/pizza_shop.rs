//! Decorator pattern demo: a plain pizza gains toppings one layer at a time.
//!
//! Run with: cargo run --bin pizza_shop

use colored::Colorize;
use design_patterns::config::DemoConfig;
use design_patterns::decorator::build_order;
use tracing::Level;

fn main() -> design_patterns::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::embedded()?;

    println!("{}", "=== Decorator Pattern: Pizza Shop ===".bold());
    let receipt = build_order(&config.pizza.toppings);
    for line in &receipt.lines {
        println!("{}", line);
    }

    Ok(())
}
