//! Strategy pattern demo: each vehicle drives with the strategy it was built with.
//!
//! Run with: cargo run --bin strategy_vehicles

use colored::Colorize;
use design_patterns::config::DemoConfig;
use design_patterns::strategy::Vehicle;
use tracing::Level;

fn main() -> design_patterns::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::embedded()?;

    println!("{}", "=== Strategy Pattern: Vehicles ===".bold());
    for kind in config.fleet.vehicles {
        print!("{:<10} ", format!("{}:", kind).cyan());
        Vehicle::from_kind(kind).drive();
    }

    Ok(())
}
