//! # Classic Object-Oriented Design Patterns in Rust
//!
//! This crate demonstrates three patterns with traits in place of class
//! hierarchies:
//!
//! ## Strategy
//! - A [`strategy::Vehicle`] owns one boxed [`strategy::DriveStrategy`]
//! - Behavior is picked at construction, not by branching on vehicle type
//!
//! ## Decorator
//! - [`decorator::BasePizza`] wrapped by [`decorator::ToppingDecorator`] layers
//! - Each layer delegates inward and adds a fixed label and price
//!
//! ## Factory Method
//! - [`factory_method::Pizza`] lists the preparation steps
//! - [`factory_method::PizzaFactory`] leaves pizza creation to implementors
//!
//! Run the demos with: `cargo run --bin strategy_vehicles` or
//! `cargo run --bin pizza_shop`

pub mod config;
pub mod decorator;
pub mod error;
pub mod factory_method;
pub mod money;
pub mod strategy;

pub use error::{PatternError, Result};
pub use money::Price;
