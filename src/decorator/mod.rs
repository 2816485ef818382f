//! Decorator pattern: toppings wrap a pizza and extend its description and cost.
//!
//! Each [`ToppingDecorator`] exclusively owns the pizza it wraps, so a built
//! pizza is a singly linked chain ending in a [`BasePizza`]. Reads walk the
//! chain inward and add each layer's contribution on the way out.

mod order;
mod pizza;
mod topping;

pub use order::{build_order, receipt_line, Receipt};
pub use pizza::{BasePizza, Pizza};
pub use topping::{
    Cheese, CheeseDecorator, Olives, OlivesDecorator, Pepperoni, PepperoniDecorator, PizzaExt,
    Topping, ToppingDecorator, ToppingKind,
};
