use super::{BasePizza, Pizza, ToppingKind};

/// One console line: `<description> -> Cost: $<cost>`.
pub fn receipt_line(pizza: &dyn Pizza) -> String {
    format!("{} -> Cost: {}", pizza.description(), pizza.cost())
}

/// The finished pizza plus a line for every state it passed through.
pub struct Receipt {
    pub pizza: Box<dyn Pizza>,
    pub lines: Vec<String>,
}

/// Starts from a plain pizza and applies `toppings` in order.
pub fn build_order(toppings: &[ToppingKind]) -> Receipt {
    let mut pizza: Box<dyn Pizza> = Box::new(BasePizza);
    let mut lines = Vec::with_capacity(toppings.len() + 1);
    lines.push(receipt_line(pizza.as_ref()));

    for &topping in toppings {
        pizza = topping.wrap(pizza);
        lines.push(receipt_line(pizza.as_ref()));
    }

    Receipt { pizza, lines }
}
