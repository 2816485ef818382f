//! Factory Method pattern: an extension point, not a finished pizzeria.
//!
//! [`Pizza`] names the preparation steps and [`PizzaFactory`] names the
//! factory method. No concrete pizza ships with the crate; implementors
//! decide what each step does and which pizza the factory creates.

/// The steps every factory-made pizza goes through.
pub trait Pizza {
    fn prepare(&self);
    fn bake(&self);
    fn cut(&self);
    fn pack(&self);
}

/// A store whose subclass-equivalent decides which [`Pizza`] to create.
pub trait PizzaFactory {
    /// The factory method.
    fn create_pizza(&self) -> Box<dyn Pizza>;

    /// Creates a pizza and runs prepare, bake, cut, pack in that order.
    fn order_pizza(&self) -> Box<dyn Pizza> {
        let pizza = self.create_pizza();
        tracing::debug!("running pizza preparation steps");
        pizza.prepare();
        pizza.bake();
        pizza.cut();
        pizza.pack();
        pizza
    }
}
