use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::Deserialize;

use super::Pizza;
use crate::error::PatternError;
use crate::money::Price;

/// A fixed label and surcharge that a [`ToppingDecorator`] adds.
pub trait Topping: 'static {
    const LABEL: &'static str;
    const PRICE: Price;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cheese;

impl Topping for Cheese {
    const LABEL: &'static str = "Cheese";
    const PRICE: Price = Price::from_cents(200);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Olives;

impl Topping for Olives {
    const LABEL: &'static str = "Olives";
    const PRICE: Price = Price::from_cents(150);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pepperoni;

impl Topping for Pepperoni {
    const LABEL: &'static str = "Pepperoni";
    const PRICE: Price = Price::from_cents(250);
}

/// Wraps exactly one pizza and adds topping `T` to it.
pub struct ToppingDecorator<T: Topping> {
    inner: Box<dyn Pizza>,
    _topping: PhantomData<T>,
}

pub type CheeseDecorator = ToppingDecorator<Cheese>;
pub type OlivesDecorator = ToppingDecorator<Olives>;
pub type PepperoniDecorator = ToppingDecorator<Pepperoni>;

impl<T: Topping> ToppingDecorator<T> {
    pub fn new(inner: Box<dyn Pizza>) -> Self {
        tracing::debug!(topping = T::LABEL, "wrapping pizza");
        ToppingDecorator {
            inner,
            _topping: PhantomData,
        }
    }

    pub fn inner(&self) -> &dyn Pizza {
        self.inner.as_ref()
    }

    pub fn into_inner(self) -> Box<dyn Pizza> {
        self.inner
    }
}

impl<T: Topping> Pizza for ToppingDecorator<T> {
    fn description(&self) -> String {
        format!("{}, {}", self.inner.description(), T::LABEL)
    }

    fn cost(&self) -> Price {
        self.inner.cost() + T::PRICE
    }
}

impl<T: Topping> fmt::Debug for ToppingDecorator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToppingDecorator")
            .field("topping", &T::LABEL)
            .field("inner", &self.inner.description())
            .finish()
    }
}

/// Fluent wrapping: `BasePizza.topped::<Cheese>().topped::<Olives>()`.
pub trait PizzaExt: Pizza + Sized + 'static {
    fn topped<T: Topping>(self) -> ToppingDecorator<T> {
        ToppingDecorator::new(Box::new(self))
    }
}

impl<P: Pizza + Sized + 'static> PizzaExt for P {}

/// Toppings chosen at runtime, e.g. from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ToppingKind {
    Cheese,
    Olives,
    Pepperoni,
}

impl ToppingKind {
    pub const ALL: [ToppingKind; 3] = [
        ToppingKind::Cheese,
        ToppingKind::Olives,
        ToppingKind::Pepperoni,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToppingKind::Cheese => Cheese::LABEL,
            ToppingKind::Olives => Olives::LABEL,
            ToppingKind::Pepperoni => Pepperoni::LABEL,
        }
    }

    pub fn price(self) -> Price {
        match self {
            ToppingKind::Cheese => Cheese::PRICE,
            ToppingKind::Olives => Olives::PRICE,
            ToppingKind::Pepperoni => Pepperoni::PRICE,
        }
    }

    pub fn wrap(self, pizza: Box<dyn Pizza>) -> Box<dyn Pizza> {
        match self {
            ToppingKind::Cheese => Box::new(CheeseDecorator::new(pizza)),
            ToppingKind::Olives => Box::new(OlivesDecorator::new(pizza)),
            ToppingKind::Pepperoni => Box::new(PepperoniDecorator::new(pizza)),
        }
    }
}

impl fmt::Display for ToppingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToppingKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cheese" => Ok(ToppingKind::Cheese),
            "olives" => Ok(ToppingKind::Olives),
            "pepperoni" => Ok(ToppingKind::Pepperoni),
            _ => Err(PatternError::UnknownTopping(s.to_string())),
        }
    }
}

impl TryFrom<String> for ToppingKind {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::BasePizza;

    #[test]
    fn test_single_cheese() {
        let pizza = CheeseDecorator::new(Box::new(BasePizza));
        assert_eq!(pizza.description(), "Plain Pizza, Cheese");
        assert_eq!(pizza.cost(), Price::dollars(7));
    }

    #[test]
    fn test_full_chain_in_order() {
        let pizza = BasePizza
            .topped::<Cheese>()
            .topped::<Olives>()
            .topped::<Pepperoni>();
        assert_eq!(pizza.description(), "Plain Pizza, Cheese, Olives, Pepperoni");
        assert_eq!(pizza.cost(), Price::dollars(11));
    }

    #[test]
    fn test_reverse_order_same_cost() {
        let pizza = BasePizza
            .topped::<Pepperoni>()
            .topped::<Olives>()
            .topped::<Cheese>();
        assert_eq!(pizza.description(), "Plain Pizza, Pepperoni, Olives, Cheese");
        assert_eq!(pizza.cost(), Price::dollars(11));
    }

    #[test]
    fn test_double_cheese_adds_twice() {
        let pizza = BasePizza.topped::<Cheese>().topped::<Cheese>();
        assert_eq!(pizza.description(), "Plain Pizza, Cheese, Cheese");
        assert_eq!(pizza.cost(), Price::dollars(9));
    }

    #[test]
    fn test_into_inner_unwraps_one_layer() {
        let pizza = BasePizza.topped::<Cheese>().topped::<Olives>();
        assert_eq!(pizza.inner().description(), "Plain Pizza, Cheese");
        let inner = pizza.into_inner();
        assert_eq!(inner.cost(), Price::dollars(7));
    }

    #[test]
    fn test_kind_wrap_matches_static_decorator() {
        for kind in ToppingKind::ALL {
            let pizza = kind.wrap(Box::new(BasePizza));
            assert_eq!(pizza.description(), format!("Plain Pizza, {}", kind.label()));
            assert_eq!(pizza.cost(), BasePizza::PRICE + kind.price());
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("CHEESE".parse::<ToppingKind>().unwrap(), ToppingKind::Cheese);
        assert_eq!(" Olives ".parse::<ToppingKind>().unwrap(), ToppingKind::Olives);
        assert!(matches!(
            "olive".parse::<ToppingKind>(),
            Err(PatternError::UnknownTopping(name)) if name == "olive"
        ));
        assert!(matches!(
            "pineapple".parse::<ToppingKind>(),
            Err(PatternError::UnknownTopping(name)) if name == "pineapple"
        ));
    }
}
