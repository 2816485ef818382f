use crate::money::Price;

/// Anything that can be sold as a pizza.
pub trait Pizza {
    fn description(&self) -> String;
    fn cost(&self) -> Price;
}

impl<P: Pizza + ?Sized> Pizza for Box<P> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Price {
        (**self).cost()
    }
}

/// The undecorated pizza every chain ends in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasePizza;

impl BasePizza {
    pub const DESCRIPTION: &'static str = "Plain Pizza";
    pub const PRICE: Price = Price::dollars(5);
}

impl Pizza for BasePizza {
    fn description(&self) -> String {
        Self::DESCRIPTION.to_string()
    }

    fn cost(&self) -> Price {
        Self::PRICE
    }
}
