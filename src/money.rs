use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Money amount in whole cents.
///
/// Integer cents keep sums exact, so adding toppings in any order always
/// lands on the same total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u32);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u32) -> Self {
        Price(cents)
    }

    pub const fn dollars(dollars: u32) -> Self {
        match dollars.checked_mul(100) {
            Some(cents) => Price(cents),
            None => panic!("price overflow"),
        }
    }

    pub const fn cents(self) -> u32 {
        self.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.checked_add(rhs.0).expect("price overflow"))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
