use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Monetary amount, in the currency of the invoice.
///
/// The currency symbol is a concern of the report, so it is not printed here.
#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::Sum,
)]
pub struct Cost(pub f64);

ordered_float!(Cost);

impl Cost {
    pub const ZERO: Self = Self(0.0);
    pub const ONE_CENT: Self = Self(0.01);
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}¤", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cost(615.004).to_string(), "615.00");
        assert_eq!(Cost(9.999).to_string(), "10.00");
    }

    #[test]
    fn test_sum_empty() {
        assert_eq!(std::iter::empty::<Cost>().sum::<Cost>(), Cost::ZERO);
    }
}
