//! Rendering quantities and descriptors as text.
//!
//! A quantity formats as its value followed by one token per nonzero
//! exponent component, e.g. `7.142857 m A^-1`. An exponent of 1 omits the
//! caret suffix. The scale factor is not rendered; a kilometer-valued
//! quantity prints its payload against the `m` symbol.

use std::fmt::{self, Display, Formatter};

use crate::dimension::BaseDimension;
use crate::quantity::Quantity;
use crate::unit::UnitDescriptor;

/// Base dimension symbols, in exponent vector index order. Mass renders as
/// the gram symbol.
const SYMBOLS: [&str; BaseDimension::COUNT] = ["m", "s", "mol", "A", "K", "cd", "g"];

impl Display for UnitDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.exponents().is_dimensionless() {
            return write!(f, "1");
        }

        let mut first = true;
        for (symbol, exponent) in SYMBOLS.iter().zip(self.exponents().components()) {
            if exponent == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}", symbol)?;
            if exponent != 1 {
                write!(f, "^{}", exponent)?;
            }
        }

        Ok(())
    }
}

impl<T: Display> Display for Quantity<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if !self.descriptor.exponents().is_dimensionless() {
            write!(f, " {}", self.descriptor)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::catalog::{ampere, meter, newton, second, NEWTON};
    use crate::unit::UnitDescriptor;

    #[test]
    fn format_meter_per_ampere() {
        let quantity = meter(25.0_f32) / ampere(3.5_f32);
        assert_eq!(quantity.to_string(), "7.142857 m A^-1");
    }

    #[test]
    fn exponent_one_omits_the_caret() {
        assert_eq!(meter(500.0).to_string(), "500 m");
    }

    #[test]
    fn compound_units_print_one_token_per_component() {
        assert_eq!(NEWTON.to_string(), "m s^-2 g");
        assert_eq!(newton(2.5).to_string(), "2.5 m s^-2 g");
    }

    #[test]
    fn dimensionless_prints_the_bare_value() {
        let ratio = meter(10.0) / meter(4.0);
        assert_eq!(ratio.to_string(), "2.5");
        assert_eq!(UnitDescriptor::NUMBER.to_string(), "1");
    }

    #[test]
    fn squared_time_in_the_denominator() {
        let acceleration = meter(9.0) / second(1.0) / second(2.0);
        assert_eq!(acceleration.to_string(), "4.5 m s^-2");
    }
}
