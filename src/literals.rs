//! Metric prefix helpers and literal-style constructors.
//!
//! Rust has no user-defined literal suffixes, so `5.0_m` is rendered as the
//! [`SuffixLiteral`] extension trait: `5.0.meters()`. The prefix helpers
//! reinterpret an existing quantity under a prefixed unit without changing
//! the physical amount it measures.

use crate::catalog;
use crate::quantity::Quantity;
use crate::scalar::Scalar;

/// Reinterprets a quantity under the kilo-prefixed unit: the descriptor's
/// scale grows a thousandfold and the payload shrinks to match.
///
/// ```
/// use si_units::{kilo, meter};
///
/// let length = kilo(meter(500.0));
/// assert_eq!(length.value(), 0.5);
/// ```
pub fn kilo<T: Scalar>(quantity: Quantity<T>) -> Quantity<T> {
    quantity.rescale(1e3)
}

/// Reinterprets a quantity under the mega-prefixed unit.
pub fn mega<T: Scalar>(quantity: Quantity<T>) -> Quantity<T> {
    quantity.rescale(1e6)
}

/// Reinterprets a quantity under the milli-prefixed unit: the payload grows
/// a thousandfold.
pub fn milli<T: Scalar>(quantity: Quantity<T>) -> Quantity<T> {
    quantity.rescale(1e-3)
}

/// Suffix-style constructors for the base units, so `2.5.meters()` reads
/// like the literal `2.5 m`. Implemented for every [`Scalar`].
pub trait SuffixLiteral: Scalar {
    fn meters(self) -> Quantity<Self> {
        catalog::meter(self)
    }

    fn seconds(self) -> Quantity<Self> {
        catalog::second(self)
    }

    fn moles(self) -> Quantity<Self> {
        catalog::mole(self)
    }

    fn amperes(self) -> Quantity<Self> {
        catalog::ampere(self)
    }

    fn kelvins(self) -> Quantity<Self> {
        catalog::kelvin(self)
    }

    fn candelas(self) -> Quantity<Self> {
        catalog::candela(self)
    }

    fn grams(self) -> Quantity<Self> {
        catalog::gram(self)
    }

    fn kilograms(self) -> Quantity<Self> {
        catalog::kilogram(self)
    }

    fn tonnes(self) -> Quantity<Self> {
        catalog::tonne(self)
    }
}

impl<T: Scalar> SuffixLiteral for T {}
