//! Dimensioned values and their arithmetic.

use std::ops::{Div, Mul};

use crate::resolve::{resolve, Resolved};
use crate::scalar::Scalar;
use crate::unit::{DimensionError, UnitDescriptor};

/// A numeric value tagged with the unit it is measured in.
///
/// Multiplication and division are total and implemented as the `*` and `/`
/// operators; the result's descriptor is derived from the operands'
/// descriptors. Addition, subtraction and conversion are only defined
/// between quantities of the same dimension, so they are the fallible named
/// methods [`add`], [`sub`] and [`convert`] — a mismatch is a
/// [`DimensionError`], never a panic. In all three, the left operand's unit
/// is authoritative: the right operand is converted into it and the result
/// keeps the left descriptor.
///
/// A quantity is a plain value type with no shared state; it is as cheap to
/// copy as its payload.
///
/// [`add`]: Quantity::add
/// [`sub`]: Quantity::sub
/// [`convert`]: Quantity::convert
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantity<T = f64> {
    pub(crate) descriptor: UnitDescriptor,
    pub(crate) value: T,
}

impl<T: Scalar> Quantity<T> {
    /// Creates a quantity of `value` units of `descriptor`.
    pub fn new(value: T, descriptor: UnitDescriptor) -> Self {
        Self { descriptor, value }
    }

    /// The bare numeric payload, with the unit tag discarded.
    ///
    /// This is the only way out of the unit system, and it is deliberately
    /// explicit: nothing in the crate converts a quantity to a number
    /// implicitly.
    pub fn value(self) -> T {
        self.value
    }

    /// The unit this quantity is measured in.
    pub fn descriptor(self) -> UnitDescriptor {
        self.descriptor
    }

    /// Re-expresses this quantity in the target unit. Returns [`Err`] if the
    /// target measures a different dimension.
    ///
    /// ```
    /// use si_units::{minute, SECOND};
    ///
    /// let seconds = minute(2.0).convert(SECOND).unwrap();
    /// assert_eq!(seconds.value(), 120.0);
    /// ```
    pub fn convert(self, target: UnitDescriptor) -> Result<Self, DimensionError> {
        let factor = self.descriptor.conversion_factor(target)?;
        Ok(Self {
            descriptor: target,
            value: self.value * T::from_factor(factor),
        })
    }

    /// Adds a quantity of the same dimension. The result keeps `self`'s
    /// unit; `other` is converted into it first.
    pub fn add(self, other: Self) -> Result<Self, DimensionError> {
        let factor = other.descriptor.conversion_factor(self.descriptor)?;
        Ok(Self {
            descriptor: self.descriptor,
            value: self.value + other.value * T::from_factor(factor),
        })
    }

    /// Subtracts a quantity of the same dimension. The result keeps `self`'s
    /// unit; `other` is converted into it first.
    pub fn sub(self, other: Self) -> Result<Self, DimensionError> {
        let factor = other.descriptor.conversion_factor(self.descriptor)?;
        Ok(Self {
            descriptor: self.descriptor,
            value: self.value - other.value * T::from_factor(factor),
        })
    }

    /// Reinterprets this quantity in a unit `factor` times larger, keeping
    /// the physical amount unchanged: the descriptor's scale is multiplied
    /// by `factor` and the payload divided by it. This is the engine behind
    /// the metric prefix helpers.
    pub fn rescale(self, factor: f64) -> Self {
        Self {
            descriptor: self.descriptor.rescale(factor),
            value: self.value / T::from_factor(factor),
        }
    }

    /// The payload as a plain number, if this quantity is dimensionless.
    /// Any residual scale is folded in, so a minute divided by a second
    /// yields `Some(60.0)`. Returns [`None`] for dimensioned quantities.
    pub fn dimensionless(self) -> Option<T> {
        if self.descriptor.exponents().is_dimensionless() {
            Some(self.value * T::from_factor(self.descriptor.scale()))
        } else {
            None
        }
    }

    /// Looks this quantity's unit up in the catalog. See [`resolve`].
    pub fn resolve(self) -> Resolved {
        resolve(self.descriptor)
    }
}

impl<T: Scalar> Mul for Quantity<T> {
    type Output = Quantity<T>;

    fn mul(self, other: Quantity<T>) -> Quantity<T> {
        Quantity {
            descriptor: self.descriptor.multiply(other.descriptor),
            value: self.value * other.value,
        }
    }
}

impl<T: Scalar> Div for Quantity<T> {
    type Output = Quantity<T>;

    fn div(self, other: Quantity<T>) -> Quantity<T> {
        Quantity {
            descriptor: self.descriptor.divide(other.descriptor),
            value: self.value / other.value,
        }
    }
}

impl<T: Scalar> Mul<T> for Quantity<T> {
    type Output = Quantity<T>;

    fn mul(self, factor: T) -> Quantity<T> {
        Quantity {
            descriptor: self.descriptor,
            value: self.value * factor,
        }
    }
}

impl<T: Scalar> Div<T> for Quantity<T> {
    type Output = Quantity<T>;

    fn div(self, divisor: T) -> Quantity<T> {
        Quantity {
            descriptor: self.descriptor,
            value: self.value / divisor,
        }
    }
}

// `impl<T: Scalar> Mul<Quantity<T>> for T` falls foul of the orphan rules,
// so the scalar-on-the-left operators are spelled out per payload type.
macro_rules! scalar_lhs_ops {
    ($($float:ty),* $(,)?) => {
        $(
            impl Mul<Quantity<$float>> for $float {
                type Output = Quantity<$float>;

                fn mul(self, quantity: Quantity<$float>) -> Quantity<$float> {
                    quantity * self
                }
            }

            /// Scalar divided by quantity: the reciprocal, with the
            /// quantity's exponent vector inverted.
            impl Div<Quantity<$float>> for $float {
                type Output = Quantity<$float>;

                fn div(self, quantity: Quantity<$float>) -> Quantity<$float> {
                    Quantity {
                        descriptor: quantity.descriptor.invert(),
                        value: self / quantity.value,
                    }
                }
            }
        )*
    };
}

scalar_lhs_ops!(f32, f64);
