//! Unit descriptors: an exponent vector paired with a scale factor.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::dimension::{BaseDimension, Exponents};

/// Fully characterizes a unit: the dimension it measures and its scale
/// relative to the coherent SI base unit of that dimension.
///
/// The scale factor is the value to multiply a quantity in this unit by to
/// obtain the equivalent quantity in the coherent base unit. The kilometer
/// has scale `1000.0` against the meter, and the gram has scale `0.001`
/// against the kilogram.
///
/// Descriptors are pure values: every operation returns a new descriptor,
/// and all of them are `const fn`, so derived descriptors (newton, volt, …)
/// are computed entirely at compile time. Two descriptors compare equal only
/// when both the exponent vector and the scale match; the catalog therefore
/// treats meter and kilometer as distinct units of the same dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitDescriptor {
    exponents: Exponents,
    scale: f64,
}

impl UnitDescriptor {
    /// The descriptor of plain, unscaled numbers.
    pub const NUMBER: UnitDescriptor = UnitDescriptor {
        exponents: Exponents::DIMENSIONLESS,
        scale: 1.0,
    };

    /// Creates a descriptor from an exponent vector and a scale factor.
    pub const fn new(exponents: Exponents, scale: f64) -> Self {
        Self { exponents, scale }
    }

    /// The coherent (scale 1) descriptor of a single base dimension.
    pub const fn base(dimension: BaseDimension) -> Self {
        Self {
            exponents: Exponents::base(dimension),
            scale: 1.0,
        }
    }

    /// This unit's exponent vector.
    pub const fn exponents(self) -> Exponents {
        self.exponents
    }

    /// This unit's scale factor relative to the coherent base unit of its
    /// dimension.
    pub const fn scale(self) -> f64 {
        self.scale
    }

    /// The descriptor of a product of two units: exponent vectors add,
    /// scales multiply.
    pub const fn multiply(self, other: Self) -> Self {
        Self {
            exponents: self.exponents.add(other.exponents),
            scale: self.scale * other.scale,
        }
    }

    /// The descriptor of a quotient of two units: exponent vectors
    /// subtract, scales divide.
    pub const fn divide(self, other: Self) -> Self {
        Self {
            exponents: self.exponents.sub(other.exponents),
            scale: self.scale / other.scale,
        }
    }

    /// The descriptor of this unit's reciprocal. The exponent vector is
    /// negated; the scale carries over unchanged.
    pub const fn invert(self) -> Self {
        Self {
            exponents: self.exponents.neg(),
            scale: self.scale,
        }
    }

    /// Multiplies the scale factor without touching the dimension. This is
    /// how metric prefixes are built: kilo rescales by `1e3`, milli by
    /// `1e-3`.
    pub const fn rescale(self, factor: f64) -> Self {
        Self {
            exponents: self.exponents,
            scale: self.scale * factor,
        }
    }

    /// Raises this unit to an integer power, e.g. `METER.pow(2)` is the
    /// square meter.
    pub const fn pow(self, exponent: i32) -> Self {
        Self {
            exponents: self.exponents.pow(exponent),
            scale: powi(self.scale, exponent),
        }
    }

    /// Whether two descriptors measure the same dimension, i.e. their
    /// exponent vectors are component-wise equal. Compatible units may still
    /// differ in scale; that difference is what [`conversion_factor`] bridges.
    ///
    /// [`conversion_factor`]: UnitDescriptor::conversion_factor
    pub const fn is_compatible(self, other: Self) -> bool {
        let a = self.exponents.components();
        let b = other.exponents.components();
        let mut i = 0;
        while i < a.len() {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// The factor to multiply a value in this unit by to express it in the
    /// target unit. Only defined when both units measure the same dimension;
    /// anything else is a [`DimensionError`].
    pub fn conversion_factor(self, target: Self) -> Result<f64, DimensionError> {
        if self.is_compatible(target) {
            Ok(self.scale / target.scale)
        } else {
            Err(DimensionError {
                from: self,
                to: target,
            })
        }
    }

    /// The registry key identifying this exact descriptor: the exponent
    /// vector plus the scale's bit pattern.
    pub(crate) fn key(self) -> (Exponents, u64) {
        (self.exponents, self.scale.to_bits())
    }
}

/// `base` raised to an integer power, usable in const context.
const fn powi(base: f64, exponent: i32) -> f64 {
    let n = exponent.unsigned_abs();
    let mut out = 1.0;
    let mut i = 0;
    while i < n {
        out *= base;
        i += 1;
    }
    if exponent < 0 {
        1.0 / out
    } else {
        out
    }
}

/// Error returned when two units of different dimensions are added,
/// subtracted, or converted between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionError {
    /// The unit of the value being converted.
    pub(crate) from: UnitDescriptor,

    /// The target unit.
    pub(crate) to: UnitDescriptor,
}

impl Display for DimensionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "cannot convert from `{}` to `{}`", self.from, self.to)
    }
}

impl Error for DimensionError {}

#[cfg(test)]
mod tests {
    use crate::catalog::{KILOMETER, METER, MINUTE, NEWTON, SECOND};

    #[test]
    fn multiply_adds_exponents_and_multiplies_scales() {
        let product = KILOMETER.multiply(SECOND);
        assert_eq!(product.exponents().components(), [1, 1, 0, 0, 0, 0, 0]);
        assert_eq!(product.scale(), 1000.0);
    }

    #[test]
    fn divide_subtracts_exponents_and_divides_scales() {
        let velocity = KILOMETER.divide(MINUTE);
        assert_eq!(velocity.exponents().components(), [1, -1, 0, 0, 0, 0, 0]);
        assert_eq!(velocity.scale(), 1000.0 / 60.0);
    }

    #[test]
    fn invert_negates_exponents_only() {
        let inverted = MINUTE.invert();
        assert_eq!(inverted.exponents().components(), [0, -1, 0, 0, 0, 0, 0]);
        assert_eq!(inverted.scale(), MINUTE.scale());
    }

    #[test]
    fn rescale_leaves_the_dimension_alone() {
        let km = METER.rescale(1e3);
        assert_eq!(km, KILOMETER);
        assert!(km.is_compatible(METER));
    }

    #[test]
    fn pow_raises_scale_too() {
        let square_km = KILOMETER.pow(2);
        assert_eq!(square_km.exponents().components(), [2, 0, 0, 0, 0, 0, 0]);
        assert_eq!(square_km.scale(), 1e6);
        assert_eq!(KILOMETER.pow(-1).scale(), 1e-3);
    }

    #[test]
    fn conversion_factor_between_compatible_units() {
        assert_eq!(MINUTE.conversion_factor(SECOND).unwrap(), 60.0);
        assert_eq!(SECOND.conversion_factor(MINUTE).unwrap(), 1.0 / 60.0);
        assert_eq!(METER.conversion_factor(METER).unwrap(), 1.0);
    }

    #[test]
    fn conversion_factor_rejects_different_dimensions() {
        let err = METER.conversion_factor(SECOND).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert from `m` to `s`");
        assert!(NEWTON.conversion_factor(METER).is_err());
    }

    #[test]
    fn equal_dimension_different_scale_is_a_different_unit() {
        assert_ne!(METER, KILOMETER);
        assert!(METER.is_compatible(KILOMETER));
        assert_ne!(METER.key(), KILOMETER.key());
    }
}
