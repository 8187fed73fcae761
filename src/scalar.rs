//! Provides the [`Scalar`] trait, the numeric payload of a [`Quantity`].
//!
//! [`Quantity`]: crate::quantity::Quantity

use std::ops::{Add, Div, Mul, Sub};

/// A numeric type that can be the payload of a [`Quantity`].
///
/// The library never intercepts numeric edge cases: dividing by a
/// zero-valued quantity, overflow, and the like produce whatever the payload
/// type produces (infinity or NaN for the floating-point impls here).
///
/// [`Quantity`]: crate::quantity::Quantity
pub trait Scalar:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Narrows a unit conversion factor into this type. Conversion factors
    /// are derived from descriptor scales, which are always `f64`.
    fn from_factor(factor: f64) -> Self;
}

macro_rules! scalar_impl {
    ($($float:ty),* $(,)?) => {
        $(
            impl Scalar for $float {
                fn from_factor(factor: f64) -> Self {
                    factor as $float
                }
            }
        )*
    };
}

scalar_impl!(f32, f64);
