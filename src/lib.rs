#![doc = include_str!("../README.md")]
//!
//! [`assert_float_eq`]: https://crates.io/crates/assert_float_eq
//! [`approx`]: https://crates.io/crates/approx

pub mod catalog;
pub mod dimension;
mod format;
pub mod literals;
pub mod quantity;
pub mod resolve;
pub mod scalar;
pub mod unit;

pub use catalog::*;
pub use dimension::{BaseDimension, Exponents};
pub use literals::{kilo, mega, milli, SuffixLiteral};
pub use quantity::Quantity;
pub use resolve::{resolve, NamedUnit, Resolved};
pub use scalar::Scalar;
pub use unit::{DimensionError, UnitDescriptor};
