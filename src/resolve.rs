//! Maps computed unit descriptors back onto catalog units.
//!
//! Arithmetic on quantities produces descriptors structurally; this module
//! answers the question "is that descriptor a unit we have a name for?". The
//! lookup table is built once from [`NAMED_UNITS`] and never changes.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::catalog::NAMED_UNITS;
use crate::dimension::Exponents;
use crate::unit::UnitDescriptor;

/// A catalog entry: a unit descriptor with a dedicated name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NamedUnit {
    /// The unit's name, e.g. `"newton"`.
    pub name: &'static str,

    /// The unit's descriptor. Always equal to the descriptor it is looked
    /// up under.
    pub descriptor: UnitDescriptor,
}

/// The outcome of resolving a descriptor against the catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolved {
    /// The dimensionless, scale-1 descriptor: a plain number rather than a
    /// unit of anything.
    Number,

    /// The descriptor is a catalog unit.
    Named(&'static NamedUnit),

    /// No catalog unit matches. The descriptor is still perfectly usable
    /// structurally; it just has no dedicated name.
    Anonymous(UnitDescriptor),
}

impl Resolved {
    /// The catalog name, if this resolved to a named unit.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Resolved::Named(unit) => Some(unit.name),
            _ => None,
        }
    }
}

/// Lookup table from full descriptor (exponent vector and scale) to catalog
/// entry. Keyed on the scale's bit pattern, which is deterministic because
/// every catalog scale is composed with the same const arithmetic that
/// quantity operators use at call sites.
static REGISTRY: Lazy<HashMap<(Exponents, u64), &'static NamedUnit>> = Lazy::new(|| {
    let mut registry = HashMap::with_capacity(NAMED_UNITS.len());
    for unit in NAMED_UNITS {
        // first registration wins
        registry.entry(unit.descriptor.key()).or_insert(unit);
    }
    registry
});

/// Resolves a descriptor to the most specific identity the catalog knows:
/// the bare-number case, a named unit, or an anonymous structural fallback.
/// Total — every descriptor resolves to something.
///
/// The lookup key is the full descriptor. Two units of the same dimension
/// but different scale (meter and kilometer, second and minute) resolve to
/// different entries.
pub fn resolve(descriptor: UnitDescriptor) -> Resolved {
    if descriptor.exponents().is_dimensionless() && descriptor.scale() == 1.0 {
        return Resolved::Number;
    }
    match REGISTRY.get(&descriptor.key()) {
        Some(unit) => Resolved::Named(unit),
        None => Resolved::Anonymous(descriptor),
    }
}
