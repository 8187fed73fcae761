//! The named unit catalog: every unit the resolver can put a name to.
//!
//! Each entry declares a `const` descriptor and a constructor function of
//! the same name in snake case, e.g. [`METER`] and [`meter`]. Derived
//! descriptors are never written out as raw exponent vectors; they are
//! composed from already-declared units with the descriptor arithmetic, so
//! the catalog cannot drift out of internal consistency.

use crate::dimension::BaseDimension;
use crate::quantity::Quantity;
use crate::resolve::NamedUnit;
use crate::scalar::Scalar;
use crate::unit::UnitDescriptor;

/// Declares the catalog: a `pub const` descriptor, a generic constructor
/// function, and a [`NAMED_UNITS`] row per entry.
macro_rules! catalog {
    ($(
        $(#[$attr:meta])*
        $name:literal, $constant:ident, $constructor:ident => $descriptor:expr;
    )*) => {
        $(
            $(#[$attr])*
            pub const $constant: UnitDescriptor = $descriptor;
        )*

        $(
            $(#[$attr])*
            pub fn $constructor<T: Scalar>(value: T) -> Quantity<T> {
                Quantity::new(value, $constant)
            }
        )*

        /// Every catalog unit, in declaration order. When two entries share
        /// a descriptor, the earlier one wins resolution.
        pub static NAMED_UNITS: &[NamedUnit] = &[
            $(
                NamedUnit {
                    name: $name,
                    descriptor: $constant,
                },
            )*
        ];
    };
}

catalog! {
    // base units
    "meter", METER, meter => UnitDescriptor::base(BaseDimension::Length);
    "second", SECOND, second => UnitDescriptor::base(BaseDimension::Time);
    "mole", MOLE, mole => UnitDescriptor::base(BaseDimension::AmountOfSubstance);
    "ampere", AMPERE, ampere => UnitDescriptor::base(BaseDimension::ElectricCurrent);
    "kelvin", KELVIN, kelvin => UnitDescriptor::base(BaseDimension::Temperature);
    "candela", CANDELA, candela => UnitDescriptor::base(BaseDimension::LuminousIntensity);
    /// The coherent SI base unit of mass. The gram is the scaled unit:
    /// 0.001 of this one.
    "kilogram", KILOGRAM, kilogram => UnitDescriptor::base(BaseDimension::Mass);
    "gram", GRAM, gram => KILOGRAM.rescale(1e-3);

    // metric-prefixed variants
    "kilometer", KILOMETER, kilometer => METER.rescale(1e3);
    "megameter", MEGAMETER, megameter => METER.rescale(1e6);
    "kilosecond", KILOSECOND, kilosecond => SECOND.rescale(1e3);
    "megasecond", MEGASECOND, megasecond => SECOND.rescale(1e6);
    "kilomole", KILOMOLE, kilomole => MOLE.rescale(1e3);
    "megamole", MEGAMOLE, megamole => MOLE.rescale(1e6);
    "kiloampere", KILOAMPERE, kiloampere => AMPERE.rescale(1e3);
    "megaampere", MEGAAMPERE, megaampere => AMPERE.rescale(1e6);
    "kilokelvin", KILOKELVIN, kilokelvin => KELVIN.rescale(1e3);
    "megakelvin", MEGAKELVIN, megakelvin => KELVIN.rescale(1e6);
    "kilocandela", KILOCANDELA, kilocandela => CANDELA.rescale(1e3);
    "megacandela", MEGACANDELA, megacandela => CANDELA.rescale(1e6);
    /// The mega-mass unit: 1000 kilograms.
    "tonne", TONNE, tonne => KILOGRAM.rescale(1e3);

    // time units
    "minute", MINUTE, minute => SECOND.rescale(60.0);
    "hour", HOUR, hour => SECOND.rescale(3600.0);
    "day", DAY, day => SECOND.rescale(86400.0);

    // derived units
    "square meter", SQUARE_METER, square_meter => METER.pow(2);
    "cubic meter", CUBIC_METER, cubic_meter => METER.pow(3);
    "meters per second", METERS_PER_SECOND, meters_per_second => METER.divide(SECOND);
    "meters per second squared", METERS_PER_SECOND_SQUARED, meters_per_second_squared =>
        METERS_PER_SECOND.divide(SECOND);
    "hertz", HERTZ, hertz => SECOND.invert();
    "newton", NEWTON, newton => KILOGRAM.multiply(METERS_PER_SECOND_SQUARED);
    "pascal", PASCAL, pascal => NEWTON.divide(SQUARE_METER);
    "joule", JOULE, joule => NEWTON.multiply(METER);
    "watt", WATT, watt => JOULE.divide(SECOND);
    "coulomb", COULOMB, coulomb => SECOND.multiply(AMPERE);
    "volt", VOLT, volt => WATT.divide(AMPERE);
    "farad", FARAD, farad => COULOMB.divide(VOLT);
    "ohm", OHM, ohm => VOLT.divide(AMPERE);
    "siemens", SIEMENS, siemens => OHM.invert();
    "weber", WEBER, weber => VOLT.multiply(SECOND);
    "tesla", TESLA, tesla => WEBER.divide(SQUARE_METER);
    "henry", HENRY, henry => WEBER.divide(AMPERE);
    "lux", LUX, lux => CANDELA.divide(SQUARE_METER);
    "katal", KATAL, katal => MOLE.divide(SECOND);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;

    #[test]
    fn derived_exponent_vectors() {
        assert_eq!(
            METERS_PER_SECOND.exponents().components(),
            [1, -1, 0, 0, 0, 0, 0],
        );
        assert_eq!(NEWTON.exponents().components(), [1, -2, 0, 0, 0, 0, 1]);
        assert_eq!(PASCAL.exponents().components(), [-1, -2, 0, 0, 0, 0, 1]);
        assert_eq!(JOULE.exponents().components(), [2, -2, 0, 0, 0, 0, 1]);
        assert_eq!(VOLT.exponents().components(), [2, -3, 0, -1, 0, 0, 1]);
        assert_eq!(FARAD.exponents().components(), [-2, 4, 0, 2, 0, 0, -1]);
        assert_eq!(LUX.exponents().components(), [-2, 0, 0, 0, 0, 1, 0]);
        assert_eq!(KATAL.exponents().components(), [0, -1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn coherent_derived_units_have_scale_one() {
        for descriptor in [
            SQUARE_METER, CUBIC_METER, METERS_PER_SECOND, HERTZ, NEWTON, PASCAL, JOULE, WATT,
            COULOMB, VOLT, FARAD, OHM, SIEMENS, WEBER, TESLA, HENRY, LUX, KATAL,
        ] {
            assert_eq!(descriptor.scale(), 1.0);
        }
    }

    #[test]
    fn siemens_is_the_inverse_of_ohm() {
        assert_eq!(SIEMENS.exponents(), OHM.exponents().neg());
    }

    #[test]
    fn scaled_unit_factors() {
        assert_eq!(GRAM.scale(), 1e-3);
        assert_eq!(TONNE.scale(), 1e3);
        assert_eq!(KILOMETER.scale(), 1e3);
        assert_eq!(MEGAMETER.scale(), 1e6);
        assert_eq!(MINUTE.scale(), 60.0);
        assert_eq!(HOUR.scale(), 3600.0);
        assert_eq!(DAY.scale(), 86400.0);
    }

    #[test]
    fn volt_derivation_cross_check() {
        // cross-check one long derivation chain against an independent one:
        // V = W/A = J/(s*A) = N*m/(s*A)
        let independent = NEWTON
            .multiply(METER)
            .divide(SECOND.multiply(AMPERE));
        assert_eq!(independent, VOLT);
    }

    #[test]
    fn every_unit_defaults_to_zero() {
        for unit in NAMED_UNITS {
            let quantity = Quantity::new(0.0, unit.descriptor);
            assert_eq!(quantity.value(), 0.0, "{} is nonzero", unit.name);
        }
    }

    #[test]
    fn constructors_match_their_descriptors() {
        assert_eq!(meter(1.0).descriptor(), METER);
        assert_eq!(newton(1.0).descriptor(), NEWTON);
        assert_eq!(tonne(1.0).descriptor(), TONNE);
    }
}
