//! Base dimensions and the exponent vector algebra.
//!
//! Every unit's dimension is a vector of seven signed integer exponents, one
//! per SI base dimension. All arithmetic on exponent vectors is `const fn`,
//! so the dimension of every catalog unit is computed at compile time.

/// The seven SI base dimensions, in the fixed index order shared by every
/// [`Exponents`] value in the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    Length,
    Time,
    AmountOfSubstance,
    ElectricCurrent,
    Temperature,
    LuminousIntensity,
    Mass,
}

impl BaseDimension {
    /// The number of base dimensions.
    pub const COUNT: usize = 7;

    /// All base dimensions, in index order.
    pub const ALL: [BaseDimension; BaseDimension::COUNT] = [
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::AmountOfSubstance,
        BaseDimension::ElectricCurrent,
        BaseDimension::Temperature,
        BaseDimension::LuminousIntensity,
        BaseDimension::Mass,
    ];

    /// The index of this dimension into an exponent vector.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// An exponent vector: how a dimension is built from the seven base
/// dimensions.
///
/// For example, velocity (length per time) is `[1, -1, 0, 0, 0, 0, 0]`.
/// Two units are dimensionally compatible iff their exponent vectors are
/// component-wise equal; the scale factor plays no part in compatibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Exponents([i32; BaseDimension::COUNT]);

impl Exponents {
    /// The all-zero exponent vector of dimensionless quantities.
    pub const DIMENSIONLESS: Exponents = Exponents([0; BaseDimension::COUNT]);

    /// Creates an exponent vector from its components, in
    /// [`BaseDimension::ALL`] order.
    pub const fn new(components: [i32; BaseDimension::COUNT]) -> Self {
        Self(components)
    }

    /// The exponent vector of a single base dimension, i.e. a 1 at the
    /// dimension's index and 0 everywhere else.
    pub const fn base(dimension: BaseDimension) -> Self {
        let mut components = [0; BaseDimension::COUNT];
        components[dimension.index()] = 1;
        Self(components)
    }

    /// The components of this vector, in [`BaseDimension::ALL`] order.
    pub const fn components(self) -> [i32; BaseDimension::COUNT] {
        self.0
    }

    /// The exponent of the given base dimension.
    pub const fn get(self, dimension: BaseDimension) -> i32 {
        self.0[dimension.index()]
    }

    /// Component-wise sum. This is the dimension of a product of two
    /// quantities.
    pub const fn add(self, other: Self) -> Self {
        let mut components = self.0;
        let mut i = 0;
        while i < components.len() {
            components[i] += other.0[i];
            i += 1;
        }
        Self(components)
    }

    /// Component-wise difference. This is the dimension of a quotient of two
    /// quantities.
    pub const fn sub(self, other: Self) -> Self {
        let mut components = self.0;
        let mut i = 0;
        while i < components.len() {
            components[i] -= other.0[i];
            i += 1;
        }
        Self(components)
    }

    /// Component-wise negation. This is the dimension of a reciprocal.
    pub const fn neg(self) -> Self {
        let mut components = self.0;
        let mut i = 0;
        while i < components.len() {
            components[i] = -components[i];
            i += 1;
        }
        Self(components)
    }

    /// Multiplies every component by an integer exponent, e.g. squared
    /// length is `length.pow(2)`.
    pub const fn pow(self, exponent: i32) -> Self {
        let mut components = self.0;
        let mut i = 0;
        while i < components.len() {
            components[i] *= exponent;
            i += 1;
        }
        Self(components)
    }

    /// Whether every component is zero.
    pub const fn is_dimensionless(self) -> bool {
        let mut i = 0;
        while i < self.0.len() {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_vectors() {
        assert_eq!(
            Exponents::base(BaseDimension::Length).components(),
            [1, 0, 0, 0, 0, 0, 0],
        );
        assert_eq!(
            Exponents::base(BaseDimension::Mass).components(),
            [0, 0, 0, 0, 0, 0, 1],
        );
    }

    #[test]
    fn add_and_sub() {
        let length = Exponents::base(BaseDimension::Length);
        let time = Exponents::base(BaseDimension::Time);

        let velocity = length.sub(time);
        assert_eq!(velocity.components(), [1, -1, 0, 0, 0, 0, 0]);

        // multiplying by time cancels the time exponent back out
        assert_eq!(velocity.add(time), length);
    }

    #[test]
    fn neg_inverts_every_component() {
        let acceleration = Exponents::new([1, -2, 0, 0, 0, 0, 0]);
        assert_eq!(acceleration.neg().components(), [-1, 2, 0, 0, 0, 0, 0]);
        assert_eq!(acceleration.neg().neg(), acceleration);
    }

    #[test]
    fn pow_scales_components() {
        let length = Exponents::base(BaseDimension::Length);
        assert_eq!(length.pow(3).components(), [3, 0, 0, 0, 0, 0, 0]);
        assert_eq!(length.pow(-1), length.neg());
        assert!(length.pow(0).is_dimensionless());
    }

    #[test]
    fn large_exponents_do_not_wrap() {
        // repeated powers push a component well past the i8 range
        let deep = Exponents::base(BaseDimension::Length).pow(64).pow(4);
        assert_eq!(deep.get(BaseDimension::Length), 256);
        assert_eq!(deep.neg().get(BaseDimension::Length), -256);
        assert_eq!(deep.add(deep).get(BaseDimension::Length), 512);
    }

    #[test]
    fn dimensionless() {
        assert!(Exponents::DIMENSIONLESS.is_dimensionless());

        let length = Exponents::base(BaseDimension::Length);
        assert!(!length.is_dimensionless());
        assert!(length.sub(length).is_dimensionless());
    }

    #[test]
    fn const_evaluated() {
        const VELOCITY: Exponents = Exponents::base(BaseDimension::Length)
            .sub(Exponents::base(BaseDimension::Time));
        assert_eq!(VELOCITY.get(BaseDimension::Time), -1);
    }
}
