//! # Units as Dimension Vectors
//!
//! A [`Unit`] is the reduced form of a unit expression: one integer exponent
//! per base symbol. All algebra happens on that vector, so two expressions
//! that describe the same product of base symbols compare equal no matter how
//! they were written.
//!
//! ```rust
//! use dimvec::Unit;
//!
//! let force = Unit::parse("kg*m/s^2").unwrap();
//! let acceleration = Unit::parse("m / s^2").unwrap();
//! assert_eq!(force / acceleration, Unit::parse("kg").unwrap());
//!
//! let mut frequency = Unit::parse("s").unwrap();
//! frequency.invert();
//! assert_eq!(frequency.to_string(), "s^-1");
//! ```
//!
//! ## Mutation
//!
//! `Unit` is `Copy`, and every operation returns a new value except the
//! in-place ones: [`Unit::invert`], [`Unit::raise_to_power`],
//! [`Unit::set_from_str`], [`Unit::set_exponents`] and the `*=`/`/=`
//! operators. A failed [`Unit::set_from_str`] leaves the receiver untouched.
//!
//! ## Overflow
//!
//! Parsing never overflows silently: an exponent outside the `i64` range is
//! an [`UnitError::Overflow`]. The algebra on an existing `Unit` (including
//! the operator impls) wraps around in two's complement instead, the same in
//! every build profile. Use [`Unit::checked_compose`],
//! [`Unit::checked_divide`] or [`Unit::checked_pow`] to detect it.

use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};
use std::str::FromStr;

use log::debug;
use num_traits::{Inv, One, Pow};

use crate::equation::parse::parse_exponents;
use crate::error::{Result, UnitError};
use crate::render::render;
use crate::symbols::{Exponents, NUM_SYMBOLS, Symbol};

/// A unit of measure reduced to integer exponents over the base symbols.
///
/// The default value is the dimensionless unit, the identity of
/// multiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unit {
    exponents: Exponents,
}

impl Unit {
    /// The dimensionless unit (all exponents zero).
    pub fn dimensionless() -> Self {
        Unit::default()
    }

    /// A single base symbol with exponent 1.
    pub fn symbol(symbol: Symbol) -> Self {
        let mut exponents = [0; NUM_SYMBOLS];
        exponents[symbol.index()] = 1;
        Unit { exponents }
    }

    pub fn from_exponents(exponents: Exponents) -> Self {
        Unit { exponents }
    }

    /// Parses and reduces a unit expression.
    ///
    /// Empty input is the dimensionless unit.
    ///
    /// # Errors
    ///
    /// [`UnitError::Lexical`], [`UnitError::Syntax`] or
    /// [`UnitError::UnknownSymbol`] if `source` is not a valid expression,
    /// [`UnitError::Overflow`] if an exponent does not fit in an `i64`.
    pub fn parse(source: &str) -> Result<Self> {
        let unit = Unit {
            exponents: parse_exponents(source)?,
        };
        debug!("Reduced '{}' to '{}'", source, unit);
        Ok(unit)
    }

    /// Replaces this unit with the reduction of `source`.
    ///
    /// On error `self` is left as it was.
    pub fn set_from_str(&mut self, source: &str) -> Result<()> {
        *self = Unit::parse(source)?;
        Ok(())
    }

    pub fn exponents(&self) -> &Exponents {
        &self.exponents
    }

    pub fn into_exponents(self) -> Exponents {
        self.exponents
    }

    pub fn set_exponents(&mut self, exponents: Exponents) {
        self.exponents = exponents;
    }

    /// The exponent of a single base symbol.
    pub fn exponent(&self, symbol: Symbol) -> i64 {
        self.exponents[symbol.index()]
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Iterates over the base symbols with a nonzero exponent, in table order.
    pub fn components(&self) -> impl Iterator<Item = (Symbol, i64)> + '_ {
        Symbol::all()
            .zip(self.exponents.iter().copied())
            .filter(|(_, e)| *e != 0)
    }

    /// Product of two units: exponents add, wrapping on overflow.
    pub fn compose(&self, other: &Unit) -> Unit {
        Unit {
            exponents: std::array::from_fn(|i| self.exponents[i].wrapping_add(other.exponents[i])),
        }
    }

    /// Product of two units, or `None` if an exponent overflows.
    pub fn checked_compose(&self, other: &Unit) -> Option<Unit> {
        self.checked_zip(other, i64::checked_add)
    }

    /// Parses `source` and composes it with this unit.
    pub fn compose_str(&self, source: &str) -> Result<Unit> {
        let other = Unit::parse(source)?;
        Ok(self.compose(&other))
    }

    /// Quotient of two units: exponents subtract, wrapping on overflow.
    pub fn divide(&self, other: &Unit) -> Unit {
        Unit {
            exponents: std::array::from_fn(|i| self.exponents[i].wrapping_sub(other.exponents[i])),
        }
    }

    /// Quotient of two units, or `None` if an exponent overflows.
    pub fn checked_divide(&self, other: &Unit) -> Option<Unit> {
        self.checked_zip(other, i64::checked_sub)
    }

    fn checked_zip(&self, other: &Unit, op: fn(i64, i64) -> Option<i64>) -> Option<Unit> {
        let mut exponents = [0; NUM_SYMBOLS];
        for (slot, (a, b)) in exponents
            .iter_mut()
            .zip(self.exponents.iter().zip(&other.exponents))
        {
            *slot = op(*a, *b)?;
        }
        Some(Unit { exponents })
    }

    /// This unit raised to `n`, leaving `self` unchanged. Wraps on overflow.
    pub fn pow(&self, n: i64) -> Unit {
        Unit {
            exponents: self.exponents.map(|e| e.wrapping_mul(n)),
        }
    }

    /// This unit raised to `n`, or `None` if an exponent overflows.
    pub fn checked_pow(&self, n: i64) -> Option<Unit> {
        let mut exponents = self.exponents;
        for e in exponents.iter_mut() {
            *e = e.checked_mul(n)?;
        }
        Some(Unit { exponents })
    }

    /// Raises this unit to `n` in place. A power of 0 leaves it dimensionless.
    pub fn raise_to_power(&mut self, n: i64) {
        self.exponents.iter_mut().for_each(|e| *e = e.wrapping_mul(n));
    }

    /// Negates every exponent in place.
    pub fn invert(&mut self) {
        self.raise_to_power(-1);
    }

    /// The reciprocal of this unit, leaving `self` unchanged.
    pub fn inverse(&self) -> Unit {
        self.pow(-1)
    }

    /// Renders the canonical text form, e.g. `m * kg * s^-2`.
    pub fn to_canonical_string(&self) -> String {
        render(&self.exponents)
    }
}

/// Parses `source` and composes it with `unit`, for expressions written with
/// the text on the left.
pub fn compose_text(source: &str, unit: &Unit) -> Result<Unit> {
    let parsed = Unit::parse(source)?;
    Ok(parsed.compose(unit))
}

impl From<Exponents> for Unit {
    fn from(exponents: Exponents) -> Self {
        Unit::from_exponents(exponents)
    }
}

impl From<Symbol> for Unit {
    fn from(symbol: Symbol) -> Self {
        Unit::symbol(symbol)
    }
}

impl From<Unit> for Exponents {
    fn from(unit: Unit) -> Self {
        unit.exponents
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::parse(s)
    }
}

impl TryFrom<&str> for Unit {
    type Error = UnitError;

    fn try_from(value: &str) -> Result<Self> {
        Unit::parse(value)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.exponents))
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        self.compose(&rhs)
    }
}

impl Mul<&Unit> for &Unit {
    type Output = Unit;

    fn mul(self, rhs: &Unit) -> Unit {
        self.compose(rhs)
    }
}

impl MulAssign for Unit {
    fn mul_assign(&mut self, rhs: Unit) {
        *self = self.compose(&rhs);
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        self.divide(&rhs)
    }
}

impl Div<&Unit> for &Unit {
    type Output = Unit;

    fn div(self, rhs: &Unit) -> Unit {
        self.divide(rhs)
    }
}

impl DivAssign for Unit {
    fn div_assign(&mut self, rhs: Unit) {
        *self = self.divide(&rhs);
    }
}

impl Pow<i64> for Unit {
    type Output = Unit;

    fn pow(self, rhs: i64) -> Unit {
        Unit::pow(&self, rhs)
    }
}

impl Inv for Unit {
    type Output = Unit;

    fn inv(self) -> Unit {
        self.inverse()
    }
}

impl One for Unit {
    fn one() -> Self {
        Unit::dimensionless()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Deserialize as a string
        let s: String = serde::Deserialize::deserialize(deserializer)?;

        // Parse and reduce the unit expression
        Unit::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_canonical_string())
    }
}
