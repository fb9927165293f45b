//! Canonical text form of an exponent vector.
//!
//! Symbols are written in table order, an exponent of 1 is left implicit and
//! terms are joined with `" * "`:
//!
//! ```rust
//! use dimvec::{Unit, render::render};
//!
//! let force = Unit::parse("m*kg/s^2").unwrap();
//! assert_eq!(render(force.exponents()), "m * kg * s^-2");
//! assert_eq!(render(Unit::dimensionless().exponents()), "");
//! ```
//!
//! The output is itself a valid unit expression that parses back to the same
//! vector.

use itertools::Itertools;

use crate::symbols::{Exponents, Symbol};

/// Renders `exponents` in canonical form; the dimensionless vector renders
/// as the empty string.
pub fn render(exponents: &Exponents) -> String {
    Symbol::all()
        .zip(exponents.iter().copied())
        .filter(|(_, exponent)| *exponent != 0)
        .map(|(symbol, exponent)| match exponent {
            1 => symbol.name().to_string(),
            n => format!("{}^{}", symbol, n),
        })
        .join(" * ")
}
