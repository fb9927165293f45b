//! # dimvec
//!
//! Parses unit expressions such as `kg*m/s^2` or `A*kg*(m^-1*s^-2)^3` and
//! reduces them to a fixed-length vector of integer exponents over a closed
//! table of base symbols (see [`symbols`]). Units can then be multiplied,
//! divided, raised to integer powers, inverted and compared directly on that
//! vector, and rendered back to canonical text.
//!
//! ```rust
//! use dimvec::{Symbol, Unit};
//!
//! let u = Unit::parse("(kg^2*s^-3/A)^-5").unwrap();
//! assert_eq!(u.exponent(Symbol::KILOGRAM), -10);
//! assert_eq!(u.exponent(Symbol::SECOND), 15);
//! assert_eq!(u.exponent(Symbol::AMPERE), 5);
//! assert_eq!(u.to_string(), "kg^-10 * s^15 * A^5");
//! ```
//!
//! Symbols carry no scale: there are no conversion factors and no prefixes.

pub mod equation;
pub mod error;
pub mod render;
pub mod symbols;
pub mod unit;

mod test_utils;

pub use crate::equation::{ExpExpr, UnitExpr, parse_expression};
pub use crate::error::{Result, UnitError};
pub use crate::symbols::{Exponents, NUM_SYMBOLS, SYMBOLS, Symbol};
pub use crate::unit::{Unit, compose_text};
