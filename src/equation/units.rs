// A unit expression combines base symbols with the operators * (multiplication),
// / (division) and ^ (exponentiation), with parentheses as needed to group
// units in the numerator or denominator. Exponents MUST be integers but may
// themselves be written as integer arithmetic, e.g. m^(7+2*(4-6)).
//
// Multiplication and division share one precedence level and associate to the
// left, so a/b/c means (a/b)/c. Exponentiation binds tighter than both and
// applies to a single symbol or a parenthesized group.

use std::fmt;

use super::exponent::ExpExpr;
use crate::symbols::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitExpr {
    Atom(Symbol),
    Product(Box<UnitExpr>, Box<UnitExpr>),
    Quotient(Box<UnitExpr>, Box<UnitExpr>),
    Power(Box<UnitExpr>, ExpExpr),
    Group(Box<UnitExpr>),
}

impl UnitExpr {
    pub fn atom(symbol: Symbol) -> Self {
        UnitExpr::Atom(symbol)
    }

    pub fn product(left: UnitExpr, right: UnitExpr) -> Self {
        UnitExpr::Product(Box::new(left), Box::new(right))
    }

    pub fn quotient(left: UnitExpr, right: UnitExpr) -> Self {
        UnitExpr::Quotient(Box::new(left), Box::new(right))
    }

    pub fn power(base: UnitExpr, exponent: ExpExpr) -> Self {
        UnitExpr::Power(Box::new(base), exponent)
    }

    pub fn group(inner: UnitExpr) -> Self {
        UnitExpr::Group(Box::new(inner))
    }
}

impl fmt::Display for UnitExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitExpr::Atom(symbol) => write!(f, "{}", symbol),
            UnitExpr::Product(left, right) => write!(f, "{}*{}", left, right),
            UnitExpr::Quotient(left, right) => write!(f, "{}/{}", left, right),
            // Sums, differences and products must be parenthesized after '^'.
            UnitExpr::Power(
                base,
                exponent @ (ExpExpr::Literal(_) | ExpExpr::Negate(_) | ExpExpr::Paren(_)),
            ) => write!(f, "{}^{}", base, exponent),
            UnitExpr::Power(base, exponent) => write!(f, "{}^({})", base, exponent),
            UnitExpr::Group(inner) => write!(f, "({})", inner),
        }
    }
}
