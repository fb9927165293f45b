//! Integer arithmetic used in exponent position.
//!
//! An exponent is either a bare (possibly negated) literal, as in `m^-2`, or
//! a parenthesized expression over `+`, `-` and `*`, as in `m^(7+2*(4-6))`.
//! There is no division, so the only way evaluation fails is overflow.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpExpr {
    Literal(i64),
    Negate(Box<ExpExpr>),
    Sum(Box<ExpExpr>, Box<ExpExpr>),
    Difference(Box<ExpExpr>, Box<ExpExpr>),
    Product(Box<ExpExpr>, Box<ExpExpr>),
    Paren(Box<ExpExpr>),
}

impl ExpExpr {
    pub fn literal(value: i64) -> Self {
        ExpExpr::Literal(value)
    }

    pub fn negate(inner: ExpExpr) -> Self {
        ExpExpr::Negate(Box::new(inner))
    }

    pub fn sum(lhs: ExpExpr, rhs: ExpExpr) -> Self {
        ExpExpr::Sum(Box::new(lhs), Box::new(rhs))
    }

    pub fn difference(lhs: ExpExpr, rhs: ExpExpr) -> Self {
        ExpExpr::Difference(Box::new(lhs), Box::new(rhs))
    }

    pub fn product(lhs: ExpExpr, rhs: ExpExpr) -> Self {
        ExpExpr::Product(Box::new(lhs), Box::new(rhs))
    }

    pub fn paren(inner: ExpExpr) -> Self {
        ExpExpr::Paren(Box::new(inner))
    }

    /// Evaluates the expression, or `None` if any step overflows `i64`.
    pub fn evaluate(&self) -> Option<i64> {
        match self {
            ExpExpr::Literal(value) => Some(*value),
            ExpExpr::Negate(inner) => inner.evaluate()?.checked_neg(),
            ExpExpr::Sum(lhs, rhs) => lhs.evaluate()?.checked_add(rhs.evaluate()?),
            ExpExpr::Difference(lhs, rhs) => lhs.evaluate()?.checked_sub(rhs.evaluate()?),
            ExpExpr::Product(lhs, rhs) => lhs.evaluate()?.checked_mul(rhs.evaluate()?),
            ExpExpr::Paren(inner) => inner.evaluate(),
        }
    }
}

impl fmt::Display for ExpExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpExpr::Literal(value) => write!(f, "{}", value),
            ExpExpr::Negate(inner) => write!(f, "-{}", inner),
            ExpExpr::Sum(lhs, rhs) => write!(f, "{}+{}", lhs, rhs),
            ExpExpr::Difference(lhs, rhs) => write!(f, "{}-{}", lhs, rhs),
            ExpExpr::Product(lhs, rhs) => write!(f, "{}*{}", lhs, rhs),
            ExpExpr::Paren(inner) => write!(f, "({})", inner),
        }
    }
}
