//! Folding a parsed [`UnitExpr`] into its exponent vector.

use super::units::UnitExpr;
use crate::error::{Result, UnitError};
use crate::symbols::{Exponents, NUM_SYMBOLS};

/// Reduces `expr` to one exponent per base symbol.
///
/// Products add exponents, quotients subtract them and powers scale them, so
/// the result only depends on the tree, never on any outside state. Any
/// exponent leaving the `i64` range fails with [`UnitError::Overflow`] naming
/// the innermost node that overflowed.
pub fn reduce(expr: &UnitExpr) -> Result<Exponents> {
    let exponents = match expr {
        UnitExpr::Atom(symbol) => {
            let mut exponents = [0; NUM_SYMBOLS];
            exponents[symbol.index()] = 1;
            Some(exponents)
        }
        UnitExpr::Product(left, right) => {
            zip_with(&reduce(left)?, &reduce(right)?, i64::checked_add)
        }
        UnitExpr::Quotient(left, right) => {
            zip_with(&reduce(left)?, &reduce(right)?, i64::checked_sub)
        }
        UnitExpr::Power(base, exponent) => {
            let base = reduce(base)?;
            exponent.evaluate().and_then(|n| scale(&base, n))
        }
        UnitExpr::Group(inner) => return reduce(inner),
    };

    exponents.ok_or_else(|| UnitError::Overflow {
        expr: expr.to_string(),
    })
}

fn zip_with(
    left: &Exponents,
    right: &Exponents,
    op: fn(i64, i64) -> Option<i64>,
) -> Option<Exponents> {
    let mut out = [0; NUM_SYMBOLS];
    for (slot, (l, r)) in out.iter_mut().zip(left.iter().zip(right)) {
        *slot = op(*l, *r)?;
    }
    Some(out)
}

fn scale(base: &Exponents, n: i64) -> Option<Exponents> {
    let mut out = [0; NUM_SYMBOLS];
    for (slot, e) in out.iter_mut().zip(base) {
        *slot = e.checked_mul(n)?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::exponent::ExpExpr;
    use crate::symbols::Symbol;

    fn atom(symbol: Symbol) -> UnitExpr {
        UnitExpr::atom(symbol)
    }

    #[test]
    fn test_atom() {
        let exponents = reduce(&atom(Symbol::AMPERE)).unwrap();
        assert_eq!(exponents[Symbol::AMPERE.index()], 1);
        assert_eq!(exponents.iter().sum::<i64>(), 1);
    }

    #[test]
    fn test_repeated_symbol_accumulates() {
        let expr = UnitExpr::product(atom(Symbol::METER), atom(Symbol::METER));
        assert_eq!(reduce(&expr).unwrap()[Symbol::METER.index()], 2);
    }

    #[test]
    fn test_quotient_cancels() {
        let expr = UnitExpr::quotient(atom(Symbol::SECOND), atom(Symbol::SECOND));
        assert_eq!(reduce(&expr).unwrap(), [0; NUM_SYMBOLS]);
    }

    #[test]
    fn test_division_is_left_associative() {
        // (m/s)/s, not m/(s/s)
        let expr = UnitExpr::quotient(
            UnitExpr::quotient(atom(Symbol::METER), atom(Symbol::SECOND)),
            atom(Symbol::SECOND),
        );
        let exponents = reduce(&expr).unwrap();
        assert_eq!(exponents[Symbol::METER.index()], 1);
        assert_eq!(exponents[Symbol::SECOND.index()], -2);
    }

    #[test]
    fn test_power_of_group() {
        let expr = UnitExpr::power(
            UnitExpr::group(UnitExpr::quotient(
                atom(Symbol::KILOGRAM),
                atom(Symbol::KELVIN),
            )),
            ExpExpr::negate(ExpExpr::literal(3)),
        );
        let exponents = reduce(&expr).unwrap();
        assert_eq!(exponents[Symbol::KILOGRAM.index()], -3);
        assert_eq!(exponents[Symbol::KELVIN.index()], 3);
    }

    #[test]
    fn test_zero_power_is_dimensionless() {
        let expr = UnitExpr::power(atom(Symbol::MOLE), ExpExpr::literal(0));
        assert_eq!(reduce(&expr).unwrap(), [0; NUM_SYMBOLS]);
    }

    #[test]
    fn test_power_overflow_names_the_power() {
        // (m^4294967296)^4294967296 is 2^64
        let inner = UnitExpr::power(atom(Symbol::METER), ExpExpr::literal(1 << 32));
        let expr = UnitExpr::power(UnitExpr::group(inner), ExpExpr::literal(1 << 32));
        assert_eq!(
            reduce(&expr),
            Err(UnitError::Overflow {
                expr: "(m^4294967296)^4294967296".to_string()
            })
        );
    }

    #[test]
    fn test_product_overflow_names_the_product() {
        let expr = UnitExpr::product(
            UnitExpr::power(atom(Symbol::SECOND), ExpExpr::literal(i64::MAX)),
            atom(Symbol::SECOND),
        );
        assert_eq!(
            reduce(&expr),
            Err(UnitError::Overflow {
                expr: "s^9223372036854775807*s".to_string()
            })
        );
    }

    #[test]
    fn test_exponent_overflow_names_the_power() {
        let expr = UnitExpr::power(
            atom(Symbol::KELVIN),
            ExpExpr::paren(ExpExpr::sum(
                ExpExpr::literal(i64::MAX),
                ExpExpr::literal(1),
            )),
        );
        assert!(matches!(reduce(&expr), Err(UnitError::Overflow { .. })));
    }

    #[test]
    fn test_minimum_exponent_is_representable() {
        let expr = UnitExpr::power(atom(Symbol::METER), ExpExpr::literal(i64::MIN));
        assert_eq!(reduce(&expr).unwrap()[Symbol::METER.index()], i64::MIN);
    }
}
