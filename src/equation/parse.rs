//! Parser for unit expressions, built from `nom` combinators.
//!
//! ```text
//! unit     := power (('*' | '/') power)*
//! power    := primary ('^' exp_atom)?
//! primary  := SYMBOL | '(' unit ')'
//! exp      := exp_term (('+' | '-') exp_term)*
//! exp_term := exp_atom ('*' exp_atom)*
//! exp_atom := INTEGER | '-' INTEGER | '-' exp_atom | '(' exp ')'
//! ```
//!
//! The operand of `^` is an `exp_atom`, so in `m^-1*s` the `*` belongs to the
//! unit level. Anything longer than a literal must be parenthesized:
//! `m^(7+2*(4-6))`. A `-` directly before digits is read as part of the
//! literal, which makes `-9223372036854775808` a valid exponent.
//!
//! Every parser works on the remaining `&str`; error positions are recovered
//! from its length relative to the source.

use log::trace;
use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{alpha1, char, digit1, multispace0},
    combinator::{map, opt, value},
    error::{ErrorKind, ParseError},
    sequence::{delimited, preceded},
};

use super::exponent::ExpExpr;
use super::reduce::reduce;
use super::token::{TokenKind, tokenize};
use super::units::UnitExpr;
use crate::error::{Result, UnitError};
use crate::symbols::{Exponents, NUM_SYMBOLS, Symbol};

/// A grammar failure and the remaining input where it happened.
#[derive(Debug)]
struct GrammarError<'a> {
    input: &'a str,
    reason: Reason<'a>,
}

#[derive(Debug)]
enum Reason<'a> {
    Syntax(&'static str),
    UnknownSymbol(&'a str),
}

impl<'a> ParseError<&'a str> for GrammarError<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        GrammarError {
            input,
            reason: Reason::Syntax("unexpected input"),
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    // Keep the alternative that got furthest into the input
    fn or(self, other: Self) -> Self {
        if other.input.len() <= self.input.len() {
            other
        } else {
            self
        }
    }
}

impl GrammarError<'_> {
    fn into_unit_error(self, source: &str) -> UnitError {
        let pos = source.len() - self.input.len();
        match self.reason {
            Reason::Syntax(message) => UnitError::Syntax { pos, message },
            Reason::UnknownSymbol(name) => UnitError::UnknownSymbol {
                pos,
                name: name.to_string(),
            },
        }
    }
}

type PResult<'a, O> = IResult<&'a str, O, GrammarError<'a>>;

/// Parse whitespace (spaces, tabs, newlines) around `inner`
fn ws<'a, P, O>(inner: P) -> impl Parser<&'a str, Output = O, Error = GrammarError<'a>>
where
    P: Parser<&'a str, Output = O, Error = GrammarError<'a>>,
{
    delimited(multispace0, inner, multispace0)
}

/// Commit to `inner`: if it does not match, fail with `message` at the first
/// non-whitespace character instead of backtracking
fn expect<'a, P, O>(
    message: &'static str,
    mut inner: P,
) -> impl Parser<&'a str, Output = O, Error = GrammarError<'a>>
where
    P: Parser<&'a str, Output = O, Error = GrammarError<'a>>,
{
    move |input: &'a str| -> PResult<'a, O> {
        match inner.parse(input) {
            Err(nom::Err::Error(_)) => {
                let (at, _) = multispace0::<_, GrammarError<'a>>(input)?;
                Err(nom::Err::Failure(GrammarError {
                    input: at,
                    reason: Reason::Syntax(message),
                }))
            }
            result => result,
        }
    }
}

/// Parse a unit symbol and look it up in the symbol table
fn symbol<'a>(input: &'a str) -> PResult<'a, UnitExpr> {
    let (rest, name) = alpha1::<_, GrammarError<'a>>(input)?;

    match Symbol::lookup(name) {
        Some(symbol) => Ok((rest, UnitExpr::atom(symbol))),
        None => Err(nom::Err::Failure(GrammarError {
            input,
            reason: Reason::UnknownSymbol(name),
        })),
    }
}

/// Parse a parenthesized unit expression
fn group(input: &str) -> PResult<'_, UnitExpr> {
    map(
        delimited(
            ws(char('(')),
            unit,
            expect("expected ')' to close group", ws(char(')'))),
        ),
        UnitExpr::group,
    )
    .parse(input)
}

/// Parse a unit symbol or a parenthesized unit expression
fn primary(input: &str) -> PResult<'_, UnitExpr> {
    expect("expected a unit symbol or '('", alt((ws(symbol), group))).parse(input)
}

/// Parse an optional exponent applied to a primary
fn power(input: &str) -> PResult<'_, UnitExpr> {
    let (input, base) = primary(input)?;

    if let Ok((input, _)) = ws(char('^')).parse(input) {
        let (input, exponent) = exp_atom(input)?;
        Ok((input, UnitExpr::power(base, exponent)))
    } else {
        Ok((input, base))
    }
}

/// Parse multiplication and division of units (left-associative)
fn unit(input: &str) -> PResult<'_, UnitExpr> {
    let (mut input, mut left) = power(input)?;

    loop {
        let op_result = alt((
            value(TokenKind::Star, ws(char('*'))),
            value(TokenKind::Slash, ws(char('/'))),
        ))
        .parse(input);

        if let Ok((new_input, op)) = op_result {
            let (new_input, right) = power(new_input)?;
            input = new_input;
            left = match op {
                TokenKind::Slash => UnitExpr::quotient(left, right),
                _ => UnitExpr::product(left, right),
            };
        } else {
            break;
        }
    }

    Ok((input, left))
}

/// Parse an integer literal, with an optional leading minus sign
fn literal<'a>(input: &'a str) -> PResult<'a, ExpExpr> {
    let (digits_start, negative) = opt(ws(char('-'))).parse(input)?;
    let (rest, digits) = digit1::<_, GrammarError<'a>>(digits_start)?;

    let magnitude = digits.parse::<u64>().ok();
    let value = match negative {
        Some(_) => magnitude.and_then(|m| 0i64.checked_sub_unsigned(m)),
        None => magnitude.and_then(|m| i64::try_from(m).ok()),
    };

    match value {
        Some(value) => Ok((rest, ExpExpr::literal(value))),
        None => Err(nom::Err::Failure(GrammarError {
            input: digits_start,
            reason: Reason::Syntax("integer literal out of range"),
        })),
    }
}

/// Parse a literal, a negation or a parenthesized exponent
fn exp_atom(input: &str) -> PResult<'_, ExpExpr> {
    expect(
        "expected an integer exponent",
        alt((
            ws(literal),
            map(preceded(ws(char('-')), exp_atom), ExpExpr::negate),
            map(
                delimited(
                    ws(char('(')),
                    exp,
                    expect("expected ')' to close exponent", ws(char(')'))),
                ),
                ExpExpr::paren,
            ),
        )),
    )
    .parse(input)
}

/// Parse multiplication of exponents (left-associative)
fn exp_term(input: &str) -> PResult<'_, ExpExpr> {
    let (mut input, mut left) = exp_atom(input)?;

    while let Ok((new_input, _)) = ws(char('*')).parse(input) {
        let (new_input, right) = exp_atom(new_input)?;
        input = new_input;
        left = ExpExpr::product(left, right);
    }

    Ok((input, left))
}

/// Parse addition and subtraction of exponents (left-associative)
fn exp(input: &str) -> PResult<'_, ExpExpr> {
    let (mut input, mut left) = exp_term(input)?;

    loop {
        let op_result = alt((
            value(TokenKind::Plus, ws(char('+'))),
            value(TokenKind::Minus, ws(char('-'))),
        ))
        .parse(input);

        if let Ok((new_input, op)) = op_result {
            let (new_input, right) = exp_term(new_input)?;
            input = new_input;
            left = match op {
                TokenKind::Minus => ExpExpr::difference(left, right),
                _ => ExpExpr::sum(left, right),
            };
        } else {
            break;
        }
    }

    Ok((input, left))
}

/// Run `parser` over the whole of `source`; `trailing` is reported when
/// input is left over
fn parse_all<'a, P, O>(source: &'a str, mut parser: P, trailing: &'static str) -> Result<O>
where
    P: Parser<&'a str, Output = O, Error = GrammarError<'a>>,
{
    match parser.parse(source) {
        Ok(("", output)) => Ok(output),
        Ok((rest, _)) => Err(UnitError::Syntax {
            pos: source.len() - rest.len(),
            message: trailing,
        }),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e.into_unit_error(source)),
        Err(nom::Err::Incomplete(_)) => Err(UnitError::Syntax {
            pos: source.len(),
            message: "unexpected end of input",
        }),
    }
}

/// Parses `source` into a unit expression tree.
///
/// Unlike [`parse_exponents`], empty input is an error here, since there is
/// no tree for the dimensionless unit.
pub fn parse_expression(source: &str) -> Result<UnitExpr> {
    // Lex first so a stray character is reported ahead of any grammar error
    tokenize(source)?;

    let expr = parse_all(source, unit, "unexpected token after unit expression")?;
    trace!("Parsed '{}' as {}", source, expr);
    Ok(expr)
}

/// Parses `source` and reduces it to an exponent vector.
///
/// Empty or all-whitespace input is the dimensionless unit. Fails with
/// [`UnitError::Overflow`] if an exponent leaves the `i64` range.
pub fn parse_exponents(source: &str) -> Result<Exponents> {
    if tokenize(source)?.is_empty() {
        return Ok([0; NUM_SYMBOLS]);
    }

    let expr = parse_all(source, unit, "unexpected token after unit expression")?;
    trace!("Parsed '{}' as {}", source, expr);
    reduce(&expr)
}

/// Parses and evaluates a standalone exponent expression such as `7+2*(4-6)`.
pub fn evaluate_exponent(source: &str) -> Result<i64> {
    tokenize(source)?;

    let expr = parse_all(source, exp, "unexpected token after exponent")?;

    expr.evaluate().ok_or_else(|| UnitError::Overflow {
        expr: expr.to_string(),
    })
}
