use thiserror::Error;

pub type Result<T> = std::result::Result<T, UnitError>;

/// Errors that can occur while parsing a unit expression.
///
/// Every variant but [`UnitError::Overflow`] carries `pos`, the byte offset
/// into the source text of the offending character or token. Failures at end
/// of input report the input length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// A character that starts no token.
    ///
    /// Examples: `"kg.m"`, `"m²"`, `"m_s"`
    #[error("unexpected character '{found}' at byte {pos}")]
    Lexical { pos: usize, found: char },

    /// The token sequence does not match the unit grammar.
    ///
    /// Examples: `"kg*"` (dangling operator), `"(m/s"` (unbalanced
    /// parentheses), `"m^"` (missing exponent), `"m s"` (trailing token)
    #[error("invalid unit syntax at byte {pos}: {message}")]
    Syntax { pos: usize, message: &'static str },

    /// A well-formed symbol that is not in the symbol table.
    #[error("unknown unit symbol '{name}' at byte {pos}")]
    UnknownSymbol { pos: usize, name: String },

    /// An exponent that does not fit in an `i64` once evaluated or reduced.
    ///
    /// `expr` is the smallest sub-expression whose value overflowed.
    ///
    /// Examples: `"m^(9223372036854775807+1)"`, `"(m^4294967296)^4294967296"`
    #[error("exponent overflow in '{expr}'")]
    Overflow { expr: String },
}

impl UnitError {
    /// Byte offset of the failure in the source text, if it has one.
    ///
    /// Overflow is found while reducing the parsed tree, which no longer
    /// carries offsets.
    pub fn pos(&self) -> Option<usize> {
        match self {
            UnitError::Lexical { pos, .. }
            | UnitError::Syntax { pos, .. }
            | UnitError::UnknownSymbol { pos, .. } => Some(*pos),
            UnitError::Overflow { .. } => None,
        }
    }
}
