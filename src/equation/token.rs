//! Lexer for unit expressions.
//!
//! Splits source text into [`Token`]s. Whitespace (space, tab, CR, LF) is
//! skipped everywhere and never produces a token, so `"kg * m"` and `"kg*m"`
//! lex to the same kinds.
//! Symbols are maximal runs of ASCII letters and integers are maximal runs of
//! ASCII digits; a sign in front of an integer is always its own token.

use log::trace;
use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{alpha1, char, digit1, multispace0},
    combinator::{consumed, opt, value},
    sequence::preceded,
};

use crate::error::{Result, UnitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Symbol,
    Integer,
    Star,
    Slash,
    Caret,
    Plus,
    Minus,
    LParen,
    RParen,
}

/// A token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub lexeme: &'a str,
    /// Byte offset of the token in the source text.
    pub pos: usize,
}

/// Recognize a single token at the start of the input
fn token_kind(input: &str) -> IResult<&str, TokenKind> {
    alt((
        value(TokenKind::Symbol, alpha1),
        value(TokenKind::Integer, digit1),
        value(TokenKind::Star, char('*')),
        value(TokenKind::Slash, char('/')),
        value(TokenKind::Caret, char('^')),
        value(TokenKind::Plus, char('+')),
        value(TokenKind::Minus, char('-')),
        value(TokenKind::LParen, char('(')),
        value(TokenKind::RParen, char(')')),
    ))
    .parse(input)
}

/// Skip whitespace, then recognize a token together with the text it spans
fn lexeme(input: &str) -> IResult<&str, Option<(&str, TokenKind)>> {
    preceded(multispace0, opt(consumed(token_kind))).parse(input)
}

fn unexpected_character(source: &str, at: &str) -> UnitError {
    UnitError::Lexical {
        pos: source.len() - at.len(),
        found: at.chars().next().unwrap_or_default(),
    }
}

/// Tokenizes `source`.
///
/// Fails with [`UnitError::Lexical`] at the first character that cannot
/// start a token.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut rest = source;

    loop {
        match lexeme(rest) {
            Ok((next, Some((text, kind)))) => {
                tokens.push(Token {
                    kind,
                    lexeme: text,
                    pos: source.len() - next.len() - text.len(),
                });
                rest = next;
            }
            Ok((next, None)) if next.is_empty() => break,
            Ok((next, None)) => return Err(unexpected_character(source, next)),
            Err(_) => return Err(unexpected_character(source, rest)),
        }
    }

    trace!("Tokenized '{}' into {} tokens", source, tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t\r\n ").unwrap().is_empty());
    }

    #[test]
    fn test_all_operators() {
        use TokenKind::*;
        assert_eq!(
            kinds("*/^+-()"),
            vec![Star, Slash, Caret, Plus, Minus, LParen, RParen]
        );
    }

    #[test]
    fn test_symbols_and_integers() {
        let tokens = tokenize("kg*m^12").unwrap();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, vec!["kg", "*", "m", "^", "12"]);
        assert_eq!(tokens[4].kind, TokenKind::Integer);
    }

    #[test]
    fn test_positions_skip_whitespace() {
        let tokens = tokenize("  kg *\tmol").unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![2, 5, 7]);
    }

    #[test]
    fn test_negative_literal_is_two_tokens() {
        assert_eq!(
            kinds("m^-1"),
            vec![
                TokenKind::Symbol,
                TokenKind::Caret,
                TokenKind::Minus,
                TokenKind::Integer
            ]
        );
    }

    #[test]
    fn test_letters_and_digits_split() {
        // No digits inside a symbol: "m2" is a symbol then an integer.
        assert_eq!(kinds("m2"), vec![TokenKind::Symbol, TokenKind::Integer]);
        assert_eq!(kinds("2m"), vec![TokenKind::Integer, TokenKind::Symbol]);
    }

    #[test]
    fn test_unrecognized_character() {
        assert_eq!(
            tokenize("kg.m"),
            Err(UnitError::Lexical { pos: 2, found: '.' })
        );
        assert_eq!(
            tokenize("m_s"),
            Err(UnitError::Lexical { pos: 1, found: '_' })
        );
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert_eq!(
            tokenize("m²"),
            Err(UnitError::Lexical { pos: 1, found: '²' })
        );
        assert!(matches!(
            tokenize("µg"),
            Err(UnitError::Lexical { pos: 0, .. })
        ));
    }
}
