pub mod exponent;
pub mod parse;
pub mod reduce;
pub mod token;
pub mod units;

pub use exponent::ExpExpr;
pub use parse::{evaluate_exponent, parse_exponents, parse_expression};
pub use reduce::reduce;
pub use token::{Token, TokenKind, tokenize};
pub use units::UnitExpr;
