//! # Base Unit Symbol Table
//!
//! The closed set of atomic unit symbols a unit expression may mention. The
//! position of a symbol in [`SYMBOLS`] is its index in every exponent vector,
//! so the order here is part of the crate's contract and MUST NOT change.
//!
//! | Index | Symbol | Quantity                 |
//! |-------|--------|--------------------------|
//! | 0     | `m`    | length (meter)           |
//! | 1     | `kg`   | mass (kilogram)          |
//! | 2     | `s`    | time (second)            |
//! | 3     | `A`    | current (ampere)         |
//! | 4     | `K`    | temperature (kelvin)     |
//! | 5     | `cd`   | luminous intensity       |
//! | 6     | `mol`  | amount of substance      |
//! | 7     | `Hz`   | frequency (hertz)        |
//! | 8     | `rad`  | plane angle (radian)     |
//! | 9     | `Jy`   | spectral flux (jansky)   |
//! | 10    | `sr`   | solid angle (steradian)  |
//! | 11    | `deg`  | plane angle (degree)     |
//!
//! Symbols are atomic: `Hz` is not reduced to `s^-1` and `deg` is not related
//! to `rad`. Lookup is case-sensitive.
//!
//! ```rust
//! use dimvec::Symbol;
//!
//! let kg = Symbol::lookup("kg").unwrap();
//! assert_eq!(kg.index(), 1);
//! assert_eq!(kg.name(), "kg");
//! assert!(Symbol::lookup("KG").is_none());
//! ```

use std::fmt;

use phf::phf_map;

/// Number of base symbols, and so the length of every exponent vector.
pub const NUM_SYMBOLS: usize = 12;

/// One signed exponent per base symbol, in table order.
pub type Exponents = [i64; NUM_SYMBOLS];

/// Base symbols in index order.
pub static SYMBOLS: [&str; NUM_SYMBOLS] = [
    "m", "kg", "s", "A", "K", "cd", "mol", "Hz", "rad", "Jy", "sr", "deg",
];

// Kept in sync with SYMBOLS; checked by test_index_matches_table.
static SYMBOL_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "m" => 0,
    "kg" => 1,
    "s" => 2,
    "A" => 3,
    "K" => 4,
    "cd" => 5,
    "mol" => 6,
    "Hz" => 7,
    "rad" => 8,
    "Jy" => 9,
    "sr" => 10,
    "deg" => 11,
};

/// A recognized base unit symbol.
///
/// A `Symbol` can only be obtained through [`Symbol::lookup`],
/// [`Symbol::from_index`] or [`Symbol::all`], so its index is always in
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(usize);

impl Symbol {
    pub const METER: Symbol = Symbol(0);
    pub const KILOGRAM: Symbol = Symbol(1);
    pub const SECOND: Symbol = Symbol(2);
    pub const AMPERE: Symbol = Symbol(3);
    pub const KELVIN: Symbol = Symbol(4);
    pub const CANDELA: Symbol = Symbol(5);
    pub const MOLE: Symbol = Symbol(6);
    pub const HERTZ: Symbol = Symbol(7);
    pub const RADIAN: Symbol = Symbol(8);
    pub const JANSKY: Symbol = Symbol(9);
    pub const STERADIAN: Symbol = Symbol(10);
    pub const DEGREE: Symbol = Symbol(11);

    /// Finds the symbol spelled exactly `name`.
    pub fn lookup(name: &str) -> Option<Symbol> {
        SYMBOL_INDEX.get(name).copied().map(Symbol)
    }

    /// Returns the symbol at `index`, if the table has one there.
    pub fn from_index(index: usize) -> Option<Symbol> {
        (index < NUM_SYMBOLS).then_some(Symbol(index))
    }

    /// All symbols in table order.
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..NUM_SYMBOLS).map(Symbol)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn name(self) -> &'static str {
        SYMBOLS[self.0]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
