//! Reserved symbol codes for line scanning

use serde::{Deserialize, Serialize};

/// Symbol code as it appears on a line
pub type SymbolCode = i32;

/// Wildcard code, substitutes for any winning symbol
pub const WILDCARD: SymbolCode = 0;

/// Winning symbol codes, in canonical order
pub const WINNING_SYMBOLS: [SymbolCode; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Losing symbol codes, in canonical order
pub const LOSING_SYMBOLS: [SymbolCode; 6] = [10, 11, 12, 13, 14, 15];

/// Symbol classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolClass {
    /// Code 0
    Wildcard,
    /// Codes 1..=9
    Winning,
    /// Codes 10..=15
    Losing,
    /// Anything else; matches nothing
    Unknown,
}

impl SymbolClass {
    pub fn of(code: SymbolCode) -> Self {
        if code == WILDCARD {
            Self::Wildcard
        } else if is_winning(code) {
            Self::Winning
        } else if is_losing(code) {
            Self::Losing
        } else {
            Self::Unknown
        }
    }
}

pub fn is_winning(code: SymbolCode) -> bool {
    WINNING_SYMBOLS.contains(&code)
}

pub fn is_losing(code: SymbolCode) -> bool {
    LOSING_SYMBOLS.contains(&code)
}

pub fn is_wildcard(code: SymbolCode) -> bool {
    code == WILDCARD
}
