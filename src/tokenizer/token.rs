//! # Mask Token
//!
//! Defines the possible tokens produced by scanning a field-mask string.
use std::fmt::Display;

/// The four punctuation characters that delimit names in a mask string.
/// Every other character belongs to a property name.
pub const TERMINALS: [char; 4] = [',', '/', '(', ')'];

/// A single token from a field-mask string.
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum MaskToken {
    /// A property name: a maximal run of non-terminal characters, with
    /// surrounding whitespace trimmed. The wildcard `*` is lexed as an
    /// ordinary name.
    Name(String),

    /// Sibling separator `,`
    Comma,

    /// Single-child path shorthand `/`
    Slash,

    /// Opening of an explicit child group `(`
    LParen,

    /// Closing of a child group `)`
    RParen,
}

impl MaskToken {
    /// Returns the terminal token for `ch`, or `None` if `ch` belongs to a
    /// name.
    #[must_use]
    pub const fn from_terminal(ch: char) -> Option<Self> {
        match ch {
            ',' => Some(Self::Comma),
            '/' => Some(Self::Slash),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }
}

impl Display for MaskToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaskToken::Name(name) => write!(f, "{name}"),
            MaskToken::Comma => write!(f, ","),
            MaskToken::Slash => write!(f, "/"),
            MaskToken::LParen => write!(f, "("),
            MaskToken::RParen => write!(f, ")"),
        }
    }
}
