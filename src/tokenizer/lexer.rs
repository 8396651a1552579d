//! # Mask Lexer
//!
//! Splits a field-mask string into a flat sequence of tokens: property names
//! and the four terminal characters `,` `/` `(` `)`. Lexing is infallible;
//! any input string yields some token sequence.
use crate::tokenizer::MaskToken;

/// A lexer that scans a mask string into tokens, accumulating name
/// characters until a terminal flushes them.
struct Lexer {
    /// Tokens emitted so far
    tokens: Vec<MaskToken>,
    /// Name characters seen since the last terminal
    pending: String,
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            pending: String::new(),
        }
    }

    /// Consume one input character, emitting tokens as terminals are hit.
    fn scan(&mut self, ch: char) {
        match MaskToken::from_terminal(ch) {
            Some(terminal) => {
                self.flush_pending();
                self.tokens.push(terminal);
            }
            None => self.pending.push(ch),
        }
    }

    /// Emit the pending buffer as a `Name` token. Surrounding whitespace is
    /// cosmetic and trimmed; a blank buffer is dropped without a token.
    fn flush_pending(&mut self) {
        let name = self.pending.trim();
        if !name.is_empty() {
            self.tokens.push(MaskToken::Name(name.to_string()));
        }
        self.pending.clear();
    }

    fn finish(mut self) -> Vec<MaskToken> {
        self.flush_pending();
        self.tokens
    }
}

/// Tokenize a field-mask string into a sequence of [`MaskToken`]s.
///
/// # Examples
///
/// ```
/// use jsonmask::tokenizer::{MaskToken, tokenize};
///
/// let tokens = tokenize("a,b(c)");
/// assert_eq!(
///     tokens,
///     vec![
///         MaskToken::Name("a".to_string()),
///         MaskToken::Comma,
///         MaskToken::Name("b".to_string()),
///         MaskToken::LParen,
///         MaskToken::Name("c".to_string()),
///         MaskToken::RParen,
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(mask: &str) -> Vec<MaskToken> {
    let mut lexer = Lexer::new();
    for ch in mask.chars() {
        lexer.scan(ch);
    }
    lexer.finish()
}
