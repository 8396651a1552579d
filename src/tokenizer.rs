//! # Mask Tokenizer
//!
//! Splits a field-mask string into a token stream of names and terminals.
pub mod lexer;
pub mod token;

// Re-exports
pub use lexer::tokenize;
pub use token::{MaskToken, TERMINALS};
