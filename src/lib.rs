/*!
# `jsonmask` Library

Field-mask filtering for JSON documents: parse a small selector language
(e.g., `"a,b(c)"`) once, then prune arbitrary JSON documents down to the
selected properties, preserving their original order.
*/

pub mod commands;
pub mod filter;
pub mod mask;
pub mod tokenizer;
pub mod utils;

// Re-exports
pub use filter::{Comparison, JsonMask};
pub use mask::{MaskBuilder, PropertyMask};
