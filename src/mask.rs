//! # Field-Mask DSL
//!
//! A small selector language describing which JSON properties to keep:
//! - Sibling selection with `,` (e.g., `"a,b"`)
//! - Explicit child groups with `(...)` (e.g., `"a(b,c)"`)
//! - Single-child path shorthand with `/` (e.g., `"a/b/c"`)
//! - Pass-through wildcard `*`
//!
//! Parsing is permissive by design: any input string, however malformed,
//! yields some selector tree rather than an error.

pub mod ast;
pub mod parser;

// Re-exports
pub use ast::{MaskBuilder, PropertyMask, WILDCARD};
pub use parser::parse_mask;
