/*!
# Selector AST and Builder

Defines the selector node built from a field-mask string and a fluent API for
constructing selector levels programmatically.

# Examples

Construct the selector for the mask `"a,b(c)"` by hand:

```
use jsonmask::mask::{MaskBuilder, PropertyMask};

let level = MaskBuilder::new()
    .property("a")
    .group("b", MaskBuilder::new().property("c").build())
    .build();

assert_eq!(level, vec![
    PropertyMask::leaf("a"),
    PropertyMask::new("b", vec![PropertyMask::leaf("c")]),
]);
```
*/
use std::fmt::Display;

/// The reserved selector name meaning "keep every member at this level."
/// Only effective when it is the sole kind of node at a level; mixed with
/// literal names it is compared character-for-character and never matches a
/// real key.
pub const WILDCARD: &str = "*";

/// One node of a parsed field mask: a property name plus the selector level
/// to apply to the matched member's value.
///
/// An empty `children` list means pass-through: the matched subtree is
/// emitted without further filtering. A *selector level* is an ordered
/// sequence of sibling nodes; order decides first-match-wins lookup for
/// duplicate names but never affects output order, which always follows the
/// document.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PropertyMask {
    /// The literal or wildcard property name this node selects
    pub name: String,
    /// The selector level for the matched member's value, empty for
    /// pass-through
    pub children: Vec<PropertyMask>,
}

impl PropertyMask {
    /// Construct a node with the given child level.
    pub fn new<T: Into<String>>(name: T, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Construct a pass-through node with no children.
    pub fn leaf<T: Into<String>>(name: T) -> Self {
        Self::new(name, Vec::new())
    }

    /// Returns `true` if this node is the `*` wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.name == WILDCARD
    }
}

impl Display for PropertyMask {
    /// Canonical form: `name` for a leaf, `name(child,child)` otherwise.
    /// The `/` shorthand is normalized away, so `a/b` displays as `a(b)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.children.is_empty() {
            let joined = self
                .children
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            write!(f, "({joined})")?;
        }
        Ok(())
    }
}

/// Fluent builder for a selector level.
pub struct MaskBuilder {
    /// The sibling nodes accumulated so far
    level: Vec<PropertyMask>,
}

impl MaskBuilder {
    /// Creates a new builder with an empty (pass-through) level.
    ///
    /// # Examples
    /// ```
    /// use jsonmask::mask::MaskBuilder;
    /// assert!(MaskBuilder::new().build().is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { level: Vec::new() }
    }

    /// Adds a pass-through property to the level.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonmask::mask::{MaskBuilder, PropertyMask};
    /// let level = MaskBuilder::new().property("a").build();
    /// assert_eq!(level, vec![PropertyMask::leaf("a")]);
    /// ```
    #[must_use]
    pub fn property(mut self, name: &str) -> Self {
        self.level.push(PropertyMask::leaf(name));
        self
    }

    /// Adds a property with an explicit child level, as written `name(...)`
    /// in mask syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonmask::mask::{MaskBuilder, PropertyMask};
    /// // Mask: "a(b)"
    /// let level = MaskBuilder::new()
    ///     .group("a", MaskBuilder::new().property("b").build())
    ///     .build();
    /// assert_eq!(level[0].children, vec![PropertyMask::leaf("b")]);
    /// ```
    #[must_use]
    pub fn group(mut self, name: &str, children: Vec<PropertyMask>) -> Self {
        self.level.push(PropertyMask::new(name, children));
        self
    }

    /// Adds the `*` wildcard to the level.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonmask::mask::MaskBuilder;
    /// let level = MaskBuilder::new().wildcard().build();
    /// assert!(level[0].is_wildcard());
    /// ```
    #[must_use]
    pub fn wildcard(mut self) -> Self {
        self.level.push(PropertyMask::leaf(WILDCARD));
        self
    }

    /// Return the built selector level.
    #[must_use]
    pub fn build(self) -> Vec<PropertyMask> {
        self.level
    }
}

impl Default for MaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}
