/*!
# Filter Engine

Applies a parsed field mask to a JSON document, producing a new document
containing only the selected properties in their original order.

## Examples

The usual entry point is [`JsonMask`], which parses the mask once and can
then filter any number of documents:

```
use jsonmask::JsonMask;

let mask = JsonMask::new("a,c");
let filtered = mask.filter(r#"{"a":1,"b":2,"c":3}"#).unwrap();
assert_eq!(filtered, r#"{"a":1,"c":3}"#);
```

Masks never fail to parse; only the input document can be invalid:

```
use jsonmask::JsonMask;

let mask = JsonMask::new("a((("); // malformed, still usable
assert!(mask.filter("not json").is_err());
assert_eq!(mask.filter(r#"{"a":1,"b":2}"#).unwrap(), r#"{"a":1}"#);
```

## Ordering

Output member order always follows the document, never the mask. This relies
on `serde_json`'s `preserve_order` feature, which this crate enables.
*/
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

use crate::mask::{PropertyMask, parse_mask};
use crate::tokenizer::tokenize;

/// The string-equality discipline used for every name comparison during
/// filtering. Fixed at [`JsonMask`] construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Exact character-for-character equality (the default).
    #[default]
    Exact,
    /// Case-insensitive equality under Unicode simple case folding.
    IgnoreCase,
}

impl Comparison {
    /// Returns `true` if `a` and `b` compare equal under this mode.
    #[must_use]
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::IgnoreCase => a
                .chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase)),
        }
    }
}

/// A compiled field mask: the parsed selector tree plus the comparison mode.
///
/// Construction parses the mask string once; the resulting value is
/// immutable and may be shared freely across threads for concurrent filter
/// calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonMask {
    /// The top-level selector level
    selector: Vec<PropertyMask>,
    /// Name-equality mode for member matching
    comparison: Comparison,
}

impl JsonMask {
    /// Compile a mask string with exact name comparison.
    ///
    /// Mask parsing is best-effort and never fails; a malformed mask yields
    /// whatever selector tree could be built.
    #[must_use]
    pub fn new(mask: &str) -> Self {
        Self::with_comparison(mask, Comparison::Exact)
    }

    /// Compile a mask string with the given comparison mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonmask::{Comparison, JsonMask};
    ///
    /// let mask = JsonMask::with_comparison("A", Comparison::IgnoreCase);
    /// let out = mask.filter(r#"{"a":1,"b":2}"#).unwrap();
    /// assert_eq!(out, r#"{"a":1}"#);
    /// ```
    #[must_use]
    pub fn with_comparison(mask: &str, comparison: Comparison) -> Self {
        let selector = parse_mask(tokenize(mask));
        Self {
            selector,
            comparison,
        }
    }

    /// Construct from an already-built selector level.
    #[must_use]
    pub const fn from_selector(
        selector: Vec<PropertyMask>,
        comparison: Comparison,
    ) -> Self {
        Self {
            selector,
            comparison,
        }
    }

    /// The parsed top-level selector.
    #[must_use]
    pub fn selector(&self) -> &[PropertyMask] {
        &self.selector
    }

    /// Apply the mask to a parsed JSON value, producing the pruned value.
    ///
    /// This is the pure tree-to-tree core; [`filter`](Self::filter) wraps it
    /// with text parsing and serialization.
    #[must_use]
    pub fn apply(&self, value: &Value) -> Value {
        filter_value(value, &self.selector, self.comparison)
    }

    /// Filter a JSON document given as text, returning compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if `json` is not well-formed JSON.
    /// The mask itself cannot cause an error.
    pub fn filter(&self, json: &str) -> Result<String, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        serde_json::to_string(&self.apply(&value))
    }

    /// Filter a JSON document, writing compact JSON text to `writer`.
    ///
    /// Intended for integration with chunked/streaming response writers.
    /// The writer is not flushed; that remains the caller's responsibility
    /// on every exit path.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if `json` is not well-formed JSON or
    /// if writing to `writer` fails.
    pub fn filter_to_writer<W: Write>(
        &self,
        writer: W,
        json: &str,
    ) -> Result<(), serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        serde_json::to_writer(writer, &self.apply(&value))
    }
}

impl FromStr for JsonMask {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Display for JsonMask {
    /// The canonical mask string: selector nodes joined by `,`, with the
    /// `/` shorthand normalized to `(...)` groups.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .selector
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{joined}")
    }
}

/// Returns `true` if `selector` imposes no restriction at this level: it is
/// empty or consists solely of `*` wildcards. A pass-through selector
/// propagates unchanged to all descendants of the matched subtree.
fn is_pass_through(selector: &[PropertyMask]) -> bool {
    selector.iter().all(PropertyMask::is_wildcard)
}

/// Recursively filter `value` against one selector level.
fn filter_value(
    value: &Value,
    selector: &[PropertyMask],
    comparison: Comparison,
) -> Value {
    match value {
        Value::Object(members) => {
            let mut kept = Map::new();
            if is_pass_through(selector) {
                for (key, member) in members {
                    kept.insert(
                        key.clone(),
                        descend(member, selector, comparison),
                    );
                }
            } else {
                for (key, member) in members {
                    // Linear scan in parse order so that duplicate selector
                    // names resolve to the first occurrence.
                    let matched = selector
                        .iter()
                        .find(|node| comparison.matches(&node.name, key));
                    if let Some(node) = matched {
                        kept.insert(
                            key.clone(),
                            descend(member, &node.children, comparison),
                        );
                    }
                }
            }
            Value::Object(kept)
        }
        // Arrays do not introduce a naming level; every element is filtered
        // with the same selector.
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| filter_value(item, selector, comparison))
                .collect(),
        ),
        // Scalars pass through; the selector is irrelevant here.
        scalar => scalar.clone(),
    }
}

/// Recurse into a kept member if it is a container; emit scalars as-is
/// regardless of the remaining selector.
fn descend(
    value: &Value,
    selector: &[PropertyMask],
    comparison: Comparison,
) -> Value {
    match value {
        Value::Object(_) | Value::Array(_) => {
            filter_value(value, selector, comparison)
        }
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filter(mask: &str, json: &str) -> String {
        JsonMask::new(mask).filter(json).expect("valid JSON input")
    }

    #[test]
    fn identity_on_selected_property() {
        let json = r#"{"a":"value"}"#;
        assert_eq!(filter("a", json), json);
    }

    #[test]
    fn simple_property() {
        assert_eq!(
            filter("a", r#"{"a":"value a","b":"value b"}"#),
            r#"{"a":"value a"}"#
        );
    }

    #[test]
    fn multiple_properties() {
        assert_eq!(
            filter("a,c", r#"{"a":"value a","b":"value b","c":"value c"}"#),
            r#"{"a":"value a","c":"value c"}"#
        );
    }

    #[test]
    fn output_order_follows_document_not_mask() {
        assert_eq!(
            filter("c,a", r#"{"a":1,"b":2,"c":3}"#),
            r#"{"a":1,"c":3}"#
        );
    }

    #[test]
    fn sub_properties() {
        let json = r#"{"a":{"b":"value b","c":"value c","d":"value d"}}"#;
        assert_eq!(filter("a(c)", json), r#"{"a":{"c":"value c"}}"#);
    }

    #[test]
    fn slash_path_equals_nested_groups() {
        let json = r#"{"a":{"b":{"c":1,"d":2},"e":3}}"#;
        let expected = r#"{"a":{"b":{"c":1}}}"#;
        assert_eq!(filter("a/b/c", json), expected);
        assert_eq!(filter("a(b(c))", json), expected);
    }

    #[test]
    fn empty_mask_is_identity() {
        let json = r#"{"a":1,"b":{"c":[1,2,{"d":null}]},"e":true}"#;
        assert_eq!(filter("", json), json);
    }

    #[test]
    fn wildcard_mask_is_identity() {
        let json = r#"{"a":1,"b":{"c":2}}"#;
        assert_eq!(filter("*", json), json);
    }

    #[test]
    fn empty_children_pass_subtree_through() {
        // `a` with no children keeps a's whole subtree unfiltered.
        let json = r#"{"a":{"b":1,"c":{"d":2}},"e":3}"#;
        assert_eq!(filter("a", json), r#"{"a":{"b":1,"c":{"d":2}}}"#);
    }

    #[test]
    fn wildcard_mixed_with_literal_degrades_to_literal() {
        // `*` is compared character-for-character once a literal is present
        // at the same level, so only the literal matches.
        assert_eq!(filter("*,a", r#"{"a":1,"b":2}"#), r#"{"a":1}"#);
    }

    #[test]
    fn case_sensitive_by_default() {
        assert_eq!(filter("A", r#"{"a":1,"b":2}"#), "{}");
    }

    #[test]
    fn ignore_case_comparison() {
        let mask = JsonMask::with_comparison("A", Comparison::IgnoreCase);
        assert_eq!(
            mask.filter(r#"{"a":1,"b":2}"#).unwrap(),
            r#"{"a":1}"#
        );
    }

    #[test]
    fn ignore_case_is_not_ascii_only() {
        let mask = JsonMask::with_comparison("ÉTÉ", Comparison::IgnoreCase);
        assert_eq!(mask.filter(r#"{"été":1,"hiver":2}"#).unwrap(), "{\"été\":1}");
    }

    #[test]
    fn array_fan_out() {
        let json = r#"[{"a":1,"b":2},{"a":3,"b":4},{"b":5}]"#;
        assert_eq!(filter("a", json), r#"[{"a":1},{"a":3},{}]"#);
    }

    #[test]
    fn array_preserves_length_and_order() {
        let json = r#"{"items":[{"a":1,"b":2},{"b":3},{"a":4}]}"#;
        assert_eq!(
            filter("items(a)", json),
            r#"{"items":[{"a":1},{},{"a":4}]}"#
        );
    }

    #[test]
    fn nested_arrays() {
        let json = r#"[[{"a":1,"b":2}],[{"a":3}]]"#;
        assert_eq!(filter("a", json), r#"[[{"a":1}],[{"a":3}]]"#);
    }

    #[test]
    fn scalar_document_passes_through() {
        assert_eq!(filter("a", "42"), "42");
        assert_eq!(filter("a", "\"text\""), "\"text\"");
        assert_eq!(filter("", "null"), "null");
    }

    #[test]
    fn duplicate_names_first_match_wins() {
        // First `a` has no children (pass-through); the later `a(b)` never
        // applies.
        let json = r#"{"a":{"b":1,"c":2}}"#;
        assert_eq!(filter("a,a(b)", json), json);
        // Reversed, the restrictive occurrence wins.
        assert_eq!(filter("a(b),a", json), r#"{"a":{"b":1}}"#);
    }

    #[test]
    fn children_ignored_on_scalar_member() {
        // `a` is a scalar, so `a(b)` still emits it unchanged.
        assert_eq!(filter("a(b)", r#"{"a":1,"b":2}"#), r#"{"a":1}"#);
    }

    #[test]
    fn malformed_masks_never_fail() {
        let json = r#"{"a":{"b":1},"c":2}"#;
        for mask in ["a)", "a/", "a((", ")(", ",,,", "a(b", "/a", "a//b"] {
            let out = JsonMask::new(mask).filter(json);
            assert!(out.is_ok(), "mask {mask:?} failed: {out:?}");
        }
    }

    #[test]
    fn idempotence() {
        let json = r#"{"a":{"b":1,"c":2},"d":[{"e":3,"f":4}],"g":5}"#;
        for mask in ["a(b),d(e)", "a", "", "*", "a/b,d"] {
            let m = JsonMask::new(mask);
            let once = m.filter(json).unwrap();
            let twice = m.filter(&once).unwrap();
            assert_eq!(once, twice, "mask {mask:?} not idempotent");
        }
    }

    #[test]
    fn invalid_document_is_an_error() {
        assert!(JsonMask::new("a").filter("{not json").is_err());
        assert!(JsonMask::new("").filter("").is_err());
    }

    #[test]
    fn filter_to_writer_matches_filter() {
        let mask = JsonMask::new("a(b)");
        let json = r#"{"a":{"b":1,"c":2},"d":3}"#;
        let mut buf = Vec::new();
        mask.filter_to_writer(&mut buf, json).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            mask.filter(json).unwrap()
        );
    }

    #[test]
    fn filter_to_writer_propagates_parse_error() {
        let mut buf = Vec::new();
        assert!(
            JsonMask::new("a")
                .filter_to_writer(&mut buf, "oops")
                .is_err()
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn apply_on_value() {
        let mask = JsonMask::new("a");
        let value = json!({"a": 1, "b": 2});
        assert_eq!(mask.apply(&value), json!({"a": 1}));
    }

    #[test]
    fn parse_via_from_str() {
        let mask: JsonMask = "a(b,c)".parse().unwrap();
        assert_eq!(mask.to_string(), "a(b,c)");
    }

    #[test]
    fn display_normalizes_slash_shorthand() {
        let mask = JsonMask::new("a/b/c,d");
        assert_eq!(mask.to_string(), "a(b(c)),d");
    }

    #[test]
    fn comparison_matches() {
        assert!(Comparison::Exact.matches("a", "a"));
        assert!(!Comparison::Exact.matches("A", "a"));
        assert!(Comparison::IgnoreCase.matches("A", "a"));
        assert!(Comparison::IgnoreCase.matches("ÉTÉ", "été"));
        assert!(!Comparison::IgnoreCase.matches("a", "b"));
    }
}
