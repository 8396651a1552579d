/*!
# Mask Parser

Recursive-descent parser turning a [`MaskToken`] sequence into a tree of
[`PropertyMask`] selector nodes.

## Grammar

```text
mask          = selectorLevel ;
selectorLevel = [ property { "," property } ] ;
property      = NAME , [ "(" selectorLevel ")" | "/" property ] ;
```

`(...)` names a set of sibling children explicitly (`a(b,c)` selects `a.b`
and `a.c`); `/` is sugar for a single nested property, chainable into a path
(`a/b/c` is equivalent to `a(b(c))`).

## Errors

There are none. The parser is permissive by design: an unmatched `)`, a
dangling `/`, or a stray separator degrades to whatever selector tree could
be built, never a failure. A malformed mask should narrow or pass through
data, not break the caller.
*/
use crate::mask::PropertyMask;
use crate::tokenizer::MaskToken;

/// The grouping construct a selector level was opened under, encoding the
/// level's termination contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupKind {
    /// Top level, or the implicit child level right after a name: ends at
    /// `,`, `)`, or end of input.
    None,
    /// Inside `(...)`: same terminators, arbitrarily many siblings.
    Paren,
    /// After `/`: ends as soon as one property has been parsed.
    Slash,
}

/// A consuming cursor over the token sequence, shared by reference across
/// the recursive parse calls.
struct Cursor {
    tokens: Vec<MaskToken>,
    position: usize,
}

impl Cursor {
    const fn new(tokens: Vec<MaskToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Consume and return the next token, if any.
    fn next(&mut self) -> Option<MaskToken> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }
}

/// Parse a token sequence into the top-level selector.
///
/// # Examples
///
/// ```
/// use jsonmask::mask::{PropertyMask, parse_mask};
/// use jsonmask::tokenizer::tokenize;
///
/// let level = parse_mask(tokenize("a,b(c)"));
/// assert_eq!(level, vec![
///     PropertyMask::leaf("a"),
///     PropertyMask::new("b", vec![PropertyMask::leaf("c")]),
/// ]);
/// ```
#[must_use]
pub fn parse_mask(tokens: Vec<MaskToken>) -> Vec<PropertyMask> {
    let mut cursor = Cursor::new(tokens);
    parse_level(&mut cursor, GroupKind::None)
}

/// Parse one selector level.
///
/// Each parsed name recursively parses the *next* level as its children;
/// that child call is what consumes a `(`/`/` child spec when present, or
/// returns immediately on a separator. Terminators (`,`, `)`) are consumed
/// by the innermost pending level, which is exactly where the enclosing
/// construct ends.
fn parse_level(cursor: &mut Cursor, group: GroupKind) -> Vec<PropertyMask> {
    let mut level: Vec<PropertyMask> = Vec::new();

    while let Some(token) = cursor.next() {
        match token {
            MaskToken::Name(name) => {
                let children = parse_level(cursor, GroupKind::None);
                level.push(PropertyMask::new(name, children));

                // `/` takes exactly one property, then its level closes.
                if group == GroupKind::Slash {
                    return level;
                }
            }
            // Sibling boundary: this child slot is done.
            MaskToken::Comma => return level,
            // Group closed. A stray `)` with no open group terminates the
            // level the same way (tolerated, not an error).
            MaskToken::RParen => return level,
            MaskToken::LParen => {
                level.extend(parse_level(cursor, GroupKind::Paren));
                return level;
            }
            MaskToken::Slash => {
                level.extend(parse_level(cursor, GroupKind::Slash));
                return level;
            }
        }
    }

    level
}
