//! Recursive style-rule transformation.
//!
//! A style rule is a nested mapping from keys to either leaf values or
//! further mappings. [`transform_vars`] walks the tree and rewrites both
//! sides: keys carrying the `$$` sigil become namespaced custom-property
//! names, and leaf values have their pseudo-variable references resolved
//! into `var(...)` expressions, including `($$a, $$b)` fallback chains.
//!
//! # Example
//!
//! ```rust
//! use varspace::{transform_json, Namespace};
//! use serde_json::json;
//!
//! let ns = Namespace::default();
//! let rule = json!({
//!     "$$depth": "1px",
//!     "boxShadow": "0 0 0 $$depth",
//!     "&:focus": { "outline": "($$focus, $$accent)" },
//! });
//!
//! let out = transform_json(&ns, "card", &rule).unwrap();
//! assert_eq!(out["--rd-card-depth"], json!("1px"));
//! assert_eq!(out["boxShadow"], json!("0 0 0 var(--rd-card-depth)"));
//! assert_eq!(
//!     out["&:focus"]["outline"],
//!     json!("var(--rd-card-focus, var(--rd-card-accent))")
//! );
//! ```
//!
//! # Known limitation
//!
//! A leaf entry under a key literally named `colors` is dropped from the
//! output: the color transform hook is unimplemented and callers must not
//! assume colors are prefixed. A nested mapping under `colors` still
//! recurses normally.
//!
//! # Failure semantics
//!
//! The transform itself never fails; malformed references (unbalanced
//! parentheses, empty identifiers) degrade to best-effort string
//! reconstruction. Errors exist only at the typed boundary:
//! [`StyleNode::try_from`] rejects booleans, nulls, and arrays with
//! [`Error::InvalidInput`](crate::Error::InvalidInput).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use varspace_lexer::{split_fallback_groups, split_sigil_tokens, Fragment, Piece, SIGIL};

use crate::error::{Error, Result};
use crate::namespace::Namespace;

/// A nested style-rule mapping.
pub type StyleRule = BTreeMap<String, StyleNode>;

/// A node in a style-rule tree: either a leaf value or a nested group.
///
/// Mirrors the two shapes a rule entry can take, dispatching recursion on
/// the variant rather than on a runtime type check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleNode {
    /// A nested mapping, processed recursively.
    Group(StyleRule),
    /// A leaf value, subject to the value transform.
    Leaf(String),
}

impl From<&str> for StyleNode {
    fn from(value: &str) -> Self {
        StyleNode::Leaf(value.to_string())
    }
}

impl From<String> for StyleNode {
    fn from(value: String) -> Self {
        StyleNode::Leaf(value)
    }
}

impl From<StyleRule> for StyleNode {
    fn from(rule: StyleRule) -> Self {
        StyleNode::Group(rule)
    }
}

impl TryFrom<&Value> for StyleNode {
    type Error = Error;

    /// Converts dynamic JSON into a typed node.
    ///
    /// Strings and numbers become leaves, objects become groups. Booleans,
    /// nulls, and arrays have no meaning in a style rule and are rejected.
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(StyleNode::Leaf(s.clone())),
            Value::Number(n) => Ok(StyleNode::Leaf(n.to_string())),
            Value::Object(map) => {
                let mut rule = StyleRule::new();
                for (key, val) in map {
                    rule.insert(key.clone(), StyleNode::try_from(val)?);
                }
                Ok(StyleNode::Group(rule))
            }
            other => Err(Error::InvalidInput(format!(
                "style rule values must be strings, numbers, or nested maps, got {}",
                type_name(other)
            ))),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a map",
    }
}

/// Resolves pseudo-variable references in a single style-rule value.
///
/// Fallback groups fold into nested `var(a, var(b, ...))` chains with
/// left-to-right priority; standalone sigil tokens wrap as `var(name)`;
/// literal text passes through trimmed. Fragments are joined with a
/// single space.
///
/// ```rust
/// use varspace::{prefix_style_value, Namespace};
///
/// let ns = Namespace::default();
/// assert_eq!(prefix_style_value(&ns, "card", "$$foo"), "var(--rd-card-foo)");
/// assert_eq!(
///     prefix_style_value(&ns, "card", "($$foo, $$bar)"),
///     "var(--rd-card-foo, var(--rd-card-bar))"
/// );
/// ```
pub fn prefix_style_value(ns: &Namespace, component: &str, value: &str) -> String {
    let mut rendered = Vec::new();

    for fragment in split_fallback_groups(value) {
        let text = match fragment {
            Fragment::Group(contents) => contents,
            Fragment::Literal(literal) => literal,
        };
        // a comma-separated run that leads with the sigil is a fallback
        // chain whether or not it was parenthesized
        if text.starts_with(SIGIL) && text.contains(',') {
            rendered.push(fold_fallback_chain(ns, component, text));
        } else {
            rendered.push(wrap_single_vars(ns, component, text));
        }
    }

    rendered.join(" ")
}

/// Folds a comma-separated fallback chain into nested `var()` expressions.
///
/// Items are trimmed and folded right-to-left so the first-listed variable
/// ends up outermost. Items without the sigil pass through as literal
/// fallback terminals.
fn fold_fallback_chain(ns: &Namespace, component: &str, chain: &str) -> String {
    let items: Vec<&str> = chain.split(',').map(str::trim).collect();

    let mut acc = String::new();
    for (folded, item) in items.into_iter().rev().enumerate() {
        acc = if !item.starts_with(SIGIL) {
            item.to_string()
        } else if folded == 0 {
            format!("var({})", ns.resolve_token(component, item))
        } else {
            format!("var({}, {})", ns.resolve_token(component, item), acc)
        };
    }
    acc
}

/// Wraps standalone sigil tokens in `var()`, trimming interleaved text.
fn wrap_single_vars(ns: &Namespace, component: &str, text: &str) -> String {
    let pieces: Vec<String> = split_sigil_tokens(text)
        .into_iter()
        .map(|piece| match piece {
            Piece::Var(token) => format!("var({})", ns.resolve_token(component, token)),
            Piece::Text(literal) => literal.trim().to_string(),
        })
        .collect();
    pieces.join(" ")
}

/// Recursively transforms a style rule's keys and leaf values.
///
/// Nested groups recurse under the same component name. Keys go through
/// the sigil transform ([`Namespace::resolve_token`]); leaf values go
/// through [`prefix_style_value`]. Leaf entries under a `colors` key are
/// dropped (see the module docs).
pub fn transform_vars(ns: &Namespace, component: &str, rule: &StyleRule) -> StyleRule {
    let mut out = StyleRule::new();

    for (key, node) in rule {
        match node {
            StyleNode::Group(inner) => {
                out.insert(
                    ns.resolve_token(component, key),
                    StyleNode::Group(transform_vars(ns, component, inner)),
                );
            }
            StyleNode::Leaf(_) if key == "colors" => {
                // TODO: transform colors function (entries are dropped
                // until the hook exists)
            }
            StyleNode::Leaf(value) => {
                out.insert(
                    ns.resolve_token(component, key),
                    StyleNode::Leaf(prefix_style_value(ns, component, value)),
                );
            }
        }
    }

    out
}

/// Transforms a dynamic JSON style rule.
///
/// Convenience wrapper over [`transform_vars`] for callers holding
/// untyped data: the value must be a JSON object; the result is a JSON
/// object of the same shape.
pub fn transform_json(ns: &Namespace, component: &str, value: &Value) -> Result<Value> {
    let rule = match StyleNode::try_from(value)? {
        StyleNode::Group(rule) => rule,
        StyleNode::Leaf(_) => {
            return Err(Error::InvalidInput(
                "top-level style rule must be a map".to_string(),
            ))
        }
    };
    Ok(serde_json::to_value(transform_vars(ns, component, &rule))?)
}
