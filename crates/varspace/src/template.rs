//! Tagged-template custom-property extraction.
//!
//! The original authoring surface for component variables is a tagged
//! template: ordered literal segments interleaved with interpolated
//! values, holding one `name: value` declaration per line:
//!
//! ```text
//! --font-size: 12px,
//! --border-width: 1px,
//! ```
//!
//! [`extract_set_vars`] turns that text into a mapping from namespaced
//! custom-property name to value, ready to be merged into whatever
//! structure the style-rendering collaborator uses.
//!
//! # Example
//!
//! ```rust
//! use varspace::{extract_set_vars, Namespace, VarValue};
//!
//! let ns = Namespace::default();
//! let vars = extract_set_vars(&ns, "card", "--font-size: 12px,\n--border-width: 1px,");
//!
//! assert_eq!(vars.len(), 2);
//! assert_eq!(vars["--rd-card-font-size"], VarValue::Value("12px".into()));
//! assert_eq!(vars["--rd-card-border-width"].as_str(), Some("1px"));
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use varspace_lexer::parse_declaration;

use crate::namespace::Namespace;

/// The value side of an extracted declaration.
///
/// A line without a colon produces [`VarValue::Missing`], which serializes
/// as `null`. Downstream consumers may treat a missing value differently
/// from an empty one, so the two are never conflated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VarValue {
    /// No value was given (the line carried no colon).
    Missing,
    /// The trimmed value text.
    Value(String),
}

impl VarValue {
    /// Returns the value text, or `None` when missing.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VarValue::Missing => None,
            VarValue::Value(v) => Some(v),
        }
    }

    /// True when the declaration carried no value.
    pub fn is_missing(&self) -> bool {
        matches!(self, VarValue::Missing)
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        VarValue::Value(value.to_string())
    }
}

/// Concatenates a tagged template's literal segments and interpolated
/// values, interleaved in template order.
///
/// Values are formatted the way template substitution formats them:
/// strings bare, numbers and booleans via their display form, null as
/// empty, arrays and objects as JSON.
pub fn compose_template(strings: &[&str], values: &[Value]) -> String {
    let mut out = String::new();
    for (i, segment) in strings.iter().enumerate() {
        out.push_str(segment);
        if let Some(value) = values.get(i) {
            out.push_str(&format_value(value));
        }
    }
    // values beyond the last segment still land in the output
    for value in values.iter().skip(strings.len()) {
        out.push_str(&format_value(value));
    }
    out
}

/// Formats an interpolated value as template text.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Extracts namespaced variables from set-vars template text.
///
/// The text is trimmed and split into lines; each non-empty line is
/// parsed as a `name: value` declaration (one leading `--` and one
/// trailing comma removed, split on the first colon) and namespaced under
/// `component`. Later lines with a duplicate name overwrite earlier ones.
/// An empty template yields an empty mapping.
pub fn extract_set_vars(
    ns: &Namespace,
    component: &str,
    template: &str,
) -> BTreeMap<String, VarValue> {
    let mut vars = BTreeMap::new();

    for line in template.trim().lines() {
        let Some(decl) = parse_declaration(line) else {
            continue;
        };
        let name = ns.var_name(component, decl.name);
        let value = match decl.value {
            Some(text) => VarValue::Value(text.to_string()),
            None => VarValue::Missing,
        };
        vars.insert(name, value);
    }

    vars
}

/// [`extract_set_vars`] over tagged-template parts.
///
/// `strings` are the literal segments, `values` the interpolations, in
/// template order.
pub fn extract_set_vars_parts(
    ns: &Namespace,
    component: &str,
    strings: &[&str],
    values: &[Value],
) -> BTreeMap<String, VarValue> {
    extract_set_vars(ns, component, &compose_template(strings, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_two_lines() {
        let ns = Namespace::default();
        let vars = extract_set_vars(&ns, "card", "--foo: 12px,\n--bar: 1px,");

        assert_eq!(vars.len(), 2);
        assert_eq!(vars["--rd-card-foo"].as_str(), Some("12px"));
        assert_eq!(vars["--rd-card-bar"].as_str(), Some("1px"));
    }

    #[test]
    fn test_extract_single_line_without_comma() {
        let ns = Namespace::default();
        let vars = extract_set_vars(&ns, "card", "--font-size: 12px");
        assert_eq!(vars["--rd-card-font-size"].as_str(), Some("12px"));
    }

    #[test]
    fn test_empty_template_yields_empty_mapping() {
        let ns = Namespace::default();
        assert!(extract_set_vars(&ns, "card", "").is_empty());
        assert!(extract_set_vars(&ns, "card", "  \n  \n").is_empty());
    }

    #[test]
    fn test_missing_value_is_explicit() {
        let ns = Namespace::default();
        let vars = extract_set_vars(&ns, "card", "--foo: 1px,\n--bar,");

        assert!(vars["--rd-card-bar"].is_missing());
        assert_eq!(vars["--rd-card-bar"].as_str(), None);
        // missing is not the same as empty
        assert_ne!(vars["--rd-card-bar"], VarValue::Value(String::new()));
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let ns = Namespace::default();
        let vars = extract_set_vars(&ns, "card", "--foo: 1px,\n--foo: 2px,");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars["--rd-card-foo"].as_str(), Some("2px"));
    }

    #[test]
    fn test_indented_lines() {
        let ns = Namespace::default();
        let template = "\n    --font-size: 12px,\n    --border-width: 1px,\n  ";
        let vars = extract_set_vars(&ns, "card", template);
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["--rd-card-font-size"].as_str(), Some("12px"));
    }

    #[test]
    fn test_compose_template_interleaves() {
        let text = compose_template(
            &["--font-size: ", "px,\n--gap: ", ","],
            &[json!(12), json!("4px")],
        );
        assert_eq!(text, "--font-size: 12px,\n--gap: 4px,");
    }

    #[test]
    fn test_compose_template_value_formatting() {
        assert_eq!(compose_template(&["a: ", ""], &[json!(null)]), "a: ");
        assert_eq!(compose_template(&["b: ", ""], &[json!(true)]), "b: true");
        assert_eq!(compose_template(&["c: ", ""], &[json!(1.5)]), "c: 1.5");
    }

    #[test]
    fn test_extract_from_parts() {
        let ns = Namespace::default();
        let vars = extract_set_vars_parts(
            &ns,
            "badge",
            &["\n  --size: ", "px,\n  --weight: bold,\n"],
            &[json!(16)],
        );
        assert_eq!(vars["--rd-badge-size"].as_str(), Some("16px"));
        assert_eq!(vars["--rd-badge-weight"].as_str(), Some("bold"));
    }

    #[test]
    fn test_var_value_serializes_missing_as_null() {
        let mut vars = BTreeMap::new();
        vars.insert("--rd-card-foo".to_string(), VarValue::Value("1px".into()));
        vars.insert("--rd-card-bar".to_string(), VarValue::Missing);

        let json = serde_json::to_value(&vars).unwrap();
        assert_eq!(json["--rd-card-foo"], json!("1px"));
        assert_eq!(json["--rd-card-bar"], json!(null));
    }
}
