//! Deterministic construction of namespaced custom-property names.
//!
//! Every variable this crate produces is scoped by a process-wide prefix
//! and a component name: `--<prefix>-<component>-<identifier>`. The prefix
//! lives in a [`Namespace`] value that is passed into every operation, so
//! transforms stay pure and testable; a shared default instance (using
//! [`DEFAULT_PREFIX`]) backs the free-function conveniences.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use varspace_lexer::SIGIL;

/// Prefix used by [`Namespace::default`].
pub const DEFAULT_PREFIX: &str = "rd";

/// Namespace configuration for custom-property name construction.
///
/// # Example
///
/// ```rust
/// use varspace::Namespace;
///
/// let ns = Namespace::new("app");
/// assert_eq!(ns.var_name("card", "--font-size"), "--app-card-font-size");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    prefix: String,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl Namespace {
    /// Creates a namespace with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Builds the namespaced custom-property name for a variable.
    ///
    /// Leading double-dash sequences on `raw` are stripped before the name
    /// is assembled, so `foo`, `--foo`, and `----foo` all resolve to the
    /// same property. Interior dashes are preserved.
    pub fn var_name(&self, component: &str, raw: &str) -> String {
        let mut name = raw;
        while let Some(stripped) = name.strip_prefix("--") {
            name = stripped;
        }
        format!("--{}-{}-{}", self.prefix, component, name)
    }

    /// Resolves a `$$`-sigil token to its namespaced custom-property name.
    ///
    /// The token is trimmed first. It is only namespaced when it carries
    /// the sigil AND `component` is non-empty; anything else comes back
    /// trimmed but otherwise unchanged, so plain CSS keys and values pass
    /// through and an empty component never produces a malformed name.
    pub fn resolve_token(&self, component: &str, token: &str) -> String {
        let name = token.trim();
        match name.strip_prefix(SIGIL) {
            Some(identifier) if !component.is_empty() => {
                format!("--{}-{}-{}", self.prefix, component, identifier)
            }
            _ => name.to_string(),
        }
    }
}

static DEFAULT_NAMESPACE: Lazy<Namespace> = Lazy::new(Namespace::default);

/// The shared default namespace (prefix [`DEFAULT_PREFIX`]).
pub fn default_namespace() -> &'static Namespace {
    &DEFAULT_NAMESPACE
}

/// [`Namespace::var_name`] on the default namespace.
pub fn var_name(component: &str, raw: &str) -> String {
    DEFAULT_NAMESPACE.var_name(component, raw)
}

/// [`Namespace::resolve_token`] on the default namespace.
pub fn resolve_token(component: &str, token: &str) -> String {
    DEFAULT_NAMESPACE.resolve_token(component, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_name_basic() {
        let ns = Namespace::default();
        assert_eq!(ns.var_name("card", "foo"), "--rd-card-foo");
    }

    #[test]
    fn test_var_name_strips_leading_dashes() {
        let ns = Namespace::default();
        assert_eq!(ns.var_name("card", "--foo"), "--rd-card-foo");
        assert_eq!(ns.var_name("card", "----foo"), "--rd-card-foo");
    }

    #[test]
    fn test_var_name_keeps_interior_dashes() {
        let ns = Namespace::default();
        assert_eq!(ns.var_name("card", "--foo--bar"), "--rd-card-foo--bar");
    }

    #[test]
    fn test_resolve_token_sigil() {
        let ns = Namespace::default();
        assert_eq!(ns.resolve_token("card", "$$foo"), "--rd-card-foo");
        assert_eq!(ns.resolve_token("card", "  $$foo "), "--rd-card-foo");
    }

    #[test]
    fn test_resolve_token_passthrough() {
        let ns = Namespace::default();
        assert_eq!(ns.resolve_token("card", "padding"), "padding");
        assert_eq!(ns.resolve_token("card", "--foo"), "--foo");
    }

    #[test]
    fn test_resolve_token_empty_component_guard() {
        let ns = Namespace::default();
        assert_eq!(ns.resolve_token("", "$$foo"), "$$foo");
    }

    #[test]
    fn test_custom_prefix() {
        let ns = Namespace::new("app");
        assert_eq!(ns.resolve_token("card", "$$foo"), "--app-card-foo");
    }

    #[test]
    fn test_default_namespace_free_functions() {
        assert_eq!(var_name("card", "foo"), "--rd-card-foo");
        assert_eq!(resolve_token("card", "$$foo"), "--rd-card-foo");
        assert_eq!(default_namespace().prefix(), DEFAULT_PREFIX);
    }
}
