//! # Varspace - Namespaced CSS Custom Properties
//!
//! `varspace` turns author-friendly pseudo-variable syntax into namespaced
//! CSS custom-property names and values. It provides the data layer for a
//! CSS-in-JS pipeline: components write `$$name` references and
//! `--name: value` templates; varspace resolves them into
//! `--<prefix>-<component>-<name>` properties and `var(...)` expressions,
//! and hands back plain mappings for a style-rendering system to merge.
//!
//! Every operation is a synchronous, pure transformation over its
//! arguments: no I/O, and nothing retained across calls.
//!
//! ## Core Concepts
//!
//! - [`Namespace`]: the prefix configuration threaded through every call
//! - [`extract_set_vars`]: multi-line `name: value` template extraction
//! - [`transform_vars`] / [`transform_json`]: recursive style-rule rewriting
//! - [`prefix_style_value`]: `$$var` and `($$a, $$b)` fallback resolution
//! - [`VarTheme`]: named variable sets with light/dark overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use varspace::{transform_json, Namespace};
//! use serde_json::json;
//!
//! let ns = Namespace::default();
//! let rule = json!({
//!     "$$ring": "#0b6e99",
//!     "boxShadow": "0 0 0 2px ($$ring, currentColor)",
//! });
//!
//! let out = transform_json(&ns, "button", &rule).unwrap();
//! assert_eq!(out["--rd-button-ring"], json!("#0b6e99"));
//! assert_eq!(
//!     out["boxShadow"],
//!     json!("0 0 0 2px var(--rd-button-ring, currentColor)")
//! );
//! ```
//!
//! ## Set-Vars Templates
//!
//! Component variables are often written as a small declaration block:
//!
//! ```rust
//! use varspace::{extract_set_vars, Namespace};
//!
//! let ns = Namespace::default();
//! let vars = extract_set_vars(&ns, "card", "
//!     --font-size: 12px,
//!     --border-width: 1px,
//! ");
//!
//! assert_eq!(vars["--rd-card-font-size"].as_str(), Some("12px"));
//! assert_eq!(vars["--rd-card-border-width"].as_str(), Some("1px"));
//! ```
//!
//! ## Adaptive Themes
//!
//! Themes define base variables plus mode overrides, resolved to a flat
//! mapping per mode:
//!
//! ```rust
//! use varspace::{Namespace, ThemeMode, VarTheme};
//!
//! let theme = VarTheme::new("ocean")
//!     .set("surface", "#eef")
//!     .set_dark("surface", "#012");
//!
//! let ns = Namespace::default();
//! let dark = theme.resolve(&ns, ThemeMode::Dark);
//! assert_eq!(dark["--rd-ocean-surface"], "#012");
//! ```

mod error;
mod namespace;
mod rule;
mod template;
mod theme;

pub use error::{Error, Result};
pub use namespace::{
    default_namespace, resolve_token, var_name, Namespace, DEFAULT_PREFIX,
};
pub use rule::{prefix_style_value, transform_json, transform_vars, StyleNode, StyleRule};
pub use template::{
    compose_template, extract_set_vars, extract_set_vars_parts, VarValue,
};
pub use theme::{ModeChoice, ThemeMode, VarTheme};

// Re-export the lexer's public surface for callers that need raw tokens.
pub use varspace_lexer::{Declaration, Fragment, Piece, SIGIL};
