//! Adaptive theme variable sets.
//!
//! A [`VarTheme`] is a named collection of custom-property values with
//! optional light/dark overrides. Mode-specific maps merge onto the base
//! on resolve (overrides replace, missing keys preserve the base), so
//! variables that don't change between modes are defined once.
//!
//! This module is pure data: it resolves variable sets and composes class
//! names, and leaves applying them (DOM, stylesheets, OS color-scheme
//! detection) to the rendering collaborator. When the preferred mode is
//! [`ModeChoice::Auto`], resolution goes through a caller-supplied
//! detector closure.
//!
//! # Example
//!
//! ```rust
//! use varspace::{Namespace, ThemeMode, VarTheme};
//!
//! let theme = VarTheme::from_yaml(r##"
//! name: ocean
//! vars:
//!   surface: "#e8f4f8"
//!   accent: "#0b6e99"
//! dark:
//!   surface: "#0d1b22"
//! "##).unwrap();
//!
//! let ns = Namespace::default();
//! let dark = theme.resolve(&ns, ThemeMode::Dark);
//!
//! assert_eq!(dark["--rd-ocean-surface"], "#0d1b22");
//! assert_eq!(dark["--rd-ocean-accent"], "#0b6e99");
//! assert_eq!(theme.class_name(&ns, ThemeMode::Dark), "rd-ocean-dark");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::namespace::Namespace;
use crate::rule::prefix_style_value;

/// The two display modes a theme can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode (light background, dark text).
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

impl ThemeMode {
    /// The lowercase name used in class names and serialized forms.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller's mode preference: a fixed mode, or defer to a detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeChoice {
    /// Resolve through the detector supplied at resolution time.
    #[default]
    Auto,
    /// Always use the given mode.
    Fixed(ThemeMode),
}

impl ModeChoice {
    /// Resolves the choice, consulting `detect` only for [`Auto`].
    ///
    /// The detector is injected so this stays pure; hosts typically back
    /// it with their platform's color-scheme query.
    ///
    /// [`Auto`]: ModeChoice::Auto
    ///
    /// ```rust
    /// use varspace::{ModeChoice, ThemeMode};
    ///
    /// let choice = ModeChoice::Fixed(ThemeMode::Light);
    /// assert_eq!(choice.resolve_with(|| ThemeMode::Dark), ThemeMode::Light);
    ///
    /// assert_eq!(ModeChoice::Auto.resolve_with(|| ThemeMode::Dark), ThemeMode::Dark);
    /// ```
    pub fn resolve_with<F>(self, detect: F) -> ThemeMode
    where
        F: FnOnce() -> ThemeMode,
    {
        match self {
            ModeChoice::Fixed(mode) => mode,
            ModeChoice::Auto => detect(),
        }
    }
}

impl From<ThemeMode> for ModeChoice {
    fn from(mode: ThemeMode) -> Self {
        ModeChoice::Fixed(mode)
    }
}

/// A named set of theme variables with optional per-mode overrides.
///
/// Variable names may be written with or without their leading `--`; the
/// spelling is normalized when merging and namespacing. Values may
/// reference `$$`-pseudo-variables, which resolve under the theme's name
/// as the component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarTheme {
    name: String,
    #[serde(default)]
    vars: BTreeMap<String, String>,
    #[serde(default)]
    light: BTreeMap<String, String>,
    #[serde(default)]
    dark: BTreeMap<String, String>,
}

impl VarTheme {
    /// Creates an empty theme with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: BTreeMap::new(),
            light: BTreeMap::new(),
            dark: BTreeMap::new(),
        }
    }

    /// The theme's name (used as the namespace component).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a base variable, returning the theme for chaining.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Adds a light-mode override.
    pub fn set_light(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.light.insert(name.into(), value.into());
        self
    }

    /// Adds a dark-mode override.
    pub fn set_dark(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dark.insert(name.into(), value.into());
        self
    }

    /// Loads a theme from its YAML document form.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Resolves the theme's variables for a mode.
    ///
    /// Mode overrides merge onto the base, keys are namespaced under the
    /// theme name, and values run through the pseudo-variable transform
    /// so they may reference `$$vars`.
    pub fn resolve(&self, ns: &Namespace, mode: ThemeMode) -> BTreeMap<String, String> {
        let overrides = match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        };

        let mut merged: BTreeMap<&str, &str> = BTreeMap::new();
        for (name, value) in &self.vars {
            merged.insert(normalize(name), value);
        }
        for (name, value) in overrides {
            merged.insert(normalize(name), value);
        }

        merged
            .into_iter()
            .map(|(name, value)| {
                (
                    ns.var_name(&self.name, name),
                    prefix_style_value(ns, &self.name, value),
                )
            })
            .collect()
    }

    /// Composes the theme's class name for a mode:
    /// `<prefix>-<name>-<mode>`.
    pub fn class_name(&self, ns: &Namespace, mode: ThemeMode) -> String {
        format!("{}-{}-{}", ns.prefix(), self.name, mode)
    }
}

/// Strips leading double-dash sequences so `--surface` and `surface`
/// merge as the same variable.
fn normalize(name: &str) -> &str {
    let mut name = name;
    while let Some(stripped) = name.strip_prefix("--") {
        name = stripped;
    }
    name
}
