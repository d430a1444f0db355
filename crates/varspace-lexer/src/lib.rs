//! Pseudo-variable token lexer for CSS-in-JS style values.
//!
//! This crate provides the lexical layer for resolving author-facing
//! pseudo-variables (`$$name`) into CSS custom properties. It recognizes
//! three shapes:
//!
//! - **Sigil tokens**: `$$` followed by letters and dashes, e.g. `$$accent`.
//! - **Fallback groups**: a parenthesized, comma-separated list of
//!   pseudo-variables, e.g. `($$focus, $$accent)`, expressing ordered
//!   value precedence.
//! - **Declaration lines**: `name: value` pairs as written inside a
//!   multi-line `set_vars` template, e.g. `--font-size: 12px,`.
//!
//! # Example
//!
//! ```rust
//! use varspace_lexer::{split_fallback_groups, split_sigil_tokens, Fragment, Piece};
//!
//! let fragments = split_fallback_groups("1px solid ($$focus, $$accent)");
//! assert_eq!(fragments, vec![
//!     Fragment::Literal("1px solid "),
//!     Fragment::Group("$$focus, $$accent"),
//! ]);
//!
//! let pieces = split_sigil_tokens("1px solid $$border-color");
//! assert_eq!(pieces, vec![
//!     Piece::Text("1px solid "),
//!     Piece::Var("$$border-color"),
//! ]);
//! ```
//!
//! # Robustness
//!
//! Malformed input never errors: an unclosed group, an empty group, or a
//! stray sigil simply stays in the literal stream and is passed through.
//! Callers perform best-effort string reconstruction on top of these
//! tokens.

/// The two-character prefix marking an author-facing pseudo-variable.
pub const SIGIL: &str = "$$";

/// A fragment of a style value after fallback-group splitting.
///
/// The surrounding parentheses of a group are consumed; `Group` carries
/// only the contents (which always start with the sigil).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Plain text between groups.
    Literal(&'a str),
    /// Contents of a `($$a, $$b, ...)` fallback group.
    Group(&'a str),
}

/// A piece of a literal fragment after sigil-token splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Plain text between tokens.
    Text(&'a str),
    /// A sigil token, including its leading `$$`.
    Var(&'a str),
}

/// A single `name: value` declaration from a set-vars template line.
///
/// `value` is `None` when the line carried no colon: an explicit
/// missing marker, distinct from an empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Variable name with one leading `--` removed.
    pub name: &'a str,
    /// Trimmed value text, or `None` for a colon-less line.
    pub value: Option<&'a str>,
}

/// Returns true if the trimmed input starts with the pseudo-variable sigil.
pub fn is_sigil_token(s: &str) -> bool {
    s.trim().starts_with(SIGIL)
}

/// Strips one leading sigil from a token, leaving the identifier.
///
/// ```rust
/// assert_eq!(varspace_lexer::strip_sigil("$$accent"), "accent");
/// assert_eq!(varspace_lexer::strip_sigil("accent"), "accent");
/// ```
pub fn strip_sigil(s: &str) -> &str {
    s.strip_prefix(SIGIL).unwrap_or(s)
}

/// Splits a style value into literals and fallback-group contents.
///
/// A group opens at `(` immediately followed by the sigil and runs to the
/// next `)`; the group must contain at least one character after the
/// sigil. Anything that does not complete a group stays literal, so
/// unbalanced or empty parentheses degrade gracefully. Empty and
/// whitespace-only literals are dropped.
pub fn split_fallback_groups(input: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let bytes = input.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'(' {
            if let Some(content) = match_group(&input[i..]) {
                push_literal(&mut fragments, &input[start..i]);
                fragments.push(Fragment::Group(content));
                // skip past the content and both parens
                i += content.len() + 2;
                start = i;
                continue;
            }
        }
        i += 1;
    }

    push_literal(&mut fragments, &input[start..]);
    fragments
}

/// Matches a fallback group at the start of `s` (which begins with `(`),
/// returning its contents.
fn match_group(s: &str) -> Option<&str> {
    let rest = &s[1..];
    if !rest.starts_with(SIGIL) {
        return None;
    }
    let close = rest.find(')')?;
    // the group needs at least one character beyond the sigil
    if close <= SIGIL.len() {
        return None;
    }
    Some(&rest[..close])
}

fn push_literal<'a>(fragments: &mut Vec<Fragment<'a>>, text: &'a str) {
    if !text.trim().is_empty() {
        fragments.push(Fragment::Literal(text));
    }
}

/// Splits a literal fragment into text and standalone sigil tokens.
///
/// A token is two or more `$` characters followed by any run of ASCII
/// letters and dashes (possibly empty). Whitespace-only text pieces are
/// dropped; interleaving and token order are preserved.
pub fn split_sigil_tokens(input: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let bytes = input.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'$' && bytes.get(i + 1) == Some(&b'$') {
            let mut j = i + 2;
            while j < bytes.len() && bytes[j] == b'$' {
                j += 1;
            }
            while j < bytes.len() && (bytes[j].is_ascii_alphabetic() || bytes[j] == b'-') {
                j += 1;
            }
            push_text(&mut pieces, &input[start..i]);
            pieces.push(Piece::Var(&input[i..j]));
            i = j;
            start = i;
        } else {
            i += 1;
        }
    }

    push_text(&mut pieces, &input[start..]);
    pieces
}

fn push_text<'a>(pieces: &mut Vec<Piece<'a>>, text: &'a str) {
    if !text.trim().is_empty() {
        pieces.push(Piece::Text(text));
    }
}

/// Parses one line of a set-vars template into a [`Declaration`].
///
/// Returns `None` for blank lines. The line is trimmed, one trailing comma
/// is removed, one leading `--` is removed from the name portion, and the
/// line is split on the first colon. A line without a colon produces
/// `value: None` rather than an empty value.
///
/// ```rust
/// use varspace_lexer::parse_declaration;
///
/// let decl = parse_declaration("--font-size: 12px,").unwrap();
/// assert_eq!(decl.name, "font-size");
/// assert_eq!(decl.value, Some("12px"));
///
/// let bare = parse_declaration("border-width").unwrap();
/// assert_eq!(bare.value, None);
///
/// assert!(parse_declaration("   ").is_none());
/// ```
pub fn parse_declaration(line: &str) -> Option<Declaration<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let line = line.strip_suffix(',').unwrap_or(line);
    let line = line.strip_prefix("--").unwrap_or(line);

    match line.split_once(':') {
        Some((name, value)) => Some(Declaration {
            name: name.trim(),
            value: Some(value.trim()),
        }),
        None => Some(Declaration {
            name: line.trim(),
            value: None,
        }),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // Strategy for value text with no sigils or parens
    fn plain_value() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,%#-]{1,40}".prop_filter("not blank", |s| !s.trim().is_empty())
    }

    fn identifier() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z-]{0,12}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn plain_text_survives_group_split(value in plain_value()) {
            let fragments = split_fallback_groups(&value);
            prop_assert_eq!(fragments, vec![Fragment::Literal(value.as_str())]);
        }

        #[test]
        fn plain_text_survives_token_split(value in plain_value()) {
            prop_assert!(!value.contains('$'));
            let pieces = split_sigil_tokens(&value);
            prop_assert_eq!(pieces, vec![Piece::Text(value.as_str())]);
        }

        #[test]
        fn sigil_tokens_are_recognized(name in identifier()) {
            let token = format!("$${}", name);
            let pieces = split_sigil_tokens(&token);
            prop_assert_eq!(pieces, vec![Piece::Var(token.as_str())]);
        }

        #[test]
        fn groups_round_trip_contents(a in identifier(), b in identifier()) {
            let input = format!("($${}, $${})", a, b);
            let content = format!("$${}, $${}", a, b);
            let fragments = split_fallback_groups(&input);
            prop_assert_eq!(fragments, vec![Fragment::Group(content.as_str())]);
        }

        #[test]
        fn declarations_never_panic(line in ".{0,60}") {
            let _ = parse_declaration(&line);
        }
    }
}
