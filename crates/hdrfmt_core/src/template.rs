//! Placeholder templates.
//!
//! Both formats substitute literally and in a single left-to-right pass:
//! replacement text is never rescanned, so a header value containing `%V`
//! or `$name` is emitted as-is.

use std::cmp::Reverse;

const NAME_TOKEN: char = 'H';
const VALUE_TOKEN: char = 'V';

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Name,
    Value,
}

/// A general-format template, parsed once into literal, `%H` and `%V` pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralTemplate {
    pieces: Vec<Piece>,
}

impl GeneralTemplate {
    /// Parses `template`. Any `%` not followed by `H` or `V` is literal.
    pub fn parse(template: &str) -> Self {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '%' {
                let piece = match chars.peek() {
                    Some(&NAME_TOKEN) => Some(Piece::Name),
                    Some(&VALUE_TOKEN) => Some(Piece::Value),
                    _ => None,
                };
                if let Some(piece) = piece {
                    chars.next();
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(piece);
                    continue;
                }
            }
            literal.push(c);
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Self { pieces }
    }

    /// Whether the template renders to nothing.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Appends one rendered segment for `name`/`value` to `out`.
    pub fn render_into(&self, out: &mut String, name: &str, value: &str) {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Name => out.push_str(name),
                Piece::Value => out.push_str(value),
            }
        }
    }

    /// Renders one segment for `name`/`value`.
    pub fn render(&self, name: &str, value: &str) -> String {
        let mut out = String::new();
        self.render_into(&mut out, name, value);
        out
    }
}

/// Renders a composite template against a set of candidate header names.
///
/// `%name` becomes `name` and `$name` becomes `lookup(name)`. When a value is
/// missing the `$name` token is kept verbatim. A sigil that starts no
/// candidate name is copied as-is. When several candidates match at the same
/// position the longest name wins, so `$ab` is never read as `$a` followed
/// by `b`.
pub fn render_composite<'a, F>(template: &str, names: &[&str], lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut candidates: Vec<&str> = names.iter().copied().filter(|n| !n.is_empty()).collect();
    candidates.sort_by_key(|name| Reverse(name.len()));

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(|c: char| c == '%' || c == '$') {
        out.push_str(&rest[..pos]);
        // Both sigils are single-byte.
        let sigil = &rest[pos..=pos];
        let after = &rest[pos + 1..];

        match candidates.iter().find(|name| after.starts_with(**name)) {
            Some(name) => {
                if sigil == "%" {
                    out.push_str(name);
                } else if let Some(value) = lookup(name) {
                    out.push_str(value);
                } else {
                    out.push_str(sigil);
                    out.push_str(name);
                }
                rest = &after[name.len()..];
            }
            None => {
                out.push_str(sigil);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
