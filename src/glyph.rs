use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Pick the display character for an author email.
///
/// Uses the local part (before `@`). For `<digits>+<rest>` (GitHub noreply
/// style) the first character of `<rest>` wins; for any other `a+b` the
/// first character of `a`. Without a `+` it is simply the first character.
///
/// Degenerate input never panics: an empty chosen segment falls back to the
/// whole local part, and an empty local part yields `'?'`.
pub fn assign_glyph(email: &str) -> char {
    let local = email.split_once('@').map_or(email, |(l, _)| l);
    let chosen = match local.split_once('+') {
        Some((first, rest)) if NUMERIC.is_match(first) => rest,
        Some((first, _)) => first,
        None => local,
    };
    chosen
        .chars()
        .next()
        .or_else(|| local.chars().next())
        .unwrap_or('?')
}

/// Per-run memo of `email -> glyph`, remembering first-seen order.
///
/// Two emails may land on the same glyph; nothing tries to keep them apart.
#[derive(Debug, Default)]
pub struct GlyphAssigner {
    by_email: HashMap<String, char>,
    order: Vec<String>,
}

impl GlyphAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glyph_for(&mut self, email: &str) -> char {
        if let Some(&c) = self.by_email.get(email) {
            return c;
        }
        let c = assign_glyph(email);
        self.by_email.insert(email.to_string(), c);
        self.order.push(email.to_string());
        c
    }

    /// `(glyph, email)` pairs in the order the emails were first seen.
    pub fn legend(&self) -> impl Iterator<Item = (char, &str)> {
        self.order
            .iter()
            .map(|e| (self.by_email[e], e.as_str()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
