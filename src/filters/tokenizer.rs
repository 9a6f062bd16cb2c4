//! Splits a raw query string into token strings.
//!
//! Tokens keep their delimiters (quotes, parentheses, leading `-` / `?`) so the
//! parser can interpret them. At each scan position the first matching shape
//! wins:
//!
//! 1. keyed group       `-?key:(...)`  (up to the first `)`)
//! 2. keyed quoted      `-?key:"..."`
//! 3. keyed bare        `-?key:value`
//! 4. unkeyed group     `(...)` or `-(...)`
//! 5. negated quoted    `-"..."`
//! 6. negated bare      `-value`
//! 7. quoted            `"..."`
//! 8. anything else up to the next space
//!
//! Only the ASCII space separates tokens. Quoted and parenthesized spans
//! stop at a newline, so an unterminated span falls through to a later shape.

use tracing::debug;

/// Tokenize a query into borrowed token slices
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];

        if rest.starts_with(' ') {
            pos += 1;
            continue;
        }

        let len = token_len(rest);
        let token = &rest[..len];
        if !token.trim().is_empty() {
            tokens.push(token);
        }
        pos += len;
    }

    debug!(?tokens, "tokenized query");
    tokens
}

/// Byte length of the token starting at the beginning of `rest`
///
/// `rest` never starts with a space, so the bare-word fallback always
/// consumes at least one character.
fn token_len(rest: &str) -> usize {
    keyed_group(rest)
        .or_else(|| keyed_quoted(rest))
        .or_else(|| keyed_bare(rest))
        .or_else(|| unkeyed_group(rest))
        .or_else(|| negated_quoted(rest))
        .or_else(|| negated_bare(rest))
        .or_else(|| closed_span(rest, 0, '"', '"'))
        .unwrap_or_else(|| bare_len(rest))
}

/// Length of `-?` `?` KEY `:` at the start of `s`, if present
fn key_prefix(s: &str) -> Option<usize> {
    let start = if s.starts_with("-?") {
        2
    } else if s.starts_with('?') {
        1
    } else {
        return None;
    };

    let key_len =
        s[start..].bytes().take_while(|b| b.is_ascii_alphanumeric() || *b == b'_').count();
    if key_len == 0 {
        return None;
    }

    let colon = start + key_len;
    if s[colon..].starts_with(':') { Some(colon + 1) } else { None }
}

/// Span that opens with `open` at byte `at` and ends at the first `close`
///
/// Returns the length through the closing character. Fails if a newline comes
/// first or the span is never closed.
fn closed_span(s: &str, at: usize, open: char, close: char) -> Option<usize> {
    if !s[at..].starts_with(open) {
        return None;
    }
    let body = at + open.len_utf8();
    for (i, ch) in s[body..].char_indices() {
        if ch == close {
            return Some(body + i + close.len_utf8());
        }
        if ch == '\n' {
            return None;
        }
    }
    None
}

/// Length of the run of non-space characters
fn bare_len(s: &str) -> usize {
    s.find(' ').unwrap_or(s.len())
}

fn keyed_group(s: &str) -> Option<usize> {
    let prefix = key_prefix(s)?;
    closed_span(s, prefix, '(', ')')
}

fn keyed_quoted(s: &str) -> Option<usize> {
    let prefix = key_prefix(s)?;
    closed_span(s, prefix, '"', '"')
}

fn keyed_bare(s: &str) -> Option<usize> {
    let prefix = key_prefix(s)?;
    match bare_len(&s[prefix..]) {
        0 => None,
        n => Some(prefix + n),
    }
}

fn unkeyed_group(s: &str) -> Option<usize> {
    let at = usize::from(s.starts_with('-'));
    closed_span(s, at, '(', ')')
}

fn negated_quoted(s: &str) -> Option<usize> {
    if !s.starts_with('-') {
        return None;
    }
    closed_span(s, 1, '"', '"')
}

fn negated_bare(s: &str) -> Option<usize> {
    if !s.starts_with('-') {
        return None;
    }
    match bare_len(&s[1..]) {
        0 => None,
        n => Some(1 + n),
    }
}
