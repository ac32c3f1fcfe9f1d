//! Call-like and loop construct scanning.

use regex::Regex;

use super::types::{Occurrence, OccurrenceKind};

/// Identifiers that are followed by `(` without being calls.
const NON_CALL_KEYWORDS: &[&str] = &[
    "if",
    "switch",
    "catch",
    "synchronized",
    "return",
    "throw",
    "assert",
    "super",
    "this",
    "try",
    "else",
    "case",
    "new",
];

/// Keywords whose parenthesized header is a loop.
const LOOP_KEYWORDS: &[&str] = &["while", "for"];

/// Find every `while (...)`, `for (...)` and `name(...)` in `text`, in order.
///
/// Scanning resumes just after each opening parenthesis, so a call nested in
/// another call's arguments is reported as well. Argument lists are matched
/// with balanced parentheses; a list left open at the end of `text` runs to
/// the end of its line.
pub(crate) fn scan_occurrences(call_head: &Regex, text: &str) -> Vec<Occurrence> {
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(m) = call_head.find_at(text, pos) {
        // The head ends with the opening parenthesis.
        let open = m.end() - 1;
        pos = m.end();

        let head = &text[m.start()..open];
        let name = head.trim_end();
        if NON_CALL_KEYWORDS.contains(&name) {
            continue;
        }
        let kind = if LOOP_KEYWORDS.contains(&name) {
            OccurrenceKind::Loop
        } else {
            OccurrenceKind::Call {
                name: name.to_string(),
            }
        };

        let end = closing_paren(text, open).unwrap_or_else(|| line_end(text, open));
        found.push(Occurrence {
            kind,
            text: text[m.start()..end].trim_end().to_string(),
            offset: m.start(),
        });
    }
    found
}

/// Byte offset just past the `)` matching the `(` at `open`.
fn closing_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

fn line_end(text: &str, from: usize) -> usize {
    text[from..].find('\n').map_or(text.len(), |i| from + i)
}
