// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! String manipulation helpers shared by the web and mobile front ends.

/// Length used by callers that have no preference of their own.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 50;

const ELLIPSIS: &str = "...";

/// Cut `text` to `max_length` characters and append `...`.
///
/// Text that already fits is returned unchanged. Lengths count Unicode
/// scalar values, not bytes, and the cut ignores word boundaries.
pub fn truncate(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        Some((byte_idx, _)) => {
            let mut out = String::with_capacity(byte_idx + ELLIPSIS.len());
            out.push_str(&text[..byte_idx]);
            out.push_str(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

/// Convert text into a URL-friendly slug.
///
/// # Steps
/// - Lowercase and trim.
/// - Drop everything except ASCII word characters, whitespace and `-`.
/// - Collapse runs of whitespace, `_` and `-` into a single `-`.
/// - Trim leading and trailing `-`.
///
/// Non-ASCII letters are dropped rather than transliterated, so
/// `"Café Menu"` becomes `"caf-menu"`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.trim().chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_separator = true;
        } else if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(ch);
        }
    }

    out
}

/// Initials of a full name, at most two characters, uppercased.
///
/// The name is split on single spaces; empty tokens produced by leading,
/// trailing or repeated spaces are skipped.
pub fn get_initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

/// Render `count` with the matching noun form.
///
/// Only a count of exactly `1` is singular. Without an explicit (non-empty)
/// plural, the singular gets an `s` appended.
pub fn pluralize(count: i64, singular: &str, plural: Option<&str>) -> String {
    if count == 1 {
        return format!("{count} {singular}");
    }
    match plural.filter(|p| !p.is_empty()) {
        Some(plural) => format!("{count} {plural}"),
        None => format!("{count} {singular}s"),
    }
}
