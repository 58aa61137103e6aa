// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Asset file names that satisfy mobile resource naming rules.
//!
//! The mobile packager only accepts resource names made of lowercase ASCII
//! letters, digits and `_`, not starting with a digit. Every file copied into
//! an app asset directory passes through [`sanitize_asset_name`] first.

use std::path::{Path, PathBuf};

/// Stem used when nothing legal survives sanitization.
const FALLBACK_STEM: &str = "asset";

/// Produce a resource-legal asset file name.
///
/// # Steps
/// - Transliterate Unicode to ASCII with `deunicode` and lowercase it.
/// - Split off the last extension; stem and extension are cleaned apart.
/// - Map everything outside `[a-z0-9_]` (inner dots included) to `_`.
/// - Collapse runs of `_` and trim them from both ends.
/// - Prefix `asset_` when the stem starts with a digit; use `asset` when
///   the stem ends up empty. An empty extension is dropped.
///
/// The result always passes [`is_valid_asset_name`], and sanitizing it
/// again returns it unchanged.
pub fn sanitize_asset_name(file_name: &str) -> String {
    let lowered = deunicode::deunicode(file_name).to_ascii_lowercase();

    let (raw_stem, raw_ext) = match lowered.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (lowered.as_str(), None),
    };

    let mut stem = clean_segment(raw_stem);
    if stem.is_empty() {
        stem = FALLBACK_STEM.to_string();
    } else if stem.starts_with(|c: char| c.is_ascii_digit()) {
        stem = format!("{FALLBACK_STEM}_{stem}");
    }

    match raw_ext.map(clean_segment).filter(|ext| !ext.is_empty()) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

/// Sanitize only the final component of `path`, keeping its directories.
pub fn sanitize_asset_path(path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => path.with_file_name(sanitize_asset_name(&name.to_string_lossy())),
        None => path.to_path_buf(),
    }
}

/// Whether `name` already satisfies the resource naming contract.
///
/// Equivalent to `^[a-z0-9_]+(\.[a-z0-9_]+)?$` with no leading digit and no
/// repeated underscores.
pub fn is_valid_asset_name(name: &str) -> bool {
    let (stem, ext) = match name.split_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (name, None),
    };

    let legal = |segment: &str| {
        !segment.is_empty()
            && segment
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
    };

    legal(stem)
        && ext.is_none_or(legal)
        && !stem.starts_with(|c: char| c.is_ascii_digit())
        && !name.contains("__")
}

fn clean_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for ch in segment.chars() {
        let mapped = if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            ch
        } else {
            '_'
        };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }
    out.trim_matches('_').to_string()
}
