// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Content digests used to skip re-copying unchanged assets.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 of a file as lowercase hex.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or fully read.
pub fn hash_file(path: &Path) -> Result<String> {
    Ok(format!("{:x}", digest(path)?))
}

/// True when `target` exists and has the same bytes as `source`.
///
/// Sizes are compared before hashing so most changed files are caught
/// without reading them.
pub fn same_contents(source: &Path, target: &Path) -> Result<bool> {
    let Ok(target_meta) = target.metadata() else {
        return Ok(false);
    };
    let source_meta = source
        .metadata()
        .with_context(|| format!("Failed to stat asset: {}", source.display()))?;
    if source_meta.len() != target_meta.len() {
        return Ok(false);
    }
    Ok(digest(source)? == digest(target)?)
}

fn digest(path: &Path) -> Result<sha2::digest::Output<Sha256>> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open asset for hashing: {}", path.display()))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)
        .with_context(|| format!("Failed to read asset {}", path.display()))?;
    Ok(hasher.finalize())
}
