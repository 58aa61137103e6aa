// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Copy shared images into an app asset directory under legal names.
//!
//! Responsibilities:
//! - Pick up files with an accepted extension from the shared directory.
//! - Rename them with [`sanitize_asset_name`] and refuse name collisions.
//! - Skip targets whose bytes already match.
//! - Report files whose content format disagrees with their extension.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use image::ImageFormat;

use crate::models::manifest::AssetManifest;
use crate::utils::{same_contents, sanitize_asset_name};

/// What happened to one source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Copied,
    Unchanged,
}

/// One synced file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncedAsset {
    pub source: PathBuf,
    pub target: PathBuf,
    /// MIME type guessed from the sanitized name.
    pub mime: String,
    pub outcome: SyncOutcome,
}

/// A file whose header bytes say a different format than its extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatMismatch {
    pub path: PathBuf,
    pub extension: String,
    pub detected: ImageFormat,
}

/// Summary of a sync run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub assets: Vec<SyncedAsset>,
    /// Files left behind because of their extension.
    pub skipped: Vec<PathBuf>,
    pub mismatches: Vec<FormatMismatch>,
}

impl SyncReport {
    pub fn copied(&self) -> usize {
        self.count(SyncOutcome::Copied)
    }

    pub fn unchanged(&self) -> usize {
        self.count(SyncOutcome::Unchanged)
    }

    fn count(&self, outcome: SyncOutcome) -> usize {
        self.assets.iter().filter(|a| a.outcome == outcome).count()
    }
}

/// Copy every accepted image from `manifest.source_dir` into `manifest.target_dir`.
///
/// The target directory is created if missing. Files are processed in name
/// order so reports are stable.
///
/// # Errors
///
/// Fails when the source cannot be listed, two sources sanitize to the same
/// target name, or any copy fails. Nothing is copied when a collision is
/// detected.
pub fn sync_assets(manifest: &AssetManifest) -> Result<SyncReport> {
    let source_dir = &manifest.source_dir;
    let target_dir = &manifest.target_dir;

    let mut sources = Vec::new();
    let mut report = SyncReport::default();
    for entry in fs::read_dir(source_dir).with_context(|| {
        format!(
            "Failed to list shared asset directory {}",
            source_dir.display()
        )
    })? {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", source_dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let accepted = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| manifest.accepts_extension(ext));
        if accepted {
            sources.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping non-image file");
            report.skipped.push(path);
        }
    }
    sources.sort();
    report.skipped.sort();

    let plan = plan_targets(&sources, target_dir)?;

    if !target_dir.exists() {
        fs::create_dir_all(target_dir).with_context(|| {
            format!(
                "Failed to create app asset directory {}",
                target_dir.display()
            )
        })?;
    }

    for (source, target) in plan {
        if let Some(mismatch) = detect_mismatch(&source)? {
            tracing::warn!(
                path = %mismatch.path.display(),
                extension = %mismatch.extension,
                detected = ?mismatch.detected,
                "image content does not match its extension"
            );
            report.mismatches.push(mismatch);
        }

        let outcome = if same_contents(&source, &target)? {
            SyncOutcome::Unchanged
        } else {
            fs::copy(&source, &target).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    source.display(),
                    target.display()
                )
            })?;
            tracing::info!(from = %source.display(), to = %target.display(), "copied asset");
            SyncOutcome::Copied
        };

        let mime = mime_guess::from_path(&target)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        report.assets.push(SyncedAsset {
            source,
            target,
            mime,
            outcome,
        });
    }

    tracing::info!(
        copied = report.copied(),
        unchanged = report.unchanged(),
        skipped = report.skipped.len(),
        "asset sync finished"
    );
    Ok(report)
}

/// Pair each source with its sanitized target, rejecting collisions.
fn plan_targets(sources: &[PathBuf], target_dir: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut claimed: HashMap<String, &Path> = HashMap::new();
    let mut plan = Vec::with_capacity(sources.len());
    for source in sources {
        let raw = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sanitized = sanitize_asset_name(&raw);
        if let Some(previous) = claimed.insert(sanitized.clone(), source) {
            bail!(
                "Assets {} and {} both sanitize to {}",
                previous.display(),
                source.display(),
                sanitized
            );
        }
        plan.push((source.clone(), target_dir.join(sanitized)));
    }
    Ok(plan)
}

/// Compare the sniffed image format with the one implied by the extension.
///
/// Files too short or unknown to `image` are not reported.
fn detect_mismatch(path: &Path) -> Result<Option<FormatMismatch>> {
    let Some(expected) = ImageFormat::from_path(path).ok() else {
        return Ok(None);
    };

    let mut header = Vec::with_capacity(32);
    File::open(path)
        .with_context(|| format!("Failed to open asset {}", path.display()))?
        .take(32)
        .read_to_end(&mut header)
        .with_context(|| format!("Failed to read asset {}", path.display()))?;

    match image::guess_format(&header) {
        Ok(detected) if detected != expected => Ok(Some(FormatMismatch {
            path: path.to_path_buf(),
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
            detected,
        })),
        _ => Ok(None),
    }
}
