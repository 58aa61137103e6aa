// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Mobile provider: a registry of files already copied into the app tree.
//!
//! The mobile bundler only processes assets inside the app's own directory,
//! so the registry is built by scanning that directory after a sync. Names
//! are matched by sanitized file stem, which lets a `.jpg` copy stand in for
//! a manifest entry that says `.png`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::assets::AssetProvider;
use crate::models::asset::{AssetHandle, AssetName, AssetSource, Platform};
use crate::models::manifest::AssetManifest;
use crate::utils::sanitize_asset_name;

/// Handle registry for the mobile bundler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MobileAssets {
    entries: Vec<PathBuf>,
    by_name: BTreeMap<AssetName, AssetHandle>,
}

impl MobileAssets {
    /// Scan `dir` and register one file per catalog name.
    ///
    /// When several files share a stem (say `logo.png` and `logo.jpg`), the
    /// one with the manifest's extension wins, otherwise the first in name
    /// order. Names without a file stay unregistered.
    ///
    /// # Errors
    ///
    /// Fails when `dir` cannot be listed.
    pub fn scan(dir: &Path, manifest: &AssetManifest) -> Result<Self> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)
            .with_context(|| format!("Failed to list app asset directory {}", dir.display()))?
        {
            let entry = entry
                .with_context(|| format!("Failed to read entry in {}", dir.display()))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let accepted = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| manifest.accepts_extension(ext));
            if accepted {
                files.push(path);
            }
        }
        files.sort();

        let mut registry = Self::default();
        for name in AssetName::ALL {
            let wanted = sanitize_asset_name(&manifest.file_for(name));
            let (wanted_stem, wanted_ext) = split_name(&wanted);

            let candidates: Vec<&PathBuf> = files
                .iter()
                .filter(|path| file_stem(path) == Some(wanted_stem))
                .collect();
            let chosen = candidates
                .iter()
                .find(|path| extension(path) == wanted_ext)
                .or_else(|| candidates.first());

            match chosen {
                Some(path) => {
                    if extension(path) != wanted_ext {
                        tracing::warn!(
                            asset = %name,
                            expected = %wanted,
                            found = %path.display(),
                            "asset format differs from manifest"
                        );
                    }
                    registry.register(name, (*path).clone())?;
                }
                None => tracing::warn!(asset = %name, dir = %dir.display(), "asset missing"),
            }
        }
        Ok(registry)
    }

    /// Register `path` under `name`.
    ///
    /// Re-registering a name keeps its handle and swaps the file behind it.
    ///
    /// # Errors
    ///
    /// Fails when the registry has run out of handle values.
    pub fn register(&mut self, name: AssetName, path: PathBuf) -> Result<AssetHandle> {
        if let Some(&handle) = self.by_name.get(&name)
            && let Some(slot) = self.entries.get_mut(handle.0 as usize)
        {
            *slot = path;
            return Ok(handle);
        }
        let index = u32::try_from(self.entries.len())
            .map_err(|_| anyhow!("Asset registry is full, cannot register {name}"))?;
        let handle = AssetHandle(index);
        self.entries.push(path);
        self.by_name.insert(name, handle);
        Ok(handle)
    }

    /// File behind a handle issued by this registry.
    pub fn path_of(&self, handle: AssetHandle) -> Option<&Path> {
        self.entries.get(handle.0 as usize).map(PathBuf::as_path)
    }

    pub fn handle_of(&self, name: AssetName) -> Option<AssetHandle> {
        self.by_name.get(&name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl AssetProvider for MobileAssets {
    fn platform(&self) -> Platform {
        Platform::Mobile
    }

    fn locate(&self, name: AssetName) -> Option<AssetSource> {
        self.handle_of(name).map(AssetSource::Handle)
    }
}

fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.split_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (name, None),
    }
}

fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|s| s.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"img").expect("write fixture");
    }

    #[test]
    fn scan_registers_present_assets() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "logo.png");
        touch(dir.path(), "banner.png");
        touch(dir.path(), "notes.txt");

        let mobile = MobileAssets::scan(dir.path(), &AssetManifest::default()).expect("scan");

        let Some(AssetSource::Handle(handle)) = mobile.locate(AssetName::Logo) else {
            panic!("logo should resolve to a handle");
        };
        assert_eq!(mobile.path_of(handle), Some(dir.path().join("logo.png").as_path()));
        assert!(mobile.locate(AssetName::Banner).is_some());
        assert_eq!(mobile.locate(AssetName::Placeholder), None);
    }

    // A jpg copy satisfies a png manifest entry.
    #[test]
    fn scan_tolerates_format_drift() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "placeholder.jpg");

        let mobile = MobileAssets::scan(dir.path(), &AssetManifest::default()).expect("scan");
        let handle = mobile.handle_of(AssetName::Placeholder).expect("registered");
        assert_eq!(
            mobile.path_of(handle),
            Some(dir.path().join("placeholder.jpg").as_path())
        );
    }

    #[test]
    fn scan_prefers_manifest_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "logo.jpg");
        touch(dir.path(), "logo.png");

        let mobile = MobileAssets::scan(dir.path(), &AssetManifest::default()).expect("scan");
        let handle = mobile.handle_of(AssetName::Logo).expect("registered");
        assert_eq!(mobile.path_of(handle), Some(dir.path().join("logo.png").as_path()));
    }

    #[test]
    fn scan_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = MobileAssets::scan(&dir.path().join("absent"), &AssetManifest::default())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to list app asset directory"));
    }

    #[test]
    fn handles_are_registry_local() {
        let mut mobile = MobileAssets::default();
        assert!(mobile.is_empty());
        let logo = mobile
            .register(AssetName::Logo, PathBuf::from("a/logo.png"))
            .expect("register");
        let banner = mobile
            .register(AssetName::Banner, PathBuf::from("a/banner.png"))
            .expect("register");

        assert_ne!(logo, banner);
        assert_eq!(mobile.handle_of(AssetName::Logo), Some(logo));
        assert_eq!(mobile.path_of(AssetHandle(99)), None);
    }

    #[test]
    fn reregistering_reuses_the_slot() {
        let mut mobile = MobileAssets::default();
        let first = mobile
            .register(AssetName::Logo, PathBuf::from("a/logo.png"))
            .expect("register");
        let second = mobile
            .register(AssetName::Logo, PathBuf::from("b/logo.jpg"))
            .expect("register");

        assert_eq!(first, second);
        assert_eq!(mobile.entries.len(), 1);
        assert_eq!(mobile.path_of(second), Some(Path::new("b/logo.jpg")));
    }
}
