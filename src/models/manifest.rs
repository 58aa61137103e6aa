// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Asset manifest: where shared images live and what each symbolic name points at.
//! Loading is the only I/O here; everything else is plain data.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::models::asset::AssetName;

/// Asset layout configuration, usually read from a JSON file.
///
/// Every field is optional in the file; missing fields take the defaults of
/// the monorepo layout (`packages/shared/assets/images` copied into
/// `apps/mobile/assets/images`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetManifest {
    /// Shared directory holding the original images.
    pub source_dir: PathBuf,
    /// App directory the mobile bundler reads from.
    pub target_dir: PathBuf,
    /// Prefix for web asset paths.
    pub web_base: String,
    /// Extensions (without dot, case-insensitive) picked up by a sync.
    pub extensions: Vec<String>,
    /// File name per symbolic asset, relative to `source_dir` / `web_base`.
    pub files: BTreeMap<AssetName, String>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("packages/shared/assets/images"),
            target_dir: PathBuf::from("apps/mobile/assets/images"),
            web_base: "../assets/images".to_string(),
            extensions: vec!["png".into(), "jpg".into(), "jpeg".into()],
            files: AssetName::ALL
                .into_iter()
                .map(|name| (name, format!("{name}.png")))
                .collect(),
        }
    }
}

impl AssetManifest {
    /// Parse a manifest from JSON text and validate it.
    pub fn from_json(text: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(text).context("Invalid asset manifest JSON")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read asset manifest {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("In asset manifest {}", path.display()))
    }

    /// File name configured for `name`, falling back to `<name>.png`.
    pub fn file_for(&self, name: AssetName) -> String {
        self.files
            .get(&name)
            .cloned()
            .unwrap_or_else(|| format!("{name}.png"))
    }

    /// Whether a file extension is accepted by sync.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }

    fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            bail!("Asset manifest must list at least one extension");
        }
        for (name, file) in &self.files {
            if file.trim().is_empty() || file.contains(['/', '\\']) {
                bail!("Asset {name} must map to a bare file name, got {file:?}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_covers_every_asset() {
        let manifest = AssetManifest::default();
        for name in AssetName::ALL {
            assert_eq!(manifest.file_for(name), format!("{}.png", name.as_str()));
        }
        assert!(manifest.accepts_extension("JPG"));
        assert!(!manifest.accepts_extension("gif"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let manifest = AssetManifest::from_json(
            r#"{ "target_dir": "app/assets", "files": { "banner": "banner.jpg" } }"#,
        )
        .expect("valid manifest");

        assert_eq!(manifest.target_dir, PathBuf::from("app/assets"));
        assert_eq!(manifest.source_dir, AssetManifest::default().source_dir);
        assert_eq!(manifest.file_for(AssetName::Banner), "banner.jpg");
        // Names absent from an explicit map still fall back.
        assert_eq!(manifest.file_for(AssetName::Logo), "logo.png");
    }

    #[test]
    fn rejects_unknown_fields_and_assets() {
        assert!(AssetManifest::from_json(r#"{ "sorce_dir": "x" }"#).is_err());
        assert!(AssetManifest::from_json(r#"{ "files": { "icon": "icon.png" } }"#).is_err());
    }

    #[test]
    fn rejects_nested_file_names() {
        let err = AssetManifest::from_json(r#"{ "files": { "logo": "img/logo.png" } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("bare file name"));
    }

    #[test]
    fn rejects_empty_extension_list() {
        assert!(AssetManifest::from_json(r#"{ "extensions": [] }"#).is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("assets.json");
        std::fs::write(&path, r#"{ "web_base": "/static/img" }"#).expect("write");

        let manifest = AssetManifest::load(&path).expect("load");
        assert_eq!(manifest.web_base, "/static/img");

        let missing = AssetManifest::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(missing.to_string().contains("Failed to read asset manifest"));
    }
}
