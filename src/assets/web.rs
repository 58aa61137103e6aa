// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Web provider: symbolic names become relative paths for static imports.

use std::collections::BTreeMap;

use crate::assets::AssetProvider;
use crate::models::asset::{AssetName, AssetSource, Platform};
use crate::models::manifest::AssetManifest;

/// Path-string provider for the web bundler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebAssets {
    base: String,
    files: BTreeMap<AssetName, String>,
}

impl WebAssets {
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        Self {
            base: manifest.web_base.trim_end_matches('/').to_string(),
            files: AssetName::ALL
                .into_iter()
                .map(|name| (name, manifest.file_for(name)))
                .collect(),
        }
    }

    /// Relative path for `name`.
    pub fn path_of(&self, name: AssetName) -> Option<String> {
        let file = self.files.get(&name)?;
        if self.base.is_empty() {
            Some(file.clone())
        } else {
            Some(format!("{}/{}", self.base, file))
        }
    }
}

impl Default for WebAssets {
    fn default() -> Self {
        Self::from_manifest(&AssetManifest::default())
    }
}

impl AssetProvider for WebAssets {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    fn locate(&self, name: AssetName) -> Option<AssetSource> {
        self.path_of(name).map(AssetSource::Path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_point_into_shared_images() {
        let web = WebAssets::default();
        assert_eq!(
            web.locate(AssetName::Logo),
            Some(AssetSource::Path("../assets/images/logo.png".into()))
        );
        assert_eq!(
            web.path_of(AssetName::Banner).as_deref(),
            Some("../assets/images/banner.png")
        );
    }

    #[test]
    fn base_trailing_slash_and_empty_base() {
        let mut manifest = AssetManifest {
            web_base: "/static/img/".into(),
            ..AssetManifest::default()
        };
        manifest
            .files
            .insert(AssetName::Placeholder, "placeholder.jpg".into());

        let web = WebAssets::from_manifest(&manifest);
        assert_eq!(
            web.path_of(AssetName::Placeholder).as_deref(),
            Some("/static/img/placeholder.jpg")
        );

        manifest.web_base = String::new();
        let bare = WebAssets::from_manifest(&manifest);
        assert_eq!(bare.path_of(AssetName::Logo).as_deref(), Some("logo.png"));
    }
}
