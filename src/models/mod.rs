// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: asset identifiers and the manifest that configures them.

pub mod asset;
pub mod manifest;

pub use asset::{AssetHandle, AssetName, AssetSource, Platform};
pub use manifest::AssetManifest;
