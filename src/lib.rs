// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helpers for the web and mobile front ends.
//!
//! - [`utils`]: string, number, data, validation and formatting helpers.
//! - [`assets`]: symbolic image names resolved per platform, plus the sync
//!   step that copies images into the mobile app tree.
//! - [`mvu`]: counter state in model/message/update form.

pub mod assets;
pub mod error;
pub mod models;
pub mod mvu;
pub mod utils;

pub use assets::{AssetObserver, AssetProvider, Assets, MobileAssets, PlatformAssets, WebAssets};
pub use error::{Error, Result};
pub use models::{AssetHandle, AssetManifest, AssetName, AssetSource, Platform};
pub use mvu::{CounterModel, CounterMsg};
