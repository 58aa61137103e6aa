// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Symbolic asset names and the platform-specific locators they resolve to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Stable identifier for a shared image, independent of path and format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetName {
    Logo,
    Placeholder,
    Banner,
}

impl AssetName {
    /// Every name in catalog order.
    pub const ALL: [AssetName; 3] = [AssetName::Logo, AssetName::Placeholder, AssetName::Banner];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetName::Logo => "logo",
            AssetName::Placeholder => "placeholder",
            AssetName::Banner => "banner",
        }
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| Error::UnknownAsset(s.to_string()))
    }
}

/// Target runtime whose bundler consumes the assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Web,
    Mobile,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Web => "web",
            Platform::Mobile => "mobile",
        })
    }
}

/// Opaque reference into a mobile asset registry.
///
/// Only meaningful for the registry that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AssetHandle(pub(crate) u32);

impl fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a platform finds the bytes for an asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetSource {
    /// Path string handed to the web bundler's static import.
    Path(String),
    /// Handle issued by the mobile registry.
    Handle(AssetHandle),
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSource::Path(path) => f.write_str(path),
            AssetSource::Handle(handle) => write!(f, "{handle}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_names_round_trip_through_strings() {
        for name in AssetName::ALL {
            assert_eq!(name.as_str().parse::<AssetName>().expect("known"), name);
        }
    }

    #[test]
    fn unknown_asset_name_is_an_error() {
        let err = "Logo".parse::<AssetName>().unwrap_err();
        assert!(matches!(err, Error::UnknownAsset(ref s) if s == "Logo"));
    }

    #[test]
    fn asset_name_serializes_lowercase() {
        let json = serde_json::to_string(&AssetName::Placeholder).expect("serialize");
        assert_eq!(json, "\"placeholder\"");
    }
}
