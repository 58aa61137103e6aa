// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Symbolic asset resolution behind one provider abstraction.
//!
//! The web bundler wants relative path strings, the mobile bundler wants
//! handles to files inside the app tree. Both sit behind [`AssetProvider`];
//! [`PlatformAssets`] picks one at compile time via the `mobile` feature.
//! Lookups are reported to an injected [`AssetObserver`] instead of being
//! logged from inside the resolver.

pub mod mobile;
pub mod sync;
pub mod web;

use std::fmt;

use crate::models::asset::{AssetName, AssetSource, Platform};

pub use mobile::MobileAssets;
pub use sync::{FormatMismatch, SyncOutcome, SyncReport, sync_assets};
pub use web::WebAssets;

/// Provider selected for this build.
#[cfg(feature = "mobile")]
pub type PlatformAssets = MobileAssets;
/// Provider selected for this build.
#[cfg(not(feature = "mobile"))]
pub type PlatformAssets = WebAssets;

/// Resolves symbolic asset names for one platform.
pub trait AssetProvider {
    /// Platform whose bundler consumes the returned sources.
    fn platform(&self) -> Platform;

    /// Locator for `name`, or `None` when this provider has no such asset.
    fn locate(&self, name: AssetName) -> Option<AssetSource>;
}

/// Hook notified about every lookup.
pub trait AssetObserver {
    fn on_lookup(&self, platform: Platform, requested: &str, source: Option<&AssetSource>);
}

/// Emits lookups as `tracing` debug events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl AssetObserver for TracingObserver {
    fn on_lookup(&self, platform: Platform, requested: &str, source: Option<&AssetSource>) {
        match source {
            Some(source) => {
                tracing::debug!(%platform, asset = requested, %source, "resolved asset");
            }
            None => tracing::debug!(%platform, asset = requested, "asset not found"),
        }
    }
}

/// Discards all lookups.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl AssetObserver for NoopObserver {
    fn on_lookup(&self, _: Platform, _: &str, _: Option<&AssetSource>) {}
}

/// Provider plus observer; the entry point front ends call into.
pub struct Assets<P> {
    provider: P,
    observer: Box<dyn AssetObserver + Send + Sync>,
}

impl<P: AssetProvider> Assets<P> {
    /// Wrap `provider`, reporting lookups through `tracing`.
    pub fn new(provider: P) -> Self {
        Self::with_observer(provider, TracingObserver)
    }

    pub fn with_observer(provider: P, observer: impl AssetObserver + Send + Sync + 'static) -> Self {
        Self {
            provider,
            observer: Box::new(observer),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn platform(&self) -> Platform {
        self.provider.platform()
    }

    /// Source for a known asset name.
    pub fn get_image_source(&self, name: AssetName) -> Option<AssetSource> {
        let source = self.provider.locate(name);
        self.observer
            .on_lookup(self.provider.platform(), name.as_str(), source.as_ref());
        source
    }

    /// Source for a name given as text; unknown names resolve to `None`.
    pub fn get_image_source_str(&self, name: &str) -> Option<AssetSource> {
        match name.parse::<AssetName>() {
            Ok(name) => self.get_image_source(name),
            Err(_) => {
                self.observer.on_lookup(self.provider.platform(), name, None);
                None
            }
        }
    }

    /// Resolve every catalog name, keeping misses as `None`.
    pub fn resolve_all(&self) -> Vec<(AssetName, Option<AssetSource>)> {
        AssetName::ALL
            .into_iter()
            .map(|name| (name, self.get_image_source(name)))
            .collect()
    }
}

impl<P: fmt::Debug> fmt::Debug for Assets<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assets")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::models::manifest::AssetManifest;

    /// Records every lookup for assertions.
    #[derive(Clone, Default)]
    struct Recorder {
        seen: Arc<Mutex<Vec<(String, bool)>>>,
    }

    impl AssetObserver for Recorder {
        fn on_lookup(&self, _: Platform, requested: &str, source: Option<&AssetSource>) {
            self.seen
                .lock()
                .expect("recorder lock")
                .push((requested.to_string(), source.is_some()));
        }
    }

    #[test]
    fn observer_sees_hits_and_misses() {
        let recorder = Recorder::default();
        let assets = Assets::with_observer(
            WebAssets::from_manifest(&AssetManifest::default()),
            recorder.clone(),
        );

        assert!(assets.get_image_source(AssetName::Logo).is_some());
        assert!(assets.get_image_source_str("banner").is_some());
        assert!(assets.get_image_source_str("favicon").is_none());

        let seen = recorder.seen.lock().expect("recorder lock").clone();
        assert_eq!(
            seen,
            vec![
                ("logo".to_string(), true),
                ("banner".to_string(), true),
                ("favicon".to_string(), false),
            ]
        );
    }

    #[test]
    fn resolve_all_lists_catalog_in_order() {
        let assets = Assets::with_observer(
            WebAssets::from_manifest(&AssetManifest::default()),
            NoopObserver,
        );
        let names: Vec<_> = assets.resolve_all().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, AssetName::ALL.to_vec());
    }

    #[cfg(not(feature = "mobile"))]
    #[test]
    fn platform_assets_defaults_to_web() {
        let assets = Assets::new(PlatformAssets::default());
        assert_eq!(assets.platform(), Platform::Web);
    }

    #[cfg(feature = "mobile")]
    #[test]
    fn platform_assets_is_mobile_with_feature() {
        let assets = Assets::new(PlatformAssets::default());
        assert_eq!(assets.platform(), Platform::Mobile);
        assert_eq!(assets.get_image_source(AssetName::Logo), None);
    }
}
