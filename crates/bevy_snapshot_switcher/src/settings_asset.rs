//! Switcher settings loaded as a Bevy asset.
//!
//! A `.switcher.ron` file overrides selected fields of a switcher's
//! [`SwitcherSettings`]; fields left out keep the switcher's own value:
//!
//! ```ron
//! (fade_seconds: 2.0, angle_metric: bearing)
//! ```
//!
//! Attach a [`SwitcherSettingsHandle`] next to a
//! [`DirectionalSnapshotSwitcher`] and the overrides are applied once the
//! asset loads, and again whenever it is modified (hot reload).

use crate::switcher::DirectionalSnapshotSwitcher;
use bevy::asset::{AssetLoader, LoadContext, io::Reader};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use ron::extensions::Extensions;
use serde::Deserialize;
use snapshot_switcher::{validate_fade_time, AngleMetric, ForwardAxis, SwitcherSettings};

const SETTINGS_EXTENSIONS: &[&str] = &["switcher.ron"];

/// Settings overrides shared by any number of switchers.
#[derive(Asset, TypePath, Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwitcherSettingsAsset {
    pub fade_seconds: Option<f32>,
    pub angle_metric: Option<AngleMetric>,
    pub forward_axis: Option<ForwardAxis>,
}

impl SwitcherSettingsAsset {
    /// Parses a RON document; present fields need no `Some(..)` wrapper.
    pub fn from_ron_bytes(bytes: &[u8]) -> Result<Self, ron::error::SpannedError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_bytes(bytes)
    }

    /// `base` with every field this asset sets replaced.
    pub fn merged_onto(&self, base: SwitcherSettings) -> SwitcherSettings {
        SwitcherSettings {
            fade_seconds: self.fade_seconds.unwrap_or(base.fade_seconds),
            angle_metric: self.angle_metric.unwrap_or(base.angle_metric),
            forward_axis: self.forward_axis.unwrap_or(base.forward_axis),
        }
    }
}

/// Loader for `.switcher.ron` assets.
#[derive(Default)]
pub struct SwitcherSettingsLoader;

impl AssetLoader for SwitcherSettingsLoader {
    type Asset = SwitcherSettingsAsset;
    type Settings = ();
    type Error = anyhow::Error;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let mut asset = SwitcherSettingsAsset::from_ron_bytes(&bytes)?;
        if let Some(seconds) = asset.fade_seconds {
            asset.fade_seconds = Some(validate_fade_time(seconds)?);
        }
        Ok(asset)
    }

    fn extensions(&self) -> &[&str] {
        SETTINGS_EXTENSIONS
    }
}

/// Settings asset driving the switcher on the same entity.
#[derive(Component, Debug, Clone)]
pub struct SwitcherSettingsHandle(pub Handle<SwitcherSettingsAsset>);

/// Apply loaded or modified settings assets to their switchers.
pub fn apply_settings_assets(
    mut events: MessageReader<AssetEvent<SwitcherSettingsAsset>>,
    assets: Res<Assets<SwitcherSettingsAsset>>,
    mut switchers: Query<(
        Entity,
        Ref<SwitcherSettingsHandle>,
        &mut DirectionalSnapshotSwitcher,
    )>,
) {
    let changed: Vec<AssetId<SwitcherSettingsAsset>> = events
        .read()
        .filter_map(|event| match event {
            AssetEvent::Added { id } | AssetEvent::Modified { id } => Some(*id),
            _ => None,
        })
        .collect();

    for (entity, handle, mut switcher) in &mut switchers {
        let id = handle.0.id();
        if !handle.is_changed() && !changed.contains(&id) {
            continue;
        }
        let Some(asset) = assets.get(id) else {
            continue;
        };
        let settings = asset.merged_onto(*switcher.settings());
        match switcher.apply_settings(settings) {
            Ok(()) => debug!("Applied switcher settings to {}", entity),
            Err(err) => warn!("Rejected switcher settings for {}: {}", entity, err),
        }
    }
}
