//! Plugin orchestration for directional snapshot switching within Bevy.
//!
//! Listener resolution runs in `PreUpdate`; switchers are ticked in `Update`
//! after any settings asset changes have been applied.

mod config;

pub use config::SnapshotSwitcherPluginConfig;

use crate::diagnostics::{register as register_diagnostics, update_diagnostics};
use crate::events::SnapshotTransitionRequest;
use crate::listener::{resolve_listener, ResolvedListener};
use crate::settings_asset::{apply_settings_assets, SwitcherSettingsAsset, SwitcherSettingsLoader};
use crate::switcher::update_directional_snapshots;
use bevy::prelude::*;

/// Bevy plugin responsible for directional snapshot switching.
#[derive(Default)]
pub struct SnapshotSwitcherPlugin {
    config: SnapshotSwitcherPluginConfig,
}

impl SnapshotSwitcherPlugin {
    /// Create a plugin instance with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plugin instance using the provided configuration.
    pub fn with_config(config: SnapshotSwitcherPluginConfig) -> Self {
        Self { config }
    }

    /// Apply mutations to the internal configuration prior to registering.
    pub fn configure(mut self, configure: impl FnOnce(&mut SnapshotSwitcherPluginConfig)) -> Self {
        configure(&mut self.config);
        self
    }

    /// Access the current configuration.
    pub fn config(&self) -> &SnapshotSwitcherPluginConfig {
        &self.config
    }
}

impl Plugin for SnapshotSwitcherPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());
        app.init_resource::<ResolvedListener>();

        // The request channel always exists; the host's mixer integration reads it.
        app.add_message::<SnapshotTransitionRequest>();

        app.add_systems(PreUpdate, resolve_listener);
        app.add_systems(Update, update_directional_snapshots);

        if self.config.settings_assets {
            app.init_asset::<SwitcherSettingsAsset>();
            app.init_asset_loader::<SwitcherSettingsLoader>();
            app.add_systems(
                Update,
                apply_settings_assets.before(update_directional_snapshots),
            );
        }

        if self.config.diagnostics {
            register_diagnostics(app);
            app.add_systems(
                Update,
                update_diagnostics.after(update_directional_snapshots),
            );
        }
    }
}
