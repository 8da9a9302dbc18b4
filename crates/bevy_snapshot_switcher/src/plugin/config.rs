use bevy::prelude::Resource;

/// Configuration object used to enable/disable individual subsystems of the plugin.
#[derive(Debug, Clone, Resource)]
pub struct SnapshotSwitcherPluginConfig {
    /// Record per-direction angle readouts as Bevy diagnostics.
    pub diagnostics: bool,
    /// Use the first camera as listener when no entity is marked.
    pub camera_fallback: bool,
    /// Register the `.switcher.ron` settings asset and hot-apply it.
    pub settings_assets: bool,
}

impl Default for SnapshotSwitcherPluginConfig {
    fn default() -> Self {
        Self {
            diagnostics: true,
            camera_fallback: true,
            settings_assets: true,
        }
    }
}

impl SnapshotSwitcherPluginConfig {
    pub fn diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn camera_fallback(mut self, enabled: bool) -> Self {
        self.camera_fallback = enabled;
        self
    }

    pub fn settings_assets(mut self, enabled: bool) -> Self {
        self.settings_assets = enabled;
        self
    }
}
