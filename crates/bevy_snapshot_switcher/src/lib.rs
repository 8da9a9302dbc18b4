//! Bevy plugin for direction-driven audio snapshot switching
//!
//! Each frame the plugin reads the listener's `GlobalTransform` (a marked
//! [`SnapshotListener`] entity, or the first camera), finds the configured
//! target entity it is angularly closest to facing, and writes a
//! [`SnapshotTransitionRequest`] whenever that direction changes. The game's
//! mixer integration consumes the requests and performs the crossfade.
//!
//! # Quick Start
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_snapshot_switcher::{
//!     Direction, DirectionalSnapshotSwitcher, SnapshotSwitcherPlugin, SnapshotTransitionRequest,
//! };
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(SnapshotSwitcherPlugin::default())
//!         .add_systems(Startup, setup)
//!         .add_systems(Update, crossfade)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands) {
//!     commands.spawn(Camera3d::default());
//!     let north = commands.spawn(Transform::from_xyz(0.0, 0.0, -10.0)).id();
//!     let south = commands.spawn(Transform::from_xyz(0.0, 0.0, 10.0)).id();
//!
//!     let switcher = DirectionalSnapshotSwitcher::builder()
//!         .entry(Direction::North, north, "calm".into())
//!         .entry(Direction::South, south, "storm".into())
//!         .build()
//!         .expect("valid switcher setup");
//!     commands.spawn(DirectionalSnapshotSwitcher::from(switcher));
//! }
//!
//! fn crossfade(mut requests: MessageReader<SnapshotTransitionRequest>) {
//!     for request in requests.read() {
//!         info!("fade to {} over {}s", request.snapshot, request.fade_seconds);
//!     }
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`plugin`] - Bevy plugin integration and configuration
//! - [`listener`] - Listener marker and resolution
//! - [`switcher`] - Switcher component and per-frame system
//! - [`settings_asset`] - RON settings asset with hot reload
//! - [`diagnostics`] - Per-direction angle diagnostics

pub mod diagnostics;
pub mod events;
pub mod listener;
pub mod plugin;
pub mod settings_asset;
pub mod switcher;

pub use diagnostics::{
    angle_path, update_diagnostics, EAST_ANGLE_PATH, NORTH_ANGLE_PATH, SOUTH_ANGLE_PATH,
    WEST_ANGLE_PATH,
};
pub use events::SnapshotTransitionRequest;
pub use listener::{listener_pose, resolve_listener, ResolvedListener, SnapshotListener};
pub use plugin::{SnapshotSwitcherPlugin, SnapshotSwitcherPluginConfig};
pub use settings_asset::{
    apply_settings_assets, SwitcherSettingsAsset, SwitcherSettingsHandle, SwitcherSettingsLoader,
};
pub use snapshot_switcher::{
    AngleMetric, Direction, ForwardAxis, ListenerPose, SnapshotSwitcher, SwitcherError,
    SwitcherSettings, TickOutcome,
};
pub use switcher::{update_directional_snapshots, DirectionalSnapshotSwitcher};
