use crate::plugin::SnapshotSwitcherPluginConfig;
use crate::switcher::DirectionalSnapshotSwitcher;
use bevy::diagnostic::{Diagnostic, DiagnosticPath, Diagnostics, RegisterDiagnostic};
use bevy::prelude::*;
use snapshot_switcher::Direction;

pub static NORTH_ANGLE_PATH: DiagnosticPath =
    DiagnosticPath::const_new("snapshot_switcher/angle/north");
pub static SOUTH_ANGLE_PATH: DiagnosticPath =
    DiagnosticPath::const_new("snapshot_switcher/angle/south");
pub static EAST_ANGLE_PATH: DiagnosticPath =
    DiagnosticPath::const_new("snapshot_switcher/angle/east");
pub static WEST_ANGLE_PATH: DiagnosticPath =
    DiagnosticPath::const_new("snapshot_switcher/angle/west");

/// Diagnostic path carrying the angle readout of `direction`.
pub fn angle_path(direction: Direction) -> &'static DiagnosticPath {
    match direction {
        Direction::North => &NORTH_ANGLE_PATH,
        Direction::South => &SOUTH_ANGLE_PATH,
        Direction::East => &EAST_ANGLE_PATH,
        Direction::West => &WEST_ANGLE_PATH,
    }
}

pub fn register(app: &mut App) {
    for direction in Direction::ALL {
        app.register_diagnostic(Diagnostic::new(angle_path(direction).clone()));
    }
}

/// Record, per direction, the smallest finite angle any switcher measured this frame.
///
/// Switchers that did not tick this frame are skipped so stale readouts never
/// show up as measurements.
pub fn update_diagnostics(
    config: Res<SnapshotSwitcherPluginConfig>,
    mut diagnostics: Diagnostics,
    switchers: Query<&DirectionalSnapshotSwitcher>,
) {
    if !config.diagnostics {
        return;
    }

    for direction in Direction::ALL {
        let smallest = switchers
            .iter()
            .filter(|switcher| switcher.has_live_readout())
            .filter_map(|switcher| switcher.entry(direction))
            .map(|entry| entry.last_angle())
            .filter(|angle| angle.is_finite())
            .reduce(f32::min);

        if let Some(angle) = smallest {
            diagnostics.add_measurement(angle_path(direction), || angle as f64);
        }
    }
}
