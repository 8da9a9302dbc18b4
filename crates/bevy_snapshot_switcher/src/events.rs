use bevy::prelude::*;
use snapshot_switcher::Direction;

/// Request for the host's audio mixer to crossfade to a snapshot.
///
/// Written once per label change of a [`DirectionalSnapshotSwitcher`](crate::DirectionalSnapshotSwitcher).
/// Nothing in this crate consumes it; the game's mixer integration reads
/// these and starts the blend.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct SnapshotTransitionRequest {
    /// Entity carrying the switcher that issued the request.
    pub switcher: Entity,
    /// Newly active direction.
    pub direction: Direction,
    /// Name of the snapshot to transition to.
    pub snapshot: String,
    /// Crossfade duration in seconds.
    pub fade_seconds: f32,
}
