use crate::events::SnapshotTransitionRequest;
use crate::listener::{listener_pose, ResolvedListener};
use bevy::prelude::*;
use snapshot_switcher::{
    ForwardAxis, SnapshotSwitcher, SwitcherBuilder, SwitcherSettings, TickOutcome, TransitionLog,
};

/// Switches audio snapshots based on which target entity the listener faces.
///
/// Targets are entities located through their [`GlobalTransform`]; snapshots
/// are names handed to the mixer through [`SnapshotTransitionRequest`].
///
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_snapshot_switcher::{Direction, DirectionalSnapshotSwitcher};
///
/// fn setup(mut commands: Commands) {
///     let forest = commands.spawn(Transform::from_xyz(0.0, 0.0, -20.0)).id();
///     let river = commands.spawn(Transform::from_xyz(20.0, 0.0, 0.0)).id();
///
///     let switcher = DirectionalSnapshotSwitcher::builder()
///         .entry(Direction::North, forest, "forest".into())
///         .entry(Direction::East, river, "river".into())
///         .fade_seconds(2.0)
///         .build()
///         .expect("valid switcher setup");
///     commands.spawn(DirectionalSnapshotSwitcher::from(switcher));
/// }
/// ```
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct DirectionalSnapshotSwitcher {
    #[deref]
    switcher: SnapshotSwitcher<Entity, String>,
    live_readout: bool,
}

impl DirectionalSnapshotSwitcher {
    /// Builder preset for Bevy's camera convention (looking down -Z).
    ///
    /// Calling `.settings(..)` on the builder replaces the whole preset,
    /// so pass `ForwardAxis::NegativeZ` along with it for camera listeners.
    pub fn builder() -> SwitcherBuilder<Entity, String> {
        SnapshotSwitcher::builder().settings(Self::camera_settings())
    }

    /// Default settings with the forward axis of a Bevy camera.
    pub fn camera_settings() -> SwitcherSettings {
        SwitcherSettings::default().forward_axis(ForwardAxis::NegativeZ)
    }

    /// Whether the angle readout was measured by this frame's tick.
    ///
    /// False until the first successful tick, and after any frame where the
    /// tick failed or no listener was resolved.
    pub fn has_live_readout(&self) -> bool {
        self.live_readout
    }

    pub fn into_inner(self) -> SnapshotSwitcher<Entity, String> {
        self.switcher
    }
}

impl From<SnapshotSwitcher<Entity, String>> for DirectionalSnapshotSwitcher {
    fn from(switcher: SnapshotSwitcher<Entity, String>) -> Self {
        Self {
            switcher,
            live_readout: false,
        }
    }
}

/// Tick every switcher against the resolved listener once per frame.
pub fn update_directional_snapshots(
    listener: Res<ResolvedListener>,
    transforms: Query<&GlobalTransform>,
    mut switchers: Query<(Entity, &mut DirectionalSnapshotSwitcher)>,
    mut requests: MessageWriter<SnapshotTransitionRequest>,
) {
    let pose = listener
        .entity()
        .and_then(|entity| transforms.get(entity).ok())
        .map(listener_pose);
    let locate = |target: &Entity| {
        transforms
            .get(*target)
            .ok()
            .map(GlobalTransform::translation)
    };
    let mut log = TransitionLog::new();

    for (entity, mut switcher) in &mut switchers {
        switcher.live_readout = false;
        let Some(pose) = pose else {
            continue;
        };
        match switcher.switcher.tick(&pose, &locate, &mut log) {
            Ok(outcome) => {
                switcher.live_readout = true;
                if let TickOutcome::Switched { from, to, angle } = outcome {
                    debug!(
                        "Snapshot switcher {} moved {} -> {} ({:.1} deg)",
                        entity, from, to, angle
                    );
                    for request in log.drain() {
                        requests.write(SnapshotTransitionRequest {
                            switcher: entity,
                            direction: to,
                            snapshot: request.snapshot,
                            fade_seconds: request.fade_seconds,
                        });
                    }
                }
            }
            Err(err) if err.is_configuration_error() => {
                error!("Snapshot switcher {} is misconfigured: {}", entity, err);
            }
            Err(err) => {
                warn!("Snapshot switcher {} skipped a frame: {}", entity, err);
            }
        }
    }
}
