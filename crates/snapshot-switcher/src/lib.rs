//! Direction-driven audio snapshot switching
//!
//! Picks one of several audio-mixer snapshots from the direction a listener
//! (usually the camera) is facing, and asks the mixer for a timed crossfade
//! whenever that direction changes.
//!
//! Each tick the switcher measures the angle between the listener's
//! orientation and the bearing to every configured target, selects the
//! smallest, and compares the winner's label with the active one. The crate
//! only issues requests; snapshot blending is the mixer's job.
//!
//! # Quick start
//!
//! ```
//! use snapshot_switcher::{
//!     fixed_position, Direction, ListenerPose, SnapshotSwitcher, TickOutcome, TransitionLog,
//! };
//! use glam::{Quat, Vec3};
//!
//! let mut switcher = SnapshotSwitcher::builder()
//!     .entry(Direction::North, Vec3::new(0.0, 0.0, 10.0), "forest")
//!     .entry(Direction::East, Vec3::new(10.0, 0.0, 0.0), "river")
//!     .fade_seconds(1.5)
//!     .build()?;
//!
//! let mut mixer = TransitionLog::new();
//! let pose = ListenerPose::new(Vec3::ZERO, Quat::from_rotation_y(80f32.to_radians()));
//! let outcome = switcher.tick(&pose, &fixed_position, &mut mixer)?;
//!
//! assert!(matches!(outcome, TickOutcome::Switched { to: Direction::East, .. }));
//! assert_eq!(mixer.requests()[0].snapshot, "river");
//! # Ok::<(), snapshot_switcher::SwitcherError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`angle`] - Angular distance metrics
//! - [`config`] - Settings and RON configuration
//! - [`selector`] - Directional nearest-neighbour selection
//! - [`trigger`] - Transition triggering and the mixer seam

pub mod angle;
pub mod config;
mod direction;
mod entry;
pub mod error;
mod pose;
pub mod selector;
mod switcher;
pub mod trigger;

pub use angle::{angular_distance, look_rotation, AngleMetric, WORLD_UP};
pub use config::{
    validate_fade_time, EntryConfig, SwitcherConfig, SwitcherSettings, DEFAULT_FADE_SECONDS,
    FADE_TIME_RANGE,
};
pub use direction::Direction;
pub use entry::DirectionEntry;
pub use error::{Result, SwitcherError};
pub use pose::{ForwardAxis, ListenerPose};
pub use selector::{fixed_position, select, Selection, TargetLocator};
pub use switcher::{SnapshotSwitcher, SwitcherBuilder, TickOutcome};
pub use trigger::{SnapshotMixer, SnapshotTransitionTrigger, TransitionLog, TransitionRequest};

/// Re-export of the math types used in the public API.
pub use glam;
