//! Angular distance between a listener's orientation and a target bearing.
//!
//! Two metrics are offered. [`AngleMetric::Bearing`] measures the angle
//! between the listener's forward vector and the direction to the target, so
//! roll and the choice of up axis have no effect. [`AngleMetric::LookRotation`]
//! builds a full rotation facing the target (with world-up as the secondary
//! axis) and measures the shortest arc between it and the listener rotation,
//! which also counts roll and pitch of the up axis.
//!
//! Both return degrees in `[0, 180]`, and `f32::INFINITY` when no bearing
//! exists (target coincides with the listener, or non-finite input).

use crate::pose::{ForwardAxis, ListenerPose};
use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Squared length below which a direction is treated as zero.
const DEGENERATE_EPSILON: f32 = 1e-12;

/// World up used as the secondary axis of look rotations.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// How the angle between the listener and a target is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMetric {
    /// Angle between forward vector and target direction.
    #[default]
    Bearing,
    /// Shortest-arc angle between listener rotation and a look rotation at the target.
    LookRotation,
}

/// Degrees between the listener's orientation and the bearing to `target`.
pub fn angular_distance(
    pose: &ListenerPose,
    target: Vec3,
    metric: AngleMetric,
    axis: ForwardAxis,
) -> f32 {
    let direction = target - pose.position;
    if !direction.is_finite() || direction.length_squared() <= DEGENERATE_EPSILON {
        return f32::INFINITY;
    }

    let rotation = pose.rotation.normalize();
    if !rotation.is_finite() {
        return f32::INFINITY;
    }

    let radians = match metric {
        AngleMetric::Bearing => (rotation * axis.vector()).angle_between(direction),
        AngleMetric::LookRotation => {
            let look = look_rotation(direction.normalize(), WORLD_UP, axis);
            rotation.angle_between(look)
        }
    };

    radians.to_degrees().clamp(0.0, 180.0)
}

/// Rotation that maps `axis` onto `direction`, keeping local up as close to `up` as possible.
///
/// `direction` must be normalized. When it is collinear with `up` the
/// secondary axis is undefined and the shortest-arc rotation is returned.
pub fn look_rotation(direction: Vec3, up: Vec3, axis: ForwardAxis) -> Quat {
    // Local +Z is the column that ends up on `z`.
    let z = match axis {
        ForwardAxis::PositiveZ => direction,
        ForwardAxis::NegativeZ => -direction,
    };
    let right = up.cross(z);
    if right.length_squared() <= DEGENERATE_EPSILON {
        return Quat::from_rotation_arc(axis.vector(), direction);
    }
    let right = right.normalize();
    let up = z.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, z))
}
