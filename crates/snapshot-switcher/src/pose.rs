use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Local axis a listener looks along when its rotation is identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForwardAxis {
    /// +Z forward, +Y up (left-handed engines).
    #[default]
    PositiveZ,
    /// -Z forward, +Y up (Bevy, OpenGL style cameras).
    NegativeZ,
}

impl ForwardAxis {
    /// Unit vector of the axis in local space.
    pub fn vector(self) -> Vec3 {
        match self {
            ForwardAxis::PositiveZ => Vec3::Z,
            ForwardAxis::NegativeZ => Vec3::NEG_Z,
        }
    }
}

/// Position and orientation of the observer, read fresh every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListenerPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl ListenerPose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Listener at `position` with identity rotation.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// World-space forward vector for the given axis convention.
    pub fn forward(&self, axis: ForwardAxis) -> Vec3 {
        self.rotation * axis.vector()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite()
    }
}

impl Default for ListenerPose {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}
