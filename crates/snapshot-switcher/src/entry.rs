use crate::direction::Direction;

/// A directional slot: a label, where its target is, and which snapshot it selects.
///
/// `target` and `snapshot` are references owned elsewhere (an entity, a
/// transform handle, a mixer snapshot id). Only `last_angle` changes after
/// configuration; it is overwritten on every evaluation and carries no
/// functional meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionEntry<T, S> {
    pub direction: Direction,
    pub target: T,
    pub snapshot: S,
    pub(crate) last_angle: f32,
}

impl<T, S> DirectionEntry<T, S> {
    pub fn new(direction: Direction, target: T, snapshot: S) -> Self {
        Self {
            direction,
            target,
            snapshot,
            last_angle: f32::INFINITY,
        }
    }

    /// Angle in degrees computed by the most recent evaluation.
    ///
    /// `f32::INFINITY` before the first evaluation and for degenerate targets.
    pub fn last_angle(&self) -> f32 {
        self.last_angle
    }
}
