//! Snapshot transition triggering.
//!
//! The trigger keeps the currently active label and asks a
//! [`SnapshotMixer`] for a timed crossfade whenever the winning label
//! changes. Blend scheduling and interpolation belong to the mixer.

use crate::direction::Direction;

/// Audio-mixing subsystem that can crossfade to a snapshot.
///
/// Calls are fire-and-forget: the trigger has no visibility into whether a
/// transition succeeds.
pub trait SnapshotMixer<S> {
    /// Begin a transition to `snapshot` over `fade_seconds`.
    fn transition_to(&mut self, snapshot: &S, fade_seconds: f32);
}

impl<S, M> SnapshotMixer<S> for &mut M
where
    M: SnapshotMixer<S> + ?Sized,
{
    fn transition_to(&mut self, snapshot: &S, fade_seconds: f32) {
        (**self).transition_to(snapshot, fade_seconds);
    }
}

/// A transition request as handed to a mixer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest<S> {
    pub snapshot: S,
    pub fade_seconds: f32,
}

/// Mixer that records requests instead of performing them.
///
/// Hosts that forward transitions asynchronously (for example as engine
/// messages) drain it after each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionLog<S> {
    requests: Vec<TransitionRequest<S>>,
}

impl<S> Default for TransitionLog<S> {
    fn default() -> Self {
        Self {
            requests: Vec::new(),
        }
    }
}

impl<S> TransitionLog<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[TransitionRequest<S>] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Remove and return every recorded request.
    pub fn drain(&mut self) -> std::vec::Drain<'_, TransitionRequest<S>> {
        self.requests.drain(..)
    }
}

impl<S: Clone> SnapshotMixer<S> for TransitionLog<S> {
    fn transition_to(&mut self, snapshot: &S, fade_seconds: f32) {
        self.requests.push(TransitionRequest {
            snapshot: snapshot.clone(),
            fade_seconds,
        });
    }
}

/// Tracks the active label and requests a crossfade when it changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotTransitionTrigger {
    current: Direction,
    fade_seconds: f32,
}

impl SnapshotTransitionTrigger {
    pub fn new(initial: Direction, fade_seconds: f32) -> Self {
        Self {
            current: initial,
            fade_seconds,
        }
    }

    /// Currently active label.
    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn fade_seconds(&self) -> f32 {
        self.fade_seconds
    }

    pub(crate) fn set_fade_seconds(&mut self, seconds: f32) {
        self.fade_seconds = seconds;
    }

    /// Moves to `winner`, issuing one transition request if it differs from the active label.
    ///
    /// Returns the active label after the update.
    pub fn update<S, M>(&mut self, winner: Direction, snapshot: &S, mixer: &mut M) -> Direction
    where
        M: SnapshotMixer<S> + ?Sized,
    {
        if winner != self.current {
            tracing::debug!(
                from = %self.current,
                to = %winner,
                fade_seconds = self.fade_seconds,
                "transitioning snapshot"
            );
            mixer.transition_to(snapshot, self.fade_seconds);
            self.current = winner;
        }
        self.current
    }
}
