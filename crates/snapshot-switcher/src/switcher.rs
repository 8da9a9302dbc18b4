use crate::config::SwitcherSettings;
use crate::direction::Direction;
use crate::entry::DirectionEntry;
use crate::error::{Result, SwitcherError};
use crate::pose::ListenerPose;
use crate::selector::{select, TargetLocator};
use crate::trigger::{SnapshotMixer, SnapshotTransitionTrigger};

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The winner is the already active label; nothing was requested.
    Held { direction: Direction, angle: f32 },
    /// The winner changed and one transition was requested.
    Switched {
        from: Direction,
        to: Direction,
        angle: f32,
    },
    /// Every target coincided with the listener; the active label is kept.
    NoCandidate,
}

impl TickOutcome {
    pub fn switched(&self) -> bool {
        matches!(self, TickOutcome::Switched { .. })
    }
}

/// Selects a mixer snapshot from the direction the listener faces.
///
/// Holds the ordered entries and the active label. The host calls
/// [`tick`](Self::tick) once per frame with a fresh listener pose.
#[derive(Debug, Clone)]
pub struct SnapshotSwitcher<T, S> {
    entries: Vec<DirectionEntry<T, S>>,
    settings: SwitcherSettings,
    trigger: SnapshotTransitionTrigger,
}

impl<T, S> SnapshotSwitcher<T, S> {
    pub fn builder() -> SwitcherBuilder<T, S> {
        SwitcherBuilder::default()
    }

    /// Builds a switcher whose active label is the first entry's.
    pub fn new(entries: Vec<DirectionEntry<T, S>>, settings: SwitcherSettings) -> Result<Self> {
        Self::with_initial(entries, settings, None)
    }

    fn with_initial(
        entries: Vec<DirectionEntry<T, S>>,
        settings: SwitcherSettings,
        initial: Option<Direction>,
    ) -> Result<Self> {
        let first = entries.first().ok_or(SwitcherError::NoEntries)?.direction;
        for (index, entry) in entries.iter().enumerate() {
            if entries[..index]
                .iter()
                .any(|earlier| earlier.direction == entry.direction)
            {
                return Err(SwitcherError::DuplicateDirection(entry.direction));
            }
        }

        let initial = match initial {
            Some(direction) if entries.iter().any(|e| e.direction == direction) => direction,
            Some(direction) => return Err(SwitcherError::UnknownDirection(direction)),
            None => first,
        };

        let settings = settings.validated()?;
        Ok(Self {
            trigger: SnapshotTransitionTrigger::new(initial, settings.fade_seconds),
            entries,
            settings,
        })
    }

    /// Evaluates one frame: selects the closest direction and requests a
    /// transition if it changed.
    ///
    /// On error the active label and the angle readouts are left as they were.
    pub fn tick<L, M>(
        &mut self,
        pose: &ListenerPose,
        locator: &L,
        mixer: &mut M,
    ) -> Result<TickOutcome>
    where
        L: TargetLocator<T> + ?Sized,
        M: SnapshotMixer<S> + ?Sized,
    {
        let Some(selection) = select(pose, &mut self.entries, locator, &self.settings)? else {
            tracing::trace!("no direction has a usable bearing");
            return Ok(TickOutcome::NoCandidate);
        };

        let from = self.trigger.current();
        let winner = &self.entries[selection.index];
        let to = self.trigger.update(winner.direction, &winner.snapshot, mixer);

        Ok(if from == to {
            TickOutcome::Held {
                direction: to,
                angle: selection.angle,
            }
        } else {
            TickOutcome::Switched {
                from,
                to,
                angle: selection.angle,
            }
        })
    }

    /// Active label.
    pub fn current_direction(&self) -> Direction {
        self.trigger.current()
    }

    /// Snapshot of the active label.
    pub fn current_snapshot(&self) -> &S {
        let current = self.trigger.current();
        self.entries
            .iter()
            .find(|entry| entry.direction == current)
            .map(|entry| &entry.snapshot)
            // Construction guarantees the active label has an entry.
            .unwrap_or(&self.entries[0].snapshot)
    }

    pub fn entries(&self) -> &[DirectionEntry<T, S>] {
        &self.entries
    }

    pub fn entry(&self, direction: Direction) -> Option<&DirectionEntry<T, S>> {
        self.entries.iter().find(|entry| entry.direction == direction)
    }

    pub fn settings(&self) -> &SwitcherSettings {
        &self.settings
    }

    /// Replaces the settings. Takes effect on the next tick; the active label is kept.
    pub fn apply_settings(&mut self, settings: SwitcherSettings) -> Result<()> {
        let settings = settings.validated()?;
        self.trigger.set_fade_seconds(settings.fade_seconds);
        self.settings = settings;
        Ok(())
    }

    /// Per-entry angles from the most recent tick, in configured order.
    pub fn angle_readout(&self) -> impl Iterator<Item = (Direction, f32)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.direction, entry.last_angle()))
    }
}

/// Builder for [`SnapshotSwitcher`].
#[derive(Debug, Clone)]
pub struct SwitcherBuilder<T, S> {
    entries: Vec<DirectionEntry<T, S>>,
    settings: SwitcherSettings,
    initial: Option<Direction>,
}

impl<T, S> Default for SwitcherBuilder<T, S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            settings: SwitcherSettings::default(),
            initial: None,
        }
    }
}

impl<T, S> SwitcherBuilder<T, S> {
    /// Appends an entry; configured order decides ties.
    pub fn entry(mut self, direction: Direction, target: T, snapshot: S) -> Self {
        self.entries.push(DirectionEntry::new(direction, target, snapshot));
        self
    }

    pub fn settings(mut self, settings: SwitcherSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn fade_seconds(mut self, seconds: f32) -> Self {
        self.settings.fade_seconds = seconds;
        self
    }

    /// Overrides the active label used before the first tick.
    pub fn initial_direction(mut self, direction: Direction) -> Self {
        self.initial = Some(direction);
        self
    }

    pub fn build(self) -> Result<SnapshotSwitcher<T, S>> {
        SnapshotSwitcher::with_initial(self.entries, self.settings, self.initial)
    }
}
