//! Switcher configuration.
//!
//! Settings can be built in code or read from RON:
//!
//! ```ron
//! (
//!     settings: (fade_seconds: 1.5, angle_metric: bearing),
//!     entries: [
//!         (direction: North, target: (0.0, 0.0, 10.0), snapshot: "forest"),
//!         (direction: East, target: (10.0, 0.0, 0.0), snapshot: "river"),
//!     ],
//! )
//! ```

use crate::angle::AngleMetric;
use crate::direction::Direction;
use crate::entry::DirectionEntry;
use crate::error::{Result, SwitcherError};
use crate::pose::ForwardAxis;
use crate::switcher::SnapshotSwitcher;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Fade time used when none is configured.
pub const DEFAULT_FADE_SECONDS: f32 = 1.0;

/// Accepted fade times; larger values are clamped to the upper bound.
pub const FADE_TIME_RANGE: RangeInclusive<f32> = 0.0..=10.0;

/// Tunables shared by every entry of a switcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitcherSettings {
    /// Crossfade duration handed to the mixer on every transition.
    pub fade_seconds: f32,
    pub angle_metric: AngleMetric,
    pub forward_axis: ForwardAxis,
}

impl Default for SwitcherSettings {
    fn default() -> Self {
        Self {
            fade_seconds: DEFAULT_FADE_SECONDS,
            angle_metric: AngleMetric::default(),
            forward_axis: ForwardAxis::default(),
        }
    }
}

impl SwitcherSettings {
    pub fn fade_seconds(mut self, seconds: f32) -> Self {
        self.fade_seconds = seconds;
        self
    }

    pub fn angle_metric(mut self, metric: AngleMetric) -> Self {
        self.angle_metric = metric;
        self
    }

    pub fn forward_axis(mut self, axis: ForwardAxis) -> Self {
        self.forward_axis = axis;
        self
    }

    /// Checks the fade time, clamping it into [`FADE_TIME_RANGE`].
    pub fn validated(mut self) -> Result<Self> {
        self.fade_seconds = validate_fade_time(self.fade_seconds)?;
        Ok(self)
    }
}

/// Rejects negative or non-finite fade times and clamps long ones.
pub fn validate_fade_time(seconds: f32) -> Result<f32> {
    if !seconds.is_finite() || seconds < *FADE_TIME_RANGE.start() {
        return Err(SwitcherError::InvalidFadeTime(seconds));
    }
    let max = *FADE_TIME_RANGE.end();
    if seconds > max {
        tracing::warn!(seconds, max, "fade time above range, clamping");
        return Ok(max);
    }
    Ok(seconds)
}

/// One configured slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryConfig<T, S> {
    pub direction: Direction,
    pub target: T,
    pub snapshot: S,
}

impl<T, S> From<EntryConfig<T, S>> for DirectionEntry<T, S> {
    fn from(config: EntryConfig<T, S>) -> Self {
        DirectionEntry::new(config.direction, config.target, config.snapshot)
    }
}

/// Complete switcher description, as produced by external setup tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitcherConfig<T, S> {
    #[serde(default)]
    pub settings: SwitcherSettings,
    #[serde(default)]
    pub initial_direction: Option<Direction>,
    pub entries: Vec<EntryConfig<T, S>>,
}

impl<T, S> SwitcherConfig<T, S>
where
    T: DeserializeOwned,
    S: DeserializeOwned,
{
    /// Parses a RON document.
    pub fn from_ron_str(text: &str) -> Result<Self> {
        Ok(ron::de::from_str(text)?)
    }
}

impl<T, S> SwitcherConfig<T, S> {
    /// Validates the configuration and builds a switcher from it.
    pub fn into_switcher(self) -> Result<SnapshotSwitcher<T, S>> {
        let mut builder = SnapshotSwitcher::builder().settings(self.settings);
        if let Some(direction) = self.initial_direction {
            builder = builder.initial_direction(direction);
        }
        for entry in self.entries {
            builder = builder.entry(entry.direction, entry.target, entry.snapshot);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn defaults_are_one_second_bearing_positive_z() {
        let settings = SwitcherSettings::default();
        assert_eq!(settings.fade_seconds, 1.0);
        assert_eq!(settings.angle_metric, AngleMetric::Bearing);
        assert_eq!(settings.forward_axis, ForwardAxis::PositiveZ);
    }

    #[test]
    fn fade_time_is_clamped_to_ten_seconds() {
        assert_eq!(validate_fade_time(25.0), Ok(10.0));
        assert_eq!(validate_fade_time(0.0), Ok(0.0));
        assert_eq!(validate_fade_time(3.5), Ok(3.5));
    }

    #[test]
    fn negative_or_nan_fade_time_is_rejected() {
        assert_eq!(
            validate_fade_time(-0.5),
            Err(SwitcherError::InvalidFadeTime(-0.5))
        );
        assert!(matches!(
            validate_fade_time(f32::NAN),
            Err(SwitcherError::InvalidFadeTime(_))
        ));
    }

    #[test]
    fn parses_ron_with_defaults() {
        let text = r#"(
            entries: [
                (direction: North, target: (0.0, 0.0, 10.0), snapshot: "forest"),
                (direction: East, target: (10.0, 0.0, 0.0), snapshot: "river"),
            ],
        )"#;
        let config: SwitcherConfig<Vec3, String> = SwitcherConfig::from_ron_str(text).unwrap();
        assert_eq!(config.settings, SwitcherSettings::default());
        assert_eq!(config.initial_direction, None);
        assert_eq!(config.entries.len(), 2);
        assert_eq!(config.entries[1].direction, Direction::East);
        assert_eq!(config.entries[1].target, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(config.entries[0].snapshot, "forest");
    }

    #[test]
    fn parses_ron_settings() {
        let text = r#"(
            settings: (
                fade_seconds: 2.5,
                angle_metric: look_rotation,
                forward_axis: negative_z,
            ),
            initial_direction: Some(East),
            entries: [
                (direction: East, target: (1.0, 0.0, 0.0), snapshot: "river"),
            ],
        )"#;
        let config: SwitcherConfig<Vec3, String> = SwitcherConfig::from_ron_str(text).unwrap();
        assert_eq!(config.settings.fade_seconds, 2.5);
        assert_eq!(config.settings.angle_metric, AngleMetric::LookRotation);
        assert_eq!(config.settings.forward_axis, ForwardAxis::NegativeZ);
        assert_eq!(config.initial_direction, Some(Direction::East));

        let switcher = config.into_switcher().unwrap();
        assert_eq!(switcher.current_direction(), Direction::East);
    }

    #[test]
    fn malformed_ron_is_a_config_error() {
        let result: Result<SwitcherConfig<Vec3, String>> =
            SwitcherConfig::from_ron_str("(entries: [(direction: Up)])");
        assert!(matches!(result, Err(SwitcherError::Config(_))));
    }

    #[test]
    fn empty_config_does_not_build() {
        let config: SwitcherConfig<Vec3, String> = SwitcherConfig {
            settings: SwitcherSettings::default(),
            initial_direction: None,
            entries: Vec::new(),
        };
        assert_eq!(config.into_switcher().unwrap_err(), SwitcherError::NoEntries);
    }
}
