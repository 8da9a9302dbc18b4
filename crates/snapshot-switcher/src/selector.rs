//! Directional nearest-neighbour selection.

use crate::angle::angular_distance;
use crate::config::SwitcherSettings;
use crate::direction::Direction;
use crate::entry::DirectionEntry;
use crate::error::{Result, SwitcherError};
use crate::pose::ListenerPose;
use glam::Vec3;

/// Resolves an entry's target reference to a world position.
///
/// Implemented for every `Fn(&T) -> Option<Vec3>`. Returning `None` means the
/// reference is dangling.
pub trait TargetLocator<T> {
    fn locate(&self, target: &T) -> Option<Vec3>;
}

impl<T, F> TargetLocator<T> for F
where
    F: Fn(&T) -> Option<Vec3>,
{
    fn locate(&self, target: &T) -> Option<Vec3> {
        self(target)
    }
}

/// Locator for entries whose target is a fixed world position.
pub fn fixed_position(target: &Vec3) -> Option<Vec3> {
    Some(*target)
}

/// Winner of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Position of the winning entry in configured order.
    pub index: usize,
    pub direction: Direction,
    /// Degrees, within `[0, 180]`.
    pub angle: f32,
}

/// Picks the entry the listener is angularly closest to facing.
///
/// Every entry's `last_angle` is refreshed. Ties go to the entry configured
/// first. Entries whose target coincides with the listener never win; if all
/// of them do, `Ok(None)` is returned.
pub fn select<T, S, L>(
    pose: &ListenerPose,
    entries: &mut [DirectionEntry<T, S>],
    locator: &L,
    settings: &SwitcherSettings,
) -> Result<Option<Selection>>
where
    L: TargetLocator<T> + ?Sized,
{
    if entries.is_empty() {
        return Err(SwitcherError::NoEntries);
    }
    if !pose.is_finite() {
        return Err(SwitcherError::InvalidListener);
    }

    // Resolve every target before touching diagnostics so a failed tick leaves them intact.
    let mut positions = Vec::with_capacity(entries.len());
    for entry in entries.iter() {
        let position = locator
            .locate(&entry.target)
            .ok_or_else(|| SwitcherError::missing_target(entry.direction))?;
        positions.push(position);
    }

    let mut best: Option<Selection> = None;
    let mut smallest = f32::INFINITY;
    for (index, (entry, position)) in entries.iter_mut().zip(positions).enumerate() {
        let angle = angular_distance(
            pose,
            position,
            settings.angle_metric,
            settings.forward_axis,
        );
        entry.last_angle = angle;

        if angle < smallest {
            smallest = angle;
            best = Some(Selection {
                index,
                direction: entry.direction,
                angle,
            });
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleMetric;
    use approx::assert_abs_diff_eq;
    use glam::Quat;

    fn compass() -> Vec<DirectionEntry<Vec3, &'static str>> {
        vec![
            DirectionEntry::new(Direction::North, Vec3::Z, "north"),
            DirectionEntry::new(Direction::South, Vec3::NEG_Z, "south"),
            DirectionEntry::new(Direction::East, Vec3::X, "east"),
            DirectionEntry::new(Direction::West, Vec3::NEG_X, "west"),
        ]
    }

    #[test]
    fn facing_north_selects_north_at_zero() {
        let mut entries = compass();
        let selection = select(
            &ListenerPose::default(),
            &mut entries,
            &fixed_position,
            &SwitcherSettings::default(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(selection.direction, Direction::North);
        assert_eq!(selection.index, 0);
        assert_abs_diff_eq!(selection.angle, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn refreshes_every_angle_readout() {
        let mut entries = compass();
        assert!(entries.iter().all(|e| e.last_angle().is_infinite()));

        select(
            &ListenerPose::default(),
            &mut entries,
            &fixed_position,
            &SwitcherSettings::default(),
        )
        .unwrap();

        assert_abs_diff_eq!(entries[1].last_angle(), 180.0, epsilon = 1e-3);
        assert_abs_diff_eq!(entries[2].last_angle(), 90.0, epsilon = 1e-3);
        assert_abs_diff_eq!(entries[3].last_angle(), 90.0, epsilon = 1e-3);
    }

    #[test]
    fn ties_go_to_first_configured_entry() {
        // East and west are both exactly 90 degrees off a +Z forward.
        let mut entries = vec![
            DirectionEntry::new(Direction::West, Vec3::NEG_X, "west"),
            DirectionEntry::new(Direction::East, Vec3::X, "east"),
        ];
        let pose = ListenerPose::default();
        let selection = select(
            &pose,
            &mut entries,
            &fixed_position,
            &SwitcherSettings::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(selection.direction, Direction::West);

        entries.reverse();
        let selection = select(
            &pose,
            &mut entries,
            &fixed_position,
            &SwitcherSettings::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(selection.direction, Direction::East);
        assert_eq!(selection.index, 0);
    }

    #[test]
    fn empty_entries_are_rejected() {
        let mut entries: Vec<DirectionEntry<Vec3, ()>> = Vec::new();
        let result = select(
            &ListenerPose::default(),
            &mut entries,
            &fixed_position,
            &SwitcherSettings::default(),
        );
        assert_eq!(result, Err(SwitcherError::NoEntries));
    }

    #[test]
    fn coincident_target_never_wins() {
        let mut entries = vec![
            DirectionEntry::new(Direction::North, Vec3::ZERO, "north"),
            DirectionEntry::new(Direction::South, Vec3::NEG_Z, "south"),
        ];
        let selection = select(
            &ListenerPose::default(),
            &mut entries,
            &fixed_position,
            &SwitcherSettings::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(selection.direction, Direction::South);
        assert!(entries[0].last_angle().is_infinite());
    }

    #[test]
    fn all_degenerate_yields_no_selection() {
        let mut entries = vec![DirectionEntry::new(Direction::North, Vec3::ONE, ())];
        let selection = select(
            &ListenerPose::at(Vec3::ONE),
            &mut entries,
            &fixed_position,
            &SwitcherSettings::default(),
        )
        .unwrap();
        assert!(selection.is_none());
    }

    #[test]
    fn dangling_target_reports_direction() {
        let mut entries = vec![
            DirectionEntry::new(Direction::North, 1u32, ()),
            DirectionEntry::new(Direction::East, 2u32, ()),
        ];
        let locator = |id: &u32| (*id == 1).then_some(Vec3::Z);
        let result = select(
            &ListenerPose::default(),
            &mut entries,
            &locator,
            &SwitcherSettings::default(),
        );
        assert_eq!(result, Err(SwitcherError::MissingTarget(Direction::East)));
        assert!(entries[0].last_angle().is_infinite());
    }

    #[test]
    fn non_finite_listener_is_rejected() {
        let mut entries = compass();
        let pose = ListenerPose::new(Vec3::ZERO, Quat::from_xyzw(f32::NAN, 0.0, 0.0, 1.0));
        let result = select(
            &pose,
            &mut entries,
            &fixed_position,
            &SwitcherSettings::default(),
        );
        assert_eq!(result, Err(SwitcherError::InvalidListener));
    }

    #[test]
    fn look_rotation_metric_selects_the_same_winner() {
        let mut entries = compass();
        let settings = SwitcherSettings {
            angle_metric: AngleMetric::LookRotation,
            ..SwitcherSettings::default()
        };
        let pose = ListenerPose::new(Vec3::ZERO, Quat::from_rotation_y(-70f32.to_radians()));
        let selection = select(&pose, &mut entries, &fixed_position, &settings)
            .unwrap()
            .unwrap();
        assert_eq!(selection.direction, Direction::West);
        assert_abs_diff_eq!(selection.angle, 20.0, epsilon = 1e-2);
    }
}
