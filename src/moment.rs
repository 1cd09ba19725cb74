//! Signed moments of frame forces about a pivot.
//!
//! Moments follow the right-hand rule with X to the right and Y upwards:
//! positive values turn the frame counter-clockwise, negative values clockwise.
//! This is unrelated to any "right/up is positive" convention used for linear
//! force components.

use std::fmt;

use nalgebra::Vector2;
use serde::Serialize;

use crate::force::Force;
use crate::geometry::{Distances, PointId, PointMap};

/// Half-width, in newton metres, of the band treated as no net rotation.
pub const EQUILIBRIUM_TOLERANCE: f64 = 0.01;

/// Sense of rotation implied by a moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rotation {
    /// Moment above the tolerance band.
    CounterClockwise,
    /// Moment below the tolerance band.
    Clockwise,
    /// Moment inside the closed band `[-0.01, 0.01]`.
    Equilibrium,
}

impl Rotation {
    /// Classify a moment using [`EQUILIBRIUM_TOLERANCE`].
    ///
    /// Values exactly on the band edge count as equilibrium.
    ///
    /// # Examples
    /// ```
    /// use momentx::Rotation;
    ///
    /// assert_eq!(Rotation::classify(0.009), Rotation::Equilibrium);
    /// assert_eq!(Rotation::classify(0.011), Rotation::CounterClockwise);
    /// assert_eq!(Rotation::classify(-200.0), Rotation::Clockwise);
    /// ```
    #[must_use]
    pub fn classify(moment: f64) -> Self {
        if moment > EQUILIBRIUM_TOLERANCE {
            Rotation::CounterClockwise
        } else if moment < -EQUILIBRIUM_TOLERANCE {
            Rotation::Clockwise
        } else {
            Rotation::Equilibrium
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rotation::CounterClockwise => "counter-clockwise",
            Rotation::Clockwise => "clockwise",
            Rotation::Equilibrium => "in equilibrium",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vector from the pivot to the application point, in metres.
#[must_use]
pub fn position_vector(application: PointId, distances: &Distances, pivot: PointId) -> Vector2<f64> {
    distances.point(application).to_vector() - distances.point(pivot).to_vector()
}

/// Moment of a single force about `pivot` in newton metres.
///
/// Returns exactly `0` when no pivot is selected or the force is disabled.
/// Uses the stored components of the force directly.
///
/// # Examples
/// ```
/// use momentx::{single_force_moment, Distances, Force, ForceInput, PointId};
///
/// let force = Force::new(PointId::C).with_input(ForceInput::Components { fx: 50.0, fy: 0.0 });
/// let moment = single_force_moment(&force, &Distances::new(3.0, 4.0, 5.0), Some(PointId::B));
/// assert_eq!(moment, -200.0);
/// ```
#[must_use]
pub fn single_force_moment(force: &Force, distances: &Distances, pivot: Option<PointId>) -> f64 {
    moment_at(force.id(), force, distances, pivot)
}

/// Moment of `force` applied at `application`, whatever point the force
/// itself names.
fn moment_at(
    application: PointId,
    force: &Force,
    distances: &Distances,
    pivot: Option<PointId>,
) -> f64 {
    let Some(pivot) = pivot else {
        return 0.0;
    };
    if !force.is_enabled() {
        return 0.0;
    }
    let r = position_vector(application, distances, pivot);
    r.perp(&force.to_vector())
}

/// Net moment of all forces about `pivot` in newton metres.
///
/// Returns `0` when no pivot is selected. Each force acts at the point of the
/// slot holding it.
#[must_use]
pub fn total_moment(forces: &PointMap<Force>, distances: &Distances, pivot: Option<PointId>) -> f64 {
    if pivot.is_none() {
        return 0.0;
    }
    let total = forces
        .iter()
        .map(|(id, force)| moment_at(id, force, distances, pivot))
        .sum::<f64>();
    log::trace!("total moment about {pivot:?}: {total} N m");
    total
}

/// Perpendicular distance from the pivot to the line of action of the force.
///
/// Returns `None` without a pivot or for a zero force, where the lever arm is
/// undefined. The enabled flag is ignored so disabled forces can still be
/// explained.
#[must_use]
pub fn lever_arm(force: &Force, distances: &Distances, pivot: Option<PointId>) -> Option<f64> {
    let pivot = pivot?;
    let magnitude = force.magnitude();
    if magnitude == 0.0 {
        return None;
    }
    let r = position_vector(force.id(), distances, pivot);
    Some(r.perp(&force.to_vector()).abs() / magnitude)
}

/// Per-force and net moments about a pivot, ready for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MomentBreakdown {
    /// Pivot the moments were taken about.
    pub pivot: Option<PointId>,
    /// Moment contributed by each force; zero for disabled forces.
    pub moments: PointMap<f64>,
    /// Sum of all contributions.
    pub total: f64,
    /// Classification of the total.
    pub rotation: Rotation,
}

impl MomentBreakdown {
    /// Evaluate every force about `pivot`.
    #[must_use]
    pub fn compute(forces: &PointMap<Force>, distances: &Distances, pivot: Option<PointId>) -> Self {
        let moments = forces.map(|id, force| moment_at(id, force, distances, pivot));
        let total = total_moment(forces, distances, pivot);
        Self {
            pivot,
            moments,
            total,
            rotation: Rotation::classify(total),
        }
    }

    /// Whether there is anything to show yet: a pivot and at least one
    /// enabled force.
    #[must_use]
    pub fn is_computable(pivot: Option<PointId>, forces: &PointMap<Force>) -> bool {
        pivot.is_some() && forces.values().any(Force::is_enabled)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::force::{Components, ForceInput};

    fn lesson_distances() -> Distances {
        Distances::new(3.0, 4.0, 5.0)
    }

    fn force_at(id: PointId, fx: f64, fy: f64) -> Force {
        Force::new(id).with_input(ForceInput::Components { fx, fy })
    }

    #[test]
    fn no_pivot_gives_zero() {
        let force = force_at(PointId::C, 50.0, 0.0);
        assert_eq!(single_force_moment(&force, &lesson_distances(), None), 0.0);
    }

    #[test]
    fn disabled_force_gives_zero() {
        let force = force_at(PointId::C, 50.0, 0.0).with_enabled(false);
        let moment = single_force_moment(&force, &lesson_distances(), Some(PointId::B));
        assert_eq!(moment, 0.0);
    }

    #[test]
    fn force_at_pivot_is_inert() {
        for id in PointId::ALL {
            let force = force_at(id, -17.5, 93.25);
            assert_eq!(single_force_moment(&force, &lesson_distances(), Some(id)), 0.0);
        }
    }

    #[test]
    fn line_of_action_through_pivot_gives_zero() {
        // C lies on the diagonal from B, and the force points along it
        let mut force = Force::new(PointId::C);
        force.set_magnitude_angle(120.0, 4.0_f64.atan2(3.0).to_degrees());
        let moment = single_force_moment(&force, &lesson_distances(), Some(PointId::B));
        assert_relative_eq!(moment, 0.0, epsilon = 1.0e-9);
        assert_eq!(Rotation::classify(moment), Rotation::Equilibrium);
    }

    #[test]
    fn sign_follows_right_hand_rule() {
        let distances = lesson_distances();
        let up_at_d = force_at(PointId::D, 0.0, 100.0);
        assert_relative_eq!(
            single_force_moment(&up_at_d, &distances, Some(PointId::B)),
            500.0
        );
        let down_at_d = force_at(PointId::D, 0.0, -100.0);
        assert_relative_eq!(
            single_force_moment(&down_at_d, &distances, Some(PointId::B)),
            -500.0
        );
    }

    #[test]
    fn moment_uses_stored_components() {
        let mut force = Force::new(PointId::A);
        force.set_components(Components::new(-35.36, 35.36));
        let moment = single_force_moment(&force, &lesson_distances(), Some(PointId::B));
        // r = (0, 4): M = 0 * 35.36 - 4 * (-35.36)
        assert_relative_eq!(moment, 141.44, epsilon = 1.0e-9);
    }

    #[test]
    fn classification_band_is_closed() {
        assert_eq!(Rotation::classify(0.0), Rotation::Equilibrium);
        assert_eq!(Rotation::classify(0.005), Rotation::Equilibrium);
        assert_eq!(Rotation::classify(-0.005), Rotation::Equilibrium);
        assert_eq!(Rotation::classify(0.01), Rotation::Equilibrium);
        assert_eq!(Rotation::classify(-0.01), Rotation::Equilibrium);
        assert_eq!(Rotation::classify(0.02), Rotation::CounterClockwise);
        assert_eq!(Rotation::classify(-0.02), Rotation::Clockwise);
        assert_eq!(Rotation::classify(-0.011), Rotation::Clockwise);
    }

    #[test]
    fn lever_arm_is_perpendicular_distance() {
        let distances = lesson_distances();
        let force = force_at(PointId::C, 50.0, 0.0);
        let arm = lever_arm(&force, &distances, Some(PointId::B)).expect("defined");
        assert_relative_eq!(arm, 4.0, epsilon = 1.0e-12);

        let zero = force_at(PointId::C, 0.0, 0.0);
        assert_eq!(lever_arm(&zero, &distances, Some(PointId::B)), None);
        assert_eq!(lever_arm(&force, &distances, None), None);
    }

    #[test]
    fn slot_decides_application_point() {
        let distances = lesson_distances();
        let mut forces = PointMap::from_fn(|id| Force::new(id).with_enabled(false));
        // Stored under A although it names C: A = (0, 4) gives no moment for
        // a vertical pull about B, C = (3, 4) would give 150
        forces[PointId::A] = force_at(PointId::C, 0.0, 50.0);
        assert_eq!(total_moment(&forces, &distances, Some(PointId::B)), 0.0);

        forces[PointId::C] = force_at(PointId::C, 0.0, 50.0);
        let breakdown = MomentBreakdown::compute(&forces, &distances, Some(PointId::B));
        assert_eq!(breakdown.moments[PointId::A], 0.0);
        assert_relative_eq!(breakdown.moments[PointId::C], 150.0);
        assert_relative_eq!(breakdown.total, 150.0);
    }

    #[test]
    fn breakdown_matches_individual_moments() {
        let distances = lesson_distances();
        let forces = PointMap {
            a: force_at(PointId::A, 50.0, 0.0),
            b: force_at(PointId::B, 0.0, -30.0),
            c: force_at(PointId::C, 0.0, 10.0),
            d: force_at(PointId::D, 0.0, 0.0).with_enabled(false),
        };
        let breakdown = MomentBreakdown::compute(&forces, &distances, Some(PointId::B));
        assert_relative_eq!(breakdown.moments[PointId::A], -200.0);
        assert_eq!(breakdown.moments[PointId::B], 0.0);
        assert_relative_eq!(breakdown.moments[PointId::C], 30.0);
        assert_eq!(breakdown.moments[PointId::D], 0.0);
        assert_relative_eq!(breakdown.total, -170.0);
        assert_eq!(breakdown.rotation, Rotation::Clockwise);
        assert!(MomentBreakdown::is_computable(Some(PointId::B), &forces));
        assert!(!MomentBreakdown::is_computable(None, &forces));
    }
}
