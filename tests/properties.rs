//! Property-based tests for the moment engine.
//!
//! These check invariants that hold for every configuration, not just the
//! lesson examples.

use momentx::{
    from_components, from_magnitude_angle, single_force_moment, total_moment, Distances, Force,
    ForceInput, PointId, PointMap, Rotation,
};
use proptest::prelude::*;

fn point_id() -> impl Strategy<Value = PointId> {
    prop::sample::select(PointId::ALL.to_vec())
}

fn distances() -> impl Strategy<Value = Distances> {
    (0.0..10.0f64, 0.0..10.0f64, 0.0..10.0f64).prop_map(|(d1, d2, d3)| Distances::new(d1, d2, d3))
}

fn force_at(id: PointId) -> impl Strategy<Value = Force> {
    (0.0..200.0f64, 0.0..360.0f64, any::<bool>()).prop_map(move |(magnitude, angle, enabled)| {
        Force::new(id)
            .with_input(ForceInput::MagnitudeAngle { magnitude, angle })
            .with_enabled(enabled)
    })
}

fn forces() -> impl Strategy<Value = PointMap<Force>> {
    (
        force_at(PointId::A),
        force_at(PointId::B),
        force_at(PointId::C),
        force_at(PointId::D),
    )
        .prop_map(|(a, b, c, d)| PointMap { a, b, c, d })
}

/// Smallest absolute difference between two directions in degrees.
fn angular_gap(a: f64, b: f64) -> f64 {
    let gap = (a - b).rem_euclid(360.0);
    gap.min(360.0 - gap)
}

proptest! {
    /// Without a pivot nothing turns.
    #[test]
    fn no_pivot_means_no_moment(forces in forces(), distances in distances()) {
        prop_assert_eq!(total_moment(&forces, &distances, None), 0.0);
    }

    /// Switching a force off removes exactly its own contribution.
    #[test]
    fn disabling_removes_own_contribution(
        forces in forces(),
        distances in distances(),
        pivot in point_id(),
        target in point_id(),
    ) {
        let mut forces = forces;
        forces[target].set_enabled(true);
        let before = total_moment(&forces, &distances, Some(pivot));
        let contribution = single_force_moment(&forces[target], &distances, Some(pivot));
        forces[target].set_enabled(false);
        let after = total_moment(&forces, &distances, Some(pivot));
        prop_assert!((before - contribution - after).abs() < 1.0e-9);
    }

    /// A force applied at the pivot has no lever arm.
    #[test]
    fn force_at_pivot_is_inert(
        id in point_id(),
        distances in distances(),
        magnitude in -500.0..500.0f64,
        angle in -720.0..720.0f64,
    ) {
        let force = Force::new(id).with_input(ForceInput::MagnitudeAngle { magnitude, angle });
        prop_assert_eq!(single_force_moment(&force, &distances, Some(id)), 0.0);
    }

    /// Converting to components and back recovers magnitude and direction.
    #[test]
    fn polar_round_trip(magnitude in 1.0e-3..1.0e3f64, angle in 0.0..360.0f64) {
        let components = from_magnitude_angle(magnitude, angle);
        let polar = from_components(components.fx, components.fy);
        prop_assert!((polar.magnitude - magnitude).abs() < 1.0e-6);
        prop_assert!(angular_gap(polar.angle, angle) < 1.0e-6);
        prop_assert!((0.0..360.0).contains(&polar.angle));
    }

    /// The total is the sum of the parts, whatever order they are added in.
    #[test]
    fn total_is_sum_of_parts(
        forces in forces(),
        distances in distances(),
        pivot in point_id(),
    ) {
        let total = total_moment(&forces, &distances, Some(pivot));
        let forward: f64 = forces
            .values()
            .map(|force| single_force_moment(force, &distances, Some(pivot)))
            .sum();
        let backward: f64 = PointId::ALL
            .iter()
            .rev()
            .map(|id| single_force_moment(&forces[*id], &distances, Some(pivot)))
            .sum();
        prop_assert!((total - forward).abs() < 1.0e-9);
        prop_assert!((total - backward).abs() < 1.0e-9);
    }

    /// Moments strictly inside the tolerance band are equilibrium, those
    /// outside take the sign of the moment.
    #[test]
    fn classification_partitions_the_line(moment in -1.0..1.0f64) {
        let rotation = Rotation::classify(moment);
        if moment.abs() < 0.01 {
            prop_assert_eq!(rotation, Rotation::Equilibrium);
        } else if moment > 0.01 {
            prop_assert_eq!(rotation, Rotation::CounterClockwise);
        } else if moment < -0.01 {
            prop_assert_eq!(rotation, Rotation::Clockwise);
        }
    }
}

#[test]
fn equilibrium_band_edges() {
    assert_eq!(Rotation::classify(0.009), Rotation::Equilibrium);
    assert_eq!(Rotation::classify(0.011), Rotation::CounterClockwise);
    assert_eq!(Rotation::classify(-0.011), Rotation::Clockwise);
}

#[test]
fn zero_magnitude_round_trip_keeps_zero_magnitude() {
    let components = from_magnitude_angle(0.0, 123.0);
    let polar = from_components(components.fx, components.fy);
    assert_eq!(polar.magnitude, 0.0);
}
