//! The editable lesson state: pivot selection, forces, distances and the
//! editor each force is being driven through.

use serde::Serialize;

use crate::force::{Components, Force, ForceInput, InputMode, XDirection, YDirection};
use crate::geometry::{application_points, Distances, Point, PointId, PointMap};
use crate::moment::{single_force_moment, total_moment, MomentBreakdown, Rotation};

/// Complete state the moment engine operates over.
///
/// Every edit goes through a dedicated method that performs the full
/// conversion to force components in one write.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppState {
    /// Selected pivot, if any.
    pivot: Option<PointId>,
    /// One force per frame point.
    forces: PointMap<Force>,
    /// Frame lengths.
    distances: Distances,
    /// Editor currently used for each force. Never affects moments.
    modes: PointMap<InputMode>,
}

impl Default for AppState {
    /// The opening configuration of the lesson: no pivot, a 3 m by 4 m frame
    /// with `D` 5 m from the origin, and three of the four forces enabled.
    fn default() -> Self {
        let lesson_force = |id, magnitude, angle, enabled| {
            Force::new(id)
                .with_input(ForceInput::MagnitudeAngle { magnitude, angle })
                .with_enabled(enabled)
        };
        Self {
            pivot: None,
            forces: PointMap {
                a: lesson_force(PointId::A, 50.0, 135.0, true),
                b: lesson_force(PointId::B, 60.0, 225.0, false),
                c: lesson_force(PointId::C, 75.0, 270.0, true),
                d: lesson_force(PointId::D, 40.0, 45.0, true),
            },
            distances: Distances::default(),
            modes: PointMap::default(),
        }
    }
}

impl AppState {
    /// Create a state with zero, enabled forces at every point.
    #[must_use]
    pub fn new(distances: Distances) -> Self {
        Self {
            pivot: None,
            forces: PointMap::from_fn(Force::new),
            distances,
            modes: PointMap::default(),
        }
    }

    /// Selected pivot, if any.
    #[must_use]
    pub const fn pivot(&self) -> Option<PointId> {
        self.pivot
    }

    /// Frame lengths.
    #[must_use]
    pub const fn distances(&self) -> &Distances {
        &self.distances
    }

    /// All forces.
    #[must_use]
    pub const fn forces(&self) -> &PointMap<Force> {
        &self.forces
    }

    /// Force applied at `id`.
    #[must_use]
    pub fn force(&self, id: PointId) -> &Force {
        &self.forces[id]
    }

    /// Editor currently used for the force at `id`.
    #[must_use]
    pub fn input_mode(&self, id: PointId) -> InputMode {
        self.modes[id]
    }

    /// Current coordinates of the frame points.
    #[must_use]
    pub fn points(&self) -> PointMap<Point> {
        application_points(&self.distances)
    }

    /// Select or clear the pivot.
    pub fn set_pivot(&mut self, pivot: Option<PointId>) {
        log::debug!("pivot set to {pivot:?}");
        self.pivot = pivot;
    }

    /// Replace the frame lengths.
    pub fn set_distances(&mut self, distances: Distances) {
        log::debug!("distances set to {distances:?}");
        self.distances = distances;
    }

    /// Switch the editor used for a force without changing the force itself.
    pub fn set_input_mode(&mut self, id: PointId, mode: InputMode) {
        self.modes[id] = mode;
    }

    /// Set a force from magnitude and direction, switching its editor to match.
    pub fn set_force_magnitude_angle(&mut self, id: PointId, magnitude: f64, angle: f64) {
        self.edit_force(id, ForceInput::MagnitudeAngle { magnitude, angle });
    }

    /// Set a force from its components, switching its editor to match.
    pub fn set_force_components(&mut self, id: PointId, components: Components) {
        self.edit_force(
            id,
            ForceInput::Components {
                fx: components.fx,
                fy: components.fy,
            },
        );
    }

    /// Set a force from an acute angle and senses, switching its editor to match.
    pub fn set_force_acute_angle(
        &mut self,
        id: PointId,
        magnitude: f64,
        acute_angle: f64,
        x_direction: XDirection,
        y_direction: YDirection,
    ) {
        self.edit_force(
            id,
            ForceInput::AcuteAngle {
                magnitude,
                acute_angle,
                x_direction,
                y_direction,
            },
        );
    }

    /// Apply an edit in any description and record its editor.
    pub fn edit_force(&mut self, id: PointId, input: ForceInput) {
        log::debug!("force {id} edited: {input:?}");
        self.forces[id].apply(input);
        self.modes[id] = input.mode();
    }

    /// Include or exclude the force at `id`.
    pub fn set_force_enabled(&mut self, id: PointId, enabled: bool) {
        log::debug!("force {id} enabled: {enabled}");
        self.forces[id].set_enabled(enabled);
    }

    /// Rename the force at `id`.
    pub fn rename_force(&mut self, id: PointId, name: impl Into<String>) {
        self.forces[id].set_name(name);
    }

    /// Moment of the force at `id` about the current pivot.
    #[must_use]
    pub fn force_moment(&self, id: PointId) -> f64 {
        single_force_moment(&self.forces[id], &self.distances, self.pivot)
    }

    /// Net moment about the current pivot.
    #[must_use]
    pub fn total_moment(&self) -> f64 {
        total_moment(&self.forces, &self.distances, self.pivot)
    }

    /// Classification of the net moment.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        Rotation::classify(self.total_moment())
    }

    /// Per-force and net moments about the current pivot.
    #[must_use]
    pub fn breakdown(&self) -> MomentBreakdown {
        MomentBreakdown::compute(&self.forces, &self.distances, self.pivot)
    }

    /// Whether a pivot is selected and at least one force is enabled.
    #[must_use]
    pub fn is_computable(&self) -> bool {
        MomentBreakdown::is_computable(self.pivot, &self.forces)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::force::Quadrant;

    #[test]
    fn default_state_matches_lesson_opening() {
        let state = AppState::default();
        assert_eq!(state.pivot(), None);
        assert_eq!(*state.distances(), Distances::new(3.0, 4.0, 5.0));
        assert!(state.force(PointId::A).is_enabled());
        assert!(!state.force(PointId::B).is_enabled());
        assert_relative_eq!(state.force(PointId::A).fx(), -35.355_339, epsilon = 1.0e-5);
        assert_relative_eq!(state.force(PointId::C).fy(), -75.0, epsilon = 1.0e-9);
        assert_eq!(state.input_mode(PointId::D), InputMode::AcuteAngle);
        assert_eq!(state.total_moment(), 0.0);
        assert!(!state.is_computable());
    }

    #[test]
    fn default_state_about_b() {
        let mut state = AppState::default();
        state.set_pivot(Some(PointId::B));
        // A: r = (0, 4), F = (-35.36, 35.36) gives 141.42
        // C: r = (3, 4), F = (0, -75) gives -225
        // D: r = (5, 0), F = (28.28, 28.28) gives 141.42
        let expected = 4.0 * 50.0 * 135.0_f64.to_radians().cos().abs() - 225.0
            + 5.0 * 40.0 * 45.0_f64.to_radians().sin();
        assert_relative_eq!(state.total_moment(), expected, epsilon = 1.0e-9);
        assert_eq!(state.rotation(), Rotation::CounterClockwise);
    }

    #[test]
    fn edits_switch_editor_and_rederive() {
        let mut state = AppState::new(Distances::default());
        state.set_force_components(PointId::C, Components::new(-20.0, -20.0));
        assert_eq!(state.input_mode(PointId::C), InputMode::Components);
        let acute = state.force(PointId::C).acute_angle();
        assert_relative_eq!(acute.acute, 45.0, epsilon = 1.0e-9);
        assert_eq!(acute.quadrant, Quadrant::Third);

        state.set_force_acute_angle(PointId::C, 10.0, 0.0, XDirection::Right, YDirection::Up);
        assert_eq!(state.input_mode(PointId::C), InputMode::AcuteAngle);
        assert_relative_eq!(state.force(PointId::C).fx(), 10.0);

        state.set_force_magnitude_angle(PointId::C, 10.0, 90.0);
        assert_eq!(state.input_mode(PointId::C), InputMode::MagnitudeAngle);
        assert_relative_eq!(state.force(PointId::C).fy(), 10.0);
    }

    #[test]
    fn editor_mode_does_not_change_moment() {
        let mut state = AppState::default();
        state.set_pivot(Some(PointId::D));
        let before = state.total_moment();
        for mode in [
            InputMode::MagnitudeAngle,
            InputMode::Components,
            InputMode::AcuteAngle,
        ] {
            state.set_input_mode(PointId::A, mode);
            assert_eq!(state.total_moment(), before);
        }
    }

    #[test]
    fn disabling_removes_contribution() {
        let mut state = AppState::default();
        state.set_pivot(Some(PointId::B));
        let total = state.total_moment();
        let contribution = state.force_moment(PointId::D);
        state.set_force_enabled(PointId::D, false);
        assert_relative_eq!(state.total_moment(), total - contribution, epsilon = 1.0e-9);
        assert_eq!(state.force_moment(PointId::D), 0.0);
    }

    #[test]
    fn renaming_keeps_vector() {
        let mut state = AppState::default();
        let before = state.force(PointId::A).components();
        state.rename_force(PointId::A, "Push on A");
        assert_eq!(state.force(PointId::A).name(), "Push on A");
        assert_eq!(state.force(PointId::A).components(), before);
    }
}
