#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod errors;
pub mod explain;
pub mod force;
pub mod geometry;
pub mod moment;
pub mod scenario;
pub mod state;

pub use errors::{ParseConceptError, ParsePointIdError, ScenarioError};
pub use explain::ConceptId;
pub use force::{
    acute_angle_equivalent, from_acute_angle, from_components, from_magnitude_angle, AcuteAngle,
    Components, Force, ForceInput, InputMode, Polar, Quadrant, XDirection, YDirection,
};
pub use geometry::{application_points, point, Distances, Point, PointId, PointMap};
pub use moment::{
    lever_arm, position_vector, single_force_moment, total_moment, MomentBreakdown, Rotation,
    EQUILIBRIUM_TOLERANCE,
};
pub use scenario::{ForceSpec, Scenario};
pub use state::AppState;
