//! Force vectors and the conversions between their equivalent descriptions.
//!
//! A force is stored only as Cartesian components. Magnitude and direction,
//! and the acute-angle-plus-quadrant form used in class, are derived on read,
//! so an edit through any description can never leave another one stale.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geometry::PointId;

/// Degrees in a full turn.
const FULL_TURN: f64 = 360.0;

/// Cartesian components of a planar force in newtons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Component along the global X axis (positive to the right).
    pub fx: f64,
    /// Component along the global Y axis (positive upwards).
    pub fy: f64,
}

impl Components {
    /// Create a [`Components`] pair.
    #[must_use]
    pub const fn new(fx: f64, fy: f64) -> Self {
        Self { fx, fy }
    }

    /// Convert the components into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.fx, self.fy)
    }
}

impl From<Vector2<f64>> for Components {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

/// Magnitude and direction of a planar force.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    /// Length of the force vector in newtons.
    pub magnitude: f64,
    /// Direction in degrees, counter-clockwise from the positive X axis.
    pub angle: f64,
}

/// Horizontal sense of a force drawn with an acute angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XDirection {
    /// Towards positive X.
    Right,
    /// Towards negative X.
    Left,
}

impl XDirection {
    /// Sign applied to the horizontal component.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            XDirection::Right => 1.0,
            XDirection::Left => -1.0,
        }
    }
}

/// Vertical sense of a force drawn with an acute angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YDirection {
    /// Towards positive Y.
    Up,
    /// Towards negative Y.
    Down,
}

impl YDirection {
    /// Sign applied to the vertical component.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            YDirection::Up => 1.0,
            YDirection::Down => -1.0,
        }
    }
}

/// Quadrant of a direction measured counter-clockwise from the positive X axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    /// `[0, 90]` degrees: right and up.
    First,
    /// `(90, 180]` degrees: left and up.
    Second,
    /// `(180, 270]` degrees: left and down.
    Third,
    /// `(270, 360)` degrees: right and down.
    Fourth,
}

impl Quadrant {
    /// Horizontal and vertical senses matching the quadrant.
    #[must_use]
    pub const fn directions(self) -> (XDirection, YDirection) {
        match self {
            Quadrant::First => (XDirection::Right, YDirection::Up),
            Quadrant::Second => (XDirection::Left, YDirection::Up),
            Quadrant::Third => (XDirection::Left, YDirection::Down),
            Quadrant::Fourth => (XDirection::Right, YDirection::Down),
        }
    }
}

/// A direction expressed as an acute angle to the X axis within a quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AcuteAngle {
    /// Angle to the horizontal in degrees, within `[0, 90]`.
    pub acute: f64,
    /// Quadrant the full direction falls in.
    pub quadrant: Quadrant,
}

impl AcuteAngle {
    /// Horizontal sense of the direction.
    #[must_use]
    pub const fn x_direction(&self) -> XDirection {
        self.quadrant.directions().0
    }

    /// Vertical sense of the direction.
    #[must_use]
    pub const fn y_direction(&self) -> YDirection {
        self.quadrant.directions().1
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
///
/// # Examples
/// ```
/// use momentx::force::normalize_angle;
///
/// assert_eq!(normalize_angle(-90.0), 270.0);
/// assert_eq!(normalize_angle(720.0), 0.0);
/// ```
#[must_use]
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped + 0.0
    }
}

/// Components of a force given by magnitude and direction in degrees.
///
/// # Examples
/// ```
/// use approx::assert_relative_eq;
/// use momentx::force::from_magnitude_angle;
///
/// let components = from_magnitude_angle(100.0, 90.0);
/// assert_relative_eq!(components.fx, 0.0, epsilon = 1.0e-9);
/// assert_relative_eq!(components.fy, 100.0);
/// ```
#[must_use]
pub fn from_magnitude_angle(magnitude: f64, angle: f64) -> Components {
    let (sin, cos) = angle.to_radians().sin_cos();
    Components::new(magnitude * cos, magnitude * sin)
}

/// Magnitude and normalized direction of a force given by its components.
///
/// A zero vector reports an angle of `0`.
#[must_use]
pub fn from_components(fx: f64, fy: f64) -> Polar {
    Polar {
        magnitude: fx.hypot(fy),
        angle: normalize_angle(fy.atan2(fx).to_degrees()),
    }
}

/// Components and full direction of a force given by an acute angle and the
/// senses of its horizontal and vertical parts.
///
/// Returns the components together with the direction normalized to `[0, 360)`.
///
/// # Examples
/// ```
/// use approx::assert_relative_eq;
/// use momentx::force::{from_acute_angle, XDirection, YDirection};
///
/// let (components, angle) = from_acute_angle(50.0, 45.0, XDirection::Left, YDirection::Up);
/// assert!(components.fx < 0.0 && components.fy > 0.0);
/// assert_relative_eq!(angle, 135.0, epsilon = 1.0e-9);
/// ```
#[must_use]
pub fn from_acute_angle(
    magnitude: f64,
    acute_angle: f64,
    x_direction: XDirection,
    y_direction: YDirection,
) -> (Components, f64) {
    let (sin, cos) = acute_angle.to_radians().sin_cos();
    let components = Components::new(
        x_direction.sign() * magnitude * cos,
        y_direction.sign() * magnitude * sin,
    );
    let angle = from_components(components.fx, components.fy).angle;
    (components, angle)
}

/// Acute angle and quadrant equivalent to a full direction in degrees.
///
/// The input is normalized first, so any real angle is accepted. Quadrant
/// boundaries belong to the lower quadrant: `90` is `First`, `180` is `Second`
/// and `270` is `Third`.
///
/// # Examples
/// ```
/// use momentx::force::{acute_angle_equivalent, Quadrant};
///
/// let acute = acute_angle_equivalent(225.0);
/// assert_eq!(acute.acute, 45.0);
/// assert_eq!(acute.quadrant, Quadrant::Third);
/// ```
#[must_use]
pub fn acute_angle_equivalent(angle: f64) -> AcuteAngle {
    let angle = normalize_angle(angle);
    let (acute, quadrant) = if angle <= 90.0 {
        (angle, Quadrant::First)
    } else if angle <= 180.0 {
        (180.0 - angle, Quadrant::Second)
    } else if angle <= 270.0 {
        (angle - 180.0, Quadrant::Third)
    } else {
        (FULL_TURN - angle, Quadrant::Fourth)
    };
    AcuteAngle { acute, quadrant }
}

/// The description a user is currently editing a force through.
///
/// This is interaction state only; moments never depend on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Magnitude with a full direction in `[0, 360)`.
    MagnitudeAngle,
    /// Horizontal and vertical components.
    Components,
    /// Magnitude with an acute angle and left/right, up/down senses.
    #[default]
    AcuteAngle,
}

/// An edit to a force expressed in one of its equivalent descriptions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ForceInput {
    /// Magnitude and full direction.
    MagnitudeAngle {
        /// Magnitude in newtons.
        magnitude: f64,
        /// Direction in degrees counter-clockwise from the positive X axis.
        angle: f64,
    },
    /// Cartesian components.
    Components {
        /// Horizontal component in newtons.
        fx: f64,
        /// Vertical component in newtons.
        fy: f64,
    },
    /// Magnitude, acute angle to the horizontal, and senses.
    AcuteAngle {
        /// Magnitude in newtons.
        magnitude: f64,
        /// Angle to the horizontal in degrees, nominally within `[0, 90]`.
        acute_angle: f64,
        /// Horizontal sense.
        x_direction: XDirection,
        /// Vertical sense.
        y_direction: YDirection,
    },
}

impl ForceInput {
    /// The editor this input belongs to.
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        match self {
            ForceInput::MagnitudeAngle { .. } => InputMode::MagnitudeAngle,
            ForceInput::Components { .. } => InputMode::Components,
            ForceInput::AcuteAngle { .. } => InputMode::AcuteAngle,
        }
    }

    /// Cartesian components described by this input.
    #[must_use]
    pub fn components(&self) -> Components {
        match *self {
            ForceInput::MagnitudeAngle { magnitude, angle } => {
                from_magnitude_angle(magnitude, angle)
            }
            ForceInput::Components { fx, fy } => Components::new(fx, fy),
            ForceInput::AcuteAngle {
                magnitude,
                acute_angle,
                x_direction,
                y_direction,
            } => from_acute_angle(magnitude, acute_angle, x_direction, y_direction).0,
        }
    }
}

/// A planar force applied at one of the frame points.
///
/// Only the components are stored; every setter converts its input to
/// components in a single write.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Force {
    /// Frame point the force acts at.
    id: PointId,
    /// Display label.
    name: String,
    /// Whether the force takes part in moment calculations.
    enabled: bool,
    /// Horizontal component in newtons.
    fx: f64,
    /// Vertical component in newtons.
    fy: f64,
}

impl Force {
    /// Create an enabled zero force at `id` labelled `F_<id> at <id>`.
    ///
    /// # Examples
    /// ```
    /// use momentx::{Force, PointId};
    ///
    /// let force = Force::new(PointId::C);
    /// assert_eq!(force.name(), "F_C at C");
    /// assert_eq!(force.magnitude(), 0.0);
    /// ```
    #[must_use]
    pub fn new(id: PointId) -> Self {
        Self {
            id,
            name: format!("F_{id} at {id}"),
            enabled: true,
            fx: 0.0,
            fy: 0.0,
        }
    }

    /// Apply an edit and return the force, for building fixtures.
    #[must_use]
    pub fn with_input(mut self, input: ForceInput) -> Self {
        self.apply(input);
        self
    }

    /// Set whether the force is included, returning the force.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Frame point the force acts at.
    #[must_use]
    pub const fn id(&self) -> PointId {
        self.id
    }

    /// Display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the force takes part in moment calculations.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Horizontal component in newtons.
    #[must_use]
    pub const fn fx(&self) -> f64 {
        self.fx
    }

    /// Vertical component in newtons.
    #[must_use]
    pub const fn fy(&self) -> f64 {
        self.fy
    }

    /// Cartesian components.
    #[must_use]
    pub const fn components(&self) -> Components {
        Components::new(self.fx, self.fy)
    }

    /// Force as an algebraic vector.
    #[must_use]
    pub fn to_vector(&self) -> Vector2<f64> {
        self.components().to_vector()
    }

    /// Magnitude and normalized direction.
    #[must_use]
    pub fn polar(&self) -> Polar {
        from_components(self.fx, self.fy)
    }

    /// Magnitude in newtons.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.fx.hypot(self.fy)
    }

    /// Direction in degrees within `[0, 360)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.polar().angle
    }

    /// Direction as an acute angle with quadrant.
    #[must_use]
    pub fn acute_angle(&self) -> AcuteAngle {
        acute_angle_equivalent(self.angle())
    }

    /// Current value expressed in the description used by `mode`.
    ///
    /// Editors use this to populate their controls after the force was
    /// changed through a different description.
    #[must_use]
    pub fn as_input(&self, mode: InputMode) -> ForceInput {
        match mode {
            InputMode::MagnitudeAngle => {
                let Polar { magnitude, angle } = self.polar();
                ForceInput::MagnitudeAngle { magnitude, angle }
            }
            InputMode::Components => ForceInput::Components {
                fx: self.fx,
                fy: self.fy,
            },
            InputMode::AcuteAngle => {
                let acute = self.acute_angle();
                ForceInput::AcuteAngle {
                    magnitude: self.magnitude(),
                    acute_angle: acute.acute,
                    x_direction: acute.x_direction(),
                    y_direction: acute.y_direction(),
                }
            }
        }
    }

    /// Set the force from a magnitude and a direction in degrees.
    ///
    /// A negative magnitude is accepted and points the force the opposite way.
    pub fn set_magnitude_angle(&mut self, magnitude: f64, angle: f64) {
        self.set_components(from_magnitude_angle(magnitude, angle));
    }

    /// Set the force from its Cartesian components.
    pub fn set_components(&mut self, components: Components) {
        self.fx = components.fx;
        self.fy = components.fy;
    }

    /// Set the force from a magnitude, an acute angle and the two senses.
    pub fn set_acute_angle(
        &mut self,
        magnitude: f64,
        acute_angle: f64,
        x_direction: XDirection,
        y_direction: YDirection,
    ) {
        let (components, _) = from_acute_angle(magnitude, acute_angle, x_direction, y_direction);
        self.set_components(components);
    }

    /// Replace the display label.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Include or exclude the force from moment calculations.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Apply an edit expressed in any description.
    pub fn apply(&mut self, input: ForceInput) {
        self.set_components(input.components());
    }
}
