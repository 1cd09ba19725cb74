//! Templated, Markdown-formatted explanations for learners.
//!
//! Nothing here is generated dynamically beyond filling numbers into fixed
//! templates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseConceptError;
use crate::force::Force;
use crate::geometry::{Distances, PointId};
use crate::moment::{lever_arm, position_vector, Rotation, EQUILIBRIUM_TOLERANCE};

/// Moments above this magnitude, in newton metres, are described as strong.
const STRONG_MOMENT: f64 = 10.0;

/// A background topic of the lesson.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConceptId {
    /// The turning effect of a force.
    Moment,
    /// The perpendicular distance that scales a moment.
    LeverArm,
    /// Balance of moments.
    Equilibrium,
}

impl ConceptId {
    /// All concepts in lesson order.
    pub const ALL: [ConceptId; 3] = [ConceptId::Moment, ConceptId::LeverArm, ConceptId::Equilibrium];

    /// Identifier used on the command line and in documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ConceptId::Moment => "moment",
            ConceptId::LeverArm => "lever-arm",
            ConceptId::Equilibrium => "equilibrium",
        }
    }

    /// Title shown in menus.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            ConceptId::Moment => "What is a Moment?",
            ConceptId::LeverArm => "What is the Lever Arm?",
            ConceptId::Equilibrium => "What is Equilibrium?",
        }
    }

    /// Lesson text for the concept.
    #[must_use]
    pub const fn explanation(self) -> &'static str {
        match self {
            ConceptId::Moment => MOMENT_TEXT,
            ConceptId::LeverArm => LEVER_ARM_TEXT,
            ConceptId::Equilibrium => EQUILIBRIUM_TEXT,
        }
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConceptId {
    type Err = ParseConceptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ConceptId::ALL
            .into_iter()
            .find(|concept| concept.as_str() == wanted)
            .ok_or_else(|| ParseConceptError {
                input: s.to_owned(),
            })
    }
}

/// Lesson text for [`ConceptId::Moment`].
const MOMENT_TEXT: &str = "\
## What is a Moment?

A **moment** (or torque) is the turning effect of a force about a pivot point.

### Key ideas
- **Size**: force multiplied by the perpendicular distance to the pivot
- **Sense**: counter-clockwise is positive, clockwise is negative
- **Units**: newton metres (Nm)

### Formula
**M = F × d⊥**, or with vectors, **M = rx·Fy − ry·Fx**

Moments decide whether a structure turns or stays balanced.
";

/// Lesson text for [`ConceptId::LeverArm`].
const LEVER_ARM_TEXT: &str = "\
## Understanding the Lever Arm

The **lever arm** (or moment arm) is the perpendicular distance from the pivot
to the line of action of the force.

### Key ideas
- It is the shortest distance from the pivot to the line of action
- It is always measured at right angles to the force
- **Lever arm = |r| × sin(α)**, where α is the angle between **r** and **F**

A longer lever arm gives a larger moment for the same force. A force whose
line of action passes through the pivot has no lever arm and no moment.
";

/// Lesson text for [`ConceptId::Equilibrium`].
const EQUILIBRIUM_TEXT: &str = "\
## Understanding Equilibrium

A body is in rotational **equilibrium** when the moments about a point add up
to zero.

### Conditions
- **ΣM = 0**
- No net rotation occurs
- **ΣM clockwise = ΣM counter-clockwise**

In this lesson a total within ±0.01 Nm is shown as equilibrium.
";

/// Step-by-step Markdown walk-through of the moment of `force` about `pivot`.
///
/// The calculation uses the stored force components and ignores whether the
/// force is enabled; a disabled force is flagged as excluded from the total.
///
/// # Examples
/// ```
/// use momentx::{explain, Distances, Force, ForceInput, PointId};
///
/// let force = Force::new(PointId::C).with_input(ForceInput::Components { fx: 50.0, fy: 0.0 });
/// let text = explain::force_explanation(&force, &Distances::new(3.0, 4.0, 5.0), Some(PointId::B));
/// assert!(text.contains("**M = -200.00 Nm**"));
/// ```
#[must_use]
pub fn force_explanation(force: &Force, distances: &Distances, pivot: Option<PointId>) -> String {
    let Some(pivot) = pivot else {
        return "Please select a pivot point to see the force explanation.".to_owned();
    };
    let app = distances.point(force.id());
    let pivot_point = distances.point(pivot);
    let r = position_vector(force.id(), distances, pivot);
    let (fx, fy) = (force.fx(), force.fy());
    let moment = r.perp(&force.to_vector());
    let rotation = Rotation::classify(moment);

    let lever = lever_arm(force, distances, Some(pivot))
        .map_or_else(|| "undefined (zero force)".to_owned(), |arm| format!("{arm:.2} m"));
    let sense = match rotation {
        Rotation::CounterClockwise => "counter-clockwise (positive)",
        Rotation::Clockwise => "clockwise (negative)",
        Rotation::Equilibrium => "zero (equilibrium)",
    };
    let effect = match rotation {
        Rotation::Equilibrium => {
            "No rotation: the force passes through or very close to the pivot".to_owned()
        }
        turning => format!("Tends to rotate the structure {turning}"),
    };
    let insight = if moment.abs() <= EQUILIBRIUM_TOLERANCE {
        "When the moment is zero, the force either passes through the pivot point or the lever arm is zero.".to_owned()
    } else if moment.abs() > STRONG_MOMENT {
        "The large moment value indicates a strong rotational tendency.".to_owned()
    } else {
        "The small moment value indicates a weak rotational tendency.".to_owned()
    };
    let status = if force.is_enabled() {
        ""
    } else {
        "\n> This force is currently switched off and is excluded from the total moment.\n"
    };

    format!(
        "\
## Moment Calculation for {name}
{status}
### Given Information
- **Force Magnitude**: {magnitude:.1} N
- **Force Angle**: {angle:.1}° (measured from the positive x-axis)
- **Application Point**: {id} at ({ax:.2}, {ay:.2}) m
- **Pivot Point**: {pivot} at ({px:.2}, {py:.2}) m

### Step-by-Step Calculation

**1. Position vector (r)** from pivot {pivot} to application point {id}:
- r = <{rx:.2}, {ry:.2}> m

**2. Force components:**
- Fx = {fx:.2} N
- Fy = {fy:.2} N

**3. Moment:** using **M = rx × Fy − ry × Fx**
- M = ({rx:.2} × {fy:.2}) − ({ry:.2} × {fx:.2})
- M = {first:.2} − {second:.2}
- **M = {moment:.2} Nm**

**4. Physical interpretation:**
- **Lever Arm**: {lever} (perpendicular distance)
- **Rotation**: this force creates a **{sense}** moment
- **Effect**: {effect}

### Key Insight
{insight}
",
        name = force.name(),
        magnitude = force.magnitude(),
        angle = force.angle(),
        id = force.id(),
        ax = app.x,
        ay = app.y,
        px = pivot_point.x,
        py = pivot_point.y,
        rx = r.x,
        ry = r.y,
        first = r.x * fy,
        second = r.y * fx,
    )
}
