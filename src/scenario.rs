//! Scenario documents: JSON descriptions of a lesson configuration.
//!
//! Every field is optional. Anything left out keeps its value from the
//! opening lesson configuration ([`AppState::default`]).
//!
//! ```json
//! {
//!   "pivot": "B",
//!   "distances": { "d1": 3.0, "d2": 4.0, "d3": 5.0 },
//!   "forces": {
//!     "C": { "input": { "mode": "components", "fx": 50.0, "fy": 0.0 } },
//!     "D": { "enabled": false }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::ScenarioError;
use crate::force::ForceInput;
use crate::geometry::{Distances, PointId};
use crate::state::AppState;

/// Overrides for a single force.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForceSpec {
    /// Replacement display label.
    pub name: Option<String>,
    /// Whether the force takes part in moment calculations.
    pub enabled: Option<bool>,
    /// The force vector in any of its descriptions.
    pub input: Option<ForceInput>,
}

/// A lesson configuration loaded from JSON.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// Pivot to select; `null` or absent leaves it unselected.
    pub pivot: Option<PointId>,
    /// Frame lengths; absent fields keep the lesson values.
    pub distances: Option<Distances>,
    /// Per-force overrides keyed by point label.
    pub forces: BTreeMap<PointId, ForceSpec>,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Json`] when the text is not a valid scenario.
    ///
    /// # Examples
    /// ```
    /// use momentx::{PointId, Scenario};
    ///
    /// let scenario = Scenario::from_json(r#"{ "pivot": "A" }"#).expect("valid scenario");
    /// assert_eq!(scenario.pivot, Some(PointId::A));
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] when the file cannot be read and
    /// [`ScenarioError::Json`] when its contents are not a valid scenario.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        log::info!("loading scenario from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Build the state described by this scenario on top of the lesson
    /// defaults.
    #[must_use]
    pub fn into_state(self) -> AppState {
        let mut state = AppState::default();
        state.set_pivot(self.pivot);
        if let Some(distances) = self.distances {
            state.set_distances(distances);
        }
        for (id, spec) in self.forces {
            if let Some(name) = spec.name {
                state.rename_force(id, name);
            }
            if let Some(enabled) = spec.enabled {
                state.set_force_enabled(id, enabled);
            }
            if let Some(input) = spec.input {
                state.edit_force(id, input);
            }
        }
        state
    }
}
