//! Error types produced at the edges of the moment engine.
//!
//! The geometry, conversion and moment functions are total and never fail.
//! Errors only arise when text or files are turned into engine values.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a label does not name one of the frame points.
///
/// # Examples
///
/// ```
/// use momentx::{ParsePointIdError, PointId};
///
/// let error = "Z".parse::<PointId>().expect_err("unknown point is rejected");
/// assert_eq!(error, ParsePointIdError { input: "Z".to_owned() });
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("`{input}` is not a frame point (expected A, B, C or D)")]
pub struct ParsePointIdError {
    /// The rejected text.
    pub input: String,
}

/// Error returned when a label does not name one of the lesson concepts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("`{input}` is not a known concept (expected moment, lever-arm or equilibrium)")]
pub struct ParseConceptError {
    /// The rejected text.
    pub input: String,
}

/// Error returned when a scenario description cannot be loaded.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Returned when the scenario file cannot be read.
    #[error("failed to read scenario {path:?}")]
    Io {
        /// Location of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Returned when the scenario text is not a valid scenario document.
    #[error("invalid scenario document: {0}")]
    Json(#[from] serde_json::Error),
}
