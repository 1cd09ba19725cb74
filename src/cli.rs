use std::path::PathBuf;

use momentx::{ConceptId, PointId};

/// Moments of the frame forces about a chosen pivot.
///
/// Logging is controlled through `RUST_LOG`.
#[derive(clap::Parser, Debug, Default, PartialEq)]
#[clap(name = "momentx", version, author, about)]
pub struct Options {
    /// Scenario file to load instead of the lesson defaults
    pub scenario: Option<PathBuf>,
    /// Pivot overriding the one in the scenario (A, B, C or D)
    #[clap(long)]
    pub pivot: Option<PointId>,
    /// Force to print a step-by-step explanation for (A, B, C or D)
    #[clap(long)]
    pub explain: Option<PointId>,
    /// Concept lesson to print (moment, lever-arm or equilibrium)
    #[clap(long)]
    pub concept: Option<ConceptId>,
    /// Emit the state and its moments as JSON instead of text
    #[clap(long)]
    pub json: bool,
}
