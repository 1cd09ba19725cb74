use momentx::{AppState, MomentBreakdown, Point, PointMap, Rotation};
use serde::Serialize;
use std::fmt::Write;

/// Everything needed to redraw the lesson: the editable state, where the
/// frame points sit and the moments they produce.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    /// Pivot, forces, distances and editor modes.
    state: &'a AppState,
    /// Coordinates of the frame points.
    points: PointMap<Point>,
    /// Per-force and total moments.
    breakdown: MomentBreakdown,
}

/// Render the state together with its moments as pretty-printed JSON.
///
/// # Errors
///
/// Returns the serializer error, which cannot occur for finite values.
pub fn render_json(state: &AppState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        state,
        points: state.points(),
        breakdown: state.breakdown(),
    })
}

/// Render the per-force and total moments for the current state.
///
/// Values are rounded to two decimals for reading; the engine itself keeps
/// full precision.
#[must_use]
pub fn render_breakdown(state: &AppState) -> String {
    let mut output = String::new();
    let distances = state.distances();

    // Start with the geometry so the position vectors can be checked by hand.
    writeln!(
        &mut output,
        "Frame (d1 = {:.2} m, d2 = {:.2} m, d3 = {:.2} m)",
        distances.d1, distances.d2, distances.d3
    )
    .expect("writing to string cannot fail");
    for (id, p) in state.points().iter() {
        writeln!(&mut output, "  {id} = ({:.2}, {:.2})", p.x, p.y)
            .expect("writing to string cannot fail");
    }

    let Some(pivot) = state.pivot() else {
        output.push_str("Select a pivot point to calculate moments.\n");
        return output;
    };
    if !state.is_computable() {
        output.push_str("No forces are included; enable a force to calculate moments.\n");
        return output;
    }

    writeln!(&mut output, "Moments about pivot {pivot}:").expect("writing to string cannot fail");
    let breakdown = state.breakdown();
    for (id, force) in state.forces().iter() {
        if force.is_enabled() {
            writeln!(
                &mut output,
                "  {}: {:.1} N at {:.1} deg (Fx = {:+.2} N, Fy = {:+.2} N) -> {:+.2} Nm",
                force.name(),
                force.magnitude(),
                force.angle(),
                force.fx(),
                force.fy(),
                breakdown.moments[id]
            )
            .expect("writing to string cannot fail");
        } else {
            writeln!(&mut output, "  {}: excluded", force.name())
                .expect("writing to string cannot fail");
        }
    }

    // The sign convention is repeated because it is the opposite of the
    // right/up convention used for force components.
    let verdict = match breakdown.rotation {
        Rotation::CounterClockwise => "Counter-clockwise (+)",
        Rotation::Clockwise => "Clockwise (-)",
        Rotation::Equilibrium => "In Equilibrium",
    };
    writeln!(
        &mut output,
        "Total moment about {pivot}: {:.2} Nm, {verdict}",
        breakdown.total
    )
    .expect("writing to string cannot fail");

    output
}
