use momentx::{explain, AppState, ConceptId, PointId};

fn main() {
    // Start from the lesson's opening configuration
    let mut state = AppState::default();

    // Nothing can be computed until a pivot is chosen
    assert!(!state.is_computable());
    state.set_pivot(Some(PointId::B));

    // Print every force's contribution and the net result
    let breakdown = state.breakdown();
    for (id, moment) in breakdown.moments.iter() {
        println!("{}: {moment:+.2} Nm", state.force(id).name());
    }
    println!("Total: {:+.2} Nm ({})", breakdown.total, breakdown.rotation);

    // Walk through the force at D step by step
    println!(
        "{}",
        explain::force_explanation(state.force(PointId::D), state.distances(), state.pivot())
    );
    println!("{}", ConceptId::LeverArm.explanation());
}
