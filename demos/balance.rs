use momentx::{AppState, Components, Distances, PointId, Rotation, XDirection, YDirection};

fn main() {
    let mut state = AppState::new(Distances::new(3.0, 4.0, 5.0));
    state.set_pivot(Some(PointId::B));

    // 50 N pushing right at C turns the frame clockwise by 200 Nm
    state.set_force_components(PointId::C, Components::new(50.0, 0.0));

    // Find the upward push at D that cancels it: 5 m * F = 200 Nm
    let needed = -state.total_moment() / state.distances().d3;
    state.set_force_acute_angle(PointId::D, needed, 90.0, XDirection::Right, YDirection::Up);

    let total = state.total_moment();
    println!("Push needed at D: {needed:.2} N, remaining moment {total:+.4} Nm");
    if state.rotation() == Rotation::Equilibrium {
        println!("The frame is balanced about B.");
    } else {
        println!("The frame still turns {}.", state.rotation());
    }
}
