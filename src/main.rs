mod cli;
mod report;

use clap::Parser;
use cli::Options;
use momentx::{explain, AppState, Scenario};
use report::{render_breakdown, render_json};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = Options::parse();

    // Start from the scenario file when one is given, otherwise from the
    // opening configuration of the lesson.
    let mut state = match &options.scenario {
        Some(path) => Scenario::load(path)?.into_state(),
        None => AppState::default(),
    };
    if let Some(pivot) = options.pivot {
        state.set_pivot(Some(pivot));
    }

    if options.json {
        println!("{}", render_json(&state)?);
    } else {
        print!("{}", render_breakdown(&state));
    }

    if let Some(id) = options.explain {
        println!();
        println!(
            "{}",
            explain::force_explanation(state.force(id), state.distances(), state.pivot())
        );
    }

    if let Some(concept) = options.concept {
        println!();
        println!("# {}", concept.title());
        println!();
        println!("{}", concept.explanation());
    }

    Ok(())
}
