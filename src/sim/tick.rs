//! Fixed-step simulation tick
//!
//! Core game step that advances the simulation by one frame.

use super::flight::evaluate;
use super::physics::integrate;
use super::state::{FlightOutcome, GameState};
use crate::audio::AudioSink;
use crate::ui::Presenter;

/// Advance the game state by one tick.
///
/// Evaluation sees last tick's kinematics; integration follows only while the
/// flight is still open. Landed and Crashed ships stay where they stopped.
pub fn tick<S>(state: &mut GameState, sink: &mut S) -> FlightOutcome
where
    S: Presenter + AudioSink,
{
    state.time_ticks += 1;

    let outcome = evaluate(state, sink);
    if outcome != state.outcome {
        log::debug!(
            "Tick {}: {:?} -> {:?}",
            state.time_ticks,
            state.outcome,
            outcome
        );
        state.outcome = outcome;
    }

    if !outcome.is_terminal() {
        integrate(&mut state.ship, state.world.gravity);
    }

    outcome
}
