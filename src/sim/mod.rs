//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick, no wall-clock time
//! - Seeded RNG only
//! - Side effects go through the `Presenter` and `AudioSink` traits

pub mod flight;
pub mod physics;
pub mod state;
pub mod tick;

#[cfg(test)]
pub(crate) mod test_support;

pub use flight::{evaluate, is_safe_landing};
pub use physics::integrate;
pub use state::{EffectLatches, FlightOutcome, GameState, LandingPad, Latch, Ship, World};
pub use tick::tick;
