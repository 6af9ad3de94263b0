//! Flight outcome evaluation
//!
//! Classifies the ship every tick and fires the matching HUD and audio
//! effects. Checks run in a fixed precedence: ground contact, landing,
//! horizontal bounds, normal flight. Terminal effects are latched so they
//! fire once no matter how many ticks repeat the same verdict.

use super::state::{FlightOutcome, GameState, Ship, World};
use crate::audio::{AudioSink, SoundCue};
use crate::consts::*;
use crate::pseudo_degrees;
use crate::ui::{Panel, Presenter, Readouts};

/// Whether the ship is touching the pad slowly, upright and within its span.
///
/// The clearance band is open on both ends.
pub fn is_safe_landing(ship: &Ship, world: &World) -> bool {
    let clearance = world.clearance(ship.pos.y);
    clearance > LANDING_CLEARANCE_MIN
        && clearance < LANDING_CLEARANCE_MAX
        && ship.vel.y < MAX_LANDING_DESCENT
        && world.pad.spans(ship.pos.x)
        && pseudo_degrees(ship.angle).abs() < MAX_LANDING_TILT
}

/// Evaluate the ship's current position and emit effects.
///
/// Must run before this tick's integration step so the readouts report the
/// kinematics that produced the verdict.
pub fn evaluate<S>(state: &mut GameState, sink: &mut S) -> FlightOutcome
where
    S: Presenter + AudioSink,
{
    let ship = &state.ship;
    let world = &state.world;

    if state.clearance() <= CRASH_CLEARANCE {
        if state.latches.crash.trip() {
            log::info!(
                "Ship crashed at x={:.1}, descent {:.2}, tilt {:.1}",
                ship.pos.x,
                ship.vel.y,
                pseudo_degrees(ship.angle)
            );
            sink.play(SoundCue::Offline);
            sink.play_after(SoundCue::OfflineVocal, OFFLINE_VOCAL_DELAY_MS);
            sink.hide_panel(Panel::Flight);
            sink.hide_panel(Panel::OutOfRange);
            sink.show_panel(Panel::Offline);
            Readouts::flight(ship, world).present(sink);
        }
        return FlightOutcome::Crashed;
    }

    if is_safe_landing(ship, world) {
        if state.latches.landing.trip() {
            log::info!(
                "Ship landed at x={:.1} (pad {:.1}..{:.1})",
                ship.pos.x,
                world.pad.x,
                world.pad.x + world.pad.width
            );
            sink.show_panel(Panel::Winner);
            sink.play(SoundCue::WinnerVocal);
        }
        return FlightOutcome::Landed;
    }

    if !world.in_horizontal_bounds(ship.pos.x) {
        // Not latched: the warning repeats for as long as the ship is away
        sink.play(SoundCue::OutOfRange);
        sink.hide_panel(Panel::Flight);
        sink.show_panel(Panel::OutOfRange);
        Readouts::out_of_range(ship, world).present(sink);
        return FlightOutcome::OutOfRange;
    }

    sink.show_panel(Panel::Flight);
    sink.hide_panel(Panel::OutOfRange);
    Readouts::flight(ship, world).present(sink);
    FlightOutcome::Flying
}
