//! Keyboard intent mapping
//!
//! Key events only flip the ship's control flags. Physics reads them on the
//! next tick. The thrust loop sound follows the thrust key.

use crate::audio::{AudioSink, SoundCue};
use crate::sim::Ship;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    RotateLeft,
    RotateRight,
    Thrust,
}

impl ControlKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(ControlKey::RotateLeft),
            "ArrowRight" | "Right" => Some(ControlKey::RotateRight),
            " " | "Spacebar" => Some(ControlKey::Thrust),
            _ => None,
        }
    }
}

/// Handle a key press. Returns false for keys the game does not use.
pub fn key_down(ship: &mut Ship, key: &str, audio: &mut impl AudioSink) -> bool {
    let Some(control) = ControlKey::from_key(key) else {
        return false;
    };
    press(ship, control, audio);
    true
}

/// Handle a key release. Returns false for keys the game does not use.
pub fn key_up(ship: &mut Ship, key: &str, audio: &mut impl AudioSink) -> bool {
    let Some(control) = ControlKey::from_key(key) else {
        return false;
    };
    release(ship, control, audio);
    true
}

pub fn press(ship: &mut Ship, control: ControlKey, audio: &mut impl AudioSink) {
    match control {
        ControlKey::RotateLeft => ship.rotating_left = true,
        ControlKey::RotateRight => ship.rotating_right = true,
        ControlKey::Thrust => {
            // Auto-repeat delivers extra key downs; start the loop only once
            if !ship.engine_on {
                audio.play(SoundCue::Thrust);
            }
            ship.engine_on = true;
        }
    }
}

pub fn release(ship: &mut Ship, control: ControlKey, audio: &mut impl AudioSink) {
    match control {
        ControlKey::RotateLeft => ship.rotating_left = false,
        ControlKey::RotateRight => ship.rotating_right = false,
        ControlKey::Thrust => {
            ship.engine_on = false;
            audio.stop(SoundCue::Thrust);
        }
    }
}
