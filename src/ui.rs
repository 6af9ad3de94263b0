//! Presentation sink: HUD panels and flight readouts
//!
//! The simulation never touches the DOM. It talks to a [`Presenter`], which
//! the browser host implements with real elements and tests implement with a
//! recorder.

use crate::audio::{AudioSink, SoundCue};
use crate::consts::{FLIGHT_READOUT_SCALE, OUT_OF_RANGE_READOUT_SCALE};
use crate::pseudo_degrees;
use crate::sim::{Ship, World};

/// Independently toggled overlay panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Normal flight view (the canvas itself)
    Flight,
    /// Ship has left the screen horizontally
    OutOfRange,
    /// Ship crashed
    Offline,
    /// Ship landed
    Winner,
}

impl Panel {
    pub const ALL: [Panel; 4] = [
        Panel::Flight,
        Panel::OutOfRange,
        Panel::Offline,
        Panel::Winner,
    ];

    /// CSS `display` value used when the panel is shown
    pub fn display_style(self) -> &'static str {
        match self {
            Panel::Flight | Panel::Winner => "block",
            Panel::OutOfRange | Panel::Offline => "flex",
        }
    }
}

/// Text readouts on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Readout {
    Altitude,
    Velocity,
    Rotation,
}

/// Receiver of all visible side effects
pub trait Presenter {
    fn show_panel(&mut self, panel: Panel);
    fn hide_panel(&mut self, panel: Panel);
    fn set_readout(&mut self, readout: Readout, text: &str);
}

/// A presenter and an audio sink bundled into one effect target
#[derive(Debug, Default)]
pub struct Outputs<P, A> {
    pub ui: P,
    pub audio: A,
}

impl<P, A> Outputs<P, A> {
    pub fn new(ui: P, audio: A) -> Self {
        Self { ui, audio }
    }
}

impl<P: Presenter, A> Presenter for Outputs<P, A> {
    fn show_panel(&mut self, panel: Panel) {
        self.ui.show_panel(panel);
    }

    fn hide_panel(&mut self, panel: Panel) {
        self.ui.hide_panel(panel);
    }

    fn set_readout(&mut self, readout: Readout, text: &str) {
        self.ui.set_readout(readout, text);
    }
}

impl<P, A: AudioSink> AudioSink for Outputs<P, A> {
    fn play(&mut self, cue: SoundCue) {
        self.audio.play(cue);
    }

    fn stop(&mut self, cue: SoundCue) {
        self.audio.stop(cue);
    }

    fn play_after(&mut self, cue: SoundCue, delay_ms: u32) {
        self.audio.play_after(cue, delay_ms);
    }
}

/// Snapshot of the numbers shown on the HUD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readouts {
    pub altitude: f64,
    /// Upward speed, negative while descending
    pub velocity: f64,
    /// Pseudo-degrees
    pub rotation: f64,
}

impl Readouts {
    /// Capture readouts with altitude and velocity multiplied by `scale`
    pub fn capture(ship: &Ship, world: &World, scale: f64) -> Self {
        Self {
            altitude: world.clearance(ship.pos.y) * scale,
            // + 0.0 folds -0.0 into 0.0 so a resting ship reads "0.00"
            velocity: -ship.vel.y * scale + 0.0,
            rotation: pseudo_degrees(ship.angle),
        }
    }

    /// Readouts while on screen
    pub fn flight(ship: &Ship, world: &World) -> Self {
        Self::capture(ship, world, FLIGHT_READOUT_SCALE)
    }

    /// Readouts while off screen (ten times the flight scale)
    pub fn out_of_range(ship: &Ship, world: &World) -> Self {
        Self::capture(ship, world, OUT_OF_RANGE_READOUT_SCALE)
    }

    pub fn altitude_text(&self) -> String {
        format!("ALTITUDE: {:.2}m", self.altitude)
    }

    pub fn velocity_text(&self) -> String {
        format!("VELOCITY: {:.2}m/s", self.velocity)
    }

    pub fn rotation_text(&self) -> String {
        format!("ROTATION: {:.1}\u{b0}", self.rotation + 0.0)
    }

    /// Write all three readouts
    pub fn present(&self, ui: &mut impl Presenter) {
        ui.set_readout(Readout::Altitude, &self.altitude_text());
        ui.set_readout(Readout::Velocity, &self.velocity_text());
        ui.set_readout(Readout::Rotation, &self.rotation_text());
    }
}
