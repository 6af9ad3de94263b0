//! Lander - A lunar-lander arcade game
//!
//! Core modules:
//! - `sim`: Per-tick simulation (physics, flight outcome, effect latches)
//! - `starfield`: Twinkling background stars
//! - `renderer`: 2D drawing surface abstraction and scene painting
//! - `ui`: Presentation sink (panels and readouts)
//! - `audio`: Sound cues and the browser audio backend
//! - `input`: Keyboard intent mapping
//! - `scheduler`: Frame loop contract
//! - `game`: Ties everything together for the host
//! - `platform`: Browser wiring

pub mod audio;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;
pub mod starfield;
pub mod ui;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::f64::consts::PI;

    /// Gravity, stored negative and subtracted from vertical velocity each tick
    pub const GRAVITY: f64 = -0.05;
    /// Thrust added per tick while the engine is on
    pub const THRUST: f64 = 0.1;
    /// Rotation per tick while a rotation key is held (one degree)
    pub const ROTATION_STEP: f64 = PI / 180.0;

    /// Ship body dimensions (drawing only)
    pub const SHIP_WIDTH: f64 = 8.0;
    pub const SHIP_HEIGHT: f64 = 22.0;
    /// Ship spawns this fraction of the viewport height below the top
    pub const SHIP_SPAWN_HEIGHT_FRACTION: f64 = 0.1;
    /// Maximum extra flame length in pixels
    pub const FLAME_FLICKER: f64 = 10.0;

    /// Solid ground band at the bottom of the viewport
    pub const GROUND_HEIGHT: f64 = 20.0;

    /// Landing pad geometry
    pub const PAD_WIDTH: f64 = 100.0;
    pub const PAD_HEIGHT: f64 = 10.0;
    /// Distance from the viewport bottom to the top of the pad
    pub const PAD_TOP_OFFSET: f64 = 35.0;

    /// At or below this clearance the ship is wrecked
    pub const CRASH_CLEARANCE: f64 = 20.0;
    /// Open clearance band that counts as touching the pad. Kept wide enough
    /// that fast descents cannot step over it in one tick.
    pub const LANDING_CLEARANCE_MIN: f64 = 43.0;
    pub const LANDING_CLEARANCE_MAX: f64 = 47.0;
    /// Maximum downward speed (pixels/tick) for a safe landing
    pub const MAX_LANDING_DESCENT: f64 = 2.0;
    /// Maximum tilt in pseudo-degrees for a safe landing
    pub const MAX_LANDING_TILT: f64 = 5.0;

    /// Radians to display "degrees". Not a real unit conversion.
    pub const PSEUDO_DEGREES_PER_RADIAN: f64 = 60.0;
    /// Readout multiplier while the ship is on screen
    pub const FLIGHT_READOUT_SCALE: f64 = 1.0;
    /// Readout multiplier while the ship is off screen
    pub const OUT_OF_RANGE_READOUT_SCALE: f64 = 10.0;

    /// One star per this many square pixels
    pub const PIXELS_PER_STAR: f64 = 800.0;
    /// Star radius is sqrt(uniform(0, STAR_RADIUS_SQ_MAX))
    pub const STAR_RADIUS_SQ_MAX: f64 = 2.0;
    /// Upper bound for a star's per-frame alpha change
    pub const STAR_MAX_MAGNITUDE: f64 = 0.05;
    /// Twinkle turnaround thresholds
    pub const STAR_ALPHA_FLOOR: f64 = 0.1;
    pub const STAR_ALPHA_CEILING: f64 = 0.95;

    /// Delay between the crash sound and the offline vocal
    pub const OFFLINE_VOCAL_DELAY_MS: u32 = 1000;
}

/// Convert an angle in radians to the pseudo-degrees shown on the HUD
#[inline]
pub fn pseudo_degrees(angle: f64) -> f64 {
    angle * consts::PSEUDO_DEGREES_PER_RADIAN
}
