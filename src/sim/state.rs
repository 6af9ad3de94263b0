//! Game state and core simulation types
//!
//! The ship is the only moving entity. The world is fixed once created.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Result of evaluating the ship against the world for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightOutcome {
    /// In the air and on screen
    #[default]
    Flying,
    /// Drifted past the left or right edge of the viewport
    OutOfRange,
    /// Touched down on the pad slowly and upright
    Landed,
    /// Reached the ground any other way
    Crashed,
}

impl FlightOutcome {
    /// Landed and Crashed end the flight; the loop keeps running but the ship freezes
    pub fn is_terminal(self) -> bool {
        matches!(self, FlightOutcome::Landed | FlightOutcome::Crashed)
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Center of the body in pixels, y grows downward
    pub pos: DVec2,
    /// Pixels per tick
    pub vel: DVec2,
    /// Radians, 0 = upright, positive = clockwise. Never wrapped.
    pub angle: f64,
    pub engine_on: bool,
    pub rotating_left: bool,
    pub rotating_right: bool,
    pub width: f64,
    pub height: f64,
}

impl Ship {
    /// Spawn at rest, horizontally centered near the top of the world
    pub fn new(world: &World) -> Self {
        Self::at(DVec2::new(
            world.width / 2.0,
            world.height * SHIP_SPAWN_HEIGHT_FRACTION,
        ))
    }

    /// Spawn at rest at an explicit position
    pub fn at(pos: DVec2) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            angle: 0.0,
            engine_on: false,
            rotating_left: false,
            rotating_right: false,
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
        }
    }
}

/// The landing target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingPad {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LandingPad {
    /// Whether `x` lies within the half-open span [x, x + width)
    pub fn spans(&self, x: f64) -> bool {
        x >= self.x && x < self.x + self.width
    }
}

/// Static geometry of the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub width: f64,
    pub height: f64,
    /// Top of the ground band
    pub ground_y: f64,
    pub pad: LandingPad,
    pub gravity: f64,
}

impl World {
    /// Create a world with the pad at a random position in [0, width - PAD_WIDTH)
    pub fn new(width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let span = (width - PAD_WIDTH).max(0.0);
        let pad_x = rng.random::<f64>() * span;
        Self::with_pad_at(width, height, pad_x)
    }

    /// Create a world with a known pad position
    pub fn with_pad_at(width: f64, height: f64, pad_x: f64) -> Self {
        Self {
            width,
            height,
            ground_y: height - GROUND_HEIGHT,
            pad: LandingPad {
                x: pad_x,
                y: height - PAD_TOP_OFFSET,
                width: PAD_WIDTH,
                height: PAD_HEIGHT,
            },
            gravity: GRAVITY,
        }
    }

    /// Vertical distance from `y` down to the top of the ground band
    #[inline]
    pub fn clearance(&self, y: f64) -> f64 {
        self.ground_y - y
    }

    /// Strictly inside the left and right edges
    #[inline]
    pub fn in_horizontal_bounds(&self, x: f64) -> bool {
        x > 0.0 && x < self.width
    }
}

/// One-shot guard for an effect that must fire at most once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latch {
    tripped: bool,
}

impl Latch {
    /// Returns true only on the first call
    pub fn trip(&mut self) -> bool {
        !std::mem::replace(&mut self.tripped, true)
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped
    }
}

/// Per-outcome latches for terminal effects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectLatches {
    pub crash: Latch,
    pub landing: Latch,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed used to place the pad
    pub seed: u64,
    pub ship: Ship,
    pub world: World,
    /// Outcome of the most recent tick
    pub outcome: FlightOutcome,
    pub latches: EffectLatches,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game for a viewport, placing the pad from `seed`
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = World::new(width, height, &mut rng);
        let mut state = Self::with_world(world);
        state.seed = seed;
        state
    }

    /// Create a new game in a fixed world
    pub fn with_world(world: World) -> Self {
        Self {
            seed: 0,
            ship: Ship::new(&world),
            world,
            outcome: FlightOutcome::Flying,
            latches: EffectLatches::default(),
            time_ticks: 0,
        }
    }

    /// Clearance of the ship right now
    pub fn clearance(&self) -> f64 {
        self.world.clearance(self.ship.pos.y)
    }
}
