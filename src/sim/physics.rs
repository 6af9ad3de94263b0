//! Ship kinematics for one tick

use super::state::Ship;
use crate::consts::{ROTATION_STEP, THRUST};

/// Advance the ship by one tick.
///
/// Position moves first with last tick's velocity, then rotation, thrust and
/// gravity update the velocity used next tick.
pub fn integrate(ship: &mut Ship, gravity: f64) {
    ship.pos += ship.vel;

    if ship.rotating_right {
        ship.angle += ROTATION_STEP;
    } else if ship.rotating_left {
        ship.angle -= ROTATION_STEP;
    }

    if ship.engine_on {
        ship.vel.x += THRUST * ship.angle.sin();
        ship.vel.y -= THRUST * (-ship.angle).cos();
    }

    // Gravity is negative, so subtracting it pulls toward larger y
    ship.vel.y -= gravity;
}
