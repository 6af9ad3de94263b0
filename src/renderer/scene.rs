//! Scene painting: background, ground, pad and ship

use std::f64::consts::TAU;

use rand::Rng;

use super::RenderSurface;
use crate::consts::{FLAME_FLICKER, GROUND_HEIGHT};
use crate::sim::{Ship, World};
use crate::starfield::Starfield;

pub const SKY_COLOR: &str = "#111";
pub const GROUND_COLOR: &str = "#fff";
pub const PAD_COLOR: &str = "blue";
pub const SHIP_COLOR: &str = "#fff";
pub const FLAME_COLOR: &str = "orange";

/// CSS color for a star at the given opacity
fn star_color(alpha: f64) -> String {
    format!("rgba(255, 255, 255, {alpha})")
}

/// Fill the sky and draw every star, advancing each star's twinkle.
///
/// A star is painted with the alpha it had before this frame's update.
pub fn draw_starfield(
    surface: &mut impl RenderSurface,
    stars: &mut Starfield,
    width: f64,
    height: f64,
) {
    surface.save();
    surface.set_fill_style(SKY_COLOR);
    surface.fill_rect(0.0, 0.0, width, height);
    for star in &mut stars.stars {
        surface.begin_path();
        surface.arc(star.pos.x, star.pos.y, star.radius, 0.0, TAU);
        surface.close_path();
        surface.set_fill_style(&star_color(star.alpha));
        star.twinkle();
        surface.fill();
    }
    surface.restore();
}

pub fn draw_ground(surface: &mut impl RenderSurface, world: &World) {
    surface.save();
    surface.set_fill_style(GROUND_COLOR);
    surface.fill_rect(0.0, world.ground_y, world.width, GROUND_HEIGHT);
    surface.restore();
}

pub fn draw_landing_pad(surface: &mut impl RenderSurface, world: &World) {
    let pad = &world.pad;
    surface.save();
    surface.set_fill_style(PAD_COLOR);
    surface.fill_rect(pad.x, pad.y, pad.width, pad.height);
    surface.restore();
}

/// Draw the ship body, plus a flickering flame under it while the engine runs
pub fn draw_ship(surface: &mut impl RenderSurface, ship: &Ship, rng: &mut impl Rng) {
    let half_w = ship.width * 0.5;
    let half_h = ship.height * 0.5;

    surface.save();
    surface.begin_path();
    surface.translate(ship.pos.x, ship.pos.y);
    surface.rotate(ship.angle);
    surface.rect(-half_w, -half_h, ship.width, ship.height);
    surface.set_fill_style(SHIP_COLOR);
    surface.fill();
    surface.close_path();

    if ship.engine_on {
        let tip = half_h + rng.random::<f64>() * FLAME_FLICKER;
        surface.begin_path();
        surface.move_to(-half_w, half_h);
        surface.line_to(half_w, half_h);
        surface.line_to(0.0, tip);
        surface.line_to(-half_w, half_h);
        surface.close_path();
        surface.set_fill_style(FLAME_COLOR);
        surface.fill();
    }
    surface.restore();
}
