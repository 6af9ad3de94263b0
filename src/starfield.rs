//! Twinkling background starfield
//!
//! Stars never move. Each one oscillates its alpha between a floor and a
//! ceiling at its own speed, independent of the game state.

use glam::DVec2;
use rand::Rng;

use crate::consts::{
    PIXELS_PER_STAR, STAR_ALPHA_CEILING, STAR_ALPHA_FLOOR, STAR_MAX_MAGNITUDE, STAR_RADIUS_SQ_MAX,
};

/// A single background star
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: DVec2,
    pub radius: f64,
    /// Current opacity, starts fully lit
    pub alpha: f64,
    /// Fading out when true, brightening when false
    pub decreasing: bool,
    /// Alpha change per frame
    pub magnitude: f64,
}

impl Star {
    /// Advance the twinkle by one frame.
    ///
    /// Direction only flips after crossing a threshold, so alpha can overshoot
    /// the floor or ceiling by at most one `magnitude`.
    pub fn twinkle(&mut self) {
        if self.decreasing {
            self.alpha -= self.magnitude;
            if self.alpha < STAR_ALPHA_FLOOR {
                self.decreasing = false;
            }
        } else {
            self.alpha += self.magnitude;
            if self.alpha > STAR_ALPHA_CEILING {
                self.decreasing = true;
            }
        }
    }
}

/// The full set of stars for one viewport
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Number of stars for a viewport, keeping density constant across sizes
    pub fn star_count(width: f64, height: f64) -> usize {
        (width * height / PIXELS_PER_STAR).round().max(0.0) as usize
    }

    pub fn generate(width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let count = Self::star_count(width, height);
        let stars = (0..count)
            .map(|_| Star {
                pos: DVec2::new(rng.random::<f64>() * width, rng.random::<f64>() * height),
                // sqrt spreads radii by area rather than by length
                radius: (rng.random::<f64>() * STAR_RADIUS_SQ_MAX).sqrt(),
                alpha: 1.0,
                decreasing: true,
                magnitude: rng.random::<f64>() * STAR_MAX_MAGNITUDE,
            })
            .collect();
        Self { stars }
    }

    pub fn twinkle(&mut self) {
        for star in &mut self.stars {
            star.twinkle();
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const EPS: f64 = 1e-9;

    fn star(magnitude: f64) -> Star {
        Star {
            pos: DVec2::ZERO,
            radius: 1.0,
            alpha: 1.0,
            decreasing: true,
            magnitude,
        }
    }

    #[test]
    fn test_star_count_tracks_area() {
        assert_eq!(Starfield::star_count(800.0, 600.0), 600);
        assert_eq!(Starfield::star_count(1920.0, 1080.0), 2592);
        assert_eq!(Starfield::star_count(10.0, 10.0), 0);
        assert_eq!(Starfield::star_count(30.0, 20.0), 1);
        assert_eq!(Starfield::star_count(0.0, 600.0), 0);
    }

    #[test]
    fn test_generated_stars_in_range() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let field = Starfield::generate(640.0, 480.0, &mut rng);
        assert_eq!(field.len(), 384);
        for s in &field.stars {
            assert!(s.pos.x >= 0.0 && s.pos.x < 640.0);
            assert!(s.pos.y >= 0.0 && s.pos.y < 480.0);
            assert!(s.radius >= 0.0 && s.radius < 2.0f64.sqrt());
            assert!(s.magnitude >= 0.0 && s.magnitude < STAR_MAX_MAGNITUDE);
            assert_eq!(s.alpha, 1.0);
            assert!(s.decreasing);
        }
    }

    #[test]
    fn test_twinkle_turns_around() {
        let mut s = star(0.04);
        let mut turned_up = false;
        let mut turned_down = false;
        for _ in 0..200 {
            let was = s.decreasing;
            s.twinkle();
            if was && !s.decreasing {
                turned_up = true;
                assert!(s.alpha < STAR_ALPHA_FLOOR);
            }
            if !was && s.decreasing {
                turned_down = true;
                assert!(s.alpha > STAR_ALPHA_CEILING);
            }
        }
        assert!(turned_up && turned_down);
    }

    #[test]
    fn test_still_star_stays_lit() {
        let mut s = star(0.0);
        for _ in 0..100 {
            s.twinkle();
        }
        assert_eq!(s.alpha, 1.0);
    }

    proptest! {
        #[test]
        fn alpha_stays_bounded(magnitude in 0.0f64..STAR_MAX_MAGNITUDE, frames in 1usize..5000) {
            let mut s = star(magnitude);
            let mut dipped = false;
            for _ in 0..frames {
                s.twinkle();
                prop_assert!(s.alpha >= STAR_ALPHA_FLOOR - magnitude - EPS);
                prop_assert!(s.alpha <= 1.0 + EPS);
                if dipped {
                    prop_assert!(s.alpha <= STAR_ALPHA_CEILING + magnitude + EPS);
                }
                if s.alpha <= STAR_ALPHA_CEILING {
                    dipped = true;
                }
            }
        }
    }
}
