//! Game session
//!
//! Owns the simulation, the starfield and the frame loop, and runs one
//! complete frame: clear, scenery, tick, ship.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{AudioSink, SoundCue};
use crate::input;
use crate::renderer::{RenderSurface, draw_ground, draw_landing_pad, draw_ship, draw_starfield};
use crate::scheduler::FrameLoop;
use crate::sim::{FlightOutcome, GameState, tick};
use crate::starfield::Starfield;
use crate::ui::{Panel, Presenter};

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub stars: Starfield,
    frame_loop: FrameLoop,
    /// Visual-only randomness (flame flicker)
    rng: Pcg32,
}

impl Game {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let state = GameState::new(width, height, seed);
        // Separate stream so the starfield does not shift the pad
        let mut rng = Pcg32::seed_from_u64(seed ^ 0x5EED_57A2);
        let stars = Starfield::generate(width, height, &mut rng);
        Self {
            state,
            stars,
            frame_loop: FrameLoop::new(),
            rng,
        }
    }

    pub fn width(&self) -> f64 {
        self.state.world.width
    }

    pub fn height(&self) -> f64 {
        self.state.world.height
    }

    pub fn outcome(&self) -> FlightOutcome {
        self.state.outcome
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    /// Paint the scenery shown behind the start prompt
    pub fn draw_idle(&mut self, surface: &mut impl RenderSurface) {
        let (w, h) = (self.width(), self.height());
        draw_starfield(surface, &mut self.stars, w, h);
        draw_ground(surface, &self.state.world);
    }

    /// Start the loop. Returns true if the host must request the first frame.
    pub fn start(&mut self) -> bool {
        log::info!(
            "Starting flight (pad at x={:.1}, seed {})",
            self.state.world.pad.x,
            self.state.seed
        );
        self.frame_loop.start()
    }

    /// Run one animation frame. Returns true if the host should request
    /// another.
    pub fn frame<R, S>(&mut self, surface: &mut R, sink: &mut S) -> bool
    where
        R: RenderSurface,
        S: Presenter + AudioSink,
    {
        let Self {
            state,
            stars,
            frame_loop,
            rng,
        } = self;

        frame_loop.run_frame(|| {
            let world = &state.world;
            let (w, h) = (world.width, world.height);
            surface.clear_rect(0.0, 0.0, w, h);
            draw_starfield(surface, stars, w, h);
            draw_ground(surface, world);
            draw_landing_pad(surface, world);

            tick(state, sink);

            draw_ship(surface, &state.ship, rng);
        })
    }

    pub fn key_down(&mut self, key: &str, audio: &mut impl AudioSink) -> bool {
        input::key_down(&mut self.state.ship, key, audio)
    }

    pub fn key_up(&mut self, key: &str, audio: &mut impl AudioSink) -> bool {
        input::key_up(&mut self.state.ship, key, audio)
    }

    /// Reset everything to a fresh flight with a new pad and starfield.
    ///
    /// Every cue is stopped, including a delayed vocal still waiting to play.
    /// The frame loop keeps its phase, so a running game continues at once.
    pub fn restart<S>(&mut self, seed: u64, sink: &mut S)
    where
        S: Presenter + AudioSink,
    {
        let (w, h) = (self.width(), self.height());
        let fresh = Game::new(w, h, seed);
        self.state = fresh.state;
        self.stars = fresh.stars;
        self.rng = fresh.rng;

        for cue in SoundCue::ALL {
            sink.stop(cue);
        }
        sink.hide_panel(Panel::Offline);
        sink.hide_panel(Panel::Winner);
        sink.hide_panel(Panel::OutOfRange);
        sink.show_panel(Panel::Flight);
        log::info!("Game restarted with seed: {}", seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{Op, RecordingSurface};
    use crate::sim::test_support::{Effect, Recorder};
    use glam::DVec2;

    #[test]
    fn test_no_ticks_before_start() {
        let mut game = Game::new(800.0, 600.0, 1);
        let mut surface = RecordingSurface::default();
        let mut rec = Recorder::new();

        assert!(!game.frame(&mut surface, &mut rec));
        assert!(surface.ops.is_empty());
        assert_eq!(game.state.time_ticks, 0);
    }

    #[test]
    fn test_idle_draws_stars_and_ground() {
        let mut game = Game::new(400.0, 400.0, 1);
        let mut surface = RecordingSurface::default();
        game.draw_idle(&mut surface);

        let rects = surface.fill_rects();
        assert_eq!(rects[0], (0.0, 0.0, 400.0, 400.0));
        assert_eq!(rects[1], (0.0, 380.0, 400.0, 20.0));
        assert_eq!(game.state.time_ticks, 0);
    }

    #[test]
    fn test_frame_draw_order() {
        let mut game = Game::new(800.0, 600.0, 11);
        let mut surface = RecordingSurface::default();
        let mut rec = Recorder::new();

        assert!(game.start());
        assert!(game.frame(&mut surface, &mut rec));
        assert_eq!(game.state.time_ticks, 1);

        assert_eq!(surface.ops[0], Op::ClearRect(0.0, 0.0, 800.0, 600.0));
        let rects = surface.fill_rects();
        let pad = game.state.world.pad;
        assert_eq!(rects[0], (0.0, 0.0, 800.0, 600.0));
        assert_eq!(rects[1], (0.0, 580.0, 800.0, 20.0));
        assert_eq!(rects[2], (pad.x, 565.0, 100.0, 10.0));
        // Ship comes last, after the tick moved nothing yet (zero velocity)
        let last_translate = surface
            .ops
            .iter()
            .rev()
            .find(|op| matches!(op, Op::Translate(..)));
        assert_eq!(last_translate, Some(&Op::Translate(400.0, 60.0)));
        assert!(surface.is_balanced());
        assert!(rec.effects.contains(&Effect::Show(Panel::Flight)));
    }

    #[test]
    fn test_loop_keeps_running_after_crash() {
        let mut game = Game::new(800.0, 600.0, 3);
        let mut surface = RecordingSurface::default();
        let mut rec = Recorder::new();
        game.start();

        for _ in 0..400 {
            assert!(game.frame(&mut surface, &mut rec));
            surface.ops.clear();
        }
        assert_eq!(game.outcome(), FlightOutcome::Crashed);
        assert_eq!(game.frame_loop().frames(), 400);
        assert_eq!(rec.plays(SoundCue::Offline), 1);
    }

    #[test]
    fn test_keys_drive_ship() {
        let mut game = Game::new(800.0, 600.0, 3);
        let mut surface = RecordingSurface::default();
        let mut rec = Recorder::new();
        game.start();

        assert!(game.key_down(" ", &mut rec));
        assert!(game.key_down("ArrowRight", &mut rec));
        game.frame(&mut surface, &mut rec);
        assert!(game.state.ship.angle > 0.0);
        assert!(game.state.ship.vel.x > 0.0);
        assert!(surface.ops.contains(&Op::FillStyle("orange".to_string())));

        assert!(game.key_up(" ", &mut rec));
        assert!(!game.state.ship.engine_on);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut game = Game::new(800.0, 600.0, 5);
        let mut surface = RecordingSurface::default();
        let mut rec = Recorder::new();
        game.start();
        for _ in 0..400 {
            game.frame(&mut surface, &mut rec);
        }
        assert!(game.state.latches.crash.is_tripped());

        rec.clear();
        game.restart(6, &mut rec);
        assert_eq!(game.outcome(), FlightOutcome::Flying);
        assert_eq!(game.state.ship.pos, DVec2::new(400.0, 60.0));
        assert!(!game.state.latches.crash.is_tripped());
        assert_eq!(game.state.time_ticks, 0);
        assert_eq!(game.state.seed, 6);
        assert!(rec.effects.contains(&Effect::Stop(SoundCue::Thrust)));
        assert!(rec.effects.contains(&Effect::Stop(SoundCue::OfflineVocal)));
        assert!(rec.effects.contains(&Effect::Stop(SoundCue::WinnerVocal)));
        assert!(rec.effects.contains(&Effect::Hide(Panel::Offline)));
        assert!(rec.effects.contains(&Effect::Show(Panel::Flight)));

        // Still running: next frame ticks immediately
        assert!(game.frame(&mut surface, &mut rec));
        assert_eq!(game.state.time_ticks, 1);
    }

    #[test]
    fn test_restart_cancels_delayed_vocal() {
        let mut game = Game::new(800.0, 600.0, 9);
        let mut surface = RecordingSurface::default();
        let mut rec = Recorder::new();
        game.start();
        while game.outcome() != FlightOutcome::Crashed {
            game.frame(&mut surface, &mut rec);
            surface.ops.clear();
        }
        assert_eq!(rec.scheduled(), vec![SoundCue::OfflineVocal]);

        // Reboot before the vocal's delay has elapsed
        game.restart(10, &mut rec);
        assert!(rec.scheduled().is_empty());

        for _ in 0..30 {
            game.frame(&mut surface, &mut rec);
        }
        assert!(rec.scheduled().is_empty());
        assert_eq!(game.outcome(), FlightOutcome::Flying);
    }
}
