//! Audio cues and the browser audio backend
//!
//! The simulation only names cues. The wasm host plays them through
//! `HtmlAudioElement`s loaded from the `sounds/` directory.

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Engine loop, started on thrust key down and rewound on key up
    Thrust,
    /// Crash explosion
    Offline,
    /// Warning beep while off screen
    OutOfRange,
    /// Spoken "offline" line after the explosion
    OfflineVocal,
    /// Spoken victory line
    WinnerVocal,
}

impl SoundCue {
    pub const ALL: [SoundCue; 5] = [
        SoundCue::Thrust,
        SoundCue::Offline,
        SoundCue::OutOfRange,
        SoundCue::OfflineVocal,
        SoundCue::WinnerVocal,
    ];

    /// Asset path relative to the page
    pub fn asset_path(self) -> &'static str {
        match self {
            SoundCue::Thrust => "sounds/thrust.wav",
            SoundCue::Offline => "sounds/offline.wav",
            SoundCue::OutOfRange => "sounds/outOfRange.wav",
            SoundCue::OfflineVocal => "sounds/offline_vocal.m4a",
            SoundCue::WinnerVocal => "sounds/winner.m4a",
        }
    }
}

/// Fire-and-forget sound playback
pub trait AudioSink {
    /// Start a cue. Playing an already-playing cue is a no-op.
    fn play(&mut self, cue: SoundCue);
    /// Pause a cue, rewind it to the start and cancel any delayed start
    fn stop(&mut self, cue: SoundCue);
    /// Start a cue after `delay_ms` without blocking the caller
    fn play_after(&mut self, cue: SoundCue, delay_ms: u32);
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::collections::HashMap;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::HtmlAudioElement;

    use super::{AudioSink, SoundCue};
    use crate::Settings;

    /// Timer handle plus the callback it will run
    type PendingCue = (i32, Closure<dyn FnMut()>);

    /// Audio manager for the game
    pub struct AudioManager {
        clips: HashMap<SoundCue, HtmlAudioElement>,
        /// Delayed starts that have not been cancelled
        pending: HashMap<SoundCue, PendingCue>,
        master_volume: f32,
        muted: bool,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            let mut clips = HashMap::new();
            for cue in SoundCue::ALL {
                match HtmlAudioElement::new_with_src(cue.asset_path()) {
                    Ok(el) => {
                        clips.insert(cue, el);
                    }
                    Err(_) => log::warn!("Failed to load {} - cue disabled", cue.asset_path()),
                }
            }
            let mut manager = Self {
                clips,
                pending: HashMap::new(),
                master_volume: 0.8,
                muted: false,
            };
            manager.apply_settings(settings);
            manager
        }

        /// Pick up volume and mute changes
        pub fn apply_settings(&mut self, settings: &Settings) {
            self.master_volume = settings.master_volume.clamp(0.0, 1.0);
            self.muted = settings.muted;
            let vol = self.effective_volume() as f64;
            for el in self.clips.values() {
                el.set_volume(vol);
            }
        }

        /// Get effective volume
        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.master_volume }
        }

        /// Drop a scheduled start so it never fires
        fn cancel_pending(&mut self, cue: SoundCue) {
            if let Some((handle, _closure)) = self.pending.remove(&cue) {
                if let Some(window) = web_sys::window() {
                    window.clear_timeout_with_handle(handle);
                }
                log::debug!("Cancelled delayed {:?}", cue);
            }
        }
    }

    impl AudioSink for AudioManager {
        fn play(&mut self, cue: SoundCue) {
            if let Some(el) = self.clips.get(&cue) {
                // Autoplay rejections surface as a rejected promise; ignore them
                let _ = el.play();
            }
        }

        fn stop(&mut self, cue: SoundCue) {
            self.cancel_pending(cue);
            if let Some(el) = self.clips.get(&cue) {
                el.pause().ok();
                el.set_current_time(0.0);
            }
        }

        fn play_after(&mut self, cue: SoundCue, delay_ms: u32) {
            let Some(el) = self.clips.get(&cue).cloned() else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            self.cancel_pending(cue);
            let closure: Closure<dyn FnMut()> = Closure::once(move || {
                let _ = el.play();
            });
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms as i32,
            ) {
                // Keep the callback alive until it fires or is cancelled
                Ok(handle) => {
                    self.pending.insert(cue, (handle, closure));
                }
                Err(_) => log::warn!("Failed to schedule {:?}", cue),
            }
        }
    }
}
