use crate::audio::{AudioSink, SoundCue};
use crate::ui::{Panel, Presenter, Readout};

// Every side effect the simulation or input layer produced, in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Effect {
    Show(Panel),
    Hide(Panel),
    Text(Readout, String),
    Play(SoundCue),
    Stop(SoundCue),
    PlayAfter(SoundCue, u32),
}

#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) effects: Vec<Effect>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn count(&self, effect: &Effect) -> usize {
        self.effects.iter().filter(|e| *e == effect).count()
    }

    pub(crate) fn plays(&self, cue: SoundCue) -> usize {
        self.count(&Effect::Play(cue))
    }

    pub(crate) fn last_text(&self, readout: Readout) -> Option<&str> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::Text(r, text) if *r == readout => Some(text.as_str()),
            _ => None,
        })
    }

    /// Delayed cues that were scheduled and not stopped since
    pub(crate) fn scheduled(&self) -> Vec<SoundCue> {
        let mut pending = Vec::new();
        for effect in &self.effects {
            match effect {
                Effect::PlayAfter(cue, _) => pending.push(*cue),
                Effect::Stop(cue) => pending.retain(|c| c != cue),
                _ => {}
            }
        }
        pending
    }

    pub(crate) fn clear(&mut self) {
        self.effects.clear();
    }
}

impl Presenter for Recorder {
    fn show_panel(&mut self, panel: Panel) {
        self.effects.push(Effect::Show(panel));
    }

    fn hide_panel(&mut self, panel: Panel) {
        self.effects.push(Effect::Hide(panel));
    }

    fn set_readout(&mut self, readout: Readout, text: &str) {
        self.effects.push(Effect::Text(readout, text.to_string()));
    }
}

impl AudioSink for Recorder {
    fn play(&mut self, cue: SoundCue) {
        self.effects.push(Effect::Play(cue));
    }

    fn stop(&mut self, cue: SoundCue) {
        self.effects.push(Effect::Stop(cue));
    }

    fn play_after(&mut self, cue: SoundCue, delay_ms: u32) {
        self.effects.push(Effect::PlayAfter(cue, delay_ms));
    }
}
