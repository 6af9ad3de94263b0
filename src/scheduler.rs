//! Frame loop contract
//!
//! The host owns the real animation-frame primitive. `FrameLoop` decides
//! whether a frame runs and whether another one should be requested, and
//! guarantees that at most one request is ever outstanding.

/// Whether the loop is ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    /// Waiting for the player to press start
    #[default]
    Idle,
    Running,
}

#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    phase: LoopPhase,
    /// A frame callback has been requested and not yet delivered
    pending: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin running. Returns true if the caller must request the first frame.
    pub fn start(&mut self) -> bool {
        self.phase = LoopPhase::Running;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Deliver a frame callback: run `step` if running, then report whether
    /// the host should request the next frame.
    pub fn run_frame(&mut self, step: impl FnOnce()) -> bool {
        self.pending = false;
        if self.phase != LoopPhase::Running {
            return false;
        }
        step();
        self.frames += 1;
        self.pending = true;
        true
    }

    /// Frames run since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
