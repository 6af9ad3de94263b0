//! Platform abstraction layer
//!
//! Browser wiring for the presentation sink and the drawing surface. The
//! page is expected to provide:
//! - a `<canvas id="game">` (the flight panel)
//! - `.outOfRange`, `.offline`, `.winner` panels
//! - `.altitude`, `.velocity`, `.rotation` readouts
//! - `.start`, `.reboot`, `.replay` buttons

#[cfg(target_arch = "wasm32")]
pub mod web;

use thiserror::Error;

use crate::ui::{Panel, Readout};

/// Failure while wiring the game into the page
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing page element `{0}`")]
    MissingElement(&'static str),
    #[error("element `{0}` has the wrong type")]
    WrongElementType(&'static str),
    #[error("2D canvas context unavailable")]
    NoContext,
}

/// CSS selector for each panel
pub fn panel_selector(panel: Panel) -> &'static str {
    match panel {
        Panel::Flight => "#game",
        Panel::OutOfRange => ".outOfRange",
        Panel::Offline => ".offline",
        Panel::Winner => ".winner",
    }
}

/// CSS selector for each readout
pub fn readout_selector(readout: Readout) -> &'static str {
    match readout {
        Readout::Altitude => ".altitude",
        Readout::Velocity => ".velocity",
        Readout::Rotation => ".rotation",
    }
}

pub const START_SELECTOR: &str = ".start";
pub const REBOOT_SELECTOR: &str = ".reboot";
pub const REPLAY_SELECTOR: &str = ".replay";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_selectors_are_unique() {
        let mut seen = HashSet::new();
        for panel in Panel::ALL {
            assert!(seen.insert(panel_selector(panel)));
        }
        for readout in [Readout::Altitude, Readout::Velocity, Readout::Rotation] {
            assert!(seen.insert(readout_selector(readout)));
        }
        for button in [START_SELECTOR, REBOOT_SELECTOR, REPLAY_SELECTOR] {
            assert!(seen.insert(button));
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SetupError::MissingElement(".winner").to_string(),
            "missing page element `.winner`"
        );
        assert_eq!(SetupError::NoContext.to_string(), "2D canvas context unavailable");
    }
}
