//! DOM-backed presenter and canvas setup

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

use super::{SetupError, panel_selector, readout_selector};
use crate::ui::{Panel, Presenter, Readout};

pub fn document() -> Result<Document, SetupError> {
    web_sys::window()
        .ok_or(SetupError::NoWindow)?
        .document()
        .ok_or(SetupError::NoDocument)
}

/// Look up a required element by selector
pub fn html_element(document: &Document, selector: &'static str) -> Result<HtmlElement, SetupError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or(SetupError::MissingElement(selector))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::WrongElementType(selector))
}

/// Size the canvas to the window and grab its 2D context
pub fn canvas_context(
    document: &Document,
    width: u32,
    height: u32,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), SetupError> {
    let selector = panel_selector(Panel::Flight);
    let canvas: HtmlCanvasElement = html_element(document, selector)?
        .dyn_into()
        .map_err(|_| SetupError::WrongElementType(selector))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or(SetupError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SetupError::NoContext)?;
    Ok((canvas, ctx))
}

/// Presenter that toggles `style.display` on page elements
pub struct DomPresenter {
    panels: HashMap<Panel, HtmlElement>,
    readouts: HashMap<Readout, HtmlElement>,
}

impl DomPresenter {
    /// Panels are required; readouts are optional and skipped when absent
    pub fn new(document: &Document) -> Result<Self, SetupError> {
        let mut panels = HashMap::new();
        for panel in Panel::ALL {
            panels.insert(panel, html_element(document, panel_selector(panel))?);
        }

        let mut readouts = HashMap::new();
        for readout in [Readout::Altitude, Readout::Velocity, Readout::Rotation] {
            match html_element(document, readout_selector(readout)) {
                Ok(el) => {
                    readouts.insert(readout, el);
                }
                Err(e) => log::warn!("{e} - readout disabled"),
            }
        }

        Ok(Self { panels, readouts })
    }
}

impl Presenter for DomPresenter {
    fn show_panel(&mut self, panel: Panel) {
        if let Some(el) = self.panels.get(&panel) {
            let _ = el.style().set_property("display", panel.display_style());
        }
    }

    fn hide_panel(&mut self, panel: Panel) {
        if let Some(el) = self.panels.get(&panel) {
            let _ = el.style().set_property("display", "none");
        }
    }

    fn set_readout(&mut self, readout: Readout, text: &str) {
        if let Some(el) = self.readouts.get(&readout) {
            el.set_text_content(Some(text));
        }
    }
}
