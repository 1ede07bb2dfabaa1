//! HUD text overlay
//!
//! Text is drawn by the browser: each `HudSlot` maps to an absolutely
//! positioned element layered over the canvas.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::frame::{Frame, HudSlot};
use crate::colors;

pub struct HudOverlay {
    slots: Vec<(HudSlot, HtmlElement)>,
}

impl HudOverlay {
    /// Look up the slot elements; missing ones are skipped with a warning
    pub fn new(document: &Document) -> Self {
        let slots = HudSlot::ALL
            .iter()
            .filter_map(|&slot| {
                let el = document
                    .get_element_by_id(slot.element_id())
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                if el.is_none() {
                    log::warn!("HUD element #{} not found, its text will not be shown", slot.element_id());
                }
                el.map(|el| (slot, el))
            })
            .collect();
        Self { slots }
    }

    /// Show the frame's text, hiding slots it leaves empty
    pub fn render(&self, frame: &Frame) {
        for (slot, el) in &self.slots {
            let style = el.style();
            match frame.text(*slot) {
                Some(item) => {
                    el.set_text_content(Some(&item.text));
                    // Baseline-anchored like canvas text
                    let _ = style.set_property("left", &format!("{}px", item.pos.x));
                    let _ = style.set_property("top", &format!("{}px", item.pos.y - item.size_px));
                    let _ = style.set_property("font-size", &format!("{}px", item.size_px));
                    let _ = style.set_property("line-height", &format!("{}px", item.size_px));
                    let _ = style.set_property("color", &colors::css(item.color));
                    let _ = style.set_property("display", "block");
                }
                None => {
                    let _ = style.set_property("display", "none");
                }
            }
        }
    }
}
