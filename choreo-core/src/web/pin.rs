use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Node};

use crate::apply::dom::{clear_style, set_style};
use crate::scroll::pin::PinPhase;

const PIN_STYLES: [&str; 4] = ["position", "top", "left", "width"];

/// Wraps the pinned section in a spacer that reserves its scroll distance.
///
/// The spacer stays in the document flow, so its offset is the region start
/// no matter where the section is currently held.
pub(crate) struct PinSpacer {
    spacer: HtmlElement,
    section: HtmlElement,
    phase: Option<PinPhase>,
}

impl PinSpacer {
    pub(crate) fn wrap(document: &Document, section: HtmlElement) -> Result<Self, JsValue> {
        let spacer: HtmlElement = document.create_element("div")?.dyn_into()?;
        spacer.set_class_name("pin-spacer");
        set_style(&spacer, "position", "relative");
        if let Some(parent) = section.parent_node() {
            let anchor: &Node = &section;
            parent.insert_before(&spacer, Some(anchor))?;
        }
        spacer.append_child(&section)?;
        Ok(Self {
            spacer,
            section,
            phase: None,
        })
    }

    /// Document offset of the spacer's top edge.
    pub(crate) fn start_offset(&self, scroll_y: f64) -> f64 {
        self.spacer.get_bounding_client_rect().top() + scroll_y
    }

    pub(crate) fn section_height(&self) -> f64 {
        f64::from(self.section.offset_height())
    }

    /// Resize the spacer; the next `update` rewrites the section geometry.
    pub(crate) fn set_height(&mut self, height: f64) {
        set_style(&self.spacer, "height", &format!("{height}px"));
        self.phase = None;
    }

    pub(crate) fn update(&mut self, phase: PinPhase, distance: f64) {
        if self.phase == Some(phase) {
            return;
        }
        match phase {
            PinPhase::Before => {
                for name in PIN_STYLES {
                    clear_style(&self.section, name);
                }
            }
            PinPhase::Pinned => {
                let rect = self.spacer.get_bounding_client_rect();
                set_style(&self.section, "position", "fixed");
                set_style(&self.section, "top", "0px");
                set_style(&self.section, "left", &format!("{}px", rect.left()));
                set_style(&self.section, "width", &format!("{}px", rect.width()));
            }
            PinPhase::After => {
                set_style(&self.section, "position", "absolute");
                set_style(&self.section, "top", &format!("{distance}px"));
                set_style(&self.section, "left", "0px");
                set_style(&self.section, "width", "100%");
            }
        }
        tracing::debug!(?phase, "pin phase changed");
        self.phase = Some(phase);
    }

    /// Put the section back where it was and drop the spacer.
    pub(crate) fn release(&self) {
        for name in PIN_STYLES {
            clear_style(&self.section, name);
        }
        if let Some(parent) = self.spacer.parent_node() {
            let anchor: &Node = &self.spacer;
            if let Err(err) = parent.insert_before(&self.section, Some(anchor)) {
                tracing::warn!(error = ?err, "failed to restore pinned section");
            }
        }
        self.spacer.remove();
    }
}
