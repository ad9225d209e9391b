use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::apply::dom::{query_html, set_style, DomSelectors, DomTarget};
use crate::config::model::ChoreographyConfig;
use crate::foundation::core::Viewport;
use crate::foundation::error::ChoreoError;
use crate::scroll::gate::MobileGate;
use crate::scroll::pin::{PinPhase, spacer_height};
use crate::session::choreographer::{Choreographer, Frame};
use crate::web::pin::PinSpacer;

fn to_js(err: ChoreoError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn read_viewport(window: &web_sys::Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

fn now_secs(window: &web_sys::Window) -> f64 {
    window.performance().map_or(0.0, |p| p.now() / 1000.0)
}

fn scroll_y(window: &web_sys::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

struct Shared {
    window: web_sys::Window,
    choreo: Choreographer,
    target: Option<DomTarget>,
    pin: Option<PinSpacer>,
    gate: MobileGate,
    overlay: Option<HtmlElement>,
    pending_frame: Option<i32>,
    on_frame: Option<js_sys::Function>,
}

impl Shared {
    fn show_overlay(&self, blocked: bool) {
        if let Some(el) = &self.overlay {
            set_style(el, "display", if blocked { "flex" } else { "none" });
        }
    }

    /// Size the spacer for the current track and take the region start from it.
    fn measure(&mut self) {
        let Some(pin) = self.pin.as_mut() else {
            return;
        };
        pin.set_height(spacer_height(self.choreo.track(), pin.section_height()));
        self.choreo.set_start_offset(pin.start_offset(scroll_y(&self.window)));
    }

    fn handle_resize(&mut self) {
        let viewport = read_viewport(&self.window);
        self.choreo.resize(viewport);
        self.measure();
        self.gate.observe(viewport, now_secs(&self.window));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                tracing::warn!(error = ?err, "cancelAnimationFrame failed");
            }
        }
    }

    /// One animation frame. Returns whether another frame is needed.
    fn run_frame(&mut self, now: f64) -> bool {
        self.pending_frame = None;
        if let Some(blocked) = self.gate.poll(now) {
            self.show_overlay(blocked);
        }
        let scroll = scroll_y(&self.window);
        if let Some(pin) = self.pin.as_mut() {
            let phase = PinPhase::for_progress(self.choreo.progress(scroll));
            pin.update(phase, self.choreo.track().distance());
        }
        let animating = match self.target.as_mut() {
            Some(target) => self
                .choreo
                .tick(Frame::timed(scroll, now), target)
                .is_some_and(|r| r.animating),
            None => false,
        };
        animating || self.gate.has_pending()
    }
}

fn schedule(shared: &Rc<RefCell<Shared>>) {
    let Ok(mut s) = shared.try_borrow_mut() else {
        return;
    };
    if s.pending_frame.is_some() {
        return;
    }
    let Some(callback) = s.on_frame.clone() else {
        return;
    };
    match s.window.request_animation_frame(&callback) {
        Ok(handle) => s.pending_frame = Some(handle),
        Err(err) => tracing::warn!(error = ?err, "requestAnimationFrame failed"),
    }
}

/// Scroll and resize listeners driving a [`Choreographer`] against the DOM.
///
/// The section is wrapped in a spacer and held at the viewport top while
/// progress runs. Dropping the binding (or calling `unmount` from JS) detaches
/// both listeners, cancels any scheduled frame and unwraps the section.
#[wasm_bindgen]
pub struct ScrollBinding {
    window: web_sys::Window,
    shared: Rc<RefCell<Shared>>,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
    _on_frame: Closure<dyn FnMut(f64)>,
}

#[wasm_bindgen]
impl ScrollBinding {
    /// Mount with a JSON config, or the showcase preset when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ScrollBinding, JsValue> {
        let config = match config_json {
            Some(json) => ChoreographyConfig::from_json_str(&json).map_err(to_js)?,
            None => ChoreographyConfig::showcase(),
        };
        Self::attach(config, &DomSelectors::default())
    }

    /// Detach now instead of waiting for the JS wrapper to be freed.
    pub fn unmount(self) {}

    /// Raw progress at the current scroll position.
    pub fn progress(&self) -> f64 {
        self.shared
            .try_borrow()
            .map_or(0.0, |s| s.choreo.progress(scroll_y(&s.window)).get())
    }

    /// Re-measure layout and render synchronously, as after a content change.
    pub fn refresh(&self) {
        let again = match self.shared.try_borrow_mut() {
            Ok(mut s) => {
                s.handle_resize();
                s.cancel_pending();
                let now = now_secs(&s.window);
                s.run_frame(now)
            }
            Err(_) => false,
        };
        if again {
            schedule(&self.shared);
        }
    }
}

impl ScrollBinding {
    /// Mount against elements matched by `selectors`.
    pub fn attach(config: ChoreographyConfig, selectors: &DomSelectors) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let viewport = read_viewport(&window);
        let word_offset_px = config.text_reveal.as_ref().map_or(0.0, |r| r.word_offset_px);
        let choreo = Choreographer::new(config, viewport, 0.0).map_err(to_js)?;
        let target = DomTarget::from_document(&document, selectors, word_offset_px)?;
        if target.is_none() {
            tracing::debug!(header = %selectors.header, "render targets absent; binding is inert");
        }
        let pin = match query_html(&document, &selectors.section)? {
            Some(section) => Some(PinSpacer::wrap(&document, section)?),
            None => None,
        };
        let overlay = match &selectors.overlay {
            Some(sel) => query_html(&document, sel)?,
            None => None,
        };

        let mut gate = MobileGate::default();
        gate.check(viewport);

        let shared = Rc::new(RefCell::new(Shared {
            window: window.clone(),
            choreo,
            target,
            pin,
            gate,
            overlay,
            pending_frame: None,
            on_frame: None,
        }));
        {
            let mut s = shared.borrow_mut();
            s.measure();
            s.show_overlay(s.gate.blocked());
        }

        let weak: Weak<RefCell<Shared>> = Rc::downgrade(&shared);
        let on_frame = Closure::<dyn FnMut(f64)>::new(move |ts_ms: f64| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let again = match shared.try_borrow_mut() {
                Ok(mut s) => s.run_frame(ts_ms / 1000.0),
                Err(_) => false,
            };
            if again {
                schedule(&shared);
            }
        });
        shared.borrow_mut().on_frame = Some(on_frame.as_ref().unchecked_ref::<js_sys::Function>().clone());

        let weak = Rc::downgrade(&shared);
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            if let Some(shared) = weak.upgrade() {
                schedule(&shared);
            }
        });

        let weak = Rc::downgrade(&shared);
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            if let Ok(mut s) = shared.try_borrow_mut() {
                s.handle_resize();
            }
            schedule(&shared);
        });

        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        schedule(&shared);

        Ok(Self {
            window,
            shared,
            on_scroll,
            on_resize,
            _on_frame: on_frame,
        })
    }
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        if let Ok(mut s) = self.shared.try_borrow_mut() {
            s.cancel_pending();
            if let Some(pin) = s.pin.take() {
                pin.release();
            }
            s.on_frame = None;
            s.target = None;
            s.choreo.reset();
        }
        tracing::debug!("scroll binding detached");
    }
}
