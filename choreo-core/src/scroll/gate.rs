use crate::foundation::core::Viewport;

/// Viewports narrower than this are covered by the mobile-block overlay.
pub const MOBILE_MIN_WIDTH_PX: f64 = 768.0;
/// Resize checks settle for this long before the gate re-evaluates.
pub const RESIZE_DEBOUNCE_SECS: f64 = 0.150;

/// Debounced "is this viewport too small" check.
///
/// [`MobileGate::check`] evaluates immediately (used on mount);
/// [`MobileGate::observe`] records a resize and [`MobileGate::poll`] applies
/// the most recent one once the debounce delay has passed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MobileGate {
    min_width: f64,
    debounce_secs: f64,
    blocked: bool,
    pending: Option<(f64, Viewport)>,
}

impl Default for MobileGate {
    fn default() -> Self {
        Self::new(MOBILE_MIN_WIDTH_PX, RESIZE_DEBOUNCE_SECS)
    }
}

impl MobileGate {
    /// Gate blocking widths under `min_width`.
    pub fn new(min_width: f64, debounce_secs: f64) -> Self {
        Self {
            min_width,
            debounce_secs: debounce_secs.max(0.0),
            blocked: false,
            pending: None,
        }
    }

    pub fn is_blocked_width(width: f64) -> bool {
        width < MOBILE_MIN_WIDTH_PX
    }

    pub fn blocked(&self) -> bool {
        self.blocked
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Evaluate `viewport` right away, dropping any pending resize.
    pub fn check(&mut self, viewport: Viewport) -> bool {
        self.pending = None;
        self.blocked = viewport.width < self.min_width;
        self.blocked
    }

    /// Record a resize at `now_secs`; restarts the debounce window.
    pub fn observe(&mut self, viewport: Viewport, now_secs: f64) {
        self.pending = Some((now_secs, viewport));
    }

    /// Apply a settled resize. Returns the new state only when it changed.
    pub fn poll(&mut self, now_secs: f64) -> Option<bool> {
        let (at, viewport) = self.pending?;
        if now_secs - at < self.debounce_secs {
            return None;
        }
        let was = self.blocked;
        let now_blocked = self.check(viewport);
        if now_blocked != was {
            tracing::debug!(blocked = now_blocked, width = viewport.width, "mobile gate changed");
            Some(now_blocked)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/gate.rs"]
mod tests;
