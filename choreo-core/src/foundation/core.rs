use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::foundation::math::{clamp01, map_range};

/// Normalized position inside a pinned region. Always within `[0, 1]`.
///
/// Construction clamps; NaN becomes `0`. Scroll can reverse, so nothing here
/// assumes successive values are monotonic.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Start of the pinned region.
    pub const START: Self = Self(0.0);
    /// End of the pinned region.
    pub const END: Self = Self(1.0);

    /// Clamp `v` into a progress value.
    pub fn new(v: f64) -> Self {
        Self(clamp01(v))
    }

    /// Raw value in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Viewport size in CSS px.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Closed progress window `[start, end]` with `start < end`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    pub start: f64,
    pub end: f64,
}

impl Window {
    /// Validated window; see [`Window::validate`].
    pub fn new(start: f64, end: f64) -> ChoreoResult<Self> {
        let w = Self { start, end };
        w.validate()?;
        Ok(w)
    }

    /// Finite bounds with `0 <= start < end <= 1`.
    pub fn validate(self) -> ChoreoResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ChoreoError::validation("window bounds must be finite"));
        }
        if self.start < 0.0 || self.end > 1.0 {
            return Err(ChoreoError::validation(format!(
                "window [{}, {}] must lie within [0, 1]",
                self.start, self.end
            )));
        }
        if self.start >= self.end {
            return Err(ChoreoError::validation(format!(
                "window start {} must be < end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    pub fn span(self) -> f64 {
        self.end - self.start
    }

    pub fn contains(self, p: Progress) -> bool {
        self.start <= p.get() && p.get() <= self.end
    }

    /// Local position of `p` inside the window, clamped to `[0, 1]`.
    pub fn local(self, p: Progress) -> f64 {
        if self.span() <= 0.0 {
            // Unvalidated degenerate window: behave as a step at `start`.
            return if p.get() >= self.start { 1.0 } else { 0.0 };
        }
        clamp01(map_range(self.start, self.end, 0.0, 1.0, p.get()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
