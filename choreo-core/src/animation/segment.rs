use crate::animation::ease::Ease;
use crate::foundation::core::{Progress, Window};
use crate::foundation::error::{ChoreoError, ChoreoResult};
use crate::foundation::math::lerp;

/// Values that can be blended by a scalar `t` in `[0, 1]`.
pub trait Lerp: Sized {
    /// Blend from `a` toward `b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

/// A named sub-animation with its own progress window.
///
/// Segments are independent: overlapping windows are allowed and each one is
/// re-evaluated from scratch on every tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub name: String,
    pub window: Window,
    #[serde(default)]
    pub ease: Ease,
}

impl Segment {
    /// Validated segment over `[start, end]`.
    pub fn new(name: impl Into<String>, start: f64, end: f64, ease: Ease) -> ChoreoResult<Self> {
        let seg = Self {
            name: name.into(),
            window: Window { start, end },
            ease,
        };
        seg.validate()?;
        Ok(seg)
    }

    pub fn validate(&self) -> ChoreoResult<()> {
        if self.name.trim().is_empty() {
            return Err(ChoreoError::validation("segment name must be non-empty"));
        }
        self.window
            .validate()
            .map_err(|e| ChoreoError::validation(format!("segment '{}': {e}", self.name)))
    }

    /// Eased local progress: `ease(clamp((p - start) / (end - start)))`.
    pub fn local_t(&self, p: Progress) -> f64 {
        self.ease.apply(self.window.local(p))
    }

    pub fn is_active(&self, p: Progress) -> bool {
        self.window.contains(p)
    }

    /// Sample `tween` at this segment's eased local progress.
    pub fn sample<T: Lerp>(&self, tween: &Tween<T>, p: Progress) -> T {
        tween.at(self.local_t(p))
    }
}

/// Endpoints of an interpolated property.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
}

impl<T: Lerp> Tween<T> {
    /// Tween from `from` to `to`.
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    pub fn at(&self, t: f64) -> T {
        T::lerp(&self.from, &self.to, t)
    }
}

impl Tween<f64> {
    /// Whether `v` lies between the endpoints (inclusive, either orientation).
    pub fn contains(&self, v: f64, eps: f64) -> bool {
        let (lo, hi) = if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        v >= lo - eps && v <= hi + eps
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/segment.rs"]
mod tests;
