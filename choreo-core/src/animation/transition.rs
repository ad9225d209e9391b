use crate::animation::ease::Ease;
use crate::foundation::math::{clamp01, lerp};

/// Duration, per-card stagger and curve for a toggle-driven transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionTiming {
    pub duration_secs: f64,
    #[serde(default)]
    pub stagger_secs: f64,
    /// Lead-in before the first card on upward crossings only.
    #[serde(default)]
    pub delay_secs: f64,
    #[serde(default)]
    pub ease: Ease,
}

impl TransitionTiming {
    /// Delay for card `index` out of `count`. Reverse crossings stagger from the
    /// last card and skip the lead-in.
    pub fn delay_for(&self, index: usize, count: usize, reverse: bool) -> f64 {
        let (lead, order) = if reverse {
            (0.0, count.saturating_sub(1).saturating_sub(index))
        } else {
            (self.delay_secs, index)
        };
        lead + self.stagger_secs * order as f64
    }
}

/// A clock-driven tween started when a toggle fires.
///
/// Holds `from` until `start_secs`, then eases toward `to` over `duration_secs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    from: f64,
    to: f64,
    start_secs: f64,
    duration_secs: f64,
    ease: Ease,
}

impl Transition {
    /// Transition starting at `start_secs` on the host clock.
    pub fn new(from: f64, to: f64, start_secs: f64, duration_secs: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_secs,
            duration_secs,
            ease,
        }
    }

    pub fn value_at(&self, now_secs: f64) -> f64 {
        if now_secs < self.start_secs {
            return self.from;
        }
        if self.duration_secs <= 0.0 {
            return self.to;
        }
        let t = clamp01((now_secs - self.start_secs) / self.duration_secs);
        lerp(self.from, self.to, self.ease.apply(t))
    }

    pub fn is_finished(&self, now_secs: f64) -> bool {
        now_secs >= self.start_secs + self.duration_secs.max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
