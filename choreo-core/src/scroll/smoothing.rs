use crate::foundation::core::Progress;

/// Exponential catch-up of displayed progress toward scroll progress.
///
/// With `lag_secs` of 1 the displayed value covers about 99% of a jump
/// within one second. A lag of 0 follows the target exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubSmoother {
    lag_secs: f64,
    current: Option<f64>,
}

/// `ln(100)`: one lag period closes 99% of the gap.
const SETTLE_RATE: f64 = 4.605_170_185_988_091;
const SNAP: f64 = 1e-4;

impl ScrubSmoother {
    /// A lag of 0 passes the target through.
    pub fn new(lag_secs: f64) -> Self {
        Self {
            lag_secs: if lag_secs.is_finite() { lag_secs.max(0.0) } else { 0.0 },
            current: None,
        }
    }

    pub fn current(&self) -> Option<Progress> {
        self.current.map(Progress::new)
    }

    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn is_settled(&self, target: Progress) -> bool {
        self.current.is_some_and(|c| (c - target.get()).abs() <= SNAP)
    }

    /// Move toward `target` by `dt_secs` of elapsed time.
    pub fn advance(&mut self, target: Progress, dt_secs: f64) -> Progress {
        let target_v = target.get();
        let next = match self.current {
            None => target_v,
            Some(_) if self.lag_secs <= 0.0 => target_v,
            Some(c) => {
                let dt = if dt_secs.is_finite() { dt_secs.max(0.0) } else { 0.0 };
                let alpha = 1.0 - (-dt * SETTLE_RATE / self.lag_secs).exp();
                let v = c + (target_v - c) * alpha;
                if (target_v - v).abs() <= SNAP { target_v } else { v }
            }
        };
        self.current = Some(next);
        Progress::new(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smoothing.rs"]
mod tests;
