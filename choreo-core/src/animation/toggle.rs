use crate::foundation::core::Progress;

/// Which discrete switch crossed its threshold.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ToggleKind {
    /// Container gap and card corner radius: flat strip vs spaced rounded cards.
    Gap,
    /// Card 3D flip with edge-card fan-out.
    Flip,
}

/// Direction of a threshold crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossing {
    Up,
    Down,
}

/// Emitted once per threshold crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleEvent {
    pub toggle: ToggleKind,
    pub crossing: Crossing,
}

/// Edge-detect a single threshold. Engaged means `p >= threshold`.
///
/// Returns `Some` only when `engaged` flips; repeated calls on the same side
/// leave it untouched and return `None`.
pub fn cross(engaged: &mut bool, threshold: f64, p: Progress) -> Option<Crossing> {
    let past = p.get() >= threshold;
    match (past, *engaged) {
        (true, false) => {
            *engaged = true;
            Some(Crossing::Up)
        }
        (false, true) => {
            *engaged = false;
            Some(Crossing::Down)
        }
        _ => None,
    }
}

/// "Has this threshold already fired" flags for every toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleState {
    pub gap_engaged: bool,
    pub flip_engaged: bool,
}

impl ToggleState {
    /// Whether progress is currently past `kind`'s threshold.
    pub fn is_engaged(&self, kind: ToggleKind) -> bool {
        match kind {
            ToggleKind::Gap => self.gap_engaged,
            ToggleKind::Flip => self.flip_engaged,
        }
    }

    fn engaged_mut(&mut self, kind: ToggleKind) -> &mut bool {
        match kind {
            ToggleKind::Gap => &mut self.gap_engaged,
            ToggleKind::Flip => &mut self.flip_engaged,
        }
    }

    /// Advance both toggles to `p` and collect the crossings this caused.
    ///
    /// Upward jumps report the lower threshold first and downward jumps the
    /// higher one first, whichever toggle owns it. Equal thresholds report the
    /// gap first going up.
    pub fn update(&mut self, p: Progress, gap_threshold: f64, flip_threshold: f64) -> Vec<ToggleEvent> {
        let mut order = [
            (ToggleKind::Gap, gap_threshold),
            (ToggleKind::Flip, flip_threshold),
        ];
        if flip_threshold < gap_threshold {
            order.swap(0, 1);
        }
        let descending = order
            .iter()
            .any(|&(kind, threshold)| self.is_engaged(kind) && p.get() < threshold);
        if descending {
            order.reverse();
        }

        let mut events = Vec::new();
        for (kind, threshold) in order {
            if let Some(crossing) = cross(self.engaged_mut(kind), threshold, p) {
                tracing::debug!(?kind, ?crossing, progress = p.get(), "threshold crossed");
                events.push(ToggleEvent {
                    toggle: kind,
                    crossing,
                });
            }
        }
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/toggle.rs"]
mod tests;
