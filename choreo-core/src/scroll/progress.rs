use crate::config::breakpoint::ResolvedViewport;
use crate::foundation::core::Progress;

/// Maps a document scroll offset to progress through the pinned region.
///
/// The region starts at `start_offset` (the section's top reaching the
/// viewport top) and spans `viewport height x multiplier` pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollTrack {
    start_offset: f64,
    distance: f64,
}

impl ScrollTrack {
    /// Track starting at `start_offset`, sized from the resolved tier.
    pub fn new(start_offset: f64, viewport: &ResolvedViewport) -> Self {
        Self {
            start_offset,
            distance: distance_for(viewport),
        }
    }

    /// Recompute the scroll distance for a new viewport.
    pub fn resize(&mut self, viewport: &ResolvedViewport) {
        self.distance = distance_for(viewport);
    }

    pub fn set_start_offset(&mut self, start_offset: f64) {
        self.start_offset = start_offset;
    }

    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn end_offset(&self) -> f64 {
        self.start_offset + self.distance
    }

    /// `clamp((scroll_offset - start) / distance, 0, 1)`.
    pub fn progress(&self, scroll_offset: f64) -> Progress {
        if !scroll_offset.is_finite() || !self.start_offset.is_finite() {
            return Progress::START;
        }
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return if scroll_offset >= self.start_offset {
                Progress::END
            } else {
                Progress::START
            };
        }
        Progress::new((scroll_offset - self.start_offset) / self.distance)
    }

    /// Scroll offset at which the track reports `p`.
    pub fn offset_for(&self, p: Progress) -> f64 {
        self.start_offset + p.get() * self.distance.max(0.0)
    }
}

fn distance_for(viewport: &ResolvedViewport) -> f64 {
    viewport.viewport.height.max(0.0) * viewport.scroll_multiplier
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;
