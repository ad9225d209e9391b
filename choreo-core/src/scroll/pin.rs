use crate::foundation::core::Progress;
use crate::scroll::progress::ScrollTrack;

/// Where a pinned section sits relative to the spacer reserving its scroll distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PinPhase {
    /// Still in flow at the top of the spacer.
    Before,
    /// Held at the viewport top while progress runs.
    Pinned,
    /// Parked at the bottom of the spacer once the region is done.
    After,
}

impl PinPhase {
    /// Pinned strictly inside the region; the ends leave the section in the document flow.
    pub fn for_progress(p: Progress) -> Self {
        let v = p.get();
        if v <= 0.0 {
            Self::Before
        } else if v >= 1.0 {
            Self::After
        } else {
            Self::Pinned
        }
    }
}

/// Spacer height that keeps the page scrollable through the whole region:
/// the pinned element's own height plus the track distance.
pub fn spacer_height(track: &ScrollTrack, pinned_height: f64) -> f64 {
    track.distance().max(0.0) + pinned_height.max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/pin.rs"]
mod tests;
