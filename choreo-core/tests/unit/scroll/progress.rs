use super::*;
use crate::config::breakpoint::BreakpointTable;
use crate::foundation::core::Viewport;

fn resolved(w: f64, h: f64) -> ResolvedViewport {
    BreakpointTable::default().resolve(Viewport::new(w, h))
}

#[test]
fn progress_is_clamped_linear_over_distance() {
    let track = ScrollTrack::new(1000.0, &resolved(1440.0, 900.0));
    assert_eq!(track.distance(), 3600.0);
    assert_eq!(track.progress(0.0), Progress::START);
    assert_eq!(track.progress(1000.0), Progress::START);
    assert_eq!(track.progress(1900.0).get(), 0.25);
    assert_eq!(track.progress(4600.0), Progress::END);
    assert_eq!(track.progress(99_999.0), Progress::END);
}

#[test]
fn resize_changes_distance() {
    let mut track = ScrollTrack::new(0.0, &resolved(1440.0, 900.0));
    let before = track.progress(900.0);
    track.resize(&resolved(1100.0, 800.0));
    assert_eq!(track.distance(), 800.0 * 3.5);
    assert_ne!(track.progress(900.0), before);
}

#[test]
fn degenerate_distance_steps_at_start() {
    let track = ScrollTrack::new(200.0, &resolved(1440.0, 0.0));
    assert_eq!(track.progress(199.0), Progress::START);
    assert_eq!(track.progress(200.0), Progress::END);
}

#[test]
fn non_finite_scroll_is_start() {
    let track = ScrollTrack::new(0.0, &resolved(1440.0, 900.0));
    assert_eq!(track.progress(f64::NAN), Progress::START);
    assert_eq!(track.progress(f64::INFINITY), Progress::START);
}

#[test]
fn offset_for_inverts_progress() {
    let track = ScrollTrack::new(500.0, &resolved(1440.0, 900.0));
    for p in [0.0, 0.1, 0.35, 0.7, 1.0] {
        let offset = track.offset_for(Progress::new(p));
        assert!((track.progress(offset).get() - p).abs() < 1e-12);
    }
    assert_eq!(track.end_offset(), 4100.0);
}
