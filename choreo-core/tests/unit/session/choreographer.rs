use super::*;
use crate::apply::target::RecordingTarget;

fn desktop() -> Viewport {
    Viewport::new(1440.0, 900.0)
}

fn untimed_cards() -> Choreographer {
    let cfg = ChoreographyConfig {
        transitions: None,
        scrub_lag_secs: 0.0,
        ..ChoreographyConfig::cards()
    };
    Choreographer::new(cfg, desktop(), 0.0).unwrap()
}

fn offset(c: &Choreographer, p: f64) -> f64 {
    c.track().offset_for(Progress::new(p))
}

#[test]
fn new_rejects_invalid_config() {
    let cfg = ChoreographyConfig {
        card_count: 0,
        ..ChoreographyConfig::cards()
    };
    assert!(Choreographer::new(cfg, desktop(), 0.0).is_err());
}

#[test]
fn unmounted_target_skips_everything() {
    let mut c = untimed_cards();
    let mut target = RecordingTarget::new();
    target.set_mounted(false);
    assert!(c.tick(Frame::at(offset(&c, 0.5)), &mut target).is_none());
    assert_eq!(c.toggles(), ToggleState::default());
    assert!(c.displayed().is_empty());
}

#[test]
fn gap_event_fires_once_per_crossing() {
    let mut c = untimed_cards();
    let mut target = RecordingTarget::new();
    let mut gap_events = Vec::new();
    for p in [0.1, 0.3, 0.36, 0.4, 0.5, 0.4, 0.36, 0.2, 0.1, 0.2] {
        let report = c.tick(Frame::at(offset(&c, p)), &mut target).unwrap();
        gap_events.extend(
            report
                .events
                .into_iter()
                .filter(|e| e.toggle == ToggleKind::Gap)
                .map(|e| e.crossing),
        );
    }
    assert_eq!(gap_events, [Crossing::Up, Crossing::Down]);
    assert_eq!(target.value(Property::ContainerGap), Some(0.0));
}

#[test]
fn untimed_ticks_commit_settled_state() {
    let mut c = untimed_cards();
    let mut target = RecordingTarget::new();
    c.tick(Frame::at(offset(&c, 0.8)), &mut target).unwrap();
    assert_eq!(target.value(Property::CardRotationY(1)), Some(180.0));
    assert_eq!(target.value(Property::ContainerGap), Some(40.0));
    assert!(!c.is_animating());
}

#[test]
fn repeated_tick_writes_nothing_new() {
    let mut c = untimed_cards();
    let mut target = RecordingTarget::new();
    let at = offset(&c, 0.5);
    let first = c.tick(Frame::at(at), &mut target).unwrap();
    assert!(first.stats.written > 0);
    let second = c.tick(Frame::at(at), &mut target).unwrap();
    assert_eq!(second.stats.written, 0);
    assert!(second.events.is_empty());
}

#[test]
fn first_timed_frame_snaps_then_flip_tweens_with_stagger() {
    let cfg = ChoreographyConfig {
        scrub_lag_secs: 0.0,
        ..ChoreographyConfig::cards()
    };
    let mut c = Choreographer::new(cfg, desktop(), 0.0).unwrap();
    let mut target = RecordingTarget::new();

    // Mounting mid-scroll: already past the gap threshold, no tween.
    let r = c.tick(Frame::timed(offset(&c, 0.5), 0.0), &mut target).unwrap();
    assert_eq!(r.events.len(), 1);
    assert!(!r.animating);
    assert_eq!(target.value(Property::ContainerGap), Some(40.0));

    let r = c.tick(Frame::timed(offset(&c, 0.75), 1.0), &mut target).unwrap();
    assert_eq!(r.events.len(), 1);
    assert!(r.animating);
    assert_eq!(target.value(Property::CardRotationY(0)), Some(0.0));

    // Halfway through card 0's tween; card 2 starts 0.2 s later.
    c.tick(Frame::timed(offset(&c, 0.75), 1.375), &mut target).unwrap();
    let card0 = target.value(Property::CardRotationY(0)).unwrap();
    let card2 = target.value(Property::CardRotationY(2)).unwrap();
    assert!((card0 - 90.0).abs() < 1e-6);
    assert!(card2 < card0);

    let r = c.tick(Frame::timed(offset(&c, 0.75), 3.0), &mut target).unwrap();
    assert!(!r.animating);
    for i in 0..3 {
        assert_eq!(target.value(Property::CardRotationY(i)), Some(180.0));
    }
    assert_eq!(target.value(Property::CardRotationZ(2)), Some(15.0));
}

#[test]
fn reverse_flip_staggers_from_last_card() {
    let cfg = ChoreographyConfig {
        scrub_lag_secs: 0.0,
        ..ChoreographyConfig::cards()
    };
    let mut c = Choreographer::new(cfg, desktop(), 0.0).unwrap();
    let mut target = RecordingTarget::new();
    c.tick(Frame::timed(offset(&c, 0.9), 0.0), &mut target).unwrap();
    c.tick(Frame::timed(offset(&c, 0.6), 10.0), &mut target).unwrap();
    c.tick(Frame::timed(offset(&c, 0.6), 10.1), &mut target).unwrap();
    let card0 = target.value(Property::CardRotationY(0)).unwrap();
    let card2 = target.value(Property::CardRotationY(2)).unwrap();
    assert_eq!(card0, 180.0);
    assert!(card2 < 180.0);
}

#[test]
fn scrub_smoothing_trails_scroll() {
    let mut c = Choreographer::new(ChoreographyConfig::cards(), desktop(), 0.0).unwrap();
    let mut target = RecordingTarget::new();
    c.tick(Frame::timed(0.0, 0.0), &mut target).unwrap();
    let r = c.tick(Frame::timed(offset(&c, 0.2), 0.1), &mut target).unwrap();
    assert!((r.raw_progress.get() - 0.2).abs() < 1e-12);
    assert!(r.progress.get() < 0.2 && r.progress.get() > 0.0);
    assert!(r.animating);
}

#[test]
fn resize_reports_tier_changes_and_rescales_track() {
    let mut c = untimed_cards();
    assert!(!c.resize(Viewport::new(1500.0, 900.0)));
    assert!(c.resize(Viewport::new(1100.0, 900.0)));
    assert_eq!(c.track().distance(), 900.0 * 3.5);
    let mut target = RecordingTarget::new();
    c.tick(Frame::at(0.0), &mut target).unwrap();
    assert_eq!(target.value(Property::ContainerWidth), Some(80.0));
}

#[test]
fn reset_allows_clean_remount() {
    let mut c = untimed_cards();
    let mut target = RecordingTarget::new();
    c.tick(Frame::at(offset(&c, 0.9)), &mut target).unwrap();
    c.reset();
    assert_eq!(c.toggles(), ToggleState::default());
    let mut fresh = RecordingTarget::new();
    let r = c.tick(Frame::at(offset(&c, 0.9)), &mut fresh).unwrap();
    assert_eq!(r.events.len(), 2);
    assert_eq!(fresh.value(Property::CardY(0)), Some(30.0));
}

#[test]
fn cta_fades_in_after_the_flip_and_out_without_delay() {
    let cfg = ChoreographyConfig {
        scrub_lag_secs: 0.0,
        ..ChoreographyConfig::cards()
    };
    let mut c = Choreographer::new(cfg, desktop(), 0.0).unwrap();
    let mut target = RecordingTarget::new();
    c.tick(Frame::timed(offset(&c, 0.5), 0.0), &mut target).unwrap();
    assert_eq!(target.value(Property::CtaOpacity), Some(0.0));

    c.tick(Frame::timed(offset(&c, 0.75), 1.0), &mut target).unwrap();
    c.tick(Frame::timed(offset(&c, 0.75), 1.4), &mut target).unwrap();
    assert_eq!(target.value(Property::CtaOpacity), Some(0.0));
    c.tick(Frame::timed(offset(&c, 0.75), 1.75), &mut target).unwrap();
    let mid = target.value(Property::CtaOpacity).unwrap();
    assert!(mid > 0.0 && mid < 1.0);
    c.tick(Frame::timed(offset(&c, 0.75), 2.0), &mut target).unwrap();
    assert_eq!(target.value(Property::CtaOpacity), Some(1.0));

    c.tick(Frame::timed(offset(&c, 0.5), 5.0), &mut target).unwrap();
    c.tick(Frame::timed(offset(&c, 0.5), 5.25), &mut target).unwrap();
    let leaving = target.value(Property::CtaOpacity).unwrap();
    assert!(leaving > 0.0 && leaving < 1.0);
}
