use super::*;

#[test]
fn holds_from_before_start_then_reaches_target() {
    let t = Transition::new(0.0, 180.0, 1.0, 0.75, Ease::InOutQuart);
    assert_eq!(t.value_at(0.5), 0.0);
    assert_eq!(t.value_at(1.0), 0.0);
    assert!((t.value_at(1.375) - 90.0).abs() < 1e-9);
    assert_eq!(t.value_at(1.75), 180.0);
    assert_eq!(t.value_at(5.0), 180.0);
    assert!(!t.is_finished(1.7));
    assert!(t.is_finished(1.75));
}

#[test]
fn zero_duration_snaps() {
    let t = Transition::new(0.0, 40.0, 2.0, 0.0, Ease::OutQuart);
    assert_eq!(t.value_at(1.9), 0.0);
    assert_eq!(t.value_at(2.0), 40.0);
    assert!(t.is_finished(2.0));
}

#[test]
fn stagger_reverses_on_the_way_back() {
    let timing = TransitionTiming {
        duration_secs: 0.75,
        stagger_secs: 0.1,
        delay_secs: 0.0,
        ease: Ease::InOutQuart,
    };
    assert_eq!(timing.delay_for(0, 3, false), 0.0);
    assert!((timing.delay_for(2, 3, false) - 0.2).abs() < 1e-12);
    assert!((timing.delay_for(0, 3, true) - 0.2).abs() < 1e-12);
    assert_eq!(timing.delay_for(2, 3, true), 0.0);
}

#[test]
fn lead_in_applies_only_on_the_way_up() {
    let timing = TransitionTiming {
        duration_secs: 0.5,
        stagger_secs: 0.0,
        delay_secs: 0.5,
        ease: Ease::OutCubic,
    };
    assert_eq!(timing.delay_for(0, 1, false), 0.5);
    assert_eq!(timing.delay_for(0, 1, true), 0.0);
}

#[test]
fn timing_fields_default_when_omitted() {
    let timing: TransitionTiming = serde_json::from_str(r#"{"duration_secs":0.25}"#).unwrap();
    assert_eq!(timing.stagger_secs, 0.0);
    assert_eq!(timing.delay_secs, 0.0);
    assert_eq!(timing.ease, Ease::Linear);
}
