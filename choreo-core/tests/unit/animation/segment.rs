use super::*;

#[test]
fn new_validates_window() {
    assert!(Segment::new("hero-fade", 0.0, 0.15, Ease::Linear).is_ok());
    assert!(Segment::new("hero-fade", 0.15, 0.0, Ease::Linear).is_err());
    assert!(Segment::new("  ", 0.0, 0.15, Ease::Linear).is_err());
}

#[test]
fn validation_error_names_the_segment() {
    let err = Segment::new("width-shrink", 0.5, 0.2, Ease::Linear).unwrap_err();
    assert!(err.to_string().contains("width-shrink"));
}

#[test]
fn sample_interpolates_inside_window_and_holds_outside() {
    let seg = Segment::new("width-shrink", 0.0, 0.25, Ease::Linear).unwrap();
    let width = Tween::new(75.0, 60.0);
    assert_eq!(seg.sample(&width, Progress::new(0.0)), 75.0);
    assert!((seg.sample(&width, Progress::new(0.125)) - 67.5).abs() < 1e-9);
    assert_eq!(seg.sample(&width, Progress::new(0.25)), 60.0);
    assert_eq!(seg.sample(&width, Progress::new(0.8)), 60.0);
}

#[test]
fn eased_segment_keeps_endpoints() {
    let seg = Segment::new("header-reveal", 0.1, 0.25, Ease::OutCubic).unwrap();
    assert_eq!(seg.local_t(Progress::new(0.1)), 0.0);
    assert_eq!(seg.local_t(Progress::new(0.25)), 1.0);
    assert!(seg.local_t(Progress::new(0.175)) > 0.5);
}

#[test]
fn tween_contains_either_orientation() {
    let down = Tween::new(1.0, 0.0);
    assert!(down.contains(0.3, 0.0));
    assert!(!down.contains(1.2, 1e-9));
    let up = Tween::new(0.0, 40.0);
    assert!(up.contains(40.0, 0.0));
    assert!(!up.contains(-0.5, 1e-9));
}

#[test]
fn ease_defaults_to_linear_when_omitted() {
    let seg: Segment =
        serde_json::from_str(r#"{ "name": "outro", "window": { "start": 0.8, "end": 0.95 } }"#)
            .unwrap();
    assert_eq!(seg.ease, Ease::Linear);
}
