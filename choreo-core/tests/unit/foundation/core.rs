use super::*;

#[test]
fn progress_clamps_out_of_range_input() {
    assert_eq!(Progress::new(-0.5).get(), 0.0);
    assert_eq!(Progress::new(1.5).get(), 1.0);
    assert_eq!(Progress::new(f64::NAN).get(), 0.0);
    assert_eq!(Progress::new(0.42).get(), 0.42);
}

#[test]
fn progress_deserialize_clamps() {
    let p: Progress = serde_json::from_str("3.0").unwrap();
    assert_eq!(p, Progress::END);
    assert_eq!(serde_json::to_string(&Progress::new(0.5)).unwrap(), "0.5");
}

#[test]
fn window_rejects_inverted_or_empty_bounds() {
    assert!(Window::new(0.3, 0.1).is_err());
    assert!(Window::new(0.3, 0.3).is_err());
    assert!(Window::new(-0.1, 0.3).is_err());
    assert!(Window::new(0.2, 1.1).is_err());
    assert!(Window::new(0.0, f64::INFINITY).is_err());
    assert!(Window::new(0.1, 0.25).is_ok());
}

#[test]
fn window_local_is_clamped_linear_remap() {
    let w = Window::new(0.1, 0.3).unwrap();
    assert_eq!(w.local(Progress::new(0.0)), 0.0);
    assert_eq!(w.local(Progress::new(0.1)), 0.0);
    assert!((w.local(Progress::new(0.2)) - 0.5).abs() < 1e-12);
    assert_eq!(w.local(Progress::new(0.3)), 1.0);
    assert_eq!(w.local(Progress::new(0.9)), 1.0);
}

#[test]
fn degenerate_window_steps_at_start() {
    let w = Window {
        start: 0.4,
        end: 0.4,
    };
    assert_eq!(w.local(Progress::new(0.39)), 0.0);
    assert_eq!(w.local(Progress::new(0.4)), 1.0);
}
