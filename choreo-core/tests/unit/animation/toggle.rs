use super::*;

fn p(v: f64) -> Progress {
    Progress::new(v)
}

#[test]
fn cross_fires_once_per_direction() {
    let mut engaged = false;
    assert_eq!(cross(&mut engaged, 0.35, p(0.2)), None);
    assert_eq!(cross(&mut engaged, 0.35, p(0.35)), Some(Crossing::Up));
    assert_eq!(cross(&mut engaged, 0.35, p(0.4)), None);
    assert_eq!(cross(&mut engaged, 0.35, p(0.9)), None);
    assert_eq!(cross(&mut engaged, 0.35, p(0.34)), Some(Crossing::Down));
    assert_eq!(cross(&mut engaged, 0.35, p(0.1)), None);
    assert!(!engaged);
}

#[test]
fn repeated_ticks_on_same_side_are_idempotent() {
    let mut state = ToggleState::default();
    let first = state.update(p(0.5), 0.35, 0.7);
    assert_eq!(first.len(), 1);
    for _ in 0..10 {
        assert!(state.update(p(0.5), 0.35, 0.7).is_empty());
    }
    assert!(state.gap_engaged);
    assert!(!state.flip_engaged);
}

#[test]
fn big_jump_reports_both_in_mirrored_order() {
    let mut state = ToggleState::default();
    let up = state.update(p(1.0), 0.35, 0.7);
    assert_eq!(
        up,
        vec![
            ToggleEvent {
                toggle: ToggleKind::Gap,
                crossing: Crossing::Up
            },
            ToggleEvent {
                toggle: ToggleKind::Flip,
                crossing: Crossing::Up
            },
        ]
    );

    let down = state.update(p(0.0), 0.35, 0.7);
    assert_eq!(
        down,
        vec![
            ToggleEvent {
                toggle: ToggleKind::Flip,
                crossing: Crossing::Down
            },
            ToggleEvent {
                toggle: ToggleKind::Gap,
                crossing: Crossing::Down
            },
        ]
    );
    assert_eq!(state, ToggleState::default());
}

#[test]
fn is_engaged_reads_matching_flag() {
    let state = ToggleState {
        gap_engaged: true,
        flip_engaged: false,
    };
    assert!(state.is_engaged(ToggleKind::Gap));
    assert!(!state.is_engaged(ToggleKind::Flip));
}

#[test]
fn crossing_order_follows_threshold_values() {
    let mut state = ToggleState::default();
    let up = state.update(p(1.0), 0.7, 0.3);
    let kinds: Vec<_> = up.iter().map(|e| (e.toggle, e.crossing)).collect();
    assert_eq!(
        kinds,
        vec![
            (ToggleKind::Flip, Crossing::Up),
            (ToggleKind::Gap, Crossing::Up)
        ]
    );

    let down = state.update(p(0.0), 0.7, 0.3);
    let kinds: Vec<_> = down.iter().map(|e| (e.toggle, e.crossing)).collect();
    assert_eq!(
        kinds,
        vec![
            (ToggleKind::Gap, Crossing::Down),
            (ToggleKind::Flip, Crossing::Down)
        ]
    );
    assert_eq!(state, ToggleState::default());
}

#[test]
fn equal_thresholds_report_gap_first_going_up() {
    let mut state = ToggleState::default();
    let up = state.update(p(0.5), 0.4, 0.4);
    assert_eq!(up[0].toggle, ToggleKind::Gap);
    let down = state.update(p(0.1), 0.4, 0.4);
    assert_eq!(down[0].toggle, ToggleKind::Flip);
}
