use super::*;

#[test]
fn nothing_visible_at_start_everything_at_end() {
    let start = word_reveal(0.0, 8);
    assert!(start.iter().all(|w| w.opacity == 0.0 && w.offset_y == 1.0));
    let end = word_reveal(1.0, 8);
    assert!(end.iter().all(|w| w.opacity == 1.0 && w.offset_y == 0.0));
}

#[test]
fn words_reveal_in_index_order() {
    let n = 12;
    let mut first_full = vec![None; n];
    for step in 0..=1200 {
        let t = step as f64 / 1200.0;
        for w in word_reveal(t, n) {
            if w.opacity >= 1.0 && first_full[w.word_index].is_none() {
                first_full[w.word_index] = Some(t);
            }
        }
    }
    let times: Vec<f64> = first_full.into_iter().map(|t| t.unwrap()).collect();
    assert!(times.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn word_is_never_full_before_its_threshold() {
    let n = 10;
    for step in 0..=100 {
        let t = step as f64 / 100.0;
        for w in word_reveal(t, n) {
            if w.opacity >= 1.0 {
                assert!(t + 1e-12 >= w.word_index as f64 / n as f64);
            }
        }
    }
}

#[test]
fn offset_decays_as_opacity_rises() {
    for w in word_reveal(0.37, 9) {
        assert!((w.opacity + w.offset_y - 1.0).abs() < 1e-12);
    }
}

#[test]
fn fully_revealed_counts_boundary_words() {
    assert_eq!(fully_revealed(0.0, 10), 0);
    assert_eq!(fully_revealed(0.2, 10), 2);
    assert_eq!(fully_revealed(0.25, 10), 2);
    assert_eq!(fully_revealed(1.0, 10), 10);
    assert_eq!(fully_revealed(0.5, 0), 0);
}

#[test]
fn into_reuses_buffer() {
    let mut buf = word_reveal(0.5, 20);
    word_reveal_into(0.5, 3, &mut buf);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf[2].word_index, 2);
}
