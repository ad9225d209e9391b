use crate::foundation::math::clamp01;

/// Per-word reveal values.
///
/// `offset_y` is normalized: `1` is fully displaced, `0` at rest. Render
/// targets scale it by their configured pixel amplitude.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordReveal {
    pub word_index: usize,
    pub opacity: f64,
    pub offset_y: f64,
}

/// Reveal state for `total_words` words at local progress `local_t`.
pub fn word_reveal(local_t: f64, total_words: usize) -> Vec<WordReveal> {
    let mut out = Vec::with_capacity(total_words);
    word_reveal_into(local_t, total_words, &mut out);
    out
}

/// Like [`word_reveal`], reusing `out`'s allocation.
///
/// Word `i` starts revealing at `i / N` of the local window and is fully
/// visible at `(i + 1) / N`, so word 0 leads and word `N - 1` finishes last.
pub fn word_reveal_into(local_t: f64, total_words: usize, out: &mut Vec<WordReveal>) {
    out.clear();
    let local_t = clamp01(local_t);
    let n = total_words as f64;
    out.extend((0..total_words).map(|i| {
        let t = clamp01(local_t * n - i as f64);
        WordReveal {
            word_index: i,
            opacity: t,
            offset_y: 1.0 - t,
        }
    }));
}

/// Number of words at full opacity for `local_t`.
pub fn fully_revealed(local_t: f64, total_words: usize) -> usize {
    let n = total_words as f64;
    // Small slack so `0.2 * 10` style products land on the boundary.
    let count = (clamp01(local_t) * n + 1e-9).floor();
    (count as usize).min(total_words)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
