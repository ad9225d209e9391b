use std::collections::BTreeMap;

use crate::animation::reveal::WordReveal;
use crate::apply::target::RenderTarget;
use crate::eval::state::{AnimationState, Property};
use crate::foundation::math::approx_eq;

/// Write counts for one `apply` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ApplyStats {
    pub written: usize,
    pub skipped: usize,
}

/// Commits animation states to a target, skipping values that did not move.
#[derive(Clone, Debug)]
pub struct Applier {
    epsilon: f64,
    last: BTreeMap<Property, f64>,
    last_words: Vec<WordReveal>,
}

impl Applier {
    /// Values closer than `epsilon` to the last write are skipped.
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.max(0.0),
            last: BTreeMap::new(),
            last_words: Vec::new(),
        }
    }

    /// Forget what was written, so the next `apply` writes everything.
    pub fn reset(&mut self) {
        self.last.clear();
        self.last_words.clear();
    }

    pub fn last_applied(&self, property: Property) -> Option<f64> {
        self.last.get(&property).copied()
    }

    pub fn apply<T: RenderTarget + ?Sized>(
        &mut self,
        state: &AnimationState,
        target: &mut T,
    ) -> ApplyStats {
        let mut stats = ApplyStats::default();
        if !target.is_mounted() {
            return stats;
        }

        for (property, value) in state.iter() {
            let unchanged = self
                .last
                .get(&property)
                .is_some_and(|old| approx_eq(*old, value, self.epsilon));
            if unchanged {
                stats.skipped += 1;
                continue;
            }
            target.write(property, value);
            self.last.insert(property, value);
            stats.written += 1;
        }

        let words = state.words();
        self.last_words.truncate(words.len());
        for (i, word) in words.iter().enumerate() {
            let unchanged = self.last_words.get(i).is_some_and(|old| {
                approx_eq(old.opacity, word.opacity, self.epsilon)
                    && approx_eq(old.offset_y, word.offset_y, self.epsilon)
            });
            if unchanged {
                stats.skipped += 1;
                continue;
            }
            target.write_word(*word);
            if let Some(slot) = self.last_words.get_mut(i) {
                *slot = *word;
            } else {
                self.last_words.push(*word);
            }
            stats.written += 1;
        }

        if stats.written > 0 {
            target.commit();
        }
        tracing::trace!(written = stats.written, skipped = stats.skipped, "applied frame");
        stats
    }
}

impl Default for Applier {
    fn default() -> Self {
        Self::new(1e-3)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/apply/applier.rs"]
mod tests;
