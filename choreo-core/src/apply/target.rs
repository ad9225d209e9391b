use std::collections::BTreeMap;

use crate::animation::reveal::WordReveal;
use crate::eval::state::Property;

/// Receiver for committed property values.
///
/// Call order within one frame: any number of `write` / `write_word`, then
/// `commit` once if anything was written.
pub trait RenderTarget {
    /// Whether the underlying elements exist. Unmounted targets receive nothing.
    fn is_mounted(&self) -> bool {
        true
    }
    /// Set one property.
    fn write(&mut self, property: Property, value: f64);
    /// Set one word's reveal values.
    fn write_word(&mut self, _word: WordReveal) {}
    /// Flush buffered writes for this frame.
    fn commit(&mut self) {}
}

/// In-memory target for tests and debugging.
#[derive(Debug, Clone)]
pub struct RecordingTarget {
    mounted: bool,
    values: BTreeMap<Property, f64>,
    words: BTreeMap<usize, WordReveal>,
    /// Total `write` + `write_word` calls received.
    pub writes: usize,
    /// Total `commit` calls received.
    pub commits: usize,
}

impl Default for RecordingTarget {
    fn default() -> Self {
        Self {
            mounted: true,
            values: BTreeMap::new(),
            words: BTreeMap::new(),
            writes: 0,
            commits: 0,
        }
    }
}

impl RecordingTarget {
    /// Empty, mounted target.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }

    pub fn value(&self, property: Property) -> Option<f64> {
        self.values.get(&property).copied()
    }

    pub fn word(&self, index: usize) -> Option<WordReveal> {
        self.words.get(&index).copied()
    }

    pub fn values(&self) -> &BTreeMap<Property, f64> {
        &self.values
    }
}

impl RenderTarget for RecordingTarget {
    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn write(&mut self, property: Property, value: f64) {
        self.values.insert(property, value);
        self.writes += 1;
    }

    fn write_word(&mut self, word: WordReveal) {
        self.words.insert(word.word_index, word);
        self.writes += 1;
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}
