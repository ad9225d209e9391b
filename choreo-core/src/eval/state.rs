use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::animation::reveal::WordReveal;
use crate::animation::toggle::ToggleKind;

/// Card corner, clockwise from top-left (CSS `border-radius` order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Clockwise from top-left.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::BottomRight => "bottomRight",
            Self::BottomLeft => "bottomLeft",
        }
    }
}

/// Animated property of a render target. Card variants carry the card index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    HeroOpacity,
    HeaderOpacity,
    /// Header translate-Y in px.
    HeaderY,
    /// Container width in percent.
    ContainerWidth,
    /// Container gap in px.
    ContainerGap,
    CardOpacity(usize),
    /// Degrees.
    CardRotationY(usize),
    /// Degrees.
    CardRotationZ(usize),
    /// Card translate-Y in px.
    CardY(usize),
    /// Corner radius in px.
    CardRadius(usize, Corner),
    /// Call-to-action shown once the cards have flipped.
    CtaOpacity,
}

impl Property {
    /// The toggle whose discrete states drive this property, if any.
    pub fn toggle(self) -> Option<ToggleKind> {
        match self {
            Self::ContainerGap | Self::CardRadius(..) => Some(ToggleKind::Gap),
            Self::CardRotationY(_) | Self::CardRotationZ(_) | Self::CardY(_) | Self::CtaOpacity => {
                Some(ToggleKind::Flip)
            }
            _ => None,
        }
    }

    pub fn card_index(self) -> Option<usize> {
        match self {
            Self::CardOpacity(i)
            | Self::CardRotationY(i)
            | Self::CardRotationZ(i)
            | Self::CardY(i)
            | Self::CardRadius(i, _) => Some(i),
            _ => None,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeroOpacity => f.write_str("heroOpacity"),
            Self::HeaderOpacity => f.write_str("headerOpacity"),
            Self::HeaderY => f.write_str("headerY"),
            Self::ContainerWidth => f.write_str("containerWidth"),
            Self::ContainerGap => f.write_str("containerGap"),
            Self::CardOpacity(i) => write!(f, "card.{i}.opacity"),
            Self::CardRotationY(i) => write!(f, "card.{i}.rotationY"),
            Self::CardRotationZ(i) => write!(f, "card.{i}.rotationZ"),
            Self::CardY(i) => write!(f, "card.{i}.y"),
            Self::CardRadius(i, c) => write!(f, "card.{i}.radius.{}", c.name()),
            Self::CtaOpacity => f.write_str("ctaOpacity"),
        }
    }
}

/// Property values for one frame.
///
/// Rebuilt from progress on every tick; nothing carries over between frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    values: BTreeMap<Property, f64>,
    words: Vec<WordReveal>,
}

impl AnimationState {
    /// Empty state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: Property) -> Option<f64> {
        self.values.get(&property).copied()
    }

    pub fn set(&mut self, property: Property, value: f64) {
        self.values.insert(property, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Number of numeric properties; words are counted by [`Self::words`].
    pub fn property_count(&self) -> usize {
        self.values.len()
    }

    /// No properties and no words.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.words.is_empty()
    }

    pub fn words(&self) -> &[WordReveal] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> &mut Vec<WordReveal> {
        &mut self.words
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.words.clear();
    }
}

impl Serialize for AnimationState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let properties: BTreeMap<String, f64> =
            self.values.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        let mut s = serializer.serialize_struct("AnimationState", 2)?;
        s.serialize_field("properties", &properties)?;
        s.serialize_field("words", &self.words)?;
        s.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/state.rs"]
mod tests;
