use std::collections::{BTreeMap, BTreeSet};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::animation::reveal::WordReveal;
use crate::apply::target::RenderTarget;
use crate::eval::state::{Corner, Property};

/// CSS selectors locating the animated elements.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DomSelectors {
    /// Pinned section; its top edge is where progress starts.
    pub section: String,
    pub hero: Option<String>,
    pub header: String,
    pub container: String,
    /// Matches every card, in document order.
    pub cards: String,
    /// Matches every reveal word, in document order.
    pub words: Option<String>,
    /// Call-to-action faded in after the flip.
    pub cta: Option<String>,
    pub overlay: Option<String>,
}

impl Default for DomSelectors {
    fn default() -> Self {
        Self {
            section: "#projects".to_owned(),
            hero: Some("#home".to_owned()),
            header: "#projects h2".to_owned(),
            container: "#projects .project-strip".to_owned(),
            cards: "#projects .project-card".to_owned(),
            words: Some("#projects .reveal-word".to_owned()),
            cta: Some("#projects .project-cta".to_owned()),
            overlay: Some("#mobile-block".to_owned()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Hero,
    Header,
    Container,
    Card(usize),
    Cta,
}

fn slot_of(property: Property) -> Slot {
    match property {
        Property::HeroOpacity => Slot::Hero,
        Property::HeaderOpacity | Property::HeaderY => Slot::Header,
        Property::ContainerWidth | Property::ContainerGap => Slot::Container,
        Property::CardOpacity(i)
        | Property::CardRotationY(i)
        | Property::CardRotationZ(i)
        | Property::CardY(i)
        | Property::CardRadius(i, _) => Slot::Card(i),
        Property::CtaOpacity => Slot::Cta,
    }
}

pub(crate) fn query_html(doc: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(doc
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn query_all_html(doc: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub(crate) fn set_style(el: &HtmlElement, name: &str, value: &str) {
    if let Err(err) = el.style().set_property(name, value) {
        tracing::warn!(property = name, error = ?err, "style write failed");
    }
}

pub(crate) fn clear_style(el: &HtmlElement, name: &str) {
    if let Err(err) = el.style().remove_property(name) {
        tracing::warn!(property = name, error = ?err, "style removal failed");
    }
}

/// Writes CSS onto live DOM elements.
///
/// Property writes are buffered per element and flushed on `commit`, so each
/// card gets a single composed `transform`.
pub struct DomTarget {
    hero: Option<HtmlElement>,
    header: HtmlElement,
    container: HtmlElement,
    cards: Vec<HtmlElement>,
    words: Vec<HtmlElement>,
    cta: Option<HtmlElement>,
    word_offset_px: f64,
    values: BTreeMap<Property, f64>,
    dirty: BTreeSet<Slot>,
}

impl DomTarget {
    /// Locate elements. `Ok(None)` when the header or container is absent.
    pub fn from_document(
        doc: &Document,
        selectors: &DomSelectors,
        word_offset_px: f64,
    ) -> Result<Option<Self>, JsValue> {
        let Some(header) = query_html(doc, &selectors.header)? else {
            return Ok(None);
        };
        let Some(container) = query_html(doc, &selectors.container)? else {
            return Ok(None);
        };
        let hero = match &selectors.hero {
            Some(sel) => query_html(doc, sel)?,
            None => None,
        };
        let words = match &selectors.words {
            Some(sel) => query_all_html(doc, sel)?,
            None => Vec::new(),
        };
        let cta = match &selectors.cta {
            Some(sel) => query_html(doc, sel)?,
            None => None,
        };
        Ok(Some(Self {
            hero,
            header,
            container,
            cards: query_all_html(doc, &selectors.cards)?,
            words,
            cta,
            word_offset_px,
            values: BTreeMap::new(),
            dirty: BTreeSet::new(),
        }))
    }

    fn value(&self, property: Property) -> Option<f64> {
        self.values.get(&property).copied()
    }

    fn flush(&self, slot: Slot) {
        match slot {
            Slot::Hero => {
                if let (Some(el), Some(o)) = (&self.hero, self.value(Property::HeroOpacity)) {
                    set_style(el, "opacity", &o.to_string());
                }
            }
            Slot::Header => {
                if let Some(o) = self.value(Property::HeaderOpacity) {
                    set_style(&self.header, "opacity", &o.to_string());
                }
                if let Some(y) = self.value(Property::HeaderY) {
                    set_style(&self.header, "transform", &format!("translateY({y}px)"));
                }
            }
            Slot::Container => {
                if let Some(w) = self.value(Property::ContainerWidth) {
                    set_style(&self.container, "width", &format!("{w}%"));
                }
                if let Some(g) = self.value(Property::ContainerGap) {
                    set_style(&self.container, "gap", &format!("{g}px"));
                }
            }
            Slot::Cta => {
                if let (Some(el), Some(o)) = (&self.cta, self.value(Property::CtaOpacity)) {
                    set_style(el, "opacity", &o.to_string());
                }
            }
            Slot::Card(i) => {
                let Some(el) = self.cards.get(i) else {
                    return;
                };
                if let Some(o) = self.value(Property::CardOpacity(i)) {
                    set_style(el, "opacity", &o.to_string());
                }
                let y = self.value(Property::CardY(i)).unwrap_or(0.0);
                let ry = self.value(Property::CardRotationY(i)).unwrap_or(0.0);
                let rz = self.value(Property::CardRotationZ(i)).unwrap_or(0.0);
                set_style(
                    el,
                    "transform",
                    &format!("translateY({y}px) rotateY({ry}deg) rotateZ({rz}deg)"),
                );
                let radii = Corner::ALL.map(|c| self.value(Property::CardRadius(i, c)).unwrap_or(0.0));
                set_style(
                    el,
                    "border-radius",
                    &format!("{}px {}px {}px {}px", radii[0], radii[1], radii[2], radii[3]),
                );
            }
        }
    }
}

impl RenderTarget for DomTarget {
    fn is_mounted(&self) -> bool {
        self.header.is_connected() && self.container.is_connected()
    }

    fn write(&mut self, property: Property, value: f64) {
        self.values.insert(property, value);
        self.dirty.insert(slot_of(property));
    }

    fn write_word(&mut self, word: WordReveal) {
        let Some(el) = self.words.get(word.word_index) else {
            return;
        };
        set_style(el, "opacity", &word.opacity.to_string());
        let y = word.offset_y * self.word_offset_px;
        set_style(el, "transform", &format!("translateY({y}px)"));
    }

    fn commit(&mut self) {
        for slot in std::mem::take(&mut self.dirty) {
            self.flush(slot);
        }
    }
}
