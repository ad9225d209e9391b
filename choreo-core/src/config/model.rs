use std::path::Path;
use std::str::FromStr;

use anyhow::Context as _;

use crate::animation::ease::Ease;
use crate::animation::segment::Segment;
use crate::animation::transition::TransitionTiming;
use crate::config::breakpoint::BreakpointTable;
use crate::foundation::core::Window;
use crate::foundation::error::{ChoreoError, ChoreoResult};

/// Flip targets reached once the flip threshold is crossed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlipSettings {
    /// Y rotation of every card when flipped.
    pub rotation_deg: f64,
    /// Z tilt of the outermost cards (left negative, right positive).
    pub edge_tilt_deg: f64,
    /// Downward offset of the outermost cards.
    pub edge_drop_px: f64,
}

impl Default for FlipSettings {
    fn default() -> Self {
        Self {
            rotation_deg: 180.0,
            edge_tilt_deg: 15.0,
            edge_drop_px: 30.0,
        }
    }
}

/// Tail-window per-word text reveal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextReveal {
    pub segment: Segment,
    pub text: String,
    #[serde(default = "default_word_offset_px")]
    pub word_offset_px: f64,
}

fn default_word_offset_px() -> f64 {
    20.0
}

impl TextReveal {
    /// Whitespace-separated words, in reveal order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Number of revealed words.
    pub fn word_count(&self) -> usize {
        self.words().count()
    }
}

/// Timings for the clock-driven transitions started by each toggle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionSettings {
    pub gap: TransitionTiming,
    pub flip: TransitionTiming,
    /// Call-to-action fade; follows the flip toggle.
    #[serde(default = "default_cta_timing")]
    pub cta: TransitionTiming,
}

fn default_cta_timing() -> TransitionTiming {
    TransitionTiming {
        duration_secs: 0.5,
        stagger_secs: 0.0,
        delay_secs: 0.5,
        ease: Ease::OutCubic,
    }
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            gap: TransitionTiming {
                duration_secs: 0.5,
                stagger_secs: 0.0,
                delay_secs: 0.0,
                ease: Ease::OutQuart,
            },
            flip: TransitionTiming {
                duration_secs: 0.75,
                stagger_secs: 0.1,
                delay_secs: 0.0,
                ease: Ease::InOutQuart,
            },
            cta: default_cta_timing(),
        }
    }
}

/// Full description of one scroll-choreographed section.
///
/// Partial JSON documents are completed from [`ChoreographyConfig::default`],
/// which is the [`Preset::Cards`] choreography.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChoreographyConfig {
    pub hero_fade: Option<Segment>,
    pub header_reveal: Segment,
    pub header_offset_px: f64,
    pub width_shrink: Segment,
    pub gap_threshold: f64,
    pub gap_px: f64,
    pub corner_radius_px: f64,
    pub flip_threshold: f64,
    pub flip: FlipSettings,
    pub outro: Option<Segment>,
    pub text_reveal: Option<TextReveal>,
    pub card_count: usize,
    pub breakpoints: BreakpointTable,
    /// `None` snaps toggled properties instead of tweening them over time.
    pub transitions: Option<TransitionSettings>,
    /// Progress smoothing lag; `0` follows scroll directly.
    pub scrub_lag_secs: f64,
    /// Applier write threshold.
    pub epsilon: f64,
}

impl Default for ChoreographyConfig {
    fn default() -> Self {
        Self::cards()
    }
}

fn seg(name: &str, start: f64, end: f64, ease: Ease) -> Segment {
    Segment {
        name: name.to_owned(),
        window: Window { start, end },
        ease,
    }
}

impl ChoreographyConfig {
    /// Pinned card strip: header reveal, width shrink, gap toggle, flip.
    pub fn cards() -> Self {
        Self {
            hero_fade: None,
            header_reveal: seg("header-reveal", 0.10, 0.25, Ease::Linear),
            header_offset_px: 40.0,
            width_shrink: seg("width-shrink", 0.0, 0.25, Ease::Linear),
            gap_threshold: 0.35,
            gap_px: 40.0,
            corner_radius_px: 20.0,
            flip_threshold: 0.70,
            flip: FlipSettings::default(),
            outro: None,
            text_reveal: None,
            card_count: 3,
            breakpoints: BreakpointTable::default(),
            transitions: Some(TransitionSettings::default()),
            scrub_lag_secs: 1.0,
            epsilon: 1e-3,
        }
    }

    /// Hero hand-off into the card strip, ending on a fade-out and word reveal.
    pub fn showcase() -> Self {
        Self {
            hero_fade: Some(seg("hero-fade", 0.0, 0.15, Ease::Linear)),
            header_reveal: seg("header-reveal", 0.15, 0.30, Ease::Linear),
            width_shrink: seg("width-shrink", 0.10, 0.30, Ease::Linear),
            flip_threshold: 0.55,
            outro: Some(seg("outro", 0.80, 0.95, Ease::Linear)),
            text_reveal: Some(TextReveal {
                segment: seg("text-reveal", 0.875, 1.0, Ease::Linear),
                text: "Every one of these started as a weekend idea and is now used by thousands of people every single day"
                    .to_owned(),
                word_offset_px: default_word_offset_px(),
            }),
            ..Self::cards()
        }
    }

    /// Check windows, thresholds, counts and timings.
    pub fn validate(&self) -> ChoreoResult<()> {
        if let Some(s) = &self.hero_fade {
            s.validate()?;
        }
        self.header_reveal.validate()?;
        self.width_shrink.validate()?;
        if let Some(s) = &self.outro {
            s.validate()?;
        }
        if let Some(reveal) = &self.text_reveal {
            reveal.segment.validate()?;
            non_negative("text_reveal.word_offset_px", reveal.word_offset_px)?;
        }

        threshold("gap_threshold", self.gap_threshold)?;
        threshold("flip_threshold", self.flip_threshold)?;
        non_negative("header_offset_px", self.header_offset_px)?;
        non_negative("gap_px", self.gap_px)?;
        non_negative("corner_radius_px", self.corner_radius_px)?;
        non_negative("scrub_lag_secs", self.scrub_lag_secs)?;
        non_negative("epsilon", self.epsilon)?;
        if !self.flip.rotation_deg.is_finite()
            || !self.flip.edge_tilt_deg.is_finite()
            || !self.flip.edge_drop_px.is_finite()
        {
            return Err(ChoreoError::validation("flip settings must be finite"));
        }
        if self.card_count == 0 {
            return Err(ChoreoError::validation("card_count must be >= 1"));
        }
        if let Some(t) = &self.transitions {
            for (name, timing) in [("gap", &t.gap), ("flip", &t.flip), ("cta", &t.cta)] {
                non_negative(&format!("transitions.{name}.duration_secs"), timing.duration_secs)?;
                non_negative(&format!("transitions.{name}.stagger_secs"), timing.stagger_secs)?;
                non_negative(&format!("transitions.{name}.delay_secs"), timing.delay_secs)?;
            }
        }
        self.breakpoints.validate()
    }

    /// Every progress-window segment, in evaluation order.
    pub fn segments(&self) -> Vec<&Segment> {
        let mut out = Vec::with_capacity(5);
        out.extend(self.hero_fade.as_ref());
        out.push(&self.header_reveal);
        out.push(&self.width_shrink);
        out.extend(self.outro.as_ref());
        out.extend(self.text_reveal.as_ref().map(|r| &r.segment));
        out
    }

    /// Word count of the reveal text, or 0 without one.
    pub fn word_count(&self) -> usize {
        self.text_reveal.as_ref().map_or(0, TextReveal::word_count)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> ChoreoResult<Self> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| ChoreoError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[tracing::instrument]
    pub fn from_path(path: &Path) -> ChoreoResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg = Self::from_json_str(&json)?;
        tracing::debug!(segments = cfg.segments().len(), cards = cfg.card_count, "loaded config");
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> ChoreoResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChoreoError::serde(e.to_string()))
    }
}

fn threshold(name: &str, v: f64) -> ChoreoResult<()> {
    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
        return Err(ChoreoError::validation(format!("{name} must be within [0, 1]")));
    }
    Ok(())
}

fn non_negative(name: &str, v: f64) -> ChoreoResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(ChoreoError::validation(format!("{name} must be finite and >= 0")));
    }
    Ok(())
}

/// Built-in choreographies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Cards,
    Showcase,
}

impl Preset {
    /// Built-in configuration for this preset.
    pub fn config(self) -> ChoreographyConfig {
        match self {
            Self::Cards => ChoreographyConfig::cards(),
            Self::Showcase => ChoreographyConfig::showcase(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Showcase => "showcase",
        }
    }
}

impl FromStr for Preset {
    type Err = ChoreoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cards" => Ok(Self::Cards),
            "showcase" => Ok(Self::Showcase),
            other => Err(ChoreoError::config(format!("unknown preset '{other}'"))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
