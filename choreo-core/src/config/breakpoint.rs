use crate::animation::segment::Tween;
use crate::foundation::core::Viewport;
use crate::foundation::error::{ChoreoError, ChoreoResult};

/// Viewport width tiers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    /// Narrower than 1024 px.
    Tablet,
    /// 1024 px up to 1280 px.
    Laptop,
    /// 1280 px up to 1920 px.
    Desktop,
    /// 1920 px and wider.
    Ultrawide,
}

impl Breakpoint {
    /// Tiers from narrowest to widest.
    pub const ALL: [Self; 4] = [Self::Tablet, Self::Laptop, Self::Desktop, Self::Ultrawide];

    pub fn for_width(width: f64) -> Self {
        if width < 1024.0 {
            Self::Tablet
        } else if width < 1280.0 {
            Self::Laptop
        } else if width < 1920.0 {
            Self::Desktop
        } else {
            Self::Ultrawide
        }
    }
}

/// Per-tier constants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TierSettings {
    /// Container width in percent of its parent, before and after the shrink.
    pub width_pct: Tween<f64>,
    /// Pinned scroll distance as a multiple of the viewport height.
    pub scroll_multiplier: f64,
}

impl TierSettings {
    fn validate(&self, tier: Breakpoint) -> ChoreoResult<()> {
        let Tween { from, to } = self.width_pct;
        for v in [from, to] {
            if !v.is_finite() || v <= 0.0 || v > 100.0 {
                return Err(ChoreoError::validation(format!(
                    "{tier:?} width percentage {v} must be in (0, 100]"
                )));
            }
        }
        if !self.scroll_multiplier.is_finite() || self.scroll_multiplier <= 0.0 {
            return Err(ChoreoError::validation(format!(
                "{tier:?} scroll multiplier must be > 0"
            )));
        }
        Ok(())
    }
}

/// Lookup table keyed by [`Breakpoint`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BreakpointTable {
    pub tablet: TierSettings,
    pub laptop: TierSettings,
    pub desktop: TierSettings,
    pub ultrawide: TierSettings,
    /// Viewports shorter than this get `short_height_bonus` added to the multiplier.
    pub short_height_px: f64,
    pub short_height_bonus: f64,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        let tier = |from, to, scroll_multiplier| TierSettings {
            width_pct: Tween::new(from, to),
            scroll_multiplier,
        };
        Self {
            tablet: tier(90.0, 80.0, 3.0),
            laptop: tier(80.0, 68.0, 3.5),
            desktop: tier(75.0, 60.0, 4.0),
            ultrawide: tier(65.0, 50.0, 4.0),
            short_height_px: 720.0,
            short_height_bonus: 0.5,
        }
    }
}

impl BreakpointTable {
    /// Settings for one tier.
    pub fn get(&self, bp: Breakpoint) -> &TierSettings {
        match bp {
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Laptop => &self.laptop,
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Ultrawide => &self.ultrawide,
        }
    }

    pub fn validate(&self) -> ChoreoResult<()> {
        for bp in Breakpoint::ALL {
            self.get(bp).validate(bp)?;
        }
        if !self.short_height_px.is_finite() || self.short_height_px < 0.0 {
            return Err(ChoreoError::validation("short_height_px must be >= 0"));
        }
        if !self.short_height_bonus.is_finite() || self.short_height_bonus < 0.0 {
            return Err(ChoreoError::validation("short_height_bonus must be >= 0"));
        }
        Ok(())
    }

    /// Resolve viewport-dependent constants. Called once per resize.
    pub fn resolve(&self, viewport: Viewport) -> ResolvedViewport {
        let breakpoint = Breakpoint::for_width(viewport.width);
        let tier = self.get(breakpoint);
        let mut scroll_multiplier = tier.scroll_multiplier;
        if viewport.height < self.short_height_px {
            scroll_multiplier += self.short_height_bonus;
        }
        ResolvedViewport {
            viewport,
            breakpoint,
            width_pct: tier.width_pct,
            scroll_multiplier,
        }
    }
}

/// Constants for one viewport size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedViewport {
    pub viewport: Viewport,
    pub breakpoint: Breakpoint,
    pub width_pct: Tween<f64>,
    pub scroll_multiplier: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/config/breakpoint.rs"]
mod tests;
