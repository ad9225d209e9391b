use crate::animation::reveal::word_reveal_into;
use crate::animation::segment::Tween;
use crate::config::breakpoint::ResolvedViewport;
use crate::config::model::ChoreographyConfig;
use crate::eval::state::{AnimationState, Corner, Property};
use crate::foundation::core::Progress;

/// How a named segment relates to the current progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SegmentPhase {
    pub name: String,
    /// Eased local progress for windows; `0` or `1` for thresholds.
    pub local_t: f64,
    pub active: bool,
}

/// Map `progress` onto every named segment, thresholds included.
pub fn map_segments(progress: Progress, config: &ChoreographyConfig) -> Vec<SegmentPhase> {
    let mut out: Vec<SegmentPhase> = config
        .segments()
        .into_iter()
        .map(|s| SegmentPhase {
            name: s.name.clone(),
            local_t: s.local_t(progress),
            active: s.is_active(progress),
        })
        .collect();
    for (name, threshold) in [
        ("gap-toggle", config.gap_threshold),
        ("flip", config.flip_threshold),
    ] {
        let past = progress.get() >= threshold;
        out.push(SegmentPhase {
            name: name.to_owned(),
            local_t: if past { 1.0 } else { 0.0 },
            active: past,
        });
    }
    out
}

/// Derive the full animation state at `progress`.
///
/// Pure: the same inputs always give the same state, regardless of scroll
/// direction or what was computed before.
pub fn compute_state(
    progress: Progress,
    viewport: &ResolvedViewport,
    config: &ChoreographyConfig,
) -> AnimationState {
    let mut out = AnimationState::new();
    compute_state_into(progress, viewport, config, &mut out);
    out
}

/// Like [`compute_state`], reusing `out`'s allocations.
#[tracing::instrument(level = "trace", skip(viewport, config, out))]
pub fn compute_state_into(
    progress: Progress,
    viewport: &ResolvedViewport,
    config: &ChoreographyConfig,
    out: &mut AnimationState,
) {
    out.clear();
    let p = progress;

    if let Some(hero) = &config.hero_fade {
        out.set(Property::HeroOpacity, hero.sample(&Tween::new(1.0, 0.0), p));
    }

    let exit: f64 = config
        .outro
        .as_ref()
        .map_or(1.0, |s| s.sample(&Tween::new(1.0, 0.0), p));

    let header_t = config.header_reveal.local_t(p);
    let header_opacity: f64 = Tween::new(0.0, 1.0).at(header_t);
    out.set(Property::HeaderOpacity, header_opacity * exit);
    out.set(
        Property::HeaderY,
        Tween::new(config.header_offset_px, 0.0).at(header_t),
    );

    out.set(
        Property::ContainerWidth,
        config.width_shrink.sample(&viewport.width_pct, p),
    );

    let gapped = p.get() >= config.gap_threshold;
    let flipped = p.get() >= config.flip_threshold;
    out.set(
        Property::ContainerGap,
        if gapped { config.gap_px } else { 0.0 },
    );

    let n = config.card_count;
    let last = n.saturating_sub(1);
    for i in 0..n {
        out.set(Property::CardOpacity(i), exit);

        for corner in Corner::ALL {
            let outer = match corner {
                Corner::TopLeft | Corner::BottomLeft => i == 0,
                Corner::TopRight | Corner::BottomRight => i == last,
            };
            let r = if gapped || outer {
                config.corner_radius_px
            } else {
                0.0
            };
            out.set(Property::CardRadius(i, corner), r);
        }

        // Only the outermost cards fan out; a lone card just flips.
        let tilt = if n < 2 {
            0.0
        } else if i == 0 {
            -config.flip.edge_tilt_deg
        } else if i == last {
            config.flip.edge_tilt_deg
        } else {
            0.0
        };
        let drop = if n >= 2 && (i == 0 || i == last) {
            config.flip.edge_drop_px
        } else {
            0.0
        };
        let (rot_y, rot_z, y) = if flipped {
            (config.flip.rotation_deg, tilt, drop)
        } else {
            (0.0, 0.0, 0.0)
        };
        out.set(Property::CardRotationY(i), rot_y);
        out.set(Property::CardRotationZ(i), rot_z);
        out.set(Property::CardY(i), y);
    }

    out.set(Property::CtaOpacity, if flipped { exit } else { 0.0 });

    if let Some(reveal) = &config.text_reveal {
        let local_t = reveal.segment.local_t(p);
        word_reveal_into(local_t, reveal.word_count(), out.words_mut());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/mapper.rs"]
mod tests;
