use std::collections::BTreeMap;

use crate::animation::toggle::{Crossing, ToggleEvent, ToggleKind, ToggleState};
use crate::animation::transition::{Transition, TransitionTiming};
use crate::apply::applier::{Applier, ApplyStats};
use crate::apply::target::RenderTarget;
use crate::config::breakpoint::ResolvedViewport;
use crate::config::model::{ChoreographyConfig, TransitionSettings};
use crate::eval::mapper::compute_state_into;
use crate::eval::state::{AnimationState, Property};
use crate::foundation::core::{Progress, Viewport};
use crate::foundation::error::ChoreoResult;
use crate::scroll::progress::ScrollTrack;
use crate::scroll::smoothing::ScrubSmoother;

/// Input for one animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Document scroll offset in px.
    pub scroll_offset: f64,
    /// Monotonic clock in seconds. `None` disables smoothing and timed transitions.
    pub now_secs: Option<f64>,
}

impl Frame {
    /// Untimed frame: no smoothing and no transitions.
    pub fn at(scroll_offset: f64) -> Self {
        Self {
            scroll_offset,
            now_secs: None,
        }
    }

    pub fn timed(scroll_offset: f64, now_secs: f64) -> Self {
        Self {
            scroll_offset,
            now_secs: Some(now_secs),
        }
    }
}

/// Outcome of a tick that reached a mounted target.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TickReport {
    /// Progress straight from the scroll offset.
    pub raw_progress: Progress,
    /// Progress after scrub smoothing; what the state was derived from.
    pub progress: Progress,
    pub events: Vec<ToggleEvent>,
    pub stats: ApplyStats,
    /// More frames are needed to finish transitions or smoothing.
    pub animating: bool,
}

/// Drives one pinned section: scroll in, committed properties out.
pub struct Choreographer {
    config: ChoreographyConfig,
    viewport: ResolvedViewport,
    track: ScrollTrack,
    toggles: ToggleState,
    smoother: ScrubSmoother,
    transitions: BTreeMap<Property, Transition>,
    applier: Applier,
    settled: AnimationState,
    displayed: AnimationState,
    last_now: Option<f64>,
    has_rendered: bool,
}

impl Choreographer {
    /// Resolve the viewport tier and size the scroll track. Fails on an invalid config.
    pub fn new(
        config: ChoreographyConfig,
        viewport: Viewport,
        start_offset: f64,
    ) -> ChoreoResult<Self> {
        config.validate()?;
        let resolved = config.breakpoints.resolve(viewport);
        tracing::debug!(breakpoint = ?resolved.breakpoint, start_offset, "choreographer created");
        Ok(Self {
            track: ScrollTrack::new(start_offset, &resolved),
            smoother: ScrubSmoother::new(config.scrub_lag_secs),
            applier: Applier::new(config.epsilon),
            viewport: resolved,
            config,
            toggles: ToggleState::default(),
            transitions: BTreeMap::new(),
            settled: AnimationState::new(),
            displayed: AnimationState::new(),
            last_now: None,
            has_rendered: false,
        })
    }

    pub fn config(&self) -> &ChoreographyConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ResolvedViewport {
        &self.viewport
    }

    pub fn track(&self) -> &ScrollTrack {
        &self.track
    }

    pub fn toggles(&self) -> ToggleState {
        self.toggles
    }

    /// Values committed by the last tick, transitions included.
    pub fn displayed(&self) -> &AnimationState {
        &self.displayed
    }

    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Re-resolve viewport constants; returns whether the breakpoint tier changed.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        let resolved = self.config.breakpoints.resolve(viewport);
        let changed = resolved.breakpoint != self.viewport.breakpoint;
        if changed {
            tracing::debug!(from = ?self.viewport.breakpoint, to = ?resolved.breakpoint, "breakpoint changed");
        }
        self.track.resize(&resolved);
        self.viewport = resolved;
        changed
    }

    pub fn set_start_offset(&mut self, start_offset: f64) {
        self.track.set_start_offset(start_offset);
    }

    pub fn progress(&self, scroll_offset: f64) -> Progress {
        self.track.progress(scroll_offset)
    }

    /// Forget everything rendered, as on unmount. The next tick snaps.
    pub fn reset(&mut self) {
        self.toggles = ToggleState::default();
        self.smoother.reset();
        self.transitions.clear();
        self.applier.reset();
        self.settled.clear();
        self.displayed.clear();
        self.last_now = None;
        self.has_rendered = false;
    }

    /// Derive and commit one frame. Returns `None` when the target is not mounted.
    pub fn tick<T: RenderTarget + ?Sized>(
        &mut self,
        frame: Frame,
        target: &mut T,
    ) -> Option<TickReport> {
        if !target.is_mounted() {
            return None;
        }

        let raw = self.track.progress(frame.scroll_offset);
        let progress = match frame.now_secs {
            Some(now) => {
                let dt = self.last_now.map_or(0.0, |prev| now - prev);
                self.last_now = Some(now);
                self.smoother.advance(raw, dt)
            }
            None => {
                self.smoother.reset();
                raw
            }
        };

        compute_state_into(progress, &self.viewport, &self.config, &mut self.settled);
        let events = self.toggles.update(
            progress,
            self.config.gap_threshold,
            self.config.flip_threshold,
        );

        match (frame.now_secs, self.config.transitions) {
            (Some(now), Some(settings)) => {
                if self.has_rendered {
                    for event in &events {
                        start_transitions(
                            &mut self.transitions,
                            &self.settled,
                            &self.displayed,
                            *event,
                            now,
                            &settings,
                            self.config.card_count,
                        );
                    }
                }
                for (property, transition) in &self.transitions {
                    self.settled.set(*property, transition.value_at(now));
                }
                self.transitions.retain(|_, t| !t.is_finished(now));
            }
            _ => self.transitions.clear(),
        }

        let stats = self.applier.apply(&self.settled, target);
        std::mem::swap(&mut self.settled, &mut self.displayed);
        self.has_rendered = true;

        let smoothing = frame.now_secs.is_some() && !self.smoother.is_settled(raw);
        Some(TickReport {
            raw_progress: raw,
            progress,
            events,
            stats,
            animating: smoothing || !self.transitions.is_empty(),
        })
    }
}

fn timing_for(property: Property, kind: ToggleKind, settings: &TransitionSettings) -> TransitionTiming {
    match (property, kind) {
        (Property::CtaOpacity, _) => settings.cta,
        (_, ToggleKind::Gap) => settings.gap,
        (_, ToggleKind::Flip) => settings.flip,
    }
}

fn start_transitions(
    transitions: &mut BTreeMap<Property, Transition>,
    settled: &AnimationState,
    displayed: &AnimationState,
    event: ToggleEvent,
    now: f64,
    settings: &TransitionSettings,
    card_count: usize,
) {
    let reverse = event.crossing == Crossing::Down;
    for (property, to) in settled.iter() {
        if property.toggle() != Some(event.toggle) {
            continue;
        }
        let timing = timing_for(property, event.toggle, settings);
        let from = displayed.get(property).unwrap_or(to);
        // Only the Y rotation staggers; fan-out and drop move together.
        let delay = match property {
            Property::CardRotationY(i) => timing.delay_for(i, card_count, reverse),
            _ => timing.delay_for(0, 1, reverse),
        };
        transitions.insert(
            property,
            Transition::new(from, to, now + delay, timing.duration_secs, timing.ease),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/choreographer.rs"]
mod tests;
