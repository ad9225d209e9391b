//! choreo is a scroll-progress choreography engine.
//!
//! A pinned page section turns scroll distance into a progress value in `[0, 1]`.
//! choreo maps that one scalar onto many overlapping property curves (opacity,
//! width, gap, corner radius, 3D rotation, per-word text reveal) and commits the
//! results to a render target without redundant writes.
//!
//! # Pipeline overview
//!
//! 1. **Progress**: `scroll offset -> Progress` via a [`ScrollTrack`] sized from the
//!    viewport and its [`Breakpoint`] tier
//! 2. **Map**: `Progress -> AnimationState` via [`compute_state`] (pure, no history)
//! 3. **Toggle**: [`ToggleState`] reports threshold crossings once per direction and
//!    optionally starts timed [`Transition`]s
//! 4. **Apply**: [`Applier`] diffs against the last frame and writes to a [`RenderTarget`]
//!
//! [`Choreographer`] wires these together for a host event loop. With the `web`
//! feature, `ScrollBinding` drives it from browser scroll/resize events.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure derivation**: every interpolated value is a function of progress alone, so
//!   scrolling back exactly reverses scrolling forward.
//! - **No failures at runtime**: out-of-range input clamps and unmounted targets no-op;
//!   only configuration loading returns errors.
#![forbid(unsafe_code)]

mod animation;
mod apply;
mod config;
mod eval;
mod foundation;
mod scroll;
mod session;
#[cfg(feature = "web")]
mod web;

pub use animation::ease::Ease;
pub use animation::reveal::{WordReveal, fully_revealed, word_reveal, word_reveal_into};
pub use animation::segment::{Lerp, Segment, Tween};
pub use animation::toggle::{Crossing, ToggleEvent, ToggleKind, ToggleState, cross};
pub use animation::transition::{Transition, TransitionTiming};
pub use apply::applier::{Applier, ApplyStats};
pub use apply::target::{RecordingTarget, RenderTarget};
pub use config::breakpoint::{Breakpoint, BreakpointTable, ResolvedViewport, TierSettings};
pub use config::model::{
    ChoreographyConfig, FlipSettings, Preset, TextReveal, TransitionSettings,
};
pub use eval::mapper::{SegmentPhase, compute_state, compute_state_into, map_segments};
pub use eval::state::{AnimationState, Corner, Property};
pub use foundation::core::{Progress, Viewport, Window};
pub use foundation::error::{ChoreoError, ChoreoResult};
pub use scroll::gate::{MOBILE_MIN_WIDTH_PX, MobileGate, RESIZE_DEBOUNCE_SECS};
pub use scroll::pin::{PinPhase, spacer_height};
pub use scroll::progress::ScrollTrack;
pub use scroll::smoothing::ScrubSmoother;
pub use session::choreographer::{Choreographer, Frame, TickReport};

#[cfg(feature = "web")]
pub use apply::dom::{DomSelectors, DomTarget};
#[cfg(feature = "web")]
pub use web::binding::ScrollBinding;
