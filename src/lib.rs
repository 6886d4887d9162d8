//! promoreel schedules and animates a narration-driven promo video.
//!
//! The crate owns the timing side of the video: it turns a measured voice-over length into a
//! partition of weighted scenes, anchors sound-effect cues to scene boundaries, and evaluates every
//! animated property of the fixed scene script as a pure function of the frame index.
//!
//! # Two phases
//!
//! 1. **Resolve** (async): [`resolve_timeline`] measures the narration through a
//!    [`DurationProbe`] and returns a [`Timeline`].
//! 2. **Evaluate** (pure): [`Reel::new`] partitions the timeline once, then
//!    [`Reel::render_frame`] maps any frame in `[0, total_frames)` to a [`VisualTree`].
//!
//! Pixels, layout and asset decoding belong to the external renderer that consumes the
//! [`VisualTree`]s.
//!
//! # Design constraints
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure frames**: evaluation holds no state between frames, so frames can be evaluated out of
//!   order or in parallel (see [`render_frames`]).
//! - **No silent defaults**: invalid weights or timelines are reported as [`ReelError::Config`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod audio;
mod eval;
mod foundation;
mod render;
mod script;
mod timeline;

pub use animation::clock::FrameCtx;
pub use animation::interp::{Breakpoints, Extrapolate, InterpOpts, interpolate};
pub use animation::spring::{EasingPreset, SpringConfig, settle_frame, spring};
pub use audio::plan::{AudioPlan, AudioTrack, MIX_SAMPLE_RATE, MusicBed, frame_to_sample};
pub use audio::probe::{DurationProbe, FfprobeProbe, FixedDurationProbe, resolve_timeline};
pub use eval::elements::{
    ElementStyle, bubble_style, cta_button_scale, cta_style, fade_envelope, inbox_style,
    showcase_style, title_style, use_cases_style,
};
pub use eval::frame::{ActiveScene, NodeContent, Reel, VisualNode, VisualTree};
pub use foundation::config::ReelConfig;
pub use foundation::core::{Canvas, Fps, FrameRange, Vec2};
pub use foundation::error::{ReelError, ReelResult};
pub use render::pipeline::{
    FrameThreading, PipelineStats, render_frames, render_frames_into, render_frames_with_stats,
};
pub use script::builtin::{SCENE_WEIGHTS, promo_script};
pub use script::model::{
    BubbleSpec, Conversation, CtaSpec, FeatureLayout, InboxSpec, MusicSpec, SceneSpec, Script,
    ShowcaseSpec, SoundCueSpec, TitleSpec, TitleVariant, UseCaseItem, UseCasesSpec, WidgetSpec,
};
pub use timeline::Timeline;
pub use timeline::cue::{CueOffset, schedule_cue};
pub use timeline::partition::{Rounding, SceneInterval, partition, partition_with};
pub use timeline::scenes::SceneTable;
