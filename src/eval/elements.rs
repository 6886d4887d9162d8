//! Per-element animation contracts.
//!
//! Each function maps the frame clock and the element's placement to the animated style of that
//! element. Times inside the tables are fractions of a second scaled by the frame rate, so the
//! motion keeps its real-time feel at any fps.

use crate::animation::clock::FrameCtx;
use crate::animation::interp::{Extrapolate, InterpOpts, interpolate};
use crate::animation::spring::EasingPreset;
use crate::foundation::core::Vec2;
use crate::foundation::error::ReelResult;

/// Animated properties of one visual node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ElementStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Offset in pixels, relative to the node's layout position.
    pub translate: Vec2,
    /// Uniform scale around the node center.
    pub scale: f64,
}

impl ElementStyle {
    /// Fully visible, unmoved, unscaled.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate: Vec2::ZERO,
        scale: 1.0,
    };
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Spring overshoot is allowed to carry past the table on the right.
const POP: InterpOpts = InterpOpts::CLAMP.right(Extrapolate::Extend);

/// Opacity envelope `[0, fade_in, duration - fade_out, duration] -> [0, 1, 1, 0]`.
///
/// When `duration < fade_in + fade_out` both fades are shortened to `duration / 2`.
pub fn fade_envelope(local: f64, fade_in: f64, fade_out: f64, duration: f64) -> ReelResult<f64> {
    let (fade_in, fade_out) = fit_fades(fade_in, fade_out, duration);
    interpolate(
        local,
        &[0.0, fade_in, duration - fade_out, duration],
        &[0.0, 1.0, 1.0, 0.0],
        InterpOpts::CLAMP,
    )
}

fn fit_fades(fade_in: f64, fade_out: f64, duration: f64) -> (f64, f64) {
    if fade_in + fade_out > duration {
        let half = (duration / 2.0).max(0.0);
        (fade_in.min(half), fade_out.min(half))
    } else {
        (fade_in, fade_out)
    }
}

/// Linear fade-in over `secs`.
fn fade_in(ctx: FrameCtx, local: f64, secs: f64) -> ReelResult<f64> {
    interpolate(local, &[0.0, ctx.secs(secs)], &[0.0, 1.0], InterpOpts::CLAMP)
}

/// Scene title: fades in and out, settles 16px upwards and slowly zooms across the scene.
pub fn title_style(ctx: FrameCtx, start: f64, duration: f64) -> ReelResult<ElementStyle> {
    let local = ctx.local(start);
    let opacity = fade_envelope(local, ctx.secs(0.4), ctx.secs(0.4), duration)?;
    let y = interpolate(local, &[0.0, ctx.secs(0.6)], &[16.0, 0.0], InterpOpts::CLAMP)?;
    let zoom = interpolate(local, &[0.0, duration], &[0.96, 1.03], InterpOpts::CLAMP)?;
    Ok(ElementStyle {
        opacity,
        translate: Vec2::new(0.0, y),
        scale: zoom,
    })
}

/// Channel bubble: springs in after `delay` frames, then swells and fades in its last 0.7s.
///
/// Timing is relative to the delayed start, so later bubbles are still fading when the scene
/// cuts away.
pub fn bubble_style(
    ctx: FrameCtx,
    start: f64,
    duration: f64,
    delay: f64,
    position: Vec2,
) -> ReelResult<ElementStyle> {
    let local = ctx.local(start + delay);
    let intro = EasingPreset::GENTLE_BOUNCE.progress(local, ctx.fps);
    let intro_scale = interpolate(intro, &[0.0, 1.0], &[0.75, 1.0], POP)?;

    let (_, outro) = fit_fades(ctx.secs(0.2), ctx.secs(0.7), duration);
    let outro_scale = interpolate(
        local,
        &[duration - outro, duration],
        &[1.0, 1.06],
        InterpOpts::CLAMP,
    )?;
    let opacity = fade_envelope(local, ctx.secs(0.2), ctx.secs(0.7), duration)?;

    Ok(ElementStyle {
        opacity,
        translate: position,
        scale: intro_scale * outro_scale,
    })
}

/// Inbox card: quick fade with a springy scale-up from 0.9.
pub fn inbox_style(ctx: FrameCtx, start: f64) -> ReelResult<ElementStyle> {
    let local = ctx.local(start);
    let bounce = EasingPreset::GENTLE_BOUNCE.progress(local, ctx.fps);
    Ok(ElementStyle {
        opacity: fade_in(ctx, local, 0.3)?,
        translate: Vec2::ZERO,
        scale: interpolate(bounce, &[0.0, 1.0], &[0.9, 1.0], POP)?,
    })
}

/// Feature showcase: rises 40px over 1.1s while springing up from 0.92.
pub fn showcase_style(ctx: FrameCtx, start: f64) -> ReelResult<ElementStyle> {
    let local = ctx.local(start);
    let rise = interpolate(local, &[0.0, ctx.secs(1.1)], &[40.0, 0.0], InterpOpts::CLAMP)?;
    let bounce = EasingPreset::GENTLE_BOUNCE.progress(local, ctx.fps);
    Ok(ElementStyle {
        opacity: fade_in(ctx, local, 0.4)?,
        translate: Vec2::new(0.0, rise),
        scale: interpolate(bounce, &[0.0, 1.0], &[0.92, 1.0], POP)?,
    })
}

/// Use-case row: rises 24px, springs up from 0.94 and zooms to 1.04 over `duration`.
pub fn use_cases_style(ctx: FrameCtx, start: f64, duration: f64) -> ReelResult<ElementStyle> {
    let local = ctx.local(start);
    let y = interpolate(local, &[0.0, ctx.secs(0.6)], &[24.0, 0.0], InterpOpts::CLAMP)?;
    let bounce = EasingPreset::GENTLE_BOUNCE.progress(local, ctx.fps);
    let pop = interpolate(bounce, &[0.0, 1.0], &[0.94, 1.0], POP)?;
    let zoom = interpolate(local, &[0.0, duration], &[1.0, 1.04], InterpOpts::CLAMP)?;
    Ok(ElementStyle {
        opacity: fade_in(ctx, local, 0.4)?,
        translate: Vec2::new(0.0, y),
        scale: pop * zoom,
    })
}

/// Call-to-action block: fades in over 0.4s.
pub fn cta_style(ctx: FrameCtx, start: f64) -> ReelResult<ElementStyle> {
    let local = ctx.local(start);
    Ok(ElementStyle {
        opacity: fade_in(ctx, local, 0.4)?,
        ..ElementStyle::IDENTITY
    })
}

/// Call-to-action button scale: the raw firm-pop progress, growing from 0.
pub fn cta_button_scale(ctx: FrameCtx, start: f64) -> f64 {
    EasingPreset::FIRM_POP.progress(ctx.local(start), ctx.fps)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/elements.rs"]
mod tests;
