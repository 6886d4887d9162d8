pub(crate) mod cue;
pub(crate) mod partition;
pub(crate) mod scenes;

use crate::foundation::core::{Canvas, Fps, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};

/// Resolved render timeline. Immutable once built.
///
/// Outside of tests, a `Timeline` comes out of [`crate::resolve_timeline`], which sizes it from
/// the measured narration. Nothing frame-related can be evaluated before one exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Timeline {
    total_frames: u64,
    fps: Fps,
    canvas: Canvas,
}

impl Timeline {
    /// Build a timeline with an explicit frame count.
    pub fn new(total_frames: u64, fps: Fps, canvas: Canvas) -> ReelResult<Self> {
        let fps = Fps::new(fps.num, fps.den)?;
        if total_frames == 0 {
            return Err(ReelError::config("timeline must have at least one frame"));
        }
        Ok(Self {
            total_frames,
            fps,
            canvas,
        })
    }

    /// Size a timeline from a measured duration: `ceil((measured + tail) * fps)` frames.
    pub fn from_measured_secs(
        measured_secs: f64,
        tail_secs: f64,
        fps: Fps,
        canvas: Canvas,
    ) -> ReelResult<Self> {
        if !measured_secs.is_finite() || measured_secs < 0.0 {
            return Err(ReelError::measurement(format!(
                "measured duration must be finite and >= 0, got {measured_secs}"
            )));
        }
        if !tail_secs.is_finite() || tail_secs < 0.0 {
            return Err(ReelError::config("tail_secs must be finite and >= 0"));
        }
        let fps = Fps::new(fps.num, fps.den)?;
        Self::new(fps.secs_to_frames_ceil(measured_secs + tail_secs), fps, canvas)
    }

    /// Total number of frames.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// `[0, total_frames)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: 0,
            end: self.total_frames,
        }
    }

    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.total_frames as f64)
    }
}
