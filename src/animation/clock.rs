use crate::foundation::core::Fps;

/// Frame clock handed to every animated element.
///
/// Read-only: it carries the absolute frame and the global frame rate, and derives local frames
/// and fps-relative durations from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCtx {
    /// Absolute frame index on the timeline.
    pub frame: u64,
    /// Global frame rate.
    pub fps: Fps,
}

impl FrameCtx {
    /// Build a clock for `frame`.
    pub fn new(frame: u64, fps: Fps) -> Self {
        Self { frame, fps }
    }

    /// Frame relative to an element starting at `start` (may be negative or fractional).
    pub fn local(self, start: f64) -> f64 {
        self.frame as f64 - start
    }

    /// `secs` expressed in frames at this clock's rate.
    pub fn secs(self, secs: f64) -> f64 {
        self.fps.secs_to_frames(secs)
    }
}
