use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};
use crate::timeline::partition::SceneInterval;

/// Offset of a secondary cue from the start of a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CueOffset {
    /// Scene the cue is anchored to.
    pub scene_index: usize,
    /// Frames after (positive) or before (negative) the scene start.
    pub offset_frames: i64,
}

impl CueOffset {
    /// Offset given directly in frames.
    pub fn frames(scene_index: usize, offset_frames: i64) -> Self {
        Self {
            scene_index,
            offset_frames,
        }
    }

    /// Offset given in seconds, rounded to the nearest frame.
    pub fn secs(scene_index: usize, offset_secs: f64, fps: Fps) -> Self {
        Self {
            scene_index,
            offset_frames: fps.secs_to_frames(offset_secs).round() as i64,
        }
    }

    /// Absolute start frame against `intervals`.
    pub fn resolve(&self, intervals: &[SceneInterval]) -> ReelResult<u64> {
        schedule_cue(intervals, self.scene_index, self.offset_frames)
    }
}

/// Absolute start frame of a cue: `max(intervals[scene_index].start + offset_frames, 0)`.
///
/// Cues that would start before the timeline (a sound leading the first cut) start at frame 0.
/// Cue length and overlap are left to the mixer.
pub fn schedule_cue(
    intervals: &[SceneInterval],
    scene_index: usize,
    offset_frames: i64,
) -> ReelResult<u64> {
    let scene = intervals.get(scene_index).ok_or_else(|| {
        ReelError::config(format!(
            "cue anchored to scene {scene_index} but the timeline has {} scenes",
            intervals.len()
        ))
    })?;
    let at = i128::from(scene.start) + i128::from(offset_frames);
    Ok(at.clamp(0, i128::from(u64::MAX)) as u64)
}
