use crate::foundation::core::FrameRange;
use crate::foundation::error::{ReelError, ReelResult};

/// One scene's slot on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneInterval {
    /// First frame of the scene.
    pub start: u64,
    /// Number of frames, always > 0.
    pub duration: u64,
}

impl SceneInterval {
    /// One past the last frame.
    pub fn end(self) -> u64 {
        self.start + self.duration
    }

    /// `start <= frame < start + duration`.
    pub fn contains(self, frame: u64) -> bool {
        self.start <= frame && frame < self.end()
    }

    /// Interval as a [`FrameRange`].
    pub fn range(self) -> FrameRange {
        FrameRange {
            start: self.start,
            end: self.end(),
        }
    }
}

/// How raw scene lengths are rounded before the last scene absorbs the remainder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// `floor(weight * (total / sum))`.
    #[default]
    Floor,
    /// Round half away from zero.
    Nearest,
}

/// Split `total_frames` into contiguous scenes proportional to `weights` (floor rounding).
///
/// The last scene takes `total_frames - sum(other durations)`, so all rounding drift lands there
/// and the intervals cover the timeline exactly.
pub fn partition(total_frames: u64, weights: &[f64]) -> ReelResult<Vec<SceneInterval>> {
    partition_with(total_frames, weights, Rounding::Floor)
}

/// [`partition`] with an explicit rounding rule.
pub fn partition_with(
    total_frames: u64,
    weights: &[f64],
    rounding: Rounding,
) -> ReelResult<Vec<SceneInterval>> {
    let sum = validate_weights(total_frames, weights)?;

    // Frames per unit of weight. Each raw length is `w * unit`, computed in that order so the
    // cut list matches the composition it was authored against bit for bit.
    let unit = total_frames as f64 / sum;
    let mut durations: Vec<u64> = weights
        .iter()
        .map(|w| {
            let raw = w * unit;
            match rounding {
                Rounding::Floor => raw.floor() as u64,
                Rounding::Nearest => raw.round() as u64,
            }
        })
        .collect();

    let last = durations.len() - 1;
    let allocated: u64 = durations[..last].iter().sum();
    if allocated >= total_frames {
        return Err(ReelError::config(format!(
            "scene weights leave no frames for the final scene ({allocated} of {total_frames} allocated)"
        )));
    }
    durations[last] = total_frames - allocated;

    if let Some(i) = durations.iter().position(|&d| d == 0) {
        return Err(ReelError::config(format!(
            "scene {i} would have zero frames (weight {} of {total_frames} frames)",
            weights[i]
        )));
    }

    let mut start = 0u64;
    let intervals: Vec<SceneInterval> = durations
        .into_iter()
        .map(|duration| {
            let s = SceneInterval { start, duration };
            start += duration;
            s
        })
        .collect();

    tracing::debug!(
        total_frames,
        scenes = intervals.len(),
        last_duration = intervals[last].duration,
        ?rounding,
        "partitioned timeline"
    );
    Ok(intervals)
}

fn validate_weights(total_frames: u64, weights: &[f64]) -> ReelResult<f64> {
    if weights.is_empty() {
        return Err(ReelError::config("scene weights must not be empty"));
    }
    if let Some((i, w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w <= 0.0)
    {
        return Err(ReelError::config(format!(
            "scene weight {i} must be finite and > 0, got {w}"
        )));
    }
    if total_frames < weights.len() as u64 {
        return Err(ReelError::config(format!(
            "timeline has {total_frames} frames but {} scenes",
            weights.len()
        )));
    }
    let sum: f64 = weights.iter().sum();
    if !sum.is_finite() {
        return Err(ReelError::config("sum of scene weights overflows"));
    }
    Ok(sum)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/partition.rs"]
mod tests;
