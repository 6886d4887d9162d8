use crate::foundation::error::ReelResult;
use crate::timeline::Timeline;
use crate::timeline::partition::{Rounding, SceneInterval, partition_with};

/// Scene intervals for one timeline, computed once and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneTable {
    total_frames: u64,
    intervals: Vec<SceneInterval>,
}

impl SceneTable {
    /// Partition `timeline` by `weights` with floor rounding.
    pub fn new(timeline: &Timeline, weights: &[f64]) -> ReelResult<Self> {
        Self::with_rounding(timeline, weights, Rounding::Floor)
    }

    /// Partition `timeline` by `weights` with an explicit rounding rule.
    pub fn with_rounding(
        timeline: &Timeline,
        weights: &[f64],
        rounding: Rounding,
    ) -> ReelResult<Self> {
        let intervals = partition_with(timeline.total_frames(), weights, rounding)?;
        Ok(Self {
            total_frames: timeline.total_frames(),
            intervals,
        })
    }

    /// All intervals in scene order.
    pub fn intervals(&self) -> &[SceneInterval] {
        &self.intervals
    }

    /// Interval of scene `index`.
    pub fn get(&self, index: usize) -> Option<SceneInterval> {
        self.intervals.get(index).copied()
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always `false`: a table holds at least one scene.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The one scene active at `frame`, or `None` past the end of the timeline.
    ///
    /// Binary search over the sorted starts; intervals are contiguous and start at 0, so every
    /// in-range frame maps to exactly one scene.
    pub fn active_scene_index(&self, frame: u64) -> Option<usize> {
        if frame >= self.total_frames {
            return None;
        }
        let idx = self.intervals.partition_point(|s| s.start <= frame);
        idx.checked_sub(1)
    }

    /// Index and interval of the scene active at `frame`.
    pub fn active_scene(&self, frame: u64) -> Option<(usize, SceneInterval)> {
        let i = self.active_scene_index(frame)?;
        Some((i, self.intervals[i]))
    }
}
