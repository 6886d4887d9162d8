use rayon::prelude::*;

use crate::eval::frame::{Reel, VisualTree};
use crate::foundation::core::FrameRange;
use crate::foundation::error::{ReelError, ReelResult};

/// How a frame range is spread over threads.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameThreading {
    /// Evaluate each chunk on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Frames per chunk; `0` is treated as `1`.
    pub chunk_size: usize,
    /// Pool size; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for FrameThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Counters from one pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PipelineStats {
    /// Frames evaluated.
    pub frames_total: u64,
    /// Chunks handed to the sink.
    pub chunks: u64,
}

/// Evaluate a range of frames (inclusive start, exclusive end) sequentially.
pub fn render_frames(reel: &Reel, range: FrameRange) -> ReelResult<Vec<VisualTree<'_>>> {
    render_frames_with_stats(reel, range, &FrameThreading::default()).map(|(frames, _)| frames)
}

/// Evaluate a range of frames and collect them in frame order.
///
/// Parallel and sequential runs produce identical output: frames are pure and chunks are
/// reassembled in order.
pub fn render_frames_with_stats<'r>(
    reel: &'r Reel,
    range: FrameRange,
    threading: &FrameThreading,
) -> ReelResult<(Vec<VisualTree<'r>>, PipelineStats)> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = render_frames_into(reel, range, threading, |tree| {
        out.push(tree);
        Ok(())
    })?;
    Ok((out, stats))
}

/// Evaluate a range of frames chunk by chunk, handing each tree to `sink` in frame order.
///
/// At most one chunk of trees is held in memory at a time. The first error, from evaluation or
/// from the sink, stops the run.
pub fn render_frames_into<'r, F>(
    reel: &'r Reel,
    range: FrameRange,
    threading: &FrameThreading,
    mut sink: F,
) -> ReelResult<PipelineStats>
where
    F: FnMut(VisualTree<'r>) -> ReelResult<()>,
{
    if range.is_empty() {
        return Err(ReelError::evaluation("render range must be non-empty"));
    }
    let total = reel.timeline().total_frames();
    if range.end > total {
        return Err(ReelError::evaluation(format!(
            "render range {}..{} exceeds total_frames {total}",
            range.start, range.end
        )));
    }

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut stats = PipelineStats::default();
    let mut chunk_start = range.start;
    while chunk_start < range.end {
        let chunk_end = (chunk_start + chunk_size).min(range.end);
        let frames = match &pool {
            Some(pool) => pool.install(|| {
                (chunk_start..chunk_end)
                    .into_par_iter()
                    .map(|f| reel.render_frame(f))
                    .collect::<ReelResult<Vec<_>>>()
            })?,
            None => (chunk_start..chunk_end)
                .map(|f| reel.render_frame(f))
                .collect::<ReelResult<Vec<_>>>()?,
        };
        for tree in frames {
            sink(tree)?;
            stats.frames_total += 1;
        }
        stats.chunks += 1;
        chunk_start = chunk_end;
    }

    tracing::debug!(
        frames = stats.frames_total,
        chunks = stats.chunks,
        parallel = threading.parallel,
        "frame range evaluated"
    );
    Ok(stats)
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::config("frame threading 'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
