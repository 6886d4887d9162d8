use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::foundation::config::ReelConfig;
use crate::foundation::error::{ReelError, ReelResult};
use crate::timeline::Timeline;

/// Measures the playback length of an audio file.
///
/// This is the only asynchronous seam of the crate: everything after [`resolve_timeline`] is
/// synchronous and pure.
#[async_trait]
pub trait DurationProbe: Send + Sync {
    /// Length of `source` in seconds.
    async fn measure_duration(&self, source: &Path) -> ReelResult<f64>;
}

/// Probe that shells out to `ffprobe`.
#[derive(Clone, Debug)]
pub struct FfprobeProbe {
    program: PathBuf,
}

impl Default for FfprobeProbe {
    fn default() -> Self {
        Self::new("ffprobe")
    }
}

impl FfprobeProbe {
    /// Use `program` instead of the `ffprobe` found on `PATH`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl DurationProbe for FfprobeProbe {
    async fn measure_duration(&self, source: &Path) -> ReelResult<f64> {
        let out = tokio::process::Command::new(&self.program)
            .args(["-v", "error", "-print_format", "json", "-show_format"])
            .arg(source)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                ReelError::measurement(format!(
                    "failed to run '{}': {e}",
                    self.program.display()
                ))
            })?;
        if !out.status.success() {
            return Err(ReelError::measurement(format!(
                "ffprobe failed for '{}': {}",
                source.display(),
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        parse_ffprobe_duration(&out.stdout)
    }
}

/// Extract `format.duration` from `ffprobe -print_format json -show_format` output.
pub(crate) fn parse_ffprobe_duration(stdout: &[u8]) -> ReelResult<f64> {
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        format: ProbeFormat,
    }

    let parsed: ProbeOut = serde_json::from_slice(stdout)
        .map_err(|e| ReelError::measurement(format!("ffprobe json parse failed: {e}")))?;
    let raw = parsed
        .format
        .duration
        .ok_or_else(|| ReelError::measurement("missing format duration from ffprobe"))?;
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ReelError::measurement(format!("unparsable duration '{raw}'")))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(ReelError::measurement(format!(
            "duration must be finite and >= 0, got {secs}"
        )));
    }
    Ok(secs)
}

/// Probe with a known answer, for renders that skip measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedDurationProbe {
    secs: f64,
}

impl FixedDurationProbe {
    /// Always report `secs`.
    pub fn new(secs: f64) -> Self {
        Self { secs }
    }
}

#[async_trait]
impl DurationProbe for FixedDurationProbe {
    async fn measure_duration(&self, _source: &Path) -> ReelResult<f64> {
        Ok(self.secs)
    }
}

/// Measure the narration and size the timeline from it.
///
/// `narration` is resolved against `config.assets_root`. The probe is bounded by
/// `config.probe_timeout_secs`; running out of time is a measurement error like any other probe
/// failure.
#[tracing::instrument(skip(probe, config), fields(fps = config.fps.as_f64()))]
pub async fn resolve_timeline(
    probe: &dyn DurationProbe,
    config: &ReelConfig,
    narration: &Path,
) -> ReelResult<Timeline> {
    config.validate()?;
    let source = config.asset_path(narration);
    let limit = Duration::try_from_secs_f64(config.probe_timeout_secs)
        .map_err(|e| ReelError::config(format!("probe_timeout_secs: {e}")))?;
    let secs = tokio::time::timeout(limit, probe.measure_duration(&source))
        .await
        .map_err(|_| {
            ReelError::measurement(format!(
                "probing '{}' timed out after {:.1}s",
                source.display(),
                config.probe_timeout_secs
            ))
        })??;

    let timeline = Timeline::from_measured_secs(secs, config.tail_secs, config.fps, config.canvas)?;
    tracing::info!(
        narration = %source.display(),
        secs,
        total_frames = timeline.total_frames(),
        "timeline resolved"
    );
    Ok(timeline)
}

#[cfg(test)]
#[path = "../../tests/unit/audio/probe.rs"]
mod tests;
