use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ReelError, ReelResult};

/// Render-request configuration.
///
/// Every field has a default, so an empty JSON object (`{}`) is a valid config. The scene script,
/// including which narration track sizes the timeline, is fixed and is not part of this file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReelConfig {
    /// Output frame rate.
    pub fps: Fps,
    /// Output frame size.
    pub canvas: Canvas,
    /// Directory that relative asset paths are resolved against.
    pub assets_root: PathBuf,
    /// Seconds appended after the narration ends.
    pub tail_secs: f64,
    /// Upper bound for the duration probe.
    pub probe_timeout_secs: f64,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            canvas: Canvas::default(),
            assets_root: PathBuf::from("."),
            tail_secs: 0.0,
            probe_timeout_secs: 30.0,
        }
    }
}

impl ReelConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check value ranges.
    pub fn validate(&self) -> ReelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::config("canvas width and height must be > 0"));
        }
        if !self.tail_secs.is_finite() || self.tail_secs < 0.0 {
            return Err(ReelError::config("tail_secs must be finite and >= 0"));
        }
        if !self.probe_timeout_secs.is_finite() || self.probe_timeout_secs <= 0.0 {
            return Err(ReelError::config("probe_timeout_secs must be finite and > 0"));
        }
        Ok(())
    }

    /// Resolve an asset path from the script against `assets_root`.
    pub fn asset_path(&self, rel: &Path) -> PathBuf {
        self.assets_root.join(rel)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
