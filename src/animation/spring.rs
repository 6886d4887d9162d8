use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};

/// Damped harmonic oscillator parameters for spring easing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`. Lower values overshoot further and settle slower.
    pub damping: f64,
    /// Mass `m`.
    pub mass: f64,
    /// Cap the progress at 1 instead of overshooting.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Damping ratio `c / (2 * sqrt(k * m))`. Below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt()).max(1e-9)
    }

    /// Reject non-finite parameters, negative damping and non-positive stiffness or mass.
    pub fn validate(&self) -> ReelResult<()> {
        if ![self.stiffness, self.damping, self.mass]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ReelError::animation("spring parameters must be finite"));
        }
        if self.stiffness <= 0.0 {
            return Err(ReelError::animation("spring stiffness must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(ReelError::animation("spring damping must be >= 0"));
        }
        if self.mass <= 0.0 {
            return Err(ReelError::animation("spring mass must be > 0"));
        }
        Ok(())
    }
}

/// A named, versioned spring configuration.
///
/// Call sites pass a preset explicitly instead of repeating inline parameters, so changing a
/// curve means adding a new version rather than editing values in place.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EasingPreset {
    /// Preset family name.
    pub name: &'static str,
    /// Revision of the family.
    pub version: u32,
    /// Spring parameters.
    pub spring: SpringConfig,
}

impl EasingPreset {
    /// Soft pop-in with a ~6% overshoot. Used by bubbles, cards and panels.
    pub const GENTLE_BOUNCE: Self = Self {
        name: "gentle-bounce",
        version: 1,
        spring: SpringConfig {
            stiffness: 100.0,
            damping: 12.0,
            mass: 0.8,
            overshoot_clamping: false,
        },
    };

    /// Near-critically damped pop without visible overshoot. Used by the call-to-action button.
    pub const FIRM_POP: Self = Self {
        name: "firm-pop",
        version: 1,
        spring: SpringConfig {
            stiffness: 100.0,
            damping: 18.0,
            mass: 0.8,
            overshoot_clamping: false,
        },
    };

    /// `name@version`.
    pub fn id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    /// Spring progress for this preset.
    pub fn progress(&self, elapsed_frames: f64, fps: Fps) -> f64 {
        spring(elapsed_frames, fps, self.spring)
    }
}

/// Spring progress after `elapsed_frames` frames, starting at rest at 0 and heading to 1.
///
/// Closed form, so every call is independent: the same inputs always give the same output and
/// no per-frame state is carried. Returns 0 for `elapsed_frames <= 0`.
///
/// A spring without stiffness has no restoring force and stays at 0 forever; see
/// [`SpringConfig::validate`] to reject such configs up front.
pub fn spring(elapsed_frames: f64, fps: Fps, config: SpringConfig) -> f64 {
    // Also catches NaN.
    if !(elapsed_frames > 0.0) {
        return 0.0;
    }
    let t = fps.frames_to_secs(elapsed_frames);
    let v = step_response(t, config.stiffness, config.damping, config.mass);
    if config.overshoot_clamping {
        v.min(1.0)
    } else {
        v
    }
}

/// First frame from which the progress stays within `threshold` of 1.
///
/// Searches the first minute of motion; `None` if the spring has not settled by then or the
/// config does not validate.
pub fn settle_frame(fps: Fps, config: SpringConfig, threshold: f64) -> Option<u64> {
    config.validate().ok()?;
    let limit = fps.secs_to_frames_ceil(60.0);
    let mut last_outside = None;
    for f in 0..=limit {
        if (spring(f as f64, fps, config) - 1.0).abs() > threshold {
            last_outside = Some(f);
        }
    }
    match last_outside {
        None => Some(0),
        Some(f) if f < limit => Some(f + 1),
        Some(_) => None,
    }
}

fn step_response(t: f64, stiffness: f64, damping: f64, mass: f64) -> f64 {
    // Step response from 0 to 1 with x(0)=0, v(0)=0.
    let k = stiffness.max(0.0);
    let c = damping.max(0.0);
    let m = mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        // No restoring force: the mass stays where it started.
        return 0.0;
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let c1 = (wd * t).cos();
        let s1 = (wd * t).sin();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * (c1 + k * s1)
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
