use crate::foundation::error::{ReelError, ReelResult};

/// What an interpolation returns for inputs outside the breakpoint table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the output of the nearest end of the table.
    Clamp,
    /// Continue the nearest end segment linearly.
    #[default]
    Extend,
}

/// Per-call interpolation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterpOpts {
    /// Policy before the first breakpoint.
    pub left: Extrapolate,
    /// Policy after the last breakpoint.
    pub right: Extrapolate,
}

impl InterpOpts {
    /// Clamp on both ends.
    pub const CLAMP: Self = Self {
        left: Extrapolate::Clamp,
        right: Extrapolate::Clamp,
    };

    /// Extend on both ends.
    pub const EXTEND: Self = Self {
        left: Extrapolate::Extend,
        right: Extrapolate::Extend,
    };

    /// Replace the left-end policy.
    pub const fn left(mut self, left: Extrapolate) -> Self {
        self.left = left;
        self
    }

    /// Replace the right-end policy.
    pub const fn right(mut self, right: Extrapolate) -> Self {
        self.right = right;
        self
    }
}

/// Validated, borrowed breakpoint table: `frames[i] -> values[i]`.
///
/// Tables are built ad hoc for each property on each frame, so this borrows instead of owning.
#[derive(Clone, Copy, Debug)]
pub struct Breakpoints<'a> {
    frames: &'a [f64],
    values: &'a [f64],
}

impl<'a> Breakpoints<'a> {
    /// Validate and wrap a table.
    ///
    /// Requires equal lengths, at least two entries, finite numbers and non-decreasing frames.
    /// Repeated frames are allowed and act as a step.
    pub fn new(frames: &'a [f64], values: &'a [f64]) -> ReelResult<Self> {
        if frames.len() != values.len() {
            return Err(ReelError::animation(format!(
                "breakpoint table has {} frames but {} values",
                frames.len(),
                values.len()
            )));
        }
        if frames.len() < 2 {
            return Err(ReelError::animation(
                "breakpoint table needs at least two entries",
            ));
        }
        if frames.iter().chain(values).any(|v| !v.is_finite()) {
            return Err(ReelError::animation(
                "breakpoint table entries must be finite",
            ));
        }
        if !frames.windows(2).all(|w| w[0] <= w[1]) {
            return Err(ReelError::animation(format!(
                "breakpoint frames must be non-decreasing: {frames:?}"
            )));
        }
        Ok(Self { frames, values })
    }

    /// Sample the table at `x`. Never fails; out-of-range input follows `opts`.
    pub fn sample(&self, x: f64, opts: InterpOpts) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let n = self.frames.len();
        let first = self.frames[0];
        let last = self.frames[n - 1];

        if x < first {
            return match opts.left {
                Extrapolate::Clamp => self.values[0],
                Extrapolate::Extend => self.extend(x, 0),
            };
        }
        if x >= last {
            if x == last {
                return self.values[n - 1];
            }
            return match opts.right {
                Extrapolate::Clamp => self.values[n - 1],
                Extrapolate::Extend => self.extend(x, n - 2),
            };
        }

        // first <= x < last, so 1 <= idx <= n - 1 and frames[idx] > x >= frames[idx - 1].
        let idx = self.frames.partition_point(|&f| f <= x);
        let (fa, fb) = (self.frames[idx - 1], self.frames[idx]);
        let (va, vb) = (self.values[idx - 1], self.values[idx]);
        let t = (x - fa) / (fb - fa);
        va + (vb - va) * t
    }

    fn extend(&self, x: f64, seg: usize) -> f64 {
        let (fa, fb) = (self.frames[seg], self.frames[seg + 1]);
        let (va, vb) = (self.values[seg], self.values[seg + 1]);
        let span = fb - fa;
        if span <= 0.0 {
            // Zero-width end span: hold the value on the side being extended.
            return if x < fa { va } else { vb };
        }
        va + (x - fa) * (vb - va) / span
    }
}

/// Map `x` through the table `frames -> values`.
///
/// Only a malformed table is an error; any `x` (negative local frames, frames past a scene end)
/// is answered according to `opts`.
pub fn interpolate(x: f64, frames: &[f64], values: &[f64], opts: InterpOpts) -> ReelResult<f64> {
    Ok(Breakpoints::new(frames, values)?.sample(x, opts))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
