//! Simple exponential smoother
//!
//! Two exponential moving averages run side by side over the same input:
//!
//! ```text
//! window_total += (1 - w^dt) * (speed - window_total)     w = 0.5^(1/halflife)
//! cutoff_total += (1 - c^dt) * (speed - cutoff_total)     c = 1 - sqrt(1 - w)
//! output        = min(window_total, cutoff_total)
//! ```
//!
//! Raising the per-unit coefficient to `dt` keeps the smoothing constant
//! independent of the poll interval. The cutoff track is the faster of the
//! two, so a drop in speed shows up quickly through the minimum while
//! steady-state noise is absorbed by the slower window track.

use tracing::trace;

use super::error::Result;
use super::smoother::{
    cutoff_coefficient, halflife_coefficient, time_adjusted, validate_halflife, SmootherKind,
    SmootherSnapshot,
};

/// Dual-window exponential lowpass filter
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoother {
    /// Per-unit-time retention of the window track
    window_coefficient: f64,

    /// Per-unit-time retention of the cutoff track
    cutoff_coefficient: f64,

    window_total: f64,
    cutoff_total: f64,
}

impl SimpleExponentialSmoother {
    /// Create a smoother with both accumulators at zero
    pub fn new(halflife: f64) -> Result<Self> {
        validate_halflife("smooth_halflife", halflife)?;

        let window_coefficient = halflife_coefficient(halflife);

        Ok(Self {
            window_coefficient,
            cutoff_coefficient: cutoff_coefficient(window_coefficient),
            window_total: 0.0,
            cutoff_total: 0.0,
        })
    }

    /// Feed one sample; `time_delta` must be positive
    pub fn smooth(&mut self, speed: f64, time_delta: f64) -> f64 {
        self.window_total +=
            time_adjusted(self.window_coefficient, time_delta) * (speed - self.window_total);
        self.cutoff_total +=
            time_adjusted(self.cutoff_coefficient, time_delta) * (speed - self.cutoff_total);

        trace!(
            "Simple smoother: in={:.4}, dt={:.4}, window={:.4}, cutoff={:.4}",
            speed,
            time_delta,
            self.window_total,
            self.cutoff_total
        );

        self.window_total.min(self.cutoff_total)
    }

    /// Window track coefficient
    pub fn window_coefficient(&self) -> f64 {
        self.window_coefficient
    }

    /// Cutoff track coefficient
    pub fn cutoff_coefficient(&self) -> f64 {
        self.cutoff_coefficient
    }

    /// Current accumulator values
    pub fn snapshot(&self) -> SmootherSnapshot {
        SmootherSnapshot {
            kind: SmootherKind::Simple,
            window_total: self.window_total,
            cutoff_total: self.cutoff_total,
            window_trend_total: None,
            cutoff_trend_total: None,
        }
    }
}
