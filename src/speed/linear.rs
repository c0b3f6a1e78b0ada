//! Linear (trend-aware) exponential smoother
//!
//! Damped double exponential smoothing applied to a window track and a
//! cutoff track, combined by minimum like the simple smoother. Each track
//! extrapolates its own trend before blending in the new sample, so the
//! estimate keeps up with sustained acceleration instead of lagging it.
//!
//! # Per-track update
//!
//! ```text
//! old    = total
//! total += damping * trend * dt
//! total += (1 - coefficient^dt) * (speed - total)
//! total  = max(total, 0)
//! trend *= damping
//! trend += (1 - trend_coefficient^dt) * ((total - old) / dt - trend)
//! ```
//!
//! Only the total is floored at zero. The trend accumulator may go
//! negative; that is how a deceleration is carried forward.

use tracing::trace;

use super::error::{Result, SpeedError};
use super::smoother::{
    cutoff_coefficient, halflife_coefficient, time_adjusted, validate_halflife, SmootherKind,
    SmootherSnapshot,
};

/// Halflife of the trend estimate, independent of the smoothing halflife
pub const TREND_HALFLIFE: f64 = 1.25;

/// Attenuation applied to the trend projection and to the trend itself
pub const TREND_DAMPING: f64 = 0.75;

/// One level-plus-trend exponential filter
#[derive(Debug, Clone)]
struct TrendTrack {
    coefficient: f64,
    trend_coefficient: f64,
    total: f64,
    trend_total: f64,
}

impl TrendTrack {
    fn new(coefficient: f64, trend_coefficient: f64) -> Self {
        Self {
            coefficient,
            trend_coefficient,
            total: 0.0,
            trend_total: 0.0,
        }
    }

    fn advance(&mut self, speed: f64, time_delta: f64, damping: f64) -> f64 {
        let old_total = self.total;

        let trend_estimate = self.trend_total * time_delta;
        self.total += damping * trend_estimate;
        self.total += time_adjusted(self.coefficient, time_delta) * (speed - self.total);

        // A projected trend must not carry the estimate below zero
        self.total = self.total.max(0.0);

        self.trend_total *= damping;
        self.trend_total += time_adjusted(self.trend_coefficient, time_delta)
            * ((self.total - old_total) / time_delta - self.trend_total);

        self.total
    }
}

/// Dual-window exponential lowpass with damped trend correction
#[derive(Debug, Clone)]
pub struct LinearExponentialSmoother {
    window: TrendTrack,
    cutoff: TrendTrack,
    trend_damping: f64,
}

impl LinearExponentialSmoother {
    /// Create a smoother using the fixed trend halflife and damping
    pub fn new(halflife: f64) -> Result<Self> {
        Self::with_trend(halflife, TREND_HALFLIFE, TREND_DAMPING)
    }

    /// Create a smoother with explicit trend parameters
    ///
    /// `trend_damping` must lie strictly inside (0, 1).
    pub fn with_trend(halflife: f64, trend_halflife: f64, trend_damping: f64) -> Result<Self> {
        validate_halflife("smooth_halflife", halflife)?;
        validate_halflife("trend_halflife", trend_halflife)?;
        if trend_damping.is_nan() || trend_damping <= 0.0 || trend_damping >= 1.0 {
            return Err(SpeedError::InvalidConfiguration(format!(
                "trend_damping must lie in (0, 1), got {}",
                trend_damping
            )));
        }

        let window_coefficient = halflife_coefficient(halflife);
        let window_trend_coefficient = halflife_coefficient(trend_halflife);

        Ok(Self {
            window: TrendTrack::new(window_coefficient, window_trend_coefficient),
            cutoff: TrendTrack::new(
                cutoff_coefficient(window_coefficient),
                cutoff_coefficient(window_trend_coefficient),
            ),
            trend_damping,
        })
    }

    /// Feed one sample; `time_delta` must be positive
    pub fn smooth(&mut self, speed: f64, time_delta: f64) -> f64 {
        let window_total = self.window.advance(speed, time_delta, self.trend_damping);
        let cutoff_total = self.cutoff.advance(speed, time_delta, self.trend_damping);

        trace!(
            "Linear smoother: in={:.4}, dt={:.4}, window={:.4} ({:+.4}), cutoff={:.4} ({:+.4})",
            speed,
            time_delta,
            window_total,
            self.window.trend_total,
            cutoff_total,
            self.cutoff.trend_total
        );

        window_total.min(cutoff_total)
    }

    /// Damping factor in use
    pub fn trend_damping(&self) -> f64 {
        self.trend_damping
    }

    /// Current accumulator values
    pub fn snapshot(&self) -> SmootherSnapshot {
        SmootherSnapshot {
            kind: SmootherKind::Linear,
            window_total: self.window.total,
            cutoff_total: self.cutoff.total,
            window_trend_total: Some(self.window.trend_total),
            cutoff_trend_total: Some(self.cutoff.trend_total),
        }
    }
}
