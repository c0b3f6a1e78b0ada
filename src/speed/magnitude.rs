//! Lp-norm magnitude of a pointer delta
//!
//! ```text
//! |(dx, dy)|_p = (|dx|^p + |dy|^p)^(1/p)
//! ```
//!
//! p = 2 is the Euclidean distance, p = 1 the taxicab distance and
//! p = ∞ the larger of the two axis deltas.

use super::error::{Result, SpeedError};

/// Compute the Lp-norm magnitude of a delta vector.
///
/// Fails with [`SpeedError::InvalidConfiguration`] when `p` is not a
/// positive number. The result is infinite only when the true norm exceeds
/// `f64::MAX`.
pub fn lp_magnitude(dx: f64, dy: f64, p: f64) -> Result<f64> {
    if p.is_nan() || p <= 0.0 {
        return Err(SpeedError::InvalidConfiguration(format!(
            "lp_norm must be positive, got {}",
            p
        )));
    }

    let (ax, ay) = (dx.abs(), dy.abs());

    let magnitude = if p == 2.0 {
        dx.hypot(dy)
    } else if p == 1.0 {
        ax + ay
    } else if p.is_infinite() {
        ax.max(ay)
    } else {
        // Powers are taken of the axis ratio so finite norms never overflow
        let (largest, smallest) = (ax.max(ay), ax.min(ay));
        if largest == 0.0 {
            0.0
        } else {
            largest * (1.0 + (smallest / largest).powf(p)).powf(p.recip())
        }
    };

    Ok(magnitude)
}
