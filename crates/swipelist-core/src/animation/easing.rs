//! Easing curves for fixed-duration animations.
//!
//! An easing curve maps linear progress (0.0 to 1.0) to eased progress.

use std::f64::consts::PI;

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    #[default]
    EaseInOut,
    /// Cubic ease-out (more pronounced than quadratic).
    EaseOutCubic,
    /// Cubic ease-in-out (more pronounced than quadratic).
    EaseInOutCubic,
    /// Sinusoidal ease-in-out.
    EaseInOutSine,
}

impl Easing {
    /// Apply the curve to a progress value. Input is clamped to `[0, 1]`.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// Interpolate between `start` and `end` at progress `t`.
    #[inline]
    pub fn interpolate(self, start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * self.apply(t)
    }
}
