//! Release velocity estimation.

use std::collections::VecDeque;
use std::time::Duration;

use super::TouchSample;

/// Samples older than this, relative to the newest one, are discarded.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Upper bound on retained samples.
const MAX_SAMPLES: usize = 20;

/// Estimates horizontal velocity from recent touch samples.
///
/// Velocity is reported in position units per millisecond, the unit used by
/// [`SwipeConfig::velocity_threshold`](crate::SwipeConfig::velocity_threshold).
/// The estimate spans the samples of the last 100 ms; when samples are sparser
/// than that, the two most recent samples are used.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<TouchSample>,
}

impl VelocityTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample. Samples must arrive in time order; one that goes back
    /// in time restarts the estimate.
    pub fn push(&mut self, sample: TouchSample) {
        if self
            .samples
            .back()
            .is_some_and(|last| sample.time < last.time)
        {
            self.samples.clear();
        }
        self.samples.push_back(sample);

        while self.samples.len() > 2 {
            let Some(oldest) = self.samples.front() else {
                break;
            };
            if sample.time - oldest.time > VELOCITY_WINDOW || self.samples.len() > MAX_SAMPLES {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Horizontal velocity in units per millisecond. Zero with fewer than two
    /// samples or no elapsed time.
    pub fn velocity_x(&self) -> f64 {
        let (Some(first), Some(last)) = (self.samples.front(), self.samples.back()) else {
            return 0.0;
        };
        let elapsed_ms = (last.time - first.time).as_secs_f64() * 1000.0;
        if elapsed_ms <= 0.0 {
            return 0.0;
        }
        (last.position.x - first.position.x) / elapsed_ms
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples are retained.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Forget every sample.
    pub fn reset(&mut self) {
        self.samples.clear();
    }
}
