//! Offset and height animation for a single row.

use std::time::Duration;

use swipelist_core::animation::{AnimationDriver, Completion, MotionProfile, ValueId};
use swipelist_core::logging::targets;
use swipelist_core::{Easing, SpringParams};

use crate::config::SwipeConfig;

/// Default duration of the delete collapse in milliseconds.
pub const DEFAULT_COLLAPSE_DURATION_MS: u64 = 600;

/// Drives a row's horizontal offset and height through an [`AnimationDriver`].
///
/// The animator owns two values in the driver:
///
/// - the offset, snapped to `0` or `-hidden_width` by a spring and followed
///   directly while a drag is in progress
/// - the height, which only ever moves once: the fixed-duration collapse that
///   precedes deletion
///
/// Once a collapse has started the offset can no longer be moved.
#[derive(Debug)]
pub struct RowAnimator {
    offset: ValueId,
    height: ValueId,
    hidden_width: f64,
    spring: SpringParams,
    collapse: MotionProfile,
    collapsing: bool,
}

impl RowAnimator {
    /// Create the row's values in `driver`: offset `0`, height `line_height`.
    pub fn new(driver: &mut dyn AnimationDriver, config: &SwipeConfig) -> Self {
        Self {
            offset: driver.create(0.0),
            height: driver.create(config.line_height),
            hidden_width: config.hidden_area_width,
            spring: config.spring_params(),
            collapse: MotionProfile::Timing {
                duration: config.collapse_duration(),
                easing: Easing::EaseInOut,
            },
            collapsing: false,
        }
    }

    /// Handle of the offset value.
    pub fn offset_id(&self) -> ValueId {
        self.offset
    }

    /// Handle of the height value.
    pub fn height_id(&self) -> ValueId {
        self.height
    }

    /// Current horizontal offset.
    pub fn offset_x(&self, driver: &dyn AnimationDriver) -> f64 {
        driver.value(self.offset).unwrap_or(0.0)
    }

    /// Current height.
    pub fn height(&self, driver: &dyn AnimationDriver) -> f64 {
        driver.value(self.height).unwrap_or(0.0)
    }

    /// Whether the delete collapse has started.
    pub fn is_collapsing(&self) -> bool {
        self.collapsing
    }

    /// Duration of the delete collapse.
    pub fn collapse_duration(&self) -> Duration {
        match self.collapse {
            MotionProfile::Timing { duration, .. } => duration,
            MotionProfile::Spring(_) => Duration::ZERO,
        }
    }

    /// Snap the offset to `-hidden_width`.
    ///
    /// Returns `false` if nothing was started: the row is collapsing or
    /// already resting there.
    pub fn open(&mut self, driver: &mut dyn AnimationDriver) -> bool {
        self.snap_to(driver, -self.hidden_width)
    }

    /// Snap the offset to `0`.
    ///
    /// Returns `false` if nothing was started: the row is collapsing or
    /// already resting there.
    pub fn close(&mut self, driver: &mut dyn AnimationDriver) -> bool {
        self.snap_to(driver, 0.0)
    }

    /// Move the offset to `offset` immediately, replacing any snap in flight.
    pub fn track(&mut self, driver: &mut dyn AnimationDriver, offset: f64) {
        if self.collapsing {
            return;
        }
        driver.set(self.offset, offset);
    }

    /// Animate the height to zero, then call `on_complete`.
    ///
    /// Any offset motion is stopped where it is. `on_complete` receives the
    /// outcome of the height animation and runs exactly once. A second
    /// collapse is rejected and its callback dropped.
    pub fn collapse(&mut self, driver: &mut dyn AnimationDriver, on_complete: Completion) -> bool {
        if self.collapsing {
            tracing::debug!(target: targets::ANIMATION, "collapse already running");
            return false;
        }
        self.collapsing = true;
        driver.cancel(self.offset);
        driver.animate_to(self.height, 0.0, self.collapse, Some(on_complete));
        true
    }

    /// Release both values. A running collapse completes as interrupted.
    pub fn detach(self, driver: &mut dyn AnimationDriver) {
        driver.release(self.offset);
        driver.release(self.height);
    }

    fn snap_to(&mut self, driver: &mut dyn AnimationDriver, target: f64) -> bool {
        if self.collapsing {
            tracing::trace!(target: targets::ANIMATION, target, "snap ignored while collapsing");
            return false;
        }
        if !driver.is_animating(self.offset) && driver.value(self.offset) == Some(target) {
            return false;
        }
        driver.animate_to(self.offset, target, MotionProfile::Spring(self.spring), None);
        true
    }
}
