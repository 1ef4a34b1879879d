//! The animation engine seam.
//!
//! Widgets never animate values themselves. They create scalar values in an
//! [`AnimationDriver`] and ask it to move them toward targets using a
//! [`MotionProfile`]. Hosts plug in whatever engine they render with; the
//! crate ships [`FrameAnimator`](super::FrameAnimator), a deterministic
//! implementation advanced by explicit frame times.

use std::time::Duration;

use slotmap::new_key_type;

use super::easing::Easing;
use super::spring::SpringParams;

new_key_type! {
    /// Handle to an animated scalar owned by an [`AnimationDriver`].
    ///
    /// Handles are generational: once a value is released, its handle never
    /// aliases a value created later.
    pub struct ValueId;
}

/// How a value travels to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionProfile {
    /// Physically-responsive motion with no fixed duration.
    Spring(SpringParams),
    /// Eased interpolation over a fixed duration.
    Timing {
        /// Total duration of the motion.
        duration: Duration,
        /// Easing curve applied to progress.
        easing: Easing,
    },
}

impl MotionProfile {
    /// A spring with default parameters.
    pub fn spring() -> Self {
        Self::Spring(SpringParams::default())
    }

    /// A fixed-duration motion with the default ease-in-out curve.
    pub fn timing(duration: Duration) -> Self {
        Self::Timing {
            duration,
            easing: Easing::default(),
        }
    }
}

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// The value reached its target.
    Finished,
    /// The animation was cancelled, superseded, or its value was released.
    Interrupted,
}

impl AnimationOutcome {
    /// Returns `true` for [`AnimationOutcome::Finished`].
    pub fn is_finished(self) -> bool {
        self == Self::Finished
    }
}

/// Callback invoked exactly once when an animation ends.
pub type Completion = Box<dyn FnOnce(AnimationOutcome)>;

/// An engine that owns animated scalars and moves them over time.
///
/// Every method tolerates stale handles: reads return `None` and writes are
/// ignored. A completion passed to [`animate_to`](Self::animate_to) is
/// invoked exactly once, either with [`AnimationOutcome::Finished`] after the
/// terminal frame, or with [`AnimationOutcome::Interrupted`] when the motion
/// is cancelled, replaced, or its value is released.
pub trait AnimationDriver {
    /// Create a new value at rest.
    fn create(&mut self, initial: f64) -> ValueId;

    /// Release a value. Any in-flight motion is interrupted.
    fn release(&mut self, id: ValueId);

    /// Current value, or `None` if the handle is stale.
    fn value(&self, id: ValueId) -> Option<f64>;

    /// Jump to `value` immediately, interrupting any in-flight motion.
    fn set(&mut self, id: ValueId, value: f64);

    /// Start moving `id` toward `target`, replacing any in-flight motion.
    fn animate_to(
        &mut self,
        id: ValueId,
        target: f64,
        profile: MotionProfile,
        on_complete: Option<Completion>,
    );

    /// Stop the in-flight motion, leaving the value where it is.
    fn cancel(&mut self, id: ValueId);

    /// Whether a motion is in flight for `id`.
    fn is_animating(&self, id: ValueId) -> bool;

    /// Target of the in-flight motion, if any.
    fn target(&self, id: ValueId) -> Option<f64>;
}
