//! Per-row controller.
//!
//! A [`RowController`] combines a [`GestureTracker`] with a [`RowAnimator`]
//! and keeps the row's [`RowPhase`]. It knows nothing about other rows: the
//! events it returns ([`RowEvent`]) are what the owning list uses to keep at
//! most one row open.

use std::fmt;

use swipelist_core::animation::{AnimationDriver, AnimationOutcome};
use swipelist_core::logging::targets;

use crate::animator::RowAnimator;
use crate::config::SwipeConfig;
use crate::gesture::{
    GestureConfig, GestureTracker, MoveOutcome, ReleaseOutcome, SnapDecision, TouchSample,
    TrackerState,
};

/// Lifecycle phase of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPhase {
    /// Freshly mounted, never moved.
    #[default]
    Idle,
    /// Following a claimed drag.
    Dragging,
    /// Open or snapping open.
    OpenSnapped,
    /// Closed or snapping closed.
    ClosedSnapped,
    /// Collapsing before removal. Final.
    Deleting,
}

/// Events a row reports upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    /// The row claimed a horizontal drag.
    Claimed,
    /// A claimed drag was released with the given decision.
    Released(SnapDecision),
    /// A touch ended without ever being claimed or rejected.
    Tapped,
}

/// State machine for one mounted row.
pub struct RowController<K> {
    key: K,
    tracker: GestureTracker,
    animator: RowAnimator,
    phase: RowPhase,
}

impl<K: fmt::Debug> fmt::Debug for RowController<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowController")
            .field("key", &self.key)
            .field("phase", &self.phase)
            .field("gesture", &self.tracker.state())
            .finish()
    }
}

impl<K: fmt::Debug> RowController<K> {
    /// Create a controller and its animated values.
    pub fn new(key: K, driver: &mut dyn AnimationDriver, config: &SwipeConfig) -> Self {
        Self {
            key,
            tracker: GestureTracker::with_config(GestureConfig::from(config)),
            animator: RowAnimator::new(driver, config),
            phase: RowPhase::Idle,
        }
    }

    /// The item key this row renders.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Current phase.
    pub fn phase(&self) -> RowPhase {
        self.phase
    }

    /// Whether the row is open or snapping open.
    pub fn is_open(&self) -> bool {
        self.phase == RowPhase::OpenSnapped
    }

    /// Whether the row is collapsing before removal.
    pub fn is_deleting(&self) -> bool {
        self.phase == RowPhase::Deleting
    }

    /// State of the current touch sequence.
    pub fn gesture_state(&self) -> TrackerState {
        self.tracker.state()
    }

    /// The row's animator.
    pub fn animator(&self) -> &RowAnimator {
        &self.animator
    }

    /// Current horizontal offset.
    pub fn offset_x(&self, driver: &dyn AnimationDriver) -> f64 {
        self.animator.offset_x(driver)
    }

    /// Current height.
    pub fn height(&self, driver: &dyn AnimationDriver) -> f64 {
        self.animator.height(driver)
    }

    /// Touch down on the row.
    pub fn touch_start(&mut self, sample: TouchSample) {
        if self.is_deleting() {
            return;
        }
        self.tracker.begin(sample);
    }

    /// Touch moved. Returns [`RowEvent::Claimed`] on the sample that claims
    /// the gesture.
    #[tracing::instrument(skip_all, target = "swipelist::gesture", level = "trace")]
    pub fn touch_move(
        &mut self,
        driver: &mut dyn AnimationDriver,
        sample: TouchSample,
    ) -> Option<RowEvent> {
        if self.is_deleting() {
            return None;
        }
        match self.tracker.update(sample) {
            MoveOutcome::Claimed { offset } => {
                self.phase = RowPhase::Dragging;
                self.animator.track(driver, offset);
                Some(RowEvent::Claimed)
            }
            MoveOutcome::Dragged { offset } => {
                // A close issued by the list mid-drag is overridden by the finger.
                self.phase = RowPhase::Dragging;
                self.animator.track(driver, offset);
                None
            }
            MoveOutcome::Ignored | MoveOutcome::Undecided | MoveOutcome::Rejected => None,
        }
    }

    /// Touch lifted; velocity is estimated from the recorded samples.
    pub fn touch_end(
        &mut self,
        driver: &mut dyn AnimationDriver,
        sample: TouchSample,
    ) -> Option<RowEvent> {
        if self.is_deleting() {
            return None;
        }
        let outcome = self.tracker.release(sample);
        self.settle(driver, outcome)
    }

    /// Touch lifted with a fling velocity (units per millisecond) reported
    /// by the host.
    pub fn touch_end_with_velocity(
        &mut self,
        driver: &mut dyn AnimationDriver,
        sample: TouchSample,
        velocity_x: f64,
    ) -> Option<RowEvent> {
        if self.is_deleting() {
            return None;
        }
        let outcome = self.tracker.release_with_velocity(sample, velocity_x);
        self.settle(driver, outcome)
    }

    /// The host cancelled the touch.
    pub fn touch_cancel(&mut self, driver: &mut dyn AnimationDriver) -> Option<RowEvent> {
        if self.is_deleting() {
            return None;
        }
        let outcome = self.tracker.cancel();
        self.settle(driver, outcome)
    }

    /// Snap open.
    ///
    /// Returns `true` if the row changed phase or started moving. Ignored
    /// while deleting.
    pub fn open(&mut self, driver: &mut dyn AnimationDriver) -> bool {
        if self.is_deleting() {
            tracing::trace!(target: targets::LIST, key = ?self.key, "open ignored while deleting");
            return false;
        }
        let started = self.animator.open(driver);
        let changed = self.phase != RowPhase::OpenSnapped;
        self.phase = RowPhase::OpenSnapped;
        started || changed
    }

    /// Snap closed.
    ///
    /// Closing a row that is already at rest at `0` is a no-op. Returns
    /// `true` if the row changed phase or started moving. Ignored while
    /// deleting.
    pub fn close(&mut self, driver: &mut dyn AnimationDriver) -> bool {
        if self.is_deleting() {
            tracing::trace!(target: targets::LIST, key = ?self.key, "close ignored while deleting");
            return false;
        }
        let started = self.animator.close(driver);
        if !started && matches!(self.phase, RowPhase::Idle | RowPhase::ClosedSnapped) {
            return false;
        }
        self.phase = RowPhase::ClosedSnapped;
        true
    }

    /// Collapse the row, then call `on_complete`.
    ///
    /// Delete wins over anything in progress: an offset motion is frozen
    /// where it is and the rest of the touch sequence is ignored.
    /// `on_complete` runs exactly once, after the collapse reaches zero or,
    /// if the row is unmounted first, when its values are released. This is
    /// the only safe point to remove the item from the data source.
    ///
    /// Returns `false`, dropping `on_complete` without running it, if the row
    /// is already deleting.
    pub fn delete_row<F>(&mut self, driver: &mut dyn AnimationDriver, on_complete: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        if self.is_deleting() {
            tracing::debug!(target: targets::LIST, key = ?self.key, "delete ignored, row already deleting");
            return false;
        }
        tracing::debug!(target: targets::LIST, key = ?self.key, from = ?self.phase, "delete started");
        self.tracker.abandon();
        self.phase = RowPhase::Deleting;
        self.animator.collapse(
            driver,
            Box::new(move |outcome| {
                if outcome == AnimationOutcome::Interrupted {
                    tracing::debug!(target: targets::LIST, "collapse interrupted by unmount");
                } else {
                    tracing::debug!(target: targets::LIST, "collapse finished");
                }
                on_complete();
            }),
        )
    }

    /// Collapse the row without a completion callback.
    pub fn delete(&mut self, driver: &mut dyn AnimationDriver) -> bool {
        self.delete_row(driver, || {})
    }

    /// Release the row's animated values.
    pub fn detach(self, driver: &mut dyn AnimationDriver) {
        self.animator.detach(driver);
    }

    fn settle(
        &mut self,
        driver: &mut dyn AnimationDriver,
        outcome: ReleaseOutcome,
    ) -> Option<RowEvent> {
        match outcome {
            ReleaseOutcome::Ignored => None,
            ReleaseOutcome::Tap => Some(RowEvent::Tapped),
            ReleaseOutcome::Settle { decision, .. } => {
                match decision {
                    SnapDecision::Open => self.open(driver),
                    SnapDecision::Close => self.close(driver),
                };
                Some(RowEvent::Released(decision))
            }
        }
    }
}
