//! Horizontal swipe recognition for a single row.
//!
//! A [`GestureTracker`] turns a touch sequence into a horizontal drag
//! decision. Every gesture starts `Undecided`; the first sample that moves
//! past the claim threshold decides the direction:
//!
//! - mostly vertical: the gesture is `Rejected` and left to the scroll view
//! - otherwise: the gesture becomes a `HorizontalDrag` and the row claims it
//!
//! During a drag the tracker reports the offset the row should follow. Any
//! rightward displacement forces the offset to `0`; leftward displacement is
//! clamped to `[-hidden_width, 0]`. On release the row opens only when the
//! finger was moving left faster than the velocity threshold.
//!
//! # Usage
//!
//! ```
//! use swipelist::gesture::{GestureTracker, MoveOutcome, ReleaseOutcome, SnapDecision, TouchSample};
//!
//! let mut tracker = GestureTracker::new();
//! tracker.begin(TouchSample::at_millis(200.0, 20.0, 0));
//!
//! let outcome = tracker.update(TouchSample::at_millis(190.0, 21.0, 16));
//! assert_eq!(outcome, MoveOutcome::Claimed { offset: -10.0 });
//!
//! let release = tracker.release_with_velocity(TouchSample::at_millis(120.0, 21.0, 48), -0.3);
//! assert_eq!(release.decision(), Some(SnapDecision::Open));
//! ```

pub mod velocity;

use std::time::Duration;

use swipelist_core::logging::targets;

pub use velocity::VelocityTracker;

use crate::config::{DEFAULT_HIDDEN_AREA_WIDTH, SwipeConfig};

/// Default distance a touch must travel before its direction is decided.
///
/// The decision is made by the first sample whose horizontal or vertical
/// displacement exceeds this value.
pub const DEFAULT_CLAIM_THRESHOLD: f64 = 2.0;

/// Default release velocity, in units per millisecond, above which a leftward
/// release opens the row.
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.2;

/// A position in row coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One touch sample delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    /// Touch position.
    pub position: Point,
    /// Monotonic timestamp of the sample.
    pub time: Duration,
}

impl TouchSample {
    /// Create a sample.
    pub fn new(position: Point, time: Duration) -> Self {
        Self { position, time }
    }

    /// Create a sample at `(x, y)` timestamped `ms` milliseconds.
    pub fn at_millis(x: f64, y: f64, ms: u64) -> Self {
        Self::new(Point::new(x, y), Duration::from_millis(ms))
    }
}

/// Where the tracker is in the current touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerState {
    /// No touch in progress.
    #[default]
    Idle,
    /// Touch down, direction not decided yet.
    Undecided,
    /// The row owns the gesture.
    HorizontalDrag,
    /// The gesture belongs to someone else until the touch ends.
    Rejected,
}

/// Where a released row should settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDecision {
    /// Snap to `-hidden_width`.
    Open,
    /// Snap to `0`.
    Close,
}

/// Result of feeding a move sample to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No touch in progress.
    Ignored,
    /// Still within the claim threshold.
    Undecided,
    /// The gesture is vertical; the row does not react to it.
    Rejected,
    /// This sample claimed the gesture. Fired once per gesture.
    Claimed {
        /// Offset the row should jump to.
        offset: f64,
    },
    /// The claimed drag moved.
    Dragged {
        /// Offset the row should jump to.
        offset: f64,
    },
}

impl MoveOutcome {
    /// Offset the row should follow, if the row owns the gesture.
    pub fn offset(&self) -> Option<f64> {
        match *self {
            Self::Claimed { offset } | Self::Dragged { offset } => Some(offset),
            _ => None,
        }
    }

    /// Whether the row owns the gesture after this sample.
    pub fn is_claimed(&self) -> bool {
        self.offset().is_some()
    }
}

/// Result of ending a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// No effect on the row: no touch in progress, a rejected gesture, or an
    /// unclaimed gesture that was cancelled.
    Ignored,
    /// The touch never left the claim threshold.
    Tap,
    /// A claimed drag ended.
    Settle {
        /// Where the row should settle.
        decision: SnapDecision,
        /// Final horizontal displacement.
        dx: f64,
        /// Release velocity in units per millisecond.
        velocity_x: f64,
    },
}

impl ReleaseOutcome {
    /// The snap decision of a claimed drag.
    pub fn decision(&self) -> Option<SnapDecision> {
        match *self {
            Self::Settle { decision, .. } => Some(decision),
            _ => None,
        }
    }
}

/// Thresholds used by a [`GestureTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Maximum reveal distance.
    pub hidden_width: f64,
    /// Displacement that decides the direction.
    pub claim_threshold: f64,
    /// Leftward release speed that opens the row.
    pub velocity_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            hidden_width: DEFAULT_HIDDEN_AREA_WIDTH,
            claim_threshold: DEFAULT_CLAIM_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
        }
    }
}

impl From<&SwipeConfig> for GestureConfig {
    fn from(config: &SwipeConfig) -> Self {
        Self {
            hidden_width: config.hidden_area_width,
            claim_threshold: config.directional_threshold,
            velocity_threshold: config.velocity_threshold,
        }
    }
}

/// Per-row touch state machine.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    config: GestureConfig,
    state: TrackerState,
    start: Point,
    last_dx: f64,
    velocity: VelocityTracker,
}

impl GestureTracker {
    /// Creates a tracker with default thresholds.
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Creates a tracker with the given thresholds.
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            state: TrackerState::Idle,
            start: Point::default(),
            last_dx: 0.0,
            velocity: VelocityTracker::new(),
        }
    }

    /// The thresholds in use.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Whether the row owns the current gesture.
    pub fn is_claimed(&self) -> bool {
        self.state == TrackerState::HorizontalDrag
    }

    /// Start a touch sequence. Restarts tracking if one is already active.
    pub fn begin(&mut self, sample: TouchSample) {
        if self.state != TrackerState::Idle {
            tracing::trace!(target: targets::GESTURE, previous = ?self.state, "restarting gesture");
        }
        self.state = TrackerState::Undecided;
        self.start = sample.position;
        self.last_dx = 0.0;
        self.velocity.reset();
        self.velocity.push(sample);
    }

    /// Feed a move sample.
    pub fn update(&mut self, sample: TouchSample) -> MoveOutcome {
        let dx = sample.position.x - self.start.x;
        let dy = sample.position.y - self.start.y;

        match self.state {
            TrackerState::Idle => MoveOutcome::Ignored,
            TrackerState::Rejected => MoveOutcome::Rejected,
            TrackerState::Undecided => {
                self.velocity.push(sample);
                if dx.abs().max(dy.abs()) <= self.config.claim_threshold {
                    return MoveOutcome::Undecided;
                }
                if dy.abs() > dx.abs() {
                    tracing::debug!(target: targets::GESTURE, dx, dy, "vertical gesture rejected");
                    self.state = TrackerState::Rejected;
                    return MoveOutcome::Rejected;
                }
                self.state = TrackerState::HorizontalDrag;
                let offset = self.drag_offset(dx);
                tracing::debug!(target: targets::GESTURE, dx, dy, offset, "horizontal drag claimed");
                MoveOutcome::Claimed { offset }
            }
            TrackerState::HorizontalDrag => {
                self.velocity.push(sample);
                let offset = self.drag_offset(dx);
                tracing::trace!(target: targets::GESTURE, dx, offset, "drag");
                MoveOutcome::Dragged { offset }
            }
        }
    }

    /// End the touch sequence, estimating velocity from the recorded samples.
    pub fn release(&mut self, sample: TouchSample) -> ReleaseOutcome {
        if matches!(self.state, TrackerState::Undecided | TrackerState::HorizontalDrag) {
            self.velocity.push(sample);
        }
        let velocity_x = self.velocity.velocity_x();
        self.release_with_velocity(sample, velocity_x)
    }

    /// End the touch sequence with a velocity reported by the host, in units
    /// per millisecond.
    pub fn release_with_velocity(&mut self, sample: TouchSample, velocity_x: f64) -> ReleaseOutcome {
        let state = std::mem::take(&mut self.state);
        self.velocity.reset();

        match state {
            TrackerState::Idle | TrackerState::Rejected => ReleaseOutcome::Ignored,
            TrackerState::Undecided => {
                tracing::trace!(target: targets::GESTURE, "tap");
                ReleaseOutcome::Tap
            }
            TrackerState::HorizontalDrag => {
                let dx = sample.position.x - self.start.x;
                let decision = self.decide(dx, velocity_x);
                tracing::debug!(target: targets::GESTURE, dx, velocity_x, ?decision, "drag released");
                ReleaseOutcome::Settle {
                    decision,
                    dx,
                    velocity_x,
                }
            }
        }
    }

    /// The host cancelled the touch. A claimed drag settles closed; anything
    /// else ends with no effect.
    pub fn cancel(&mut self) -> ReleaseOutcome {
        let state = std::mem::take(&mut self.state);
        self.velocity.reset();

        if state == TrackerState::HorizontalDrag {
            tracing::debug!(target: targets::GESTURE, "claimed drag cancelled");
            ReleaseOutcome::Settle {
                decision: SnapDecision::Close,
                dx: self.last_dx,
                velocity_x: 0.0,
            }
        } else {
            ReleaseOutcome::Ignored
        }
    }

    /// Ignore the rest of the current touch sequence.
    pub fn abandon(&mut self) {
        if self.state != TrackerState::Idle {
            tracing::trace!(target: targets::GESTURE, previous = ?self.state, "gesture abandoned");
            self.state = TrackerState::Rejected;
        }
        self.velocity.reset();
    }

    fn drag_offset(&mut self, dx: f64) -> f64 {
        // Any rightward motion closes; leftward motion reveals up to the width.
        self.last_dx = dx;
        if dx > 0.0 {
            0.0
        } else {
            dx.max(-self.config.hidden_width).min(0.0)
        }
    }

    fn decide(&self, dx: f64, velocity_x: f64) -> SnapDecision {
        if velocity_x < -self.config.velocity_threshold && dx < 0.0 {
            SnapDecision::Open
        } else {
            SnapDecision::Close
        }
    }
}
