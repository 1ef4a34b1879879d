//! Swipeable-row list controller.
//!
//! swipelist implements the state behind a list whose rows can be dragged
//! left to reveal a hidden action area. Rendering and virtualization belong
//! to the host; this crate decides what each row does with a touch and keeps
//! the rows consistent with each other:
//!
//! - a row claims a touch only once it is clearly horizontal; vertical
//!   gestures are left to the scroll view
//! - at most one row is open at any time; claiming a row or scrolling the
//!   list closes the open one
//! - deleting a row collapses it first and only then calls back so the host
//!   can remove the item from its data source
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use swipelist::{SwipeConfig, SwipeList, RowPhase, TouchSample};
//!
//! let mut list = SwipeList::new(SwipeConfig::default()).unwrap();
//! let a = list.mount("a");
//! list.mount("b");
//!
//! // A quick leftward swipe on row "a".
//! list.touch_start(a, TouchSample::at_millis(200.0, 20.0, 0));
//! assert!(list.touch_move(a, TouchSample::at_millis(150.0, 21.0, 16)));
//! list.touch_end_with_velocity(a, TouchSample::at_millis(110.0, 21.0, 32), -0.5);
//! list.run_until_idle(Duration::from_millis(16), 200);
//!
//! assert_eq!(list.phase(&"a"), Some(RowPhase::OpenSnapped));
//! assert_eq!(list.offset_x(&"a"), Some(-72.0));
//!
//! // Opening "b" closes "a".
//! list.open(&"b");
//! assert_eq!(list.phase(&"a"), Some(RowPhase::ClosedSnapped));
//! ```
//!
//! # Modules
//!
//! - [`gesture`]: touch interpretation for a single row
//! - [`animator`]: offset and height animation for a single row
//! - [`row`]: the per-row controller
//! - [`registry`]: the single-open-row bookkeeping
//! - [`list`]: the coordinator hosts talk to
//! - [`config`]: tunables, loadable from TOML

pub mod animator;
pub mod config;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod list;
pub mod registry;
pub mod row;

pub use animator::RowAnimator;
pub use config::{SpringConfig, SwipeConfig};
pub use error::{Error, Result};
pub use gesture::{
    GestureConfig, GestureTracker, MoveOutcome, Point, ReleaseOutcome, SnapDecision,
    TouchSample, TrackerState, VelocityTracker,
};
pub use layout::ItemLayout;
pub use list::{HiddenAreaHandler, RowId, RowRef, SwipeList};
pub use registry::{RowHost, RowLookup, RowRegistry};
pub use row::{RowController, RowEvent, RowPhase};

pub use swipelist_core::{
    AnimationDriver, AnimationOutcome, Clock, Easing, FrameAnimator, ManualClock, MotionProfile,
    Signal, SpringParams, SystemClock,
};
