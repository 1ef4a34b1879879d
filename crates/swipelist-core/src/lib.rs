//! Core systems for swipelist.
//!
//! This crate provides the foundational components the swipeable list is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe notifications to the host
//! - **Animation Engine**: The [`AnimationDriver`] seam, spring and eased
//!   motion profiles, and a deterministic frame-driven driver
//! - **Clocks**: Real and manual frame-time sources
//! - **Logging**: `tracing` targets for each subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use swipelist_core::Signal;
//!
//! let row_opened = Signal::<u32>::new();
//!
//! let conn_id = row_opened.connect(|row| {
//!     println!("Row {} opened", row);
//! });
//!
//! row_opened.emit(3);
//! row_opened.disconnect(conn_id);
//! ```
//!
//! # Animation Example
//!
//! ```
//! use std::time::Duration;
//! use swipelist_core::animation::{AnimationDriver, FrameAnimator, MotionProfile};
//!
//! let mut animator = FrameAnimator::new();
//! let height = animator.create(64.0);
//! animator.animate_to(height, 0.0, MotionProfile::timing(Duration::from_millis(600)), None);
//!
//! animator.tick(Duration::ZERO);
//! animator.tick(Duration::from_millis(600));
//! assert_eq!(animator.value(height), Some(0.0));
//! ```

pub mod animation;
pub mod logging;
pub mod signal;

pub use animation::{
    AnimationDriver, AnimationOutcome, Clock, Completion, Easing, FrameAnimator, ManualClock,
    MotionProfile, SpringParams, SystemClock, ValueId,
};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
