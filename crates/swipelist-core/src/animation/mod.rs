//! Animation engine for swipelist.
//!
//! This module provides the [`AnimationDriver`] seam that widgets animate
//! through, the motion profiles it understands, and [`FrameAnimator`], a
//! deterministic driver advanced by host-supplied frame times.
//!
//! # Motion Profiles
//!
//! - [`MotionProfile::Spring`] - damped spring, no fixed duration
//! - [`MotionProfile::Timing`] - fixed duration with an [`Easing`] curve
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use swipelist_core::animation::{AnimationDriver, FrameAnimator, MotionProfile};
//!
//! let mut animator = FrameAnimator::new();
//! let offset = animator.create(0.0);
//! animator.animate_to(offset, -72.0, MotionProfile::spring(), None);
//!
//! assert!(animator.run_until_idle(Duration::from_millis(16), 1000));
//! assert_eq!(animator.value(offset), Some(-72.0));
//! ```

mod clock;
mod driver;
mod easing;
mod frame;
mod spring;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{AnimationDriver, AnimationOutcome, Completion, MotionProfile, ValueId};
pub use easing::Easing;
pub use frame::FrameAnimator;
pub use spring::{SpringParams, SpringState};
