//! Logging facilities for swipelist.
//!
//! swipelist uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! tracing_subscriber::fmt()
//!     .with_env_filter(EnvFilter::new("swipelist=debug"))
//!     .init();
//! ```
//!
//! Decisions (claims, snap decisions, registry closes, deletes) are logged at
//! `debug`. Per-sample and per-frame detail is logged at `trace`.

/// Span names used throughout swipelist for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Animation frame processing span.
    pub const FRAME: &str = "swipelist::frame";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "swipelist_core::signal";
    /// Animation engine target.
    pub const ANIMATION: &str = "swipelist::animation";
    /// Gesture interpretation target.
    pub const GESTURE: &str = "swipelist::gesture";
    /// Row registry target.
    pub const REGISTRY: &str = "swipelist::registry";
    /// List coordinator target.
    pub const LIST: &str = "swipelist::list";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Wrap a frame or a burst of event handling in a `PerfSpan` to measure it
/// with a profiling subscriber.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "swipelist::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
