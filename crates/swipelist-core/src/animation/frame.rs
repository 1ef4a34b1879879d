//! Deterministic, frame-driven [`AnimationDriver`].

use std::fmt;
use std::time::Duration;

use slotmap::SlotMap;

use super::driver::{AnimationDriver, AnimationOutcome, Completion, MotionProfile, ValueId};
use super::easing::Easing;
use super::spring::{SpringParams, SpringState};
use crate::logging::targets;

/// Motion currently applied to a value.
enum MotionKind {
    Spring(SpringParams),
    Timing {
        from: f64,
        elapsed: Duration,
        duration: Duration,
        easing: Easing,
    },
}

struct Motion {
    target: f64,
    kind: MotionKind,
    on_complete: Option<Completion>,
    /// Frame time of the last step. `None` until the first tick after the
    /// motion started, which only latches the time base.
    last_step: Option<Duration>,
}

struct Slot {
    value: f64,
    /// Units per second, kept so a retargeted spring starts with momentum.
    velocity: f64,
    motion: Option<Motion>,
}

impl Slot {
    fn take_completion(&mut self) -> Option<Completion> {
        self.motion.take().and_then(|motion| motion.on_complete)
    }
}

/// An [`AnimationDriver`] advanced by explicit calls to [`tick`](Self::tick).
///
/// Time is whatever monotonic `Duration` the host passes in; the animator
/// never reads a clock itself. That makes it usable both behind a real
/// display-refresh callback and in tests that replay exact frame times.
///
/// A motion measures time from the first frame ticked after it started, not
/// from the last frame the animator saw. A host that stops ticking while
/// idle can start a motion after any pause without it jumping ahead.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use swipelist_core::animation::{AnimationDriver, FrameAnimator, MotionProfile};
///
/// let mut animator = FrameAnimator::new();
/// let height = animator.create(64.0);
/// animator.animate_to(height, 0.0, MotionProfile::timing(Duration::from_millis(600)), None);
///
/// animator.tick(Duration::from_secs(5));
/// assert_eq!(animator.value(height), Some(64.0));
///
/// animator.tick(Duration::from_millis(5300));
/// assert!(animator.value(height).unwrap() < 64.0);
///
/// animator.tick(Duration::from_millis(5600));
/// assert_eq!(animator.value(height), Some(0.0));
/// ```
pub struct FrameAnimator {
    values: SlotMap<ValueId, Slot>,
    now: Duration,
}

impl Default for FrameAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameAnimator")
            .field("values", &self.values.len())
            .field("active", &self.active_count())
            .field("now", &self.now)
            .finish()
    }
}

impl FrameAnimator {
    /// Create an animator whose clock starts at zero.
    pub fn new() -> Self {
        Self::starting_at(Duration::ZERO)
    }

    /// Create an animator whose clock starts at `now`.
    pub fn starting_at(now: Duration) -> Self {
        Self {
            values: SlotMap::with_key(),
            now,
        }
    }

    /// Time of the last processed frame.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of values with a motion in flight.
    pub fn active_count(&self) -> usize {
        self.values.values().filter(|slot| slot.motion.is_some()).count()
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are live.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Advance every in-flight motion to `now`.
    ///
    /// A motion started since the previous frame only records `now` as its
    /// time base and does not move yet. Completions of motions that reached
    /// their target on this frame run after all values have been updated.
    /// A `now` earlier than the previous frame is treated as a zero-length
    /// frame.
    ///
    /// Returns `true` while any motion is still in flight.
    #[tracing::instrument(skip(self), target = "swipelist::animation", level = "trace")]
    pub fn tick(&mut self, now: Duration) -> bool {
        if now < self.now {
            tracing::trace!(target: targets::ANIMATION, ?now, last = ?self.now, "frame time went backwards");
        }
        let now = now.max(self.now);
        self.now = now;

        let mut finished = Vec::new();
        for (id, slot) in &mut self.values {
            let Some(motion) = slot.motion.as_mut() else {
                continue;
            };

            let dt = match motion.last_step.replace(now) {
                Some(last) => now.saturating_sub(last),
                None => Duration::ZERO,
            };

            let done = match &mut motion.kind {
                MotionKind::Spring(params) => {
                    let mut state = SpringState {
                        position: slot.value,
                        velocity: slot.velocity,
                    };
                    let done = state.step(params, motion.target, dt);
                    slot.value = state.position;
                    slot.velocity = state.velocity;
                    done
                }
                MotionKind::Timing {
                    from,
                    elapsed,
                    duration,
                    easing,
                } => {
                    *elapsed += dt;
                    let progress = if duration.is_zero() {
                        1.0
                    } else {
                        elapsed.as_secs_f64() / duration.as_secs_f64()
                    };
                    let previous = slot.value;
                    if progress >= 1.0 {
                        slot.value = motion.target;
                        slot.velocity = 0.0;
                        true
                    } else {
                        slot.value = easing.interpolate(*from, motion.target, progress);
                        if !dt.is_zero() {
                            slot.velocity = (slot.value - previous) / dt.as_secs_f64();
                        }
                        false
                    }
                }
            };

            if done {
                tracing::trace!(target: targets::ANIMATION, ?id, value = slot.value, "motion finished");
                finished.push(slot.take_completion());
            }
        }

        for completion in finished.into_iter().flatten() {
            completion(AnimationOutcome::Finished);
        }

        self.active_count() > 0
    }

    /// Advance by `dt` relative to the last frame.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.tick(self.now + dt)
    }

    /// Tick in fixed `step`s until nothing is animating or `max_frames`
    /// frames have run. Returns `true` if the animator went idle.
    pub fn run_until_idle(&mut self, step: Duration, max_frames: usize) -> bool {
        for _ in 0..max_frames {
            if !self.advance(step) {
                return true;
            }
        }
        self.active_count() == 0
    }

    fn interrupt(completion: Option<Completion>) {
        if let Some(completion) = completion {
            completion(AnimationOutcome::Interrupted);
        }
    }
}

impl AnimationDriver for FrameAnimator {
    fn create(&mut self, initial: f64) -> ValueId {
        self.values.insert(Slot {
            value: initial,
            velocity: 0.0,
            motion: None,
        })
    }

    fn release(&mut self, id: ValueId) {
        if let Some(mut slot) = self.values.remove(id) {
            Self::interrupt(slot.take_completion());
        }
    }

    fn value(&self, id: ValueId) -> Option<f64> {
        self.values.get(id).map(|slot| slot.value)
    }

    fn set(&mut self, id: ValueId, value: f64) {
        let Some(slot) = self.values.get_mut(id) else {
            return;
        };
        let interrupted = slot.take_completion();
        slot.value = value;
        slot.velocity = 0.0;
        Self::interrupt(interrupted);
    }

    fn animate_to(
        &mut self,
        id: ValueId,
        target: f64,
        profile: MotionProfile,
        on_complete: Option<Completion>,
    ) {
        let Some(slot) = self.values.get_mut(id) else {
            tracing::trace!(target: targets::ANIMATION, ?id, "animate_to on released value");
            if let Some(completion) = on_complete {
                completion(AnimationOutcome::Interrupted);
            }
            return;
        };

        let kind = match profile {
            MotionProfile::Spring(params) => MotionKind::Spring(params),
            MotionProfile::Timing { duration, easing } => MotionKind::Timing {
                from: slot.value,
                elapsed: Duration::ZERO,
                duration,
                easing,
            },
        };
        let superseded = slot.motion.replace(Motion {
            target,
            kind,
            on_complete,
            last_step: None,
        });
        tracing::trace!(target: targets::ANIMATION, ?id, from = slot.value, target, "motion started");

        Self::interrupt(superseded.and_then(|motion| motion.on_complete));
    }

    fn cancel(&mut self, id: ValueId) {
        if let Some(slot) = self.values.get_mut(id) {
            let interrupted = slot.take_completion();
            slot.velocity = 0.0;
            Self::interrupt(interrupted);
        }
    }

    fn is_animating(&self, id: ValueId) -> bool {
        self.values.get(id).is_some_and(|slot| slot.motion.is_some())
    }

    fn target(&self, id: ValueId) -> Option<f64> {
        self.values
            .get(id)
            .and_then(|slot| slot.motion.as_ref())
            .map(|motion| motion.target)
    }
}
