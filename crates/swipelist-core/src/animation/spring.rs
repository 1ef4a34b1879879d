//! Damped spring physics.

use std::time::Duration;

/// Integration step used by [`SpringState::step`].
const SUBSTEP_SECS: f64 = 0.001;

/// Parameters of a damped harmonic oscillator.
///
/// The defaults correspond to the classic tension 40 / friction 7 spring:
/// slightly under-damped, so a snap overshoots a little before settling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass attached to the spring.
    pub mass: f64,
    /// Distance from the target below which the spring may come to rest.
    pub rest_displacement: f64,
    /// Speed (units per second) below which the spring may come to rest.
    pub rest_velocity: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 230.2,
            damping: 22.0,
            mass: 1.0,
            rest_displacement: 0.01,
            rest_velocity: 0.01,
        }
    }
}

impl SpringParams {
    /// Damping ratio `c / (2 * sqrt(k * m))`. Below 1.0 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Whether the parameters describe a spring that can be integrated.
    pub fn is_valid(&self) -> bool {
        self.stiffness > 0.0
            && self.mass > 0.0
            && self.damping >= 0.0
            && self.rest_displacement >= 0.0
            && self.rest_velocity >= 0.0
    }
}

/// Position and velocity of a value driven by a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    /// Current position.
    pub position: f64,
    /// Current velocity in units per second.
    pub velocity: f64,
}

impl SpringState {
    /// Advance the spring toward `target` by `dt`.
    ///
    /// Integrates with semi-implicit Euler in fixed 1 ms sub-steps so the
    /// result does not depend on the host's frame rate. Returns `true` once
    /// the spring is at rest, in which case the position is snapped to
    /// `target` and the velocity zeroed.
    pub fn step(&mut self, params: &SpringParams, target: f64, dt: Duration) -> bool {
        if !params.is_valid() {
            self.settle(target);
            return true;
        }

        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            if self.is_at_rest(params, target) {
                break;
            }
            let h = remaining.min(SUBSTEP_SECS);
            let force = -params.stiffness * (self.position - target) - params.damping * self.velocity;
            self.velocity += force / params.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_at_rest(params, target) {
            self.settle(target);
            true
        } else {
            false
        }
    }

    fn is_at_rest(&self, params: &SpringParams, target: f64) -> bool {
        (self.position - target).abs() <= params.rest_displacement
            && self.velocity.abs() <= params.rest_velocity
    }

    fn settle(&mut self, target: f64) {
        self.position = target;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: &mut SpringState, params: &SpringParams, target: f64) -> Duration {
        let frame = Duration::from_millis(16);
        let mut elapsed = Duration::ZERO;
        while !state.step(params, target, frame) {
            elapsed += frame;
            assert!(elapsed < Duration::from_secs(10), "spring never settled");
        }
        elapsed
    }

    #[test]
    fn test_default_is_underdamped() {
        let params = SpringParams::default();
        assert!(params.damping_ratio() < 1.0);
        assert!(params.damping_ratio() > 0.5);
    }

    #[test]
    fn test_settles_exactly_on_target() {
        let params = SpringParams::default();
        let mut state = SpringState {
            position: 0.0,
            velocity: 0.0,
        };
        let elapsed = run(&mut state, &params, -72.0);
        assert_eq!(state.position, -72.0);
        assert_eq!(state.velocity, 0.0);
        assert!(elapsed > Duration::from_millis(100));
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let params = SpringParams::default();
        let mut state = SpringState {
            position: -72.0,
            velocity: 0.0,
        };
        let mut max_position = f64::MIN;
        while !state.step(&params, 0.0, Duration::from_millis(4)) {
            max_position = max_position.max(state.position);
        }
        assert!(max_position > 0.0);
    }

    #[test]
    fn test_frame_rate_independent() {
        let params = SpringParams::default();
        let mut coarse = SpringState {
            position: 0.0,
            velocity: 0.0,
        };
        let mut fine = coarse;
        coarse.step(&params, 100.0, Duration::from_millis(48));
        for _ in 0..3 {
            fine.step(&params, 100.0, Duration::from_millis(16));
        }
        assert!((coarse.position - fine.position).abs() < 1e-9);
    }

    #[test]
    fn test_already_at_rest() {
        let params = SpringParams::default();
        let mut state = SpringState {
            position: 5.0,
            velocity: 0.0,
        };
        assert!(state.step(&params, 5.0, Duration::ZERO));
    }

    #[test]
    fn test_invalid_params_snap() {
        let params = SpringParams {
            stiffness: 0.0,
            ..SpringParams::default()
        };
        let mut state = SpringState {
            position: 0.0,
            velocity: 3.0,
        };
        assert!(state.step(&params, -10.0, Duration::from_millis(1)));
        assert_eq!(state.position, -10.0);
    }
}
