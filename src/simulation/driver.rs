//! Frame-based driver around a [`PhysicsState`].
//!
//! A display or reporting loop does not need diagnostics after every physics
//! tick. [`Simulation::advance_frame`] runs `refresh_rate` steps, refreshes
//! the cached diagnostics once, and returns a settled [`Frame`].

use log::warn;

use crate::simulation::engine::Engine;
use crate::simulation::frame::{Frame, FrameExchange};
use crate::simulation::physics::PhysicsState;

#[derive(Debug, Clone)]
pub struct Simulation {
    state: PhysicsState,
    refresh_rate: usize,
    max_energy_drift: Option<f64>,
    paused: bool,
}

impl Simulation {
    pub fn new(state: PhysicsState, engine: &Engine) -> Self {
        Self {
            state,
            refresh_rate: engine.refresh_rate,
            max_energy_drift: engine.max_energy_drift,
            paused: false,
        }
    }

    pub fn state(&self) -> &PhysicsState {
        &self.state
    }

    pub fn into_state(self) -> PhysicsState {
        self.state
    }

    pub fn refresh_rate(&self) -> usize {
        self.refresh_rate
    }

    pub fn set_refresh_rate(&mut self, refresh_rate: usize) {
        self.refresh_rate = refresh_rate;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Run one frame's worth of steps and return the settled result.
    /// While paused the state is left untouched.
    pub fn advance_frame(&mut self) -> Frame {
        if !self.paused {
            self.state.step_n(self.refresh_rate);
            self.state.refresh_diagnostics();

            if self.energy_drift_exceeded() {
                warn!(
                    "energy drift {:.3e} exceeds {:.3e} after {} steps",
                    self.state.energy_drift(),
                    self.max_energy_drift.unwrap_or_default(),
                    self.state.steps()
                );
            }
        }
        self.state.snapshot()
    }

    /// Advance `frames` frames, publishing each one to `exchange`.
    pub fn run_into(&mut self, frames: usize, exchange: &FrameExchange) {
        for _ in 0..frames {
            exchange.publish(self.advance_frame());
        }
    }

    /// Whether the cached energy drift is above the configured bound.
    /// Always `false` when no bound is configured.
    pub fn energy_drift_exceeded(&self) -> bool {
        self.max_energy_drift
            .is_some_and(|limit| self.state.energy_drift() > limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{BodyInit, ParticleSet};

    fn binary() -> PhysicsState {
        let particles = ParticleSet::from_bodies([
            BodyInit::new(1.0, [-0.5, 0.0], [0.0, -0.5]),
            BodyInit::new(1.0, [0.5, 0.0], [0.0, 0.5]),
        ])
        .unwrap();
        PhysicsState::new(1.0, particles, 0.001).unwrap()
    }

    #[test]
    fn frame_advances_refresh_rate_steps() {
        let engine = Engine {
            refresh_rate: 7,
            ..Engine::default()
        };
        let mut sim = Simulation::new(binary(), &engine);

        let frame = sim.advance_frame();
        assert_eq!(frame.steps, 7);
        let frame = sim.advance_frame();
        assert_eq!(frame.steps, 14);
        assert!((frame.time - 0.014).abs() < 1e-12);
    }

    #[test]
    fn paused_simulation_does_not_step() {
        let mut sim = Simulation::new(binary(), &Engine::default());
        sim.pause();

        let before = sim.state().positions();
        let frame = sim.advance_frame();

        assert_eq!(frame.steps, 0);
        assert_eq!(sim.state().positions(), before);

        sim.toggle_pause();
        assert!(!sim.is_paused());
        assert_eq!(sim.advance_frame().steps, 100);
    }

    #[test]
    fn frame_diagnostics_are_fresh() {
        let mut sim = Simulation::new(binary(), &Engine::default());
        let frame = sim.advance_frame();
        assert_eq!(frame.diagnostics, sim.state().compute_diagnostics());
    }

    #[test]
    fn drift_check_respects_limit() {
        let engine = Engine {
            refresh_rate: 10,
            max_energy_drift: Some(0.0),
            ..Engine::default()
        };
        let mut sim = Simulation::new(binary(), &engine);
        assert!(!sim.energy_drift_exceeded());

        sim.advance_frame();
        // any nonzero rounding error trips a zero bound
        assert_eq!(sim.energy_drift_exceeded(), sim.state().energy_drift() > 0.0);

        let relaxed = Engine {
            max_energy_drift: Some(1.0),
            ..engine.clone()
        };
        let mut sim = Simulation::new(binary(), &relaxed);
        sim.advance_frame();
        assert!(!sim.energy_drift_exceeded());

        let unbounded = Engine {
            max_energy_drift: None,
            ..engine
        };
        let mut sim = Simulation::new(binary(), &unbounded);
        sim.advance_frame();
        assert!(!sim.energy_drift_exceeded());
    }

    #[test]
    fn drift_alarm_trips_on_coarse_step() {
        // dt comparable to the orbital period wrecks energy conservation
        let particles = ParticleSet::from_bodies([
            BodyInit::new(1.0, [-0.5, 0.0], [0.0, -0.5]),
            BodyInit::new(1.0, [0.5, 0.0], [0.0, 0.5]),
        ])
        .unwrap();
        let state = PhysicsState::new(1.0, particles, 0.5).unwrap();
        let engine = Engine {
            refresh_rate: 20,
            max_energy_drift: Some(1e-3),
            ..Engine::default()
        };
        let mut sim = Simulation::new(state, &engine);
        sim.advance_frame();

        assert!(sim.state().energy_drift() > 1e-3);
        assert!(sim.energy_drift_exceeded());
    }
}
