//! Authoritative simulation state and all physics computations
//!
//! A [`PhysicsState`] takes ownership of a [`ParticleSet`] and from then on
//! is the only writer of positions, velocities and accelerations. Everything
//! handed out is a copy.
//!
//! Two logical states:
//! - Constructed: diagnostics computed once from the initial conditions
//! - Advancing: `step()` mutates the trajectory; cached diagnostics are stale
//!   until `refresh_diagnostics()` is called

use std::fmt;

use log::debug;

use crate::error::InvalidInputError;
use crate::simulation::diagnostics::{self, Diagnostics};
use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::frame::Frame;
use crate::simulation::integrator::verlet_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, ParticleSet};

#[derive(Debug, Clone)]
pub struct PhysicsState {
    gravity: NewtonianGravity,
    time_step: f64,

    masses: Vec<f64>,
    positions: Vec<NVec2>,
    velocities: Vec<NVec2>,
    // always consistent with `positions` outside of step()
    accelerations: Vec<NVec2>,
    scratch: Vec<NVec2>,

    steps: u64,
    diagnostics: Diagnostics,
    initial: Diagnostics,
}

impl PhysicsState {
    /// Wrap `particles` into a state advancing with fixed step `time_step`.
    ///
    /// Fails if `time_step` is not a positive finite number or the
    /// gravitational constant is not finite. The particle set itself was
    /// validated when it was built.
    pub fn new(
        gravitational_constant: f64,
        particles: ParticleSet,
        time_step: f64,
    ) -> Result<Self, InvalidInputError> {
        Self::with_parameters(
            Parameters {
                G: gravitational_constant,
                dt: time_step,
            },
            particles,
        )
    }

    pub fn with_parameters(
        parameters: Parameters,
        particles: ParticleSet,
    ) -> Result<Self, InvalidInputError> {
        parameters.validate()?;

        let n = particles.count();
        let (masses, positions, velocities) = particles.into_parts();
        let gravity = NewtonianGravity::new(parameters.G);

        let mut accelerations = vec![NVec2::zeros(); n];
        gravity.acceleration(&masses, &positions, &mut accelerations);

        let mut state = Self {
            gravity,
            time_step: parameters.dt,
            masses,
            positions,
            velocities,
            accelerations,
            scratch: vec![NVec2::zeros(); n],
            steps: 0,
            diagnostics: Diagnostics::new(NVec2::zeros(), 0.0, 0.0, NVec2::zeros(), 0.0),
            initial: Diagnostics::new(NVec2::zeros(), 0.0, 0.0, NVec2::zeros(), 0.0),
        };
        state.refresh_diagnostics();
        state.initial = state.diagnostics;

        debug!(
            "physics state: {} particles, G = {}, dt = {}, E0 = {}",
            n, parameters.G, parameters.dt, state.initial.total_energy
        );

        Ok(state)
    }

    // ---------------------------------------------------------------------
    // Integration
    // ---------------------------------------------------------------------

    /// Advance by one fixed step using velocity-Verlet.
    pub fn step(&mut self) {
        verlet_integrator(
            &self.gravity,
            self.time_step,
            &self.masses,
            &mut self.positions,
            &mut self.velocities,
            &mut self.accelerations,
            &mut self.scratch,
        );
        self.steps += 1;
    }

    /// Advance by `count` steps.
    pub fn step_n(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    /// Recompute the cached diagnostics from the current trajectory.
    /// Calling it twice in a row yields identical values.
    pub fn refresh_diagnostics(&mut self) {
        self.diagnostics = self.compute_diagnostics();
    }

    // ---------------------------------------------------------------------
    // Computations on the current configuration (never cached)
    // ---------------------------------------------------------------------

    /// Gravitational acceleration of every particle at the current positions.
    pub fn compute_accelerations(&self) -> Vec<NVec2> {
        let mut out = vec![NVec2::zeros(); self.masses.len()];
        self.gravity.acceleration(&self.masses, &self.positions, &mut out);
        out
    }

    pub fn compute_kinetic_energy(&self) -> f64 {
        diagnostics::kinetic_energy(&self.masses, &self.velocities)
    }

    pub fn compute_potential_energy(&self) -> f64 {
        self.gravity.potential_energy(&self.masses, &self.positions)
    }

    pub fn compute_momentum(&self) -> NVec2 {
        diagnostics::momentum(&self.masses, &self.velocities)
    }

    pub fn compute_center_of_mass(&self) -> NVec2 {
        diagnostics::center_of_mass(&self.masses, &self.positions)
    }

    pub fn compute_angular_momentum(&self) -> f64 {
        diagnostics::angular_momentum(&self.masses, &self.positions, &self.velocities)
    }

    pub fn compute_diagnostics(&self) -> Diagnostics {
        Diagnostics::new(
            self.compute_momentum(),
            self.compute_kinetic_energy(),
            self.compute_potential_energy(),
            self.compute_center_of_mass(),
            self.compute_angular_momentum(),
        )
    }

    // ---------------------------------------------------------------------
    // Read accessors (copies)
    // ---------------------------------------------------------------------

    pub fn count(&self) -> usize {
        self.masses.len()
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravity.G
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Number of completed steps.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time elapsed since construction.
    pub fn time(&self) -> f64 {
        self.steps as f64 * self.time_step
    }

    pub fn particle(&self, i: usize) -> Option<Particle> {
        Some(Particle {
            mass: *self.masses.get(i)?,
            position: self.positions[i],
            velocity: self.velocities[i],
            acceleration: self.accelerations[i],
        })
    }

    /// Snapshot of every particle, in index order.
    pub fn particles(&self) -> Vec<Particle> {
        (0..self.count()).filter_map(|i| self.particle(i)).collect()
    }

    pub fn masses(&self) -> Vec<f64> {
        self.masses.clone()
    }

    pub fn positions(&self) -> Vec<NVec2> {
        self.positions.clone()
    }

    pub fn velocities(&self) -> Vec<NVec2> {
        self.velocities.clone()
    }

    /// Accelerations stored by the last step (or construction).
    pub fn accelerations(&self) -> Vec<NVec2> {
        self.accelerations.clone()
    }

    /// Diagnostics as of the last `refresh_diagnostics()`.
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Diagnostics of the initial conditions.
    pub fn initial_diagnostics(&self) -> Diagnostics {
        self.initial
    }

    pub fn momentum(&self) -> NVec2 {
        self.diagnostics.momentum
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.diagnostics.kinetic_energy
    }

    pub fn potential_energy(&self) -> f64 {
        self.diagnostics.potential_energy
    }

    pub fn total_energy(&self) -> f64 {
        self.diagnostics.total_energy
    }

    pub fn center_of_mass(&self) -> NVec2 {
        self.diagnostics.center_of_mass
    }

    pub fn angular_momentum(&self) -> f64 {
        self.diagnostics.angular_momentum
    }

    /// Relative total-energy error of the cached diagnostics against the
    /// initial state: `|E - E0| / |E0|`, or `|E - E0|` when `E0` is zero.
    pub fn energy_drift(&self) -> f64 {
        let e0 = self.initial.total_energy;
        let delta = (self.diagnostics.total_energy - e0).abs();
        if e0 == 0.0 {
            delta
        } else {
            delta / e0.abs()
        }
    }

    /// Settled snapshot of positions and cached diagnostics.
    pub fn snapshot(&self) -> Frame {
        Frame {
            steps: self.steps,
            time: self.time(),
            particles: self.particles(),
            diagnostics: self.diagnostics,
        }
    }
}

impl fmt::Display for PhysicsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "State of {} particles", self.count())?;
        write!(f, "{}", self.diagnostics)
    }
}
