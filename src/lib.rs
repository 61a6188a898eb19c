//! Direct-summation 2D Newtonian N-body simulator.
//!
//! Build a [`ParticleSet`], hand it to a [`PhysicsState`], call
//! [`PhysicsState::step`] repeatedly and [`PhysicsState::refresh_diagnostics`]
//! whenever the conserved quantities are needed. [`Simulation`] packages that
//! loop into frames for a viewer or reporter.

pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{InvalidInputError, SimError, SimResult};

pub use simulation::states::{BodyInit, NVec2, Particle, ParticleSet};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{Acceleration, NewtonianGravity, PARALLEL_THRESHOLD};
pub use simulation::integrator::verlet_integrator;
pub use simulation::diagnostics::Diagnostics;
pub use simulation::physics::PhysicsState;
pub use simulation::frame::{Frame, FrameExchange};
pub use simulation::driver::Simulation;
pub use simulation::scenario::{random_gas, Scenario};

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, RandomGasConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_accelerations, bench_verlet_curve};
