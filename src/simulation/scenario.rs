//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - driving settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - validated initial conditions (`ParticleSet`)
//!
//! which [`Scenario::into_simulation`] turns into a ready-to-run
//! [`Simulation`].

use log::info;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::{BodyConfig, RandomGasConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::driver::Simulation;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::physics::PhysicsState;
use crate::simulation::states::{BodyInit, ParticleSet};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub particles: ParticleSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Bodies: explicit list first, then the random gas
        let mut bodies: Vec<BodyInit> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| BodyInit::new(bc.m, bc.x, bc.v))
            .collect();

        if let Some(gas) = &cfg.random_gas {
            bodies.extend(random_gas(gas)?);
        }

        let particles = ParticleSet::from_bodies(bodies)?;

        let parameters = Parameters {
            G: cfg.parameters.G,
            dt: cfg.parameters.dt,
        };
        parameters.validate()?;

        let e_cfg = cfg.engine;
        if e_cfg.refresh_rate == 0 {
            return Err(SimError::scenario("engine.refresh_rate must be at least 1"));
        }
        let engine = Engine {
            refresh_rate: e_cfg.refresh_rate,
            frames: e_cfg.frames,
            max_energy_drift: e_cfg.max_energy_drift,
        };

        Ok(Self {
            engine,
            parameters,
            particles,
        })
    }

    pub fn into_simulation(self) -> SimResult<Simulation> {
        let state = PhysicsState::with_parameters(self.parameters, self.particles)?;
        info!(
            "scenario ready: {} particles, G = {}, dt = {}, {} steps per frame",
            state.count(),
            self.parameters.G,
            self.parameters.dt,
            self.engine.refresh_rate
        );
        Ok(Simulation::new(state, &self.engine))
    }
}

/// Seeded random cloud of bodies. The same config always yields the same
/// bodies.
pub fn random_gas(cfg: &RandomGasConfig) -> SimResult<Vec<BodyInit>> {
    for (name, [lo, hi]) in [("mass", cfg.mass), ("x", cfg.x), ("y", cfg.y), ("v", cfg.v)] {
        if !(lo < hi) || !lo.is_finite() || !hi.is_finite() {
            return Err(SimError::scenario(format!(
                "random_gas.{name} must be a finite range with lo < hi, got [{lo}, {hi}]"
            )));
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
    let bodies = (0..cfg.count)
        .map(|_| {
            let m = rng.gen_range(cfg.mass[0]..cfg.mass[1]);
            let x = [
                rng.gen_range(cfg.x[0]..cfg.x[1]),
                rng.gen_range(cfg.y[0]..cfg.y[1]),
            ];
            let v = [
                rng.gen_range(cfg.v[0]..cfg.v[1]),
                rng.gen_range(cfg.v[0]..cfg.v[1]),
            ];
            BodyInit::new(m, x, v)
        })
        .collect();

    Ok(bodies)
}
