//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – driving options (ticks per frame, frame count, drift alarm)
//! - [`ParametersConfig`] – gravitational constant and fixed step size
//! - [`BodyConfig`]       – initial state for each body
//! - [`RandomGasConfig`]  – optional seeded cloud of extra bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section except `bodies`/`random_gas` may be omitted and falls back
//! to its defaults.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   refresh_rate: 100       # step() calls per frame
//!   frames: 20              # frames in a headless run
//!   max_energy_drift: 1e-3  # optional, warn above this relative drift
//!
//! parameters:
//!   G: 10.0                 # gravitational constant
//!   dt: 0.005               # fixed step size
//!
//! bodies:
//!   - m: 100.0
//!     x: [ 200.0, 0.0 ]
//!     v: [ 0.0, 1.0 ]
//!   - m: 100.0
//!     x: [ -200.0, 0.0 ]
//!     v: [ 0.0, -1.0 ]
//!
//! random_gas:               # optional
//!   count: 50
//!   seed: 7
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::SimResult;
use crate::simulation::engine::{DEFAULT_FRAMES, DEFAULT_REFRESH_RATE};

/// Driving configuration
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub refresh_rate: usize,            // physics ticks between diagnostic refreshes
    pub frames: usize,                  // number of frames in a headless run
    pub max_energy_drift: Option<f64>,  // relative total-energy drift that triggers a warning
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            refresh_rate: DEFAULT_REFRESH_RATE,
            frames: DEFAULT_FRAMES,
            max_energy_drift: None,
        }
    }
}

/// Global physical and numerical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    pub G: f64,  // gravitational constant
    pub dt: f64, // fixed time step
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self { G: 1.0, dt: 0.005 }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub m: f64,      // mass
    pub x: [f64; 2], // initial position
    pub v: [f64; 2], // initial velocity
}

/// Seeded random gas appended after the explicit bodies.
/// Ranges are half-open `[lo, hi)`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RandomGasConfig {
    pub count: usize,
    pub seed: u64,
    pub mass: [f64; 2],
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub v: [f64; 2], // applied to both velocity components
}

impl Default for RandomGasConfig {
    fn default() -> Self {
        Self {
            count: 50,
            seed: 0,
            mass: [1.0, 25.0],
            x: [0.0, 800.0],
            y: [0.0, 300.0],
            v: [-2.0, 2.0],
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub random_gas: Option<RandomGasConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: &Path) -> SimResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

        info!(
            "loaded scenario {} ({} bodies{})",
            path.display(),
            cfg.bodies.len(),
            match &cfg.random_gas {
                Some(gas) => format!(" + {} random", gas.count),
                None => String::new(),
            }
        );

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn sections_default_when_missing() {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - { m: 5.0, x: [0.0, 0.0], v: [0.0, 0.0] }\n",
        )
        .unwrap();

        assert_eq!(cfg.engine, EngineConfig::default());
        assert_eq!(cfg.parameters, ParametersConfig::default());
        assert_eq!(cfg.bodies.len(), 1);
        assert!(cfg.random_gas.is_none());
    }

    #[test]
    fn full_document_parses() {
        let yaml = r#"
engine:
  refresh_rate: 10
  frames: 3
  max_energy_drift: 1.0e-3
parameters:
  G: 10.0
  dt: 0.01
bodies:
  - m: 100.0
    x: [200.0, 0.0]
    v: [0.0, 1.0]
random_gas:
  count: 4
  seed: 9
"#;
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(cfg.engine.refresh_rate, 10);
        assert_eq!(cfg.engine.frames, 3);
        assert_eq!(cfg.engine.max_energy_drift, Some(1.0e-3));
        assert_eq!(cfg.parameters.G, 10.0);
        assert_eq!(cfg.parameters.dt, 0.01);
        assert_eq!(cfg.bodies[0].x, [200.0, 0.0]);

        let gas = cfg.random_gas.unwrap();
        assert_eq!(gas.count, 4);
        assert_eq!(gas.seed, 9);
        assert_eq!(gas.mass, [1.0, 25.0]);
    }

    #[test]
    fn short_vector_is_rejected() {
        let err = ScenarioConfig::from_yaml_str("bodies:\n  - { m: 1.0, x: [0.0], v: [0.0, 0.0] }\n")
            .unwrap_err();
        assert!(matches!(err, SimError::YamlParse(_)));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = ScenarioConfig::from_yaml_str("parameters:\n  h0: 0.1\n").unwrap_err();
        assert!(matches!(err, SimError::YamlParse(_)));
    }
}
