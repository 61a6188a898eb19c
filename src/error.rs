//! Error types for the simulator
//!
//! Construction of a [`ParticleSet`](crate::ParticleSet) or
//! [`PhysicsState`](crate::PhysicsState) is the only place the physics can
//! fail. Every variant of [`InvalidInputError`] names the violated constraint
//! so a caller with malformed initial conditions knows what to fix.
//!
//! [`SimError`] wraps it together with the scenario-loading failures used by
//! the configuration layer and the binary.

use thiserror::Error;

/// Result alias for scenario-level operations.
pub type SimResult<T> = Result<T, SimError>;

/// Construction-time validation failure. Fatal to construction, never
/// produced by stepping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// A state needs at least one particle.
    #[error("at least one particle is required")]
    NoParticles,

    /// Masses, positions and velocities must be index-aligned.
    #[error(
        "input lengths differ: {masses} masses, {positions} positions, {velocities} velocities"
    )]
    LengthMismatch {
        masses: usize,
        positions: usize,
        velocities: usize,
    },

    /// Every mass must be strictly positive and finite.
    #[error("particle {index} has non-positive mass {mass}")]
    NonPositiveMass { index: usize, mass: f64 },

    /// NaN or infinite component in the initial conditions.
    #[error("particle {index} has a non-finite {field}")]
    NonFinite { field: &'static str, index: usize },

    /// Fixed integration interval must be strictly positive and finite.
    #[error("time step must be positive and finite, got {0}")]
    NonPositiveTimeStep(f64),

    /// NaN or infinite gravitational constant.
    #[error("gravitational constant must be finite, got {0}")]
    NonFiniteGravitationalConstant(f64),
}

/// Errors raised while loading or building a scenario.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid initial conditions: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Scenario file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Well-formed YAML that describes an unusable scenario.
    #[error("scenario error: {message}")]
    Scenario { message: String },
}

impl SimError {
    /// Create a scenario error with a message.
    #[must_use]
    pub fn scenario(message: impl Into<String>) -> Self {
        Self::Scenario {
            message: message.into(),
        }
    }
}
