//! Core state types for the N-body simulation.
//!
//! - [`BodyInit`]    initial conditions for one body, as supplied by a caller
//! - [`ParticleSet`] validated, index-aligned masses/positions/velocities
//! - [`Particle`]    read-only snapshot of one body handed to consumers
//!
//! A `ParticleSet` has a fixed shape once built: no body is ever inserted or
//! removed, so index `i` refers to the same body for the lifetime of the
//! simulation.

use std::fmt;

use nalgebra::Vector2;

use crate::error::InvalidInputError;

pub type NVec2 = Vector2<f64>;

/// Initial conditions for a single body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyInit {
    pub m: f64,   // mass
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

impl BodyInit {
    pub fn new(m: f64, x: [f64; 2], v: [f64; 2]) -> Self {
        Self {
            m,
            x: NVec2::new(x[0], x[1]),
            v: NVec2::new(v[0], v[1]),
        }
    }
}

/// Value snapshot of one body. Copies out of the authoritative state, so
/// writing to it never affects the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub mass: f64,
    pub position: NVec2,
    pub velocity: NVec2,
    pub acceleration: NVec2,
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Particle")?;
        writeln!(f, "  mass : {}", self.mass)?;
        writeln!(f, "  pos. : {}, {}", self.position.x, self.position.y)?;
        write!(f, "  vel. : {}, {}", self.velocity.x, self.velocity.y)
    }
}

/// Index-aligned masses, positions and velocities of `n >= 1` bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSet {
    masses: Vec<f64>,
    positions: Vec<NVec2>,
    velocities: Vec<NVec2>,
}

impl ParticleSet {
    /// Build a set from parallel arrays.
    ///
    /// Fails if the lengths differ, the set is empty, any mass is not a
    /// positive finite number, or any position/velocity component is not
    /// finite.
    pub fn new(
        masses: Vec<f64>,
        positions: Vec<NVec2>,
        velocities: Vec<NVec2>,
    ) -> Result<Self, InvalidInputError> {
        if masses.len() != positions.len() || masses.len() != velocities.len() {
            return Err(InvalidInputError::LengthMismatch {
                masses: masses.len(),
                positions: positions.len(),
                velocities: velocities.len(),
            });
        }
        if masses.is_empty() {
            return Err(InvalidInputError::NoParticles);
        }

        for (index, &mass) in masses.iter().enumerate() {
            // written so that NaN fails too
            if !(mass > 0.0) {
                return Err(InvalidInputError::NonPositiveMass { index, mass });
            }
            if !mass.is_finite() {
                return Err(InvalidInputError::NonFinite { field: "mass", index });
            }
        }
        if let Some(index) = positions.iter().position(|x| !is_finite(x)) {
            return Err(InvalidInputError::NonFinite { field: "position", index });
        }
        if let Some(index) = velocities.iter().position(|v| !is_finite(v)) {
            return Err(InvalidInputError::NonFinite { field: "velocity", index });
        }

        Ok(Self {
            masses,
            positions,
            velocities,
        })
    }

    /// Build a set from per-body initial conditions.
    pub fn from_bodies<I>(bodies: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = BodyInit>,
    {
        let bodies = bodies.into_iter();
        let (lower, _) = bodies.size_hint();
        let mut masses = Vec::with_capacity(lower);
        let mut positions = Vec::with_capacity(lower);
        let mut velocities = Vec::with_capacity(lower);

        for b in bodies {
            masses.push(b.m);
            positions.push(b.x);
            velocities.push(b.v);
        }

        Self::new(masses, positions, velocities)
    }

    /// Number of bodies.
    pub fn count(&self) -> usize {
        self.masses.len()
    }

    pub fn mass(&self, i: usize) -> Option<f64> {
        self.masses.get(i).copied()
    }

    pub fn position(&self, i: usize) -> Option<NVec2> {
        self.positions.get(i).copied()
    }

    pub fn velocity(&self, i: usize) -> Option<NVec2> {
        self.velocities.get(i).copied()
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn positions(&self) -> &[NVec2] {
        &self.positions
    }

    pub fn velocities(&self) -> &[NVec2] {
        &self.velocities
    }

    /// Hand the arrays over to the owning state.
    pub(crate) fn into_parts(self) -> (Vec<f64>, Vec<NVec2>, Vec<NVec2>) {
        (self.masses, self.positions, self.velocities)
    }
}

fn is_finite(v: &NVec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
