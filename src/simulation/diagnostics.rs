//! Conserved and derived quantities used to monitor a run.
//!
//! None of these feed back into the integration; they exist so a caller can
//! check that energy, momentum and angular momentum behave.

use std::fmt;

use crate::simulation::states::NVec2;

/// Cached scalar and vector diagnostics of one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    pub momentum: NVec2,
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    /// Always `kinetic_energy + potential_energy`.
    pub total_energy: f64,
    pub center_of_mass: NVec2,
    pub angular_momentum: f64,
}

impl Diagnostics {
    /// Assemble diagnostics, deriving the total energy from its parts.
    pub fn new(
        momentum: NVec2,
        kinetic_energy: f64,
        potential_energy: f64,
        center_of_mass: NVec2,
        angular_momentum: f64,
    ) -> Self {
        Self {
            momentum,
            kinetic_energy,
            potential_energy,
            total_energy: kinetic_energy + potential_energy,
            center_of_mass,
            angular_momentum,
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "energy   :  {:.3}  =  {:.3} (kin.) + {:.3} (pot.)",
            self.total_energy, self.kinetic_energy, self.potential_energy
        )?;
        writeln!(
            f,
            "momentum :  [{:.3}, {:.3}],  (norm: {:.3})",
            self.momentum.x,
            self.momentum.y,
            self.momentum.norm()
        )?;
        write!(f, "ang.mom. :  {:.3}", self.angular_momentum)
    }
}

/// z-component of the 3D cross product of two planar vectors
#[inline]
pub fn cross2(a: &NVec2, b: &NVec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// `sum_i 0.5 * m_i * |v_i|^2`
pub fn kinetic_energy(masses: &[f64], velocities: &[NVec2]) -> f64 {
    masses
        .iter()
        .zip(velocities)
        .map(|(&m, v)| 0.5 * m * v.norm_squared())
        .sum()
}

/// `sum_i m_i * v_i`
pub fn momentum(masses: &[f64], velocities: &[NVec2]) -> NVec2 {
    masses
        .iter()
        .zip(velocities)
        .fold(NVec2::zeros(), |acc, (&m, v)| acc + m * v)
}

pub fn total_mass(masses: &[f64]) -> f64 {
    masses.iter().sum()
}

/// Mass-weighted mean position. Total mass is positive for any validated set.
pub fn center_of_mass(masses: &[f64], positions: &[NVec2]) -> NVec2 {
    let weighted = masses
        .iter()
        .zip(positions)
        .fold(NVec2::zeros(), |acc, (&m, x)| acc + m * x);
    weighted / total_mass(masses)
}

/// Angular momentum about the center of mass in the center-of-momentum frame.
///
/// Each body contributes `(x_i - com) x (m_i * (v_i - P / M))`, and the
/// result is the *negated* sum. A counter-clockwise orbit therefore reports a
/// negative value.
pub fn angular_momentum(masses: &[f64], positions: &[NVec2], velocities: &[NVec2]) -> f64 {
    let m_total = total_mass(masses);
    let drift = momentum(masses, velocities) / m_total;
    let com = center_of_mass(masses, positions);

    let sum: f64 = masses
        .iter()
        .zip(positions.iter().zip(velocities))
        .map(|(&m, (x, v))| cross2(&(x - com), &(m * (v - drift))))
        .sum();

    -sum
}
