//! Force / acceleration contributors for the n-body engine
//!
//! Defines the [`Acceleration`] trait the integrator is driven by, and the
//! direct-summation [`NewtonianGravity`] that implements it.
//!
//! There is no softening. The self-term is skipped in the pair loop and
//! contributes exactly zero; so does any pair at exactly zero separation.
//! Two bodies brought to near-zero (but nonzero) separation by the dynamics
//! produce very large but finite accelerations.

use crate::simulation::states::NVec2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Body count at which [`NewtonianGravity`] switches to the rayon path.
pub const PARALLEL_THRESHOLD: usize = 64;

/// Trait for acceleration sources operating on index-aligned
/// masses and positions.
pub trait Acceleration {
    /// Overwrite `out[i]` with the acceleration of body `i`.
    fn acceleration(&self, masses: &[f64], positions: &[NVec2], out: &mut [NVec2]);

    /// Potential energy of the configuration, each interacting pair counted once.
    fn potential_energy(&self, masses: &[f64], positions: &[NVec2]) -> f64;
}

/// Unsoftened 2D Newtonian gravity, direct O(n^2) summation
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    #[allow(non_snake_case)]
    pub fn new(G: f64) -> Self {
        Self { G }
    }

    /// Acceleration of body `i` due to every other body:
    ///
    /// `a_i = sum_{j != i} G * m_j * (x_j - x_i) / |x_j - x_i|^3`
    ///
    /// Contributions are added in ascending `j`, so the result does not depend
    /// on which thread computes it.
    pub fn acceleration_on(&self, i: usize, masses: &[f64], positions: &[NVec2]) -> NVec2 {
        let xi = positions[i];
        let mut acc = NVec2::zeros();

        for (j, (&mj, &xj)) in masses.iter().zip(positions.iter()).enumerate() {
            // no self-interaction
            if j == i {
                continue;
            }

            // d points from i to j, so i is pulled along +d
            let d = xj - xi;
            let r2 = d.dot(&d);

            // coincident bodies exert nothing on each other
            if r2 == 0.0 {
                continue;
            }

            // 1 / |d|^3
            let inv_r = r2.sqrt().recip();
            let inv_r3 = inv_r * inv_r * inv_r;

            acc += (self.G * mj * inv_r3) * d;
        }

        acc
    }

    /// Single-threaded evaluation of every body's acceleration.
    pub fn accelerations_serial(&self, masses: &[f64], positions: &[NVec2], out: &mut [NVec2]) {
        for (i, a) in out.iter_mut().enumerate() {
            *a = self.acceleration_on(i, masses, positions);
        }
    }

    /// Rayon evaluation. Each body's sum is computed whole by one worker, so
    /// the output is bit-identical to [`Self::accelerations_serial`].
    #[cfg(feature = "parallel")]
    pub fn accelerations_parallel(&self, masses: &[f64], positions: &[NVec2], out: &mut [NVec2]) {
        out.par_iter_mut().enumerate().for_each(|(i, a)| {
            *a = self.acceleration_on(i, masses, positions);
        });
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, masses: &[f64], positions: &[NVec2], out: &mut [NVec2]) {
        debug_assert_eq!(masses.len(), positions.len());
        debug_assert_eq!(masses.len(), out.len());

        #[cfg(feature = "parallel")]
        {
            if masses.len() >= PARALLEL_THRESHOLD {
                self.accelerations_parallel(masses, positions, out);
                return;
            }
        }

        self.accelerations_serial(masses, positions, out);
    }

    /// `-G * sum_{i<j} m_i * m_j / r_ij`, skipping coincident pairs
    fn potential_energy(&self, masses: &[f64], positions: &[NVec2]) -> f64 {
        let n = masses.len();
        let mut pe = 0.0;

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = positions[i];
            let mi = masses[i];

            for j in (i + 1)..n {
                let r = (positions[j] - xi).norm();
                if r == 0.0 {
                    continue;
                }
                pe -= self.G * mi * masses[j] / r;
            }
        }

        pe
    }
}
