//! Fixed-step velocity-Verlet integrator
//!
//! Symplectic and second order: long runs show a bounded, oscillating energy
//! error instead of the secular drift an explicit Euler step accumulates.

use super::forces::Acceleration;
use super::states::NVec2;

/// Advance the system by one step of size `dt` using velocity-Verlet.
///
/// `accelerations` must hold a_n, the acceleration at the incoming
/// `positions`. On return positions, velocities and accelerations are all at
/// t_n+1. `scratch` is a work buffer of the same length; its contents are
/// overwritten.
///
/// One force evaluation per step: a_n is carried over from the previous call
/// instead of being recomputed.
pub fn verlet_integrator<F>(
    forces: &F,
    dt: f64,
    masses: &[f64],
    positions: &mut [NVec2],
    velocities: &mut [NVec2],
    accelerations: &mut [NVec2],
    scratch: &mut [NVec2],
) where
    F: Acceleration + ?Sized,
{
    let n = masses.len();
    if n == 0 {
        return;
    }

    let half_dt = 0.5 * dt;
    let half_dt2 = half_dt * dt;

    // x_n+1 = x_n + dt v_n + (dt^2 / 2) a_n
    for ((x, v), a) in positions.iter_mut().zip(velocities.iter()).zip(accelerations.iter()) {
        *x += dt * v + half_dt2 * a;
    }

    // a_n+1 from x_n+1
    forces.acceleration(masses, positions, scratch);

    // v_n+1 = v_n + (dt / 2) (a_n + a_n+1)
    for ((v, a0), a1) in velocities.iter_mut().zip(accelerations.iter()).zip(scratch.iter()) {
        *v += half_dt * (a0 + a1);
    }

    accelerations.copy_from_slice(scratch);
}
