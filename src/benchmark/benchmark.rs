use std::time::Instant;

use crate::error::InvalidInputError;
use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::physics::PhysicsState;
use crate::simulation::states::{NVec2, ParticleSet};

/// Deterministic ring-ish cloud of `n` unit masses, no rand needed
fn make_particles(n: usize) -> Result<ParticleSet, InvalidInputError> {
    let mut positions = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        positions.push(NVec2::new(
            (i_f * 0.37).sin() * 5.0 + i_f * 1e-3,
            (i_f * 0.13).cos() * 5.0,
        ));
    }

    ParticleSet::new(vec![1.0; n], positions, vec![NVec2::zeros(); n])
}

/// Time one acceleration evaluation, serial against the dispatching path
/// (rayon above the threshold when the `parallel` feature is on).
pub fn bench_accelerations() {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let gravity = NewtonianGravity::new(0.1);

    println!("N,serial_ms,dispatch_ms");

    for n in ns {
        let particles = match make_particles(n) {
            Ok(particles) => particles,
            Err(e) => {
                log::error!("skipping n = {n}: {e}");
                continue;
            }
        };
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.acceleration(particles.masses(), particles.positions(), &mut out);

        let t0 = Instant::now();
        gravity.accelerations_serial(particles.masses(), particles.positions(), &mut out);
        let serial_ms = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        gravity.acceleration(particles.masses(), particles.positions(), &mut out);
        let dispatch_ms = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{:.6}", n, serial_ms, dispatch_ms);
    }
}

/// Milliseconds per velocity-Verlet step for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_verlet_curve() {
    println!("N,step_ms");

    for n in (100..=1600).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let state = make_particles(n).and_then(|p| PhysicsState::new(0.1, p, 0.001));
        let mut state = match state {
            Ok(state) => state,
            Err(e) => {
                log::error!("skipping n = {n}: {e}");
                continue;
            }
        };

        // Warm-up one step
        state.step();

        let t0 = Instant::now();
        state.step_n(steps);
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
