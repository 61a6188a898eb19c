//! Property tests: invariants that must hold for any configuration.

use gravsim::{BodyInit, NVec2, ParticleSet, PhysicsState};
use proptest::prelude::*;

fn body() -> impl Strategy<Value = BodyInit> {
    (0.1f64..100.0, -500.0f64..500.0, -500.0f64..500.0, -5.0f64..5.0, -5.0f64..5.0)
        .prop_map(|(m, x, y, vx, vy)| BodyInit::new(m, [x, y], [vx, vy]))
}

/// 2..10 bodies, no two closer than 1e-3
fn system() -> impl Strategy<Value = ParticleSet> {
    prop::collection::vec(body(), 2..10)
        .prop_filter("bodies too close", |bodies| {
            bodies.iter().enumerate().all(|(i, a)| {
                bodies[i + 1..].iter().all(|b| (a.x - b.x).norm() > 1e-3)
            })
        })
        .prop_map(|bodies| ParticleSet::from_bodies(bodies).unwrap())
}

proptest! {
    /// sum_i m_i a_i vanishes up to rounding for every configuration.
    #[test]
    fn prop_net_internal_force_is_zero(particles in system(), g in 0.1f64..20.0) {
        let state = PhysicsState::new(g, particles, 0.01).unwrap();
        let m = state.masses();
        let x = state.positions();
        let a = state.compute_accelerations();

        let net = m.iter().zip(&a).fold(NVec2::zeros(), |acc, (&mi, ai)| acc + mi * ai);

        let mut scale = 0.0;
        for i in 0..m.len() {
            for j in 0..m.len() {
                if i != j {
                    scale += g * m[i] * m[j] / (x[j] - x[i]).norm_squared();
                }
            }
        }

        prop_assert!(net.norm() <= 1e-10 * scale, "net {:?} scale {}", net, scale);
    }

    /// Distinct positions never produce NaN or infinite accelerations.
    #[test]
    fn prop_accelerations_finite(particles in system()) {
        let state = PhysicsState::new(1.0, particles, 0.01).unwrap();
        for a in state.compute_accelerations() {
            prop_assert!(a.x.is_finite() && a.y.is_finite());
        }
    }

    /// A lone body feels nothing, wherever it sits.
    #[test]
    fn prop_lone_body_unaccelerated(b in body()) {
        let state = PhysicsState::new(1.0, ParticleSet::from_bodies([b]).unwrap(), 0.01).unwrap();
        prop_assert_eq!(state.compute_accelerations(), vec![NVec2::zeros()]);
        prop_assert_eq!(state.compute_potential_energy(), 0.0);
    }

    /// Refreshing twice without stepping changes nothing.
    #[test]
    fn prop_refresh_idempotent(particles in system(), steps in 0usize..20) {
        let mut state = PhysicsState::new(1.0, particles, 0.001).unwrap();
        state.step_n(steps);
        state.refresh_diagnostics();
        let first = state.diagnostics();
        state.refresh_diagnostics();
        prop_assert_eq!(first, state.diagnostics());
    }

    /// Potential energy matches a direct loop over unordered pairs.
    #[test]
    fn prop_potential_counts_pairs_once(particles in system(), g in 0.1f64..20.0) {
        let state = PhysicsState::new(g, particles, 0.01).unwrap();
        let m = state.masses();
        let x = state.positions();

        let mut expected = 0.0;
        for i in 0..m.len() {
            for j in (i + 1)..m.len() {
                expected -= g * m[i] * m[j] / (x[j] - x[i]).norm();
            }
        }

        let pe = state.compute_potential_energy();
        prop_assert!((pe - expected).abs() <= 1e-12 * expected.abs().max(1.0));
    }
}
