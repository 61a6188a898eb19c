//! Settled snapshots handed from the stepping thread to readers.
//!
//! A renderer or reporter must never observe positions mid-step. The writer
//! builds a complete [`Frame`] and publishes it through a [`FrameExchange`];
//! the lock is held only for the `Arc` swap, so readers and the writer never
//! wait on each other's work.

use std::sync::{Arc, PoisonError, RwLock};

use crate::simulation::diagnostics::Diagnostics;
use crate::simulation::states::{NVec2, Particle};

/// Immutable view of one settled state.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub steps: u64,
    pub time: f64,
    pub particles: Vec<Particle>,
    pub diagnostics: Diagnostics,
}

impl Frame {
    /// Positions relative to the center of mass, the frame a viewer centers on.
    pub fn relative_positions(&self) -> Vec<NVec2> {
        let com = self.diagnostics.center_of_mass;
        self.particles.iter().map(|p| p.position - com).collect()
    }
}

/// Single-writer publish slot for the latest [`Frame`].
#[derive(Debug, Clone)]
pub struct FrameExchange {
    latest: Arc<RwLock<Arc<Frame>>>,
}

impl FrameExchange {
    pub fn new(initial: Frame) -> Self {
        Self {
            latest: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    /// Replace the published frame.
    pub fn publish(&self, frame: Frame) {
        let frame = Arc::new(frame);
        // a panicked reader cannot leave a half-written Arc behind
        let mut slot = self.latest.write().unwrap_or_else(PoisonError::into_inner);
        *slot = frame;
    }

    /// Most recently published frame.
    pub fn latest(&self) -> Arc<Frame> {
        let slot = self.latest.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*slot)
    }
}
