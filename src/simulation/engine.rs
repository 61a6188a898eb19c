//! High-level runtime engine settings
//!
//! Controls how a [`Simulation`](super::driver::Simulation) is driven:
//! physics ticks per frame, frame count, and the energy-drift alarm.
//! None of these affect the result of an individual step.

/// Physics ticks per displayed frame used when nothing else is configured
pub const DEFAULT_REFRESH_RATE: usize = 100;

/// Frames produced by a headless run when nothing else is configured
pub const DEFAULT_FRAMES: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub refresh_rate: usize,              // step() calls per frame
    pub frames: usize,                    // frames to produce in a headless run
    pub max_energy_drift: Option<f64>,    // relative drift that triggers a warning
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            refresh_rate: DEFAULT_REFRESH_RATE,
            frames: DEFAULT_FRAMES,
            max_energy_drift: None,
        }
    }
}
