pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod diagnostics;
pub mod physics;
pub mod frame;
pub mod driver;
pub mod scenario;
