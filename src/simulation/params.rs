//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the two constants fixed for a run:
//! - gravitational constant `G`
//! - integration step size `dt`

use crate::error::InvalidInputError;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub G: f64,  // gravitational constant
    pub dt: f64, // fixed step size
}

impl Default for Parameters {
    fn default() -> Self {
        Self { G: 1.0, dt: 0.005 }
    }
}

impl Parameters {
    /// Check that `G` is finite and `dt` is a positive finite number.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if !self.G.is_finite() {
            return Err(InvalidInputError::NonFiniteGravitationalConstant(self.G));
        }
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(InvalidInputError::NonPositiveTimeStep(self.dt));
        }
        Ok(())
    }
}
