//! Surface values of a polytrope and derived structure constants.

use crate::config::RunConfig;
use crate::driver::Driver;
use crate::error::IntegrationError;
use crate::system::LaneEmden;

/// Values at the first root ξ₁ of one polytrope
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surface {
    /// Polytropic index n
    pub index: f64,
    /// First root ξ₁
    pub xi1: f64,
    /// dθ/dξ at ξ₁
    pub dtheta_dxi: f64,
}

impl Surface {
    /// Dimensionless mass −ξ₁²·θ'(ξ₁)
    pub fn mass_integral(&self) -> f64 {
        -self.xi1 * self.xi1 * self.dtheta_dxi
    }

    /// Central to mean density ratio ρc/ρ̄ = −ξ₁ / (3·θ'(ξ₁))
    pub fn density_contrast(&self) -> f64 {
        -self.xi1 / (3.0 * self.dtheta_dxi)
    }
}

/// Integrate each index in turn and collect its surface values
///
/// Runs are independent; a failure for one index (e.g. n = 5, which has no
/// finite root) does not stop the others.
pub fn tabulate(indices: &[f64], config: &RunConfig) -> Vec<Result<Surface, IntegrationError>> {
    let mut driver = Driver::new(*config);
    indices
        .iter()
        .map(|&n| {
            let sys = LaneEmden::new(n)?;
            Ok(driver.integrate(&sys)?.surface())
        })
        .collect()
}
