//! Right-hand side of the Lane-Emden equation as a first-order system.
//!
//! With y = (θ, dθ/dξ) the equation
//!
//! ```text
//! (1/ξ²) d/dξ (ξ² dθ/dξ) = −θⁿ
//! ```
//!
//! becomes y0' = y1, y1' = −y0ⁿ − 2·y1/ξ.

use crate::error::{DomainReason, IntegrationError};
use crate::series;

/// System of ordinary differential equations: dy/dt = f(t, y)
pub trait OdeSystem<const N: usize> {
    /// Evaluate the right-hand side of the ODE system
    ///
    /// # Arguments
    /// * `t` - Current value of the independent variable
    /// * `y` - Current state vector
    /// * `dydt` - Output: derivative dy/dt
    ///
    /// Returns an error instead of writing NaN when `(t, y)` lies outside the
    /// domain of the system.
    fn rhs(&self, t: f64, y: &[f64; N], dydt: &mut [f64; N]) -> Result<(), IntegrationError>;
}

/// Lane-Emden system for a fixed polytropic index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneEmden {
    index: f64,
}

impl LaneEmden {
    /// Create the system for index `n`, which must be finite and non-negative
    pub fn new(n: f64) -> Result<Self, IntegrationError> {
        if !n.is_finite() || n < 0.0 {
            return Err(IntegrationError::invalid(format!(
                "polytropic index must be finite and non-negative, got {}",
                n
            )));
        }
        Ok(Self { index: n })
    }

    /// Polytropic index n
    pub fn index(&self) -> f64 {
        self.index
    }

    /// Whether θⁿ is real for negative θ
    pub fn has_integer_index(&self) -> bool {
        self.index.fract() == 0.0
    }

    /// State (θ, θ') at ξ = h from the series expansion about the origin
    pub fn start(&self, h: f64) -> [f64; 2] {
        series::near_origin(h, self.index)
    }
}

impl OdeSystem<2> for LaneEmden {
    fn rhs(&self, xi: f64, y: &[f64; 2], dydt: &mut [f64; 2]) -> Result<(), IntegrationError> {
        if xi.is_nan() || xi <= 0.0 {
            return Err(IntegrationError::Domain {
                xi,
                reason: DomainReason::SingularOrigin,
            });
        }
        if y[0] < 0.0 && !self.has_integer_index() {
            return Err(IntegrationError::Domain {
                xi,
                reason: DomainReason::NegativeBase {
                    theta: y[0],
                    index: self.index,
                },
            });
        }

        dydt[0] = y[1];
        dydt[1] = -y[0].powf(self.index) - 2.0 * y[1] / xi;
        Ok(())
    }
}
