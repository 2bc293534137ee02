//! Fixed-step classical Runge-Kutta 4 stepper.
//!
//! Advances the state by exactly one step of the given size. There is no
//! error estimate; the caller owns step-size selection.

use crate::coefficients::{A, B, C, STAGES};
use crate::error::IntegrationError;
use crate::system::OdeSystem;

/// Classical RK4 stepper
///
/// # Type Parameters
/// * `N` - Dimension of the state vector
///
/// # Example
/// ```
/// use lane_emden::{IntegrationError, OdeSystem, Rk4};
///
/// struct Decay;
///
/// impl OdeSystem<1> for Decay {
///     fn rhs(&self, _t: f64, y: &[f64; 1], dydt: &mut [f64; 1]) -> Result<(), IntegrationError> {
///         dydt[0] = -y[0];
///         Ok(())
///     }
/// }
///
/// let mut rk4 = Rk4::new();
/// let y1 = rk4.step(&Decay, 0.0, &[1.0], 0.01).unwrap();
/// assert!((y1[0] - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Rk4<const N: usize> {
    /// Stage evaluations (pre-allocated workspace)
    k: [[f64; N]; STAGES],
    /// Total number of function evaluations
    pub fn_evals: u64,
}

impl<const N: usize> Default for Rk4<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Rk4<N> {
    /// Create a stepper with a zeroed workspace
    pub fn new() -> Self {
        Self {
            k: [[0.0; N]; STAGES],
            fn_evals: 0,
        }
    }

    /// Advance `y` from `t` to `t + h`
    ///
    /// Any domain error raised by the system at one of the stages is returned
    /// unchanged.
    pub fn step<S: OdeSystem<N>>(
        &mut self,
        sys: &S,
        t: f64,
        y: &[f64; N],
        h: f64,
    ) -> Result<[f64; N], IntegrationError> {
        self.compute_stages(sys, t, y, h)?;
        Ok(self.compute_solution(y, h))
    }

    /// Compute all 4 stages
    #[allow(clippy::needless_range_loop)]
    fn compute_stages<S: OdeSystem<N>>(
        &mut self,
        sys: &S,
        t: f64,
        y: &[f64; N],
        h: f64,
    ) -> Result<(), IntegrationError> {
        let mut y_temp = [0.0; N];

        sys.rhs(t, y, &mut self.k[0])?;
        self.fn_evals += 1;

        for i in 1..STAGES {
            // y_temp = y + h * sum_{j<i} a[i][j] * k[j]
            for n in 0..N {
                let mut sum = 0.0;
                for j in 0..i {
                    sum += A[i][j] * self.k[j][n];
                }
                y_temp[n] = y[n] + h * sum;
            }

            sys.rhs(t + C[i] * h, &y_temp, &mut self.k[i])?;
            self.fn_evals += 1;
        }
        Ok(())
    }

    /// Combine the stages into the 4th order solution
    #[allow(clippy::needless_range_loop)]
    fn compute_solution(&self, y: &[f64; N], h: f64) -> [f64; N] {
        let mut y_new = [0.0; N];

        for n in 0..N {
            let mut sum = 0.0;
            for i in 0..STAGES {
                sum += B[i] * self.k[i][n];
            }
            y_new[n] = y[n] + h * sum;
        }

        y_new
    }
}
