//! Adaptive driver: integrates from the centre out to the first root.
//!
//! The step size is a fixed fraction of the local scale length
//!
//! ```text
//! H_P = ( |θ/θ'| , |θ'/θ''| )
//! dx  = 0.05 · min(H_P)
//! ```
//!
//! As θ → 0 the first component collapses, so the steps shrink geometrically
//! and the solution creeps up to the root without crossing it. Once `dx`
//! drops below the configured precision the root is placed one scale length
//! ahead of the last step.

use crate::config::{RunConfig, STEP_FRACTION};
use crate::error::IntegrationError;
use crate::stepper::Rk4;
use crate::system::{LaneEmden, OdeSystem};
use crate::trajectory::Trajectory;

/// Integration statistics for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Total number of function evaluations
    pub fn_evals: u64,
    /// Number of RK4 steps taken
    pub steps: usize,
    /// Number of samples stored in the trajectory
    pub stored: usize,
}

/// One dense step as seen by an observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    /// ξ after the step
    pub xi: f64,
    /// State after the step
    pub y: [f64; 2],
    /// Step size that was taken
    pub dx: f64,
}

/// Scale-length adaptive RK4 driver for the Lane-Emden equation
///
/// # Example
/// ```
/// use lane_emden::{Driver, LaneEmden, RunConfig};
///
/// let sys = LaneEmden::new(1.0).unwrap();
/// let mut driver = Driver::new(RunConfig::default());
/// let traj = driver.integrate(&sys).unwrap();
///
/// let xi1 = traj.root();
/// assert!((xi1 - std::f64::consts::PI).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct Driver {
    config: RunConfig,
    stepper: Rk4<2>,
    /// Statistics of the most recent run
    pub stats: Stats,
}

impl Driver {
    /// Create a driver for the given configuration
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            stepper: Rk4::new(),
            stats: Stats::default(),
        }
    }

    /// Configuration used by this driver
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Integrate from ξ = h to the first root
    ///
    /// # Returns
    /// * `Ok(Trajectory)` ending at the extrapolated root
    /// * `Err(IntegrationError)` on invalid configuration, a domain error in
    ///   the derivative, or when `max_steps` is exhausted
    pub fn integrate(&mut self, sys: &LaneEmden) -> Result<Trajectory, IntegrationError> {
        self.integrate_observed(sys, |_| {})
    }

    /// Like [`integrate`](Self::integrate), calling `observer` after every
    /// dense step
    ///
    /// The dense steps are not retained; the observer is the only way to see
    /// them.
    pub fn integrate_observed<F>(
        &mut self,
        sys: &LaneEmden,
        mut observer: F,
    ) -> Result<Trajectory, IntegrationError>
    where
        F: FnMut(&StepRecord),
    {
        self.config.validate()?;
        self.stats = Stats::default();
        self.stepper.fn_evals = 0;

        let h = self.config.h;
        let mut traj = Trajectory::start(sys.index(), h, sys.start(h));
        let result = self.march(sys, &mut traj, &mut observer);
        self.finish(&traj);
        result.map(|()| traj)
    }

    /// Step from the last stored sample until the root is reached
    fn march<F>(
        &mut self,
        sys: &LaneEmden,
        traj: &mut Trajectory,
        observer: &mut F,
    ) -> Result<(), IntegrationError>
    where
        F: FnMut(&StepRecord),
    {
        let RunConfig {
            max_steps,
            prec,
            dx_store,
            ..
        } = self.config;

        let (mut xi, mut y) = traj.last();
        let mut dx = f64::NAN;

        for step in 1..=max_steps {
            let scale = self.scale_length(sys, xi, &y)?;
            dx = STEP_FRACTION * scale[0].min(scale[1]);
            if !dx.is_finite() {
                return Err(IntegrationError::NonFiniteState { xi });
            }
            // Step lost below the resolution of ξ; θ would keep falling at a
            // frozen ξ and fake a root.
            if xi + dx <= xi {
                return Err(IntegrationError::NonConvergence {
                    steps: step - 1,
                    xi,
                    dx,
                });
            }

            y = self.stepper.step(sys, xi, &y, dx)?;
            xi += dx;
            self.stats.steps = step;
            if !y.iter().all(|v| v.is_finite()) {
                return Err(IntegrationError::NonFiniteState { xi });
            }

            observer(&StepRecord { xi, y, dx });

            if dx < prec {
                // Linear extrapolation over the θ scale length
                traj.push(xi + scale[0], y);
                return Ok(());
            }

            if xi - traj.last_xi() > dx_store {
                traj.push(xi, y);
            }
        }

        Err(IntegrationError::NonConvergence {
            steps: max_steps,
            xi,
            dx,
        })
    }

    /// Componentwise |y / f(ξ, y)|
    fn scale_length(
        &mut self,
        sys: &LaneEmden,
        xi: f64,
        y: &[f64; 2],
    ) -> Result<[f64; 2], IntegrationError> {
        let mut dydx = [0.0; 2];
        sys.rhs(xi, y, &mut dydx)?;
        self.stats.fn_evals += 1;
        Ok([(y[0] / dydx[0]).abs(), (y[1] / dydx[1]).abs()])
    }

    fn finish(&mut self, traj: &Trajectory) {
        self.stats.fn_evals += self.stepper.fn_evals;
        self.stats.stored = traj.len();
    }
}

/// Integrate the Lane-Emden equation of index `n` out to its first root
///
/// # Arguments
/// * `n` - Polytropic index, finite and non-negative
/// * `h` - Starting offset from the origin (typically 1e-3)
/// * `max_steps` - Step budget
/// * `prec` - Step size at which the root is considered reached (typically 1e-6)
/// * `dx_store` - Minimum ξ spacing of stored samples (typically 0.1)
///
/// # Example
/// ```
/// let traj = lane_emden::integrate(0.0, 1e-3, 10_000, 1e-6, 0.1).unwrap();
/// assert!((traj.root() - 6.0_f64.sqrt()).abs() < 1e-3);
/// ```
pub fn integrate(
    n: f64,
    h: f64,
    max_steps: usize,
    prec: f64,
    dx_store: f64,
) -> Result<Trajectory, IntegrationError> {
    let config = RunConfig::new(h, max_steps, prec, dx_store);
    config.validate()?;
    let sys = LaneEmden::new(n)?;
    Driver::new(config).integrate(&sys)
}
