//! # lane-emden: Polytropic Stellar Structure
//!
//! Numerical solution of the Lane-Emden equation
//!
//! ```text
//! (1/ξ²) d/dξ (ξ² dθ/dξ) = −θⁿ,    θ(0) = 1,  θ'(0) = 0
//! ```
//!
//! out to its first root ξ₁, the surface of a polytrope of index n.
//!
//! ## Features
//!
//! - Power-series start at a small offset from the singular centre
//! - Classical RK4 stepping with a scale-length step heuristic that
//!   creeps up to the root instead of overshooting it
//! - Sparse trajectory output with a minimum sample spacing
//! - Surface constants (ξ₁, θ'(ξ₁), mass, density contrast) for tables
//! - Closed-form references for n = 0, 1 and 5
//!
//! ## Basic Usage
//!
//! ```rust
//! use lane_emden::{Driver, LaneEmden, RunConfig};
//!
//! let sys = LaneEmden::new(1.5).unwrap();
//! let mut driver = Driver::new(RunConfig::default());
//! let traj = driver.integrate(&sys).unwrap();
//!
//! for (xi, [theta, dtheta]) in traj.iter() {
//!     assert!(xi > 0.0 && theta >= 0.0 && dtheta <= 0.0);
//! }
//!
//! let surface = traj.surface();
//! assert!((surface.xi1 - 3.65375).abs() < 1e-3);
//! ```
//!
//! The free function [`integrate`] takes the run parameters directly:
//!
//! ```rust
//! let traj = lane_emden::integrate(1.0, 1e-3, 10_000, 1e-6, 0.1).unwrap();
//! assert!((traj.root() - std::f64::consts::PI).abs() < 1e-3);
//! ```
//!
//! ## Failure modes
//!
//! - Index n = 5 has no finite root; the run ends with
//!   [`IntegrationError::NonConvergence`] once `max_steps` is spent.
//! - The derivative refuses ξ ≤ 0 and, for fractional n, θ < 0 with
//!   [`IntegrationError::Domain`].
//! - Non-positive offsets, precisions or spacings are rejected up front with
//!   [`IntegrationError::InvalidConfiguration`].
//!
//! ## Cargo features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Trajectory`], [`Surface`] and
//!   [`RunConfig`].
//!
//! ## References
//!
//! 1. Chandrasekhar, S. (1939). "An Introduction to the Study of Stellar
//!    Structure". University of Chicago Press, Chapter IV.
//!
//! 2. Horedt, G.P. (2004). "Polytropes: Applications in Astrophysics and
//!    Related Fields". Kluwer.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod analytic;
pub mod coefficients;
pub mod config;
pub mod driver;
pub mod error;
pub mod series;
pub mod stepper;
pub mod surface;
pub mod system;
pub mod trajectory;

pub use config::{RunConfig, STEP_FRACTION};
pub use driver::{integrate, Driver, Stats, StepRecord};
pub use error::{DomainReason, IntegrationError};
pub use series::near_origin;
pub use stepper::Rk4;
pub use surface::{tabulate, Surface};
pub use system::{LaneEmden, OdeSystem};
pub use trajectory::Trajectory;
