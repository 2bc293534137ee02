//! Run configuration for the adaptive driver.

use crate::error::IntegrationError;

/// Fraction of the local scale length taken as the step size
pub const STEP_FRACTION: f64 = 0.05;

/// Settings fixed for the duration of one integration call
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Offset from the origin at which integration starts (default: 1e-3)
    pub h: f64,
    /// Maximum number of steps before giving up (default: 10_000)
    pub max_steps: usize,
    /// Step size below which the root is considered reached (default: 1e-6)
    pub prec: f64,
    /// Minimum ξ spacing between stored samples (default: 0.1)
    pub dx_store: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            h: 1e-3,
            max_steps: 10_000,
            prec: 1e-6,
            dx_store: 0.1,
        }
    }
}

impl RunConfig {
    /// Create a configuration from explicit values
    pub fn new(h: f64, max_steps: usize, prec: f64, dx_store: f64) -> Self {
        Self {
            h,
            max_steps,
            prec,
            dx_store,
        }
    }

    /// Set the starting offset
    pub fn with_offset(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Set the step budget
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Set the convergence threshold on the step size
    pub fn with_precision(mut self, prec: f64) -> Self {
        self.prec = prec;
        self
    }

    /// Set the storage spacing
    pub fn with_store_spacing(mut self, dx_store: f64) -> Self {
        self.dx_store = dx_store;
        self
    }

    /// Check the configuration before any integration work is done
    pub fn validate(&self) -> Result<(), IntegrationError> {
        for (name, value) in [("h", self.h), ("prec", self.prec), ("dx_store", self.dx_store)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(IntegrationError::invalid(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if self.max_steps == 0 {
            return Err(IntegrationError::invalid("max_steps must be at least 1"));
        }
        // Near the origin the step is STEP_FRACTION * h; a smaller prec would
        // be met on the first step and report a root at the centre.
        if STEP_FRACTION * self.h <= self.prec {
            return Err(IntegrationError::invalid(format!(
                "prec = {} must be smaller than the first step {}",
                self.prec,
                STEP_FRACTION * self.h
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = RunConfig::default()
            .with_offset(1e-2)
            .with_max_steps(50)
            .with_precision(1e-8)
            .with_store_spacing(0.5);
        assert_eq!(config, RunConfig::new(1e-2, 50, 1e-8, 0.5));
    }

    #[test]
    fn test_non_positive_values_rejected() {
        let base = RunConfig::default();
        let cases = [
            base.with_offset(0.0),
            base.with_offset(-1e-3),
            base.with_precision(0.0),
            base.with_precision(f64::NAN),
            base.with_store_spacing(-0.1),
            base.with_store_spacing(f64::INFINITY),
            base.with_max_steps(0),
        ];
        for config in cases {
            let result = config.validate();
            assert!(
                matches!(result, Err(IntegrationError::InvalidConfiguration { .. })),
                "Expected InvalidConfiguration for {:?}, got {:?}",
                config,
                result
            );
        }
    }

    #[test]
    fn test_precision_coarser_than_first_step_rejected() {
        // First step is 0.05 * 1e-5 = 5e-7 < 1e-6
        let config = RunConfig::default().with_offset(1e-5);
        assert!(config.validate().is_err());
    }
}
