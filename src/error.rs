//! Errors reported by the derivative function, the stepper and the driver.

use thiserror::Error;

/// Why the Lane-Emden right-hand side could not be evaluated
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainReason {
    /// The `2·θ'/ξ` term is singular at (and before) the origin
    #[error("xi must be strictly positive")]
    SingularOrigin,
    /// θ went negative while the index is fractional, so θⁿ has no real value
    #[error("theta = {theta} has no real power {index}")]
    NegativeBase {
        /// Offending value of θ
        theta: f64,
        /// Polytropic index of the system
        index: f64,
    },
}

/// Errors that can occur during integration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    /// The derivative function was evaluated outside its domain
    #[error("derivative undefined at xi = {xi}: {reason}")]
    Domain {
        /// Independent variable at the failed evaluation
        xi: f64,
        /// What made the evaluation undefined
        reason: DomainReason,
    },
    /// The step size never dropped below the precision threshold
    #[error("no root after {steps} steps (xi = {xi}, last step {dx})")]
    NonConvergence {
        /// Number of steps taken
        steps: usize,
        /// Independent variable reached
        xi: f64,
        /// Last step size attempted
        dx: f64,
    },
    /// Rejected before integration began
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of the invalid input
        message: String,
    },
    /// State or step size became NaN or infinite
    #[error("non-finite state detected at xi = {xi}")]
    NonFiniteState {
        /// Independent variable at which the non-finite value appeared
        xi: f64,
    },
}

impl IntegrationError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        IntegrationError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = IntegrationError::Domain {
            xi: 0.0,
            reason: DomainReason::SingularOrigin,
        };
        assert_eq!(
            err.to_string(),
            "derivative undefined at xi = 0: xi must be strictly positive"
        );

        let err = IntegrationError::invalid("h must be positive");
        assert_eq!(err.to_string(), "invalid configuration: h must be positive");

        let err = IntegrationError::NonConvergence {
            steps: 10,
            xi: 2.5,
            dx: 0.125,
        };
        assert!(err.to_string().contains("10 steps"));
    }

    #[test]
    fn test_negative_base_message() {
        let reason = DomainReason::NegativeBase {
            theta: -0.5,
            index: 1.5,
        };
        assert_eq!(reason.to_string(), "theta = -0.5 has no real power 1.5");

        let err = IntegrationError::Domain { xi: 2.0, reason };
        assert_eq!(
            err.to_string(),
            "derivative undefined at xi = 2: theta = -0.5 has no real power 1.5"
        );
    }
}
