//! Classical Runge-Kutta 4 Coefficients
//!
//! Butcher tableau of the 4-stage, 4th-order method of Kutta (1901):
//!
//! ```text
//!   0  |
//!  1/2 | 1/2
//!  1/2 |  0   1/2
//!   1  |  0    0    1
//! -----+--------------------
//!      | 1/6  1/3  1/3  1/6
//! ```
//!
//! There is no embedded pair; step-size selection is left to the caller.

/// Number of stages in the RK4 method
pub const STAGES: usize = 4;

/// Order of the method
pub const ORDER: u8 = 4;

/// Node coefficients (c_i): stage i is evaluated at t_n + c[i]*h
pub const C: [f64; STAGES] = [0.0, 0.5, 0.5, 1.0];

/// Runge-Kutta matrix (a_ij), lower triangular
///
/// k_i = f(t_n + c_i*h, y_n + h * sum_{j=0}^{i-1} a_{i,j} * k_j)
pub const A: [[f64; STAGES - 1]; STAGES] = [
    [0.0, 0.0, 0.0],
    [0.5, 0.0, 0.0],
    [0.0, 0.5, 0.0],
    [0.0, 0.0, 1.0],
];

/// Weights (b_i) of the 4th order solution
pub const B: [f64; STAGES] = [1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = B.iter().sum();
        assert!((sum - 1.0).abs() < 1e-15, "sum(b) = {}", sum);
    }

    #[test]
    fn test_row_sums_match_nodes() {
        // Consistency: sum_j a_ij = c_i
        for i in 0..STAGES {
            let row: f64 = A[i].iter().sum();
            assert!(
                (row - C[i]).abs() < 1e-15,
                "row {} sums to {}, c = {}",
                i,
                row,
                C[i]
            );
        }
    }

    #[test]
    fn test_order_conditions() {
        // sum b_i c_i = 1/2, sum b_i c_i^2 = 1/3, sum b_i c_i^3 = 1/4
        let q1: f64 = (0..STAGES).map(|i| B[i] * C[i]).sum();
        let q2: f64 = (0..STAGES).map(|i| B[i] * C[i] * C[i]).sum();
        let q3: f64 = (0..STAGES).map(|i| B[i] * C[i].powi(3)).sum();
        assert!((q1 - 0.5).abs() < 1e-15);
        assert!((q2 - 1.0 / 3.0).abs() < 1e-15);
        assert!((q3 - 0.25).abs() < 1e-15);
        assert_eq!(ORDER, 4);
    }
}
