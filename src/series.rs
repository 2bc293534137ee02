//! Power-series start near the singular origin.
//!
//! Expanding θ about ξ = 0 with θ(0) = 1, θ'(0) = 0 gives
//!
//! ```text
//! θ(ξ) = 1 − ξ²/6 + n ξ⁴/120 − n(8n − 5) ξ⁶/15120 + O(ξ⁸)
//! ```
//!
//! Starting the integration at a small ξ = h from this expansion avoids
//! evaluating the `2·θ'/ξ` term at ξ = 0.

/// State (θ, dθ/dξ) at ξ = `h` for index `n`
pub fn near_origin(h: f64, n: f64) -> [f64; 2] {
    let h2 = h * h;
    let c6 = n * (8.0 * n - 5.0);

    let theta = 1.0 + h2 * (-1.0 / 6.0 + h2 * (n / 120.0 - c6 * h2 / 15120.0));
    let dtheta = h * (-1.0 / 3.0 + h2 * (n / 30.0 - c6 * h2 / 2520.0));

    [theta, dtheta]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytic::{exact_dtheta, exact_theta};

    #[test]
    fn test_index_zero_is_exact() {
        let h = 0.3;
        let [theta, dtheta] = near_origin(h, 0.0);
        assert!((theta - (1.0 - h * h / 6.0)).abs() < 1e-15);
        assert!((dtheta + h / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_starts_at_unity() {
        let [theta, dtheta] = near_origin(0.0, 3.0);
        assert_eq!(theta, 1.0);
        assert_eq!(dtheta, 0.0);
    }

    #[test]
    fn test_eighth_order_against_closed_forms() {
        for &n in &[1.0, 5.0] {
            for &h in &[0.05, 0.1, 0.2] {
                let [theta, _] = near_origin(h, n);
                let err = (theta - exact_theta(n, h).unwrap()).abs();
                // Leading omitted coefficient is 1/362880 for n = 1, 35/10368 for n = 5
                assert!(
                    err < 1e-2 * h.powi(8),
                    "n = {}, h = {}: error {:.3e} not O(h^8)",
                    n,
                    h,
                    err
                );
            }
        }
    }

    #[test]
    fn test_error_scales_as_h8() {
        let n = 5.0;
        let err = |h: f64| (near_origin(h, n)[0] - exact_theta(n, h).unwrap()).abs();
        let ratio = err(0.2) / err(0.1);
        // 2^8 = 256
        assert!(
            (200.0..300.0).contains(&ratio),
            "error ratio {} inconsistent with 8th order",
            ratio
        );
    }

    #[test]
    fn test_derivative_matches_closed_form() {
        let h = 0.05;
        for &n in &[0.0, 1.0, 5.0] {
            let [_, dtheta] = near_origin(h, n);
            let exact = exact_dtheta(n, h).unwrap();
            assert!(
                (dtheta - exact).abs() < 1e-10,
                "n = {}: series {} vs exact {}",
                n,
                dtheta,
                exact
            );
        }
    }
}
