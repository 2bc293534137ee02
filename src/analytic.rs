//! Closed-form solutions for the three integrable indices.
//!
//! | n | θ(ξ)                 | ξ₁   |
//! |---|----------------------|------|
//! | 0 | 1 − ξ²/6             | √6   |
//! | 1 | sin ξ / ξ            | π    |
//! | 5 | (1 + ξ²/3)^(−1/2)    | ∞    |
//!
//! Used as reference values when validating the integrator.

/// Exact θ(ξ), or `None` when `n` has no closed form
pub fn exact_theta(n: f64, xi: f64) -> Option<f64> {
    if n == 0.0 {
        Some(1.0 - xi * xi / 6.0)
    } else if n == 1.0 {
        if xi == 0.0 {
            Some(1.0)
        } else {
            Some(xi.sin() / xi)
        }
    } else if n == 5.0 {
        Some((1.0 + xi * xi / 3.0).powf(-0.5))
    } else {
        None
    }
}

/// Exact dθ/dξ, or `None` when `n` has no closed form
pub fn exact_dtheta(n: f64, xi: f64) -> Option<f64> {
    if n == 0.0 {
        Some(-xi / 3.0)
    } else if n == 1.0 {
        if xi == 0.0 {
            Some(0.0)
        } else {
            Some((xi * xi.cos() - xi.sin()) / (xi * xi))
        }
    } else if n == 5.0 {
        Some(-xi / 3.0 * (1.0 + xi * xi / 3.0).powf(-1.5))
    } else {
        None
    }
}

/// First root ξ₁ for the integrable indices
///
/// Returns `None` for n = 5 (θ only vanishes as ξ → ∞) and for indices
/// without a closed form.
pub fn exact_root(n: f64) -> Option<f64> {
    if n == 0.0 {
        Some(6.0_f64.sqrt())
    } else if n == 1.0 {
        Some(std::f64::consts::PI)
    } else {
        None
    }
}
