//! Surface constants of the classical polytropes.
//!
//! Integrates each index out to its first root and prints ξ₁, θ'(ξ₁), the
//! mass integral and the central density contrast. n = 5 is included to show
//! the non-convergence report.
//!
//! Run with:
//!   cargo run --example polytropes

use lane_emden::analytic::exact_root;
use lane_emden::{tabulate, IntegrationError, RunConfig};

fn main() {
    let indices = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0];
    let config = RunConfig::default();

    println!("Lane-Emden polytropes (h = {}, prec = {:e})", config.h, config.prec);
    println!();
    println!(
        "  {:>4}  {:>10}  {:>12}  {:>10}  {:>12}",
        "n", "xi_1", "theta'", "mass", "rho_c/rho"
    );

    for (&n, result) in indices.iter().zip(tabulate(&indices, &config)) {
        match result {
            Ok(s) => {
                print!(
                    "  {:>4.1}  {:>10.5}  {:>12.5e}  {:>10.5}  {:>12.5}",
                    n,
                    s.xi1,
                    s.dtheta_dxi,
                    s.mass_integral(),
                    s.density_contrast()
                );
                match exact_root(n) {
                    Some(exact) => println!("   (exact xi_1 {:.5})", exact),
                    None => println!(),
                }
            }
            Err(IntegrationError::NonConvergence { steps, xi, .. }) => {
                println!("  {:>4.1}  no root after {} steps (xi = {:.3e})", n, steps, xi);
            }
            Err(e) => println!("  {:>4.1}  error: {}", n, e),
        }
    }
}
