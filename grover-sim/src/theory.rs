//! Closed-form predictions for Grover search with one marked state
//!
//! With θ = asin(1/√N), k iterations rotate the state to an angle of
//! (2k+1)·θ from the unmarked subspace.

use std::f64::consts::FRAC_PI_4;

/// Rotation angle θ = asin(1/√N) of one Grover iteration over n qubits
pub fn rotation_angle(num_qubits: usize) -> f64 {
    let dimension = (num_qubits as f64).exp2();
    (1.0 / dimension.sqrt()).asin()
}

/// Iteration count that maximizes the success probability
///
/// max(1, ⌊π/4 · √N⌋). The engine does not enforce it; running past the
/// optimum lowers the success probability again.
///
/// ```
/// use grover_sim::theory::optimal_iterations;
///
/// assert_eq!(optimal_iterations(2), 1);
/// assert_eq!(optimal_iterations(3), 2);
/// assert_eq!(optimal_iterations(10), 25);
/// ```
pub fn optimal_iterations(num_qubits: usize) -> usize {
    let dimension = (num_qubits as f64).exp2();
    ((FRAC_PI_4 * dimension.sqrt()).floor() as usize).max(1)
}

/// Probability of measuring the marked state after `iterations` rounds
///
/// sin²((2k+1)·θ).
pub fn success_probability(num_qubits: usize, iterations: usize) -> f64 {
    let theta = rotation_angle(num_qubits);
    ((2 * iterations + 1) as f64 * theta).sin().powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_optimal_iterations() {
        assert_eq!(optimal_iterations(1), 1);
        assert_eq!(optimal_iterations(2), 1);
        assert_eq!(optimal_iterations(3), 2);
        assert_eq!(optimal_iterations(4), 3);
        assert_eq!(optimal_iterations(5), 4);
        assert_eq!(optimal_iterations(8), 12);
    }

    #[test]
    fn test_success_probability_known_values() {
        // No iterations: uniform superposition
        assert_relative_eq!(success_probability(3, 0), 1.0 / 8.0, epsilon = 1e-12);
        // Two qubits: one round is exact
        assert_relative_eq!(success_probability(2, 1), 1.0, epsilon = 1e-12);
        // ... and the second overshoots back to 1/4
        assert_relative_eq!(success_probability(2, 2), 0.25, epsilon = 1e-12);
        // One qubit never amplifies
        assert_relative_eq!(success_probability(1, 1), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_optimum_is_near_peak() {
        for n in 2..=12 {
            let k = optimal_iterations(n);
            assert!(success_probability(n, k) > 0.9, "n = {}", n);
        }
    }
}
