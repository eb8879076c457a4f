//! Single-qubit gate kernels

use super::for_each_pair;
use grover_core::QubitId;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// Hadamard on a pre-validated qubit
pub(crate) fn hadamard_unchecked(amplitudes: &mut [Complex64], qubit: QubitId) {
    for_each_pair(amplitudes, qubit.stride(), 0, |a, b| {
        let (x, y) = (*a, *b);
        *a = (x + y) * FRAC_1_SQRT_2;
        *b = (x - y) * FRAC_1_SQRT_2;
    });
}

/// Pauli-X on a pre-validated qubit; a pure swap, so exactly reversible
pub(crate) fn pauli_x_unchecked(amplitudes: &mut [Complex64], qubit: QubitId) {
    for_each_pair(amplitudes, qubit.stride(), 0, |a, b| std::mem::swap(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hadamard_pair_arithmetic() {
        let mut amplitudes = vec![Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8)];
        hadamard_unchecked(&mut amplitudes, QubitId::new(0));

        assert_abs_diff_eq!(amplitudes[0].re, 0.6 * FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(amplitudes[0].im, 0.8 * FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(amplitudes[1].re, 0.6 * FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(amplitudes[1].im, -0.8 * FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_pauli_x_swaps_pairs_on_high_qubit() {
        let mut amplitudes: Vec<Complex64> = (0..4).map(|i| Complex64::new(i as f64, 0.0)).collect();
        pauli_x_unchecked(&mut amplitudes, QubitId::new(1));
        let re: Vec<f64> = amplitudes.iter().map(|a| a.re).collect();
        assert_eq!(re, vec![2.0, 3.0, 0.0, 1.0]);
    }
}
