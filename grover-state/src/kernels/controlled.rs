//! Controlled gate kernels

use super::for_each_pair;
use grover_core::QubitId;
use num_complex::Complex64;

/// Multi-controlled NOT on pre-validated, distinct qubits
///
/// Swaps the `target` pair only where every control bit is 1.
pub(crate) fn multi_controlled_not_unchecked(
    amplitudes: &mut [Complex64],
    controls: &[QubitId],
    target: QubitId,
) {
    let control_mask = controls.iter().fold(0, |mask, q| mask | q.mask());
    debug_assert_eq!(control_mask & target.mask(), 0);
    for_each_pair(amplitudes, target.stride(), control_mask, |a, b| std::mem::swap(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(dimension: usize) -> Vec<Complex64> {
        (0..dimension).map(|i| Complex64::new(i as f64, 0.0)).collect()
    }

    fn labels(amplitudes: &[Complex64]) -> Vec<usize> {
        amplitudes.iter().map(|a| a.re as usize).collect()
    }

    #[test]
    fn test_cnot_control_high_target_low() {
        // control q1, target q0: swaps 2 <-> 3
        let mut amplitudes = labelled(4);
        multi_controlled_not_unchecked(&mut amplitudes, &[QubitId::new(1)], QubitId::new(0));
        assert_eq!(labels(&amplitudes), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_toffoli_permutation() {
        // controls q0,q2 target q1: swaps 0b101 <-> 0b111
        let mut amplitudes = labelled(8);
        multi_controlled_not_unchecked(
            &mut amplitudes,
            &[QubitId::new(0), QubitId::new(2)],
            QubitId::new(1),
        );
        assert_eq!(labels(&amplitudes), vec![0, 1, 2, 3, 4, 7, 6, 5]);
    }
}
