//! Gate application kernels
//!
//! Stateless functions that transform a [`StateVector`] in place by index
//! arithmetic. Each gate touches amplitude pairs `(i, i + 2^target)`; pairs
//! are disjoint, so large vectors are split across rayon workers in blocks
//! of `2 · 2^target` amplitudes and every pair stays inside one block.
//!
//! All checked entry points validate their qubits before touching any
//! amplitude: a failed call leaves the state exactly as it was.

mod controlled;
mod single_qubit;

use crate::error::Result;
use crate::state_vector::StateVector;
use grover_core::{Gate, QubitId};
use log::trace;
use num_complex::Complex64;

pub(crate) use single_qubit::hadamard_unchecked;

/// Vectors with at least this many amplitudes use parallel kernels
pub const PARALLEL_MIN_DIMENSION: usize = 1 << 14;

/// Hadamard on `qubit`: (a, b) → ((a+b)/√2, (a−b)/√2)
pub fn hadamard(state: &mut StateVector, qubit: QubitId) -> Result<()> {
    apply_gate(state, &Gate::Hadamard(qubit))
}

/// Pauli-X on `qubit`: swaps every amplitude pair
pub fn pauli_x(state: &mut StateVector, qubit: QubitId) -> Result<()> {
    apply_gate(state, &Gate::PauliX(qubit))
}

/// Flip `target` on indices where every control bit is 1
///
/// An empty control list makes this a plain Pauli-X.
pub fn multi_controlled_not(
    state: &mut StateVector,
    controls: &[QubitId],
    target: QubitId,
) -> Result<()> {
    apply_gate(state, &Gate::mcx(controls, target))
}

/// Negate amplitudes whose control bits and target bit are all 1
///
/// Realized as H(target) · MCX(controls, target) · H(target), the same
/// decomposition a circuit trace records.
///
/// ```
/// use grover_core::QubitId;
/// use grover_state::{kernels, StateVector};
///
/// let mut state = StateVector::uniform(2).unwrap();
/// kernels::multi_controlled_phase_flip(&mut state, &[QubitId::new(0)], QubitId::new(1)).unwrap();
/// assert!(state.amplitudes()[3].re < 0.0);
/// assert!(state.amplitudes()[0].re > 0.0);
/// ```
pub fn multi_controlled_phase_flip(
    state: &mut StateVector,
    controls: &[QubitId],
    target: QubitId,
) -> Result<()> {
    apply_gates(state, &phase_flip_gates(controls, target)).map(|_| ())
}

/// The H · MCX · H sequence realizing a multi-controlled Z
pub fn phase_flip_gates(controls: &[QubitId], target: QubitId) -> [Gate; 3] {
    [
        Gate::Hadamard(target),
        Gate::mcx(controls, target),
        Gate::Hadamard(target),
    ]
}

/// Apply one tagged gate
///
/// # Errors
/// [`StateError::InvalidGate`](crate::StateError::InvalidGate) if a qubit is
/// out of range or repeated; the state is not modified in that case.
pub fn apply_gate(state: &mut StateVector, gate: &Gate) -> Result<()> {
    gate.validate(state.num_qubits())?;
    trace!("apply {}", gate);

    let amplitudes = state.amplitudes_mut();
    match gate {
        Gate::Hadamard(qubit) => hadamard_unchecked(amplitudes, *qubit),
        Gate::PauliX(qubit) => single_qubit::pauli_x_unchecked(amplitudes, *qubit),
        Gate::MultiControlledX { controls, target } => {
            controlled::multi_controlled_not_unchecked(amplitudes, controls, *target)
        }
    }
    Ok(())
}

/// Apply gates in order, returning how many were applied
///
/// Every gate is validated before the first one runs, so an invalid
/// sequence leaves the state untouched.
pub fn apply_gates<'a, I>(state: &mut StateVector, gates: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Gate>,
    I::IntoIter: Clone,
{
    let gates = gates.into_iter();
    for gate in gates.clone() {
        gate.validate(state.num_qubits())?;
    }

    let mut applied = 0;
    for gate in gates {
        apply_gate(state, gate)?;
        applied += 1;
    }
    Ok(applied)
}

/// Visit every amplitude pair `(i, i + stride)` whose index has all bits of
/// `control_mask` set
///
/// `control_mask` must not include the stride bit.
fn for_each_pair<F>(amplitudes: &mut [Complex64], stride: usize, control_mask: usize, op: F)
where
    F: Fn(&mut Complex64, &mut Complex64) + Send + Sync,
{
    let block = stride << 1;
    let visit = |(block_index, chunk): (usize, &mut [Complex64])| {
        let base = block_index * block;
        let (low, high) = chunk.split_at_mut(stride);
        for (offset, (a, b)) in low.iter_mut().zip(high.iter_mut()).enumerate() {
            if (base + offset) & control_mask == control_mask {
                op(a, b);
            }
        }
    };

    if amplitudes.len() >= PARALLEL_MIN_DIMENSION {
        use rayon::prelude::*;
        amplitudes.par_chunks_mut(block).enumerate().for_each(visit);
    } else {
        amplitudes.chunks_mut(block).enumerate().for_each(visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StateError;
    use approx::assert_abs_diff_eq;
    use grover_core::QuantumError;
    use num_complex::Complex64;
    use proptest::prelude::*;

    fn q(i: usize) -> QubitId {
        QubitId::new(i)
    }

    fn basis(num_qubits: usize, index: usize) -> StateVector {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        StateVector::from_amplitudes(num_qubits, &amplitudes).unwrap()
    }

    fn arbitrary_state(num_qubits: usize, seed: u64) -> StateVector {
        let mut x = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut next = move || {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x % 2001) as f64 / 1000.0 - 1.0
        };
        let amplitudes: Vec<Complex64> = (0..1usize << num_qubits)
            .map(|_| Complex64::new(next(), next()))
            .collect();
        let norm = amplitudes.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
        let amplitudes: Vec<Complex64> = amplitudes.iter().map(|a| *a / norm).collect();
        StateVector::from_amplitudes(num_qubits, &amplitudes).unwrap()
    }

    #[test]
    fn test_hadamard_on_basis_state() {
        let mut state = StateVector::new(1).unwrap();
        hadamard(&mut state, q(0)).unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(state.amplitudes()[0].re, h, epsilon = 1e-12);
        assert_abs_diff_eq!(state.amplitudes()[1].re, h, epsilon = 1e-12);

        let mut state = basis(1, 1);
        hadamard(&mut state, q(0)).unwrap();
        assert_abs_diff_eq!(state.amplitudes()[0].re, h, epsilon = 1e-12);
        assert_abs_diff_eq!(state.amplitudes()[1].re, -h, epsilon = 1e-12);
    }

    #[test]
    fn test_hadamard_targets_correct_bit() {
        // |000⟩ → H on q1 → (|000⟩ + |010⟩)/√2
        let mut state = StateVector::new(3).unwrap();
        hadamard(&mut state, q(1)).unwrap();
        let probs = state.probabilities();
        assert_abs_diff_eq!(probs[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(probs[2], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(probs.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pauli_x_moves_basis_state() {
        let mut state = StateVector::new(3).unwrap();
        pauli_x(&mut state, q(2)).unwrap();
        assert_eq!(state, basis(3, 4));
        pauli_x(&mut state, q(0)).unwrap();
        assert_eq!(state, basis(3, 5));
    }

    #[test]
    fn test_mcx_requires_all_controls() {
        // |011⟩: q0 = 1, q1 = 1 → flip q2 → |111⟩
        let mut state = basis(3, 0b011);
        multi_controlled_not(&mut state, &[q(0), q(1)], q(2)).unwrap();
        assert_eq!(state, basis(3, 0b111));

        // |001⟩: q1 = 0 → unchanged
        let mut state = basis(3, 0b001);
        multi_controlled_not(&mut state, &[q(0), q(1)], q(2)).unwrap();
        assert_eq!(state, basis(3, 0b001));
    }

    #[test]
    fn test_mcx_without_controls_is_x() {
        let mut a = arbitrary_state(3, 11);
        let mut b = a.clone();
        multi_controlled_not(&mut a, &[], q(1)).unwrap();
        pauli_x(&mut b, q(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_phase_flip_negates_all_ones_only() {
        let mut state = StateVector::uniform(3).unwrap();
        let before = state.clone();
        multi_controlled_phase_flip(&mut state, &[q(0), q(1)], q(2)).unwrap();

        for (index, (after, original)) in state
            .amplitudes()
            .iter()
            .zip(before.amplitudes())
            .enumerate()
        {
            let expected = if index == 0b111 { -*original } else { *original };
            assert_abs_diff_eq!(after.re, expected.re, epsilon = 1e-12);
            assert_abs_diff_eq!(after.im, expected.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_phase_flip_single_qubit_is_z() {
        let mut state = StateVector::uniform(1).unwrap();
        multi_controlled_phase_flip(&mut state, &[], q(0)).unwrap();
        assert!(state.amplitudes()[0].re > 0.0);
        assert!(state.amplitudes()[1].re < 0.0);
    }

    #[test]
    fn test_invalid_qubit_leaves_state_untouched() {
        let mut state = arbitrary_state(2, 3);
        let before = state.clone();

        let err = hadamard(&mut state, q(2)).unwrap_err();
        assert_eq!(err, StateError::InvalidGate(QuantumError::InvalidQubit(2, 2)));

        let err = multi_controlled_not(&mut state, &[q(1)], q(1)).unwrap_err();
        assert_eq!(err, StateError::InvalidGate(QuantumError::DuplicateQubit(q(1))));

        let gates = [Gate::Hadamard(q(0)), Gate::PauliX(q(5))];
        assert!(apply_gates(&mut state, &gates).is_err());

        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_gates_counts() {
        let mut state = StateVector::new(2).unwrap();
        let gates = [Gate::Hadamard(q(0)), Gate::Hadamard(q(1))];
        assert_eq!(apply_gates(&mut state, &gates).unwrap(), 2);
        assert_eq!(state, StateVector::uniform(2).unwrap());
    }

    #[test]
    fn test_parallel_path_flips_only_all_ones() {
        // Exactly at the threshold, so the rayon path runs
        let wide = PARALLEL_MIN_DIMENSION.trailing_zeros() as usize;
        let mut parallel = StateVector::uniform(wide).unwrap();
        let controls: Vec<QubitId> = (0..wide - 1).map(q).collect();
        multi_controlled_phase_flip(&mut parallel, &controls, q(wide - 1)).unwrap();

        let last = parallel.dimension() - 1;
        let expected = 1.0 / (parallel.dimension() as f64).sqrt();
        assert_abs_diff_eq!(parallel.amplitudes()[last].re, -expected, epsilon = 1e-12);
        for index in [0, 1, last / 2, last - 1] {
            assert_abs_diff_eq!(parallel.amplitudes()[index].re, expected, epsilon = 1e-12);
        }
        assert!(parallel.norm_check());
    }

    proptest! {
        #[test]
        fn prop_pauli_x_is_involution(num_qubits in 1usize..7, qubit in 0usize..6, seed in any::<u64>()) {
            prop_assume!(qubit < num_qubits);
            let original = arbitrary_state(num_qubits, seed);
            let mut state = original.clone();
            pauli_x(&mut state, q(qubit)).unwrap();
            pauli_x(&mut state, q(qubit)).unwrap();
            prop_assert_eq!(state, original);
        }

        #[test]
        fn prop_gates_preserve_probability(num_qubits in 2usize..7, seed in any::<u64>()) {
            let mut state = arbitrary_state(num_qubits, seed);
            let target = q(num_qubits - 1);
            let controls: Vec<QubitId> = (0..num_qubits - 1).map(q).collect();

            for k in 0..num_qubits {
                hadamard(&mut state, q(k)).unwrap();
                prop_assert!(state.norm_check());
                pauli_x(&mut state, q(k)).unwrap();
                prop_assert!(state.norm_check());
            }
            multi_controlled_not(&mut state, &controls, target).unwrap();
            prop_assert!(state.norm_check());
            multi_controlled_phase_flip(&mut state, &controls, target).unwrap();
            prop_assert!(state.norm_check());
        }

        #[test]
        fn prop_hadamard_is_involution(num_qubits in 1usize..7, qubit in 0usize..6, seed in any::<u64>()) {
            prop_assume!(qubit < num_qubits);
            let original = arbitrary_state(num_qubits, seed);
            let mut state = original.clone();
            hadamard(&mut state, q(qubit)).unwrap();
            hadamard(&mut state, q(qubit)).unwrap();
            for (a, b) in state.amplitudes().iter().zip(original.amplitudes()) {
                prop_assert!((*a - *b).norm() < 1e-12);
            }
        }
    }
}
