//! Phase oracle marking one basis state
//!
//! Built from the restricted gate set: an X layer maps the target onto
//! |1…1⟩, a multi-controlled Z negates that amplitude, and the X layer is
//! undone. The multi-controlled Z is H(last) · MCX(rest → last) · H(last).

use crate::error::{GroverError, Result};
use grover_core::{Gate, QubitId, TargetState};
use grover_state::{kernels, StateVector};

/// H(last) · MCX(q0 … q{n-2} → last) · H(last): negates |1…1⟩ only
pub(crate) fn phase_flip_all_ones(num_qubits: usize) -> [Gate; 3] {
    let last = QubitId::new(num_qubits - 1);
    let controls: Vec<QubitId> = QubitId::range(num_qubits - 1).collect();
    kernels::phase_flip_gates(&controls, last)
}

/// Gate sequence of the oracle for `target`
///
/// ```
/// use grover_core::TargetState;
/// use grover_sim::oracle;
///
/// let target = TargetState::parse("101", 3).unwrap();
/// let names: Vec<_> = oracle::gates(&target).iter().map(|g| g.name()).collect();
/// assert_eq!(names, ["x", "h", "mcx", "h", "x"]);
/// ```
pub fn gates(target: &TargetState) -> Vec<Gate> {
    let flips: Vec<Gate> = target.zero_qubits().map(Gate::PauliX).collect();

    let mut gates = Vec::with_capacity(2 * flips.len() + 3);
    gates.extend(flips.iter().cloned());
    gates.extend(phase_flip_all_ones(target.num_qubits()));
    gates.extend(flips);
    gates
}

/// Negate the amplitude of `target` in place, returning the number of gates
/// applied
///
/// # Errors
/// [`GroverError::InvalidParameter`] if the target's width differs from the
/// state's; the state is not modified.
pub fn apply(state: &mut StateVector, target: &TargetState) -> Result<usize> {
    if target.num_qubits() != state.num_qubits() {
        return Err(GroverError::invalid(format!(
            "target '{}' has {} qubits but the state has {}",
            target,
            target.num_qubits(),
            state.num_qubits()
        )));
    }

    Ok(kernels::apply_gates(state, &gates(target))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_flips_only_target_101() {
        let mut state = StateVector::uniform(3).unwrap();
        let before = state.clone();
        let target = TargetState::parse("101", 3).unwrap();

        apply(&mut state, &target).unwrap();

        for (index, (after, before)) in state
            .amplitudes()
            .iter()
            .zip(before.amplitudes())
            .enumerate()
        {
            let expected = if index == 5 { -*before } else { *before };
            assert_abs_diff_eq!(after.re, expected.re, epsilon = 1e-12);
            assert_abs_diff_eq!(after.im, expected.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_every_target_on_every_width() {
        for n in 1..=5 {
            for index in 0..(1usize << n) {
                let target = TargetState::from_index(index, n).unwrap();
                let mut state = StateVector::uniform(n).unwrap();
                let amp = state.amplitudes()[0].re;

                apply(&mut state, &target).unwrap();

                for (i, a) in state.amplitudes().iter().enumerate() {
                    let expected = if i == index { -amp } else { amp };
                    assert_abs_diff_eq!(a.re, expected, epsilon = 1e-12);
                }
                assert!(state.norm_check());
            }
        }
    }

    #[test]
    fn test_width_mismatch_leaves_state_untouched() {
        let mut state = StateVector::uniform(3).unwrap();
        let before = state.clone();
        let target = TargetState::parse("11", 2).unwrap();

        let err = apply(&mut state, &target).unwrap_err();
        assert!(matches!(err, GroverError::InvalidParameter(_)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_all_ones_needs_no_x_layer() {
        let target = TargetState::all_ones(4).unwrap();
        let sequence = gates(&target);
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence[1].controls().len(), 3);
    }

    #[test]
    fn test_oracle_is_involution() {
        let target = TargetState::parse("0110", 4).unwrap();
        let mut state = StateVector::uniform(4).unwrap();
        let before = state.clone();
        apply(&mut state, &target).unwrap();
        apply(&mut state, &target).unwrap();
        assert!(state.fidelity(&before).unwrap() > 1.0 - 1e-12);
    }
}
