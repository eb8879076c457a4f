//! Inversion about the mean
//!
//! The gate-level operator H⊗n · X⊗n · MCZ · X⊗n · H⊗n equals
//! I − 2|s⟩⟨s|, which is the closed-form reflection 2|s⟩⟨s| − I times a
//! global phase of −1. Measurement statistics are identical.

use crate::error::Result;
use crate::oracle::phase_flip_all_ones;
use grover_core::{Gate, QubitId};
use grover_state::StateVector;

/// Gate sequence of the diffusion operator on `num_qubits` qubits
pub fn gates(num_qubits: usize) -> Vec<Gate> {
    if num_qubits == 0 {
        return Vec::new();
    }

    let layer = |gate: fn(QubitId) -> Gate| QubitId::range(num_qubits).map(gate);

    let mut gates = Vec::with_capacity(4 * num_qubits + 3);
    gates.extend(layer(Gate::Hadamard));
    gates.extend(layer(Gate::PauliX));
    gates.extend(phase_flip_all_ones(num_qubits));
    gates.extend(layer(Gate::PauliX));
    gates.extend(layer(Gate::Hadamard));
    gates
}

/// Apply the gate-level diffusion, returning the number of gates applied
pub fn apply(state: &mut StateVector) -> Result<usize> {
    let gates = gates(state.num_qubits());
    Ok(grover_state::kernels::apply_gates(state, &gates)?)
}

/// Closed-form reflection: a[i] → 2·mean − a[i]
///
/// ```
/// use grover_sim::diffusion::reflect_about_mean;
/// use grover_state::{Complex64, StateVector};
///
/// let amps = [0.5, 0.5, 0.5, -0.5].map(|re| Complex64::new(re, 0.0));
/// let mut state = StateVector::from_amplitudes(2, &amps).unwrap();
/// reflect_about_mean(&mut state);
/// assert!((state.amplitudes()[3].re - 1.0).abs() < 1e-12);
/// ```
pub fn reflect_about_mean(state: &mut StateVector) {
    let twice_mean = state.mean_amplitude() * 2.0;
    for amp in state.amplitudes_mut() {
        *amp = twice_mean - *amp;
    }
}
