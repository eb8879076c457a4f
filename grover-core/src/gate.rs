//! Gate vocabulary for Grover circuits

use crate::{QuantumError, QubitId, Result};
use smallvec::SmallVec;
use std::fmt;

/// Control list storage; Grover registers rarely exceed a handful of qubits
pub type Controls = SmallVec<[QubitId; 4]>;

/// A gate applied to specific qubits
///
/// Grover's algorithm only needs three gates. The multi-controlled phase
/// flip is not a variant of its own: it is emitted as
/// `Hadamard(t)`, `MultiControlledX { .., target: t }`, `Hadamard(t)`, which
/// keeps a recorded trace identical to the circuit a hardware toolchain
/// would see.
///
/// # Example
/// ```
/// use grover_core::{Gate, QubitId};
///
/// let toffoli = Gate::mcx(&[QubitId::new(0), QubitId::new(1)], QubitId::new(2));
/// assert_eq!(toffoli.to_string(), "mcx(q0,q1) -> q2");
/// assert!(toffoli.validate(3).is_ok());
/// assert!(toffoli.validate(2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Single-qubit Hadamard
    Hadamard(QubitId),

    /// Single-qubit bit flip
    PauliX(QubitId),

    /// Bit flip on `target` when every control qubit is |1⟩
    ///
    /// With no controls this is a plain Pauli-X.
    MultiControlledX { controls: Controls, target: QubitId },
}

impl Gate {
    /// Build a multi-controlled X gate
    pub fn mcx(controls: &[QubitId], target: QubitId) -> Self {
        Gate::MultiControlledX {
            controls: SmallVec::from_slice(controls),
            target,
        }
    }

    /// Short lowercase mnemonic, as used in OpenQASM
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Hadamard(_) => "h",
            Gate::PauliX(_) => "x",
            Gate::MultiControlledX { .. } => "mcx",
        }
    }

    /// The qubit whose amplitude pairs the gate mixes
    pub fn target(&self) -> QubitId {
        match self {
            Gate::Hadamard(q) | Gate::PauliX(q) => *q,
            Gate::MultiControlledX { target, .. } => *target,
        }
    }

    /// Control qubits (empty for single-qubit gates)
    pub fn controls(&self) -> &[QubitId] {
        match self {
            Gate::MultiControlledX { controls, .. } => controls.as_slice(),
            _ => &[],
        }
    }

    /// Every qubit the gate touches, controls first
    pub fn qubits(&self) -> SmallVec<[QubitId; 5]> {
        let mut qubits: SmallVec<[QubitId; 5]> = self.controls().iter().copied().collect();
        qubits.push(self.target());
        qubits
    }

    /// Check qubit bounds and reject repeated qubits
    pub fn validate(&self, num_qubits: usize) -> Result<()> {
        let qubits = self.qubits();
        for (i, &qubit) in qubits.iter().enumerate() {
            qubit.check(num_qubits)?;
            if qubits[..i].contains(&qubit) {
                return Err(QuantumError::DuplicateQubit(qubit));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Hadamard(q) | Gate::PauliX(q) => write!(f, "{} {}", self.name(), q),
            Gate::MultiControlledX { controls, target } => {
                write!(f, "mcx(")?;
                for (i, c) in controls.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, ") -> {}", target)
            }
        }
    }
}
