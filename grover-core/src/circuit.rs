//! Ordered trace of applied gates

use crate::{Gate, Result};
use std::fmt;

/// A gate-level trace of a Grover run
///
/// The engine records one when asked so that a diagram renderer can draw
/// the circuit. Amplitude computation never reads it.
///
/// # Example
/// ```
/// use grover_core::{Circuit, Gate, QubitId};
///
/// let mut circuit = Circuit::new(2);
/// circuit.extend([Gate::Hadamard(QubitId::new(0)), Gate::Hadamard(QubitId::new(1))]).unwrap();
/// assert_eq!(circuit.len(), 2);
/// assert_eq!(circuit.count("h"), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<Gate>,
}

impl Circuit {
    /// Create an empty trace over `num_qubits` qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Self {
        Self::with_capacity(num_qubits, 0)
    }

    /// Create an empty trace with room for `capacity` gates
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Append a gate after checking it against the register width
    ///
    /// # Errors
    /// Returns error if any qubit is out of range or repeated
    pub fn push(&mut self, gate: Gate) -> Result<()> {
        gate.validate(self.num_qubits)?;
        self.operations.push(gate);
        Ok(())
    }

    /// Append several gates; stops at the first invalid one
    pub fn extend<I: IntoIterator<Item = Gate>>(&mut self, gates: I) -> Result<()> {
        for gate in gates {
            self.push(gate)?;
        }
        Ok(())
    }

    pub fn operations(&self) -> impl Iterator<Item = &Gate> {
        self.operations.iter()
    }

    pub fn get_operation(&self, index: usize) -> Option<&Gate> {
        self.operations.get(index)
    }

    /// Number of gates with the given mnemonic (`"h"`, `"x"`, `"mcx"`)
    pub fn count(&self, name: &str) -> usize {
        self.operations.iter().filter(|g| g.name() == name).count()
    }

    /// Re-check every recorded gate
    pub fn validate(&self) -> Result<()> {
        self.operations
            .iter()
            .try_for_each(|gate| gate.validate(self.num_qubits))
    }

    /// One line per gate, in application order
    pub fn to_lines(&self) -> Vec<String> {
        self.operations.iter().map(Gate::to_string).collect()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Circuit({} qubits, {} operations)", self.num_qubits, self.len())?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}
