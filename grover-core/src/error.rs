//! Error types for circuit and parameter validation

use crate::QubitId;
use thiserror::Error;

/// Errors raised while validating qubits, bit-strings and gate traces
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuantumError {
    /// Qubit index outside the register
    #[error("Invalid qubit index {0}: register has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Register with zero qubits
    #[error("Register must have at least one qubit")]
    EmptyRegister,

    /// Register too wide to index basis states with a machine word
    #[error("Register of {num_qubits} qubits cannot be indexed; at most {max} are addressable")]
    RegisterTooWide { num_qubits: usize, max: usize },

    /// Same qubit used twice in one gate
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Bit-string length does not match the register width
    #[error("Bit-string '{bits}' has length {actual}, expected {expected}")]
    BitStringLength {
        bits: String,
        expected: usize,
        actual: usize,
    },

    /// Bit-string contains something other than '0' and '1'
    #[error("Bit-string '{bits}' contains non-binary character '{character}' at position {position}")]
    NonBinaryCharacter {
        bits: String,
        character: char,
        position: usize,
    },
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }
}
