//! Error types for state vector operations

use grover_core::QuantumError;
use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// A state needs at least one qubit
    #[error("State vector must have at least one qubit")]
    NoQubits,

    /// Requested width exceeds the hard simulation cap
    #[error("{num_qubits} qubits exceeds the maximum of {max_qubits} for a dense state vector")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Allocator refused the amplitude buffer
    #[error("Failed to allocate {size} bytes for state vector")]
    AllocationError { size: usize },

    /// Gate addressed qubits the state does not have, or repeated one
    #[error("Invalid gate: {0}")]
    InvalidGate(#[from] QuantumError),

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Basis index outside the state
    #[error("Basis index {index} out of range for dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },

    /// Total probability drifted away from 1
    #[error("State vector not normalized, total probability = {total_probability}")]
    NotNormalized { total_probability: f64 },

    /// The amplitudes do not form a distribution that can be sampled
    #[error("Cannot sample from state: {0}")]
    SamplingFailed(String),
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
