//! Error types for the Grover engine

use crate::engine::EnginePhase;
use grover_core::QuantumError;
use grover_state::{Complex64, StateError, NORM_TOLERANCE};
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, GroverError>;

/// Errors surfaced by the engine
///
/// Nothing here is retried: every variant is either a caller mistake or a
/// defect worth reporting as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroverError {
    /// Register width, target bit-string, qubit index or configuration rejected
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Total probability left the tolerance band after an iteration
    #[error("Numerical drift: total probability {total_probability} is outside 1 ± {tolerance}")]
    NumericalDrift {
        total_probability: f64,
        tolerance: f64,
    },

    /// The dense state vector for this width cannot be held
    #[error("Resource exhaustion: {num_qubits} qubits exceeds the limit of {max_qubits}")]
    ResourceExhaustion {
        num_qubits: usize,
        max_qubits: usize,
    },

    /// Engine operation called out of order
    #[error("Cannot {action} while the engine is {phase}")]
    InvalidTransition {
        phase: EnginePhase,
        action: &'static str,
    },

    /// The final state could not be turned into a distribution
    #[error("Measurement failed: {0}")]
    MeasurementFailed(String),
}

impl GroverError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}

impl From<QuantumError> for GroverError {
    fn from(err: QuantumError) -> Self {
        match err {
            QuantumError::RegisterTooWide { num_qubits, max } => GroverError::ResourceExhaustion {
                num_qubits,
                max_qubits: max,
            },
            other => GroverError::InvalidParameter(other.to_string()),
        }
    }
}

impl From<StateError> for GroverError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::TooManyQubits {
                num_qubits,
                max_qubits,
            } => GroverError::ResourceExhaustion {
                num_qubits,
                max_qubits,
            },
            StateError::AllocationError { size } => GroverError::ResourceExhaustion {
                // size is 2^n amplitudes, so the width is recoverable exactly
                num_qubits: (size / std::mem::size_of::<Complex64>()).trailing_zeros() as usize,
                max_qubits: grover_state::MAX_QUBITS,
            },
            StateError::NotNormalized { total_probability } => GroverError::NumericalDrift {
                total_probability,
                tolerance: NORM_TOLERANCE,
            },
            StateError::SamplingFailed(message) => GroverError::MeasurementFailed(message),
            StateError::InvalidGate(err) => err.into(),
            other => GroverError::InvalidParameter(other.to_string()),
        }
    }
}
