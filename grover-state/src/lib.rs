//! Quantum state and gate kernels for Grover search
//!
//! This crate owns the numerical side of the engine:
//!
//! - [`StateVector`]: the dense 2^n complex amplitude array
//! - [`kernels`]: Hadamard, Pauli-X, multi-controlled NOT and the
//!   multi-controlled phase flip, applied by index arithmetic in place
//! - [`measurement`]: weighted sampling of shots into [`OutcomeCounts`]
//! - [`validation`]: normalization diagnostics
//!
//! # Example
//!
//! ```
//! use grover_core::QubitId;
//! use grover_state::{kernels, Sampler, StateVector};
//!
//! let mut state = StateVector::uniform(2).unwrap();
//! kernels::multi_controlled_phase_flip(&mut state, &[QubitId::new(0)], QubitId::new(1)).unwrap();
//! assert!(state.norm_check());
//!
//! let counts = Sampler::seeded(7).sample(&state, 100).unwrap();
//! assert_eq!(counts.total_shots(), 100);
//! ```

pub mod error;
pub mod kernels;
pub mod measurement;
pub mod state_vector;
pub mod validation;

pub use error::{Result, StateError};
pub use measurement::{sample, OutcomeCounts, Sampler};
pub use num_complex::Complex64;
pub use state_vector::{StateVector, MAX_QUBITS, NORM_TOLERANCE};
pub use validation::{validate_normalization, Severity, ValidationReport};
