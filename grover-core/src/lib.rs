//! Core types for the Grover search engine
//!
//! This crate holds the vocabulary shared by the state and simulation crates:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`TargetState`]: The marked basis state, parsed from a bit-string
//! - [`Gate`]: The closed set of gates Grover's algorithm needs
//! - [`Circuit`]: An ordered trace of applied gates
//!
//! # Bit order
//!
//! Bit-strings are written most-significant qubit first: the **last**
//! character is qubit 0. `"110"` therefore names basis index 6, with
//! qubit 0 = 0, qubit 1 = 1 and qubit 2 = 1.
//!
//! # Example
//! ```
//! use grover_core::{Circuit, Gate, QubitId, TargetState};
//!
//! let target = TargetState::parse("101", 3).unwrap();
//! assert_eq!(target.index(), 5);
//!
//! let mut circuit = Circuit::new(3);
//! circuit.push(Gate::Hadamard(QubitId::new(0))).unwrap();
//! assert_eq!(circuit.len(), 1);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod target;

pub use circuit::Circuit;
pub use error::QuantumError;
pub use gate::Gate;
pub use qubit::QubitId;
pub use target::{format_bitstring, TargetState};

/// Type alias for results in grover-core
pub type Result<T> = std::result::Result<T, QuantumError>;
