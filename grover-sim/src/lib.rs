//! Grover amplitude-amplification engine
//!
//! Builds on [`grover_state`] kernels to search 2^n basis states for one
//! marked bit-string:
//!
//! - [`oracle`]: phase flip of the marked state from X / H / MCX gates
//! - [`diffusion`]: inversion about the mean, gate-level or closed-form
//! - [`GroverEngine`]: the run state machine with optional normalization
//!   checks and circuit recording
//! - [`theory`]: optimal iteration count and predicted success probability
//!
//! # Example
//!
//! ```
//! use grover_sim::{search, theory, GroverConfig};
//!
//! let iterations = theory::optimal_iterations(4);
//! let config = GroverConfig::default().with_seed(7);
//! let result = search(4, "1011", iterations, &config).unwrap();
//!
//! assert!(result.found_target());
//! assert!(result.success_rate() > 0.9);
//! ```

pub mod config;
pub mod diffusion;
pub mod engine;
pub mod error;
pub mod oracle;
pub mod result;
pub mod statistics;
pub mod theory;

pub use config::{DiffusionMode, GroverConfig, DEFAULT_MAX_QUBITS};
pub use engine::{run, search, EnginePhase, GroverEngine};
pub use error::{GroverError, Result};
pub use result::GroverResult;
pub use statistics::ExecutionStatistics;
