//! Engine configuration

use grover_state::{MAX_QUBITS, NORM_TOLERANCE};
use serde::Serialize;
use std::fmt;

/// Default width limit: 2^26 amplitudes is 1 GiB of `Complex64`
pub const DEFAULT_MAX_QUBITS: usize = 26;

/// How the engine realizes the diffusion operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiffusionMode {
    /// H⊗n · X⊗n · MCZ · X⊗n · H⊗n through the gate kernels
    #[default]
    GateLevel,
    /// new[i] = 2·mean − a[i] in one pass
    ClosedForm,
}

impl fmt::Display for DiffusionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffusionMode::GateLevel => write!(f, "gate-level"),
            DiffusionMode::ClosedForm => write!(f, "closed-form"),
        }
    }
}

/// Configuration for a Grover run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroverConfig {
    /// Number of measurement shots
    ///
    /// Default: 1024
    pub shots: usize,

    /// Random number generator seed for reproducibility
    ///
    /// If None, sampling draws a fresh seed from the OS and two runs will
    /// generally produce different counts.
    ///
    /// Default: None
    pub seed: Option<u64>,

    /// Widest register the engine will allocate
    ///
    /// Checked before any allocation. Cannot exceed the state vector's
    /// hard cap.
    ///
    /// Default: 26
    pub max_qubits: usize,

    /// Diffusion realization
    ///
    /// Default: gate-level
    pub diffusion: DiffusionMode,

    /// Record every applied gate into a [`Circuit`](grover_core::Circuit)
    ///
    /// Default: false
    pub record_circuit: bool,

    /// Verify Σ|a|² after every iteration
    ///
    /// Default: on in debug builds, off in release builds
    pub check_normalization: bool,

    /// Allowed deviation of the total probability from 1
    ///
    /// Default: 1e-6
    pub norm_tolerance: f64,
}

impl Default for GroverConfig {
    fn default() -> Self {
        Self {
            shots: 1024,
            seed: None,
            max_qubits: DEFAULT_MAX_QUBITS,
            diffusion: DiffusionMode::GateLevel,
            record_circuit: false,
            check_normalization: cfg!(debug_assertions),
            norm_tolerance: NORM_TOLERANCE,
        }
    }
}

impl GroverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration optimized for speed
    ///
    /// - Closed-form diffusion
    /// - No normalization checks
    /// - No circuit trace
    pub fn fast() -> Self {
        Self {
            diffusion: DiffusionMode::ClosedForm,
            check_normalization: false,
            record_circuit: false,
            ..Default::default()
        }
    }

    /// Configuration for debugging
    ///
    /// - Deterministic seed
    /// - Circuit trace recorded
    /// - Normalization checked every iteration
    pub fn debug() -> Self {
        Self {
            seed: Some(42),
            record_circuit: true,
            check_normalization: true,
            ..Default::default()
        }
    }

    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    pub fn with_diffusion(mut self, diffusion: DiffusionMode) -> Self {
        self.diffusion = diffusion;
        self
    }

    pub fn with_circuit_recording(mut self, enable: bool) -> Self {
        self.record_circuit = enable;
        self
    }

    pub fn with_normalization_check(mut self, enable: bool) -> Self {
        self.check_normalization = enable;
        self
    }

    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.shots == 0 {
            return Err("shots must be at least 1".to_string());
        }

        if self.max_qubits == 0 || self.max_qubits > MAX_QUBITS {
            return Err(format!(
                "max_qubits must be between 1 and {}, got {}",
                MAX_QUBITS, self.max_qubits
            ));
        }

        if !(self.norm_tolerance.is_finite() && self.norm_tolerance > 0.0) {
            return Err(format!(
                "norm_tolerance must be a positive finite number, got {}",
                self.norm_tolerance
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GroverConfig::default();
        assert_eq!(config.shots, 1024);
        assert_eq!(config.seed, None);
        assert_eq!(config.max_qubits, 26);
        assert_eq!(config.diffusion, DiffusionMode::GateLevel);
        assert!(!config.record_circuit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        let fast = GroverConfig::fast();
        assert_eq!(fast.diffusion, DiffusionMode::ClosedForm);
        assert!(!fast.check_normalization);

        let debug = GroverConfig::debug();
        assert_eq!(debug.seed, Some(42));
        assert!(debug.record_circuit);
        assert!(debug.check_normalization);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GroverConfig::new()
            .with_shots(2048)
            .with_seed(7)
            .with_diffusion(DiffusionMode::ClosedForm)
            .with_circuit_recording(true);

        assert_eq!(config.shots, 2048);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.diffusion, DiffusionMode::ClosedForm);
        assert!(config.record_circuit);
    }

    #[test]
    fn test_validation() {
        assert!(GroverConfig::new().with_shots(0).validate().is_err());
        assert!(GroverConfig::new().with_max_qubits(0).validate().is_err());
        assert!(GroverConfig::new()
            .with_max_qubits(MAX_QUBITS + 1)
            .validate()
            .is_err());
        assert!(GroverConfig::new()
            .with_norm_tolerance(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_diffusion_mode_display() {
        assert_eq!(DiffusionMode::GateLevel.to_string(), "gate-level");
        assert_eq!(DiffusionMode::ClosedForm.to_string(), "closed-form");
    }
}
