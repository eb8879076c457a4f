//! Grover iteration control
//!
//! [`GroverEngine`] owns the state vector for one run and enforces the
//! order of operations:
//!
//! ```text
//! Uninitialized → Superposed → (OracleApplied → DiffusionApplied)* → Measured
//! ```
//!
//! Calling an operation from the wrong phase returns
//! [`GroverError::InvalidTransition`] without touching the state.

use crate::config::{DiffusionMode, GroverConfig};
use crate::error::{GroverError, Result};
use crate::result::GroverResult;
use crate::statistics::ExecutionStatistics;
use crate::{diffusion, oracle};
use grover_core::{Circuit, Gate, QubitId, TargetState};
use grover_state::{validate_normalization, OutcomeCounts, Sampler, StateVector};
use log::{debug, trace, warn};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// Where an engine is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnginePhase {
    Uninitialized,
    Superposed,
    OracleApplied,
    DiffusionApplied,
    Measured,
}

impl fmt::Display for EnginePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EnginePhase::Uninitialized => "uninitialized",
            EnginePhase::Superposed => "superposed",
            EnginePhase::OracleApplied => "oracle-applied",
            EnginePhase::DiffusionApplied => "diffusion-applied",
            EnginePhase::Measured => "measured",
        };
        f.write_str(name)
    }
}

/// Amplitude-amplification engine for one marked state
///
/// # Example
///
/// ```
/// use grover_sim::{GroverConfig, GroverEngine};
///
/// let config = GroverConfig::default().with_seed(1);
/// let mut engine = GroverEngine::new(2, "11", config).unwrap();
/// engine.run(1).unwrap();
///
/// let counts = engine.measure_with_config().unwrap();
/// assert_eq!(counts.get("11"), 1024);
/// ```
#[derive(Debug)]
pub struct GroverEngine {
    target: TargetState,
    config: GroverConfig,
    state: Option<StateVector>,
    circuit: Option<Circuit>,
    phase: EnginePhase,
    iterations_applied: usize,
    statistics: ExecutionStatistics,
}

impl GroverEngine {
    /// Create an engine searching `num_qubits` qubits for `target`
    ///
    /// Everything is validated here; nothing is allocated until
    /// [`init`](Self::init).
    ///
    /// # Errors
    /// - [`GroverError::InvalidParameter`] for zero qubits, a malformed
    ///   target or an invalid configuration
    /// - [`GroverError::ResourceExhaustion`] above `config.max_qubits`
    pub fn new(num_qubits: usize, target: &str, config: GroverConfig) -> Result<Self> {
        if num_qubits == 0 {
            return Err(GroverError::invalid("number of qubits must be at least 1"));
        }
        config.validate().map_err(GroverError::InvalidParameter)?;
        if num_qubits > config.max_qubits {
            return Err(GroverError::ResourceExhaustion {
                num_qubits,
                max_qubits: config.max_qubits,
            });
        }
        let target = TargetState::parse(target, num_qubits)?;

        Ok(Self::with_target(target, config))
    }

    /// Create an engine from an already parsed target
    ///
    /// The width limit is still enforced at [`init`](Self::init).
    pub fn with_target(target: TargetState, config: GroverConfig) -> Self {
        Self {
            target,
            config,
            state: None,
            circuit: None,
            phase: EnginePhase::Uninitialized,
            iterations_applied: 0,
            statistics: ExecutionStatistics::new(),
        }
    }

    /// Prepare the uniform superposition H⊗n|0…0⟩
    ///
    /// Allowed from any phase; calling it again restarts the run and reuses
    /// the existing buffer.
    pub fn init(&mut self) -> Result<()> {
        let num_qubits = self.num_qubits();
        if num_qubits > self.config.max_qubits {
            return Err(GroverError::ResourceExhaustion {
                num_qubits,
                max_qubits: self.config.max_qubits,
            });
        }
        self.config.validate().map_err(GroverError::InvalidParameter)?;

        let start = Instant::now();
        let state = match self.state.take() {
            Some(mut state) => {
                state.reset();
                state
            }
            None => StateVector::new(num_qubits)?,
        };
        let state = self.state.insert(state);
        state.apply_hadamard_all();

        self.statistics = ExecutionStatistics {
            initialization_time: start.elapsed(),
            gates_applied: num_qubits,
            peak_memory_bytes: state.memory_bytes(),
            ..Default::default()
        };
        self.circuit = if self.config.record_circuit {
            let mut circuit = Circuit::with_capacity(num_qubits, num_qubits);
            circuit.extend(QubitId::range(num_qubits).map(Gate::Hadamard))?;
            Some(circuit)
        } else {
            None
        };
        self.iterations_applied = 0;
        self.phase = EnginePhase::Superposed;

        debug!(
            "initialized {}-qubit superposition for target |{}⟩ (dimension {})",
            num_qubits,
            self.target,
            state.dimension()
        );
        Ok(())
    }

    /// Negate the target amplitude
    ///
    /// Allowed after [`init`](Self::init) or a completed iteration.
    pub fn apply_oracle(&mut self) -> Result<()> {
        self.expect_phase(
            &[EnginePhase::Superposed, EnginePhase::DiffusionApplied],
            "apply the oracle",
        )?;
        let state = self.state.as_mut().ok_or(GroverError::InvalidTransition {
            phase: self.phase,
            action: "apply the oracle",
        })?;

        let start = Instant::now();
        let applied = oracle::apply(state, &self.target)?;
        self.statistics.oracle_time += start.elapsed();
        self.statistics.gates_applied += applied;

        if let Some(circuit) = self.circuit.as_mut() {
            circuit.extend(oracle::gates(&self.target))?;
        }
        self.phase = EnginePhase::OracleApplied;
        Ok(())
    }

    /// Reflect the amplitudes about their mean
    ///
    /// Allowed only directly after [`apply_oracle`](Self::apply_oracle).
    /// Completes one iteration.
    pub fn apply_diffusion(&mut self) -> Result<()> {
        self.expect_phase(&[EnginePhase::OracleApplied], "apply the diffusion")?;
        let state = self.state.as_mut().ok_or(GroverError::InvalidTransition {
            phase: self.phase,
            action: "apply the diffusion",
        })?;

        let start = Instant::now();
        match self.config.diffusion {
            DiffusionMode::GateLevel => {
                self.statistics.gates_applied += diffusion::apply(state)?;
            }
            DiffusionMode::ClosedForm => diffusion::reflect_about_mean(state),
        }
        self.statistics.diffusion_time += start.elapsed();

        if let Some(circuit) = self.circuit.as_mut() {
            circuit.extend(diffusion::gates(self.target.num_qubits()))?;
        }
        self.iterations_applied += 1;
        self.statistics.iterations = self.iterations_applied;
        self.phase = EnginePhase::DiffusionApplied;
        Ok(())
    }

    /// One Grover iteration: oracle then diffusion
    ///
    /// # Errors
    /// [`GroverError::NumericalDrift`] if normalization checking is enabled
    /// and the total probability left the tolerance band.
    pub fn run_iteration(&mut self) -> Result<()> {
        self.apply_oracle()?;
        self.apply_diffusion()?;
        trace!("completed iteration {}", self.iterations_applied);

        if self.config.check_normalization {
            self.check_normalization()?;
        }
        Ok(())
    }

    /// Initialize and apply `iterations` Grover iterations
    ///
    /// Zero iterations leave the uniform superposition.
    pub fn run(&mut self, iterations: usize) -> Result<&StateVector> {
        self.init()?;
        for _ in 0..iterations {
            self.run_iteration()?;
        }
        debug!(
            "applied {} iterations ({} gates)",
            self.iterations_applied, self.statistics.gates_applied
        );

        self.state.as_ref().ok_or(GroverError::InvalidTransition {
            phase: self.phase,
            action: "read the state",
        })
    }

    /// Sample `config.shots` outcomes with the caller's random source
    ///
    /// The state is only read. Allowed after [`init`](Self::init) or a
    /// completed iteration, and again after a previous measurement.
    pub fn measure<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<OutcomeCounts> {
        self.expect_phase(
            &[
                EnginePhase::Superposed,
                EnginePhase::DiffusionApplied,
                EnginePhase::Measured,
            ],
            "measure",
        )?;
        let state = self.state.as_ref().ok_or(GroverError::InvalidTransition {
            phase: self.phase,
            action: "measure",
        })?;

        let start = Instant::now();
        let counts = grover_state::sample(state, self.config.shots, rng)?;
        self.statistics.measurement_time += start.elapsed();

        self.phase = EnginePhase::Measured;
        Ok(counts)
    }

    /// Sample with a [`Sampler`] built from `config.seed`
    ///
    /// Without a seed the counts differ from run to run.
    pub fn measure_with_config(&mut self) -> Result<OutcomeCounts> {
        let mut sampler = Sampler::new(self.config.seed);
        self.measure(sampler.rng_mut())
    }

    /// Current state vector, `None` before [`init`](Self::init)
    pub fn state(&self) -> Option<&StateVector> {
        self.state.as_ref()
    }

    /// Consume the engine, keeping the state vector
    pub fn into_state(self) -> Option<StateVector> {
        self.state
    }

    /// Recorded gate trace, if recording is enabled and the engine is initialized
    pub fn circuit(&self) -> Option<&Circuit> {
        self.circuit.as_ref()
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn iterations_applied(&self) -> usize {
        self.iterations_applied
    }

    pub fn target(&self) -> &TargetState {
        &self.target
    }

    pub fn num_qubits(&self) -> usize {
        self.target.num_qubits()
    }

    pub fn config(&self) -> &GroverConfig {
        &self.config
    }

    pub fn statistics(&self) -> &ExecutionStatistics {
        &self.statistics
    }

    fn expect_phase(&self, allowed: &[EnginePhase], action: &'static str) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(GroverError::InvalidTransition {
                phase: self.phase,
                action,
            })
        }
    }

    fn check_normalization(&mut self) -> Result<()> {
        let Some(state) = self.state.as_ref() else {
            return Ok(());
        };
        let report = validate_normalization(state.amplitudes(), self.config.norm_tolerance);
        self.statistics.record_norm_deviation(report.deviation);

        if report.is_valid() {
            Ok(())
        } else {
            warn!(
                "normalization drift after iteration {}: {}",
                self.iterations_applied, report
            );
            Err(GroverError::NumericalDrift {
                total_probability: report.total_probability,
                tolerance: report.tolerance,
            })
        }
    }
}

/// Run `iterations` Grover iterations and return the final state
///
/// ```
/// use grover_sim::GroverConfig;
///
/// let state = grover_sim::run(3, "101", 2, &GroverConfig::default()).unwrap();
/// assert!(state.probability(5).unwrap() > 0.9);
/// ```
pub fn run(
    num_qubits: usize,
    target: &str,
    iterations: usize,
    config: &GroverConfig,
) -> Result<StateVector> {
    let mut engine = GroverEngine::new(num_qubits, target, config.clone())?;
    engine.run(iterations)?;
    engine.into_state().ok_or(GroverError::InvalidTransition {
        phase: EnginePhase::Uninitialized,
        action: "read the state",
    })
}

/// Run, measure and collect statistics in one call
pub fn search(
    num_qubits: usize,
    target: &str,
    iterations: usize,
    config: &GroverConfig,
) -> Result<GroverResult> {
    let mut engine = GroverEngine::new(num_qubits, target, config.clone())?;
    engine.run(iterations)?;
    let counts = engine.measure_with_config()?;

    let GroverEngine {
        target,
        state,
        circuit,
        statistics,
        iterations_applied,
        phase,
        ..
    } = engine;
    let state = state.ok_or(GroverError::InvalidTransition {
        phase,
        action: "read the state",
    })?;

    debug!(
        "search for |{}⟩ finished: {} shots, {} on target",
        target,
        counts.total_shots(),
        counts.get(target.as_str())
    );

    Ok(GroverResult {
        target,
        iterations: iterations_applied,
        state,
        counts,
        circuit,
        statistics,
    })
}
