//! Outcome of a full Grover search

use crate::statistics::ExecutionStatistics;
use crate::theory;
use grover_core::{Circuit, TargetState};
use grover_state::{OutcomeCounts, StateVector};

/// Everything produced by one [`search`](crate::search) call
#[derive(Debug, Clone)]
pub struct GroverResult {
    /// Searched-for basis state
    pub target: TargetState,

    /// Grover iterations applied
    pub iterations: usize,

    /// Final amplitudes
    pub state: StateVector,

    /// Sampled outcomes
    pub counts: OutcomeCounts,

    /// Gate trace, present when recording was enabled
    pub circuit: Option<Circuit>,

    pub statistics: ExecutionStatistics,
}

impl GroverResult {
    pub fn num_qubits(&self) -> usize {
        self.target.num_qubits()
    }

    /// |a_target|² of the final state
    pub fn target_probability(&self) -> f64 {
        self.state
            .amplitudes()
            .get(self.target.index())
            .map(|a| a.norm_sqr())
            .unwrap_or(0.0)
    }

    /// Fraction of shots that hit the target
    pub fn success_rate(&self) -> f64 {
        self.counts.probability(self.target.as_str())
    }

    /// sin²((2k+1)θ) for this width and iteration count
    pub fn theoretical_probability(&self) -> f64 {
        theory::success_probability(self.num_qubits(), self.iterations)
    }

    /// True if the most frequent outcome is the target
    pub fn found_target(&self) -> bool {
        self.counts
            .most_common()
            .map_or(false, |(bits, _)| bits == self.target.as_str())
    }
}

impl std::fmt::Display for GroverResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Grover search for |{}⟩ ({} qubits, {} iterations)",
            self.target,
            self.num_qubits(),
            self.iterations
        )?;
        writeln!(
            f,
            "  Target probability: {:.4} (theory {:.4})",
            self.target_probability(),
            self.theoretical_probability()
        )?;
        writeln!(f, "  Observed success rate: {:.4}", self.success_rate())?;
        write!(f, "{}", self.counts)
    }
}
