use grover_sim::{theory, DiffusionMode, ExecutionStatistics, GroverResult};
use grover_state::OutcomeCounts;
use serde::Serialize;
use std::fmt::Write as _;

/// Machine-readable summary of one search
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub num_qubits: usize,
    pub target: &'a str,
    pub target_index: usize,
    pub iterations: usize,
    pub optimal_iterations: usize,
    pub diffusion: DiffusionMode,
    pub seed: Option<u64>,
    pub theoretical_probability: f64,
    pub target_probability: f64,
    pub success_rate: f64,
    pub most_common: Option<&'a str>,
    pub counts: &'a OutcomeCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit: Option<Vec<String>>,
    pub statistics: &'a ExecutionStatistics,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a GroverResult, diffusion: DiffusionMode, seed: Option<u64>) -> Self {
        Self {
            num_qubits: result.num_qubits(),
            target: result.target.as_str(),
            target_index: result.target.index(),
            iterations: result.iterations,
            optimal_iterations: theory::optimal_iterations(result.num_qubits()),
            diffusion,
            seed,
            theoretical_probability: result.theoretical_probability(),
            target_probability: result.target_probability(),
            success_rate: result.success_rate(),
            most_common: result.counts.most_common().map(|(bits, _)| bits),
            counts: &result.counts,
            circuit: result.circuit.as_ref().map(|c| c.to_lines()),
            statistics: &result.statistics,
        }
    }

    /// Human-readable rendering with a percentage table
    pub fn to_text(&self, show_statistics: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Grover search: {} qubits, target |{}⟩ (index {})",
            self.num_qubits, self.target, self.target_index
        );
        let _ = writeln!(
            out,
            "Iterations: {} (optimal {}), diffusion: {}",
            self.iterations, self.optimal_iterations, self.diffusion
        );
        if let Some(seed) = self.seed {
            let _ = writeln!(out, "Seed: {}", seed);
        }
        let _ = writeln!(
            out,
            "Theoretical success probability: {:.4}",
            self.theoretical_probability
        );
        let _ = writeln!(out, "Final target probability: {:.4}", self.target_probability);
        let _ = writeln!(
            out,
            "Observed success rate: {:.4} ({} / {} shots)",
            self.success_rate,
            self.counts.get(self.target),
            self.counts.total_shots()
        );
        let _ = writeln!(out);
        let _ = write!(out, "{}", self.counts);

        if let Some(lines) = &self.circuit {
            let _ = writeln!(out, "\nCircuit ({} gates):", lines.len());
            for (i, line) in lines.iter().enumerate() {
                let _ = writeln!(out, "  {:4}: {}", i, line);
            }
        }

        if show_statistics {
            let _ = write!(out, "\n{}", self.statistics);
        }
        out
    }
}
