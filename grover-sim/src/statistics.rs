//! Execution statistics tracking

use serde::Serialize;
use std::time::Duration;

/// Timing and resource figures for one engine run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExecutionStatistics {
    /// Time spent allocating and preparing the superposition
    pub initialization_time: Duration,

    /// Time spent in oracle applications
    pub oracle_time: Duration,

    /// Time spent in diffusion applications
    pub diffusion_time: Duration,

    /// Time spent sampling shots
    pub measurement_time: Duration,

    /// Number of kernel gate applications
    ///
    /// Closed-form diffusion contributes nothing here.
    pub gates_applied: usize,

    /// Completed Grover iterations
    pub iterations: usize,

    /// Bytes held by the amplitude buffer
    pub peak_memory_bytes: usize,

    /// Largest |Σ|a|² − 1| seen by a normalization check
    pub max_norm_deviation: f64,
}

impl ExecutionStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all timed phases
    pub fn total_time(&self) -> Duration {
        self.initialization_time + self.oracle_time + self.diffusion_time + self.measurement_time
    }

    /// Gate execution rate (gates per second) over oracle and diffusion time
    pub fn gates_per_second(&self) -> f64 {
        let secs = (self.oracle_time + self.diffusion_time).as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.gates_applied as f64 / secs
        }
    }

    pub fn peak_memory_mb(&self) -> f64 {
        self.peak_memory_bytes as f64 / 1_000_000.0
    }

    pub(crate) fn record_norm_deviation(&mut self, deviation: f64) {
        if deviation > self.max_norm_deviation {
            self.max_norm_deviation = deviation;
        }
    }
}

impl std::fmt::Display for ExecutionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Execution Statistics:")?;
        writeln!(f, "  Total time: {:?}", self.total_time())?;
        writeln!(f, "    Initialization: {:?}", self.initialization_time)?;
        writeln!(f, "    Oracle: {:?}", self.oracle_time)?;
        writeln!(f, "    Diffusion: {:?}", self.diffusion_time)?;
        writeln!(f, "    Measurement: {:?}", self.measurement_time)?;

        writeln!(f, "\n  Gates:")?;
        writeln!(f, "    Applied: {} over {} iterations", self.gates_applied, self.iterations)?;
        writeln!(f, "    Execution rate: {:.0} gates/sec", self.gates_per_second())?;

        writeln!(f, "\n  Memory:")?;
        writeln!(f, "    Peak usage: {:.2} MB", self.peak_memory_mb())?;

        writeln!(f, "\n  Numerics:")?;
        writeln!(f, "    Max norm deviation: {:.2e}", self.max_norm_deviation)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_time() {
        let stats = ExecutionStatistics {
            initialization_time: Duration::from_millis(1),
            oracle_time: Duration::from_millis(2),
            diffusion_time: Duration::from_millis(3),
            measurement_time: Duration::from_millis(4),
            ..Default::default()
        };
        assert_eq!(stats.total_time(), Duration::from_millis(10));
    }

    #[test]
    fn test_gates_per_second() {
        let mut stats = ExecutionStatistics::new();
        assert_eq!(stats.gates_per_second(), 0.0);

        stats.gates_applied = 1000;
        stats.oracle_time = Duration::from_millis(500);
        stats.diffusion_time = Duration::from_millis(500);
        assert!((stats.gates_per_second() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_norm_deviation_keeps_maximum() {
        let mut stats = ExecutionStatistics::new();
        stats.record_norm_deviation(1e-12);
        stats.record_norm_deviation(1e-14);
        assert_eq!(stats.max_norm_deviation, 1e-12);
    }

    #[test]
    fn test_display() {
        let stats = ExecutionStatistics {
            gates_applied: 42,
            iterations: 2,
            peak_memory_bytes: 2_000_000,
            ..Default::default()
        };
        let text = stats.to_string();
        assert!(text.contains("Applied: 42 over 2 iterations"));
        assert!(text.contains("Peak usage: 2.00 MB"));
    }
}
