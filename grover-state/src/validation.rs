//! Normalization diagnostics
//!
//! Gate kernels never renormalize. A total probability that wanders away
//! from 1 indicates a defect in gate composition, so the engine reports it
//! through these helpers instead of silently correcting it.

use num_complex::Complex64;
use std::fmt;

/// How far a state has drifted from unit norm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Drift at rounding level (< 1e-10)
    Exact,
    /// Measurable but within tolerance
    Drift,
    /// Outside tolerance, or NaN/infinite amplitudes
    Violation,
}

/// Result of a normalization check
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// Sum of |amplitude|²
    pub total_probability: f64,
    /// |total_probability − 1|
    pub deviation: f64,
    /// Tolerance the report was computed against
    pub tolerance: f64,
    /// Whether any amplitude was NaN or infinite
    pub has_invalid_values: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        !self.has_invalid_values && self.deviation <= self.tolerance
    }

    pub fn severity(&self) -> Severity {
        if !self.is_valid() {
            Severity::Violation
        } else if self.deviation < 1e-10 {
            Severity::Exact
        } else {
            Severity::Drift
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidationReport(total_probability={:.10}, deviation={:.2e}, tolerance={:.0e}, {:?})",
            self.total_probability,
            self.deviation,
            self.tolerance,
            self.severity()
        )
    }
}

/// Check that the amplitudes carry a total probability of 1
///
/// # Example
/// ```
/// use grover_state::validation::validate_normalization;
/// use num_complex::Complex64;
///
/// let amplitudes = vec![Complex64::new(0.5f64.sqrt(), 0.0); 2];
/// assert!(validate_normalization(&amplitudes, 1e-6).is_valid());
/// ```
pub fn validate_normalization(amplitudes: &[Complex64], tolerance: f64) -> ValidationReport {
    let total_probability: f64 = amplitudes.iter().map(|a| a.norm_sqr()).sum();
    ValidationReport {
        total_probability,
        deviation: (total_probability - 1.0).abs(),
        tolerance,
        has_invalid_values: has_invalid_values(amplitudes),
    }
}

/// True if any amplitude has a NaN or infinite component
pub fn has_invalid_values(amplitudes: &[Complex64]) -> bool {
    amplitudes.iter().any(|a| !a.re.is_finite() || !a.im.is_finite())
}
