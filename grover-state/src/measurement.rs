//! Computational-basis sampling
//!
//! Measurement here never collapses the state: the amplitude vector is only
//! read, |a|² becomes a categorical distribution, and every shot is an
//! independent draw from it. Outcomes are aggregated as bit-strings in the
//! same order as [`grover_core::TargetState`] (qubit 0 is the last
//! character).

use crate::error::{Result, StateError};
use crate::state_vector::StateVector;
use grover_core::format_bitstring;
use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Draw `shots` measurement outcomes from `state`
///
/// The random source is injected, so a seeded generator gives a
/// reproducible [`OutcomeCounts`].
///
/// # Errors
/// - [`StateError::NotNormalized`] if the state carries no probability
///   (all zero, NaN or infinite)
/// - [`StateError::SamplingFailed`] if the weights are otherwise rejected
///
/// # Example
/// ```
/// use grover_state::{sample, StateVector};
/// use rand::SeedableRng;
///
/// let state = StateVector::new(2).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let counts = sample(&state, 10, &mut rng).unwrap();
/// assert_eq!(counts.get("00"), 10);
/// ```
pub fn sample<R: Rng + ?Sized>(
    state: &StateVector,
    shots: usize,
    rng: &mut R,
) -> Result<OutcomeCounts> {
    let mut counts = OutcomeCounts::new(state.num_qubits());
    if shots == 0 {
        return Ok(counts);
    }

    let total_probability = state.total_probability();
    if !(total_probability.is_finite() && total_probability > 0.0) {
        return Err(StateError::NotNormalized { total_probability });
    }

    let probabilities = state.probabilities();
    let distribution = WeightedIndex::new(&probabilities)
        .map_err(|err| StateError::SamplingFailed(err.to_string()))?;

    let mut tallies = vec![0usize; probabilities.len()];
    for _ in 0..shots {
        tallies[distribution.sample(rng)] += 1;
    }

    for (index, &count) in tallies.iter().enumerate().filter(|(_, &c)| c > 0) {
        counts.add(format_bitstring(index, state.num_qubits()), count);
    }
    debug!(
        "sampled {} shots into {} distinct outcomes",
        shots,
        counts.num_outcomes()
    );
    Ok(counts)
}

/// Sampler owning its random source
///
/// [`Sampler::seeded`] is deterministic. [`Sampler::from_entropy`] draws a
/// fresh OS seed, so two unseeded runs are expected to disagree; that is
/// the nature of measurement, not a defect.
///
/// # Example
/// ```
/// use grover_state::{Sampler, StateVector};
///
/// let state = StateVector::uniform(2).unwrap();
/// let a = Sampler::seeded(42).sample(&state, 256).unwrap();
/// let b = Sampler::seeded(42).sample(&state, 256).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
    seed: Option<u64>,
}

impl Sampler {
    /// Seeded when `seed` is `Some`, otherwise from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seed this sampler was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw `shots` outcomes; successive calls continue the same stream
    pub fn sample(&mut self, state: &StateVector, shots: usize) -> Result<OutcomeCounts> {
        sample(state, shots, &mut self.rng)
    }

    /// Access to the underlying generator
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

/// Measurement outcome counts
///
/// Maps n-character bit-strings to the number of shots that produced them.
/// Ordered by bit-string so histogram consumers see a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    num_qubits: usize,
    counts: BTreeMap<String, usize>,
    total_shots: usize,
}

impl OutcomeCounts {
    /// Empty counts for an `num_qubits`-qubit register
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            counts: BTreeMap::new(),
            total_shots: 0,
        }
    }

    /// Build from an existing map; total is the sum of the counts
    pub fn from_counts(num_qubits: usize, counts: BTreeMap<String, usize>) -> Self {
        let total_shots = counts.values().sum();
        Self {
            num_qubits,
            counts,
            total_shots,
        }
    }

    /// Record `count` more observations of `bitstring`
    pub fn add(&mut self, bitstring: String, count: usize) {
        *self.counts.entry(bitstring).or_insert(0) += count;
        self.total_shots += count;
    }

    /// Count for `bitstring` (0 if never observed)
    pub fn get(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Observed frequency of `bitstring`
    pub fn probability(&self, bitstring: &str) -> f64 {
        if self.total_shots == 0 {
            0.0
        } else {
            self.get(bitstring) as f64 / self.total_shots as f64
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn total_shots(&self) -> usize {
        self.total_shots
    }

    /// Number of distinct outcomes observed
    pub fn num_outcomes(&self) -> usize {
        self.counts.len()
    }

    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// Observed outcomes in bit-string order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(bs, &count)| (bs.as_str(), count))
    }

    /// Most frequent outcome; ties resolve to the smallest bit-string
    pub fn most_common(&self) -> Option<(&str, usize)> {
        self.iter()
            .fold(None, |best: Option<(&str, usize)>, (bs, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((bs, count)),
            })
    }

    /// Outcomes sorted by count, descending; ties in bit-string order
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted
    }

    /// Observed frequency of every outcome
    pub fn to_probabilities(&self) -> BTreeMap<String, f64> {
        self.counts
            .keys()
            .map(|bs| (bs.clone(), self.probability(bs)))
            .collect()
    }
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement Counts ({} shots):", self.total_shots)?;

        let sorted = self.sorted();
        for (bitstring, count) in sorted.iter().take(16) {
            writeln!(
                f,
                "  {}: {} ({:.2}%)",
                bitstring,
                count,
                self.probability(bitstring) * 100.0
            )?;
        }

        if sorted.len() > 16 {
            writeln!(f, "  ... and {} more outcomes", sorted.len() - 16)?;
        }

        Ok(())
    }
}
