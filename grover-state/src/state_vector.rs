//! Dense amplitude vector

use crate::error::{Result, StateError};
use crate::kernels;
use grover_core::QubitId;
use num_complex::Complex64;

/// Hard cap on dense simulation width (2^30 amplitudes = 16 GiB)
pub const MAX_QUBITS: usize = 30;

/// Allowed deviation of the total probability from 1
pub const NORM_TOLERANCE: f64 = 1e-6;

/// Quantum state of an n-qubit register as 2^n complex amplitudes
///
/// Index `i` holds the amplitude of the basis state whose bit `k` is the
/// value of qubit `k`. Every unitary applied through [`kernels`] keeps the
/// total probability at 1 up to rounding.
///
/// # Example
///
/// ```
/// use grover_state::StateVector;
///
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// assert_eq!(state.probability(0).unwrap(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// - [`StateError::NoQubits`] for `num_qubits == 0`
    /// - [`StateError::TooManyQubits`] above [`MAX_QUBITS`]
    /// - [`StateError::AllocationError`] if the buffer cannot be reserved
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(StateError::NoQubits);
        }
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max_qubits: MAX_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;
        let mut amplitudes = Vec::new();
        amplitudes
            .try_reserve_exact(dimension)
            .map_err(|_| StateError::AllocationError {
                size: dimension * std::mem::size_of::<Complex64>(),
            })?;
        amplitudes.resize(dimension, Complex64::new(0.0, 0.0));
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create the uniform superposition H⊗n|0...0⟩
    ///
    /// ```
    /// use grover_state::StateVector;
    ///
    /// let state = StateVector::uniform(3).unwrap();
    /// for amp in state.amplitudes() {
    ///     assert!((amp.re - 1.0 / 8f64.sqrt()).abs() < 1e-12);
    /// }
    /// ```
    pub fn uniform(num_qubits: usize) -> Result<Self> {
        let mut state = Self::new(num_qubits)?;
        state.apply_hadamard_all();
        Ok(state)
    }

    /// Create a state vector from raw amplitude data
    ///
    /// The amplitudes are copied as given; no normalization is applied.
    ///
    /// # Errors
    /// Returns error if the length is not 2^num_qubits
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let mut state = Self::new(num_qubits)?;
        if amplitudes.len() != state.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: state.dimension(),
                actual: amplitudes.len(),
            });
        }
        state.amplitudes.copy_from_slice(amplitudes);
        Ok(state)
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// State dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Mutable access for kernels and tests; callers own the norm invariant
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Amplitude of one basis state
    pub fn amplitude(&self, index: usize) -> Result<Complex64> {
        self.amplitudes
            .get(index)
            .copied()
            .ok_or(StateError::IndexOutOfRange {
                index,
                dimension: self.dimension(),
            })
    }

    /// Probability |a|² of one basis state
    pub fn probability(&self, index: usize) -> Result<f64> {
        self.amplitude(index).map(|a| a.norm_sqr())
    }

    /// Probability of every basis state, indexed like the amplitudes
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Sum of |a|² over all amplitudes
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// L2 norm of the amplitude vector
    pub fn norm(&self) -> f64 {
        self.total_probability().sqrt()
    }

    /// True if the total probability is within `epsilon` of 1
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.total_probability() - 1.0).abs() <= epsilon
    }

    /// Normalization check at [`NORM_TOLERANCE`]
    ///
    /// A diagnostic: a `false` here means a gate composition bug, never a
    /// condition the engine recovers from.
    pub fn norm_check(&self) -> bool {
        self.is_normalized(NORM_TOLERANCE)
    }

    /// Like [`is_normalized`](Self::is_normalized) but as an error
    pub fn ensure_normalized(&self, epsilon: f64) -> Result<()> {
        let total_probability = self.total_probability();
        if (total_probability - 1.0).abs() <= epsilon {
            Ok(())
        } else {
            Err(StateError::NotNormalized { total_probability })
        }
    }

    /// Apply Hadamard to every qubit in ascending order
    ///
    /// From |0...0⟩ this yields every amplitude equal to 1/√(2^n).
    pub fn apply_hadamard_all(&mut self) {
        for qubit in QubitId::range(self.num_qubits) {
            kernels::hadamard_unchecked(&mut self.amplitudes, qubit);
        }
    }

    /// Mean of all amplitudes
    pub fn mean_amplitude(&self) -> Complex64 {
        let sum: Complex64 = self.amplitudes.iter().sum();
        sum / self.dimension() as f64
    }

    /// ⟨self|other⟩
    pub fn inner_product(&self, other: &StateVector) -> Result<Complex64> {
        if self.dimension() != other.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    /// |⟨self|other⟩|², insensitive to global phase
    pub fn fidelity(&self, other: &StateVector) -> Result<f64> {
        Ok(self.inner_product(other)?.norm_sqr())
    }

    /// Reset the state to |0...0⟩ without reallocating
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Bytes held by the amplitude buffer
    pub fn memory_bytes(&self) -> usize {
        self.amplitudes.capacity() * std::mem::size_of::<Complex64>()
    }
}
