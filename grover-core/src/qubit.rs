//! Qubit addressing

use crate::{QuantumError, Result};
use std::fmt;

/// Index of a qubit inside an n-qubit register
///
/// Qubit `k` corresponds to bit `k` of a basis-state index, so its
/// amplitude pairs are `(i, i | 1 << k)` for every `i` with bit `k` clear.
///
/// # Example
/// ```
/// use grover_core::QubitId;
///
/// let q2 = QubitId::new(2);
/// assert_eq!(q2.mask(), 0b100);
/// assert!(q2.check(3).is_ok());
/// assert!(q2.check(2).is_err());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QubitId(usize);

impl QubitId {
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Bit mask selecting this qubit in a basis-state index
    #[inline]
    pub const fn mask(&self) -> usize {
        1 << self.0
    }

    /// Distance between the two members of an amplitude pair
    #[inline]
    pub const fn stride(&self) -> usize {
        self.mask()
    }

    /// Fail unless the qubit lies inside a register of `num_qubits`
    pub fn check(self, num_qubits: usize) -> Result<Self> {
        if self.0 < num_qubits {
            Ok(self)
        } else {
            Err(QuantumError::invalid_qubit(self.0, num_qubits))
        }
    }

    /// All qubits of an n-qubit register, in ascending order
    pub fn range(num_qubits: usize) -> impl Iterator<Item = QubitId> + Clone {
        (0..num_qubits).map(QubitId)
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}
