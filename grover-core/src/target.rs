//! Marked basis state parsed from a bit-string

use crate::{QuantumError, QubitId, Result};
use std::fmt;
use std::str::FromStr;

/// Widest register whose basis indices still fit a `usize`
pub const MAX_ADDRESSABLE_QUBITS: usize = usize::BITS as usize - 1;

/// The basis state Grover's algorithm searches for
///
/// Built once from an n-character string of `'0'`/`'1'` and immutable
/// afterwards. The last character is qubit 0, so [`TargetState::index`]
/// equals the string read as a binary number.
///
/// # Example
/// ```
/// use grover_core::{QubitId, TargetState};
///
/// let target = TargetState::parse("110", 3).unwrap();
/// assert_eq!(target.index(), 6);
/// assert!(!target.bit(QubitId::new(0)));
/// assert!(target.bit(QubitId::new(2)));
///
/// assert!(TargetState::parse("11", 3).is_err());
/// assert!(TargetState::parse("1a1", 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetState {
    bits: String,
    index: usize,
}

impl TargetState {
    /// Parse `bits` as the target of an `num_qubits`-qubit search
    ///
    /// # Errors
    /// - [`QuantumError::EmptyRegister`] when `num_qubits` is 0
    /// - [`QuantumError::BitStringLength`] when the length differs from `num_qubits`
    /// - [`QuantumError::NonBinaryCharacter`] for anything but `'0'`/`'1'`
    pub fn parse(bits: &str, num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(QuantumError::EmptyRegister);
        }
        if num_qubits > MAX_ADDRESSABLE_QUBITS {
            return Err(QuantumError::RegisterTooWide {
                num_qubits,
                max: MAX_ADDRESSABLE_QUBITS,
            });
        }

        let actual = bits.chars().count();
        if actual != num_qubits {
            return Err(QuantumError::BitStringLength {
                bits: bits.to_string(),
                expected: num_qubits,
                actual,
            });
        }

        let mut index = 0usize;
        for (position, character) in bits.chars().enumerate() {
            let bit = match character {
                '0' => 0,
                '1' => 1,
                _ => {
                    return Err(QuantumError::NonBinaryCharacter {
                        bits: bits.to_string(),
                        character,
                        position,
                    })
                }
            };
            index = (index << 1) | bit;
        }

        Ok(Self {
            bits: bits.to_string(),
            index,
        })
    }

    /// Target for basis index `index` of an `num_qubits`-qubit register
    pub fn from_index(index: usize, num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(QuantumError::EmptyRegister);
        }
        if num_qubits > MAX_ADDRESSABLE_QUBITS {
            return Err(QuantumError::RegisterTooWide {
                num_qubits,
                max: MAX_ADDRESSABLE_QUBITS,
            });
        }
        if index >> num_qubits != 0 {
            let bits = format!("{:b}", index);
            return Err(QuantumError::BitStringLength {
                actual: bits.len(),
                bits,
                expected: num_qubits,
            });
        }
        Ok(Self {
            bits: format_bitstring(index, num_qubits),
            index,
        })
    }

    /// Target with every qubit set to 1
    pub fn all_ones(num_qubits: usize) -> Result<Self> {
        let width = num_qubits.min(MAX_ADDRESSABLE_QUBITS);
        Self::from_index((1usize << width) - 1, num_qubits)
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.bits.len()
    }

    /// Basis-state index of the target
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.bits
    }

    /// Value of the target bit on `qubit`
    #[inline]
    pub fn bit(&self, qubit: QubitId) -> bool {
        self.index & qubit.mask() != 0
    }

    /// Qubits whose target bit is 0, in ascending order
    pub fn zero_qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        QubitId::range(self.num_qubits()).filter(move |&q| !self.bit(q))
    }
}

impl FromStr for TargetState {
    type Err = QuantumError;

    /// Parse with the register width taken from the string length
    fn from_str(bits: &str) -> Result<Self> {
        Self::parse(bits, bits.chars().count())
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

/// Render basis index `index` as an `num_qubits`-character bit-string
///
/// Uses the same order as [`TargetState`]: qubit 0 is the last character.
///
/// ```
/// assert_eq!(grover_core::format_bitstring(5, 4), "0101");
/// ```
pub fn format_bitstring(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}
