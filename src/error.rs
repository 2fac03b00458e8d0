use std::error::Error;
use std::fmt;

use crate::range::BoundedRange;

/// The ways a distance computation can fail.
///
/// Every failure is detected before or during the call and propagated
/// directly; no variant leaves partial state behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DistanceError {
    /// The caller's range has a lower bound above its upper bound. Rejected
    /// before any work is performed.
    EmptyRange(BoundedRange),
    /// Hamming distance was asked for sequences of different lengths.
    /// Raised lazily, once the shorter operand runs out.
    LengthMismatch {
        /// Length of the first operand.
        left: usize,
        /// Length of the second operand.
        right: usize,
    },
    /// Cancellation was requested and observed at a checkpoint.
    Cancelled,
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DistanceError::EmptyRange(range) => {
                write!(f, "range {} is empty", range)
            }
            DistanceError::LengthMismatch { left, right } => {
                write!(
                    f,
                    "sequences must have equal length ({} vs {})",
                    left, right
                )
            }
            DistanceError::Cancelled => write!(f, "distance computation was cancelled"),
        }
    }
}

impl Error for DistanceError {}
