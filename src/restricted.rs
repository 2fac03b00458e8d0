//! Rolling-buffer dynamic programming shared by the LCS, Levenshtein and
//! OSA metrics.
//!
//! The three variants differ only in which operations are legal, so one
//! engine carries a pair of capability flags instead of three copies of the
//! loop. Memory stays O(len(y)): the matrix is a fixed ring of two rows
//! (three when adjacent transposition is enabled, since its cost term
//! reaches two columns back), rotated once per column.

use std::mem;

use crate::cancel::CancellationToken;
use crate::compare::Comparator;
use crate::error::DistanceError;
use crate::metrics::Resolution;
use crate::range::{BoundedRange, RangeCheck};

/// Which operations the variant permits beyond insertion and deletion.
pub(crate) struct RestrictedEngine {
    pub substitution: bool,
    pub transposition: bool,
}

impl RestrictedEngine {
    /// LCS distance: indel only.
    pub(crate) const INDEL_ONLY: RestrictedEngine = RestrictedEngine {
        substitution: false,
        transposition: false,
    };

    /// Levenshtein distance: indel + substitution.
    pub(crate) const WITH_SUBSTITUTION: RestrictedEngine = RestrictedEngine {
        substitution: true,
        transposition: false,
    };

    /// OSA distance: indel + substitution + adjacent transposition.
    pub(crate) const WITH_TRANSPOSITION: RestrictedEngine = RestrictedEngine {
        substitution: true,
        transposition: true,
    };

    pub(crate) fn run<T, C: Comparator<T>>(
        &self,
        x: &[T],
        y: &[T],
        range: &BoundedRange,
        comparator: &C,
        token: &CancellationToken,
    ) -> Result<Resolution, DistanceError> {
        let col_len = x.len();
        let row_len = y.len();
        if row_len == 0 {
            return Ok(Resolution::Exact(col_len));
        }
        if col_len == 0 {
            return Ok(Resolution::Exact(row_len));
        }

        // The buffer ring. `prev2` is only touched under the transposition
        // flag, so the indel/substitution variants never allocate it.
        let mut prev: Vec<usize> = (0..=row_len).collect();
        let mut curr: Vec<usize> = vec![0; row_len + 1];
        let mut prev2: Vec<usize> = if self.transposition {
            vec![0; row_len + 1]
        } else {
            Vec::new()
        };

        for c in 1..=col_len {
            token.bail_if_cancelled()?;

            curr[0] = c;
            let mut best = c;
            for r in 1..=row_len {
                let candidate = if comparator.eq(&x[c - 1], &y[r - 1]) {
                    prev[r - 1]
                } else {
                    // deletion vs insertion
                    let mut candidate = prev[r].min(curr[r - 1]) + 1;
                    if self.substitution {
                        candidate = candidate.min(prev[r - 1] + 1);
                    }
                    if self.transposition
                        && r > 1
                        && c > 1
                        && comparator.eq(&x[c - 1], &y[r - 2])
                        && comparator.eq(&x[c - 2], &y[r - 1])
                    {
                        candidate = candidate.min(prev2[r - 2] + 1);
                    }
                    candidate
                };
                curr[r] = candidate;
                best = best.min(candidate);
            }

            // The column minimum never decreases in later columns (every
            // operation costs at least 1), so once it crosses the caller's
            // upper bound the final distance is out of range too.
            if range.probe(best as i64) == RangeCheck::AboveRange {
                return Ok(Resolution::OutOfRange(best));
            }

            // Rotate the ring: prev2 <- prev <- curr, with the oldest row
            // becoming the next column's scratch.
            if self.transposition {
                mem::swap(&mut prev2, &mut prev);
            }
            mem::swap(&mut prev, &mut curr);
        }

        Ok(Resolution::Exact(prev[row_len]))
    }
}
