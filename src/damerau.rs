//! True Damerau-Levenshtein distance, Lowrance-Wagner formulation.
//!
//! Unlike the restricted family this transposition reaches arbitrarily far
//! back in the matrix, so the rolling-row trick does not apply: the engine
//! keeps the full `(m + 2) x (n + 2)` matrix, with sentinel borders set to
//! `m + n` so no minimisation can take a zero-cost shortcut through the
//! edge, plus a last-seen-column map over the first operand's elements.

use fnv::{FnvHashMap, FnvHasher};
use std::hash::Hasher;

use crate::cancel::CancellationToken;
use crate::compare::Comparator;
use crate::error::DistanceError;
use crate::metrics::Resolution;
use crate::range::{BoundedRange, RangeCheck};

/// Last column (1-based) where each distinct element of `x` occurred.
///
/// Keyed through the caller's comparator: bucketed by the comparator's hash,
/// resolved within a bucket by the comparator's equality. Entries store an
/// index into `x` instead of the element itself, so `T` needs no `Clone`.
struct LastSeen<'a, T, C> {
    x: &'a [T],
    comparator: &'a C,
    buckets: FnvHashMap<u64, Vec<Entry>>,
}

struct Entry {
    /// Index into `x` of the bucket entry's representative element.
    index: usize,
    /// 1-based column where that element was last seen.
    column: usize,
}

impl<'a, T, C: Comparator<T>> LastSeen<'a, T, C> {
    fn new(x: &'a [T], comparator: &'a C) -> LastSeen<'a, T, C> {
        LastSeen {
            x,
            comparator,
            buckets: FnvHashMap::default(),
        }
    }

    fn hash_of(&self, value: &T) -> u64 {
        let mut hasher = FnvHasher::default();
        self.comparator.hash(value, &mut hasher);
        hasher.finish()
    }

    /// Last column where an element equal to `value` occurred, 0 if never.
    fn get(&self, value: &T) -> usize {
        let (x, comparator) = (self.x, self.comparator);
        self.buckets.get(&self.hash_of(value)).map_or(0, |bucket| {
            bucket
                .iter()
                .find(|entry| comparator.eq(&x[entry.index], value))
                .map_or(0, |entry| entry.column)
        })
    }

    /// Records that column `column` (1-based) holds `x[column - 1]`.
    fn record(&mut self, column: usize) {
        let x = self.x;
        let value = &x[column - 1];
        let hash = self.hash_of(value);
        let comparator = self.comparator;
        let bucket = self.buckets.entry(hash).or_default();
        match bucket
            .iter_mut()
            .find(|entry| comparator.eq(&x[entry.index], value))
        {
            Some(entry) => entry.column = column,
            None => bucket.push(Entry {
                index: column - 1,
                column,
            }),
        }
    }
}

pub(crate) fn run<T, C: Comparator<T>>(
    x: &[T],
    y: &[T],
    range: &BoundedRange,
    comparator: &C,
    token: &CancellationToken,
) -> Result<Resolution, DistanceError> {
    let m = x.len();
    let n = y.len();
    if m == 0 {
        return Ok(Resolution::Exact(n));
    }
    if n == 0 {
        return Ok(Resolution::Exact(m));
    }

    // Sentinel larger than any real distance.
    let max_dist = m + n;

    // One flat allocation, stride n + 2: matrix[i][j] = flat[i * stride + j].
    let stride = n + 2;
    let mut flat = vec![0usize; (m + 2) * stride];
    flat[0] = max_dist;
    for i in 0..=m {
        flat[(i + 1) * stride] = max_dist;
        flat[(i + 1) * stride + 1] = i;
    }
    for j in 0..=n {
        flat[j + 1] = max_dist;
        flat[stride + j + 1] = j;
    }

    let mut last_seen = LastSeen::new(x, comparator);

    for i in 1..=m {
        token.bail_if_cancelled()?;

        // Last row in this column where x[i - 1] matched, 0 so far.
        let mut match_row = 0usize;
        let mut best = i;
        for j in 1..=n {
            let k = last_seen.get(&y[j - 1]);
            let l = match_row;
            let cost = if comparator.eq(&x[i - 1], &y[j - 1]) {
                match_row = j;
                0
            } else {
                1
            };

            let diagonal = flat[i * stride + j] + cost;
            let deletion = flat[(i + 1) * stride + j] + 1;
            let insertion = flat[i * stride + j + 1] + 1;
            // Swap x[k - 1] with x[i - 1], paying for everything in between.
            // When k or l is 0 the sentinel border makes this arm a no-op.
            let transposition = flat[k * stride + l] + (i - k - 1) + 1 + (j - l - 1);

            let cell = diagonal.min(deletion).min(insertion).min(transposition);
            flat[(i + 1) * stride + j + 1] = cell;
            best = best.min(cell);
        }

        if range.probe(best as i64) == RangeCheck::AboveRange {
            return Ok(Resolution::OutOfRange(best));
        }

        last_seen.record(i);
    }

    Ok(Resolution::Exact(flat[(m + 1) * stride + n + 1]))
}
