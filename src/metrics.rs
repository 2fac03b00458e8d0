//! This is a collection of sequence distance metrics, published as stateless
//! singletons.
//!
//! All five variants measure the minimum number of elementary operations
//! turning one sequence into the other; they differ only in which operations
//! are legal:
//!
//! | Metric | Substitution | Transposition |
//! |---|---|---|
//! | [`Hamming`] | only (equal length) | no |
//! | [`Lcs`] | no | no |
//! | [`Levenshtein`] | yes | no |
//! | [`Osa`] | yes | adjacent only |
//! | [`DamerauLevenshtein`] | yes | arbitrary distance |
//!
//! Every singleton is an immutable unit struct, `Send + Sync`, and allocates
//! all of its working state per call, so any number of threads can share one
//! without locking.

use crate::cancel::CancellationToken;
use crate::compare::Comparator;
use crate::damerau;
use crate::error::DistanceError;
use crate::range::{BoundedRange, RangeCheck};
use crate::restricted::RestrictedEngine;
use crate::DistanceMetric;

/// What an engine produced.
pub(crate) enum Resolution {
    /// The computation ran to completion with this distance.
    Exact(usize),
    /// Early exit: a monotonic lower bound on the distance that already
    /// exceeds the caller's upper bound. Returned as-is, never clamped, so
    /// it remains a valid out-of-range witness.
    OutOfRange(usize),
}

/// Validation and result finishing shared by every metric.
///
/// Runs the checks of the common calling contract, invokes the engine, and
/// fits the result to the caller's range. An exact result below the range is
/// clamped up to the lower bound; results inside or above the range pass
/// through unchanged (a completed distance above the upper bound is itself
/// the out-of-range witness).
pub(crate) fn run_metric<T, E>(
    a: &[T],
    b: &[T],
    range: BoundedRange,
    engine: E,
) -> Result<usize, DistanceError>
where
    E: FnOnce() -> Result<Resolution, DistanceError>,
{
    if range.is_empty() {
        return Err(DistanceError::EmptyRange(range));
    }
    // Same snapshot on both sides (pointer and length): distance 0 without
    // enumerating anything.
    if std::ptr::eq(a, b) {
        return Ok(0);
    }
    // A distance is never negative; a caller asking only for negative values
    // gets 0 back without computing.
    if range.intersect(BoundedRange::at_least(0)).is_empty() {
        return Ok(0);
    }
    match engine()? {
        Resolution::OutOfRange(witness) => Ok(witness),
        Resolution::Exact(distance) => match range.probe(distance as i64) {
            RangeCheck::BelowRange => Ok(range.clamp(distance as i64) as usize),
            _ => Ok(distance),
        },
    }
}

fn hamming_run<T, C: Comparator<T>>(
    a: &[T],
    b: &[T],
    range: &BoundedRange,
    comparator: &C,
    token: &CancellationToken,
) -> Result<Resolution, DistanceError> {
    let mut distance = 0usize;
    let shared = a.len().min(b.len());
    for i in 0..shared {
        token.bail_if_cancelled()?;
        if !comparator.eq(&a[i], &b[i]) {
            distance += 1;
            if range.probe(distance as i64) == RangeCheck::AboveRange {
                return Ok(Resolution::OutOfRange(distance));
            }
        }
    }
    // Detected lazily, once one operand runs out: mismatches already counted
    // in the shared prefix have no bearing on the failure.
    if a.len() != b.len() {
        return Err(DistanceError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(Resolution::Exact(distance))
}

/// Position-wise mismatch count between two equal-length sequences.
///
/// Fails with [`DistanceError::LengthMismatch`] when the operands differ in
/// length.
///
/// # Examples
///
/// ```
/// use seqdist::metrics::Hamming;
/// use seqdist::DistanceMetric;
///
/// assert_eq!(Hamming.distance_str("abra", "abrr").unwrap(), 1);
/// assert!(Hamming.distance_str("abra", "abr").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Hamming;

impl DistanceMetric for Hamming {
    fn distance_with<T, C: Comparator<T>>(
        &self,
        a: &[T],
        b: &[T],
        range: BoundedRange,
        comparator: &C,
        token: &CancellationToken,
    ) -> Result<usize, DistanceError> {
        run_metric(a, b, range, || hamming_run(a, b, &range, comparator, token))
    }
}

/// LCS distance: insertions and deletions only.
///
/// Equals `len(a) + len(b) - 2 * lcs_length(a, b)`, where `lcs_length` is
/// the length of the [longest common subsequence][1].
///
/// # Examples
///
/// ```
/// use seqdist::metrics::Lcs;
/// use seqdist::DistanceMetric;
///
/// assert_eq!(Lcs.distance_str("abra", "abr").unwrap(), 1);
/// ```
///
/// [1]: https://en.wikipedia.org/wiki/Longest_common_subsequence
#[derive(Clone, Copy, Debug, Default)]
pub struct Lcs;

impl DistanceMetric for Lcs {
    fn distance_with<T, C: Comparator<T>>(
        &self,
        a: &[T],
        b: &[T],
        range: BoundedRange,
        comparator: &C,
        token: &CancellationToken,
    ) -> Result<usize, DistanceError> {
        run_metric(a, b, range, || {
            RestrictedEngine::INDEL_ONLY.run(a, b, &range, comparator, token)
        })
    }
}

/// [Levenshtein distance][1]: insertions, deletions and substitutions.
///
/// The [distance metric itself][1] is calculated with the
/// [Wagner-Fischer][2] dynamic programming algorithm over a pair of rolling
/// rows.
///
/// # Examples
///
/// ```
/// use seqdist::metrics::Levenshtein;
/// use seqdist::DistanceMetric;
///
/// assert_eq!(Levenshtein.distance_str("kitten", "sitting").unwrap(), 3);
/// assert_eq!(Levenshtein.distance_str("abra", "a").unwrap(), 3);
/// ```
///
/// [1]: https://en.wikipedia.org/wiki/Levenshtein_distance
/// [2]: https://en.wikipedia.org/wiki/Wagner%E2%80%93Fischer_algorithm
#[derive(Clone, Copy, Debug, Default)]
pub struct Levenshtein;

impl DistanceMetric for Levenshtein {
    fn distance_with<T, C: Comparator<T>>(
        &self,
        a: &[T],
        b: &[T],
        range: BoundedRange,
        comparator: &C,
        token: &CancellationToken,
    ) -> Result<usize, DistanceError> {
        run_metric(a, b, range, || {
            RestrictedEngine::WITH_SUBSTITUTION.run(a, b, &range, comparator, token)
        })
    }
}

/// [Optimal string alignment][1] distance: Levenshtein plus transposition of
/// *adjacent* elements.
///
/// OSA is a documented approximation of [`DamerauLevenshtein`]: each element
/// participates in at most one transposition, so overlapping swaps can be
/// counted higher than the true Damerau-Levenshtein distance
/// (`Osa("ca", "abc") == 3` against `DamerauLevenshtein("ca", "abc") == 2`).
///
/// # Examples
///
/// ```
/// use seqdist::metrics::Osa;
/// use seqdist::DistanceMetric;
///
/// assert_eq!(Osa.distance_str("smtih", "smith").unwrap(), 1);
/// assert_eq!(Osa.distance_str("ca", "abc").unwrap(), 3);
/// ```
///
/// [1]: https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance#Optimal_string_alignment_distance
#[derive(Clone, Copy, Debug, Default)]
pub struct Osa;

impl DistanceMetric for Osa {
    fn distance_with<T, C: Comparator<T>>(
        &self,
        a: &[T],
        b: &[T],
        range: BoundedRange,
        comparator: &C,
        token: &CancellationToken,
    ) -> Result<usize, DistanceError> {
        run_metric(a, b, range, || {
            RestrictedEngine::WITH_TRANSPOSITION.run(a, b, &range, comparator, token)
        })
    }
}

/// True [Damerau-Levenshtein distance][1]: Levenshtein plus transposition of
/// two elements arbitrarily far apart, at unit cost plus the elements
/// skipped over.
///
/// Computed with the Lowrance-Wagner algorithm; its transposition term
/// reaches arbitrarily far back in the matrix, so this is the one variant
/// that keeps the full O(len(a) * len(b)) matrix.
///
/// # Examples
///
/// ```
/// use seqdist::metrics::DamerauLevenshtein;
/// use seqdist::DistanceMetric;
///
/// assert_eq!(DamerauLevenshtein.distance_str("ca", "abc").unwrap(), 2);
/// assert_eq!(DamerauLevenshtein.distance_str("smtih", "smith").unwrap(), 1);
/// ```
///
/// [1]: https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance
#[derive(Clone, Copy, Debug, Default)]
pub struct DamerauLevenshtein;

impl DistanceMetric for DamerauLevenshtein {
    fn distance_with<T, C: Comparator<T>>(
        &self,
        a: &[T],
        b: &[T],
        range: BoundedRange,
        comparator: &C,
        token: &CancellationToken,
    ) -> Result<usize, DistanceError> {
        run_metric(a, b, range, || damerau::run(a, b, &range, comparator, token))
    }
}
