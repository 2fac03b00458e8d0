//! Edit distances between ordered sequences of comparer-equatable elements.
//!
//! Five classical variants are published as stateless singletons in
//! [`metrics`], all sharing one calling contract ([`DistanceMetric`]): an
//! optional [`BoundedRange`] on the desired answer that lets the dynamic
//! programming loop stop early, a pluggable [`Comparator`] used for every
//! element comparison in the call, and a cooperative [`CancellationToken`]
//! polled once per matrix column.
//!
//! # Examples
//!
//! ```
//! use seqdist::metrics::{DamerauLevenshtein, Levenshtein};
//! use seqdist::{BoundedRange, DistanceMetric};
//!
//! assert_eq!(Levenshtein.distance_str("abra", "abrr").unwrap(), 1);
//! assert_eq!(DamerauLevenshtein.distance_str("smtih", "smith").unwrap(), 1);
//!
//! // An upper bound lets a long computation stop as soon as the answer is
//! // provably above it; whatever comes back is then > 2.
//! let d = Levenshtein
//!     .distance_within("kitten".as_bytes(), "sitting".as_bytes(), BoundedRange::at_most(2))
//!     .unwrap();
//! assert!(d > 2);
//! ```

mod cancel;
mod compare;
mod damerau;
mod error;
mod range;
mod restricted;

pub mod metrics;

pub use cancel::CancellationToken;
pub use compare::{AsciiCaseFold, Comparator, Natural};
pub use error::DistanceError;
pub use range::{BoundedRange, RangeCheck};

use std::hash::Hash;

/// The calling contract shared by every distance metric.
///
/// [`distance_with`](Self::distance_with) is the full entry point; the other
/// methods are conveniences that default the range to unbounded, the
/// comparator to [`Natural`] and the token to [`CancellationToken::none`].
///
/// The contract, for every implementor:
///
/// - an empty `range` (lower bound above upper bound) fails with
///   [`DistanceError::EmptyRange`] before any work;
/// - when `a` and `b` are the very same slice, the result is `0` without a
///   single element comparison;
/// - a completed result below the range is clamped up to the lower bound; a
///   result above the range is returned unclamped, as an out-of-range
///   witness;
/// - the `comparator` is used for every comparison within the call.
pub trait DistanceMetric {
    /// Computes the distance between `a` and `b` under the given range,
    /// comparator and cancellation token.
    fn distance_with<T, C: Comparator<T>>(
        &self,
        a: &[T],
        b: &[T],
        range: BoundedRange,
        comparator: &C,
        token: &CancellationToken,
    ) -> Result<usize, DistanceError>;

    /// Computes the distance between `a` and `b` with all options defaulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqdist::metrics::Levenshtein;
    /// use seqdist::DistanceMetric;
    ///
    /// assert_eq!(Levenshtein.distance(&[1, 2, 3], &[1, 3]).unwrap(), 1);
    /// ```
    fn distance<T: Eq + Hash>(&self, a: &[T], b: &[T]) -> Result<usize, DistanceError> {
        self.distance_with(
            a,
            b,
            BoundedRange::unbounded(),
            &Natural,
            &CancellationToken::none(),
        )
    }

    /// Computes the distance between `a` and `b`, allowing early exit once
    /// the answer is provably outside `range`.
    fn distance_within<T: Eq + Hash>(
        &self,
        a: &[T],
        b: &[T],
        range: BoundedRange,
    ) -> Result<usize, DistanceError> {
        self.distance_with(a, b, range, &Natural, &CancellationToken::none())
    }

    /// Materializes two single-pass sources into indexable snapshots, each
    /// enumerated exactly once in order, then computes their distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqdist::metrics::Lcs;
    /// use seqdist::DistanceMetric;
    ///
    /// let d = Lcs.distance_iter(1..=4, [1, 2, 4]).unwrap();
    /// assert_eq!(d, 1);
    /// ```
    fn distance_iter<T, A, B>(&self, a: A, b: B) -> Result<usize, DistanceError>
    where
        T: Eq + Hash,
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        let a: Vec<T> = a.into_iter().collect();
        let b: Vec<T> = b.into_iter().collect();
        self.distance(&a, &b)
    }

    /// Computes the distance between the `char` sequences of two strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqdist::metrics::Levenshtein;
    /// use seqdist::DistanceMetric;
    ///
    /// assert_eq!(Levenshtein.distance_str("abra", "").unwrap(), 4);
    /// ```
    fn distance_str(&self, a: &str, b: &str) -> Result<usize, DistanceError> {
        self.distance_iter(a.chars(), b.chars())
    }
}
