//! Inclusive, possibly one-sided integer intervals.
//!
//! A [`BoundedRange`] describes where the caller wants the answer to land.
//! It is purely advisory: it never changes the true distance, only whether
//! the computation may stop early once the answer is provably outside it.

use std::fmt;

/// An inclusive integer interval, unbounded on either side when a bound is
/// absent.
///
/// Constructing an empty range (lower > upper) is allowed; metrics reject it
/// up front with [`DistanceError::EmptyRange`](crate::DistanceError::EmptyRange)
/// before doing any work.
///
/// # Examples
///
/// ```
/// use seqdist::BoundedRange;
///
/// let r = BoundedRange::between(1, 4);
/// assert!(!r.is_empty());
/// assert_eq!(r.clamp(7), 4);
/// assert_eq!(r.clamp(0), 1);
///
/// assert!(BoundedRange::between(4, 1).is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedRange {
    lower: Option<i64>,
    upper: Option<i64>,
}

/// Where a value sits relative to a [`BoundedRange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeCheck {
    /// Strictly below the lower bound.
    BelowRange,
    /// Inside the range (bounds inclusive).
    InRange,
    /// Strictly above the upper bound.
    AboveRange,
}

impl BoundedRange {
    /// The range containing every integer.
    pub const fn unbounded() -> BoundedRange {
        BoundedRange {
            lower: None,
            upper: None,
        }
    }

    /// The two-sided inclusive range `[lower, upper]`.
    pub const fn between(lower: i64, upper: i64) -> BoundedRange {
        BoundedRange {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// The one-sided range `[lower, +inf)`.
    pub const fn at_least(lower: i64) -> BoundedRange {
        BoundedRange {
            lower: Some(lower),
            upper: None,
        }
    }

    /// The one-sided range `(-inf, upper]`.
    pub const fn at_most(upper: i64) -> BoundedRange {
        BoundedRange {
            lower: None,
            upper: Some(upper),
        }
    }

    /// The lower bound, if any.
    pub fn lower(&self) -> Option<i64> {
        self.lower
    }

    /// The upper bound, if any.
    pub fn upper(&self) -> Option<i64> {
        self.upper
    }

    /// Whether the range contains no values at all.
    pub fn is_empty(&self) -> bool {
        match (self.lower, self.upper) {
            (Some(l), Some(u)) => l > u,
            _ => false,
        }
    }

    /// The intersection of two ranges. May be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqdist::BoundedRange;
    ///
    /// let r = BoundedRange::at_most(5).intersect(BoundedRange::at_least(0));
    /// assert_eq!(r, BoundedRange::between(0, 5));
    /// ```
    pub fn intersect(self, other: BoundedRange) -> BoundedRange {
        let lower = match (self.lower, other.lower) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (l, None) | (None, l) => l,
        };
        let upper = match (self.upper, other.upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (u, None) | (None, u) => u,
        };
        BoundedRange { lower, upper }
    }

    /// Saturates `value` into the range. The range must not be empty.
    pub fn clamp(&self, value: i64) -> i64 {
        debug_assert!(!self.is_empty());
        let value = match self.lower {
            Some(l) => value.max(l),
            None => value,
        };
        match self.upper {
            Some(u) => value.min(u),
            None => value,
        }
    }

    /// Locates `value` relative to the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqdist::{BoundedRange, RangeCheck};
    ///
    /// let r = BoundedRange::between(1, 4);
    /// assert_eq!(r.probe(0), RangeCheck::BelowRange);
    /// assert_eq!(r.probe(4), RangeCheck::InRange);
    /// assert_eq!(r.probe(5), RangeCheck::AboveRange);
    /// ```
    pub fn probe(&self, value: i64) -> RangeCheck {
        if let Some(l) = self.lower {
            if value < l {
                return RangeCheck::BelowRange;
            }
        }
        if let Some(u) = self.upper {
            if value > u {
                return RangeCheck::AboveRange;
            }
        }
        RangeCheck::InRange
    }
}

impl Default for BoundedRange {
    fn default() -> BoundedRange {
        BoundedRange::unbounded()
    }
}

impl fmt::Display for BoundedRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.lower {
            Some(l) => write!(f, "[{}, ", l)?,
            None => write!(f, "[-inf, ")?,
        }
        match self.upper {
            Some(u) => write!(f, "{}]", u),
            None => write!(f, "+inf]"),
        }
    }
}
