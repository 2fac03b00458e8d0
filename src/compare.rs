//! Pluggable element equality.
//!
//! Every comparison a metric makes during one call goes through a single
//! [`Comparator`], so a caller can redefine what "equal" means without
//! touching the element type. The comparator must be a valid equivalence
//! relation, and its `hash` must agree with its `eq` (equal elements hash
//! identically), since the Damerau-Levenshtein engine keys a map with it.

use std::hash::{Hash, Hasher};

/// An equivalence relation over elements of type `T`, with a hash that is
/// consistent with it.
pub trait Comparator<T> {
    /// Whether `a` and `b` are equivalent.
    fn eq(&self, a: &T, b: &T) -> bool;

    /// Feeds `value` into `state`. Elements equal under [`eq`](Self::eq)
    /// must produce identical hashes.
    fn hash<H: Hasher>(&self, value: &T, state: &mut H);
}

/// The element type's own equality, the default for every metric.
///
/// # Examples
///
/// ```
/// use seqdist::{Comparator, Natural};
///
/// assert!(Natural.eq(&'a', &'a'));
/// assert!(!Natural.eq(&'a', &'A'));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Eq + Hash> Comparator<T> for Natural {
    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        value.hash(state);
    }
}

/// Equates `char` or `u8` elements up to ASCII case.
///
/// # Examples
///
/// ```
/// use seqdist::{AsciiCaseFold, Comparator};
///
/// assert!(AsciiCaseFold.eq(&'a', &'A'));
/// assert!(!AsciiCaseFold.eq(&'a', &'b'));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiCaseFold;

impl Comparator<char> for AsciiCaseFold {
    fn eq(&self, a: &char, b: &char) -> bool {
        a.eq_ignore_ascii_case(b)
    }

    fn hash<H: Hasher>(&self, value: &char, state: &mut H) {
        value.to_ascii_lowercase().hash(state);
    }
}

impl Comparator<u8> for AsciiCaseFold {
    fn eq(&self, a: &u8, b: &u8) -> bool {
        a.eq_ignore_ascii_case(b)
    }

    fn hash<H: Hasher>(&self, value: &u8, state: &mut H) {
        value.to_ascii_lowercase().hash(state);
    }
}
