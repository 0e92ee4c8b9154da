// Galois
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Partial order contract for lattice elements
//!
//! Every element handed to a lattice implements [`PartiallyOrdered`]. The
//! contract is small: two lattice operations, one order
//! primitive and a monotone measure. Everything else (strict order,
//! equivalence, comparability) is derived from `is_greater_or_equal`.
//!
//! Implementations must make `meet` and `join` associative, commutative and
//! idempotent, and mutually absorbing (`a.meet(&a.join(&b)) == a`).
//! Equality must agree with the order: `a == b` exactly when `a ≤ b` and
//! `b ≤ a`.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Element of a lattice under a partial order
pub trait PartiallyOrdered: Clone + PartialEq + Debug {
    /// Whether elements carry a payload (such as a concept extent) that the
    /// order ignores and that must be folded with [`absorb`](Self::absorb)
    const CARRIES_EXTENT: bool = false;

    /// Greatest lower bound of `self` and `other`
    fn meet(&self, other: &Self) -> Self;

    /// Least upper bound of `self` and `other`
    fn join(&self, other: &Self) -> Self;

    /// True iff `other ≤ self`
    fn is_greater_or_equal(&self, other: &Self) -> bool;

    /// Non-negative size, monotone in the order
    fn measure(&self) -> f64;

    /// Returns `self` with the payload of `source` folded in, or `None` when
    /// nothing would change. The order position of `self` is never altered.
    fn absorb(&self, _source: &Self) -> Option<Self> {
        None
    }

    /// True iff `self ≤ other`
    fn is_less_or_equal(&self, other: &Self) -> bool {
        other.is_greater_or_equal(self)
    }

    /// True iff `other < self`
    fn is_greater_than(&self, other: &Self) -> bool {
        self.is_greater_or_equal(other) && !other.is_greater_or_equal(self)
    }

    /// True iff `self < other`
    fn is_less_than(&self, other: &Self) -> bool {
        other.is_greater_than(self)
    }

    /// True iff `self ≤ other` and `other ≤ self`
    fn is_equivalent(&self, other: &Self) -> bool {
        self.is_greater_or_equal(other) && other.is_greater_or_equal(self)
    }

    /// True iff the two elements are ordered one way or the other
    fn is_comparable(&self, other: &Self) -> bool {
        self.is_greater_or_equal(other) || other.is_greater_or_equal(self)
    }
}

/// Adapter turning any totally ordered value into a lattice element
///
/// `meet` is the minimum and `join` the maximum. The measure is the value
/// itself converted to `f64`, so the adapter is meant for non-negative
/// magnitudes; values that do not convert measure as NaN and are rejected on
/// insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ordered<T>(pub T);

impl<T> Ordered<T> {
    /// Wrap a value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the wrapped value
    pub fn get(&self) -> &T {
        &self.0
    }

    /// Unwrap the value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Ordered<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> PartiallyOrdered for Ordered<T>
where
    T: Ord + Clone + Debug + ToPrimitive,
{
    fn meet(&self, other: &Self) -> Self {
        match self.0.cmp(&other.0) {
            Ordering::Greater => other.clone(),
            _ => self.clone(),
        }
    }

    fn join(&self, other: &Self) -> Self {
        match self.0.cmp(&other.0) {
            Ordering::Less => other.clone(),
            _ => self.clone(),
        }
    }

    fn is_greater_or_equal(&self, other: &Self) -> bool {
        self.0.cmp(&other.0) != Ordering::Less
    }

    fn measure(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: Display> Display for Ordered<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_meet_and_join() {
        let three = Ordered(3u32);
        let seven = Ordered(7u32);

        assert_eq!(three.meet(&seven), three);
        assert_eq!(seven.meet(&three), three);
        assert_eq!(three.join(&seven), seven);
        assert_eq!(seven.join(&three), seven);
        assert_eq!(three.meet(&three), three);
    }

    #[test]
    fn test_derived_predicates() {
        let low = Ordered(1i64);
        let high = Ordered(9i64);

        assert!(high.is_greater_or_equal(&low));
        assert!(high.is_greater_than(&low));
        assert!(low.is_less_than(&high));
        assert!(low.is_less_or_equal(&high));
        assert!(!low.is_greater_than(&low));
        assert!(low.is_equivalent(&Ordered(1)));
        assert!(low.is_comparable(&high));
    }

    #[test]
    fn test_absorption() {
        let a = Ordered(4u8);
        let b = Ordered(11u8);
        assert_eq!(a.meet(&a.join(&b)), a);
        assert_eq!(a.join(&a.meet(&b)), a);
    }

    #[test]
    fn test_measure_is_monotone() {
        let values: Vec<Ordered<u16>> = [0u16, 2, 5, 40].into_iter().map(Ordered).collect();
        for pair in values.windows(2) {
            assert!(pair[0].measure() <= pair[1].measure());
        }
        assert_eq!(Ordered(5u16).measure(), 5.0);
    }

    #[test]
    fn test_default_absorb_is_noop() {
        assert!(!<Ordered<u8> as PartiallyOrdered>::CARRIES_EXTENT);
        assert_eq!(Ordered(2u8).absorb(&Ordered(3u8)), None);
    }
}
