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

//! Closed intervals under intersection and hull

use std::fmt::{self, Debug, Display};
use galois_common::{LatticeError, LatticeResult, PartiallyOrdered};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A closed interval `[lower, upper]`, or the empty interval
///
/// Intervals are ordered by containment: the meet of two intervals is their
/// intersection and the join is the smallest interval covering both. The
/// measure is the length `upper - lower`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval<T> {
    Empty,
    Closed { lower: T, upper: T },
}

impl<T: Ord + Copy + Debug> Interval<T> {
    /// Create `[lower, upper]`
    ///
    /// # Errors
    /// `InvalidArgument` if `lower > upper`
    pub fn closed(lower: T, upper: T) -> LatticeResult<Self> {
        if lower > upper {
            return Err(LatticeError::InvalidArgument(format!("interval lower bound {lower:?} exceeds upper bound {upper:?}")));
        }
        Ok(Self::Closed { lower, upper })
    }

    /// The degenerate interval `[value, value]`
    pub fn point(value: T) -> Self {
        Self::Closed { lower: value, upper: value }
    }

    pub fn empty() -> Self {
        Self::Empty
    }

    pub fn lower(&self) -> Option<T> {
        match self {
            Self::Empty => None,
            Self::Closed { lower, .. } => Some(*lower),
        }
    }

    pub fn upper(&self) -> Option<T> {
        match self {
            Self::Empty => None,
            Self::Closed { upper, .. } => Some(*upper),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether `value` lies inside the interval
    pub fn contains_point(&self, value: T) -> bool {
        match self {
            Self::Empty => false,
            Self::Closed { lower, upper } => *lower <= value && value <= *upper,
        }
    }
}

impl<T> PartiallyOrdered for Interval<T>
where
    T: Ord + Copy + Debug + ToPrimitive,
{
    fn meet(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Closed { lower: l1, upper: u1 }, Self::Closed { lower: l2, upper: u2 }) => {
                let lower = *l1.max(l2);
                let upper = *u1.min(u2);
                if lower <= upper { Self::Closed { lower, upper } } else { Self::Empty }
            }
            _ => Self::Empty,
        }
    }

    fn join(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Empty, interval) | (interval, Self::Empty) => *interval,
            (Self::Closed { lower: l1, upper: u1 }, Self::Closed { lower: l2, upper: u2 }) => Self::Closed {
                lower: *l1.min(l2),
                upper: *u1.max(u2),
            },
        }
    }

    fn is_greater_or_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (_, Self::Empty) => true,
            (Self::Empty, Self::Closed { .. }) => false,
            (Self::Closed { lower: l1, upper: u1 }, Self::Closed { lower: l2, upper: u2 }) => l1 <= l2 && u2 <= u1,
        }
    }

    fn measure(&self) -> f64 {
        match self {
            Self::Empty => 0.0,
            // computed in f64: the width of a valid interval may not fit in T
            Self::Closed { lower, upper } => match (upper.to_f64(), lower.to_f64()) {
                (Some(upper), Some(lower)) => upper - lower,
                _ => f64::NAN,
            },
        }
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "∅"),
            Self::Closed { lower, upper } => write!(f, "[{lower}, {upper}]"),
        }
    }
}
