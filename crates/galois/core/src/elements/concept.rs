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

//! Formal concepts over bitmap-encoded objects and attributes

use std::fmt;

use galois_common::{LatticeResult, PartiallyOrdered};
use roaring::RoaringBitmap;

use crate::config::LatticeConfig;
use crate::lattice::CompleteLattice;

/// A formal concept: the objects sharing a set of attributes
///
/// Concepts are ordered by their intents only. A concept with more attributes
/// is greater; the extent is a payload that the lattice keeps exact as
/// objects are inserted. Equality follows the order and ignores the extent.
#[derive(Debug, Clone, Default)]
pub struct BitsetConcept {
    extent: RoaringBitmap,
    intent: RoaringBitmap,
}

impl BitsetConcept {
    pub fn new(extent: RoaringBitmap, intent: RoaringBitmap) -> Self {
        Self { extent, intent }
    }

    /// The row of a formal context: one object and its attributes
    pub fn object(object: u32, attributes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            extent: std::iter::once(object).collect(),
            intent: attributes.into_iter().collect(),
        }
    }

    /// A concept known only by its attributes
    pub fn from_intent(attributes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            extent: RoaringBitmap::new(),
            intent: attributes.into_iter().collect(),
        }
    }

    pub fn extent(&self) -> &RoaringBitmap {
        &self.extent
    }

    pub fn intent(&self) -> &RoaringBitmap {
        &self.intent
    }
}

impl PartialEq for BitsetConcept {
    fn eq(&self, other: &Self) -> bool {
        self.intent == other.intent
    }
}

impl Eq for BitsetConcept {}

impl PartiallyOrdered for BitsetConcept {
    const CARRIES_EXTENT: bool = true;

    fn meet(&self, other: &Self) -> Self {
        Self {
            extent: &self.extent | &other.extent,
            intent: &self.intent & &other.intent,
        }
    }

    fn join(&self, other: &Self) -> Self {
        Self {
            extent: &self.extent & &other.extent,
            intent: &self.intent | &other.intent,
        }
    }

    fn is_greater_or_equal(&self, other: &Self) -> bool {
        self.intent.is_superset(&other.intent)
    }

    fn measure(&self) -> f64 {
        self.intent.len() as f64
    }

    fn absorb(&self, source: &Self) -> Option<Self> {
        if source.extent.is_subset(&self.extent) {
            return None;
        }
        Some(Self {
            extent: &self.extent | &source.extent,
            intent: self.intent.clone(),
        })
    }
}

impl fmt::Display for BitsetConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_set(f, &self.extent)?;
        write!(f, ", ")?;
        write_set(f, &self.intent)?;
        write!(f, ")")
    }
}

fn write_set(f: &mut fmt::Formatter<'_>, set: &RoaringBitmap) -> fmt::Result {
    write!(f, "{{")?;
    for (i, member) in set.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{member}")?;
    }
    write!(f, "}}")
}

/// Build the concept lattice of a formal context given as object rows
pub fn concept_lattice<I, A>(rows: I, config: LatticeConfig) -> LatticeResult<CompleteLattice<BitsetConcept>>
where
    I: IntoIterator<Item = (u32, A)>,
    A: IntoIterator<Item = u32>,
{
    let mut lattice = CompleteLattice::with_config(config);
    lattice.insert_all(rows.into_iter().map(|(object, attributes)| BitsetConcept::object(object, attributes)))?;
    Ok(lattice)
}
