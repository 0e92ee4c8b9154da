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

//! Incremental complete lattice
//!
//! The lattice is stored as the covering graph of its closed elements. New
//! elements enter through [`CompleteLattice::insert`], which runs the
//! AddIntent procedure; all queries start at the top sentinel and descend with
//! the supremum walk.
//!
//! # Module Structure
//!
//! - `complete`: the [`CompleteLattice`] facade and its queries
//! - `supremum`: greedy descent to the least dominating vertex
//! - `add_intent`: incremental insertion and extent folding
//! - `dot`: textual `digraph` dump
//! - `invariants`: structural audit
//!
//! # Usage
//!
//! ```rust
//! use galois_core::elements::BitsetConcept;
//! use galois_core::lattice::CompleteLattice;
//!
//! let mut lattice = CompleteLattice::new();
//! lattice.insert(BitsetConcept::object(0, [1, 2])).unwrap();
//! lattice.insert(BitsetConcept::object(1, [2, 3])).unwrap();
//!
//! // The shared attribute became a concept of its own
//! assert!(lattice.contains(&BitsetConcept::from_intent([2])));
//! assert_eq!(lattice.size(), 4);
//! ```

mod add_intent;
pub mod complete;
mod dot;
mod invariants;
mod supremum;

pub use complete::{CompleteLattice, Iter};
