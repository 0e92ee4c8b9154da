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

//! Galois: incremental construction of complete lattices
//!
//! Elements implementing [`PartiallyOrdered`] are inserted one at a time into
//! a [`CompleteLattice`], which keeps the covering graph of every closed
//! element (each inserted element and all of their meets) and answers order
//! and lattice queries against it.

pub mod config;
pub mod elements;
pub mod graph;
pub mod lattice;

pub use config::LatticeConfig;
pub use elements::{BitsetConcept, Interval};
pub use galois_common::{LatticeError, LatticeResult, Ordered, PartiallyOrdered};
pub use lattice::CompleteLattice;
