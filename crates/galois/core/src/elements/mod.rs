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

//! Element families shipped with the lattice
//!
//! - `concept`: formal concepts over bitmap extents and intents
//! - `interval`: closed intervals ordered by containment
//!
//! The total-order adapter [`Ordered`](galois_common::Ordered) lives in
//! `galois-common` next to the contract itself.

pub mod concept;
pub mod interval;

pub use concept::{BitsetConcept, concept_lattice};
pub use interval::Interval;
