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

//! Structural audit of the covering graph
//!
//! [`CompleteLattice::verify`] recomputes every invariant from the labels
//! alone, so it is quadratic to cubic in the number of vertices. It runs after
//! each insertion when `LatticeConfig::verify_invariants` is set (the default
//! in debug builds).

use galois_common::{LatticeError, LatticeResult, PartiallyOrdered};

use super::complete::CompleteLattice;
use crate::graph::VertexId;

impl<E: PartiallyOrdered> CompleteLattice<E> {
    /// Check the structural invariants of the lattice
    ///
    /// - labels are pairwise distinct
    /// - every edge joins comparable labels and `order` counts the live edges
    /// - the edges are exactly the cover relations of the labels
    /// - `top` has nothing above it and `bottom` is below everything
    /// - the labels are closed under meet
    pub fn verify(&self) -> LatticeResult<()> {
        let labeled: Vec<VertexId> = self.graph.vertices().map(|(id, _)| id).filter(|&id| id != self.top).collect();

        self.verify_distinct_labels(&labeled)?;
        self.verify_edges()?;
        self.verify_covers()?;
        self.verify_bounds()?;
        self.verify_meet_closure(&labeled)
    }

    fn verify_distinct_labels(&self, labeled: &[VertexId]) -> LatticeResult<()> {
        for (i, &a) in labeled.iter().enumerate() {
            for &b in &labeled[i + 1..] {
                if self.vertex_ge(a, b) && self.vertex_ge(b, a) {
                    return Err(LatticeError::invariant("distinct-labels", format!("{a} and {b} carry equivalent labels {:?}", self.graph.label(a))));
                }
            }
        }
        Ok(())
    }

    fn verify_edges(&self) -> LatticeResult<()> {
        let mut live = 0;
        for (_, edge) in self.graph.edges() {
            live += 1;
            let (source, target) = (edge.source(), edge.target());
            if !self.vertex_ge(source, target) && !self.vertex_ge(target, source) {
                return Err(LatticeError::invariant(
                    "comparable-edges",
                    format!("{source} ({:?}) and {target} ({:?}) are incomparable", self.graph.label(source), self.graph.label(target)),
                ));
            }
        }
        if live != self.order() {
            return Err(LatticeError::invariant("order-count", format!("order is {} but {live} edges are live", self.order())));
        }
        Ok(())
    }

    fn verify_covers(&self) -> LatticeResult<()> {
        let all: Vec<VertexId> = self.graph.vertices().map(|(id, _)| id).collect();

        for &vertex in &all {
            let above: Vec<VertexId> = all.iter().copied().filter(|&other| other != vertex && self.vertex_ge(other, vertex)).collect();
            let mut expected: Vec<VertexId> = above
                .iter()
                .copied()
                .filter(|&candidate| !above.iter().any(|&between| between != candidate && self.vertex_ge(candidate, between)))
                .collect();
            let mut actual: Vec<VertexId> = self.graph.neighbors(vertex).filter(|&neighbor| self.vertex_ge(neighbor, vertex)).collect();

            expected.sort();
            actual.sort();
            if expected != actual {
                return Err(LatticeError::invariant("cover-relation", format!("{vertex} is covered by {expected:?} but linked upwards to {actual:?}")));
            }
        }
        Ok(())
    }

    fn verify_bounds(&self) -> LatticeResult<()> {
        if let Some(above) = self.graph.neighbors(self.top).find(|&neighbor| !self.vertex_ge(self.top, neighbor)) {
            return Err(LatticeError::invariant("top", format!("{above} lies above the top sentinel")));
        }
        if let Some((below, _)) = self.graph.vertices().find(|&(id, _)| !self.vertex_ge(id, self.bottom)) {
            return Err(LatticeError::invariant("bottom", format!("{below} does not dominate bottom {}", self.bottom)));
        }
        Ok(())
    }

    fn verify_meet_closure(&self, labeled: &[VertexId]) -> LatticeResult<()> {
        for (i, &a) in labeled.iter().enumerate() {
            for &b in &labeled[i + 1..] {
                let (Some(left), Some(right)) = (self.graph.label(a), self.graph.label(b)) else {
                    continue;
                };
                let meet = left.meet(right);
                if !self.carries(self.supremum(&meet, self.top), &meet) {
                    return Err(LatticeError::invariant("meet-closure", format!("meet {meet:?} of {a} and {b} is not present")));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatticeConfig;
    use crate::elements::BitsetConcept;
    use galois_common::Ordered;

    fn unchecked<E: PartiallyOrdered>() -> CompleteLattice<E> {
        CompleteLattice::with_config(LatticeConfig::default().with_verification(false))
    }

    #[test]
    fn test_verify_accepts_built_lattice() {
        let mut lattice = unchecked();
        for (object, attributes) in [(0u32, vec![1u32, 2]), (1, vec![2, 3]), (2, vec![3, 4]), (3, vec![1, 4])] {
            lattice.insert(BitsetConcept::object(object, attributes)).unwrap();
        }
        assert!(lattice.verify().is_ok());
    }

    #[test]
    fn test_verify_detects_shortcut_edge() {
        let mut lattice = unchecked();
        let low = lattice.insert(Ordered(1u32)).unwrap();
        lattice.insert(Ordered(2u32)).unwrap();
        lattice.graph.add_edge(lattice.top, low, "");

        let err = lattice.verify().unwrap_err();
        assert!(matches!(err, LatticeError::InvariantViolation { invariant: "cover-relation", .. }));
    }

    #[test]
    fn test_verify_detects_missing_cover() {
        let mut lattice = unchecked();
        let low = lattice.insert(Ordered(1u32)).unwrap();
        let high = lattice.insert(Ordered(2u32)).unwrap();
        lattice.graph.remove_edge(low, high);

        assert!(lattice.verify().is_err());
    }

    #[test]
    fn test_verify_detects_duplicate_labels() {
        let mut lattice = unchecked();
        let low = lattice.insert(Ordered(1u32)).unwrap();
        let twin = lattice.graph.add_vertex(Some(Ordered(1u32)), 0);
        lattice.graph.add_edge(low, twin, "");

        let err = lattice.verify().unwrap_err();
        assert!(matches!(err, LatticeError::InvariantViolation { invariant: "distinct-labels", .. }));
    }

    #[test]
    fn test_verify_detects_stale_bottom() {
        let mut lattice = unchecked();
        lattice.insert(Ordered(4u32)).unwrap();
        lattice.insert(Ordered(2u32)).unwrap();
        lattice.bottom = lattice.top;

        let err = lattice.verify().unwrap_err();
        assert!(matches!(err, LatticeError::InvariantViolation { invariant: "bottom", .. }));
    }
}
