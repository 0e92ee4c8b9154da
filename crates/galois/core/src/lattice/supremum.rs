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

//! Greedy descent through the covering graph

use galois_common::PartiallyOrdered;
use tracing::trace;

use super::complete::CompleteLattice;
use crate::graph::VertexId;

impl<E: PartiallyOrdered> CompleteLattice<E> {
    /// Least vertex below `generator` whose label dominates `proposed`
    ///
    /// Walks down from `generator`, always taking the first lower neighbor (in
    /// incidence order) that still dominates `proposed`. Because the present
    /// labels are closed under meet, the dominators of `proposed` have a unique
    /// minimum and any such walk ends on it.
    pub(crate) fn supremum(&self, proposed: &E, generator: VertexId) -> VertexId {
        let mut current = generator;
        loop {
            let here = current;
            let next = self.graph.neighbors(here).find(|&target| !self.vertex_ge(target, here) && self.dominates(target, proposed));
            match next {
                Some(target) => {
                    trace!(from = %here, to = %target, "supremum step");
                    current = target;
                }
                None => return current,
            }
        }
    }

    /// Neighbors strictly below `vertex`
    pub(crate) fn lower_neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.neighbors(vertex).filter(move |&neighbor| !self.vertex_ge(neighbor, vertex))
    }

    /// Follow lower neighbors from `from` until reaching a minimal vertex
    pub(crate) fn descend(&self, from: VertexId) -> VertexId {
        let mut current = from;
        loop {
            let next = self.lower_neighbors(current).next();
            match next {
                Some(lower) => current = lower,
                None => return current,
            }
        }
    }
}
