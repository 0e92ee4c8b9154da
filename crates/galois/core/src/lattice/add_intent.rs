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

//! Incremental insertion of closed elements
//!
//! This is the AddIntent procedure for building concept lattices one object at
//! a time. Inserting `proposed` below the vertex `g` that currently closes it
//! creates one new vertex for `proposed`, and recursively one vertex for every
//! meet of `proposed` with a lower neighbor of `g` that is not present yet.
//! The new vertex then takes over the cover edges those meets had towards
//! `g`.

use galois_common::PartiallyOrdered;
use tracing::{debug, trace};

use super::complete::CompleteLattice;
use crate::graph::VertexId;

impl<E: PartiallyOrdered> CompleteLattice<E> {
    /// Insert `proposed` searching downwards from `generator`; returns the
    /// vertex carrying it
    pub(crate) fn add_intent(&mut self, proposed: E, generator: VertexId) -> VertexId {
        let generator = self.supremum(&proposed, generator);
        if self.carries(generator, &proposed) {
            trace!(vertex = %generator, "element already present");
            return generator;
        }

        // Read pass: the recursion below only rewires edges under each target,
        // but the neighbor list is collected before anything changes.
        let lower: Vec<VertexId> = self.lower_neighbors(generator).collect();

        let mut parents: Vec<VertexId> = Vec::with_capacity(lower.len());
        for target in lower {
            let candidate = if self.dominated_by(&proposed, target) {
                target
            } else {
                let intersection = match self.graph.label(target) {
                    Some(label) => label.meet(&proposed),
                    None => proposed.clone(),
                };
                self.add_intent(intersection, target)
            };
            self.merge_parent(&mut parents, candidate);
        }

        let label = match self.graph.label(generator) {
            Some(closure) => proposed.absorb(closure).unwrap_or(proposed),
            None => proposed,
        };
        let child = self.graph.add_vertex(Some(label), self.config.color);
        self.graph.add_edge(generator, child, "");
        debug!(child = %child, generator = %generator, parents = parents.len(), "materialized concept");

        for parent in parents {
            if parent == generator {
                continue;
            }
            if self.graph.remove_edge(parent, generator) {
                trace!(parent = %parent, generator = %generator, "dropped cover now passing through new concept");
            }
            self.graph.add_edge(parent, child, "");
        }
        child
    }

    /// Keep `parents` an antichain of maximal candidates
    fn merge_parent(&self, parents: &mut Vec<VertexId>, candidate: VertexId) {
        if parents.iter().any(|&parent| self.vertex_ge(parent, candidate)) {
            return;
        }
        parents.retain(|&parent| !self.vertex_ge(candidate, parent));
        parents.push(candidate);
    }

    /// Fold the extent of `inserted` into `start` and every vertex below it
    pub(super) fn fold_extent(&mut self, start: VertexId, inserted: &E) {
        let mut visited = vec![false; self.graph.vertex_count()];
        let mut pending = vec![start];

        while let Some(vertex) = pending.pop() {
            if std::mem::replace(&mut visited[vertex.index()], true) {
                continue;
            }
            let updated = self.graph.label(vertex).and_then(|label| label.absorb(inserted));
            if let Some(updated) = updated {
                self.graph.relabel(vertex, updated);
            }
            pending.extend(self.lower_neighbors(vertex));
        }
    }
}
