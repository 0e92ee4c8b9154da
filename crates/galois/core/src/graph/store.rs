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

//! Arena-backed covering graph
//!
//! Vertices and edges live in two vectors and are addressed by index. Each
//! cover relation is a single undirected [`Edge`] record; every vertex keeps
//! the ids of its incident edges in insertion order, which is the order all
//! traversals observe. Removed edges leave a tombstone so that edge ids stay
//! stable for the lifetime of the graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a vertex in a [`CoverGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in insertion order
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Index of an edge in a [`CoverGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

/// Undirected link between two vertices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: String,
}

impl Edge {
    /// Endpoint the edge was created from
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Endpoint the edge was created towards
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Free-form weight slot
    pub fn weight(&self) -> &str {
        &self.weight
    }

    /// The endpoint that is not `from`
    pub fn opposite(&self, from: VertexId) -> VertexId {
        if self.source == from { self.target } else { self.source }
    }

    /// Whether the edge joins `a` and `b`, in either direction
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// A vertex: an optional label, a color tag and its incidence list
#[derive(Debug, Clone)]
pub struct Vertex<E> {
    label: Option<E>,
    color: u32,
    incident: Vec<EdgeId>,
}

impl<E> Vertex<E> {
    /// Label attached to the vertex, if any
    pub fn label(&self) -> Option<&E> {
        self.label.as_ref()
    }

    /// Color tag written when the vertex was created
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Number of incident edges
    pub fn degree(&self) -> usize {
        self.incident.len()
    }
}

/// Iterator over the labels of a graph's vertices in insertion order
///
/// Unlabeled vertices are skipped.
#[derive(Debug, Clone)]
pub struct Labels<'a, E> {
    inner: std::slice::Iter<'a, Vertex<E>>,
}

impl<'a, E> Iterator for Labels<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(|vertex| vertex.label.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// In-memory undirected graph with labeled vertices
#[derive(Debug, Clone)]
pub struct CoverGraph<E> {
    vertices: Vec<Vertex<E>>,
    edges: Vec<Option<Edge>>,
    live_edges: usize,
}

impl<E> Default for CoverGraph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> CoverGraph<E> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            live_edges: 0,
        }
    }

    /// Add a vertex and return its id
    pub fn add_vertex(&mut self, label: Option<E>, color: u32) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex { label, color, incident: Vec::new() });
        id
    }

    /// Look up a vertex
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<E>> {
        self.vertices.get(id.0)
    }

    /// Label of a vertex; `None` for unlabeled or unknown vertices
    pub fn label(&self, id: VertexId) -> Option<&E> {
        self.vertices.get(id.0).and_then(|vertex| vertex.label.as_ref())
    }

    /// Replace the label of a vertex, returning the previous one
    pub fn relabel(&mut self, id: VertexId, label: E) -> Option<E> {
        self.vertices.get_mut(id.0).and_then(|vertex| vertex.label.replace(label))
    }

    /// Link `source` and `target` with a new edge
    ///
    /// # Panics
    /// Panics if either endpoint does not belong to this graph.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: impl Into<String>) -> EdgeId {
        debug_assert_ne!(source, target, "self loops are not cover relations");

        let id = EdgeId(self.edges.len());
        self.edges.push(Some(Edge { source, target, weight: weight.into() }));
        self.vertices[source.0].incident.push(id);
        self.vertices[target.0].incident.push(id);
        self.live_edges += 1;
        id
    }

    /// Look up a live edge
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    /// First edge of `source` whose other endpoint is `target`
    pub fn find_edge(&self, source: VertexId, target: VertexId) -> Option<EdgeId> {
        self.incident_edges(source).find(|(_, edge)| edge.opposite(source) == target).map(|(id, _)| id)
    }

    /// Remove the first edge between `source` and `target`
    ///
    /// Returns `false` when the two vertices are not linked.
    pub fn remove_edge(&mut self, source: VertexId, target: VertexId) -> bool {
        let Some(id) = self.find_edge(source, target) else {
            return false;
        };

        self.edges[id.0] = None;
        self.vertices[source.0].incident.retain(|&edge| edge != id);
        self.vertices[target.0].incident.retain(|&edge| edge != id);
        self.live_edges -= 1;
        true
    }

    /// Incident edges of a vertex in insertion order
    pub fn incident_edges(&self, id: VertexId) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.vertices
            .get(id.0)
            .into_iter()
            .flat_map(|vertex| vertex.incident.iter())
            .filter_map(move |&edge| self.edge(edge).map(|record| (edge, record)))
    }

    /// Neighbors of a vertex in incidence order
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.incident_edges(id).map(move |(_, edge)| edge.opposite(id))
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<E>)> + '_ {
        self.vertices.iter().enumerate().map(|(index, vertex)| (VertexId(index), vertex))
    }

    /// Labels of all labeled vertices in insertion order
    pub fn labels(&self) -> Labels<'_, E> {
        Labels { inner: self.vertices.iter() }
    }

    /// All live edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges.iter().enumerate().filter_map(|(index, edge)| edge.as_ref().map(|edge| (EdgeId(index), edge)))
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live edges
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }
}
