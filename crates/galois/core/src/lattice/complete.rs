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

//! Public facade of the incremental lattice

use galois_common::{LatticeError, LatticeResult, PartiallyOrdered};
use tracing::{error, instrument, trace, warn};

use crate::config::LatticeConfig;
use crate::graph::{CoverGraph, Labels, VertexId};

/// Iterator over the labels stored in a lattice, in insertion order
pub type Iter<'a, E> = Labels<'a, E>;

/// A complete lattice kept as the covering graph of its closed elements
///
/// The lattice starts with a single unlabeled sentinel vertex that acts as the
/// formal top of the order: it dominates every element. Its reported label,
/// [`top`](Self::top), is the join of every element inserted so far. Each call
/// to [`insert`](Self::insert) materializes the closed elements the new
/// element forces into existence (its meets with the elements already
/// present) and rewires the cover edges around them.
#[derive(Debug, Clone)]
pub struct CompleteLattice<E> {
    pub(super) graph: CoverGraph<E>,
    pub(super) top: VertexId,
    pub(super) bottom: VertexId,
    pub(super) supremum_label: Option<E>,
    pub(super) config: LatticeConfig,
}

impl<E: PartiallyOrdered> Default for CompleteLattice<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PartiallyOrdered> CompleteLattice<E> {
    /// Create an empty lattice with the default configuration
    pub fn new() -> Self {
        Self::with_config(LatticeConfig::default())
    }

    /// Create an empty lattice
    pub fn with_config(config: LatticeConfig) -> Self {
        let mut graph = CoverGraph::new();
        let top = graph.add_vertex(None, config.color);
        Self {
            graph,
            top,
            bottom: top,
            supremum_label: None,
            config,
        }
    }

    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Read-only view of the covering graph
    pub fn graph(&self) -> &CoverGraph<E> {
        &self.graph
    }

    /// Insert an element and return the vertex carrying it
    ///
    /// Inserting an element that is already present leaves the structure
    /// untouched (apart from folding its extent, for concept elements).
    ///
    /// # Errors
    /// - `InvalidArgument` if the element's measure is negative or not finite
    /// - `InvariantViolation` if invariant auditing is enabled and the element
    ///   type broke the lattice algebra; the lattice is restored to its state
    ///   before the call
    #[instrument(level = "debug", skip_all, fields(size = self.graph.vertex_count()))]
    pub fn insert(&mut self, element: E) -> LatticeResult<VertexId> {
        Self::validate(&element)?;
        let checkpoint = self.config.verify_invariants.then(|| (self.graph.clone(), self.supremum_label.clone(), self.bottom));

        let vertex = self.add_intent(element.clone(), self.top);
        if E::CARRIES_EXTENT {
            self.fold_extent(vertex, &element);
        }
        self.raise_top(&element);
        self.bottom = self.descend(self.bottom);

        trace!(vertex = %vertex, size = self.size(), order = self.order(), "element inserted");

        if let Some((graph, supremum_label, bottom)) = checkpoint {
            if let Err(err) = self.verify() {
                error!(%err, "lattice invariants violated after insertion, rolling back");
                self.graph = graph;
                self.supremum_label = supremum_label;
                self.bottom = bottom;
                return Err(err);
            }
        }
        Ok(vertex)
    }

    /// Insert elements in order, stopping at the first failure
    pub fn insert_all<I>(&mut self, elements: I) -> LatticeResult<()>
    where
        I: IntoIterator<Item = E>,
    {
        for element in elements {
            self.insert(element)?;
        }
        Ok(())
    }

    /// Closure of `element`: the least present label dominating it
    pub fn find(&self, element: &E) -> Option<&E> {
        let top = self.top()?;
        self.meet(element, top)
    }

    /// Whether `element` is one of the lattice's closed elements
    pub fn contains(&self, element: &E) -> bool {
        self.find(element) == Some(element)
    }

    /// Whether every element of `elements` is present
    pub fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        elements.into_iter().all(|element| self.contains(element))
    }

    /// Vertex carrying `element`, if the element is present
    ///
    /// The top sentinel carries the running join reported by [`top`](Self::top).
    pub fn vertex_of(&self, element: &E) -> Option<VertexId> {
        let found = self.supremum(element, self.top);
        let present = if found == self.top {
            self.supremum_label.as_ref().is_some_and(|top| top.is_equivalent(element))
        } else {
            self.carries(found, element)
        };
        present.then_some(found)
    }

    /// Whether `left` covers `right`: both are present, `right < left`, and
    /// no present element lies strictly between them
    pub fn covers(&self, left: &E, right: &E) -> bool {
        let Some(found) = self.vertex_of(left) else {
            return false;
        };
        right.is_less_than(left) && self.graph.neighbors(found).any(|neighbor| self.graph.label(neighbor) == Some(right))
    }

    /// Greatest present element below both arguments
    pub fn meet(&self, left: &E, right: &E) -> Option<&E> {
        self.resolve(self.supremum(&left.meet(right), self.top))
    }

    /// Least present element above both arguments
    pub fn join(&self, left: &E, right: &E) -> Option<&E> {
        self.resolve(self.supremum(&left.join(right), self.top))
    }

    /// How much of `right` is explained by `left`:
    /// `measure(join(left, right)) / measure(meet(right, top()))`
    ///
    /// # Errors
    /// - `EmptyLattice` if nothing has been inserted
    /// - `DomainError` if the denominator measures zero
    pub fn measure(&self, left: &E, right: &E) -> LatticeResult<f64> {
        let top = self.top().ok_or(LatticeError::EmptyLattice)?;
        let numerator = self.join(left, right).ok_or(LatticeError::EmptyLattice)?.measure();
        let denominator = self.meet(right, top).ok_or(LatticeError::EmptyLattice)?.measure();
        Self::ratio(numerator, denominator)
    }

    /// Variant of [`measure`](Self::measure) dividing by the measure of
    /// `meet(left, right)` instead
    pub fn measure_by_meet(&self, left: &E, right: &E) -> LatticeResult<f64> {
        let numerator = self.join(left, right).ok_or(LatticeError::EmptyLattice)?.measure();
        let denominator = self.meet(left, right).ok_or(LatticeError::EmptyLattice)?.measure();
        Self::ratio(numerator, denominator)
    }

    /// Join of every inserted element; `None` while empty
    pub fn top(&self) -> Option<&E> {
        self.supremum_label.as_ref()
    }

    /// Least present element; `None` while empty
    pub fn bottom(&self) -> Option<&E> {
        self.resolve(self.bottom)
    }

    /// Number of vertices, the sentinel included
    pub fn size(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Number of cover relations
    pub fn order(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.top == self.bottom && self.size() == 1
    }

    /// Labels of all stored elements in insertion order
    ///
    /// The top sentinel has no stored label and is not visited. Its reported
    /// value is [`top`](Self::top), which is present in the sense of
    /// [`contains`](Self::contains) but is only yielded here when some
    /// inserted element already equals it.
    pub fn iter(&self) -> Iter<'_, E> {
        self.graph.labels()
    }

    pub fn to_vec(&self) -> Vec<E> {
        self.iter().cloned().collect()
    }

    /// Label reported for a vertex; the sentinel reports the running join
    pub(super) fn resolve(&self, vertex: VertexId) -> Option<&E> {
        if vertex == self.top { self.supremum_label.as_ref() } else { self.graph.label(vertex) }
    }

    /// `label(upper) ≥ label(lower)`, with the sentinel above everything
    pub(super) fn vertex_ge(&self, upper: VertexId, lower: VertexId) -> bool {
        if upper == self.top {
            return true;
        }
        if lower == self.top {
            return false;
        }
        match (self.graph.label(upper), self.graph.label(lower)) {
            (Some(upper), Some(lower)) => upper.is_greater_or_equal(lower),
            _ => false,
        }
    }

    /// `label(vertex) ≥ element`
    pub(super) fn dominates(&self, vertex: VertexId, element: &E) -> bool {
        vertex == self.top || self.graph.label(vertex).is_some_and(|label| label.is_greater_or_equal(element))
    }

    /// `element ≥ label(vertex)`
    pub(super) fn dominated_by(&self, element: &E, vertex: VertexId) -> bool {
        vertex != self.top && self.graph.label(vertex).is_some_and(|label| element.is_greater_or_equal(label))
    }

    /// Whether the vertex's label is equivalent to `element`
    pub(super) fn carries(&self, vertex: VertexId, element: &E) -> bool {
        self.dominates(vertex, element) && self.dominated_by(element, vertex)
    }

    fn validate(element: &E) -> LatticeResult<()> {
        let measure = element.measure();
        if measure.is_finite() && measure >= 0.0 {
            return Ok(());
        }
        warn!(?element, measure, "rejecting element with invalid measure");
        Err(LatticeError::InvalidArgument(format!("element {element:?} has measure {measure}, expected a finite non-negative value")))
    }

    /// Fold `element` into the running join reported by the sentinel
    fn raise_top(&mut self, element: &E) {
        let raised = match self.supremum_label.take() {
            None => element.clone(),
            Some(current) => {
                let mut joined = current.join(element);
                if element.is_equivalent(&joined) {
                    joined = joined.absorb(element).unwrap_or(joined);
                }
                if current.is_equivalent(&joined) {
                    joined = joined.absorb(&current).unwrap_or(joined);
                }
                joined
            }
        };
        self.supremum_label = Some(raised);
    }

    fn ratio(numerator: f64, denominator: f64) -> LatticeResult<f64> {
        if denominator == 0.0 {
            return Err(LatticeError::DomainError(format!("cannot divide measure {numerator} by a zero measure")));
        }
        Ok(numerator / denominator)
    }
}

impl<'a, E: PartiallyOrdered> IntoIterator for &'a CompleteLattice<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
