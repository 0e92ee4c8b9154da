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

//! DOT-like textual dump of the covering graph

use std::fmt::{self, Display};

use galois_common::PartiallyOrdered;

use super::complete::CompleteLattice;
use crate::graph::VertexId;

/// How the unlabeled top sentinel is rendered
const TOP_GLYPH: &str = "⊤";

impl<E: PartiallyOrdered + Display> CompleteLattice<E> {
    /// Render the lattice as a `digraph`
    ///
    /// Every cover relation is printed once, from the smaller label to the
    /// larger one.
    pub fn to_dot(&self) -> String {
        self.to_string()
    }

    fn render(&self, vertex: VertexId) -> String {
        match self.graph.label(vertex) {
            Some(label) => escape(&label.to_string()),
            None => TOP_GLYPH.to_string(),
        }
    }

    fn same_label(&self, a: VertexId, b: VertexId) -> bool {
        matches!((self.graph.label(a), self.graph.label(b)), (Some(a), Some(b)) if a == b)
    }
}

impl<E: PartiallyOrdered + Display> Display for CompleteLattice<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        for (source, _) in self.graph.vertices() {
            for (_, edge) in self.graph.incident_edges(source) {
                let target = edge.opposite(source);
                if self.same_label(source, target) || self.vertex_ge(source, target) {
                    continue;
                }
                writeln!(f, "\"{}\" -> \"{}\"[label=\"{}\"]", self.render(source), self.render(target), escape(edge.weight()))?;
            }
        }
        f.write_str("}")
    }
}

/// Escape backslashes and double quotes for a quoted DOT identifier
fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use galois_common::Ordered;

    #[test]
    fn test_empty_dump() {
        let lattice: CompleteLattice<Ordered<u32>> = CompleteLattice::new();
        assert_eq!(lattice.to_dot(), "digraph {\n}");
    }

    #[test]
    fn test_chain_dump() {
        let mut lattice = CompleteLattice::new();
        lattice.insert_all([Ordered(1u32), Ordered(2)]).unwrap();

        let expected = "digraph {\n\"1\" -> \"2\"[label=\"\"]\n\"2\" -> \"⊤\"[label=\"\"]\n}";
        assert_eq!(lattice.to_dot(), expected);
        assert_eq!(lattice.to_string(), expected);
    }

    #[test]
    fn test_dump_streams_into_writer() {
        use std::fmt::Write;

        let mut lattice = CompleteLattice::new();
        lattice.insert_all([Ordered(4u32), Ordered(8)]).unwrap();

        let mut out = String::from("// lattice\n");
        write!(out, "{lattice}").unwrap();
        assert_eq!(out, format!("// lattice\n{}", lattice.to_dot()));
        assert!(out.ends_with('}'));
    }

    #[test]
    fn test_each_cover_printed_once() {
        let mut lattice = CompleteLattice::new();
        lattice.insert_all([Ordered(5u32), Ordered(1), Ordered(3)]).unwrap();
        let edge_lines = lattice.to_dot().lines().filter(|line| line.contains("->")).count();
        assert_eq!(edge_lines, lattice.order());
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape(r"a\b"), r"a\\b");
        assert_eq!(escape("plain"), "plain");
    }
}
