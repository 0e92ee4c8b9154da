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

//! Property tests for incremental lattice construction


use std::collections::BTreeSet;

use galois_core::{BitsetConcept, CompleteLattice, LatticeConfig, Ordered, PartiallyOrdered};
use generators::{Row, arb_chain, arb_row, arb_rows, build, closed_intents, cover_pairs, extent, intent, objects_having};
use proptest::prelude::*;

fn labels(lattice: &CompleteLattice<BitsetConcept>) -> Vec<BitsetConcept> {
    lattice.to_vec()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Distinct labels, comparable edges, exact covers and meet closure
    #[test]
    fn structure_is_a_covering_graph(rows in arb_rows()) {
        let lattice = build(&rows);
        prop_assert_eq!(lattice.verify(), Ok(()));
    }

    /// The stored labels are exactly the intersections of the rows
    #[test]
    fn labels_match_closure_system(rows in arb_rows()) {
        let lattice = build(&rows);
        let expected = closed_intents(&rows);

        let stored: Vec<Row> = lattice.iter().map(intent).collect();
        let unique: BTreeSet<Row> = stored.iter().cloned().collect();
        prop_assert_eq!(stored.len(), unique.len());
        prop_assert_eq!(unique, expected);
    }

    /// Size counts closed elements plus the sentinel; order counts covers
    #[test]
    fn size_and_order_match_oracle(rows in arb_rows()) {
        let lattice = build(&rows);
        let closed = closed_intents(&rows);

        prop_assert_eq!(lattice.size(), closed.len() + 1);
        prop_assert_eq!(lattice.order(), cover_pairs(&closed));
    }

    /// Every stored concept lists exactly the objects having its attributes
    #[test]
    fn extents_are_exact(rows in arb_rows()) {
        let lattice = build(&rows);
        for concept in &lattice {
            prop_assert_eq!(extent(concept), objects_having(&rows, &intent(concept)));
        }
        let top = lattice.top().unwrap();
        prop_assert_eq!(extent(top), objects_having(&rows, &intent(top)));
    }

    /// Meets and joins of present labels are present
    #[test]
    fn meets_and_joins_are_present(rows in arb_rows()) {
        let lattice = build(&rows);
        let top = lattice.top().unwrap();
        for a in &lattice {
            for b in &lattice {
                let meet = lattice.meet(a, b).unwrap();
                prop_assert!(lattice.contains(meet));
                prop_assert_eq!(intent(meet), &intent(a) & &intent(b));

                let join = lattice.join(a, b).unwrap();
                prop_assert!(lattice.contains(join) || join == top);
                prop_assert!(join.is_greater_or_equal(a) && join.is_greater_or_equal(b));
            }
        }
    }

    /// The top dominates and the bottom is dominated by every label
    #[test]
    fn top_and_bottom_bound_every_label(rows in arb_rows()) {
        let lattice = build(&rows);
        let top = lattice.top().unwrap();
        let bottom = lattice.bottom().unwrap();
        for label in &lattice {
            prop_assert!(top.is_greater_or_equal(label));
            prop_assert!(label.is_greater_or_equal(bottom));
        }
    }

    /// Commutativity, associativity, idempotence and absorption
    #[test]
    fn facade_operations_obey_lattice_laws(rows in arb_rows()) {
        let lattice = build(&rows);
        let all = labels(&lattice);
        for a in &all {
            prop_assert_eq!(lattice.meet(a, a), Some(a));
            prop_assert_eq!(lattice.join(a, a), Some(a));
            for b in &all {
                prop_assert_eq!(lattice.meet(a, b), lattice.meet(b, a));
                prop_assert_eq!(lattice.join(a, b), lattice.join(b, a));

                let join = lattice.join(a, b).unwrap();
                let meet = lattice.meet(a, b).unwrap();
                prop_assert_eq!(lattice.meet(a, join), Some(a));
                prop_assert_eq!(lattice.join(a, meet), Some(a));

                for c in all.iter().take(6) {
                    let left = lattice.meet(lattice.meet(a, b).unwrap(), c);
                    let right = lattice.meet(a, lattice.meet(b, c).unwrap());
                    prop_assert_eq!(left, right);

                    let left = lattice.join(lattice.join(a, b).unwrap(), c);
                    let right = lattice.join(a, lattice.join(b, c).unwrap());
                    prop_assert_eq!(left, right);
                }
            }
        }
    }

    /// Closure is idempotent and always lands on a present element
    #[test]
    fn find_is_a_closure(rows in arb_rows(), probe in arb_row()) {
        let lattice = build(&rows);
        let element = BitsetConcept::from_intent(probe.iter().copied());

        let closed = lattice.find(&element).unwrap();
        prop_assert!(closed.is_greater_or_equal(&element.meet(lattice.top().unwrap())));
        prop_assert!(lattice.contains(closed));
        prop_assert_eq!(lattice.find(closed), Some(closed));
    }

    /// `covers` holds exactly for pairs with nothing strictly between them,
    /// the reported top included
    #[test]
    fn covers_matches_transitive_reduction(rows in arb_rows()) {
        let lattice = build(&rows);
        let mut all = labels(&lattice);
        let top = lattice.top().cloned().unwrap();
        if !all.contains(&top) {
            all.push(top);
        }
        for a in &all {
            for b in &all {
                let between = all.iter().any(|c| b.is_less_than(c) && c.is_less_than(a));
                let expected = b.is_less_than(a) && !between;
                prop_assert_eq!(lattice.covers(a, b), expected);
            }
        }
    }

    /// Inserting the same context twice changes nothing
    #[test]
    fn reinsertion_is_idempotent(rows in arb_rows()) {
        let mut lattice = build(&rows);
        let (size, order) = (lattice.size(), lattice.order());
        let before: Vec<Row> = lattice.iter().map(intent).collect();

        for (object, row) in rows.iter().enumerate() {
            lattice.insert(BitsetConcept::object(object as u32, row.iter().copied())).unwrap();
        }

        prop_assert_eq!(lattice.size(), size);
        prop_assert_eq!(lattice.order(), order);
        prop_assert_eq!(lattice.iter().map(intent).collect::<Vec<_>>(), before);
    }

    /// The closed elements do not depend on insertion order
    #[test]
    fn insertion_order_is_irrelevant(rows in arb_rows()) {
        let forward = build(&rows);
        let reversed: Vec<Row> = rows.iter().rev().cloned().collect();
        let backward = build(&reversed);

        prop_assert_eq!(forward.size(), backward.size());
        prop_assert_eq!(forward.order(), backward.order());
        let forward_labels: BTreeSet<Row> = forward.iter().map(intent).collect();
        let backward_labels: BTreeSet<Row> = backward.iter().map(intent).collect();
        prop_assert_eq!(forward_labels, backward_labels);
    }

    /// Totally ordered values form a chain under the sentinel
    #[test]
    fn chains_of_ordered_values(values in arb_chain()) {
        let mut lattice = CompleteLattice::with_config(LatticeConfig::default().with_verification(false));
        lattice.insert_all(values.iter().copied().map(Ordered)).unwrap();
        prop_assert_eq!(lattice.verify(), Ok(()));

        let distinct: BTreeSet<u8> = values.iter().copied().collect();
        prop_assert_eq!(lattice.size(), distinct.len() + 1);
        prop_assert_eq!(lattice.order(), distinct.len());
        prop_assert_eq!(lattice.top().copied(), distinct.iter().max().copied().map(Ordered));
        prop_assert_eq!(lattice.bottom().copied(), distinct.iter().min().copied().map(Ordered));
        prop_assert_eq!(lattice.iter().map(|value| value.0).collect::<BTreeSet<_>>(), distinct);
    }
}
