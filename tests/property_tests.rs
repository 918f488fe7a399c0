use debtnet::netting::{find_cycle, reduce, reduce_group};
use debtnet::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// A random debt as (creditor, debtor, amount) over a small vertex pool,
/// so cycles are likely. Self-debts are filtered out; duplicate pairs fall
/// under the usual first-wins insertion semantics when the graph is built.
fn arb_debt() -> impl Strategy<Value = (u8, u8, Decimal)> {
    (1u8..=6, 1u8..=6, 1u64..10_000).prop_filter_map(
        "creditor must differ from debtor",
        |(u, v, w)| {
            if u == v {
                None
            } else {
                Some((u, v, Decimal::from(w)))
            }
        },
    )
}

fn arb_graph() -> impl Strategy<Value = DebtGraph<u8>> {
    prop::collection::vec(arb_debt(), 1..40).prop_map(|debts| {
        let mut graph = DebtGraph::new();
        for (u, v, w) in debts {
            graph.add_edge(u, v, w);
        }
        graph
    })
}

proptest! {
    // ===================================================================
    // INVARIANT 1: Reduction never increases total outstanding debt, and
    // terminates (this test completing is the termination check).
    // ===================================================================
    #[test]
    fn reduction_never_increases_total(mut graph in arb_graph()) {
        let before = graph.total_outstanding();
        let starts: Vec<u8> = graph.iter_vertices().copied().collect();
        for start in &starts {
            reduce(&mut graph, start);
        }
        prop_assert!(graph.total_outstanding() <= before);
    }

    // ===================================================================
    // INVARIANT 2: Every stored amount stays strictly positive. Edges
    // that reach zero are deleted, never kept at zero or negative.
    // ===================================================================
    #[test]
    fn no_non_positive_amount_survives(mut graph in arb_graph()) {
        let starts: Vec<u8> = graph.iter_vertices().copied().collect();
        for start in &starts {
            reduce(&mut graph, start);
        }
        for (_, edge) in graph.iter_edges() {
            prop_assert!(edge.amount > Decimal::ZERO);
        }
    }

    // ===================================================================
    // INVARIANT 3: Cancellation preserves every vertex's net position.
    // Each vertex on a cancelled cycle loses equal credit and debt.
    // ===================================================================
    #[test]
    fn reduction_preserves_net_positions(mut graph in arb_graph()) {
        let starts: Vec<u8> = graph.iter_vertices().copied().collect();
        let before: Vec<Decimal> = starts.iter().map(|v| graph.net_of(v)).collect();
        for start in &starts {
            reduce(&mut graph, start);
        }
        let after: Vec<Decimal> = starts.iter().map(|v| graph.net_of(v)).collect();
        prop_assert_eq!(before, after);
    }

    // ===================================================================
    // INVARIANT 4: Reduction is deterministic. The ordered containers fix
    // the traversal, so two runs from the same state agree exactly.
    // ===================================================================
    #[test]
    fn reduction_is_deterministic(graph in arb_graph()) {
        let starts: Vec<u8> = graph.iter_vertices().copied().collect();

        let mut first = graph.clone();
        let mut second = graph;
        for start in &starts {
            reduce(&mut first, start);
            reduce(&mut second, start);
        }
        prop_assert_eq!(first, second);
    }

    // ===================================================================
    // INVARIANT 5: Reduction is exhaustive for its start vertex. After
    // reduce(s) returns, no cycle through s remains, and a second call
    // changes nothing.
    // ===================================================================
    #[test]
    fn reduction_is_exhaustive(mut graph in arb_graph(), pick in 0usize..6) {
        let starts: Vec<u8> = graph.iter_vertices().copied().collect();
        let start = starts[pick % starts.len()];

        reduce(&mut graph, &start);
        prop_assert!(find_cycle(&graph, &start).is_none());

        let settled = graph.clone();
        reduce(&mut graph, &start);
        prop_assert_eq!(graph, settled);
    }

    // ===================================================================
    // INVARIANT 6: Group reduction terminates and never leaves a
    // non-positive stored amount, whatever group is chosen.
    // ===================================================================
    #[test]
    fn group_reduction_keeps_amounts_positive(mut graph in arb_graph()) {
        let members: BTreeSet<u8> = graph
            .iter_vertices()
            .copied()
            .filter(|v| *v <= 3)
            .collect();
        if !members.is_empty() {
            let group = graph.induced_subgraph(&members);
            reduce_group(&mut graph, &group);
            for (_, edge) in graph.iter_edges() {
                prop_assert!(edge.amount > Decimal::ZERO);
            }
        }
    }

    // ===================================================================
    // INVARIANT 7: Group reduction is deterministic.
    // ===================================================================
    #[test]
    fn group_reduction_is_deterministic(graph in arb_graph()) {
        let members: BTreeSet<u8> = graph
            .iter_vertices()
            .copied()
            .filter(|v| *v <= 3)
            .collect();
        if !members.is_empty() {
            let group = graph.induced_subgraph(&members);
            let mut first = graph.clone();
            let mut second = graph;
            reduce_group(&mut first, &group);
            reduce_group(&mut second, &group);
            prop_assert_eq!(first, second);
        }
    }
}
