//! Aggregate debt and credit queries over a [`DebtGraph`].
//!
//! Vertex aggregates walk the stored edges directly; group aggregates test
//! membership against a subgraph's vertex set, so edges internal to the
//! group are excluded by construction.

use crate::graph::ledger::DebtGraph;
use rust_decimal::Decimal;

impl<T: Ord + Clone> DebtGraph<T> {
    /// Total amount the vertex `u` must repay: the sum over all edges
    /// whose target is `u`.
    pub fn debt_of(&self, u: &T) -> Decimal {
        self.iter_edges()
            .filter(|(_, edge)| edge.debtor == *u)
            .map(|(_, edge)| edge.amount)
            .sum()
    }

    /// Total amount the vertex `u` is owed: the sum over its outgoing edges.
    pub fn credit_of(&self, u: &T) -> Decimal {
        self.outgoing(u).map(|edge| edge.amount).sum()
    }

    /// Net position of `u`: what it is owed minus what it owes.
    pub fn net_of(&self, u: &T) -> Decimal {
        self.credit_of(u) - self.debt_of(u)
    }

    /// Total amount the group owes to outsiders: the sum over edges whose
    /// creditor lies outside the group and whose debtor lies inside.
    pub fn group_debt(&self, group: &DebtGraph<T>) -> Decimal {
        self.iter_edges()
            .filter(|(creditor, edge)| {
                !group.has_vertex(creditor) && group.has_vertex(&edge.debtor)
            })
            .map(|(_, edge)| edge.amount)
            .sum()
    }

    /// Total amount outsiders owe the group: the sum over edges whose
    /// creditor lies inside the group and whose debtor lies outside.
    pub fn group_credit(&self, group: &DebtGraph<T>) -> Decimal {
        self.iter_edges()
            .filter(|(creditor, edge)| {
                group.has_vertex(creditor) && !group.has_vertex(&edge.debtor)
            })
            .map(|(_, edge)| edge.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::BTreeSet;

    fn sample_graph() -> DebtGraph<i32> {
        let mut graph = DebtGraph::new();
        graph.add_edge(1, 2, dec!(10));
        graph.add_edge(3, 2, dec!(5));
        graph.add_edge(2, 4, dec!(8));
        graph.add_edge(4, 1, dec!(3));
        graph
    }

    #[test]
    fn test_vertex_debt_and_credit() {
        let graph = sample_graph();
        assert_eq!(graph.debt_of(&2), dec!(15));
        assert_eq!(graph.credit_of(&2), dec!(8));
        assert_eq!(graph.net_of(&2), dec!(-7));
        assert_eq!(graph.debt_of(&3), dec!(0));
        assert_eq!(graph.credit_of(&3), dec!(5));
    }

    #[test]
    fn test_absent_vertex_has_zero_balances() {
        let graph = sample_graph();
        assert_eq!(graph.debt_of(&9), dec!(0));
        assert_eq!(graph.credit_of(&9), dec!(0));
    }

    #[test]
    fn test_group_debt_excludes_internal_edges() {
        let graph = sample_graph();
        let members: BTreeSet<i32> = [1, 2].into_iter().collect();
        let group = graph.induced_subgraph(&members);

        // Internal edge 1 -> 2 never counts. Crossing edges into the group:
        // 3 -> 2 (5) and 4 -> 1 (3).
        assert_eq!(graph.group_debt(&group), dec!(8));
    }

    #[test]
    fn test_group_credit_excludes_internal_edges() {
        let graph = sample_graph();
        let members: BTreeSet<i32> = [1, 2].into_iter().collect();
        let group = graph.induced_subgraph(&members);

        // Only 2 -> 4 (8) leaves the group.
        assert_eq!(graph.group_credit(&group), dec!(8));
    }

    #[test]
    fn test_balances_match_direct_enumeration() {
        let graph = sample_graph();
        for u in [1, 2, 3, 4] {
            let debt: Decimal = graph
                .iter_edges()
                .filter(|(_, e)| e.debtor == u)
                .map(|(_, e)| e.amount)
                .sum();
            let credit: Decimal = graph.outgoing(&u).map(|e| e.amount).sum();
            assert_eq!(graph.debt_of(&u), debt);
            assert_eq!(graph.credit_of(&u), credit);
        }
    }
}
