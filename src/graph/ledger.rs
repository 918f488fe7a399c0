use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

/// A single outgoing debt relation stored under its creditor.
///
/// An edge `u -> v` with amount `w` means "`v` owes `u` the amount `w`":
/// the owning vertex `u` is the creditor, `debtor` is `v`.
///
/// Edges order by `(debtor, amount)` so that every traversal of a vertex's
/// outgoing set visits targets in ascending order. Cycle discovery depends
/// on this order being stable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DebtEdge<T> {
    /// The vertex that owes the amount.
    pub debtor: T,
    /// The outstanding amount. Always strictly positive while stored.
    pub amount: Decimal,
}

/// A directed graph of pairwise debts between vertices of an ordered type.
///
/// The graph owns all vertex and edge records: an ordered map from each
/// vertex to the ordered set of its outgoing [`DebtEdge`]s. Ordered
/// containers are a correctness requirement, not an optimization — the
/// netting algorithms must visit candidates in ascending order to produce
/// reproducible results.
///
/// At most one edge exists per ordered pair of vertices. Inserting a second
/// edge between an already-connected pair is a no-op regardless of amount.
///
/// # Examples
///
/// ```
/// use debtnet::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let mut graph = DebtGraph::new();
/// graph.add_edge("alice", "bob", dec!(40));
/// graph.add_edge("bob", "carol", dec!(25));
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.credit_of(&"alice"), dec!(40));
/// assert_eq!(graph.debt_of(&"bob"), dec!(40));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtGraph<T: Ord> {
    vertices: BTreeMap<T, BTreeSet<DebtEdge<T>>>,
}

impl<T: Ord + Clone> Default for DebtGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> DebtGraph<T> {
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    /// Number of vertices. O(1).
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges. O(V) — the count is not cached.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|edges| edges.len()).sum()
    }

    /// Whether `u` is a vertex of the graph.
    pub fn has_vertex(&self, u: &T) -> bool {
        self.vertices.contains_key(u)
    }

    /// Whether the edge `u -> v` exists.
    pub fn has_edge(&self, u: &T, v: &T) -> bool {
        self.outgoing(u).any(|edge| edge.debtor == *v)
    }

    /// The amount of the edge `u -> v`, if present.
    pub fn edge_amount(&self, u: &T, v: &T) -> Option<Decimal> {
        self.outgoing(u)
            .find(|edge| edge.debtor == *v)
            .map(|edge| edge.amount)
    }

    /// Insert the vertex `u`. Idempotent: inserting a vertex that is
    /// already present does nothing.
    pub fn add_vertex(&mut self, u: T) {
        self.vertices.entry(u).or_default();
    }

    /// Insert the edge `u -> v` with the given amount, creating missing
    /// endpoints. If an edge already exists for the ordered pair `(u, v)`,
    /// nothing happens and the stored amount is kept.
    ///
    /// # Panics
    ///
    /// Panics if `u == v` or if `amount` is not strictly positive. Both are
    /// contract violations by the caller, not recoverable conditions.
    pub fn add_edge(&mut self, u: T, v: T, amount: Decimal) {
        assert!(u != v, "self-debt is not allowed");
        assert!(
            amount > Decimal::ZERO,
            "debt amount must be positive, got {}",
            amount
        );

        self.add_vertex(v.clone());
        let edges = self.vertices.entry(u).or_default();
        if !edges.iter().any(|edge| edge.debtor == v) {
            edges.insert(DebtEdge { debtor: v, amount });
        }
    }

    /// Remove the vertex `u` and every edge incident to it, in either
    /// direction. Removing an absent vertex is a no-op.
    pub fn remove_vertex(&mut self, u: &T) {
        self.vertices.remove(u);
        for edges in self.vertices.values_mut() {
            edges.retain(|edge| edge.debtor != *u);
        }
    }

    /// Remove exactly the edge `u -> v` if present.
    pub fn remove_edge(&mut self, u: &T, v: &T) {
        if let Some(edges) = self.vertices.get_mut(u) {
            if let Some(edge) = edges.iter().find(|edge| edge.debtor == *v).cloned() {
                edges.remove(&edge);
            }
        }
    }

    /// Adjust the edge `u -> v` by subtracting `delta` from its amount.
    /// The edge is deleted when the result is not strictly positive; a
    /// negative `delta` increases the stored amount. Absent edges are
    /// left untouched.
    pub(crate) fn adjust_edge(&mut self, u: &T, v: &T, delta: Decimal) {
        let Some(edges) = self.vertices.get_mut(u) else {
            return;
        };
        let Some(edge) = edges.iter().find(|edge| edge.debtor == *v).cloned() else {
            return;
        };
        edges.remove(&edge);
        let remaining = edge.amount - delta;
        if remaining > Decimal::ZERO {
            edges.insert(DebtEdge {
                debtor: edge.debtor,
                amount: remaining,
            });
        }
    }

    /// The induced subgraph over `members`: a new, independent graph
    /// containing `members` and exactly the edges of this graph whose
    /// source and target both lie in `members`. A snapshot — later
    /// mutation of this graph does not affect it.
    ///
    /// # Panics
    ///
    /// Panics if any member is not a vertex of this graph.
    pub fn induced_subgraph(&self, members: &BTreeSet<T>) -> DebtGraph<T> {
        for member in members {
            assert!(
                self.has_vertex(member),
                "subgraph member is not a vertex of the graph"
            );
        }

        let mut subgraph = DebtGraph::new();
        for member in members {
            subgraph.add_vertex(member.clone());
            for edge in self.outgoing(member) {
                if members.contains(&edge.debtor) {
                    subgraph.add_edge(member.clone(), edge.debtor.clone(), edge.amount);
                }
            }
        }
        subgraph
    }

    /// Iterate the vertices in ascending order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = &T> {
        self.vertices.keys()
    }

    /// Iterate the outgoing edges of `u` in ascending `(debtor, amount)`
    /// order. Empty if `u` is absent.
    pub fn outgoing(&self, u: &T) -> impl Iterator<Item = &DebtEdge<T>> {
        self.vertices.get(u).into_iter().flatten()
    }

    /// Iterate every edge as `(creditor, edge)`, creditors ascending.
    pub fn iter_edges(&self) -> impl Iterator<Item = (&T, &DebtEdge<T>)> {
        self.vertices
            .iter()
            .flat_map(|(u, edges)| edges.iter().map(move |edge| (u, edge)))
    }

    /// Sum of all stored edge amounts — the gross outstanding debt of the
    /// whole network.
    pub fn total_outstanding(&self) -> Decimal {
        self.vertices
            .values()
            .flatten()
            .map(|edge| edge.amount)
            .sum()
    }
}
