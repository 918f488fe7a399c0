//! Cycle discovery over a debt graph.
//!
//! Depth-first search over outgoing edges, always exploring successors in
//! ascending target order. Because the edge sets are ordered, the first
//! cycle found is fixed for a given graph state: the lexicographically
//! smallest cycle reachable in traversal order, not necessarily the
//! shortest or the cheapest.
//!
//! The visited set is shared across the whole search and never shrinks on
//! backtracking. Recursion depth is bounded by the vertex count for the
//! same reason.

use crate::graph::ledger::DebtGraph;
use std::collections::BTreeSet;

/// Search for a debt cycle starting and ending at `start`.
///
/// Returns the full path `[start, ..., start]` of the first cycle found,
/// or `None` when every path from `start` dead-ends without returning.
pub fn find_cycle<T: Ord + Clone>(graph: &DebtGraph<T>, start: &T) -> Option<Vec<T>> {
    let mut path = vec![start.clone()];
    let mut visited = BTreeSet::new();
    if walk(graph, start, start, &mut path, &mut visited) {
        Some(path)
    } else {
        None
    }
}

fn walk<T: Ord + Clone>(
    graph: &DebtGraph<T>,
    current: &T,
    start: &T,
    path: &mut Vec<T>,
    visited: &mut BTreeSet<T>,
) -> bool {
    // Closing condition: back at the start after at least one step.
    if current == start && !visited.is_empty() {
        return true;
    }

    for edge in graph.outgoing(current) {
        if visited.contains(&edge.debtor) {
            continue;
        }
        visited.insert(edge.debtor.clone());
        path.push(edge.debtor.clone());
        if walk(graph, &edge.debtor, start, path, visited) {
            return true;
        }
        path.pop();
    }
    false
}

/// The frontier of `group`: every member vertex that participates in at
/// least one edge crossing the group boundary, in either direction.
/// Deduplicated and ordered ascending, so group reduction visits start
/// vertices deterministically.
pub fn frontier<T: Ord + Clone>(graph: &DebtGraph<T>, group: &DebtGraph<T>) -> BTreeSet<T> {
    let mut boundary = BTreeSet::new();
    for (creditor, edge) in graph.iter_edges() {
        let source_inside = group.has_vertex(creditor);
        let target_inside = group.has_vertex(&edge.debtor);
        if source_inside && !target_inside {
            boundary.insert(creditor.clone());
        } else if !source_inside && target_inside {
            boundary.insert(edge.debtor.clone());
        }
    }
    boundary
}

/// Search for a cycle that leaves the group through `start` and returns to
/// any vertex of `boundary` after at least one step.
///
/// Transitions between two vertices that are both members of `group` are
/// suppressed: purely internal debt must not be cancelled as if it were
/// part of the external netting.
pub fn find_group_cycle<T: Ord + Clone>(
    graph: &DebtGraph<T>,
    start: &T,
    boundary: &BTreeSet<T>,
    group: &DebtGraph<T>,
) -> Option<Vec<T>> {
    let mut path = vec![start.clone()];
    let mut visited = BTreeSet::new();
    if walk_group(graph, start, boundary, group, &mut path, &mut visited) {
        Some(path)
    } else {
        None
    }
}

fn walk_group<T: Ord + Clone>(
    graph: &DebtGraph<T>,
    current: &T,
    boundary: &BTreeSet<T>,
    group: &DebtGraph<T>,
    path: &mut Vec<T>,
    visited: &mut BTreeSet<T>,
) -> bool {
    // Any frontier vertex closes the cycle, not only the start.
    if boundary.contains(current) && !visited.is_empty() {
        return true;
    }

    for edge in graph.outgoing(current) {
        if visited.contains(&edge.debtor) {
            continue;
        }
        if group.has_vertex(current) && group.has_vertex(&edge.debtor) {
            continue;
        }
        visited.insert(edge.debtor.clone());
        path.push(edge.debtor.clone());
        if walk_group(graph, &edge.debtor, boundary, group, path, visited) {
            return true;
        }
        path.pop();
    }
    false
}
