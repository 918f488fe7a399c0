//! Greedy cancellation of circular debt.
//!
//! Each round discovers one cycle, snapshots its path, subtracts the
//! cycle's minimum edge amount from every edge on it, and repeats until no
//! residual cycle remains. Every application strictly decreases the sum of
//! amounts on the discovered cycle, and the total is bounded below by
//! zero, so the loop terminates.
//!
//! The path is snapshotted before any mutation: edges are adjusted only
//! after the search completes, never while iterating the edge sets.

use crate::graph::ledger::DebtGraph;
use crate::netting::cycle::{find_cycle, find_group_cycle, frontier};
use log::debug;
use rust_decimal::Decimal;

/// Cancel circular debt passing through `start` until no cycle starting
/// and ending at `start` remains. No vertex's net position changes: every
/// vertex on a cancelled cycle loses equal credit and debt.
///
/// # Examples
///
/// ```
/// use debtnet::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let mut graph = DebtGraph::new();
/// graph.add_edge(1, 2, dec!(10));
/// graph.add_edge(2, 3, dec!(5));
/// graph.add_edge(3, 1, dec!(7));
///
/// reduce(&mut graph, &1);
///
/// assert_eq!(graph.edge_amount(&1, &2), Some(dec!(5)));
/// assert!(!graph.has_edge(&2, &3));
/// assert_eq!(graph.edge_amount(&3, &1), Some(dec!(2)));
/// ```
pub fn reduce<T: Ord + Clone>(graph: &mut DebtGraph<T>, start: &T) {
    while let Some(path) = find_cycle(graph, start) {
        let min = cycle_minimum(graph, &path);
        debug!("cancelling cycle of {} edges by {}", path.len() - 1, min);
        settle_along(graph, &path, min);
    }
}

/// Cancel the external circular debt of a group.
///
/// For each frontier vertex in ascending order, repeatedly search for a
/// cycle that leaves the group and returns to the frontier, cancel it, and
/// fold the residual between the path's endpoints into the boundary:
/// subtract from an existing return edge, add onto an existing forward
/// edge, or create the forward edge outright. Purely internal debt is
/// never touched.
pub fn reduce_group<T: Ord + Clone>(graph: &mut DebtGraph<T>, group: &DebtGraph<T>) {
    let boundary = frontier(graph, group);
    debug!("reducing group with {} frontier vertices", boundary.len());

    for start in &boundary {
        while let Some(path) = find_group_cycle(graph, start, &boundary, group) {
            let min = cycle_minimum(graph, &path);
            debug!("cancelling group cycle of {} edges by {}", path.len() - 1, min);
            settle_along(graph, &path, min);

            let arrival = path[path.len() - 1].clone();
            if arrival == *start {
                // A true cycle closed on itself.
            } else if graph.has_edge(&arrival, start) {
                graph.adjust_edge(&arrival, start, min);
            } else if graph.has_edge(start, &arrival) {
                graph.adjust_edge(start, &arrival, -min);
            } else {
                graph.add_edge(start.clone(), arrival.clone(), min);
            }
        }
    }
}

/// The smallest stored amount among the path's consecutive edges, scanning
/// in path order so ties resolve to the first edge encountered.
fn cycle_minimum<T: Ord + Clone>(graph: &DebtGraph<T>, path: &[T]) -> Decimal {
    let mut min: Option<Decimal> = None;
    for pair in path.windows(2) {
        let amount = graph
            .edge_amount(&pair[0], &pair[1])
            .expect("every consecutive pair of a discovered path is an edge");
        if min.map_or(true, |m| amount < m) {
            min = Some(amount);
        }
    }
    min.expect("a discovered path holds at least one edge")
}

/// Subtract `min` from every consecutive edge of the snapshotted path,
/// deleting edges that reach zero.
fn settle_along<T: Ord + Clone>(graph: &mut DebtGraph<T>, path: &[T], min: Decimal) {
    for pair in path.windows(2) {
        graph.adjust_edge(&pair[0], &pair[1], min);
    }
}
