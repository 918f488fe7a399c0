//! Three-way cycle cancellation walkthrough.
//!
//! Demonstrates how a circular chain of debt between three parties is
//! detected and reduced by the bottleneck amount, lowering everyone's
//! gross exposure without changing any net position.

use debtnet::netting::{find_cycle, reduce};
use debtnet::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    let mut graph = DebtGraph::new();

    println!("Debts:");
    println!("  bob   owes alice 10");
    println!("  carol owes bob    5");
    println!("  alice owes carol  7\n");

    graph.add_edge("alice", "bob", dec!(10));
    graph.add_edge("bob", "carol", dec!(5));
    graph.add_edge("carol", "alice", dec!(7));

    println!("Total outstanding before: {}", graph.total_outstanding());
    for name in ["alice", "bob", "carol"] {
        println!("  {:<6} net position: {}", name, graph.net_of(&name));
    }

    let cycle = find_cycle(&graph, &"alice").expect("the chain is circular");
    println!("\nDiscovered cycle: {}", cycle.join(" → "));

    reduce(&mut graph, &"alice");

    println!("\nAfter cancellation:");
    for (creditor, edge) in graph.iter_edges() {
        println!("  {} owes {} {}", edge.debtor, creditor, edge.amount);
    }
    println!("Total outstanding after: {}", graph.total_outstanding());
    for name in ["alice", "bob", "carol"] {
        println!("  {:<6} net position: {}", name, graph.net_of(&name));
    }
}
