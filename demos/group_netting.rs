//! Group netting walkthrough.
//!
//! Two housemates form a group whose debts route through two outsiders.
//! Frontier netting cancels the external loop and folds the residual into
//! a single edge inside the group, leaving the outsiders out of the
//! settlement entirely.

use debtnet::netting::{frontier, reduce_group};
use debtnet::prelude::*;
use rust_decimal_macros::dec;
use std::collections::BTreeSet;

fn main() {
    let mut graph = DebtGraph::new();

    println!("Debts:");
    println!("  xavier owes walter 40   (leaves the group)");
    println!("  yusuf  owes xavier 35");
    println!("  zoe    owes yusuf  50   (returns to the group)\n");

    graph.add_edge("walter", "xavier", dec!(40));
    graph.add_edge("xavier", "yusuf", dec!(35));
    graph.add_edge("yusuf", "zoe", dec!(50));

    let members: BTreeSet<&str> = ["walter", "zoe"].into_iter().collect();
    let group = graph.induced_subgraph(&members);

    let boundary = frontier(&graph, &group);
    println!(
        "Group: walter, zoe  |  frontier: {}",
        boundary.into_iter().collect::<Vec<_>>().join(", ")
    );
    println!("Group is owed {} by outsiders", graph.group_credit(&group));
    println!("Group owes    {} to outsiders\n", graph.group_debt(&group));

    reduce_group(&mut graph, &group);

    println!("After group netting:");
    for (creditor, edge) in graph.iter_edges() {
        println!("  {} owes {} {}", edge.debtor, creditor, edge.amount);
    }
    println!("Group is owed {} by outsiders", graph.group_credit(&group));
    println!("Group owes    {} to outsiders", graph.group_debt(&group));
}
