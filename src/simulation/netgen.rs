//! Random debt network generation.
//!
//! Produces debt graphs of configurable size for exercising the netting
//! engine: CLI fixtures, stress tests, and benchmarks.

use crate::graph::ledger::DebtGraph;
use rand::Rng;
use rust_decimal::Decimal;

/// Configuration for generating a random debt network.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Number of vertices in the network.
    pub vertex_count: usize,
    /// Average number of debts per vertex.
    pub avg_debts_per_vertex: usize,
    /// Minimum debt amount.
    pub min_amount: Decimal,
    /// Maximum debt amount.
    pub max_amount: Decimal,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            vertex_count: 10,
            avg_debts_per_vertex: 3,
            min_amount: Decimal::from(100),
            max_amount: Decimal::from(100_000),
        }
    }
}

/// Generate a random debt network.
///
/// Drawn pairs that collide with an existing edge fall under the usual
/// insertion semantics and are silently skipped, so the resulting edge
/// count may be below the requested total.
pub fn generate_random_network(config: &NetworkConfig) -> DebtGraph<String> {
    let mut rng = rand::thread_rng();
    let mut graph = DebtGraph::new();

    let names: Vec<String> = (0..config.vertex_count)
        .map(|i| format!("NODE-{:03}", i))
        .collect();
    for name in &names {
        graph.add_vertex(name.clone());
    }
    if config.vertex_count < 2 {
        return graph;
    }

    let total_debts = config.vertex_count * config.avg_debts_per_vertex;
    for _ in 0..total_debts {
        let creditor_idx = rng.gen_range(0..names.len());
        let mut debtor_idx = rng.gen_range(0..names.len());
        while debtor_idx == creditor_idx {
            debtor_idx = rng.gen_range(0..names.len());
        }

        let min_f64: f64 = config.min_amount.to_string().parse().unwrap_or(100.0);
        let max_f64: f64 = config.max_amount.to_string().parse().unwrap_or(100_000.0);
        let amount = Decimal::from_f64_retain(rng.gen_range(min_f64..max_f64))
            .unwrap_or(Decimal::from(100))
            .round_dp(2);

        if amount > Decimal::ZERO {
            graph.add_edge(
                names[creditor_idx].clone(),
                names[debtor_idx].clone(),
                amount,
            );
        }
    }

    graph
}
