//! # debtnet
//!
//! Debt network modeling and circular debt cancellation engine.
//!
//! Models pairwise debts between entities as a weighted directed graph and
//! cancels circular chains of debt, reducing total outstanding obligations
//! without changing any entity's net position.
//!
//! ## Architecture
//!
//! - **graph** — The debt ledger: vertices, edges, induced subgraphs, and
//!   aggregate debt/credit queries
//! - **netting** — Deterministic cycle discovery (single vertex and
//!   group/frontier variants) and greedy cycle cancellation
//! - **simulation** — Random debt network generation for testing
//! - **input** — JSON debt file parsing for the CLI boundary

pub mod graph;
pub mod input;
pub mod netting;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::graph::ledger::{DebtEdge, DebtGraph};
    pub use crate::netting::{find_cycle, find_group_cycle, frontier, reduce, reduce_group};
}
