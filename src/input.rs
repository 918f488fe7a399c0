//! JSON debt file parsing for the CLI boundary.
//!
//! The core graph has no I/O of its own; this module owns the one external
//! format the binary consumes and emits:
//!
//! ```json
//! {
//!   "debts": [
//!     { "creditor": "alice", "debtor": "bob", "amount": "40" }
//!   ]
//! }
//! ```
//!
//! Amounts travel as strings to keep decimal values exact. Malformed input
//! here is a recoverable error, unlike the assertion contracts of the core
//! graph, so the invariants are re-checked before edges are inserted.

use crate::graph::ledger::DebtGraph;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from parsing a debt file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid amount '{raw}' for debt {creditor} <- {debtor}")]
    InvalidAmount {
        creditor: String,
        debtor: String,
        raw: String,
    },
    #[error("self-debt for '{0}' is not allowed")]
    SelfDebt(String),
}

/// One debt record: `debtor` owes `creditor` the given amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtRecord {
    pub creditor: String,
    pub debtor: String,
    pub amount: String,
}

/// Top-level debt file schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtFile {
    pub debts: Vec<DebtRecord>,
}

/// Parse a JSON debt file into a graph keyed by vertex name.
///
/// A second record for an already-connected ordered pair is silently
/// ignored, matching the graph's own insertion semantics.
pub fn parse_debts(json: &str) -> Result<DebtGraph<String>, InputError> {
    let file: DebtFile = serde_json::from_str(json)?;

    let mut graph = DebtGraph::new();
    for record in file.debts {
        if record.creditor == record.debtor {
            return Err(InputError::SelfDebt(record.creditor));
        }
        let amount: Decimal =
            record
                .amount
                .parse()
                .map_err(|_| InputError::InvalidAmount {
                    creditor: record.creditor.clone(),
                    debtor: record.debtor.clone(),
                    raw: record.amount.clone(),
                })?;
        if amount <= Decimal::ZERO {
            return Err(InputError::InvalidAmount {
                creditor: record.creditor,
                debtor: record.debtor,
                raw: record.amount,
            });
        }
        graph.add_edge(record.creditor, record.debtor, amount);
    }
    Ok(graph)
}

/// Render a graph back into the debt file schema, edges in creditor order.
pub fn to_debt_file(graph: &DebtGraph<String>) -> DebtFile {
    DebtFile {
        debts: graph
            .iter_edges()
            .map(|(creditor, edge)| DebtRecord {
                creditor: creditor.clone(),
                debtor: edge.debtor.clone(),
                amount: edge.amount.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_valid_file() {
        let json = r#"{
            "debts": [
                { "creditor": "alice", "debtor": "bob", "amount": "40" },
                { "creditor": "bob", "debtor": "carol", "amount": "25.50" }
            ]
        }"#;
        let graph = parse_debts(json).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(
            graph.edge_amount(&"alice".to_string(), &"bob".to_string()),
            Some(dec!(40))
        );
        assert_eq!(
            graph.edge_amount(&"bob".to_string(), &"carol".to_string()),
            Some(dec!(25.50))
        );
    }

    #[test]
    fn test_parse_rejects_bad_amount() {
        let json = r#"{ "debts": [ { "creditor": "a", "debtor": "b", "amount": "lots" } ] }"#;
        assert!(matches!(
            parse_debts(json),
            Err(InputError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_positive_amount() {
        let json = r#"{ "debts": [ { "creditor": "a", "debtor": "b", "amount": "0" } ] }"#;
        assert!(matches!(
            parse_debts(json),
            Err(InputError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_self_debt() {
        let json = r#"{ "debts": [ { "creditor": "a", "debtor": "a", "amount": "5" } ] }"#;
        assert!(matches!(parse_debts(json), Err(InputError::SelfDebt(_))));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(parse_debts("{"), Err(InputError::Json(_))));
    }

    #[test]
    fn test_duplicate_pair_keeps_first() {
        let json = r#"{
            "debts": [
                { "creditor": "a", "debtor": "b", "amount": "10" },
                { "creditor": "a", "debtor": "b", "amount": "99" }
            ]
        }"#;
        let graph = parse_debts(json).unwrap();
        assert_eq!(
            graph.edge_amount(&"a".to_string(), &"b".to_string()),
            Some(dec!(10))
        );
    }

    #[test]
    fn test_round_trip_through_debt_file() {
        let json = r#"{
            "debts": [
                { "creditor": "a", "debtor": "b", "amount": "10" },
                { "creditor": "b", "debtor": "c", "amount": "5" }
            ]
        }"#;
        let graph = parse_debts(json).unwrap();
        let file = to_debt_file(&graph);
        assert_eq!(file.debts.len(), 2);
        assert_eq!(file.debts[0].creditor, "a");
        assert_eq!(file.debts[0].amount, "10");
    }
}
