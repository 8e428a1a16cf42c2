//! Mempool lookups.

use serde::Deserialize;

use super::operation::{Operation, TransactionIdentifier};

/// Response from `/mempool`: every transaction currently pending.
#[derive(Debug, Clone, Deserialize)]
pub struct MempoolResponse {
    pub transaction_identifiers: Vec<TransactionIdentifier>,
}

/// A pending transaction as reported by the mempool.
#[derive(Debug, Clone, Deserialize)]
pub struct MempoolTransaction {
    pub transaction_identifier: TransactionIdentifier,
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Response from `/mempool/transaction`.
#[derive(Debug, Clone, Deserialize)]
pub struct MempoolTransactionResponse {
    pub transaction: MempoolTransaction,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}
