//! Blocks and block-scoped transactions.

use serde::{Deserialize, Serialize};

use super::operation::{Operation, TransactionIdentifier};

/// Identifies a block by index and/or hash.
///
/// Requests may supply either field, both, or neither (neither means the
/// node's latest block). Omitted fields are absent from the wire, never
/// `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl BlockIdentifier {
    /// The node's latest block.
    pub fn latest() -> Self {
        Self::default()
    }

    /// Look up by block height.
    pub fn by_index(index: u64) -> Self {
        Self {
            index: Some(index),
            hash: None,
        }
    }

    /// Look up by block hash.
    pub fn by_hash(hash: impl Into<String>) -> Self {
        Self {
            index: None,
            hash: Some(hash.into()),
        }
    }
}

/// A transaction with its ledger effects.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub transaction_identifier: TransactionIdentifier,
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// A block with its parent link and contained transactions.
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub block_identifier: BlockIdentifier,
    pub parent_block_identifier: BlockIdentifier,
    pub timestamp: u64,
    pub transactions: Vec<Transaction>,
}

/// Response from `/block`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockResponse {
    pub block: Block,
}

/// Response from `/block/transaction`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockTransactionResponse {
    pub transaction: Transaction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_serializes_to_empty_object() {
        let json = serde_json::to_value(BlockIdentifier::latest()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_by_index_omits_hash() {
        let json = serde_json::to_value(BlockIdentifier::by_index(654321)).unwrap();
        assert_eq!(json, serde_json::json!({ "index": 654321 }));
    }

    #[test]
    fn test_by_hash_omits_index() {
        let json = serde_json::to_value(BlockIdentifier::by_hash("0xabc")).unwrap();
        assert_eq!(json, serde_json::json!({ "hash": "0xabc" }));
    }

    #[test]
    fn test_block_response_decodes() {
        let response: BlockResponse = serde_json::from_value(serde_json::json!({
            "block": {
                "block_identifier": { "index": 2, "hash": "0xb2" },
                "parent_block_identifier": { "index": 1, "hash": "0xb1" },
                "timestamp": 1700000000000u64,
                "transactions": [
                    {
                        "transaction_identifier": { "hash": "0xt1" },
                        "operations": []
                    }
                ]
            }
        }))
        .unwrap();
        assert_eq!(response.block.block_identifier.index, Some(2));
        assert_eq!(response.block.parent_block_identifier.hash.as_deref(), Some("0xb1"));
        assert_eq!(response.block.transactions.len(), 1);
        assert!(response.block.transactions[0].metadata.is_none());
    }
}
