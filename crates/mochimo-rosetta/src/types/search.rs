//! Transaction search, block events, and richlist queries.
//!
//! The option records here use the sparse-filter pattern: a `None` field is
//! absent from the outbound body entirely, never serialized as `null`.

use serde::{Deserialize, Serialize};

use super::account::{AccountIdentifier, Amount};
use super::block::BlockIdentifier;
use super::operation::{Operation, TransactionIdentifier};

/// Optional filters for address-scoped `/search/transactions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressSearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Optional filters for block-scoped `/search/transactions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlockSearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Optional filters for hash-scoped `/search/transactions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HashSearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Optional paging for `/events/blocks`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

/// Optional ordering and paging for `/stats/richlist`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RichlistOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// One match from `/search/transactions`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionMatch {
    pub block_identifier: BlockIdentifier,
    pub transaction_identifier: TransactionIdentifier,
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    pub timestamp: u64,
}

/// Response from `/search/transactions`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchTransactionsResponse {
    pub transactions: Vec<TransactionMatch>,
    pub total_count: u64,
    #[serde(default)]
    pub next_offset: Option<u64>,
}

/// Whether a block event added or removed a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockEventType {
    BlockAdded,
    BlockRemoved,
}

/// One entry from `/events/blocks`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockEvent {
    pub sequence: u64,
    pub block_identifier: BlockIdentifier,
    #[serde(rename = "type")]
    pub event_type: BlockEventType,
}

/// Response from `/events/blocks`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsBlocksResponse {
    pub max_sequence: u64,
    pub events: Vec<BlockEvent>,
}

/// One account entry from `/stats/richlist`.
#[derive(Debug, Clone, Deserialize)]
pub struct RichlistAccount {
    pub account_identifier: AccountIdentifier,
    pub balance: Amount,
}

/// Response from `/stats/richlist`.
#[derive(Debug, Clone, Deserialize)]
pub struct RichlistResponse {
    pub block_identifier: BlockIdentifier,
    pub last_updated: String,
    pub accounts: Vec<RichlistAccount>,
    pub total_accounts: u64,
    #[serde(default)]
    pub circulating_supply: Option<Amount>,
}
