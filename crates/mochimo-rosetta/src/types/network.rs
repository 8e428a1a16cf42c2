//! Network identification and node-level responses.

use serde::{Deserialize, Serialize};

use super::block::BlockIdentifier;

/// Identifies the chain and network every request is scoped to.
///
/// The identifier is fixed at client construction and prefixed onto every
/// outbound request body; it never changes for the life of the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkIdentifier {
    pub blockchain: String,
    pub network: String,
}

impl NetworkIdentifier {
    /// The Mochimo mainnet identifier.
    pub fn mainnet() -> Self {
        Self {
            blockchain: "mochimo".to_string(),
            network: "mainnet".to_string(),
        }
    }

    /// A custom chain/network pair.
    pub fn new(blockchain: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            blockchain: blockchain.into(),
            network: network.into(),
        }
    }
}

impl Default for NetworkIdentifier {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Response from `/network/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkStatusResponse {
    pub current_block_identifier: BlockIdentifier,
    pub genesis_block_identifier: BlockIdentifier,
    pub current_block_timestamp: u64,
}

/// Version block of `/network/options`.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkVersion {
    pub rosetta_version: String,
    pub node_version: String,
    #[serde(default)]
    pub middleware_version: Option<String>,
}

/// Response from `/network/options`.
///
/// The `allow` section (operation types, statuses, error catalog) is
/// node-defined and left free-form; callers needing structure must narrow
/// it explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkOptionsResponse {
    pub version: NetworkVersion,
    #[serde(default)]
    pub allow: serde_json::Value,
}
