//! Accounts, currency amounts, and balance lookups.

use serde::{Deserialize, Serialize};

use super::block::BlockIdentifier;

/// An account address on the Mochimo ledger.
///
/// The address is treated as an opaque string; no format validation is
/// performed client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentifier {
    pub address: String,
}

impl AccountIdentifier {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// A currency descriptor: symbol plus decimal exponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub symbol: String,
    pub decimals: u32,
}

impl Currency {
    /// The native Mochimo currency (MCM, 9 decimals).
    pub fn mcm() -> Self {
        Self {
            symbol: "MCM".to_string(),
            decimals: 9,
        }
    }
}

/// A signed decimal value, carried as a string to avoid precision loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: String,
    pub currency: Currency,
}

impl Amount {
    /// An amount denominated in native MCM.
    pub fn mcm(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: Currency::mcm(),
        }
    }
}

/// Response from `/account/balance`.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub balances: Vec<Amount>,
    pub block_identifier: BlockIdentifier,
}

/// Result payload of a `tag_resolve` call.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolvedTag {
    pub address: String,
    pub amount: String,
}

/// Response from `/call` with method `tag_resolve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveTagResponse {
    pub result: ResolvedTag,
    pub idempotent: bool,
}
