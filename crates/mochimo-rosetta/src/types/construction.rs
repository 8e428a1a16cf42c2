//! Construction-flow request and response shapes.
//!
//! The client is a stateless transport for an external signing flow:
//! derive → preprocess → metadata → payloads → (sign) → combine → submit.
//! No construction state lives in the client; every call is independent.

use serde::{Deserialize, Serialize};

use super::account::{AccountIdentifier, Amount};
use super::operation::{Operation, PublicKey, TransactionIdentifier};

/// Options echoed from `/construction/preprocess` into `/construction/metadata`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessOptions {
    pub block_to_live: u64,
    pub change_pk: String,
    pub source_addr: String,
}

/// Response from `/construction/preprocess`.
#[derive(Debug, Clone, Deserialize)]
pub struct PreprocessResponse {
    pub options: PreprocessOptions,
    pub required_public_keys: Vec<AccountIdentifier>,
}

/// Chain-derived metadata needed to build the unsigned transaction.
///
/// Round-trips: fetched from `/construction/metadata`, then passed back as
/// the `metadata` of `/construction/payloads`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructionMetadata {
    pub block_to_live: u64,
    pub change_pk: String,
    pub source_balance: u64,
}

/// Response from `/construction/metadata`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataResponse {
    pub metadata: ConstructionMetadata,
    pub suggested_fee: Vec<Amount>,
}

/// A payload the external signer must sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningPayload {
    pub account_identifier: AccountIdentifier,
    pub hex_bytes: String,
    pub signature_type: String,
}

/// Response from `/construction/payloads`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayloadsResponse {
    pub unsigned_transaction: String,
    pub payloads: Vec<SigningPayload>,
}

/// A signature produced outside the client, attached in `/construction/combine`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signature {
    pub signing_payload: SigningPayload,
    pub public_key: PublicKey,
    pub signature_type: String,
    pub hex_bytes: String,
}

/// Response from `/construction/combine`.
#[derive(Debug, Clone, Deserialize)]
pub struct CombineResponse {
    pub signed_transaction: String,
}

/// Response from `/construction/submit`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub transaction_identifier: TransactionIdentifier,
}

/// Response from `/construction/derive`.
///
/// Nodes have answered with a bare `address`, an `account_identifier`, or
/// both; decode whichever is present.
#[derive(Debug, Clone, Deserialize)]
pub struct DeriveResponse {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub account_identifier: Option<AccountIdentifier>,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl DeriveResponse {
    /// The derived address, from whichever field the node filled.
    pub fn address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .or_else(|| self.account_identifier.as_ref().map(|a| a.address.as_str()))
    }
}

/// Response from `/construction/parse`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseResponse {
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub account_identifier_signers: Vec<AccountIdentifier>,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}
