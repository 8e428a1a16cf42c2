//! Operations, public keys, and transaction identifiers.

use serde::{Deserialize, Serialize};

use super::account::{AccountIdentifier, Amount};

/// Curve type sent with every public key: the WOTS+ post-quantum scheme.
///
/// Mochimo only signs with WOTS+, so `/construction/derive` pins this value
/// no matter what key material the caller supplies.
pub const CURVE_TYPE_WOTSP: &str = "wotsp";

/// Position of an operation within its transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationIdentifier {
    pub index: u64,
}

/// An index-tagged balance effect (debit or credit) against one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub operation_identifier: OperationIdentifier,
    #[serde(rename = "type")]
    pub op_type: String,
    pub status: String,
    pub account: AccountIdentifier,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Operation {
    pub fn new(
        index: u64,
        op_type: impl Into<String>,
        status: impl Into<String>,
        account: AccountIdentifier,
        amount: Amount,
    ) -> Self {
        Self {
            operation_identifier: OperationIdentifier { index },
            op_type: op_type.into(),
            status: status.into(),
            account,
            amount,
            metadata: None,
        }
    }
}

/// Opaque hash uniquely identifying a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionIdentifier {
    pub hash: String,
}

impl TransactionIdentifier {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }
}

/// A public key on the wire: raw hex bytes plus curve type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub hex_bytes: String,
    pub curve_type: String,
}

impl PublicKey {
    /// A WOTS+ public key from raw hex bytes.
    pub fn wotsp(hex_bytes: impl Into<String>) -> Self {
        Self {
            hex_bytes: hex_bytes.into(),
            curve_type: CURVE_TYPE_WOTSP.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_type_field_renamed_on_wire() {
        let op = Operation::new(
            0,
            "SOURCE_TRANSFER",
            "SUCCESS",
            AccountIdentifier::new("0xsource"),
            Amount::mcm("-100"),
        );
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["type"], "SOURCE_TRANSFER");
        assert_eq!(json["operation_identifier"]["index"], 0);
        // absent metadata must not serialize as null
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn test_operation_round_trips_metadata() {
        let json = serde_json::json!({
            "operation_identifier": { "index": 1 },
            "type": "DESTINATION_TRANSFER",
            "status": "PENDING",
            "account": { "address": "0xdest" },
            "amount": { "value": "100", "currency": { "symbol": "MCM", "decimals": 9 } },
            "metadata": { "memo": "rent" }
        });
        let op: Operation = serde_json::from_value(json).unwrap();
        assert_eq!(op.op_type, "DESTINATION_TRANSFER");
        assert_eq!(op.metadata.as_ref().unwrap()["memo"], "rent");
    }

    #[test]
    fn test_wotsp_public_key_pins_curve_type() {
        let key = PublicKey::wotsp("ab".repeat(32));
        assert_eq!(key.curve_type, "wotsp");
        assert_eq!(key.hex_bytes.len(), 64);
    }
}
