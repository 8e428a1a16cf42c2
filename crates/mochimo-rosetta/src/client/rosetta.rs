//! Transport and endpoint methods for the Mochimo Rosetta API.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use tracing::{debug, error};

use crate::error::Error;
use crate::types::{
    AddressSearchOptions, BalanceResponse, BlockIdentifier, BlockResponse,
    BlockSearchOptions, BlockTransactionResponse, CombineResponse, DeriveResponse, EventsBlocksResponse,
    EventsOptions, HashSearchOptions, MempoolResponse, MempoolTransactionResponse,
    MetadataResponse, NetworkIdentifier, NetworkOptionsResponse, NetworkStatusResponse, Operation,
    ParseResponse, PayloadsResponse, PreprocessOptions, PreprocessResponse, PublicKey,
    ResolveTagResponse, RichlistOptions, RichlistResponse, SearchTransactionsResponse, Signature,
    SubmitResponse,
};

use super::wait::WaitForTransaction;

/// Wire shape of a Rosetta error envelope.
///
/// Any response body carrying a `code` field is an error, whatever the HTTP
/// status says.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    code: i64,
    message: String,
    #[serde(default)]
    retriable: bool,
}

/// A typed client for one Mochimo Rosetta node.
///
/// The base URL and network identity are fixed at construction and never
/// mutated. Cloning is cheap; clones share the underlying HTTP connection
/// state.
///
/// # Example
///
/// ```rust,no_run
/// use mochimo_rosetta::RosettaClient;
///
/// # async fn example() -> Result<(), mochimo_rosetta::Error> {
/// let client = RosettaClient::new("http://localhost:8080");
/// let status = client.network_status().await?;
/// println!("current block: {:?}", status.current_block_identifier);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RosettaClient {
    base_url: String,
    network: NetworkIdentifier,
    http: reqwest::Client,
}

impl RosettaClient {
    /// Create a client for the given node URL, scoped to Mochimo mainnet.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_network(base_url, NetworkIdentifier::mainnet())
    }

    /// Create a client scoped to a custom network identity.
    pub fn with_network(base_url: impl Into<String>, network: NetworkIdentifier) -> Self {
        let base_url = base_url.into();
        debug!(
            %base_url,
            blockchain = %network.blockchain,
            network = %network.network,
            "client initialized"
        );
        Self {
            base_url,
            network,
            http: reqwest::Client::new(),
        }
    }

    /// Get the node base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the network identity prefixed onto every request.
    pub fn network(&self) -> &NetworkIdentifier {
        &self.network
    }

    /// Send a POST request and decode the JSON response.
    ///
    /// The body is decoded regardless of HTTP status: the node reports
    /// failures through the error envelope in the body, not the status
    /// line. A decoded object carrying a `code` field fails with
    /// [`Error::Api`]; anything else is returned as `R` unmodified.
    pub async fn call<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<R, Error> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, content_type = "application/json", body = %body, "sending request");

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let text = response.text().await?;
        let data: serde_json::Value = serde_json::from_str(&text)?;
        debug!(%url, status, headers = ?headers, body = %data, "received response");

        if data.get("code").is_some() {
            let envelope: ErrorEnvelope = serde_json::from_value(data)?;
            error!(
                %url,
                status,
                code = envelope.code,
                message = %envelope.message,
                retriable = envelope.retriable,
                "api error"
            );
            return Err(Error::Api {
                code: envelope.code,
                message: envelope.message,
                retriable: envelope.retriable,
            });
        }

        serde_json::from_value(data).map_err(Error::Json)
    }

    // ========================================================================
    // Construction flow
    // ========================================================================

    /// Derive a Mochimo address for a public key and tag.
    ///
    /// The key is always sent with `curve_type: "wotsp"`; Mochimo signs with
    /// no other scheme.
    pub async fn derive(&self, public_key_hex: &str, tag: &str) -> Result<DeriveResponse, Error> {
        debug!(public_key = %public_key_hex, %tag, "deriving address");
        self.call(
            "/construction/derive",
            json!({
                "network_identifier": self.network,
                "public_key": PublicKey::wotsp(public_key_hex),
                "metadata": { "tag": tag },
            }),
        )
        .await
    }

    /// Turn intended operations into the options required for a metadata lookup.
    pub async fn preprocess(
        &self,
        operations: &[Operation],
        metadata: serde_json::Value,
    ) -> Result<PreprocessResponse, Error> {
        debug!(operations = operations.len(), "preprocessing transaction");
        self.call(
            "/construction/preprocess",
            json!({
                "network_identifier": self.network,
                "operations": operations,
                "metadata": metadata,
            }),
        )
        .await
    }

    /// Fetch chain-derived construction metadata and a suggested fee.
    pub async fn metadata(
        &self,
        options: &PreprocessOptions,
        public_keys: &[PublicKey],
    ) -> Result<MetadataResponse, Error> {
        debug!(source_addr = %options.source_addr, "fetching construction metadata");
        self.call(
            "/construction/metadata",
            json!({
                "network_identifier": self.network,
                "options": options,
                "public_keys": public_keys,
            }),
        )
        .await
    }

    /// Build the unsigned transaction and the payloads to sign externally.
    pub async fn payloads(
        &self,
        operations: &[Operation],
        metadata: serde_json::Value,
        public_keys: &[PublicKey],
    ) -> Result<PayloadsResponse, Error> {
        debug!(operations = operations.len(), "fetching signing payloads");
        self.call(
            "/construction/payloads",
            json!({
                "network_identifier": self.network,
                "operations": operations,
                "metadata": metadata,
                "public_keys": public_keys,
            }),
        )
        .await
    }

    /// Attach external signatures to an unsigned transaction.
    pub async fn combine(
        &self,
        unsigned_transaction: &str,
        signatures: &[Signature],
    ) -> Result<CombineResponse, Error> {
        debug!(signatures = signatures.len(), "combining transaction");
        self.call(
            "/construction/combine",
            json!({
                "network_identifier": self.network,
                "unsigned_transaction": unsigned_transaction,
                "signatures": signatures,
            }),
        )
        .await
    }

    /// Broadcast a signed transaction.
    pub async fn submit(&self, signed_transaction: &str) -> Result<SubmitResponse, Error> {
        debug!("submitting transaction");
        self.call(
            "/construction/submit",
            json!({
                "network_identifier": self.network,
                "signed_transaction": signed_transaction,
            }),
        )
        .await
    }

    /// Parse a (signed or unsigned) transaction back into operations.
    pub async fn parse(&self, transaction: &str, signed: bool) -> Result<ParseResponse, Error> {
        debug!(signed, "parsing transaction");
        self.call(
            "/construction/parse",
            json!({
                "network_identifier": self.network,
                "transaction": transaction,
                "signed": signed,
            }),
        )
        .await
    }

    /// Resolve a short tag alias to a full account address.
    pub async fn resolve_tag(&self, tag: &str) -> Result<ResolveTagResponse, Error> {
        self.call(
            "/call",
            json!({
                "network_identifier": self.network,
                "parameters": { "tag": tag },
                "method": "tag_resolve",
            }),
        )
        .await
    }

    // ========================================================================
    // Data endpoints
    // ========================================================================

    /// Get the current balances of an account.
    pub async fn account_balance(&self, address: &str) -> Result<BalanceResponse, Error> {
        self.call(
            "/account/balance",
            json!({
                "network_identifier": self.network,
                "account_identifier": { "address": address },
            }),
        )
        .await
    }

    /// Get a block by index, hash, or latest.
    pub async fn block(&self, identifier: &BlockIdentifier) -> Result<BlockResponse, Error> {
        self.call(
            "/block",
            json!({
                "network_identifier": self.network,
                "block_identifier": identifier,
            }),
        )
        .await
    }

    /// Get one transaction inside a block.
    pub async fn block_transaction(
        &self,
        identifier: &BlockIdentifier,
        transaction_hash: &str,
    ) -> Result<BlockTransactionResponse, Error> {
        self.call(
            "/block/transaction",
            json!({
                "network_identifier": self.network,
                "block_identifier": identifier,
                "transaction_identifier": { "hash": transaction_hash },
            }),
        )
        .await
    }

    /// Get the node's operation types, statuses, and error catalog.
    pub async fn network_options(&self) -> Result<NetworkOptionsResponse, Error> {
        self.call(
            "/network/options",
            json!({ "network_identifier": self.network }),
        )
        .await
    }

    /// Get the node's current and genesis block.
    pub async fn network_status(&self) -> Result<NetworkStatusResponse, Error> {
        self.call(
            "/network/status",
            json!({ "network_identifier": self.network }),
        )
        .await
    }

    /// Search transactions touching an account address.
    pub async fn search_transactions_by_address(
        &self,
        address: &str,
        options: AddressSearchOptions,
    ) -> Result<SearchTransactionsResponse, Error> {
        let mut body = json!({
            "network_identifier": self.network,
            "account_identifier": { "address": address },
        });
        merge_options(&mut body, &options)?;
        self.call("/search/transactions", body).await
    }

    /// Search transactions inside one block.
    pub async fn search_transactions_by_block(
        &self,
        identifier: &BlockIdentifier,
        options: BlockSearchOptions,
    ) -> Result<SearchTransactionsResponse, Error> {
        let mut body = json!({
            "network_identifier": self.network,
            "block_identifier": identifier,
        });
        merge_options(&mut body, &options)?;
        self.call("/search/transactions", body).await
    }

    /// Search for a transaction by its hash.
    pub async fn search_transactions_by_hash(
        &self,
        transaction_hash: &str,
        options: HashSearchOptions,
    ) -> Result<SearchTransactionsResponse, Error> {
        let mut body = json!({
            "network_identifier": self.network,
            "transaction_identifier": { "hash": transaction_hash },
        });
        merge_options(&mut body, &options)?;
        self.call("/search/transactions", body).await
    }

    /// Get block addition/removal events.
    pub async fn events_blocks(
        &self,
        options: EventsOptions,
    ) -> Result<EventsBlocksResponse, Error> {
        let mut body = json!({ "network_identifier": self.network });
        merge_options(&mut body, &options)?;
        self.call("/events/blocks", body).await
    }

    /// Get the accounts with the highest balances.
    pub async fn richlist(&self, options: RichlistOptions) -> Result<RichlistResponse, Error> {
        let mut body = json!({ "network_identifier": self.network });
        merge_options(&mut body, &options)?;
        self.call("/stats/richlist", body).await
    }

    /// List every transaction identifier currently in the mempool.
    pub async fn mempool(&self) -> Result<MempoolResponse, Error> {
        debug!("fetching mempool");
        self.call("/mempool", json!({ "network_identifier": self.network }))
            .await
    }

    /// Look one transaction up in the mempool.
    pub async fn mempool_transaction(
        &self,
        transaction_hash: &str,
    ) -> Result<MempoolTransactionResponse, Error> {
        debug!(hash = %transaction_hash, "fetching mempool transaction");
        self.call(
            "/mempool/transaction",
            json!({
                "network_identifier": self.network,
                "transaction_identifier": { "hash": transaction_hash },
            }),
        )
        .await
    }

    /// Wait for a transaction to appear in the mempool.
    ///
    /// Returns a builder; awaiting it polls
    /// [`mempool_transaction`](Self::mempool_transaction) at a fixed
    /// interval until the transaction is observed or the deadline passes.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use std::time::Duration;
    /// # use mochimo_rosetta::RosettaClient;
    /// # async fn example() -> Result<(), mochimo_rosetta::Error> {
    /// let client = RosettaClient::new("http://localhost:8080");
    /// let tx = client
    ///     .wait_for_transaction("d2e5...")
    ///     .timeout(Duration::from_secs(30))
    ///     .interval(Duration::from_millis(500))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn wait_for_transaction(&self, transaction_hash: impl Into<String>) -> WaitForTransaction {
        WaitForTransaction::new(self.clone(), transaction_hash.into())
    }
}

impl std::fmt::Debug for RosettaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosettaClient")
            .field("base_url", &self.base_url)
            .field("network", &self.network)
            .finish()
    }
}

/// Merge the populated fields of a sparse options record into a JSON body.
fn merge_options(body: &mut serde_json::Value, options: &impl Serialize) -> Result<(), Error> {
    if let serde_json::Value::Object(extra) = serde_json::to_value(options)? {
        if let serde_json::Value::Object(map) = body {
            map.extend(extra);
        }
    }
    Ok(())
}
