//! Wire types for the Mochimo Rosetta API.
//!
//! Every record here mirrors a Rosetta request or response shape as the node
//! sends it. Records are immutable values: built once, serialized, never
//! mutated. Free-form `metadata` fields stay `serde_json` maps until a caller
//! narrows them explicitly.

mod account;
mod block;
mod construction;
mod mempool;
mod network;
mod operation;
mod search;

pub use account::{
    AccountIdentifier, Amount, BalanceResponse, Currency, ResolveTagResponse, ResolvedTag,
};
pub use block::{Block, BlockIdentifier, BlockResponse, BlockTransactionResponse, Transaction};
pub use construction::{
    CombineResponse, ConstructionMetadata, DeriveResponse, MetadataResponse, ParseResponse,
    PayloadsResponse, PreprocessOptions, PreprocessResponse, Signature, SigningPayload,
    SubmitResponse,
};
pub use mempool::{MempoolResponse, MempoolTransaction, MempoolTransactionResponse};
pub use network::{NetworkIdentifier, NetworkOptionsResponse, NetworkStatusResponse, NetworkVersion};
pub use operation::{
    CURVE_TYPE_WOTSP, Operation, OperationIdentifier, PublicKey, TransactionIdentifier,
};
pub use search::{
    AddressSearchOptions, BlockEvent, BlockEventType, BlockSearchOptions, EventsBlocksResponse,
    EventsOptions, HashSearchOptions, RichlistAccount, RichlistOptions, RichlistResponse,
    SearchTransactionsResponse, TransactionMatch,
};
