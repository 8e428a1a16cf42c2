//! A typed Rust client for the Mochimo Rosetta node API.
//!
//! **mochimo-rosetta** wraps the Rosetta-style JSON-over-HTTP API exposed by
//! Mochimo nodes: chain data queries, mempool inspection, and the multi-step
//! transaction construction flow.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mochimo_rosetta::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = RosettaClient::new("http://localhost:8080");
//!
//!     let status = client.network_status().await?;
//!     println!("tip: {:?}", status.current_block_identifier);
//!
//!     let balance = client.account_balance("0x1234...").await?;
//!     println!("balances: {:?}", balance.balances);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design Principles
//!
//! 1. **Single entry point**: Everything hangs off the [`RosettaClient`]
//! 2. **Configure once**: Base URL and network identity are fixed at construction
//! 3. **Wire-faithful types**: Request and response records mirror the Rosetta
//!    schema; free-form metadata stays a JSON map until the caller narrows it
//! 4. **One attempt per call**: Endpoint methods never retry; only the mempool
//!    wait helper polls, and only against its own deadline
//!
//! # The construction flow
//!
//! The client holds no keys and no construction state. Building a transaction
//! is a stateless sequence of calls, with signing done by an external wallet:
//!
//! ```text
//! derive → preprocess → metadata → payloads → (sign externally) → combine → submit
//! ```
//!
//! After `submit`, [`RosettaClient::wait_for_transaction`] polls the mempool
//! until the transaction propagates or a deadline passes.

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::Error;
pub use types::*;

// Re-export client types
pub use client::{DEFAULT_WAIT_INTERVAL, DEFAULT_WAIT_TIMEOUT, RosettaClient, WaitForTransaction};

/// Prelude module for convenient imports.
///
/// ```
/// use mochimo_rosetta::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{RosettaClient, WaitForTransaction};
    pub use crate::error::Error;
    pub use crate::types::{
        AccountIdentifier, Amount, BlockIdentifier, Currency, NetworkIdentifier, Operation,
        PublicKey, TransactionIdentifier,
    };
}
