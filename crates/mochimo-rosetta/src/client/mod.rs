//! Client module for the Mochimo Rosetta API.
//!
//! - [`RosettaClient`] — the single entry point: transport plus one typed
//!   method per remote endpoint
//! - [`WaitForTransaction`] — fluent builder for polling the mempool until
//!   a submitted transaction propagates

mod rosetta;
mod wait;

pub use rosetta::RosettaClient;
pub use wait::{DEFAULT_WAIT_INTERVAL, DEFAULT_WAIT_TIMEOUT, WaitForTransaction};
