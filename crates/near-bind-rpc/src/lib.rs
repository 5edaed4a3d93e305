//! near-bind-rpc — the concrete JSON-RPC transport behind the bindings.
//!
//! [`RpcAccount`] implements `near_bind_core::Transport`: read-only queries
//! via `query`/`call_function`, mutations via a borsh-encoded, ed25519-signed
//! transaction submitted with `broadcast_tx_commit`.

pub mod account;
pub mod client;
pub mod network;
pub mod signer;
pub mod tx;

pub use account::RpcAccount;
pub use client::JsonRpcClient;
pub use network::{Network, MAINNET_RPC, TESTNET_RPC};
pub use signer::InMemorySigner;
pub use tx::{CryptoHash, PublicKey, Signature, SignedTransaction, Transaction};

use thiserror::Error;

/// Local failures of this crate: key/config parsing and wire encoding.
/// Remote and network failures use `near_bind_core::TransportError`.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("encoding error: {0}")]
    Encoding(String),
}
