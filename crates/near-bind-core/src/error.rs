use serde_json::Value;
use thiserror::Error;

use crate::descriptor::MethodKind;

/// Failures produced by the transport layer. Remote error payloads are
/// carried as-is; nothing is retried or translated here.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("rpc returned error: {0}")]
    Rpc(Value),
    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Failures surfaced by a binding call.
#[derive(Error, Debug)]
pub enum CallError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The chain executed the transaction and reported a failure status.
    /// The payload is the chain's failure value, untouched.
    #[error("execution failed: {0}")]
    ExecutionFailure(Value),
    #[error("failed to encode arguments: {0}")]
    Encode(String),
    #[error("failed to decode result: {0}")]
    Decode(String),
    #[error("method {method:?} is declared {declared:?} but was invoked as {invoked:?}")]
    KindMismatch {
        method: &'static str,
        declared: MethodKind,
        invoked: MethodKind,
    },
    #[error("invalid account id: {0}")]
    InvalidAccountId(String),
}
