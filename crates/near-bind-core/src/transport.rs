use async_trait::async_trait;

use crate::account_id::AccountId;
use crate::action::Action;
use crate::error::TransportError;
use crate::outcome::{FinalExecutionOutcome, ViewResult};

/// Wallet-routing metadata forwarded alongside a change call. Non-interactive
/// transports accept and ignore it; a browser-wallet transport would attach it
/// to the redirect it builds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletRouting {
    pub meta: Option<String>,
    pub callback_url: Option<String>,
}

impl WalletRouting {
    pub fn is_empty(&self) -> bool {
        self.meta.is_none() && self.callback_url.is_none()
    }
}

/// The external request/response seam the bindings sit on. One instance wraps
/// an already-authenticated account handle; the bindings own nothing else.
///
/// Implementations decide signing, nonce handling and submission semantics.
/// The binding layer never retries and never inspects errors beyond passing
/// them through.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a read-only query against `contract_id.method_name(args)` and
    /// return the raw result bytes.
    async fn view_function(
        &self,
        contract_id: &AccountId,
        method_name: &str,
        args: Vec<u8>,
    ) -> Result<ViewResult, TransportError>;

    /// Sign and submit `actions` against `receiver_id` as one transaction,
    /// waiting for the final execution outcome. The outcome is returned even
    /// when its final status is a failure; only transport-level problems
    /// (network, rejected submission) are errors.
    async fn sign_and_send(
        &self,
        receiver_id: &AccountId,
        actions: Vec<Action>,
        routing: WalletRouting,
    ) -> Result<FinalExecutionOutcome, TransportError>;
}
