use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::account_id::AccountId;
use crate::action::Action;
use crate::descriptor::{CallOptions, MethodDescriptor, MethodKind};
use crate::error::CallError;
use crate::outcome::{FinalExecutionOutcome, ViewResult};
use crate::transport::{Transport, WalletRouting};

/// A typed handle on one deployed contract: an authenticated transport plus
/// the contract's account id, nothing else. Every remote method a binding
/// crate declares flows through the three builders here.
///
/// The three call forms serve three caller needs with one argument shape:
/// [`Contract::call`] for the decoded answer, [`Contract::call_raw`] for the
/// full receipt record, and [`Contract::function_call`] for an unsigned
/// building block that never touches the network.
pub struct Contract<T: Transport> {
    transport: Arc<T>,
    contract_id: AccountId,
}

impl<T: Transport> Clone for Contract<T> {
    fn clone(&self) -> Self {
        Contract {
            transport: self.transport.clone(),
            contract_id: self.contract_id.clone(),
        }
    }
}

impl<T: Transport> Contract<T> {
    pub fn new(transport: Arc<T>, contract_id: AccountId) -> Self {
        Contract {
            transport,
            contract_id,
        }
    }

    pub fn contract_id(&self) -> &AccountId {
        &self.contract_id
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Read-only query with default JSON (de)serialization.
    pub async fn view<A, R>(&self, method: &MethodDescriptor, args: &A) -> Result<R, CallError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.view_with(
            method,
            args,
            |a| serde_json::to_vec(a).map_err(|e| CallError::Encode(e.to_string())),
            |bytes| serde_json::from_slice(bytes).map_err(|e| CallError::Decode(e.to_string())),
        )
        .await
    }

    /// Read-only query with caller-supplied argument encoding and result
    /// decoding, for contracts that speak something other than JSON on a
    /// given method.
    pub async fn view_with<A, R, E, D>(
        &self,
        method: &MethodDescriptor,
        args: &A,
        encode: E,
        decode: D,
    ) -> Result<R, CallError>
    where
        A: ?Sized,
        E: FnOnce(&A) -> Result<Vec<u8>, CallError>,
        D: FnOnce(&[u8]) -> Result<R, CallError>,
    {
        self.check_kind(method, MethodKind::View)?;
        let args = encode(args)?;
        debug!(contract = %self.contract_id, method = method.name, "view call");
        let ViewResult { result, logs } = self
            .transport
            .view_function(&self.contract_id, method.name, args)
            .await?;
        for line in &logs {
            debug!(contract = %self.contract_id, method = method.name, log = %line);
        }
        decode(&result)
    }

    /// Submit a change call and return only its decoded logical result, the
    /// last value of the outcome's receipt chain. A failed execution surfaces
    /// the chain's failure payload as [`CallError::ExecutionFailure`].
    pub async fn call<A, R>(
        &self,
        method: &MethodDescriptor,
        args: &A,
        options: CallOptions,
    ) -> Result<R, CallError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call_raw(method, args, options).await?.json()
    }

    /// Submit the same change call but hand back the full, unprocessed
    /// outcome, including outcomes whose final status is a failure, so the
    /// caller can inspect receipts, gas burnt, or partial failures.
    pub async fn call_raw<A>(
        &self,
        method: &MethodDescriptor,
        args: &A,
        options: CallOptions,
    ) -> Result<FinalExecutionOutcome, CallError>
    where
        A: Serialize + ?Sized,
    {
        let routing = WalletRouting {
            meta: options.wallet_meta.clone(),
            callback_url: options.wallet_callback_url.clone(),
        };
        let action = self.function_call(method, args, options)?;
        debug!(contract = %self.contract_id, method = method.name, "change call");
        let outcome = self
            .transport
            .sign_and_send(&self.contract_id, vec![action], routing)
            .await?;
        Ok(outcome)
    }

    /// Build the unsigned action `call`/`call_raw` would submit, without any
    /// network I/O. Omitted gas and deposit take the descriptor's defaults.
    pub fn function_call<A>(
        &self,
        method: &MethodDescriptor,
        args: &A,
        options: CallOptions,
    ) -> Result<Action, CallError>
    where
        A: Serialize + ?Sized,
    {
        self.check_kind(method, MethodKind::Change)?;
        let args = serde_json::to_vec(args).map_err(|e| CallError::Encode(e.to_string()))?;
        Ok(Action::function_call(
            method.name,
            args,
            options.gas.unwrap_or(method.default_gas),
            options.deposit.unwrap_or(method.default_deposit),
        ))
    }

    /// Start composing a multi-action transaction against this contract.
    pub fn batch(&self) -> TransactionBuilder<'_, T> {
        TransactionBuilder {
            contract: self,
            actions: Vec::new(),
            routing: WalletRouting::default(),
        }
    }

    fn check_kind(&self, method: &MethodDescriptor, invoked: MethodKind) -> Result<(), CallError> {
        if method.kind != invoked {
            return Err(CallError::KindMismatch {
                method: method.name,
                declared: method.kind,
                invoked,
            });
        }
        Ok(())
    }
}

/// Accumulates unsigned actions against one receiver and submits them as a
/// single signed transaction. The chain executes the batch atomically; this
/// builder adds no retry or rollback of its own.
pub struct TransactionBuilder<'a, T: Transport> {
    contract: &'a Contract<T>,
    actions: Vec<Action>,
    routing: WalletRouting,
}

impl<'a, T: Transport> TransactionBuilder<'a, T> {
    /// Append a function-call action built from a change descriptor.
    pub fn call<A>(
        mut self,
        method: &MethodDescriptor,
        args: &A,
        options: CallOptions,
    ) -> Result<Self, CallError>
    where
        A: Serialize + ?Sized,
    {
        let action = self.contract.function_call(method, args, options)?;
        self.actions.push(action);
        Ok(self)
    }

    /// Append an already-built action.
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Append a plain token transfer.
    pub fn transfer(mut self, deposit: crate::units::NearToken) -> Self {
        self.actions.push(Action::transfer(deposit));
        self
    }

    pub fn wallet_meta(mut self, meta: impl Into<String>) -> Self {
        self.routing.meta = Some(meta.into());
        self
    }

    /// The actions accumulated so far, in submission order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Sign and submit the batch, returning the full outcome.
    pub async fn send(self) -> Result<FinalExecutionOutcome, CallError> {
        debug!(
            contract = %self.contract.contract_id,
            actions = self.actions.len(),
            "submitting batch"
        );
        let outcome = self
            .contract
            .transport
            .sign_and_send(&self.contract.contract_id, self.actions, self.routing)
            .await?;
        Ok(outcome)
    }
}
