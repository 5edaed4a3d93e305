//! near-bind-core — descriptor-driven contract call bindings.
//!
//! A remote contract method is declared once as a [`MethodDescriptor`] and
//! invoked through the generic triple-builder on [`Contract`]: `view`/`call`
//! for the decoded answer, `call_raw` for the full execution outcome, and
//! `function_call` for an unsigned action to batch into a larger transaction.
//! Everything network-facing sits behind the [`Transport`] trait.

pub mod account_id;
pub mod action;
pub mod contract;
pub mod descriptor;
pub mod error;
pub mod outcome;
pub mod testing;
pub mod transport;
pub mod units;

pub use account_id::AccountId;
pub use action::{Action, FunctionCallAction, TransferAction};
pub use contract::{Contract, TransactionBuilder};
pub use descriptor::{CallOptions, MethodDescriptor, MethodKind};
pub use error::{CallError, TransportError};
pub use outcome::{
    ExecutionOutcome, ExecutionOutcomeWithId, ExecutionStatus, FinalExecutionOutcome,
    FinalExecutionStatus, ViewResult,
};
pub use transport::{Transport, WalletRouting};
pub use units::{Gas, NearToken, DEFAULT_FUNCTION_CALL_GAS};
