use serde::Serialize;
use std::sync::Arc;

use near_bind_core::{
    AccountId, Action, CallError, CallOptions, Contract, FinalExecutionOutcome, MethodDescriptor,
    Transport,
};

pub const CALL_ALL: MethodDescriptor = MethodDescriptor::change("call_all");

/// Arguments for `call_all`: whether the `b` callee should fail, and the
/// value handed to the `c` callee (`0` makes `c` fail).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CallAllArgs {
    pub fail_b: bool,
    pub c_value: u8,
}

/// Bindings for the callback-results example contract. `call_all` fans out to
/// two callees and reports, per callee, whether it failed.
pub struct CallbackResultsContract<T: Transport> {
    contract: Contract<T>,
}

impl<T: Transport> CallbackResultsContract<T> {
    pub fn new(transport: Arc<T>, contract_id: AccountId) -> Self {
        CallbackResultsContract {
            contract: Contract::new(transport, contract_id),
        }
    }

    pub fn contract(&self) -> &Contract<T> {
        &self.contract
    }

    pub async fn call_all(
        &self,
        args: CallAllArgs,
        options: CallOptions,
    ) -> Result<Vec<bool>, CallError> {
        self.contract.call(&CALL_ALL, &args, options).await
    }

    pub async fn call_all_raw(
        &self,
        args: CallAllArgs,
        options: CallOptions,
    ) -> Result<FinalExecutionOutcome, CallError> {
        self.contract.call_raw(&CALL_ALL, &args, options).await
    }

    pub fn call_all_tx(&self, args: CallAllArgs, options: CallOptions) -> Result<Action, CallError> {
        self.contract.function_call(&CALL_ALL, &args, options)
    }
}
