use serde::Serialize;
use std::sync::Arc;

use near_bind_core::{
    AccountId, Action, CallError, CallOptions, Contract, FinalExecutionOutcome, MethodDescriptor,
    Transport,
};

pub const GET_EIGHT: MethodDescriptor = MethodDescriptor::change("get_eight");

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GetEightArgs {}

/// Bindings for the fixed-value example contract, whose single change method
/// always returns the literal `8`.
pub struct FixedValueContract<T: Transport> {
    contract: Contract<T>,
}

impl<T: Transport> FixedValueContract<T> {
    pub fn new(transport: Arc<T>, contract_id: AccountId) -> Self {
        FixedValueContract {
            contract: Contract::new(transport, contract_id),
        }
    }

    pub fn contract(&self) -> &Contract<T> {
        &self.contract
    }

    pub async fn get_eight(&self, options: CallOptions) -> Result<u8, CallError> {
        self.contract.call(&GET_EIGHT, &GetEightArgs {}, options).await
    }

    pub async fn get_eight_raw(
        &self,
        options: CallOptions,
    ) -> Result<FinalExecutionOutcome, CallError> {
        self.contract
            .call_raw(&GET_EIGHT, &GetEightArgs {}, options)
            .await
    }

    pub fn get_eight_tx(&self, options: CallOptions) -> Result<Action, CallError> {
        self.contract.function_call(&GET_EIGHT, &GetEightArgs {}, options)
    }
}
