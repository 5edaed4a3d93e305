//! In-process stand-in for a chain endpoint, for integration tests that
//! exercise the bindings without a network. Handlers are plain closures keyed
//! by `(contract, method)`; outcomes are synthesized with deterministic gas
//! figures so raw-outcome inspection is testable.

use async_trait::async_trait;
use base64::Engine;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::account_id::AccountId;
use crate::action::Action;
use crate::error::TransportError;
use crate::outcome::{
    ExecutionOutcome, ExecutionOutcomeWithId, ExecutionStatus, FinalExecutionOutcome,
    FinalExecutionStatus, ViewResult,
};
use crate::transport::{Transport, WalletRouting};
use crate::units::NearToken;

/// Gas figures stamped on synthesized outcomes.
pub const MOCK_TX_GAS_BURNT: u64 = 2_427_979_134_568;
pub const MOCK_RECEIPT_GAS_BURNT: u64 = 3_361_800_521_941;

type Handler = Box<dyn Fn(Value) -> Result<Value, Value> + Send + Sync>;

/// One recorded `sign_and_send` submission, kept for assertions.
#[derive(Debug, Clone)]
pub struct Submission {
    pub receiver_id: AccountId,
    pub actions: Vec<Action>,
    pub routing: WalletRouting,
}

pub struct MockChain {
    signer_id: AccountId,
    handlers: HashMap<(String, String), Handler>,
    submissions: Mutex<Vec<Submission>>,
    nonce: Mutex<u64>,
}

impl MockChain {
    pub fn new(signer_id: AccountId) -> Self {
        MockChain {
            signer_id,
            handlers: HashMap::new(),
            submissions: Mutex::new(Vec::new()),
            nonce: Mutex::new(0),
        }
    }

    /// Register the behavior of `contract_id.method`. The closure receives
    /// the JSON-decoded arguments; `Err` values become chain failures.
    pub fn handle<F>(mut self, contract_id: &str, method: &str, handler: F) -> Self
    where
        F: Fn(Value) -> Result<Value, Value> + Send + Sync + 'static,
    {
        self.handlers
            .insert((contract_id.to_string(), method.to_string()), Box::new(handler));
        self
    }

    /// Everything submitted through `sign_and_send`, in order.
    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn last_submission(&self) -> Option<Submission> {
        self.submissions.lock().unwrap().last().cloned()
    }

    fn dispatch(&self, contract_id: &AccountId, method: &str, args: &[u8]) -> Result<Value, Value> {
        let handler = self
            .handlers
            .get(&(contract_id.to_string(), method.to_string()))
            .ok_or_else(|| {
                Value::String(format!(
                    "MethodNotFound: {} has no method {}",
                    contract_id, method
                ))
            })?;
        let args: Value = if args.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(args)
                .map_err(|e| Value::String(format!("CompilationError: bad args: {}", e)))?
        };
        handler(args)
    }

    fn receipt(&self, id: String, executor: AccountId, status: ExecutionStatus) -> ExecutionOutcomeWithId {
        ExecutionOutcomeWithId {
            id,
            outcome: ExecutionOutcome {
                logs: vec![],
                receipt_ids: vec![],
                gas_burnt: MOCK_RECEIPT_GAS_BURNT,
                tokens_burnt: NearToken(MOCK_RECEIPT_GAS_BURNT as u128 * 100_000_000),
                executor_id: executor,
                status,
            },
        }
    }
}

#[async_trait]
impl Transport for MockChain {
    async fn view_function(
        &self,
        contract_id: &AccountId,
        method_name: &str,
        args: Vec<u8>,
    ) -> Result<ViewResult, TransportError> {
        match self.dispatch(contract_id, method_name, &args) {
            Ok(value) => Ok(ViewResult {
                result: serde_json::to_vec(&value)
                    .map_err(|e| TransportError::InvalidResponse(e.to_string()))?,
                logs: vec![],
            }),
            Err(failure) => Err(TransportError::Rpc(failure)),
        }
    }

    async fn sign_and_send(
        &self,
        receiver_id: &AccountId,
        actions: Vec<Action>,
        routing: WalletRouting,
    ) -> Result<FinalExecutionOutcome, TransportError> {
        self.submissions.lock().unwrap().push(Submission {
            receiver_id: receiver_id.clone(),
            actions: actions.clone(),
            routing,
        });
        let tx_index = {
            let mut nonce = self.nonce.lock().unwrap();
            *nonce += 1;
            *nonce
        };

        let mut receipts = Vec::new();
        let mut last: Result<Value, Value> = Ok(Value::Null);
        for (i, action) in actions.iter().enumerate() {
            let id = format!("receipt-{}-{}", tx_index, i);
            match action {
                Action::FunctionCall(fc) => {
                    last = self.dispatch(receiver_id, &fc.method_name, &fc.args);
                    let status = match &last {
                        Ok(value) => ExecutionStatus::SuccessValue(
                            base64::engine::general_purpose::STANDARD
                                .encode(serde_json::to_vec(value).unwrap_or_default()),
                        ),
                        Err(failure) => ExecutionStatus::Failure(failure.clone()),
                    };
                    receipts.push(self.receipt(id, receiver_id.clone(), status));
                    if last.is_err() {
                        break;
                    }
                }
                Action::Transfer(_) => {
                    last = Ok(Value::Null);
                    receipts.push(self.receipt(
                        id,
                        receiver_id.clone(),
                        ExecutionStatus::SuccessValue(String::new()),
                    ));
                }
            }
        }

        let status = match last {
            Ok(value) => FinalExecutionStatus::SuccessValue(
                base64::engine::general_purpose::STANDARD
                    .encode(serde_json::to_vec(&value).unwrap_or_default()),
            ),
            Err(failure) => FinalExecutionStatus::Failure(failure),
        };

        Ok(FinalExecutionOutcome {
            status,
            transaction_outcome: ExecutionOutcomeWithId {
                id: format!("tx-{}", tx_index),
                outcome: ExecutionOutcome {
                    logs: vec![],
                    receipt_ids: receipts.iter().map(|r| r.id.clone()).collect(),
                    gas_burnt: MOCK_TX_GAS_BURNT,
                    tokens_burnt: NearToken(MOCK_TX_GAS_BURNT as u128 * 100_000_000),
                    executor_id: self.signer_id.clone(),
                    status: ExecutionStatus::SuccessReceiptId(
                        receipts
                            .first()
                            .map(|r| r.id.clone())
                            .unwrap_or_else(|| format!("tx-{}", tx_index)),
                    ),
                },
            },
            receipts_outcome: receipts,
        })
    }
}
