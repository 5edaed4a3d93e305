use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::account_id::AccountId;
use crate::error::CallError;
use crate::units::NearToken;

/// Final status of a submitted transaction, as reported by the RPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalExecutionStatus {
    NotStarted,
    Started,
    /// Untranslated failure payload from the chain.
    Failure(Value),
    /// Base64 of the last logical return value in the receipt chain.
    SuccessValue(String),
}

/// Status of a single receipt's execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    Unknown,
    Failure(Value),
    SuccessValue(String),
    SuccessReceiptId(String),
}

/// Outcome of executing one transaction or receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(default)]
    pub receipt_ids: Vec<String>,
    pub gas_burnt: u64,
    pub tokens_burnt: NearToken,
    pub executor_id: AccountId,
    pub status: ExecutionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutcomeWithId {
    pub id: String,
    pub outcome: ExecutionOutcome,
}

/// Full receipt/result record returned by a mutating call. The binding layer
/// only ever extracts the final success value from it; receipts are exposed
/// untouched for callers that want to audit gas or partial failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalExecutionOutcome {
    pub status: FinalExecutionStatus,
    pub transaction_outcome: ExecutionOutcomeWithId,
    #[serde(default)]
    pub receipts_outcome: Vec<ExecutionOutcomeWithId>,
}

impl FinalExecutionOutcome {
    /// Total gas burnt across the transaction and all its receipts.
    pub fn total_gas_burnt(&self) -> u64 {
        self.transaction_outcome.outcome.gas_burnt
            + self
                .receipts_outcome
                .iter()
                .map(|r| r.outcome.gas_burnt)
                .sum::<u64>()
    }

    /// Logs from every outcome, in execution order.
    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.transaction_outcome
            .outcome
            .logs
            .iter()
            .chain(self.receipts_outcome.iter().flat_map(|r| &r.outcome.logs))
            .map(String::as_str)
    }

    /// The last logical return value of the receipt chain, base64-decoded.
    /// A `Failure` final status surfaces the chain's failure value unchanged.
    pub fn success_value(&self) -> Result<Vec<u8>, CallError> {
        match &self.status {
            FinalExecutionStatus::SuccessValue(b64) => {
                base64::engine::general_purpose::STANDARD
                    .decode(b64)
                    .map_err(|e| CallError::Decode(format!("invalid base64 in outcome: {}", e)))
            }
            FinalExecutionStatus::Failure(value) => {
                Err(CallError::ExecutionFailure(value.clone()))
            }
            other => Err(CallError::Decode(format!(
                "transaction not finalized: {:?}",
                other
            ))),
        }
    }

    /// Decode the last logical return value as JSON into `R`. An empty body
    /// decodes as JSON `null`, matching methods that return nothing.
    pub fn json<R: serde::de::DeserializeOwned>(&self) -> Result<R, CallError> {
        let bytes = self.success_value()?;
        let slice: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        serde_json::from_slice(slice).map_err(|e| CallError::Decode(e.to_string()))
    }
}

/// Result of a read-only function query: raw return bytes plus log lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewResult {
    pub result: Vec<u8>,
    #[serde(default)]
    pub logs: Vec<String>,
}
