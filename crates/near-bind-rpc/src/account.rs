use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use near_bind_core::{
    AccountId, Action, FinalExecutionOutcome, Transport, TransportError, ViewResult, WalletRouting,
};

use crate::client::JsonRpcClient;
use crate::network::Network;
use crate::signer::InMemorySigner;
use crate::tx::{CryptoHash, SignedTransaction, Transaction};

#[derive(Debug, Deserialize)]
struct CallFunctionResponse {
    result: Vec<u8>,
    #[serde(default)]
    logs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AccessKeyResponse {
    nonce: u64,
}

/// An authenticated account handle over JSON-RPC: the [`Transport`] the
/// bindings construct against. Holds the client, the signing key and the
/// signer's account id; nonces and block hashes are fetched fresh per
/// transaction rather than cached.
///
/// This transport is non-interactive, so wallet-routing metadata is accepted
/// and ignored.
pub struct RpcAccount {
    client: JsonRpcClient,
    signer: InMemorySigner,
    signer_id: AccountId,
}

impl RpcAccount {
    pub fn new(network: Network, signer_id: AccountId, signer: InMemorySigner) -> Self {
        RpcAccount {
            client: JsonRpcClient::new(network.endpoint()),
            signer,
            signer_id,
        }
    }

    pub fn with_client(client: JsonRpcClient, signer_id: AccountId, signer: InMemorySigner) -> Self {
        RpcAccount {
            client,
            signer,
            signer_id,
        }
    }

    pub fn signer_id(&self) -> &AccountId {
        &self.signer_id
    }

    async fn fetch_nonce(&self) -> Result<u64, TransportError> {
        let result = self
            .client
            .call(
                "query",
                json!({
                    "request_type": "view_access_key",
                    "finality": "final",
                    "account_id": &self.signer_id,
                    "public_key": self.signer.public_key_str(),
                }),
            )
            .await?;
        let access_key: AccessKeyResponse = serde_json::from_value(result)
            .map_err(|e| TransportError::InvalidResponse(format!("access key: {}", e)))?;
        Ok(access_key.nonce)
    }

    async fn fetch_block_hash(&self) -> Result<CryptoHash, TransportError> {
        let result = self
            .client
            .call("block", json!({"finality": "final"}))
            .await?;
        let hash = result
            .get("header")
            .and_then(|h| h.get("hash"))
            .and_then(|h| h.as_str())
            .ok_or_else(|| TransportError::InvalidResponse("block header hash missing".into()))?;
        hash.parse()
            .map_err(|e| TransportError::InvalidResponse(format!("block hash: {}", e)))
    }
}

#[async_trait]
impl Transport for RpcAccount {
    async fn view_function(
        &self,
        contract_id: &AccountId,
        method_name: &str,
        args: Vec<u8>,
    ) -> Result<ViewResult, TransportError> {
        let result = self
            .client
            .call(
                "query",
                json!({
                    "request_type": "call_function",
                    "finality": "optimistic",
                    "account_id": contract_id,
                    "method_name": method_name,
                    "args_base64": base64::engine::general_purpose::STANDARD.encode(&args),
                }),
            )
            .await?;

        // Contract-level view failures arrive inside the result body.
        if let Some(error) = result.get("error") {
            return Err(TransportError::Rpc(error.clone()));
        }

        let response: CallFunctionResponse = serde_json::from_value(result)
            .map_err(|e| TransportError::InvalidResponse(format!("call_function: {}", e)))?;
        Ok(ViewResult {
            result: response.result,
            logs: response.logs,
        })
    }

    async fn sign_and_send(
        &self,
        receiver_id: &AccountId,
        actions: Vec<Action>,
        routing: WalletRouting,
    ) -> Result<FinalExecutionOutcome, TransportError> {
        if !routing.is_empty() {
            debug!(signer = %self.signer_id, "wallet routing metadata ignored by rpc transport");
        }

        let nonce = self.fetch_nonce().await?;
        let block_hash = self.fetch_block_hash().await?;

        let transaction = Transaction {
            signer_id: self.signer_id.clone(),
            public_key: self.signer.public_key(),
            nonce: nonce + 1,
            receiver_id: receiver_id.clone(),
            block_hash,
            actions,
        };
        let hash = transaction
            .hash()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let signed = SignedTransaction {
            signature: self.signer.sign(&hash.0),
            transaction,
        };
        let encoded = signed
            .to_base64()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        debug!(signer = %self.signer_id, receiver = %receiver_id, nonce = nonce + 1, "broadcasting transaction");
        let result = self
            .client
            .call("broadcast_tx_commit", json!([encoded]))
            .await?;
        serde_json::from_value(result)
            .map_err(|e| TransportError::InvalidResponse(format!("execution outcome: {}", e)))
    }
}
