use base64::Engine;
use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use near_bind_core::{AccountId, Action};

use crate::RpcError;

/// 32-byte hash in base58 text form, as block hashes arrive from the RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CryptoHash(pub [u8; 32]);

impl FromStr for CryptoHash {
    type Err = RpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| RpcError::Config(format!("hash is not valid base58: {}", e)))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| RpcError::Config(format!("hash must be 32 bytes, got {}", v.len())))?;
        Ok(CryptoHash(bytes))
    }
}

impl fmt::Display for CryptoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum PublicKey {
    Ed25519([u8; 32]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Signature {
    Ed25519([u8; 64]),
}

/// Unsigned transaction: one signer, one receiver, an ordered action batch,
/// and the freshness anchors (nonce, recent block hash) the chain requires.
#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct Transaction {
    pub signer_id: AccountId,
    pub public_key: PublicKey,
    pub nonce: u64,
    pub receiver_id: AccountId,
    pub block_hash: CryptoHash,
    pub actions: Vec<Action>,
}

impl Transaction {
    /// sha256 of the borsh wire form; this is what gets signed.
    pub fn hash(&self) -> Result<CryptoHash, RpcError> {
        let bytes = borsh::to_vec(self)
            .map_err(|e| RpcError::Encoding(format!("transaction borsh encoding: {}", e)))?;
        let digest = Sha256::digest(&bytes);
        Ok(CryptoHash(digest.into()))
    }
}

#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct SignedTransaction {
    pub transaction: Transaction,
    pub signature: Signature,
}

impl SignedTransaction {
    /// Base64 of the borsh wire form, as `broadcast_tx_commit` consumes it.
    pub fn to_base64(&self) -> Result<String, RpcError> {
        let bytes = borsh::to_vec(self)
            .map_err(|e| RpcError::Encoding(format!("signed transaction borsh encoding: {}", e)))?;
        Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
    }
}
