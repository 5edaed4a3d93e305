use ed25519_dalek::{Signer as _, SigningKey, VerifyingKey};
use rand::rngs::OsRng;

use crate::tx::{PublicKey, Signature};
use crate::RpcError;

const ED25519_PREFIX: &str = "ed25519:";

/// Holds an ed25519 keypair in memory and signs transaction hashes with it.
/// Keys use the `ed25519:<base58>` text form found in credentials files; the
/// base58 payload is either the 64-byte secret+public pair or the bare
/// 32-byte seed.
#[derive(Debug, Clone)]
pub struct InMemorySigner {
    signing_key: SigningKey,
}

impl InMemorySigner {
    pub fn from_secret_key(secret_key: &str) -> Result<Self, RpcError> {
        let encoded = secret_key.strip_prefix(ED25519_PREFIX).ok_or_else(|| {
            RpcError::Config(format!(
                "secret key must start with {:?}",
                ED25519_PREFIX
            ))
        })?;
        let bytes = bs58::decode(encoded)
            .into_vec()
            .map_err(|e| RpcError::Config(format!("secret key is not valid base58: {}", e)))?;

        let seed: [u8; 32] = match bytes.len() {
            32 => bytes.try_into().unwrap(),
            64 => bytes[..32].try_into().unwrap(),
            n => {
                return Err(RpcError::Config(format!(
                    "secret key must decode to 32 or 64 bytes, got {}",
                    n
                )))
            }
        };
        Ok(InMemorySigner {
            signing_key: SigningKey::from_bytes(&seed),
        })
    }

    pub fn random() -> Self {
        InMemorySigner {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::Ed25519(self.signing_key.verifying_key().to_bytes())
    }

    /// The `ed25519:<base58>` text form of the public key, as the RPC's
    /// access-key queries expect it.
    pub fn public_key_str(&self) -> String {
        format!(
            "{}{}",
            ED25519_PREFIX,
            bs58::encode(self.signing_key.verifying_key().to_bytes()).into_string()
        )
    }

    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature::Ed25519(self.signing_key.sign(message).to_bytes())
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }
}
