use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CallError;

/// NEAR account identifier: lowercase alphanumeric parts separated by dots,
/// each part may contain `_` and `-`, total length 2..=64.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Result<Self, CallError> {
        let id = id.into();
        validate(&id).map_err(CallError::InvalidAccountId)?;
        Ok(AccountId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate(id: &str) -> Result<(), String> {
    if id.len() < 2 || id.len() > 64 {
        return Err(format!(
            "account id must be 2..=64 characters, got {} ({:?})",
            id.len(),
            id
        ));
    }
    for part in id.split('.') {
        if part.is_empty() {
            return Err(format!("account id has an empty part: {:?}", id));
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_alphanumeric() || !bytes[bytes.len() - 1].is_ascii_alphanumeric() {
            return Err(format!(
                "account id parts must start and end alphanumeric: {:?}",
                id
            ));
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'_' || *b == b'-')
        {
            return Err(format!(
                "account id may only contain lowercase alphanumerics, '_' and '-': {:?}",
                id
            ));
        }
    }
    Ok(())
}

impl FromStr for AccountId {
    type Err = CallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountId::new(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
