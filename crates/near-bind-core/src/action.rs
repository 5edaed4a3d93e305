use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::units::{Gas, NearToken};

/// Unsigned description of one operation against a receiver account, suitable
/// for batching into a multi-action transaction signed elsewhere. Borsh is the
/// wire form the chain consumes; serde is for display and manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    FunctionCall(FunctionCallAction),
    Transfer(TransferAction),
}

/// A contract method invocation: method name, pre-serialized arguments, gas
/// budget and attached deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct FunctionCallAction {
    pub method_name: String,
    #[serde(with = "base64_bytes")]
    pub args: Vec<u8>,
    pub gas: Gas,
    pub deposit: NearToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct TransferAction {
    pub deposit: NearToken,
}

impl Action {
    pub fn function_call(
        method_name: impl Into<String>,
        args: Vec<u8>,
        gas: Gas,
        deposit: NearToken,
    ) -> Self {
        Action::FunctionCall(FunctionCallAction {
            method_name: method_name.into(),
            args,
            gas,
            deposit,
        })
    }

    pub fn transfer(deposit: NearToken) -> Self {
        Action::Transfer(TransferAction { deposit })
    }

    /// Human-readable label for logs and reports.
    pub fn label(&self) -> String {
        match self {
            Action::FunctionCall(fc) => format!("function_call({})", fc.method_name),
            Action::Transfer(t) => format!("transfer({})", t.deposit),
        }
    }
}

/// Serde helper: argument bytes as base64, matching how the RPC carries them.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD
            .decode(s)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_call_serde_carries_args_as_base64() {
        let action = Action::function_call(
            "set_status",
            br#"{"message":"hello"}"#.to_vec(),
            Gas::tera(30),
            NearToken::ZERO,
        );
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["function_call"]["method_name"], "set_status");
        assert_eq!(
            json["function_call"]["args"],
            "eyJtZXNzYWdlIjoiaGVsbG8ifQ=="
        );
        let back: Action = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn borsh_round_trip() {
        let action = Action::function_call("m", vec![1, 2, 3], Gas(1), NearToken(2));
        let bytes = borsh::to_vec(&action).unwrap();
        let back: Action = borsh::from_slice(&bytes).unwrap();
        assert_eq!(back, action);
    }
}
