use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::RpcError;

pub const MAINNET_RPC: &str = "https://rpc.mainnet.near.org";
pub const TESTNET_RPC: &str = "https://rpc.testnet.near.org";

/// Target network preset. Anything beyond the two public endpoints is passed
/// as a custom URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Custom(String),
}

impl Network {
    pub fn endpoint(&self) -> &str {
        match self {
            Network::Mainnet => MAINNET_RPC,
            Network::Testnet => TESTNET_RPC,
            Network::Custom(url) => url,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
            Network::Custom(url) => write!(f, "{}", url),
        }
    }
}

impl FromStr for Network {
    type Err = RpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other if other.starts_with("http://") || other.starts_with("https://") => {
                Ok(Network::Custom(other.to_string()))
            }
            other => Err(RpcError::Config(format!(
                "invalid network: {}. Allowed values: mainnet, testnet, or an http(s) URL",
                other
            ))),
        }
    }
}
