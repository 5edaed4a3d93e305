use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Gas units for a function call.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
#[serde(transparent)]
pub struct Gas(pub u64);

/// Platform default gas attached to a change call when the caller does not
/// override it: 30 Tgas.
pub const DEFAULT_FUNCTION_CALL_GAS: Gas = Gas(30_000_000_000_000);

impl Gas {
    pub fn tera(n: u64) -> Self {
        Gas(n * 1_000_000_000_000)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} gas", self.0)
    }
}

/// Token amount in yoctoNEAR. The RPC reports balances as decimal strings
/// since they exceed u64, so that is the serde representation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, BorshSerialize, BorshDeserialize,
)]
pub struct NearToken(pub u128);

impl NearToken {
    pub const ZERO: NearToken = NearToken(0);

    pub fn from_yocto(yocto: u128) -> Self {
        NearToken(yocto)
    }

    pub fn from_near(near: u128) -> Self {
        NearToken(near * 10u128.pow(24))
    }

    pub fn as_yocto(self) -> u128 {
        self.0
    }
}

impl fmt::Display for NearToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} yoctoNEAR", self.0)
    }
}

impl Serialize for NearToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for NearToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        s.parse::<u128>()
            .map(NearToken)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tera_gas_scales() {
        assert_eq!(Gas::tera(30), DEFAULT_FUNCTION_CALL_GAS);
    }

    #[test]
    fn token_serde_uses_decimal_strings() {
        let amount = NearToken::from_near(1);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"1000000000000000000000000\"");
        let back: NearToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn token_serde_rejects_non_numeric() {
        assert!(serde_json::from_str::<NearToken>("\"1.5\"").is_err());
    }
}
