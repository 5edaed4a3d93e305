use serde::{Deserialize, Serialize};

use crate::units::{Gas, NearToken, DEFAULT_FUNCTION_CALL_GAS};

/// Whether a method reads or mutates remote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    /// Read-only query; no signing, no gas spent on mutation.
    View,
    /// State-mutating call; requires signing and gas.
    Change,
}

/// One remote contract method, declared once per binding and never mutated.
/// Binding crates define these as `'static` consts and feed them to the
/// generic triple-builder on [`crate::Contract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: &'static str,
    pub kind: MethodKind,
    pub default_gas: Gas,
    pub default_deposit: NearToken,
}

impl MethodDescriptor {
    pub const fn view(name: &'static str) -> Self {
        MethodDescriptor {
            name,
            kind: MethodKind::View,
            default_gas: DEFAULT_FUNCTION_CALL_GAS,
            default_deposit: NearToken::ZERO,
        }
    }

    pub const fn change(name: &'static str) -> Self {
        MethodDescriptor {
            name,
            kind: MethodKind::Change,
            default_gas: DEFAULT_FUNCTION_CALL_GAS,
            default_deposit: NearToken::ZERO,
        }
    }

    pub const fn with_default_gas(mut self, gas: Gas) -> Self {
        self.default_gas = gas;
        self
    }

    pub const fn with_default_deposit(mut self, deposit: NearToken) -> Self {
        self.default_deposit = deposit;
        self
    }

    pub fn is_view(&self) -> bool {
        self.kind == MethodKind::View
    }
}

/// Per-call overrides. All fields optional; omitted gas and deposit fall back
/// to the descriptor's defaults. Wallet-routing metadata is carried through to
/// the transport, which may ignore it (the non-interactive RPC transport
/// does).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    pub gas: Option<Gas>,
    pub deposit: Option<NearToken>,
    pub wallet_meta: Option<String>,
    pub wallet_callback_url: Option<String>,
}

impl CallOptions {
    pub fn gas(mut self, gas: Gas) -> Self {
        self.gas = Some(gas);
        self
    }

    pub fn deposit(mut self, deposit: NearToken) -> Self {
        self.deposit = Some(deposit);
        self
    }

    pub fn wallet_meta(mut self, meta: impl Into<String>) -> Self {
        self.wallet_meta = Some(meta.into());
        self
    }

    pub fn wallet_callback_url(mut self, url: impl Into<String>) -> Self {
        self.wallet_callback_url = Some(url.into());
        self
    }
}
