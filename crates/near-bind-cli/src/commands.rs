use anyhow::{Context, Result};
use colored::Colorize;
use std::sync::Arc;

use near_bind_core::{CallOptions, Contract, Gas, MethodDescriptor, NearToken};
use near_bind_rpc::{InMemorySigner, Network, RpcAccount};

/// Descriptor for a method named on the command line. The CLI's descriptors
/// live for the whole process, so leaking the name is the `&'static str` the
/// descriptor records expect.
fn runtime_descriptor(name: String, view: bool) -> MethodDescriptor {
    let name: &'static str = Box::leak(name.into_boxed_str());
    if view {
        MethodDescriptor::view(name)
    } else {
        MethodDescriptor::change(name)
    }
}

fn parse_args(args_json: &str) -> Result<serde_json::Value> {
    serde_json::from_str(args_json).with_context(|| format!("invalid args JSON: {}", args_json))
}

fn options(gas_tera: Option<u64>, deposit_yocto: Option<u128>) -> CallOptions {
    let mut opts = CallOptions::default();
    if let Some(tera) = gas_tera {
        opts = opts.gas(Gas::tera(tera));
    }
    if let Some(yocto) = deposit_yocto {
        opts = opts.deposit(NearToken::from_yocto(yocto));
    }
    opts
}

fn contract(
    network: Network,
    signer_id: Option<String>,
    secret_key: Option<String>,
    contract_id: &str,
) -> Result<Contract<RpcAccount>> {
    let contract_id = contract_id.parse()?;
    // View and tx need no credentials; a throwaway key keeps one code path.
    let signer = match secret_key {
        Some(key) => InMemorySigner::from_secret_key(&key)?,
        None => InMemorySigner::random(),
    };
    let signer_id = signer_id
        .unwrap_or_else(|| "anonymous.near-bind".to_string())
        .parse()?;
    let account = RpcAccount::new(network, signer_id, signer);
    Ok(Contract::new(Arc::new(account), contract_id))
}

pub async fn view(
    network: Network,
    contract_id: &str,
    method: String,
    args_json: &str,
) -> Result<()> {
    let contract = contract(network, None, None, contract_id)?;
    let descriptor = runtime_descriptor(method, true);
    let args = parse_args(args_json)?;

    let result: serde_json::Value = contract.view(&descriptor, &args).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn call(
    network: Network,
    signer_id: Option<String>,
    secret_key: Option<String>,
    contract_id: &str,
    method: String,
    args_json: &str,
    gas_tera: Option<u64>,
    deposit_yocto: Option<u128>,
    raw: bool,
) -> Result<()> {
    if secret_key.is_none() {
        anyhow::bail!("change calls need --secret-key (or NEAR_BIND_SECRET_KEY)");
    }
    let contract = contract(network, signer_id, secret_key, contract_id)?;
    let descriptor = runtime_descriptor(method, false);
    let args = parse_args(args_json)?;
    let opts = options(gas_tera, deposit_yocto);

    if raw {
        let outcome = contract.call_raw(&descriptor, &args, opts).await?;
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        println!(
            "{} {} gas burnt",
            "●".green(),
            outcome.total_gas_burnt()
        );
    } else {
        let result: serde_json::Value = contract.call(&descriptor, &args, opts).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

pub fn tx(
    network: Network,
    contract_id: &str,
    method: String,
    args_json: &str,
    gas_tera: Option<u64>,
    deposit_yocto: Option<u128>,
) -> Result<()> {
    let contract = contract(network, None, None, contract_id)?;
    let descriptor = runtime_descriptor(method, false);
    let args = parse_args(args_json)?;

    let action = contract.function_call(&descriptor, &args, options(gas_tera, deposit_yocto))?;
    println!("{}", "Unsigned action (no network I/O):".bold().cyan());
    println!("{}", serde_json::to_string_pretty(&action)?);
    Ok(())
}
