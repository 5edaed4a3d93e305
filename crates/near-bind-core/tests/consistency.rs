//! The binding triple must stay internally consistent: the convenience form
//! equals the raw form plus last-result extraction, and the pure action
//! builder must describe exactly what the network forms submit.

use std::sync::Arc;

use near_bind_core::testing::MockChain;
use near_bind_core::{
    Action, CallError, CallOptions, Contract, FinalExecutionStatus, Gas, MethodDescriptor,
    NearToken, DEFAULT_FUNCTION_CALL_GAS,
};
use serde_json::json;

const SET_GREETING: MethodDescriptor = MethodDescriptor::change("set_greeting");
const GET_GREETING: MethodDescriptor = MethodDescriptor::view("get_greeting");

fn greeter() -> Contract<MockChain> {
    let chain = MockChain::new("caller.testnet".parse().unwrap())
        .handle("greeter.testnet", "set_greeting", |args| {
            let greeting = args["greeting"].as_str().ok_or(json!("missing greeting"))?;
            Ok(json!(format!("was: {}", greeting)))
        })
        .handle("greeter.testnet", "get_greeting", |_| Ok(json!("hello")));
    Contract::new(Arc::new(chain), "greeter.testnet".parse().unwrap())
}

#[tokio::test]
async fn convenience_equals_raw_plus_extraction() {
    let contract = greeter();
    let args = json!({"greeting": "howdy"});

    let direct: String = contract
        .call(&SET_GREETING, &args, CallOptions::default())
        .await
        .unwrap();
    let raw = contract
        .call_raw(&SET_GREETING, &args, CallOptions::default())
        .await
        .unwrap();

    assert_eq!(direct, "was: howdy");
    assert_eq!(raw.json::<String>().unwrap(), direct);
}

#[tokio::test]
async fn tx_variant_matches_what_the_network_forms_submit() {
    let contract = greeter();
    let args = json!({"greeting": "howdy"});
    let opts = CallOptions::default()
        .gas(Gas::tera(75))
        .deposit(NearToken(12));

    let built = contract
        .function_call(&SET_GREETING, &args, opts.clone())
        .unwrap();
    contract
        .call_raw(&SET_GREETING, &args, opts)
        .await
        .unwrap();

    let sent = contract.transport().last_submission().unwrap();
    assert_eq!(sent.actions, vec![built]);
}

#[tokio::test]
async fn omitted_gas_and_deposit_use_platform_defaults() {
    let contract = greeter();
    let action = contract
        .function_call(&SET_GREETING, &json!({"greeting": "hi"}), CallOptions::default())
        .unwrap();
    match action {
        Action::FunctionCall(fc) => {
            assert_eq!(fc.gas, DEFAULT_FUNCTION_CALL_GAS);
            assert_eq!(fc.gas, Gas(30_000_000_000_000));
            assert_eq!(fc.deposit, NearToken::ZERO);
        }
        other => panic!("expected function call, got {:?}", other),
    }
}

#[tokio::test]
async fn view_decodes_with_default_json() {
    let contract = greeter();
    let greeting: String = contract.view(&GET_GREETING, &json!({})).await.unwrap();
    assert_eq!(greeting, "hello");
}

#[tokio::test]
async fn view_accepts_custom_encode_and_decode() {
    let contract = greeter();
    let upper: String = contract
        .view_with(
            &GET_GREETING,
            &json!({}),
            |a| serde_json::to_vec(a).map_err(|e| CallError::Encode(e.to_string())),
            |bytes| {
                let s: String = serde_json::from_slice(bytes)
                    .map_err(|e| CallError::Decode(e.to_string()))?;
                Ok(s.to_uppercase())
            },
        )
        .await
        .unwrap();
    assert_eq!(upper, "HELLO");
}

#[tokio::test]
async fn execution_failure_reaches_the_caller_untranslated() {
    let chain = MockChain::new("caller.testnet".parse().unwrap()).handle(
        "greeter.testnet",
        "set_greeting",
        |_| Err(json!({"ActionError": {"kind": "FunctionCallError"}})),
    );
    let contract: Contract<MockChain> =
        Contract::new(Arc::new(chain), "greeter.testnet".parse().unwrap());

    // The convenience form fails with the chain's payload.
    let err = contract
        .call::<_, String>(&SET_GREETING, &json!({}), CallOptions::default())
        .await
        .unwrap_err();
    match err {
        CallError::ExecutionFailure(value) => {
            assert_eq!(value["ActionError"]["kind"], "FunctionCallError")
        }
        other => panic!("expected ExecutionFailure, got {:?}", other),
    }

    // The raw form still hands back the outcome for inspection.
    let raw = contract
        .call_raw(&SET_GREETING, &json!({}), CallOptions::default())
        .await
        .unwrap();
    assert!(matches!(raw.status, FinalExecutionStatus::Failure(_)));
    assert!(raw.total_gas_burnt() > 0);
}

#[tokio::test]
async fn batch_submits_all_actions_in_one_transaction() {
    let contract = greeter();
    let outcome = contract
        .batch()
        .call(&SET_GREETING, &json!({"greeting": "one"}), CallOptions::default())
        .unwrap()
        .call(&SET_GREETING, &json!({"greeting": "two"}), CallOptions::default())
        .unwrap()
        .transfer(NearToken::from_near(1))
        .send()
        .await
        .unwrap();

    let sent = contract.transport().last_submission().unwrap();
    assert_eq!(sent.actions.len(), 3);
    assert_eq!(outcome.receipts_outcome.len(), 3);
    // Last logical result comes from the transfer, which returns nothing.
    assert_eq!(outcome.json::<serde_json::Value>().unwrap(), json!(null));
}

#[tokio::test]
async fn wallet_metadata_is_forwarded_to_the_transport() {
    let contract = greeter();
    let opts = CallOptions::default()
        .wallet_meta("audit-7")
        .wallet_callback_url("https://example.com/done");
    contract
        .call_raw(&SET_GREETING, &json!({"greeting": "hi"}), opts)
        .await
        .unwrap();
    let sent = contract.transport().last_submission().unwrap();
    assert_eq!(sent.routing.meta.as_deref(), Some("audit-7"));
    assert_eq!(
        sent.routing.callback_url.as_deref(),
        Some("https://example.com/done")
    );
}

#[tokio::test]
async fn change_descriptor_cannot_be_viewed() {
    let contract = greeter();
    let err = contract
        .view::<_, String>(&SET_GREETING, &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, CallError::KindMismatch { .. }));
}
