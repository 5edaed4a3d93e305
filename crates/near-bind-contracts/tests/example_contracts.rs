//! End-to-end tests against the in-process mock chain, mirroring the
//! original integration scripts for the two example contracts.

use std::sync::Arc;

use near_bind_contracts::{CallAllArgs, CallbackResultsContract, FixedValueContract};
use near_bind_core::testing::MockChain;
use near_bind_core::{Action, CallOptions, Gas, NearToken, DEFAULT_FUNCTION_CALL_GAS};
use serde_json::json;

fn chain() -> Arc<MockChain> {
    let chain = MockChain::new("tester.testnet".parse().unwrap())
        .handle("fixed-value.testnet", "get_eight", |_| Ok(json!(8)))
        .handle("callback-results.testnet", "call_all", |args| {
            let fail_b = args["fail_b"].as_bool().ok_or(json!("missing fail_b"))?;
            let c_value = args["c_value"].as_u64().ok_or(json!("missing c_value"))?;
            Ok(json!([fail_b, c_value == 0]))
        });
    Arc::new(chain)
}

fn fixed_value(chain: &Arc<MockChain>) -> FixedValueContract<MockChain> {
    FixedValueContract::new(chain.clone(), "fixed-value.testnet".parse().unwrap())
}

fn callback_results(chain: &Arc<MockChain>) -> CallbackResultsContract<MockChain> {
    CallbackResultsContract::new(chain.clone(), "callback-results.testnet".parse().unwrap())
}

#[tokio::test]
async fn get_eight_returns_exactly_eight() {
    let contract = fixed_value(&chain());
    let value = contract.get_eight(CallOptions::default()).await.unwrap();
    assert_eq!(value, 8);
}

#[tokio::test]
async fn get_eight_raw_agrees_with_the_convenience_form() {
    let chain = chain();
    let contract = fixed_value(&chain);
    let direct = contract.get_eight(CallOptions::default()).await.unwrap();
    let raw = contract.get_eight_raw(CallOptions::default()).await.unwrap();
    assert_eq!(raw.json::<u8>().unwrap(), direct);
    assert!(raw.total_gas_burnt() > 0);
    assert_eq!(raw.receipts_outcome.len(), 1);
}

#[tokio::test]
async fn get_eight_tx_builds_the_submitted_action() {
    let chain = chain();
    let contract = fixed_value(&chain);
    let built = contract.get_eight_tx(CallOptions::default()).unwrap();
    contract.get_eight(CallOptions::default()).await.unwrap();
    let sent = chain.last_submission().unwrap();
    assert_eq!(sent.actions, vec![built.clone()]);
    match built {
        Action::FunctionCall(fc) => {
            assert_eq!(fc.method_name, "get_eight");
            assert_eq!(fc.args, b"{}");
            assert_eq!(fc.gas, DEFAULT_FUNCTION_CALL_GAS);
            assert_eq!(fc.deposit, NearToken::ZERO);
        }
        other => panic!("expected function call, got {:?}", other),
    }
}

#[tokio::test]
async fn call_all_covers_the_four_documented_combinations() {
    let contract = callback_results(&chain());
    let table = [
        (false, 1, vec![false, false]),
        (false, 0, vec![false, true]),
        (true, 1, vec![true, false]),
        (true, 0, vec![true, true]),
    ];
    for (fail_b, c_value, expected) in table {
        let result = contract
            .call_all(CallAllArgs { fail_b, c_value }, CallOptions::default())
            .await
            .unwrap();
        assert_eq!(
            result, expected,
            "fail_b={}, c_value={}",
            fail_b, c_value
        );
    }
}

#[tokio::test]
async fn call_all_tx_matches_the_network_form_with_overrides() {
    let chain = chain();
    let contract = callback_results(&chain);
    let args = CallAllArgs {
        fail_b: true,
        c_value: 0,
    };
    let opts = CallOptions::default().gas(Gas::tera(90)).deposit(NearToken(3));

    let built = contract.call_all_tx(args, opts.clone()).unwrap();
    contract.call_all_raw(args, opts).await.unwrap();

    let sent = chain.last_submission().unwrap();
    assert_eq!(sent.actions, vec![built.clone()]);
    match built {
        Action::FunctionCall(fc) => {
            assert_eq!(fc.method_name, "call_all");
            assert_eq!(fc.args, br#"{"fail_b":true,"c_value":0}"#);
            assert_eq!(fc.gas, Gas::tera(90));
            assert_eq!(fc.deposit, NearToken(3));
        }
        other => panic!("expected function call, got {:?}", other),
    }
}
