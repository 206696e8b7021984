//! Fee system tests
//!
//! Fee = max(amount * fee_rate_bps / 10000, minimum_fee)

use cosmwasm_std::{coins, Addr, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use liquidity_bridge::msg::{
    CalculateFeeResponse, ExecuteMsg, FeeConfigResponse, InstantiateMsg, QueryMsg,
};

const DENOM: &str = "uluna";
const UNIT: u128 = 1_000_000;

fn setup() -> (App, Addr, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &Addr::unchecked("terra1sender"), coins(100 * UNIT, DENOM))
            .unwrap();
    });

    let code = ContractWrapper::new(
        liquidity_bridge::contract::execute,
        liquidity_bridge::contract::instantiate,
        liquidity_bridge::contract::query,
    );
    let code_id = app.store_code(Box::new(code));

    let contract = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: None,
                chain_id: 1,
                denom: DENOM.to_string(),
                fee_rate_bps: 30,
                minimum_fee: Uint128::from(UNIT / 10_000),
                enable_status_reset: false,
            },
            &[],
            "bridge",
            None,
        )
        .unwrap();

    (app, owner, contract)
}

fn calculate_fee(app: &App, contract: &Addr, amount: u128) -> CalculateFeeResponse {
    app.wrap()
        .query_wasm_smart(
            contract,
            &QueryMsg::CalculateFee {
                amount: Uint128::from(amount),
            },
        )
        .unwrap()
}

#[test]
fn test_proportional_fee() {
    let (app, _owner, contract) = setup();

    let res = calculate_fee(&app, &contract, UNIT);
    assert_eq!(res.fee, Uint128::from(3_000u128));
    assert_eq!(res.net_amount, Uint128::from(997_000u128));

    let res = calculate_fee(&app, &contract, 100 * UNIT);
    assert_eq!(res.fee, Uint128::from(300_000u128));
}

#[test]
fn test_minimum_fee_applies_to_small_amounts() {
    let (app, _owner, contract) = setup();

    // 0.3% of 1000 is 3, below the 100 minimum
    let res = calculate_fee(&app, &contract, 1_000);
    assert_eq!(res.fee, Uint128::from(100u128));
    assert_eq!(res.net_amount, Uint128::from(900u128));

    // Crossover: 0.3% of 33_334 rounds down to 100
    let res = calculate_fee(&app, &contract, 33_334);
    assert_eq!(res.fee, Uint128::from(100u128));
    let res = calculate_fee(&app, &contract, 40_000);
    assert_eq!(res.fee, Uint128::from(120u128));
}

#[test]
fn test_fee_consuming_whole_amount_reports_zero_net() {
    let (app, _owner, contract) = setup();

    let res = calculate_fee(&app, &contract, 50);
    assert_eq!(res.fee, Uint128::from(100u128));
    assert_eq!(res.net_amount, Uint128::zero());
}

#[test]
fn test_set_fee_config() {
    let (mut app, owner, contract) = setup();

    app.execute_contract(
        owner,
        contract.clone(),
        &ExecuteMsg::SetFeeConfig {
            fee_rate_bps: 50,
            minimum_fee: Uint128::from(1_000u128),
        },
        &[],
    )
    .unwrap();

    let config: FeeConfigResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::FeeConfig {})
        .unwrap();
    assert_eq!(config.fee_rate_bps, 50);
    assert_eq!(config.minimum_fee, Uint128::from(1_000u128));

    assert_eq!(calculate_fee(&app, &contract, UNIT).fee, Uint128::from(5_000u128));
    assert_eq!(calculate_fee(&app, &contract, 1_000).fee, Uint128::from(1_000u128));
}

#[test]
fn test_new_fee_applies_to_next_transfer() {
    let (mut app, owner, contract) = setup();

    app.execute_contract(
        owner,
        contract.clone(),
        &ExecuteMsg::SetFeeConfig {
            fee_rate_bps: 100,
            minimum_fee: Uint128::zero(),
        },
        &[],
    )
    .unwrap();

    let res = app
        .execute_contract(
            Addr::unchecked("terra1sender"),
            contract.clone(),
            &ExecuteMsg::InitiateTransfer {
                receiver: "terra1receiver".to_string(),
                destination_chain_id: 2,
            },
            &coins(UNIT, DENOM),
        )
        .unwrap();

    let fee = res
        .events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == "fee")
        .unwrap();
    assert_eq!(fee.value, "10000");
}

#[test]
fn test_zero_fee_configuration() {
    let (mut app, owner, contract) = setup();

    app.execute_contract(
        owner,
        contract.clone(),
        &ExecuteMsg::SetFeeConfig {
            fee_rate_bps: 0,
            minimum_fee: Uint128::zero(),
        },
        &[],
    )
    .unwrap();

    let res = calculate_fee(&app, &contract, 1);
    assert!(res.fee.is_zero());
    assert_eq!(res.net_amount, Uint128::from(1u128));
}

#[test]
fn test_set_fee_config_rejects_rate_above_100_percent() {
    let (mut app, owner, contract) = setup();

    let res = app.execute_contract(
        owner.clone(),
        contract.clone(),
        &ExecuteMsg::SetFeeConfig {
            fee_rate_bps: 10_001,
            minimum_fee: Uint128::zero(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid fee rate"), "got: {}", err_str);

    // 100% is accepted but leaves nothing to transfer
    app.execute_contract(
        owner,
        contract.clone(),
        &ExecuteMsg::SetFeeConfig {
            fee_rate_bps: 10_000,
            minimum_fee: Uint128::zero(),
        },
        &[],
    )
    .unwrap();
    let res = calculate_fee(&app, &contract, UNIT);
    assert_eq!(res.fee, Uint128::from(UNIT));
    assert!(res.net_amount.is_zero());
}

#[test]
fn test_set_fee_config_unauthorized() {
    let (mut app, _owner, contract) = setup();

    let res = app.execute_contract(
        Addr::unchecked("terra1sender"),
        contract.clone(),
        &ExecuteMsg::SetFeeConfig {
            fee_rate_bps: 0,
            minimum_fee: Uint128::zero(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"), "got: {}", err_str);

    let config: FeeConfigResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::FeeConfig {})
        .unwrap();
    assert_eq!(config.fee_rate_bps, 30);
}
