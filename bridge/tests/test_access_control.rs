//! Access control tests: owner-only operations and ownership transfer.

use cosmwasm_std::{coins, Addr, Binary, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use liquidity_bridge::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, OwnerResponse, QueryMsg};

const DENOM: &str = "uluna";
const UNIT: u128 = 1_000_000;

fn setup() -> (App, Addr, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");

    app.init_modules(|router, _, storage| {
        for name in ["terra1owner", "terra1provider", "terra1attacker"] {
            router
                .bank
                .init_balance(storage, &Addr::unchecked(name), coins(100 * UNIT, DENOM))
                .unwrap();
        }
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
                minimum_fee: Uint128::from(100u128),
                enable_status_reset: true,
            },
            &[],
            "bridge",
            None,
        )
        .unwrap();

    // Liquidity and some fee income so privileged paths would otherwise succeed
    app.execute_contract(
        Addr::unchecked("terra1provider"),
        contract.clone(),
        &ExecuteMsg::AddLiquidity {},
        &coins(10 * UNIT, DENOM),
    )
    .unwrap();
    app.execute_contract(
        Addr::unchecked("terra1provider"),
        contract.clone(),
        &ExecuteMsg::InitiateTransfer {
            receiver: "terra1receiver".to_string(),
            destination_chain_id: 2,
        },
        &coins(UNIT, DENOM),
    )
    .unwrap();

    (app, owner, contract)
}

fn privileged_messages(new_owner: &str) -> Vec<ExecuteMsg> {
    vec![
        ExecuteMsg::CompleteTransfer {
            transfer_id: Binary::from(vec![0x11; 32]),
            receiver: "terra1attacker".to_string(),
            amount: Uint128::from(UNIT),
        },
        ExecuteMsg::WithdrawFees {
            amount: Uint128::from(1_000u128),
            recipient: Some("terra1attacker".to_string()),
        },
        ExecuteMsg::SetFeeConfig {
            fee_rate_bps: 0,
            minimum_fee: Uint128::zero(),
        },
        ExecuteMsg::ResetTransferStatus {
            transfer_id: Binary::from(vec![0x11; 32]),
        },
        ExecuteMsg::TransferOwnership {
            new_owner: new_owner.to_string(),
        },
        ExecuteMsg::Pause {},
        ExecuteMsg::Unpause {},
    ]
}

fn owner_of(app: &App, contract: &Addr) -> Addr {
    let res: OwnerResponse = app
        .wrap()
        .query_wasm_smart(contract, &QueryMsg::Owner {})
        .unwrap();
    res.owner
}

#[test]
fn test_privileged_operations_reject_non_owner() {
    let (mut app, owner, contract) = setup();
    let attacker = Addr::unchecked("terra1attacker");
    let attacker_before = app
        .wrap()
        .query_balance(&attacker, DENOM)
        .unwrap()
        .amount;

    for msg in privileged_messages("terra1attacker") {
        let res = app.execute_contract(attacker.clone(), contract.clone(), &msg, &[]);
        let err_str = res.unwrap_err().root_cause().to_string();
        assert!(err_str.contains("Unauthorized"), "{:?} got: {}", msg, err_str);
    }

    assert_eq!(owner_of(&app, &contract), owner);
    assert_eq!(
        app.wrap().query_balance(&attacker, DENOM).unwrap().amount,
        attacker_before
    );
}

#[test]
fn test_transfer_ownership() {
    let (mut app, owner, contract) = setup();
    let new_owner = Addr::unchecked("terra1newowner");

    let res = app
        .execute_contract(
            owner.clone(),
            contract.clone(),
            &ExecuteMsg::TransferOwnership {
                new_owner: new_owner.to_string(),
            },
            &[],
        )
        .unwrap();
    let wasm = res.events.iter().find(|e| e.ty == "wasm").unwrap();
    assert!(wasm
        .attributes
        .iter()
        .any(|a| a.key == "previous_owner" && a.value == owner.as_str()));
    assert!(wasm
        .attributes
        .iter()
        .any(|a| a.key == "new_owner" && a.value == new_owner.as_str()));

    assert_eq!(owner_of(&app, &contract), new_owner);

    // Old owner lost every privilege
    let res = app.execute_contract(owner.clone(), contract.clone(), &ExecuteMsg::Pause {}, &[]);
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"), "got: {}", err_str);

    // New owner holds them
    app.execute_contract(new_owner.clone(), contract.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();
    app.execute_contract(
        new_owner.clone(),
        contract.clone(),
        &ExecuteMsg::CompleteTransfer {
            transfer_id: Binary::from(vec![0x22; 32]),
            receiver: "terra1receiver".to_string(),
            amount: Uint128::from(UNIT),
        },
        &[],
    )
    .unwrap();
}

#[test]
fn test_transfer_ownership_to_empty_address_fails() {
    let (mut app, owner, contract) = setup();

    for bad in ["", "   "] {
        let res = app.execute_contract(
            owner.clone(),
            contract.clone(),
            &ExecuteMsg::TransferOwnership {
                new_owner: bad.to_string(),
            },
            &[],
        );
        let err_str = res.unwrap_err().root_cause().to_string();
        assert!(err_str.contains("Invalid address"), "got: {}", err_str);
    }

    assert_eq!(owner_of(&app, &contract), owner);
}

#[test]
fn test_transfer_ownership_to_invalid_address_fails() {
    let (mut app, owner, contract) = setup();

    let res = app.execute_contract(
        owner.clone(),
        contract.clone(),
        &ExecuteMsg::TransferOwnership {
            new_owner: "Terra1MixedCase".to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid address"), "got: {}", err_str);
    assert_eq!(owner_of(&app, &contract), owner);
}

#[test]
fn test_pause_and_unpause() {
    let (mut app, owner, contract) = setup();

    app.execute_contract(owner.clone(), contract.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();
    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::Config {})
        .unwrap();
    assert!(config.paused);

    // Settlement keeps working while paused
    app.execute_contract(
        owner.clone(),
        contract.clone(),
        &ExecuteMsg::CompleteTransfer {
            transfer_id: Binary::from(vec![0x33; 32]),
            receiver: "terra1receiver".to_string(),
            amount: Uint128::from(UNIT),
        },
        &[],
    )
    .unwrap();

    app.execute_contract(owner, contract.clone(), &ExecuteMsg::Unpause {}, &[])
        .unwrap();
    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::Config {})
        .unwrap();
    assert!(!config.paused);
}
