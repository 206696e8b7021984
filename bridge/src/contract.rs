//! Liquidity Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_liquidity, execute_complete_transfer, execute_initiate_transfer, execute_pause,
    execute_remove_liquidity, execute_reset_transfer_status, execute_set_fee_config,
    execute_transfer_ownership, execute_unpause, execute_withdraw_fees,
};
use crate::fee_manager::{FeeConfig, FEE_CONFIG};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_available_fees, query_calculate_fee, query_compute_transfer_id, query_config,
    query_fee_config, query_liquidity_providers, query_outgoing_transfer, query_owner,
    query_provider_liquidity, query_stats, query_total_liquidity, query_transfer_status,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, OUTGOING_NONCE, STATS,
    TOTAL_LIQUIDITY,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps
            .api
            .addr_validate(&owner)
            .map_err(|e| ContractError::InvalidAddress {
                reason: e.to_string(),
            })?,
        None => info.sender,
    };

    if msg.chain_id == 0 {
        return Err(ContractError::InvalidChainId { chain_id: 0 });
    }

    if msg.denom.trim().is_empty() {
        return Err(ContractError::InvalidAmount {
            reason: "Denom must not be empty".to_string(),
        });
    }

    let fee_config = FeeConfig::new(msg.fee_rate_bps, msg.minimum_fee)?;
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    let config = Config {
        owner,
        chain_id: msg.chain_id,
        denom: msg.denom,
        paused: false,
        status_reset_enabled: msg.enable_status_reset,
    };
    CONFIG.save(deps.storage, &config)?;

    TOTAL_LIQUIDITY.save(deps.storage, &Uint128::zero())?;
    OUTGOING_NONCE.save(deps.storage, &0u64)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("chain_id", config.chain_id.to_string())
        .add_attribute("denom", config.denom)
        .add_attribute("fee_rate_bps", fee_config.fee_rate_bps.to_string())
        .add_attribute("minimum_fee", fee_config.minimum_fee)
        .add_attribute(
            "status_reset_enabled",
            config.status_reset_enabled.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Liquidity pool
        ExecuteMsg::AddLiquidity {} => execute_add_liquidity(deps, info),
        ExecuteMsg::RemoveLiquidity { amount } => {
            execute_remove_liquidity(deps, env, info, amount)
        }
        ExecuteMsg::WithdrawFees { amount, recipient } => {
            execute_withdraw_fees(deps, env, info, amount, recipient)
        }

        // Transfer ledger
        ExecuteMsg::InitiateTransfer {
            receiver,
            destination_chain_id,
        } => execute_initiate_transfer(deps, env, info, receiver, destination_chain_id),
        ExecuteMsg::CompleteTransfer {
            transfer_id,
            receiver,
            amount,
        } => execute_complete_transfer(deps, env, info, transfer_id, receiver, amount),
        ExecuteMsg::ResetTransferStatus { transfer_id } => {
            execute_reset_transfer_status(deps, info, transfer_id)
        }

        // Administration
        ExecuteMsg::SetFeeConfig {
            fee_rate_bps,
            minimum_fee,
        } => execute_set_fee_config(deps, info, fee_rate_bps, minimum_fee),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),

        // Fees
        QueryMsg::FeeConfig {} => to_json_binary(&query_fee_config(deps)?),
        QueryMsg::CalculateFee { amount } => to_json_binary(&query_calculate_fee(deps, amount)?),

        // Liquidity
        QueryMsg::ProviderLiquidity { provider } => {
            to_json_binary(&query_provider_liquidity(deps, provider)?)
        }
        QueryMsg::TotalLiquidity {} => to_json_binary(&query_total_liquidity(deps)?),
        QueryMsg::LiquidityProviders { start_after, limit } => {
            to_json_binary(&query_liquidity_providers(deps, start_after, limit)?)
        }
        QueryMsg::AvailableFees {} => to_json_binary(&query_available_fees(deps, env)?),

        // Transfer ledger
        QueryMsg::TransferStatus { transfer_id } => {
            to_json_binary(&query_transfer_status(deps, transfer_id)?)
        }
        QueryMsg::OutgoingTransfer { transfer_id } => {
            to_json_binary(&query_outgoing_transfer(deps, transfer_id)?)
        }
        QueryMsg::ComputeTransferId {
            sender,
            receiver,
            net_amount,
            source_chain_id,
            destination_chain_id,
            timestamp,
            nonce,
        } => to_json_binary(&query_compute_transfer_id(
            sender,
            receiver,
            net_amount,
            source_chain_id,
            destination_chain_id,
            timestamp,
            nonce,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
