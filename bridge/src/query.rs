//! Query handlers for the liquidity bridge contract.
//!
//! This module contains all query message handlers for retrieving contract state.

use cosmwasm_std::{Binary, Deps, Env, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::fee_manager::FEE_CONFIG;
use crate::hash::{compute_transfer_id, encode_account, TransferIdInput};
use crate::msg::{
    AvailableFeesResponse, CalculateFeeResponse, ComputeTransferIdResponse, ConfigResponse,
    FeeConfigResponse, LiquidityProvidersResponse, OutgoingTransferResponse, OwnerResponse,
    ProviderLiquidityResponse, StatsResponse, TotalLiquidityResponse, TransferStatusResponse,
};
use crate::state::{
    CONFIG, DEFAULT_LIMIT, LIQUIDITY, MAX_LIMIT, OUTGOING_TRANSFERS, PROCESSED_TRANSFERS, STATS,
    TOTAL_LIQUIDITY,
};

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        chain_id: config.chain_id,
        denom: config.denom,
        paused: config.paused,
        status_reset_enabled: config.status_reset_enabled,
    })
}

/// Query the current owner.
pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: config.owner,
    })
}

/// Query bridge statistics.
pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_outgoing_transfers: stats.total_outgoing_transfers,
        total_incoming_transfers: stats.total_incoming_transfers,
        total_fees_collected: stats.total_fees_collected,
        total_fees_withdrawn: stats.total_fees_withdrawn,
    })
}

// ============================================================================
// Fee Queries
// ============================================================================

pub fn query_fee_config(deps: Deps) -> StdResult<FeeConfigResponse> {
    let fee_config = FEE_CONFIG.load(deps.storage)?;
    Ok(FeeConfigResponse {
        fee_rate_bps: fee_config.fee_rate_bps,
        minimum_fee: fee_config.minimum_fee,
    })
}

/// Fee and net amount a transfer of `amount` would produce right now.
pub fn query_calculate_fee(deps: Deps, amount: Uint128) -> StdResult<CalculateFeeResponse> {
    let fee_config = FEE_CONFIG.load(deps.storage)?;
    Ok(CalculateFeeResponse {
        amount,
        fee: fee_config.compute_fee(amount),
        net_amount: fee_config.net_amount(amount).unwrap_or_default(),
    })
}

// ============================================================================
// Liquidity Queries
// ============================================================================

pub fn query_provider_liquidity(
    deps: Deps,
    provider: String,
) -> StdResult<ProviderLiquidityResponse> {
    let provider = deps.api.addr_validate(&provider)?;
    let amount = LIQUIDITY
        .may_load(deps.storage, &provider)?
        .unwrap_or_default();
    Ok(ProviderLiquidityResponse { provider, amount })
}

pub fn query_total_liquidity(deps: Deps) -> StdResult<TotalLiquidityResponse> {
    Ok(TotalLiquidityResponse {
        total_liquidity: TOTAL_LIQUIDITY.load(deps.storage)?,
    })
}

/// Query paginated list of providers.
pub fn query_liquidity_providers(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<LiquidityProvidersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let providers = LIQUIDITY
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (provider, amount) = item?;
            Ok(ProviderLiquidityResponse { provider, amount })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(LiquidityProvidersResponse { providers })
}

/// Query value withdrawable as fees.
pub fn query_available_fees(deps: Deps, env: Env) -> StdResult<AvailableFeesResponse> {
    let config = CONFIG.load(deps.storage)?;
    let pool_value = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?
        .amount;
    let total_liquidity = TOTAL_LIQUIDITY.load(deps.storage)?;
    Ok(AvailableFeesResponse {
        pool_value,
        total_liquidity,
        available_fees: pool_value.saturating_sub(total_liquidity),
    })
}

// ============================================================================
// Transfer Ledger Queries
// ============================================================================

pub fn query_transfer_status(deps: Deps, transfer_id: Binary) -> StdResult<TransferStatusResponse> {
    let id = parse_id(&transfer_id)?;
    Ok(TransferStatusResponse {
        processed: PROCESSED_TRANSFERS.has(deps.storage, &id),
        transfer_id,
    })
}

pub fn query_outgoing_transfer(
    deps: Deps,
    transfer_id: Binary,
) -> StdResult<OutgoingTransferResponse> {
    let id = parse_id(&transfer_id)?;
    let record = OUTGOING_TRANSFERS.load(deps.storage, &id)?;
    Ok(OutgoingTransferResponse {
        transfer_id,
        sender: record.sender,
        receiver: record.receiver,
        net_amount: record.net_amount,
        fee: record.fee,
        source_chain_id: record.source_chain_id,
        destination_chain_id: record.destination_chain_id,
        nonce: record.nonce,
        initiated_at: record.initiated_at,
    })
}

/// Compute a transfer id (pure function, no state access).
#[allow(clippy::too_many_arguments)]
pub fn query_compute_transfer_id(
    sender: String,
    receiver: String,
    net_amount: Uint128,
    source_chain_id: u64,
    destination_chain_id: u64,
    timestamp: u64,
    nonce: u64,
) -> StdResult<ComputeTransferIdResponse> {
    let transfer_id = compute_transfer_id(&TransferIdInput {
        sender: encode_account(&sender),
        receiver: encode_account(&receiver),
        net_amount: net_amount.u128(),
        source_chain_id,
        destination_chain_id,
        timestamp,
        nonce,
    });
    Ok(ComputeTransferIdResponse {
        transfer_id: Binary::from(transfer_id.to_vec()),
    })
}

fn parse_id(transfer_id: &Binary) -> StdResult<[u8; 32]> {
    transfer_id
        .as_slice()
        .try_into()
        .map_err(|_| StdError::generic_err("transfer_id must be 32 bytes"))
}
