//! Liquidity pool handlers.
//!
//! This module handles:
//! - Provider deposits and withdrawals
//! - Owner withdrawal of accumulated fees
//!
//! Provider balances and `TOTAL_LIQUIDITY` always move together in the same
//! handler, so their sum invariant holds after every deposit or withdrawal.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, StdError, Uint128};

use super::access::load_authorized;
use super::funds::{ensure_positive, payout, pool_value, received_amount};
use crate::error::ContractError;
use crate::state::{CONFIG, LIQUIDITY, STATS, TOTAL_LIQUIDITY};

// ============================================================================
// Provider Operations
// ============================================================================

/// Deposit the attached coin as liquidity.
pub fn execute_add_liquidity(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    let amount = received_amount(&info, &config.denom)?;

    let balance = LIQUIDITY
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default()
        .checked_add(amount)
        .map_err(StdError::from)?;
    let total = TOTAL_LIQUIDITY
        .load(deps.storage)?
        .checked_add(amount)
        .map_err(StdError::from)?;

    LIQUIDITY.save(deps.storage, &info.sender, &balance)?;
    TOTAL_LIQUIDITY.save(deps.storage, &total)?;

    Ok(Response::new()
        .add_attribute("action", "liquidity_added")
        .add_attribute("provider", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("provider_balance", balance)
        .add_attribute("total_liquidity", total))
}

/// Withdraw `amount` of the caller's liquidity.
///
/// Stays available while paused so providers can always exit.
pub fn execute_remove_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_positive(amount)?;

    let balance = LIQUIDITY
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    let remaining = balance
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientLiquidity)?;
    // Completed transfers draw down the total without touching provider
    // balances, so it can be lower than a single provider's balance.
    let total = TOTAL_LIQUIDITY
        .load(deps.storage)?
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientLiquidity)?;

    let send = payout(
        deps.as_ref(),
        &env,
        &config.denom,
        info.sender.as_str(),
        amount,
    )?;

    if remaining.is_zero() {
        LIQUIDITY.remove(deps.storage, &info.sender);
    } else {
        LIQUIDITY.save(deps.storage, &info.sender, &remaining)?;
    }
    TOTAL_LIQUIDITY.save(deps.storage, &total)?;

    Ok(Response::new()
        .add_message(send)
        .add_attribute("action", "liquidity_removed")
        .add_attribute("provider", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("provider_balance", remaining)
        .add_attribute("total_liquidity", total))
}

// ============================================================================
// Fee Withdrawal
// ============================================================================

/// Withdraw fees: only value held above `TOTAL_LIQUIDITY` is withdrawable.
pub fn execute_withdraw_fees(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    let config = load_authorized(deps.storage, &info.sender)?;
    ensure_positive(amount)?;

    let recipient = match recipient {
        Some(addr) => deps
            .api
            .addr_validate(&addr)
            .map_err(|e| ContractError::InvalidAddress {
                reason: e.to_string(),
            })?,
        None => config.owner.clone(),
    };

    let total = TOTAL_LIQUIDITY.load(deps.storage)?;
    let available = pool_value(deps.as_ref(), &env, &config.denom)?.saturating_sub(total);
    if amount > available {
        return Err(ContractError::ExceedsAvailableFees {
            requested: amount,
            available,
        });
    }

    let send = payout(
        deps.as_ref(),
        &env,
        &config.denom,
        recipient.as_str(),
        amount,
    )?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_fees_withdrawn = stats
        .total_fees_withdrawn
        .checked_add(amount)
        .map_err(StdError::from)?;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_message(send)
        .add_attribute("action", "fees_withdrawn")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("remaining_fees", available - amount))
}
