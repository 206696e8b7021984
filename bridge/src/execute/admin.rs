//! Admin operations handlers.
//!
//! This module handles:
//! - Fee configuration
//! - Ownership transfer
//! - Pause/unpause contract

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use super::access::load_authorized;
use crate::error::ContractError;
use crate::fee_manager::{FeeConfig, FEE_CONFIG};
use crate::state::CONFIG;

// ============================================================================
// Fee Configuration
// ============================================================================

/// Replace the fee rate and minimum fee.
pub fn execute_set_fee_config(
    deps: DepsMut,
    info: MessageInfo,
    fee_rate_bps: u64,
    minimum_fee: Uint128,
) -> Result<Response, ContractError> {
    load_authorized(deps.storage, &info.sender)?;

    let fee_config = FeeConfig::new(fee_rate_bps, minimum_fee)?;
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    Ok(Response::new()
        .add_attribute("action", "fee_config_updated")
        .add_attribute("fee_rate_bps", fee_rate_bps.to_string())
        .add_attribute("minimum_fee", minimum_fee))
}

// ============================================================================
// Ownership
// ============================================================================

/// Hand the owner role to `new_owner`, effective immediately.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = load_authorized(deps.storage, &info.sender)?;

    if new_owner.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "New owner must not be empty".to_string(),
        });
    }
    let new_owner = deps
        .api
        .addr_validate(&new_owner)
        .map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;

    let previous_owner = std::mem::replace(&mut config.owner, new_owner.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "ownership_transferred")
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("new_owner", new_owner))
}

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the contract (stops deposits and new transfers).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = load_authorized(deps.storage, &info.sender)?;

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

/// Unpause the contract.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = load_authorized(deps.storage, &info.sender)?;

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "unpause"))
}
