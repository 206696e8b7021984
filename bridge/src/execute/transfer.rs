//! Transfer ledger handlers.
//!
//! A transfer id is either Unknown (absent from `PROCESSED_TRANSFERS`) or
//! Processed. Initiation on the source instance and completion on the
//! destination instance each mark the id on their own instance; the relayer
//! (owner) carries the id between them.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, StdError, Uint128};

use super::access::load_authorized;
use super::funds::{ensure_positive, payout, received_amount};
use crate::error::ContractError;
use crate::fee_manager::FEE_CONFIG;
use crate::hash::{
    bytes32_to_hex, compute_transfer_id, encode_account, parse_transfer_id, TransferIdInput,
};
use crate::state::{
    OutgoingTransfer, CONFIG, OUTGOING_NONCE, OUTGOING_TRANSFERS, PROCESSED_TRANSFERS, STATS,
    TOTAL_LIQUIDITY,
};

// ============================================================================
// InitiateTransfer - Anyone
// ============================================================================

/// Start a transfer of the attached value to `receiver` on another chain.
///
/// The full value (fee included) stays in the contract: it raises the pool's
/// value but not `TOTAL_LIQUIDITY`, so it becomes withdrawable as fees.
pub fn execute_initiate_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: String,
    destination_chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    let value = received_amount(&info, &config.denom)?;

    if destination_chain_id == config.chain_id {
        return Err(ContractError::SameChainTransfer {
            chain_id: destination_chain_id,
        });
    }
    if destination_chain_id == 0 {
        return Err(ContractError::InvalidChainId {
            chain_id: destination_chain_id,
        });
    }

    let receiver = receiver.trim().to_string();
    if receiver.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "Receiver must not be empty".to_string(),
        });
    }

    let fee_config = FEE_CONFIG.load(deps.storage)?;
    let fee = fee_config.compute_fee(value);
    let net_amount = fee_config
        .net_amount(value)
        .ok_or(ContractError::AmountTooSmallAfterFee { amount: value, fee })?;

    let nonce = OUTGOING_NONCE.load(deps.storage)?;
    OUTGOING_NONCE.save(deps.storage, &(nonce + 1))?;

    let timestamp = env.block.time.seconds();
    let transfer_id = compute_transfer_id(&TransferIdInput {
        sender: encode_account(info.sender.as_str()),
        receiver: encode_account(&receiver),
        net_amount: net_amount.u128(),
        source_chain_id: config.chain_id,
        destination_chain_id,
        timestamp,
        nonce,
    });

    // Unreachable while the nonce is monotonic; kept so a collision can never
    // overwrite an existing record.
    if PROCESSED_TRANSFERS.has(deps.storage, &transfer_id) {
        return Err(ContractError::AlreadyProcessed {
            transfer_id: bytes32_to_hex(&transfer_id),
        });
    }
    PROCESSED_TRANSFERS.save(deps.storage, &transfer_id, &true)?;

    let record = OutgoingTransfer {
        sender: info.sender.clone(),
        receiver: receiver.clone(),
        net_amount,
        fee,
        source_chain_id: config.chain_id,
        destination_chain_id,
        nonce,
        initiated_at: env.block.time,
    };
    OUTGOING_TRANSFERS.save(deps.storage, &transfer_id, &record)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_outgoing_transfers += 1;
    stats.total_fees_collected = stats
        .total_fees_collected
        .checked_add(fee)
        .map_err(StdError::from)?;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_initiated")
        .add_attribute("transfer_id", bytes32_to_hex(&transfer_id))
        .add_attribute("sender", info.sender)
        .add_attribute("receiver", receiver)
        .add_attribute("net_amount", net_amount)
        .add_attribute("fee", fee)
        .add_attribute("source_chain_id", config.chain_id.to_string())
        .add_attribute("destination_chain_id", destination_chain_id.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("timestamp", timestamp.to_string()))
}

// ============================================================================
// CompleteTransfer - Owner (relayer)
// ============================================================================

/// Pay `amount` from pooled liquidity to `receiver` for a transfer observed
/// on another chain.
///
/// The relayer is trusted for `amount`; only replay and liquidity are checked.
///
/// Payout failure is exactly-once: the bank send is part of this message, so
/// if it fails the Processed mark and the liquidity debit are reverted with it
/// and the relayer may retry the same id. This deliberately departs from the
/// at-least-once behaviour where the mark survived a failed payout.
pub fn execute_complete_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    transfer_id: Binary,
    receiver: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_authorized(deps.storage, &info.sender)?;

    let id = parse_transfer_id(&transfer_id)?;
    // Replay is rejected before the call's own arguments are looked at
    if PROCESSED_TRANSFERS.has(deps.storage, &id) {
        return Err(ContractError::AlreadyProcessed {
            transfer_id: bytes32_to_hex(&id),
        });
    }

    ensure_positive(amount)?;
    let receiver = deps
        .api
        .addr_validate(&receiver)
        .map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;

    let total = TOTAL_LIQUIDITY.load(deps.storage)?;
    let remaining = total
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientLiquidity)?;

    let send = payout(deps.as_ref(), &env, &config.denom, receiver.as_str(), amount)?;

    PROCESSED_TRANSFERS.save(deps.storage, &id, &true)?;
    TOTAL_LIQUIDITY.save(deps.storage, &remaining)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_incoming_transfers += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_message(send)
        .add_attribute("action", "transfer_completed")
        .add_attribute("transfer_id", bytes32_to_hex(&id))
        .add_attribute("receiver", receiver)
        .add_attribute("amount", amount)
        .add_attribute("total_liquidity", remaining))
}

// ============================================================================
// ResetTransferStatus - Owner, development deployments only
// ============================================================================

/// Return a transfer id to Unknown.
pub fn execute_reset_transfer_status(
    deps: DepsMut,
    info: MessageInfo,
    transfer_id: Binary,
) -> Result<Response, ContractError> {
    let config = load_authorized(deps.storage, &info.sender)?;
    if !config.status_reset_enabled {
        return Err(ContractError::StatusResetDisabled);
    }

    let id = parse_transfer_id(&transfer_id)?;
    let was_processed = PROCESSED_TRANSFERS.has(deps.storage, &id);

    PROCESSED_TRANSFERS.remove(deps.storage, &id);
    OUTGOING_TRANSFERS.remove(deps.storage, &id);

    Ok(Response::new()
        .add_attribute("action", "transfer_status_reset")
        .add_attribute("transfer_id", bytes32_to_hex(&id))
        .add_attribute("was_processed", was_processed.to_string()))
}
