//! Error types for the liquidity bridge contract.
//!
//! Every error aborts the whole message; the host chain discards any storage
//! writes and dispatched messages of the failed execution.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the owner can perform this action")]
    Unauthorized,

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Invalid chain ID: {chain_id}")]
    InvalidChainId { chain_id: u64 },

    #[error("Cannot transfer to the same chain: {chain_id}")]
    SameChainTransfer { chain_id: u64 },

    #[error("Transfer status reset is disabled on this deployment")]
    StatusResetDisabled,

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("No funds sent")]
    NoFundsSent,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Insufficient liquidity")]
    InsufficientLiquidity,

    #[error("Amount too small after fee: amount {amount}, fee {fee}")]
    AmountTooSmallAfterFee { amount: Uint128, fee: Uint128 },

    #[error("Exceeds available fees: requested {requested}, available {available}")]
    ExceedsAvailableFees {
        requested: Uint128,
        available: Uint128,
    },

    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },

    // ========================================================================
    // Fee Errors
    // ========================================================================

    #[error("Invalid fee rate: {fee_rate_bps} bps exceeds maximum {max_bps} bps")]
    InvalidFeeRate { fee_rate_bps: u64, max_bps: u64 },

    // ========================================================================
    // Transfer Ledger Errors
    // ========================================================================

    #[error("Transfer already processed: {transfer_id}")]
    AlreadyProcessed { transfer_id: String },

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },
}
