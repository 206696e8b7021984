//! Message types for the liquidity bridge contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner / relayer address (defaults to the instantiator)
    pub owner: Option<String>,
    /// This chain instance's id (must be non-zero)
    pub chain_id: u64,
    /// Native denomination held by the pool
    pub denom: String,
    /// Proportional fee in basis points (30 = 0.3%)
    pub fee_rate_bps: u64,
    /// Minimum fee per transfer
    pub minimum_fee: Uint128,
    /// Expose `ResetTransferStatus`. Development deployments only.
    #[serde(default)]
    pub enable_status_reset: bool,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Liquidity Pool
    // ========================================================================
    /// Deposit liquidity. The attached coin of the bridge denom is the amount.
    AddLiquidity {},

    /// Withdraw previously deposited liquidity
    RemoveLiquidity { amount: Uint128 },

    /// Withdraw accumulated fees (pool value above total liquidity)
    ///
    /// Authorization: Owner only
    WithdrawFees {
        amount: Uint128,
        /// Defaults to the owner
        recipient: Option<String>,
    },

    // ========================================================================
    // Transfer Ledger
    // ========================================================================
    /// Start a transfer to another chain. The attached coin is the full value
    /// (fee included).
    InitiateTransfer {
        /// Receiver on the destination chain
        receiver: String,
        destination_chain_id: u64,
    },

    /// Settle a transfer observed on another chain by paying `receiver`
    /// from pooled liquidity
    ///
    /// Authorization: Owner (relayer) only
    CompleteTransfer {
        /// The 32-byte transfer id
        transfer_id: Binary,
        receiver: String,
        amount: Uint128,
    },

    /// Forget a processed transfer id
    ///
    /// Authorization: Owner only, and only on deployments instantiated with
    /// `enable_status_reset`
    ResetTransferStatus {
        /// The 32-byte transfer id
        transfer_id: Binary,
    },

    // ========================================================================
    // Administration
    // ========================================================================
    /// Replace the fee configuration
    ///
    /// Authorization: Owner only
    SetFeeConfig {
        fee_rate_bps: u64,
        minimum_fee: Uint128,
    },

    /// Hand the owner role to another address
    ///
    /// Authorization: Owner only
    TransferOwnership { new_owner: String },

    /// Stop deposits and new transfers
    ///
    /// Authorization: Owner only
    Pause {},

    /// Resume deposits and new transfers
    ///
    /// Authorization: Owner only
    Unpause {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnerResponse)]
    Owner {},

    #[returns(FeeConfigResponse)]
    FeeConfig {},

    /// Fee and net amount for a hypothetical transfer value
    #[returns(CalculateFeeResponse)]
    CalculateFee { amount: Uint128 },

    #[returns(ProviderLiquidityResponse)]
    ProviderLiquidity { provider: String },

    #[returns(TotalLiquidityResponse)]
    TotalLiquidity {},

    /// Paginated list of providers with a non-zero balance
    #[returns(LiquidityProvidersResponse)]
    LiquidityProviders {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Pool value above total liquidity (withdrawable as fees)
    #[returns(AvailableFeesResponse)]
    AvailableFees {},

    #[returns(TransferStatusResponse)]
    TransferStatus { transfer_id: Binary },

    /// Record of a transfer initiated on this instance
    #[returns(OutgoingTransferResponse)]
    OutgoingTransfer { transfer_id: Binary },

    /// Derive a transfer id without touching state
    #[returns(ComputeTransferIdResponse)]
    ComputeTransferId {
        sender: String,
        receiver: String,
        net_amount: Uint128,
        source_chain_id: u64,
        destination_chain_id: u64,
        timestamp: u64,
        nonce: u64,
    },

    #[returns(StatsResponse)]
    Stats {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub chain_id: u64,
    pub denom: String,
    pub paused: bool,
    pub status_reset_enabled: bool,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct FeeConfigResponse {
    pub fee_rate_bps: u64,
    pub minimum_fee: Uint128,
}

#[cw_serde]
pub struct CalculateFeeResponse {
    pub amount: Uint128,
    pub fee: Uint128,
    /// Zero when the fee consumes the whole amount
    pub net_amount: Uint128,
}

#[cw_serde]
pub struct ProviderLiquidityResponse {
    pub provider: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct TotalLiquidityResponse {
    pub total_liquidity: Uint128,
}

#[cw_serde]
pub struct LiquidityProvidersResponse {
    pub providers: Vec<ProviderLiquidityResponse>,
}

#[cw_serde]
pub struct AvailableFeesResponse {
    /// Bank balance of the contract in the bridge denom
    pub pool_value: Uint128,
    pub total_liquidity: Uint128,
    pub available_fees: Uint128,
}

#[cw_serde]
pub struct TransferStatusResponse {
    pub transfer_id: Binary,
    pub processed: bool,
}

#[cw_serde]
pub struct OutgoingTransferResponse {
    pub transfer_id: Binary,
    pub sender: Addr,
    pub receiver: String,
    pub net_amount: Uint128,
    pub fee: Uint128,
    pub source_chain_id: u64,
    pub destination_chain_id: u64,
    pub nonce: u64,
    pub initiated_at: Timestamp,
}

#[cw_serde]
pub struct ComputeTransferIdResponse {
    pub transfer_id: Binary,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_outgoing_transfers: u64,
    pub total_incoming_transfers: u64,
    pub total_fees_collected: Uint128,
    pub total_fees_withdrawn: Uint128,
}
