//! State definitions for the liquidity bridge contract
//!
//! Two pieces of state live on every chain instance: the liquidity pool
//! (per-provider balances plus their aggregate) and the transfer ledger
//! (processed flags keyed by the 32-byte transfer id).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner / relayer: the single privileged identity
    pub owner: Addr,
    /// Chain id of this instance, injected at instantiation
    pub chain_id: u64,
    /// Native denomination the pool and transfers are denominated in
    pub denom: String,
    /// Whether deposits and new transfers are currently stopped
    pub paused: bool,
    /// Whether `ResetTransferStatus` may be used (development deployments only)
    pub status_reset_enabled: bool,
}

/// Record of a transfer initiated on this instance
#[cw_serde]
pub struct OutgoingTransfer {
    /// Sender on this chain
    pub sender: Addr,
    /// Receiver on the destination chain (opaque)
    pub receiver: String,
    /// Amount the receiver is owed on the destination chain
    pub net_amount: Uint128,
    /// Fee retained by this instance
    pub fee: Uint128,
    /// This instance's chain id at initiation
    pub source_chain_id: u64,
    pub destination_chain_id: u64,
    /// Per-instance sequence number mixed into the transfer id
    pub nonce: u64,
    /// Block time of initiation
    pub initiated_at: Timestamp,
}

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    /// Transfers initiated on this instance
    pub total_outgoing_transfers: u64,
    /// Transfers completed (paid out) on this instance
    pub total_incoming_transfers: u64,
    /// Sum of all fees charged by initiations
    pub total_fees_collected: Uint128,
    /// Sum of all owner fee withdrawals
    pub total_fees_withdrawn: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:liquidity-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default page size for enumeration queries
pub const DEFAULT_LIMIT: u32 = 10;

/// Maximum page size for enumeration queries
pub const MAX_LIMIT: u32 = 30;

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Bridge statistics
pub const STATS: Item<Stats> = Item::new("stats");

// ============================================================================
// Liquidity Pool
// ============================================================================

/// Provider balances
/// Key: provider address, Value: deposited amount (entry removed at zero)
pub const LIQUIDITY: Map<&Addr, Uint128> = Map::new("liquidity");

/// Aggregate liquidity backing payouts
pub const TOTAL_LIQUIDITY: Item<Uint128> = Item::new("total_liquidity");

// ============================================================================
// Transfer Ledger
// ============================================================================

/// Processed transfer ids
/// Key: 32-byte transfer id as &[u8], Value: always true (absence = Unknown)
pub const PROCESSED_TRANSFERS: Map<&[u8], bool> = Map::new("processed_transfers");

/// Transfers initiated on this instance
/// Key: 32-byte transfer id as &[u8], Value: OutgoingTransfer
pub const OUTGOING_TRANSFERS: Map<&[u8], OutgoingTransfer> = Map::new("outgoing_transfers");

/// Next outgoing sequence number
pub const OUTGOING_NONCE: Item<u64> = Item::new("outgoing_nonce");
