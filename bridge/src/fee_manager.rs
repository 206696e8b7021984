//! Fee Manager Module
//!
//! Proportional-with-floor fee applied to every outgoing transfer.
//!
//! ```text
//! fee = max(floor(amount * fee_rate_bps / 10000), minimum_fee)
//! ```
//!
//! For small amounts the floor can exceed the amount itself; callers that
//! need a positive net amount (transfer initiation) reject that case.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use cw_storage_plus::Item;

use crate::error::ContractError;

// ============================================================================
// Constants
// ============================================================================

/// Basis points denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10000;

/// Maximum fee rate in basis points (100%)
pub const MAX_FEE_BPS: u64 = 10000;

// ============================================================================
// Data Structures
// ============================================================================

/// Fee configuration parameters
#[cw_serde]
pub struct FeeConfig {
    /// Proportional fee in basis points (30 = 0.3%)
    pub fee_rate_bps: u64,
    /// Minimum fee in the smallest unit of the bridge denom
    pub minimum_fee: Uint128,
}

impl FeeConfig {
    pub fn new(fee_rate_bps: u64, minimum_fee: Uint128) -> Result<Self, ContractError> {
        let config = Self {
            fee_rate_bps,
            minimum_fee,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the fee configuration
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.fee_rate_bps > MAX_FEE_BPS {
            return Err(ContractError::InvalidFeeRate {
                fee_rate_bps: self.fee_rate_bps,
                max_bps: MAX_FEE_BPS,
            });
        }
        Ok(())
    }

    /// Fee charged on `amount`.
    pub fn compute_fee(&self, amount: Uint128) -> Uint128 {
        calculate_fee_from_bps(amount, self.fee_rate_bps).max(self.minimum_fee)
    }

    /// Amount left after the fee, or `None` if the fee consumes all of it.
    pub fn net_amount(&self, amount: Uint128) -> Option<Uint128> {
        amount
            .checked_sub(self.compute_fee(amount))
            .ok()
            .filter(|net| !net.is_zero())
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Fee configuration storage
pub const FEE_CONFIG: Item<FeeConfig> = Item::new("fee_config");

// ============================================================================
// Fee Calculation Functions
// ============================================================================

/// Calculate the proportional part of the fee (floored)
pub fn calculate_fee_from_bps(amount: Uint128, fee_bps: u64) -> Uint128 {
    amount.multiply_ratio(fee_bps as u128, BPS_DENOMINATOR)
}
