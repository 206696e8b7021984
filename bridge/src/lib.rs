//! Liquidity Bridge Contract - Cross-Chain Value Transfer Ledger
//!
//! Each deployment is one chain instance. Instances never share state; a
//! trusted relayer (the contract owner) carries transfers between them.
//!
//! # Outgoing Flow
//! 1. Sender calls `InitiateTransfer` with the value attached
//! 2. The fee is retained, the transfer id is marked processed, and a
//!    `transfer_initiated` event is emitted for the relayer
//!
//! # Incoming Flow
//! 1. Relayer observes `transfer_initiated` on the source instance
//! 2. Relayer calls `CompleteTransfer` on the destination instance
//! 3. Replay and liquidity are checked, the receiver is paid from the pool
//!
//! # Liquidity
//! - Providers deposit with `AddLiquidity` and exit with `RemoveLiquidity`
//! - Value held above total liquidity is fee income, withdrawable by the owner

pub mod contract;
pub mod error;
mod execute;
pub mod fee_manager;
pub mod hash;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::execute::access::Authority;
pub use crate::fee_manager::FeeConfig;
pub use crate::hash::{compute_transfer_id, keccak256, TransferIdInput};
