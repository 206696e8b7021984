//! Execute handlers for the liquidity bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `liquidity` - Provider deposits/withdrawals and fee withdrawal
//! - `transfer` - Initiate, complete, and (development only) reset transfers
//! - `admin` - Fee configuration, ownership transfer, pause/unpause
//! - `access` - Authorization policy shared by privileged handlers
//! - `funds` - Incoming coin validation and outbound payouts

pub mod access;
mod admin;
mod funds;
mod liquidity;
mod transfer;

pub use admin::*;
pub use liquidity::*;
pub use transfer::*;
