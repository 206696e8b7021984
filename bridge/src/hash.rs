//! Transfer identifier derivation
//!
//! A transfer id is the keccak256 of seven 32-byte slots, laid out the way
//! Solidity's `abi.encode` lays out static types, so relayers on any chain
//! can recompute it.
//!
//! # Byte Layout (224 bytes total)
//! - Bytes 0-31:    sender account (32 bytes)
//! - Bytes 32-63:   receiver account (32 bytes)
//! - Bytes 64-95:   net amount (uint256, big-endian, left-padded)
//! - Bytes 96-127:  source chain id (uint256)
//! - Bytes 128-159: destination chain id (uint256)
//! - Bytes 160-191: timestamp in seconds (uint256)
//! - Bytes 192-223: per-instance nonce (uint256)

use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Inputs to a transfer id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferIdInput {
    pub sender: [u8; 32],
    pub receiver: [u8; 32],
    pub net_amount: u128,
    pub source_chain_id: u64,
    pub destination_chain_id: u64,
    pub timestamp: u64,
    pub nonce: u64,
}

/// Compute the canonical transfer id
pub fn compute_transfer_id(input: &TransferIdInput) -> [u8; 32] {
    let mut data = [0u8; 224];

    data[0..32].copy_from_slice(&input.sender);
    data[32..64].copy_from_slice(&input.receiver);

    // u128 (16 bytes) goes into bytes 16-31 of its slot
    data[64 + 16..96].copy_from_slice(&input.net_amount.to_be_bytes());

    // u64 (8 bytes) goes into bytes 24-31 of each slot
    data[96 + 24..128].copy_from_slice(&input.source_chain_id.to_be_bytes());
    data[128 + 24..160].copy_from_slice(&input.destination_chain_id.to_be_bytes());
    data[160 + 24..192].copy_from_slice(&input.timestamp.to_be_bytes());
    data[192 + 24..224].copy_from_slice(&input.nonce.to_be_bytes());

    keccak256(&data)
}

/// Encode an account identity as 32 bytes
///
/// A `0x`-prefixed 20-byte EVM address is left-padded (matching
/// `abi.encode(address)`); any other identity (bech32 or otherwise) is
/// hashed, since its raw form is not fixed-size.
pub fn encode_account(account: &str) -> [u8; 32] {
    if let Some(raw) = parse_evm_address(account) {
        let mut result = [0u8; 32];
        result[12..].copy_from_slice(&raw);
        return result;
    }
    keccak256(account.as_bytes())
}

fn parse_evm_address(account: &str) -> Option<[u8; 20]> {
    let hex_part = account.strip_prefix("0x")?;
    if hex_part.len() != 40 {
        return None;
    }
    let bytes = hex::decode(hex_part).ok()?;
    bytes.try_into().ok()
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Interpret raw bytes as a 32-byte transfer id
pub fn parse_transfer_id(bytes: &[u8]) -> Result<[u8; 32], ContractError> {
    bytes
        .try_into()
        .map_err(|_| ContractError::InvalidHashLength { got: bytes.len() })
}
