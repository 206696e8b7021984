//! Authorization policy for privileged operations.
//!
//! Every privileged handler loads the policy and calls [`Authority::authorize`]
//! before any state mutation. The deployed policy is a single owner stored in
//! [`Config`]; a threshold policy can implement the same trait.

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

/// Decides whether a caller may perform a privileged operation.
pub trait Authority {
    fn authorize(&self, caller: &Addr) -> Result<(), ContractError>;
}

impl Authority for Config {
    fn authorize(&self, caller: &Addr) -> Result<(), ContractError> {
        if *caller != self.owner {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}

/// Load the config and check `caller` against it.
pub fn load_authorized(storage: &dyn Storage, caller: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    config.authorize(caller)?;
    Ok(config)
}
