//! Value movement into and out of the pool.

use cosmwasm_std::{BankMsg, Coin, Deps, Env, MessageInfo, Uint128};

use crate::error::ContractError;

/// Amount of `denom` conveyed with the message.
///
/// Exactly one non-zero coin of the bridge denom is accepted.
pub fn received_amount(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }

    if info.funds.len() > 1 {
        return Err(ContractError::InvalidAmount {
            reason: "Only one token type allowed per transaction".to_string(),
        });
    }

    let coin = &info.funds[0];
    if coin.denom != denom {
        return Err(ContractError::InvalidAmount {
            reason: format!("Expected {}, got {}", denom, coin.denom),
        });
    }

    if coin.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    Ok(coin.amount)
}

/// Bank balance of the contract in the bridge denom
pub fn pool_value(deps: Deps, env: &Env, denom: &str) -> Result<Uint128, ContractError> {
    let balance = deps.querier.query_balance(&env.contract.address, denom)?;
    Ok(balance.amount)
}

/// Build the outbound payment of `amount` to `recipient`.
///
/// Fails with `TransferFailed` if the contract cannot cover it; the bank
/// send is dispatched after the handler's state writes, and a failing send
/// reverts them.
pub fn payout(
    deps: Deps,
    env: &Env,
    denom: &str,
    recipient: &str,
    amount: Uint128,
) -> Result<BankMsg, ContractError> {
    let available = pool_value(deps, env, denom)?;
    if available < amount {
        return Err(ContractError::TransferFailed {
            reason: format!("pool holds {}{}, payout needs {}", available, denom, amount),
        });
    }

    Ok(BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![Coin {
            denom: denom.to_string(),
            amount,
        }],
    })
}

/// Require a strictly positive amount
pub fn ensure_positive(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    Ok(())
}
