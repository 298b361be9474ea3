//! Reserve accounting: what the pool owes in each token versus what it
//! actually holds.
//!
//! A token's obligation is the staked principal (stake token only) plus
//! the outstanding reward credit (registered reward tokens only). The
//! stake token may also be a reward token; both parts then apply.

use soroban_sdk::{symbol_short, token, Address, Env, Map, Symbol};

use crate::ledger::PoolState;
use crate::registry::RewardTokenState;
use crate::ContractError;

const FAULT: Symbol = symbol_short!("ACC_FLT");

pub fn obligation(
    token: &Address,
    stake_token: &Address,
    pool: &PoolState,
    registry: &Map<Address, RewardTokenState>,
) -> Result<i128, ContractError> {
    let principal = if token == stake_token {
        pool.total_staked
    } else {
        0
    };
    let rewards = registry
        .get(token.clone())
        .map(|s| s.outstanding)
        .unwrap_or(0);
    principal
        .checked_add(rewards)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Balance of `token` held by this contract.
pub fn custody(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}

/// Fails with `AccountingFault` unless custody covers the full obligation.
///
/// Checked before a reward payout: the payout is part of the obligation,
/// so custody net of every other claim on the token covers it.
pub fn require_solvent(env: &Env, token: &Address, obligation: i128) -> Result<(), ContractError> {
    if custody(env, token) < obligation {
        return Err(ContractError::AccountingFault);
    }
    Ok(())
}

/// Custody in excess of the tracked obligation; the only part an owner may
/// recover.
pub fn surplus(env: &Env, token: &Address, obligation: i128) -> i128 {
    custody(env, token).saturating_sub(obligation).max(0)
}

// ── Fault latch ─────────────────────────────────────────────────────────────

pub fn is_fault_latched(env: &Env) -> bool {
    env.storage().instance().get(&FAULT).unwrap_or(false)
}

pub fn latch_fault(env: &Env) {
    env.storage().instance().set(&FAULT, &true);
}

pub fn clear_fault(env: &Env) {
    env.storage().instance().remove(&FAULT);
}

pub fn require_no_fault(env: &Env) -> Result<(), ContractError> {
    if is_fault_latched(env) {
        return Err(ContractError::AccountingFault);
    }
    Ok(())
}
