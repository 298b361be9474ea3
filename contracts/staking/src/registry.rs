//! Reward-token registry and the lazy settlement engine built on it.
//!
//! Each registered token carries a global index: cumulative reward per
//! unit of weight since the token was first registered. Supplying rewards
//! only bumps that index, so injection is O(1) regardless of the number of
//! stakers. Accounts catch up lazily in [`settle`], which must run before
//! any change to the account's weight.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Map, Symbol};

use crate::ledger::{RewardCheckpoint, StakeAccount};
use crate::rewards;
use crate::ContractError;

const REGISTRY: Symbol = symbol_short!("REGISTRY");

/// Hard bound on registry entries, retired ones included. Settlement walks
/// every entry, so this caps the per-operation cost.
pub const MAX_REWARD_TOKENS: u32 = 10;

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RewardTokenState {
    /// Cumulative reward per unit of weight, scaled by `rewards::SCALE`.
    pub index: i128,
    /// Supplied but not yet claimed; the pool's obligation in this token.
    pub outstanding: i128,
    pub total_supplied: i128,
    pub total_claimed: i128,
    /// Retired tokens keep settling but accept no new supply.
    pub active: bool,
}

pub fn load(env: &Env) -> Map<Address, RewardTokenState> {
    env.storage()
        .instance()
        .get(&REGISTRY)
        .unwrap_or(Map::new(env))
}

pub fn store(env: &Env, registry: &Map<Address, RewardTokenState>) {
    env.storage().instance().set(&REGISTRY, registry);
}

// ── Registry membership ─────────────────────────────────────────────────────

/// Registers `token`, or reactivates it if it was retired.
///
/// Returns `true` when an existing retired entry was reactivated. The
/// entry's index is carried over unchanged.
pub fn register(
    registry: &mut Map<Address, RewardTokenState>,
    token: &Address,
) -> Result<bool, ContractError> {
    match registry.get(token.clone()) {
        Some(state) if state.active => Err(ContractError::RewardTokenExists),
        Some(mut state) => {
            state.active = true;
            registry.set(token.clone(), state);
            Ok(true)
        }
        None => {
            if registry.len() >= MAX_REWARD_TOKENS {
                return Err(ContractError::RegistryFull);
            }
            registry.set(
                token.clone(),
                RewardTokenState {
                    active: true,
                    ..RewardTokenState::default()
                },
            );
            Ok(false)
        }
    }
}

/// Stops new supply of `token`. Index growth already recorded stays
/// claimable.
pub fn retire(
    registry: &mut Map<Address, RewardTokenState>,
    token: &Address,
) -> Result<RewardTokenState, ContractError> {
    let mut state = registry
        .get(token.clone())
        .filter(|s| s.active)
        .ok_or(ContractError::UnknownRewardToken)?;
    state.active = false;
    registry.set(token.clone(), state.clone());
    Ok(state)
}

// ── Accrual ─────────────────────────────────────────────────────────────────

/// Broadcasts `amount` of reward to every unit of weight in the pool.
///
/// Returns the index before the update.
pub fn record_supply(
    env: &Env,
    state: &mut RewardTokenState,
    amount: i128,
    total_weight: i128,
) -> Result<i128, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if !state.active {
        return Err(ContractError::UnknownRewardToken);
    }
    if total_weight <= 0 {
        return Err(ContractError::EmptyPoolReward);
    }
    let increment = rewards::index_increment(env, amount, total_weight)
        .ok_or(ContractError::ArithmeticOverflow)?;
    if increment == 0 {
        // Every staker would truncate to zero and the amount would be
        // stranded in custody.
        return Err(ContractError::InvalidAmount);
    }

    let before = state.index;
    state.index = before
        .checked_add(increment)
        .ok_or(ContractError::ArithmeticOverflow)?;
    state.outstanding = state
        .outstanding
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    state.total_supplied = state
        .total_supplied
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    Ok(before)
}

/// Brings every checkpoint of `account` up to the current indices.
///
/// Uses the account's current weight, so it must run before that weight
/// changes. Running it twice in a row credits nothing the second time.
pub fn settle(
    env: &Env,
    account: &mut StakeAccount,
    registry: &Map<Address, RewardTokenState>,
) -> Result<(), ContractError> {
    for (token, state) in registry.iter() {
        let mut checkpoint = account.rewards.get(token.clone()).unwrap_or_default();
        let delta =
            rewards::accrued_since(env, account.weight, state.index, checkpoint.settled_index)
                .ok_or(ContractError::AccountingFault)?;
        checkpoint.accrued = checkpoint
            .accrued
            .checked_add(delta)
            .ok_or(ContractError::ArithmeticOverflow)?;
        checkpoint.settled_index = state.index;
        account.rewards.set(token, checkpoint);
    }
    Ok(())
}

/// What `account` could claim in `token` right now, without mutating it.
pub fn pending(
    env: &Env,
    account: &StakeAccount,
    registry: &Map<Address, RewardTokenState>,
    token: &Address,
) -> Result<i128, ContractError> {
    let state = registry
        .get(token.clone())
        .ok_or(ContractError::UnknownRewardToken)?;
    let checkpoint: RewardCheckpoint = account.rewards.get(token.clone()).unwrap_or_default();
    let delta = rewards::accrued_since(env, account.weight, state.index, checkpoint.settled_index)
        .ok_or(ContractError::AccountingFault)?;
    checkpoint
        .accrued
        .checked_add(delta)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Moves the settled credit for `token` out of `account` and off the
/// token's outstanding obligation. Returns the amount, possibly zero.
pub fn take_accrued(
    account: &mut StakeAccount,
    state: &mut RewardTokenState,
    token: &Address,
) -> Result<i128, ContractError> {
    let mut checkpoint = match account.rewards.get(token.clone()) {
        Some(c) => c,
        None => return Ok(0),
    };
    let amount = checkpoint.accrued;
    if amount == 0 {
        return Ok(0);
    }
    if amount < 0 || amount > state.outstanding {
        return Err(ContractError::AccountingFault);
    }

    checkpoint.accrued = 0;
    account.rewards.set(token.clone(), checkpoint);
    state.outstanding -= amount;
    state.total_claimed = state
        .total_claimed
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    Ok(amount)
}
