//! Stake ledger: per-account balances, lock state and pool totals.
//!
//! The state transitions here are pure functions over the loaded structs.
//! The contract loads, mutates and stores; nothing in this module talks to
//! a token contract.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Map, Symbol};

use crate::rewards::{self, MAX_MULTIPLIER_BPS, MULTIPLIER_BASE_BPS};
use crate::ContractError;

// ── Storage keys ────────────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const POOL: Symbol = symbol_short!("POOL");
const ACCOUNT: Symbol = symbol_short!("ACCOUNT");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

// ── Types ───────────────────────────────────────────────────────────────────

/// Pool-wide lock and capacity settings.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Shortest lock a deposit may choose, in seconds.
    pub min_lock: u64,
    /// Longest lock a deposit may choose, in seconds.
    pub max_lock: u64,
    /// Multiplier granted at `max_lock`, in basis points (10_000 = 1.0x).
    pub max_multiplier_bps: u32,
    /// Upper bound on `total_staked`, if any.
    pub staking_cap: Option<i128>,
}

impl PoolConfig {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.min_lock > self.max_lock {
            return Err(ContractError::InvalidLockDuration);
        }
        if self.max_multiplier_bps < MULTIPLIER_BASE_BPS
            || self.max_multiplier_bps > MAX_MULTIPLIER_BPS
        {
            return Err(ContractError::InvalidConfig);
        }
        if let Some(cap) = self.staking_cap {
            if cap <= 0 {
                return Err(ContractError::InvalidConfig);
            }
        }
        Ok(())
    }
}

/// Running totals shared by every account.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    pub total_staked: i128,
    /// Sum of every account's `weight`; the reward index denominator.
    pub total_weight: i128,
}

/// Per-token settlement watermark for one account.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RewardCheckpoint {
    /// Token index value last observed by the account.
    pub settled_index: i128,
    /// Rewards credited but not yet claimed.
    pub accrued: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeAccount {
    pub balance: i128,
    pub lock_end: u64,
    pub multiplier_bps: u32,
    pub weight: i128,
    pub rewards: Map<Address, RewardCheckpoint>,
}

impl StakeAccount {
    pub fn new(env: &Env) -> Self {
        Self {
            balance: 0,
            lock_end: 0,
            multiplier_bps: MULTIPLIER_BASE_BPS,
            weight: 0,
            rewards: Map::new(env),
        }
    }
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn account_key(staker: &Address) -> (Symbol, Address) {
    (ACCOUNT, staker.clone())
}

pub fn load_config(env: &Env) -> Result<PoolConfig, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ContractError::NotInitialized)
}

pub fn store_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&CONFIG, config);
}

pub fn load_pool(env: &Env) -> PoolState {
    env.storage().instance().get(&POOL).unwrap_or_default()
}

pub fn store_pool(env: &Env, pool: &PoolState) {
    env.storage().instance().set(&POOL, pool);
}

/// Loads the account for `staker`, or a fresh zero-balance account.
pub fn load_account(env: &Env, staker: &Address) -> StakeAccount {
    let key = account_key(staker);
    match env.storage().persistent().get(&key) {
        Some(account) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
            account
        }
        None => StakeAccount::new(env),
    }
}

pub fn store_account(env: &Env, staker: &Address, account: &StakeAccount) {
    let key = account_key(staker);
    env.storage().persistent().set(&key, account);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── State transitions ───────────────────────────────────────────────────────

/// Adds `amount` to `account` with a lock of `lock_duration` seconds.
///
/// The multiplier is recomputed for the whole balance from the lock time
/// that remains after the deposit. A short top-up into an older lock can
/// therefore lower it: the boost always reflects the commitment left, not
/// the one originally made.
///
/// The caller must have settled the account's rewards against its
/// pre-deposit weight before calling this.
pub fn apply_deposit(
    account: &mut StakeAccount,
    pool: &mut PoolState,
    config: &PoolConfig,
    amount: i128,
    lock_duration: u64,
    now: u64,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if lock_duration < config.min_lock || lock_duration > config.max_lock {
        return Err(ContractError::InvalidLockDuration);
    }

    let new_total = pool
        .total_staked
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    if let Some(cap) = config.staking_cap {
        if new_total > cap {
            return Err(ContractError::CapacityExceeded);
        }
    }

    let requested_end = now
        .checked_add(lock_duration)
        .ok_or(ContractError::ArithmeticOverflow)?;
    // A new deposit may extend the lock but never shorten it.
    let lock_end = account.lock_end.max(requested_end);
    let multiplier_bps = rewards::lock_multiplier_bps(
        lock_end - now,
        config.min_lock,
        config.max_lock,
        config.max_multiplier_bps,
    );

    let balance = account
        .balance
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let weight =
        rewards::weight_of(balance, multiplier_bps).ok_or(ContractError::ArithmeticOverflow)?;

    pool.total_weight = reweigh(pool.total_weight, account.weight, weight)?;
    pool.total_staked = new_total;

    account.balance = balance;
    account.lock_end = lock_end;
    account.multiplier_bps = multiplier_bps;
    account.weight = weight;
    Ok(())
}

/// Removes `amount` from `account` once its lock has expired.
///
/// The lock is over by definition, so the remaining balance drops back to
/// the base multiplier.
pub fn apply_withdraw(
    account: &mut StakeAccount,
    pool: &mut PoolState,
    amount: i128,
    now: u64,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if now < account.lock_end {
        return Err(ContractError::LockActive);
    }
    if amount > account.balance {
        return Err(ContractError::InsufficientBalance);
    }

    let balance = account.balance - amount;
    let weight = rewards::weight_of(balance, MULTIPLIER_BASE_BPS)
        .ok_or(ContractError::ArithmeticOverflow)?;

    pool.total_weight = reweigh(pool.total_weight, account.weight, weight)?;
    pool.total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    account.balance = balance;
    account.multiplier_bps = MULTIPLIER_BASE_BPS;
    account.weight = weight;
    Ok(())
}

/// Drops an expired lock's boost so the account weighs its plain balance.
///
/// Returns `false`, changing nothing, while the lock is still running or
/// when the account already sits at the base multiplier. Rewards must be
/// settled first, as with any weight change.
pub fn apply_lock_expiry(
    account: &mut StakeAccount,
    pool: &mut PoolState,
    now: u64,
) -> Result<bool, ContractError> {
    if now < account.lock_end || account.multiplier_bps == MULTIPLIER_BASE_BPS {
        return Ok(false);
    }
    let weight = rewards::weight_of(account.balance, MULTIPLIER_BASE_BPS)
        .ok_or(ContractError::ArithmeticOverflow)?;
    pool.total_weight = reweigh(pool.total_weight, account.weight, weight)?;

    account.multiplier_bps = MULTIPLIER_BASE_BPS;
    account.weight = weight;
    Ok(true)
}

fn reweigh(total: i128, old: i128, new: i128) -> Result<i128, ContractError> {
    total
        .checked_sub(old)
        .and_then(|t| t.checked_add(new))
        .ok_or(ContractError::ArithmeticOverflow)
}
