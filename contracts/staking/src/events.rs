#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

use crate::access::Role;

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub stake_token: Address,
    pub min_lock: u64,
    pub max_lock: u64,
    pub max_multiplier_bps: u32,
    pub staking_cap: Option<i128>,
    pub timestamp: u64,
}

/// Fired when a staker deposits.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub staker: Address,
    pub amount: i128,
    pub balance_before: i128,
    pub balance_after: i128,
    pub total_staked_before: i128,
    pub total_staked_after: i128,
    pub lock_end: u64,
    pub multiplier_bps: u32,
    pub timestamp: u64,
}

/// Fired when a staker withdraws principal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub staker: Address,
    pub amount: i128,
    pub balance_before: i128,
    pub balance_after: i128,
    pub total_staked_before: i128,
    pub total_staked_after: i128,
    pub timestamp: u64,
}

/// Fired when an expired lock's boost is dropped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockExpiredEvent {
    pub staker: Address,
    pub multiplier_before: u32,
    pub weight_before: i128,
    pub weight_after: i128,
    pub total_weight_after: i128,
    pub timestamp: u64,
}

/// Fired when a reward injection moves a token's index.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardSuppliedEvent {
    pub token: Address,
    pub funder: Address,
    pub amount: i128,
    pub index_before: i128,
    pub index_after: i128,
    pub total_weight: i128,
    pub outstanding_after: i128,
    pub timestamp: u64,
}

/// Fired once per token paid out by a claim.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub staker: Address,
    pub token: Address,
    pub amount: i128,
    pub outstanding_after: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardTokenChangedEvent {
    pub token: Address,
    pub index: i128,
    pub outstanding: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingCapSetEvent {
    pub old_cap: Option<i128>,
    pub new_cap: Option<i128>,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockBoundsSetEvent {
    pub old_min_lock: u64,
    pub old_max_lock: u64,
    pub new_min_lock: u64,
    pub new_max_lock: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedSetEvent {
    pub caller: Address,
    pub paused: bool,
    pub timestamp: u64,
}

/// Fired when an owner sweeps surplus custody.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensRecoveredEvent {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
    pub obligation: i128,
    pub timestamp: u64,
}

/// Fired by a reserve audit for every token whose custody is short.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortfallDetectedEvent {
    pub token: Address,
    pub custody: i128,
    pub obligation: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FaultClearedEvent {
    pub caller: Address,
    pub timestamp: u64,
}

/// Fired when a role is granted or revoked.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub caller: Address,
    pub target: Address,
    /// Rank of the new role; 0 when revoked.
    pub role: u32,
    pub timestamp: u64,
}

/// Fired when an ownership transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferProposedEvent {
    pub current_owner: Address,
    pub proposed_owner: Address,
    pub timestamp: u64,
}

/// Fired when an ownership transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferAcceptedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

/// Fired when a pending ownership transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferCancelledEvent {
    pub owner: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    stake_token: Address,
    min_lock: u64,
    max_lock: u64,
    max_multiplier_bps: u32,
    staking_cap: Option<i128>,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            stake_token,
            min_lock,
            max_lock,
            max_multiplier_bps,
            staking_cap,
            timestamp: env.ledger().timestamp(),
        },
    );
}

#[allow(clippy::too_many_arguments)]
pub fn publish_deposited(
    env: &Env,
    staker: Address,
    amount: i128,
    balance_before: i128,
    balance_after: i128,
    total_staked_before: i128,
    total_staked_after: i128,
    lock_end: u64,
    multiplier_bps: u32,
) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), staker.clone()),
        DepositedEvent {
            staker,
            amount,
            balance_before,
            balance_after,
            total_staked_before,
            total_staked_after,
            lock_end,
            multiplier_bps,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    staker: Address,
    amount: i128,
    balance_before: i128,
    balance_after: i128,
    total_staked_before: i128,
    total_staked_after: i128,
) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), staker.clone()),
        WithdrawnEvent {
            staker,
            amount,
            balance_before,
            balance_after,
            total_staked_before,
            total_staked_after,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_lock_expired(
    env: &Env,
    staker: Address,
    multiplier_before: u32,
    weight_before: i128,
    weight_after: i128,
    total_weight_after: i128,
) {
    env.events().publish(
        (symbol_short!("LOCK_EXP"), staker.clone()),
        LockExpiredEvent {
            staker,
            multiplier_before,
            weight_before,
            weight_after,
            total_weight_after,
            timestamp: env.ledger().timestamp(),
        },
    );
}

#[allow(clippy::too_many_arguments)]
pub fn publish_reward_supplied(
    env: &Env,
    token: Address,
    funder: Address,
    amount: i128,
    index_before: i128,
    index_after: i128,
    total_weight: i128,
    outstanding_after: i128,
) {
    env.events().publish(
        (symbol_short!("SUPPLIED"), token.clone()),
        RewardSuppliedEvent {
            token,
            funder,
            amount,
            index_before,
            index_after,
            total_weight,
            outstanding_after,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(
    env: &Env,
    staker: Address,
    token: Address,
    amount: i128,
    outstanding_after: i128,
) {
    env.events().publish(
        (symbol_short!("CLMD"), staker.clone(), token.clone()),
        RewardClaimedEvent {
            staker,
            token,
            amount,
            outstanding_after,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_token_added(env: &Env, token: Address, index: i128, outstanding: i128) {
    env.events().publish(
        (symbol_short!("TOK_ADD"), token.clone()),
        RewardTokenChangedEvent {
            token,
            index,
            outstanding,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_token_removed(env: &Env, token: Address, index: i128, outstanding: i128) {
    env.events().publish(
        (symbol_short!("TOK_RMV"), token.clone()),
        RewardTokenChangedEvent {
            token,
            index,
            outstanding,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staking_cap_set(env: &Env, old_cap: Option<i128>, new_cap: Option<i128>) {
    env.events().publish(
        (symbol_short!("CAP_SET"),),
        StakingCapSetEvent {
            old_cap,
            new_cap,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_lock_bounds_set(
    env: &Env,
    old_min_lock: u64,
    old_max_lock: u64,
    new_min_lock: u64,
    new_max_lock: u64,
) {
    env.events().publish(
        (symbol_short!("LOCK_SET"),),
        LockBoundsSetEvent {
            old_min_lock,
            old_max_lock,
            new_min_lock,
            new_max_lock,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_paused_set(env: &Env, caller: Address, paused: bool) {
    env.events().publish(
        (symbol_short!("PAUSED"),),
        PausedSetEvent {
            caller,
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tokens_recovered(
    env: &Env,
    token: Address,
    to: Address,
    amount: i128,
    obligation: i128,
) {
    env.events().publish(
        (symbol_short!("RECOVER"), token.clone()),
        TokensRecoveredEvent {
            token,
            to,
            amount,
            obligation,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_shortfall_detected(env: &Env, token: Address, custody: i128, obligation: i128) {
    env.events().publish(
        (symbol_short!("SHORTFALL"), token.clone()),
        ShortfallDetectedEvent {
            token,
            custody,
            obligation,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_fault_cleared(env: &Env, caller: Address) {
    env.events().publish(
        (symbol_short!("FLT_CLR"),),
        FaultClearedEvent {
            caller,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_changed(env: &Env, caller: Address, target: Address, role: Option<Role>) {
    env.events().publish(
        (symbol_short!("ROLE"), target.clone()),
        RoleChangedEvent {
            caller,
            target,
            role: role.map(|r| r.rank()).unwrap_or(0),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_proposed(env: &Env, current_owner: Address, proposed_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"), current_owner.clone()),
        OwnerTransferProposedEvent {
            current_owner,
            proposed_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_accepted(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"), new_owner.clone()),
        OwnerTransferAcceptedEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_cancelled(env: &Env, owner: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("OWN_CNCL"), owner.clone()),
        OwnerTransferCancelledEvent {
            owner,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
