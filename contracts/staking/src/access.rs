use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::ContractError;

// ── Storage keys ────────────────────────────────────────────────────────────

const ROLE: Symbol = symbol_short!("ROLE");
const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

/// Ranked admin roles. A higher role satisfies any lower requirement.
///
/// - `Operator`      – pause and unpause.
/// - `RewardManager` – manage the reward registry, supply rewards, adjust
///                     the staking cap and lock bounds.
/// - `Owner`         – everything above plus role management, token
///                     recovery and fault clearing.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Operator = 1,
    RewardManager = 2,
    Owner = 3,
}

impl Role {
    pub fn rank(&self) -> u32 {
        *self as u32
    }

    pub fn satisfies(&self, required: Role) -> bool {
        self.rank() >= required.rank()
    }
}

fn role_key(who: &Address) -> (Symbol, Address) {
    (ROLE, who.clone())
}

pub fn get_role(env: &Env, who: &Address) -> Option<Role> {
    let key = role_key(who);
    let role: Option<Role> = env.storage().persistent().get(&key);
    if role.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    role
}

pub fn set_role(env: &Env, who: &Address, role: Role) {
    let key = role_key(who);
    env.storage().persistent().set(&key, &role);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn remove_role(env: &Env, who: &Address) {
    env.storage().persistent().remove(&role_key(who));
}

/// Fails with `Unauthorized` unless `caller` holds at least `required`.
/// Authentication (`require_auth`) is the caller's job.
pub fn require_role(env: &Env, caller: &Address, required: Role) -> Result<(), ContractError> {
    match get_role(env, caller) {
        Some(role) if role.satisfies(required) => Ok(()),
        _ => Err(ContractError::Unauthorized),
    }
}

// ── Ownership ───────────────────────────────────────────────────────────────

pub fn owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&OWNER)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
    set_role(env, owner, Role::Owner);
}

pub fn pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

pub fn set_pending_owner(env: &Env, proposed: &Address) {
    env.storage().instance().set(&PENDING_OWNER, proposed);
}

pub fn clear_pending_owner(env: &Env) {
    env.storage().instance().remove(&PENDING_OWNER);
}
