#![no_std]

pub mod access;
pub mod events;
pub mod guard;
pub mod ledger;
pub mod registry;
pub mod rewards;
pub mod solvency;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol, Vec,
};

pub use access::Role;
pub use ledger::{PoolConfig, PoolState, RewardCheckpoint, StakeAccount};
pub use registry::{RewardTokenState, MAX_REWARD_TOKENS};

use guard::ReentrancyGuard;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const STAKE_TOKEN: Symbol = symbol_short!("STK_TOK");
const PAUSED: Symbol = symbol_short!("PAUSED");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    CapacityExceeded = 5,
    LockActive = 6,
    UnknownRewardToken = 7,
    EmptyPoolReward = 8,
    /// Custody is below a tracked obligation. Never expected in normal
    /// operation; reward operations stay suspended until reconciled.
    AccountingFault = 9,
    UpstreamTransferFailure = 10,
    InsufficientBalance = 11,
    InvalidLockDuration = 12,
    InvalidConfig = 13,
    Paused = 14,
    RewardTokenExists = 15,
    RegistryFull = 16,
    RecoveryExceedsSurplus = 17,
    Reentrant = 18,
    ArithmeticOverflow = 19,
    NoPendingOwner = 20,
}

// ── Public-facing types (re-exported for test consumers) ─────────────────────

/// A per-token amount, returned by `claim` and `get_pending_rewards`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardAmount {
    pub token: Address,
    pub amount: i128,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingPool;

#[contractimpl]
impl StakingPool {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `owner`       – receives the `Owner` role.
    /// * `stake_token` – SAC address of the token users deposit.
    /// * `config`      – lock bounds, multiplier ceiling and optional cap.
    pub fn initialize(
        env: Env,
        owner: Address,
        stake_token: Address,
        config: PoolConfig,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        let _guard = ReentrancyGuard::enter(&env)?;
        config.validate()?;

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&STAKE_TOKEN, &stake_token);
        ledger::store_config(&env, &config);
        ledger::store_pool(&env, &PoolState::default());
        access::set_owner(&env, &owner);

        events::publish_initialized(
            &env,
            owner,
            stake_token,
            config.min_lock,
            config.max_lock,
            config.max_multiplier_bps,
            config.staking_cap,
        );

        Ok(())
    }

    // ── Stake ledger ────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens locked for `lock_duration` seconds.
    ///
    /// Pending rewards are settled against the pre-deposit weight first, so
    /// the new tokens earn nothing from rewards supplied before this call.
    pub fn deposit(
        env: Env,
        staker: Address,
        amount: i128,
        lock_duration: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        Self::require_not_paused(&env)?;

        let config = ledger::load_config(&env)?;
        let registry = registry::load(&env);
        let mut pool = ledger::load_pool(&env);
        let mut account = ledger::load_account(&env, &staker);
        let balance_before = account.balance;
        let total_before = pool.total_staked;

        // 1. Settle at the old weight.
        registry::settle(&env, &mut account, &registry)?;

        // 2. Apply the deposit and commit.
        let now = env.ledger().timestamp();
        ledger::apply_deposit(&mut account, &mut pool, &config, amount, lock_duration, now)?;
        ledger::store_account(&env, &staker, &account);
        ledger::store_pool(&env, &pool);

        // 3. Pull the tokens in.
        let stake_token = Self::stake_token(&env)?;
        Self::pull(&env, &stake_token, &staker, amount)?;

        events::publish_deposited(
            &env,
            staker,
            amount,
            balance_before,
            account.balance,
            total_before,
            pool.total_staked,
            account.lock_end,
            account.multiplier_bps,
        );

        Ok(())
    }

    /// Withdraw `amount` of principal once the lock has expired.
    ///
    /// Permitted while the pool is paused so stakers can always exit.
    pub fn withdraw(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;

        let registry = registry::load(&env);
        let mut pool = ledger::load_pool(&env);
        let mut account = ledger::load_account(&env, &staker);
        let balance_before = account.balance;
        let total_before = pool.total_staked;

        registry::settle(&env, &mut account, &registry)?;

        let now = env.ledger().timestamp();
        ledger::apply_withdraw(&mut account, &mut pool, amount, now)?;
        ledger::store_account(&env, &staker, &account);
        ledger::store_pool(&env, &pool);

        let stake_token = Self::stake_token(&env)?;
        Self::push(&env, &stake_token, &staker, amount)?;

        events::publish_withdrawn(
            &env,
            staker,
            amount,
            balance_before,
            account.balance,
            total_before,
            pool.total_staked,
        );

        Ok(())
    }

    /// Drop the boost of an account whose lock has expired, so it stops
    /// outweighing stakers who are still committed. Settles first.
    ///
    /// Callable by anyone. Returns `true` if the weight changed.
    pub fn refresh_lock(env: Env, staker: Address) -> Result<bool, ContractError> {
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::enter(&env)?;

        let registry = registry::load(&env);
        let mut pool = ledger::load_pool(&env);
        let mut account = ledger::load_account(&env, &staker);
        let multiplier_before = account.multiplier_bps;
        let weight_before = account.weight;

        registry::settle(&env, &mut account, &registry)?;
        let now = env.ledger().timestamp();
        if !ledger::apply_lock_expiry(&mut account, &mut pool, now)? {
            return Ok(false);
        }
        ledger::store_account(&env, &staker, &account);
        ledger::store_pool(&env, &pool);

        events::publish_lock_expired(
            &env,
            staker,
            multiplier_before,
            weight_before,
            account.weight,
            pool.total_weight,
        );
        Ok(true)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Inject `amount` of `token` as rewards for everyone currently staked.
    ///
    /// Cost is independent of the number of stakers: only the token's index
    /// moves. Returns the new index.
    ///
    /// Requires at least `RewardManager`.
    pub fn supply_reward(
        env: Env,
        funder: Address,
        token: Address,
        amount: i128,
    ) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        funder.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        Self::require_not_paused(&env)?;
        solvency::require_no_fault(&env)?;
        access::require_role(&env, &funder, Role::RewardManager)?;

        let pool = ledger::load_pool(&env);
        let mut registry = registry::load(&env);
        let mut state = registry
            .get(token.clone())
            .ok_or(ContractError::UnknownRewardToken)?;

        let index_before = registry::record_supply(&env, &mut state, amount, pool.total_weight)?;
        registry.set(token.clone(), state.clone());
        registry::store(&env, &registry);

        Self::pull(&env, &token, &funder, amount)?;

        events::publish_reward_supplied(
            &env,
            token,
            funder,
            amount,
            index_before,
            state.index,
            pool.total_weight,
            state.outstanding,
        );

        Ok(state.index)
    }

    /// Claim settled rewards for `tokens`, or for every registered token
    /// when `None`. Tokens with nothing accrued are skipped.
    ///
    /// All bookkeeping is committed before the first payout. If any payout
    /// would leave a token's custody below its obligation the whole claim
    /// fails with `AccountingFault` and every credit is kept.
    pub fn claim(
        env: Env,
        staker: Address,
        tokens: Option<Vec<Address>>,
    ) -> Result<Vec<RewardAmount>, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        Self::require_not_paused(&env)?;
        solvency::require_no_fault(&env)?;

        let stake_token = Self::stake_token(&env)?;
        let pool = ledger::load_pool(&env);
        let mut registry = registry::load(&env);
        let mut account = ledger::load_account(&env, &staker);

        registry::settle(&env, &mut account, &registry)?;

        let targets = tokens.unwrap_or_else(|| registry.keys());
        let mut payouts: Vec<RewardAmount> = Vec::new(&env);
        for token in targets.iter() {
            let mut state = registry
                .get(token.clone())
                .ok_or(ContractError::UnknownRewardToken)?;
            let obligation = solvency::obligation(&token, &stake_token, &pool, &registry)?;

            let amount = registry::take_accrued(&mut account, &mut state, &token)?;
            if amount == 0 {
                continue;
            }
            solvency::require_solvent(&env, &token, obligation)?;

            registry.set(token.clone(), state);
            payouts.push_back(RewardAmount { token, amount });
        }

        ledger::store_account(&env, &staker, &account);
        registry::store(&env, &registry);

        for payout in payouts.iter() {
            Self::push(&env, &payout.token, &staker, payout.amount)?;
            let outstanding = registry
                .get(payout.token.clone())
                .map(|s| s.outstanding)
                .unwrap_or(0);
            events::publish_reward_claimed(
                &env,
                staker.clone(),
                payout.token,
                payout.amount,
                outstanding,
            );
        }

        Ok(payouts)
    }

    // ── Reward-token registry ───────────────────────────────────────────────

    /// Register `token` as a reward token, or reactivate a retired one.
    ///
    /// Requires at least `RewardManager`.
    pub fn add_reward_token(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        access::require_role(&env, &caller, Role::RewardManager)?;

        let mut registry = registry::load(&env);
        registry::register(&mut registry, &token)?;
        registry::store(&env, &registry);

        let state = registry.get(token.clone()).unwrap_or_default();
        events::publish_reward_token_added(&env, token, state.index, state.outstanding);
        Ok(())
    }

    /// Stop accepting new supply of `token`.
    ///
    /// Credit already recorded in its index stays claimable; the entry keeps
    /// its registry slot.
    ///
    /// Requires at least `RewardManager`.
    pub fn remove_reward_token(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        access::require_role(&env, &caller, Role::RewardManager)?;

        let mut registry = registry::load(&env);
        let state = registry::retire(&mut registry, &token)?;
        registry::store(&env, &registry);

        events::publish_reward_token_removed(&env, token, state.index, state.outstanding);
        Ok(())
    }

    // ── Solvency ────────────────────────────────────────────────────────────

    /// Sweep `amount` of `token` that the pool holds beyond its tracked
    /// obligation in that token.
    ///
    /// Requires `Owner`.
    pub fn recover_tokens(
        env: Env,
        caller: Address,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        access::require_role(&env, &caller, Role::Owner)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let stake_token = Self::stake_token(&env)?;
        let pool = ledger::load_pool(&env);
        let registry = registry::load(&env);
        let obligation = solvency::obligation(&token, &stake_token, &pool, &registry)?;
        if amount > solvency::surplus(&env, &token, obligation) {
            return Err(ContractError::RecoveryExceedsSurplus);
        }

        Self::push(&env, &token, &to, amount)?;

        events::publish_tokens_recovered(&env, token, to, amount, obligation);
        Ok(())
    }

    /// Compare custody against obligation for the stake token and every
    /// registered reward token.
    ///
    /// On any shortfall the accounting-fault latch is set, which suspends
    /// `claim` and `supply_reward`. Returns `true` if every token is covered.
    /// Callable by anyone.
    pub fn audit_reserves(env: Env) -> Result<bool, ContractError> {
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::enter(&env)?;

        let solvent = Self::check_reserves(&env)?;
        if !solvent {
            solvency::latch_fault(&env);
        }
        Ok(solvent)
    }

    /// Lift the accounting-fault latch after manual reconciliation.
    ///
    /// Re-audits first and refuses while any shortfall remains.
    ///
    /// Requires `Owner`.
    pub fn clear_accounting_fault(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        access::require_role(&env, &caller, Role::Owner)?;

        if !Self::check_reserves(&env)? {
            return Err(ContractError::AccountingFault);
        }
        solvency::clear_fault(&env);

        events::publish_fault_cleared(&env, caller);
        Ok(())
    }

    // ── Pool configuration ──────────────────────────────────────────────────

    /// Set or lift the staking cap. A cap below the current total only
    /// blocks further deposits.
    ///
    /// Requires at least `RewardManager`.
    pub fn set_staking_cap(
        env: Env,
        caller: Address,
        cap: Option<i128>,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        access::require_role(&env, &caller, Role::RewardManager)?;

        if matches!(cap, Some(c) if c <= 0) {
            return Err(ContractError::InvalidAmount);
        }
        let mut config = ledger::load_config(&env)?;
        let old_cap = config.staking_cap;
        config.staking_cap = cap;
        ledger::store_config(&env, &config);

        events::publish_staking_cap_set(&env, old_cap, cap);
        Ok(())
    }

    /// Update the allowed lock-duration range. Existing locks and
    /// multipliers are untouched; the new bounds apply to later deposits.
    ///
    /// Requires at least `RewardManager`.
    pub fn set_lock_bounds(
        env: Env,
        caller: Address,
        min_lock: u64,
        max_lock: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        access::require_role(&env, &caller, Role::RewardManager)?;

        let mut config = ledger::load_config(&env)?;
        let (old_min, old_max) = (config.min_lock, config.max_lock);
        config.min_lock = min_lock;
        config.max_lock = max_lock;
        config.validate()?;
        ledger::store_config(&env, &config);

        events::publish_lock_bounds_set(&env, old_min, old_max, min_lock, max_lock);
        Ok(())
    }

    /// Suspend or resume deposits, claims and reward supply. Withdrawals
    /// are unaffected.
    ///
    /// Requires at least `Operator`.
    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        access::require_role(&env, &caller, Role::Operator)?;

        env.storage().instance().set(&PAUSED, &paused);

        events::publish_paused_set(&env, caller, paused);
        Ok(())
    }

    // ── Role management ─────────────────────────────────────────────────────

    /// Assign `role` to `target`. The primary owner's role cannot be
    /// changed this way. Requires `Owner`.
    pub fn grant_role(
        env: Env,
        caller: Address,
        target: Address,
        role: Role,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        access::require_role(&env, &caller, Role::Owner)?;

        if target == access::owner(&env)? {
            return Err(ContractError::Unauthorized);
        }

        access::set_role(&env, &target, role);

        events::publish_role_changed(&env, caller, target, Some(role));
        Ok(())
    }

    /// Strip any role from `target`. The primary owner cannot be revoked;
    /// use the ownership transfer instead. Requires `Owner`.
    pub fn revoke_role(env: Env, caller: Address, target: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        access::require_role(&env, &caller, Role::Owner)?;

        if target == access::owner(&env)? {
            return Err(ContractError::Unauthorized);
        }
        access::remove_role(&env, &target);

        events::publish_role_changed(&env, caller, target, None);
        Ok(())
    }

    pub fn get_role(env: Env, who: Address) -> Option<Role> {
        access::get_role(&env, &who)
    }

    // ── Ownership transfer (two-step) ──────────────────────────────────────

    /// Propose a new primary owner. Only the current primary owner can call
    /// this; the proposed owner completes it with `accept_owner`.
    pub fn propose_owner(
        env: Env,
        current_owner: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        Self::require_primary_owner(&env, &current_owner)?;

        access::set_pending_owner(&env, &new_owner);

        events::publish_owner_transfer_proposed(&env, current_owner, new_owner);
        Ok(())
    }

    /// Accept a pending ownership transfer. The previous owner loses its
    /// role.
    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_owner.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;

        let pending = access::pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        if new_owner != pending {
            return Err(ContractError::Unauthorized);
        }
        let old_owner = access::owner(&env)?;

        access::remove_role(&env, &old_owner);
        access::set_owner(&env, &new_owner);
        access::clear_pending_owner(&env);

        events::publish_owner_transfer_accepted(&env, old_owner, new_owner);
        Ok(())
    }

    pub fn cancel_owner_transfer(env: Env, current_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();
        let _guard = ReentrancyGuard::enter(&env)?;
        Self::require_primary_owner(&env, &current_owner)?;

        let pending = access::pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        access::clear_pending_owner(&env);

        events::publish_owner_transfer_cancelled(&env, current_owner, pending);
        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        access::owner(&env)
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        access::pending_owner(&env)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_stake_token(env: Env) -> Result<Address, ContractError> {
        Self::stake_token(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, ContractError> {
        ledger::load_config(&env)
    }

    /// Full ledger entry for `staker`; a zero account if it never deposited.
    pub fn get_account(env: Env, staker: Address) -> StakeAccount {
        ledger::load_account(&env, &staker)
    }

    pub fn get_balance(env: Env, staker: Address) -> i128 {
        ledger::load_account(&env, &staker).balance
    }

    pub fn get_lock_end(env: Env, staker: Address) -> u64 {
        ledger::load_account(&env, &staker).lock_end
    }

    /// Claimable amount of `token` for `staker` as of now, without settling.
    pub fn get_pending_reward(
        env: Env,
        staker: Address,
        token: Address,
    ) -> Result<i128, ContractError> {
        let account = ledger::load_account(&env, &staker);
        registry::pending(&env, &account, &registry::load(&env), &token)
    }

    /// Claimable amounts for every registered token, zeros included.
    pub fn get_pending_rewards(
        env: Env,
        staker: Address,
    ) -> Result<Vec<RewardAmount>, ContractError> {
        let account = ledger::load_account(&env, &staker);
        let registry = registry::load(&env);
        let mut pending = Vec::new(&env);
        for token in registry.keys().iter() {
            let amount = registry::pending(&env, &account, &registry, &token)?;
            pending.push_back(RewardAmount { token, amount });
        }
        Ok(pending)
    }

    pub fn get_total_staked(env: Env) -> i128 {
        ledger::load_pool(&env).total_staked
    }

    pub fn get_total_weight(env: Env) -> i128 {
        ledger::load_pool(&env).total_weight
    }

    pub fn get_staking_cap(env: Env) -> Option<i128> {
        ledger::load_config(&env).ok().and_then(|c| c.staking_cap)
    }

    /// Registered reward tokens in key order, retired ones included.
    pub fn get_reward_tokens(env: Env) -> Vec<Address> {
        registry::load(&env).keys()
    }

    pub fn get_reward_token(env: Env, token: Address) -> Result<RewardTokenState, ContractError> {
        registry::load(&env)
            .get(token)
            .ok_or(ContractError::UnknownRewardToken)
    }

    /// Amount of `token` the pool must keep in custody.
    pub fn get_obligation(env: Env, token: Address) -> Result<i128, ContractError> {
        let stake_token = Self::stake_token(&env)?;
        solvency::obligation(
            &token,
            &stake_token,
            &ledger::load_pool(&env),
            &registry::load(&env),
        )
    }

    pub fn is_paused(env: Env) -> bool {
        env.storage().instance().get(&PAUSED).unwrap_or(false)
    }

    pub fn has_accounting_fault(env: Env) -> bool {
        solvency::is_fault_latched(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_not_paused(env: &Env) -> Result<(), ContractError> {
        if env.storage().instance().get(&PAUSED).unwrap_or(false) {
            return Err(ContractError::Paused);
        }
        Ok(())
    }

    fn require_primary_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if *caller != access::owner(env)? {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn stake_token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&STAKE_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Audit every tracked token, publishing a shortfall event for each
    /// one that is under-collateralised.
    fn check_reserves(env: &Env) -> Result<bool, ContractError> {
        let stake_token = Self::stake_token(env)?;
        let pool = ledger::load_pool(env);
        let registry = registry::load(env);

        let mut tracked = registry.keys();
        if !registry.contains_key(stake_token.clone()) {
            tracked.push_back(stake_token.clone());
        }

        let mut solvent = true;
        for token in tracked.iter() {
            let obligation = solvency::obligation(&token, &stake_token, &pool, &registry)?;
            let custody = solvency::custody(env, &token);
            if custody < obligation {
                solvent = false;
                events::publish_shortfall_detected(env, token, custody, obligation);
            }
        }
        Ok(solvent)
    }

    /// Move `amount` of `token` from `from` into the pool.
    fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), ContractError> {
        match token::Client::new(env, token).try_transfer(
            from,
            &env.current_contract_address(),
            &amount,
        ) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::UpstreamTransferFailure),
        }
    }

    /// Move `amount` of `token` from the pool to `to`.
    fn push(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
        match token::Client::new(env, token).try_transfer(
            &env.current_contract_address(),
            to,
            &amount,
        ) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::UpstreamTransferFailure),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test_token;



#[cfg(test)]
mod test_solvency;
