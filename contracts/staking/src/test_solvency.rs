extern crate std;

use soroban_sdk::{
    testutils::Address as _,
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

use crate::test_token::{MockToken, MockTokenClient};
use crate::{ContractError, PoolConfig, StakingPool, StakingPoolClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

struct Fixture {
    env: Env,
    client: StakingPoolClient<'static>,
    owner: Address,
    stake_token: Address,
    reward: MockTokenClient<'static>,
    staker: Address,
}

/// A pool with one staker (1_000 staked) and a mock reward token that has
/// already supplied 400 rewards.
fn setup() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(StakingPool, ());
    let client = StakingPoolClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(
        &owner,
        &stake_token,
        &PoolConfig {
            min_lock: 0,
            max_lock: 0,
            max_multiplier_bps: 10_000,
            staking_cap: None,
        },
    );

    let reward_id = env.register(MockToken, ());
    let reward = MockTokenClient::new(&env, &reward_id);
    reward.mint(&owner, &1_000_000);
    client.add_reward_token(&owner, &reward_id);

    let staker = Address::generate(&env);
    StellarAssetClient::new(&env, &stake_token).mint(&staker, &1_000);
    client.deposit(&staker, &1_000, &0);
    client.supply_reward(&owner, &reward_id, &400);

    Fixture {
        env,
        client,
        owner,
        stake_token,
        reward,
        staker,
    }
}

// ── Payout solvency ──────────────────────────────────────────────────────────

#[test]
fn test_claim_with_short_custody_is_an_accounting_fault() {
    let f = setup();
    f.reward.drain(&f.client.address, &300);

    match f.client.try_claim(&f.staker, &None) {
        Err(Ok(e)) => assert_eq!(e, ContractError::AccountingFault),
        _ => unreachable!("Expected AccountingFault error"),
    }

    // Credit and obligation survive for a retry.
    assert_eq!(f.client.get_pending_reward(&f.staker, &f.reward.address), 400);
    assert_eq!(f.client.get_reward_token(&f.reward.address).outstanding, 400);
    assert_eq!(f.reward.balance(&f.staker), 0);
}

#[test]
fn test_rejected_transfer_keeps_credit() {
    let f = setup();
    f.reward.set_frozen(&true);

    match f.client.try_claim(&f.staker, &None) {
        Err(Ok(e)) => assert_eq!(e, ContractError::UpstreamTransferFailure),
        _ => unreachable!("Expected UpstreamTransferFailure error"),
    }
    assert_eq!(f.client.get_pending_reward(&f.staker, &f.reward.address), 400);

    f.reward.set_frozen(&false);
    let claimed = f.client.claim(&f.staker, &None);
    assert_eq!(claimed.len(), 1);
    assert_eq!(f.reward.balance(&f.staker), 400);
}

#[test]
fn test_rejected_supply_pull_leaves_index() {
    let f = setup();
    let index = f.client.get_reward_token(&f.reward.address).index;
    f.reward.set_frozen(&true);

    match f.client.try_supply_reward(&f.owner, &f.reward.address, &400) {
        Err(Ok(e)) => assert_eq!(e, ContractError::UpstreamTransferFailure),
        _ => unreachable!("Expected UpstreamTransferFailure error"),
    }
    let state = f.client.get_reward_token(&f.reward.address);
    assert_eq!(state.index, index);
    assert_eq!(state.outstanding, 400);
    assert_eq!(state.total_supplied, 400);
}

// ── Reserve audit and fault latch ────────────────────────────────────────────

#[test]
fn test_audit_latches_fault_and_suspends_rewards() {
    let f = setup();
    assert!(f.client.audit_reserves());
    assert!(!f.client.has_accounting_fault());

    f.reward.drain(&f.client.address, &1);
    assert!(!f.client.audit_reserves());
    assert!(f.client.has_accounting_fault());

    match f.client.try_supply_reward(&f.owner, &f.reward.address, &100) {
        Err(Ok(e)) => assert_eq!(e, ContractError::AccountingFault),
        _ => unreachable!("Expected AccountingFault error"),
    }
    match f.client.try_claim(&f.staker, &None) {
        Err(Ok(e)) => assert_eq!(e, ContractError::AccountingFault),
        _ => unreachable!("Expected AccountingFault error"),
    }

    // Principal movements are unaffected.
    StellarAssetClient::new(&f.env, &f.stake_token).mint(&f.staker, &10);
    f.client.deposit(&f.staker, &10, &0);
    f.client.withdraw(&f.staker, &10);
}

#[test]
fn test_fault_clears_only_once_reconciled() {
    let f = setup();
    f.reward.drain(&f.client.address, &100);
    f.client.audit_reserves();

    match f.client.try_clear_accounting_fault(&f.owner) {
        Err(Ok(e)) => assert_eq!(e, ContractError::AccountingFault),
        _ => unreachable!("Expected AccountingFault error"),
    }
    assert!(f.client.has_accounting_fault());

    // Top the pool back up and reconcile.
    f.reward.mint(&f.client.address, &100);
    f.client.clear_accounting_fault(&f.owner);
    assert!(!f.client.has_accounting_fault());

    f.client.claim(&f.staker, &None);
    assert_eq!(f.reward.balance(&f.staker), 400);
}

#[test]
fn test_only_owner_clears_fault() {
    let f = setup();
    f.reward.drain(&f.client.address, &100);
    f.client.audit_reserves();
    f.reward.mint(&f.client.address, &100);

    let intruder = Address::generate(&f.env);
    match f.client.try_clear_accounting_fault(&intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_audit_covers_stake_principal() {
    let f = setup();
    assert_eq!(f.client.get_obligation(&f.stake_token), 1_000);
    assert_eq!(f.client.get_obligation(&f.reward.address), 400);

    let custody = TokenClient::new(&f.env, &f.stake_token).balance(&f.client.address);
    assert_eq!(custody, 1_000);
    assert!(f.client.audit_reserves());

    // An unrelated token is owed nothing.
    assert_eq!(f.client.get_obligation(&Address::generate(&f.env)), 0);
}

// ── Recovery ─────────────────────────────────────────────────────────────────

#[test]
fn test_recovery_bounded_by_surplus() {
    let f = setup();
    let sink = Address::generate(&f.env);

    // 50 stray reward tokens on top of the 400 owed.
    f.reward.mint(&f.client.address, &50);

    match f.client.try_recover_tokens(&f.owner, &f.reward.address, &sink, &51) {
        Err(Ok(e)) => assert_eq!(e, ContractError::RecoveryExceedsSurplus),
        _ => unreachable!("Expected RecoveryExceedsSurplus error"),
    }

    f.client.recover_tokens(&f.owner, &f.reward.address, &sink, &50);
    assert_eq!(f.reward.balance(&sink), 50);
    assert_eq!(f.reward.balance(&f.client.address), 400);
}

#[test]
fn test_recovery_never_touches_principal() {
    let f = setup();
    let sink = Address::generate(&f.env);
    StellarAssetClient::new(&f.env, &f.stake_token).mint(&f.client.address, &25);

    match f.client.try_recover_tokens(&f.owner, &f.stake_token, &sink, &26) {
        Err(Ok(e)) => assert_eq!(e, ContractError::RecoveryExceedsSurplus),
        _ => unreachable!("Expected RecoveryExceedsSurplus error"),
    }

    f.client.recover_tokens(&f.owner, &f.stake_token, &sink, &25);
    assert_eq!(
        TokenClient::new(&f.env, &f.stake_token).balance(&f.client.address),
        1_000
    );
}

#[test]
fn test_untracked_token_fully_recoverable() {
    let f = setup();
    let sink = Address::generate(&f.env);
    let stray_id = f.env.register(MockToken, ());
    let stray = MockTokenClient::new(&f.env, &stray_id);
    stray.mint(&f.client.address, &77);

    f.client.recover_tokens(&f.owner, &stray_id, &sink, &77);
    assert_eq!(stray.balance(&sink), 77);
}

#[test]
fn test_recovery_requires_owner() {
    let f = setup();
    let manager = Address::generate(&f.env);
    f.client.grant_role(&f.owner, &manager, &crate::Role::RewardManager);
    f.reward.mint(&f.client.address, &50);

    match f.client.try_recover_tokens(&manager, &f.reward.address, &manager, &50) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}
