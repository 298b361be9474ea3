#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use reward_staking::{PoolConfig, StakingPool, StakingPoolClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { amount: i64, lock: u16 },
    Withdraw { amount: i64 },
    Supply { amount: u32 },
    Claim,
    Warp { seconds: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingPool, ());
    let client = StakingPoolClient::new(&env, &contract_id);
    client.initialize(
        &owner,
        &stake_token,
        &PoolConfig {
            min_lock: 0,
            max_lock: 3_600,
            max_multiplier_bps: 30_000,
            staking_cap: None,
        },
    );
    client.add_reward_token(&owner, &reward_token);
    StellarAssetClient::new(&env, &reward_token).mint(&owner, &(i64::MAX as i128));

    let users: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
    for user in &users {
        StellarAssetClient::new(&env, &stake_token).mint(user, &(i64::MAX as i128));
    }

    // Errors are fine; a panic or a broken ledger is not.
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Deposit { amount, lock } => {
                let _ = client.try_deposit(caller, &(amount as i128), &(lock as u64));
            }
            FuzzAction::Withdraw { amount } => {
                let _ = client.try_withdraw(caller, &(amount as i128));
            }
            FuzzAction::Supply { amount } => {
                let _ = client.try_supply_reward(&owner, &reward_token, &(amount as i128));
            }
            FuzzAction::Claim => {
                let _ = client.try_claim(caller, &None);
            }
            FuzzAction::Warp { seconds } => {
                env.ledger().with_mut(|l| l.timestamp += seconds as u64);
            }
        }

        let staked: i128 = users.iter().map(|u| client.get_balance(u)).sum();
        assert_eq!(client.get_total_staked(), staked);
        assert_eq!(
            TokenClient::new(&env, &stake_token).balance(&contract_id),
            staked
        );
        let state = client.get_reward_token(&reward_token);
        assert!(state.total_claimed <= state.total_supplied);
        assert_eq!(
            TokenClient::new(&env, &reward_token).balance(&contract_id),
            state.outstanding
        );
    }
});
