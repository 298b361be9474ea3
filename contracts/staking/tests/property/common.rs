//! Shared fixtures for the property suites.

use reward_staking::{PoolConfig, StakingPool, StakingPoolClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env};

pub struct Pool {
    pub env: Env,
    pub client: StakingPoolClient<'static>,
    pub owner: Address,
    pub stake_token: Address,
    pub reward_token: Address,
}

/// A fresh pool with one registered reward token. The owner holds plenty of
/// reward tokens to supply.
pub fn setup(config: PoolConfig) -> Pool {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingPool, ());
    let client = StakingPoolClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &stake_token, &config);
    client.add_reward_token(&owner, &reward_token);
    StellarAssetClient::new(&env, &reward_token).mint(&owner, &(i64::MAX as i128));

    Pool {
        env,
        client,
        owner,
        stake_token,
        reward_token,
    }
}

pub fn flat_config() -> PoolConfig {
    PoolConfig {
        min_lock: 0,
        max_lock: 0,
        max_multiplier_bps: 10_000,
        staking_cap: None,
    }
}

pub fn staker(pool: &Pool, funds: i128) -> Address {
    let who = Address::generate(&pool.env);
    StellarAssetClient::new(&pool.env, &pool.stake_token).mint(&who, &funds);
    who
}
