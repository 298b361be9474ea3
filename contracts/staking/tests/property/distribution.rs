#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for reward distribution.
//!
//! Invariants tested:
//! - A single supply splits in proportion to stake, losing less than one
//!   unit per staker to rounding
//! - Distribution never pays out more than was supplied
//! - A staker's pending reward is unaffected by other stakers joining later
//! - Settling an account again without new supply credits nothing

use proptest::prelude::*;
use soroban_sdk::token::Client as TokenClient;

use crate::common::{flat_config, setup, staker};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Each staker receives `floor(stake × supply / total)` up to rounding,
    /// and the pool never hands out more than it received.
    #[test]
    fn prop_supply_splits_pro_rata(
        stakes in prop::collection::vec(1i128..=1_000_000, 1..6),
        supply in 1i128..=1_000_000_000,
    ) {
        let pool = setup(flat_config());
        let total: i128 = stakes.iter().sum();

        let mut stakers = std::vec::Vec::new();
        for amount in &stakes {
            let who = staker(&pool, *amount);
            pool.client.deposit(&who, amount, &0);
            stakers.push((who, *amount));
        }
        pool.client.supply_reward(&pool.owner, &pool.reward_token, &supply);

        let mut paid = 0i128;
        for (who, amount) in &stakers {
            let pending = pool.client.get_pending_reward(who, &pool.reward_token);
            let exact = amount * supply / total;
            prop_assert!(pending <= exact);
            prop_assert!(exact - pending <= 1);
            paid += pending;
        }
        prop_assert!(paid <= supply);
        prop_assert!(supply - paid <= stakers.len() as i128);
    }

    /// Claiming everything moves exactly the pending amounts and leaves the
    /// remainder as outstanding dust.
    #[test]
    fn prop_claims_never_exceed_supply(
        stakes in prop::collection::vec(1i128..=1_000_000, 1..5),
        supplies in prop::collection::vec(1i128..=10_000_000, 1..4),
    ) {
        let pool = setup(flat_config());
        let mut stakers = std::vec::Vec::new();
        for amount in &stakes {
            let who = staker(&pool, *amount);
            pool.client.deposit(&who, amount, &0);
            stakers.push(who);
        }

        let mut supplied = 0i128;
        for amount in &supplies {
            pool.client.supply_reward(&pool.owner, &pool.reward_token, amount);
            supplied += amount;
        }

        let token = TokenClient::new(&pool.env, &pool.reward_token);
        let mut paid = 0i128;
        for who in &stakers {
            pool.client.claim(who, &None);
            paid += token.balance(who);
            prop_assert_eq!(pool.client.get_pending_reward(who, &pool.reward_token), 0);
        }

        let state = pool.client.get_reward_token(&pool.reward_token);
        prop_assert!(paid <= supplied);
        prop_assert_eq!(state.total_claimed, paid);
        prop_assert_eq!(state.outstanding, supplied - paid);
        prop_assert_eq!(token.balance(&pool.client.address), state.outstanding);
    }

    /// A later depositor does not dilute rewards that were already supplied.
    #[test]
    fn prop_late_deposit_does_not_dilute(
        early in 1i128..=1_000_000,
        late in 1i128..=1_000_000,
        supply in 1i128..=1_000_000_000,
    ) {
        let pool = setup(flat_config());
        let first = staker(&pool, early);
        pool.client.deposit(&first, &early, &0);
        pool.client.supply_reward(&pool.owner, &pool.reward_token, &supply);
        let before = pool.client.get_pending_reward(&first, &pool.reward_token);

        let second = staker(&pool, late);
        pool.client.deposit(&second, &late, &0);

        prop_assert_eq!(pool.client.get_pending_reward(&first, &pool.reward_token), before);
        prop_assert_eq!(pool.client.get_pending_reward(&second, &pool.reward_token), 0);
    }

    /// A top-up settles the account; the credit it finds must equal the
    /// pending view exactly, and a second top-up adds nothing more.
    #[test]
    fn prop_settlement_is_idempotent(
        stake in 1i128..=1_000_000,
        other in 1i128..=1_000_000,
        supply in 1i128..=1_000_000_000,
        top_up in 1i128..=1_000,
    ) {
        let pool = setup(flat_config());
        let who = staker(&pool, stake + 2 * top_up);
        let bystander = staker(&pool, other);
        pool.client.deposit(&who, &stake, &0);
        pool.client.deposit(&bystander, &other, &0);
        pool.client.supply_reward(&pool.owner, &pool.reward_token, &supply);

        let before = pool.client.get_pending_reward(&who, &pool.reward_token);
        pool.client.deposit(&who, &top_up, &0);
        prop_assert_eq!(pool.client.get_pending_reward(&who, &pool.reward_token), before);
        pool.client.deposit(&who, &top_up, &0);
        prop_assert_eq!(pool.client.get_pending_reward(&who, &pool.reward_token), before);

        let account = pool.client.get_account(&who);
        let checkpoint = account.rewards.get(pool.reward_token.clone()).unwrap();
        prop_assert_eq!(checkpoint.accrued, before);
        prop_assert_eq!(
            checkpoint.settled_index,
            pool.client.get_reward_token(&pool.reward_token).index
        );
    }
}
