//! Minimal token contract for failure injection in tests.
//!
//! Implements the subset of the token interface the pool calls (`balance`,
//! `transfer`) plus hooks to freeze transfers and to drain a holder's
//! balance without authorization.

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, Address, Env, Symbol,
};

const BALANCE: Symbol = symbol_short!("BAL");
const FROZEN: Symbol = symbol_short!("FROZEN");

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockTokenError {
    InsufficientBalance = 1,
    Frozen = 2,
}

#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&(BALANCE, to), &(balance + amount));
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage().persistent().get(&(BALANCE, id)).unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        if env.storage().instance().get(&FROZEN).unwrap_or(false) {
            panic_with_error!(&env, MockTokenError::Frozen);
        }
        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic_with_error!(&env, MockTokenError::InsufficientBalance);
        }
        env.storage()
            .persistent()
            .set(&(BALANCE, from), &(from_balance - amount));
        Self::mint(env, to, amount);
    }

    pub fn set_frozen(env: Env, frozen: bool) {
        env.storage().instance().set(&FROZEN, &frozen);
    }

    /// Removes `amount` from `holder` with no authorization, simulating a
    /// loss of custody.
    pub fn drain(env: Env, holder: Address, amount: i128) {
        let balance = Self::balance(env.clone(), holder.clone());
        env.storage()
            .persistent()
            .set(&(BALANCE, holder), &(balance - amount));
    }
}
