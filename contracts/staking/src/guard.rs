use soroban_sdk::{symbol_short, Env, Symbol};

use crate::ContractError;

const ENTERED: Symbol = symbol_short!("ENTERED");

/// Call-in-progress flag held for the duration of one state-mutating entry
/// point. Released when dropped, including on early `?` returns.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn enter(env: &'a Env) -> Result<Self, ContractError> {
        if env.storage().instance().has(&ENTERED) {
            return Err(ContractError::Reentrant);
        }
        env.storage().instance().set(&ENTERED, &true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&ENTERED);
    }
}
