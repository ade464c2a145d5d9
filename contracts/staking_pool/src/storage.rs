use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::errors::ContractError;
use crate::pool::{Pool, PoolConfig, PoolState};

// ── Storage key constants ────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const STATE: Symbol = symbol_short!("STATE");

// Per-participant persistent storage uses tuple keys: (prefix, address)
const USER_STAKE: Symbol = symbol_short!("STK");

const DAY_IN_LEDGERS: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;
const TTL_THRESHOLD: u32 = TTL_EXTEND_TO - DAY_IN_LEDGERS;

fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn load_config(env: &Env) -> Result<PoolConfig, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ContractError::NotInitialized)
}

pub fn load_state(env: &Env) -> Result<PoolState, ContractError> {
    env.storage()
        .instance()
        .get(&STATE)
        .ok_or(ContractError::NotInitialized)
}

pub fn load_pool(env: &Env) -> Result<Pool, ContractError> {
    Ok(Pool {
        config: load_config(env)?,
        state: load_state(env)?,
    })
}

pub fn save_pool(env: &Env, pool: &Pool) {
    env.storage().instance().set(&CONFIG, &pool.config);
    env.storage().instance().set(&STATE, &pool.state);
    extend_ttl_instance(env);
}

/// A participant's position; 0 when absent or withdrawn.
pub fn stake_of(env: &Env, staker: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&(USER_STAKE, staker.clone()))
        .unwrap_or(0)
}

pub fn set_stake(env: &Env, staker: &Address, amount: i128) {
    let key = (USER_STAKE, staker.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
