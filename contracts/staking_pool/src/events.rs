#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub reward_asset: Address,
    pub period_length: u64,
    pub deployed_at: u64,
}

/// Fired when the owner makes the one-time reward deposit.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundedEvent {
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a participant stakes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_position: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a participant withdraws principal plus reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub staker: Address,
    pub principal: i128,
    pub reward: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when the owner sweeps the remaining balance.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReclaimedEvent {
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    reward_asset: Address,
    period_length: u64,
    deployed_at: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            reward_asset,
            period_length,
            deployed_at,
        },
    );
}

pub fn publish_funded(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("FUNDED"), owner.clone()),
        FundedEvent {
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    staker: Address,
    amount: i128,
    new_position: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            amount,
            new_position,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    staker: Address,
    principal: i128,
    reward: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), staker.clone()),
        WithdrawnEvent {
            staker,
            principal,
            reward,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reclaimed(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RECLAIMED"), owner.clone()),
        ReclaimedEvent {
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
