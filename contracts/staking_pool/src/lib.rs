#![no_std]

pub mod errors;
pub mod events;
pub mod ledger;
pub mod phase;
pub mod pool;
pub mod rewards;
mod storage;

use soroban_sdk::{contract, contractimpl, Address, Env};

pub use errors::{ContractError, ErrorKind};
pub use ledger::{TokenLedger, ValueLedger};
pub use phase::{Phase, Schedule, DEFAULT_PERIOD_LENGTH};
pub use pool::{Payout, Pool, PoolConfig, PoolState};

// ── Contract ─────────────────────────────────────────────────────────────────

/// Single-cycle, time-gated staking pool.
///
/// The owner funds a reward pool once, participants stake during the first
/// period, nothing moves during the second, participants withdraw principal
/// plus reward during the third and fourth, and from then on the owner may
/// sweep whatever is left.
#[contract]
pub struct StakingPoolContract;

#[contractimpl]
impl StakingPoolContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool. The current ledger timestamp becomes `deployed_at`.
    ///
    /// * `reward_asset`  – SAC address of the token staked and paid out.
    /// * `period_length` – length `T` of each window in seconds.
    pub fn initialize(
        env: Env,
        owner: Address,
        reward_asset: Address,
        period_length: u64,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        let now = env.ledger().timestamp();
        let pool = Pool::new(owner.clone(), reward_asset.clone(), period_length, now)?;
        storage::save_pool(&env, &pool);

        events::publish_initialized(&env, owner, reward_asset, period_length, now);

        Ok(())
    }

    // ── Owner funding ───────────────────────────────────────────────────────

    /// One-time reward deposit. The owner must have approved the pool for
    /// at least `amount` on the reward asset.
    pub fn owner_deposit(env: Env, owner: Address, amount: i128) -> Result<(), ContractError> {
        let mut pool = storage::load_pool(&env)?;
        owner.require_auth();

        let now = env.ledger().timestamp();
        let ledger = TokenLedger::new(&env, &pool.config.reward_asset);
        pool.deposit(&ledger, &owner, amount, now)?;
        storage::save_pool(&env, &pool);

        events::publish_funded(&env, owner, amount);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` of the reward asset, pulled from the staker's allowance.
    /// Repeated stakes accumulate.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        let mut pool = storage::load_pool(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let ledger = TokenLedger::new(&env, &pool.config.reward_asset);
        let position = storage::stake_of(&env, &staker);
        let new_position = pool.stake(&ledger, &staker, position, amount, now)?;

        storage::set_stake(&env, &staker, new_position);
        storage::save_pool(&env, &pool);

        events::publish_staked(&env, staker, amount, new_position, pool.state.total_staked);

        Ok(())
    }

    // ── Withdrawal ──────────────────────────────────────────────────────────

    /// Return the caller's principal plus reward. Returns the amount paid.
    pub fn withdraw(env: Env, staker: Address) -> Result<i128, ContractError> {
        let mut pool = storage::load_pool(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let ledger = TokenLedger::new(&env, &pool.config.reward_asset);
        let position = storage::stake_of(&env, &staker);
        let payout = pool.withdraw(&env, &ledger, &staker, position, now)?;

        storage::set_stake(&env, &staker, 0);
        storage::save_pool(&env, &pool);

        events::publish_withdrawn(
            &env,
            staker,
            payout.principal,
            payout.reward,
            pool.state.total_staked,
        );

        Ok(payout.total)
    }

    /// The payout `withdraw` would produce for `staker` right now.
    pub fn preview_withdraw(env: Env, staker: Address) -> Result<Payout, ContractError> {
        let pool = storage::load_pool(&env)?;
        let position = storage::stake_of(&env, &staker);
        pool.preview_withdraw(&env, position, env.ledger().timestamp())
    }

    // ── Owner reclaim ───────────────────────────────────────────────────────

    /// Sweep the pool's remaining balance to the owner once four periods
    /// have passed. Returns the amount swept.
    pub fn owner_reclaim(env: Env, owner: Address) -> Result<i128, ContractError> {
        let mut pool = storage::load_pool(&env)?;
        owner.require_auth();

        let now = env.ledger().timestamp();
        let ledger = TokenLedger::new(&env, &pool.config.reward_asset);
        let amount = pool.reclaim(&ledger, &owner, now)?;
        storage::save_pool(&env, &pool);

        events::publish_reclaimed(&env, owner, amount);

        Ok(amount)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Sum of all outstanding positions.
    pub fn total_staked_amount(env: Env) -> i128 {
        storage::load_state(&env)
            .map(|s| s.total_staked)
            .unwrap_or(0)
    }

    /// A participant's outstanding position (0 once withdrawn).
    pub fn staked_amount(env: Env, staker: Address) -> i128 {
        storage::stake_of(&env, &staker)
    }

    /// Balance of `who` on the reward asset.
    pub fn balance_of(env: Env, who: Address) -> Result<i128, ContractError> {
        let config = storage::load_config(&env)?;
        Ok(TokenLedger::new(&env, &config.reward_asset).balance(&who))
    }

    pub fn get_phase(env: Env) -> Result<Phase, ContractError> {
        let pool = storage::load_pool(&env)?;
        Ok(pool.phase(env.ledger().timestamp()))
    }

    pub fn get_schedule(env: Env) -> Result<Schedule, ContractError> {
        storage::load_pool(&env)?.schedule()
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, ContractError> {
        storage::load_config(&env)
    }

    pub fn get_state(env: Env) -> Result<PoolState, ContractError> {
        storage::load_state(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        Ok(storage::load_config(&env)?.owner)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn is_funded(env: Env) -> bool {
        storage::load_state(&env)
            .map(|s| s.funded)
            .unwrap_or(false)
    }

    /// The owner's deposit, fixed once funded.
    pub fn reward_pool_balance(env: Env) -> i128 {
        storage::load_state(&env)
            .map(|s| s.reward_pool_balance)
            .unwrap_or(0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
