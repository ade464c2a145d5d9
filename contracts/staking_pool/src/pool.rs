//! The pool state machine.
//!
//! [`Pool`] holds everything except the per-participant positions, which the
//! contract keeps in persistent storage and hands in per call. Every method
//! takes the timestamp it should judge phases by, validates, moves value
//! through a [`ValueLedger`], and only then touches `self`. A failed call
//! leaves the pool exactly as it was.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::ContractError;
use crate::ledger::ValueLedger;
use crate::phase::{self, Phase, Schedule, RECLAIM_OPENS, WITHDRAW_OPENS};
use crate::rewards;

/// Parameters fixed at initialisation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub owner: Address,
    /// Token contract the pool takes stakes in and pays rewards from.
    pub reward_asset: Address,
    pub period_length: u64,
    pub deployed_at: u64,
}

/// Mutable accounting.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Set once by the owner's deposit; never cleared.
    pub funded: bool,
    pub reward_pool_balance: i128,
    /// Sum of all outstanding positions.
    pub total_staked: i128,
    /// Rewards paid out to participants so far.
    pub reward_distributed: i128,
    /// Participants with a non-zero position.
    pub stakers: u32,
    /// Value returned to the owner by `reclaim`.
    pub reclaimed: i128,
}

impl PoolState {
    pub fn empty() -> Self {
        PoolState {
            funded: false,
            reward_pool_balance: 0,
            total_staked: 0,
            reward_distributed: 0,
            stakers: 0,
            reclaimed: 0,
        }
    }
}

/// Breakdown of a withdrawal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub principal: i128,
    pub reward: i128,
    pub total: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub config: PoolConfig,
    pub state: PoolState,
}

impl Pool {
    pub fn new(
        owner: Address,
        reward_asset: Address,
        period_length: u64,
        deployed_at: u64,
    ) -> Result<Self, ContractError> {
        if period_length == 0 || Schedule::new(deployed_at, period_length).is_none() {
            return Err(ContractError::InvalidPeriod);
        }
        Ok(Pool {
            config: PoolConfig {
                owner,
                reward_asset,
                period_length,
                deployed_at,
            },
            state: PoolState::empty(),
        })
    }

    pub fn phase(&self, now: u64) -> Phase {
        Phase::at(self.elapsed(now), self.config.period_length)
    }

    pub fn schedule(&self) -> Result<Schedule, ContractError> {
        Schedule::new(self.config.deployed_at, self.config.period_length)
            .ok_or(ContractError::InvalidPeriod)
    }

    fn elapsed(&self, now: u64) -> u64 {
        phase::elapsed(now, self.config.deployed_at)
    }

    fn period_index(&self, now: u64) -> u64 {
        phase::period_index(self.elapsed(now), self.config.period_length)
    }

    fn require_owner(&self, caller: &Address) -> Result<(), ContractError> {
        if *caller != self.config.owner {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    // ── Owner funding ────────────────────────────────────────────────────────

    /// One-time reward deposit, pulled from the owner's allowance.
    ///
    /// `AlreadyFunded` takes precedence over the window check so a repeated
    /// deposit reports the same error in every phase.
    pub fn deposit<L: ValueLedger>(
        &mut self,
        ledger: &L,
        caller: &Address,
        amount: i128,
        now: u64,
    ) -> Result<(), ContractError> {
        self.require_owner(caller)?;
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        if self.state.funded {
            return Err(ContractError::AlreadyFunded);
        }
        if self.phase(now) != Phase::FundingAndStake {
            return Err(ContractError::DepositWindowClosed);
        }

        ledger.pull(caller, amount)?;

        self.state.reward_pool_balance = amount;
        self.state.funded = true;
        Ok(())
    }

    // ── Staking ──────────────────────────────────────────────────────────────

    /// Add `amount` to `staker`'s `position`. Returns the new position.
    pub fn stake<L: ValueLedger>(
        &mut self,
        ledger: &L,
        staker: &Address,
        position: i128,
        amount: i128,
        now: u64,
    ) -> Result<i128, ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        if self.phase(now) != Phase::FundingAndStake {
            return Err(ContractError::StakeWindowClosed);
        }
        if !self.state.funded {
            return Err(ContractError::PoolNotFunded);
        }

        let new_position = position
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        let new_total = self
            .state
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        let new_stakers = if position == 0 {
            self.state
                .stakers
                .checked_add(1)
                .ok_or(ContractError::Overflow)?
        } else {
            self.state.stakers
        };

        ledger.pull(staker, amount)?;

        self.state.stakers = new_stakers;
        self.state.total_staked = new_total;
        Ok(new_position)
    }

    // ── Withdrawal ───────────────────────────────────────────────────────────

    /// What a withdrawal of `position` at `now` would pay, without paying it.
    pub fn preview_withdraw(
        &self,
        env: &Env,
        position: i128,
        now: u64,
    ) -> Result<Payout, ContractError> {
        let index = self.period_index(now);
        if index < WITHDRAW_OPENS {
            return Err(ContractError::WithdrawWindowNotOpen);
        }
        if index >= RECLAIM_OPENS {
            return Err(ContractError::WithdrawWindowClosed);
        }
        if position <= 0 {
            return Err(ContractError::NoActiveStake);
        }

        let available = rewards::available(
            env,
            self.state.reward_pool_balance,
            self.state.reward_distributed,
            index,
        )
        .ok_or(ContractError::Overflow)?;
        let reward =
            rewards::pro_rata_share(env, available, position, self.state.total_staked)
                .ok_or(ContractError::Overflow)?;
        let total = position.checked_add(reward).ok_or(ContractError::Overflow)?;

        Ok(Payout {
            principal: position,
            reward,
            total,
        })
    }

    /// Pay out `position` plus its share of the released rewards.
    ///
    /// The share is taken against `total_staked` as it stands at this call,
    /// so whoever withdraws later splits a larger released amount among
    /// fewer remaining stakers.
    pub fn withdraw<L: ValueLedger>(
        &mut self,
        env: &Env,
        ledger: &L,
        staker: &Address,
        position: i128,
        now: u64,
    ) -> Result<Payout, ContractError> {
        let payout = self.preview_withdraw(env, position, now)?;

        let new_total = self
            .state
            .total_staked
            .checked_sub(payout.principal)
            .ok_or(ContractError::Overflow)?;
        let new_distributed = self
            .state
            .reward_distributed
            .checked_add(payout.reward)
            .ok_or(ContractError::Overflow)?;
        let new_stakers = self
            .state
            .stakers
            .checked_sub(1)
            .ok_or(ContractError::Overflow)?;

        ledger.push(staker, payout.total)?;

        self.state.total_staked = new_total;
        self.state.reward_distributed = new_distributed;
        self.state.stakers = new_stakers;
        Ok(payout)
    }

    // ── Owner reclaim ────────────────────────────────────────────────────────

    /// Sweep everything the pool still holds to the owner.
    ///
    /// Gated on time alone: an empty stake ledger before `4T` does not open
    /// the window early. Returns the amount swept, 0 on a repeated call.
    pub fn reclaim<L: ValueLedger>(
        &mut self,
        ledger: &L,
        caller: &Address,
        now: u64,
    ) -> Result<i128, ContractError> {
        self.require_owner(caller)?;
        if self.phase(now) != Phase::OwnerReclaim {
            return Err(ContractError::ReclaimWindowNotOpen);
        }

        let remaining = ledger.held();
        if remaining <= 0 {
            return Ok(0);
        }
        let new_reclaimed = self
            .state
            .reclaimed
            .checked_add(remaining)
            .ok_or(ContractError::Overflow)?;

        ledger.push(caller, remaining)?;

        self.state.reclaimed = new_reclaimed;
        Ok(remaining)
    }
}
