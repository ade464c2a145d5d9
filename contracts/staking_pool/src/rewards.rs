//! Reward release schedule and pro-rata share math.
//!
//! The owner's deposit `R` is released in three tranches, one per period
//! starting at the withdrawal window:
//!
//! | Period index `k` | Released so far |
//! |------------------|-----------------|
//! | `k < 2`          | 0               |
//! | `k = 2`          | 20 % of `R`     |
//! | `k = 3`          | 50 % of `R`     |
//! | `k ≥ 4`          | 100 % of `R`    |
//!
//! A withdrawing participant takes `principal / total_staked` of whatever has
//! been released but not yet paid out. The last tranche only ever unlocks in
//! the owner's window, so it goes back to the owner together with rounding
//! dust.

use soroban_sdk::{Env, I256};

use crate::phase::WITHDRAW_OPENS;

pub const BPS_DENOMINATOR: i128 = 10_000;

/// Tranches in basis points of the reward pool, indexed from the period at
/// which withdrawals open.
pub const RELEASE_SCHEDULE_BPS: [i128; 3] = [2_000, 3_000, 5_000];

/// Cumulative basis points released once `period_index` whole periods passed.
pub fn released_bps(period_index: u64) -> i128 {
    if period_index < WITHDRAW_OPENS {
        return 0;
    }
    let unlocked = (period_index - WITHDRAW_OPENS).saturating_add(1);
    RELEASE_SCHEDULE_BPS
        .iter()
        .take(usize::try_from(unlocked).unwrap_or(usize::MAX))
        .sum()
}

/// Portion of `reward_pool` released by `period_index`, rounded down.
///
/// The product is formed in 256 bits so any deposit that fits in an `i128`
/// can be released in full.
pub fn released(env: &Env, reward_pool: i128, period_index: u64) -> Option<i128> {
    let bps = released_bps(period_index);
    if reward_pool <= 0 || bps == 0 {
        return Some(0);
    }
    I256::from_i128(env, reward_pool)
        .mul(&I256::from_i128(env, bps))
        .div(&I256::from_i128(env, BPS_DENOMINATOR))
        .to_i128()
}

/// Released reward not yet paid out to anyone.
pub fn available(
    env: &Env,
    reward_pool: i128,
    distributed: i128,
    period_index: u64,
) -> Option<i128> {
    let unlocked = released(env, reward_pool, period_index)?;
    Some(unlocked.checked_sub(distributed)?.max(0))
}

/// `floor(available × principal / total_staked)`.
///
/// The product is formed in 256 bits: with 18-decimal assets both factors
/// routinely exceed `2^64`. Returns `None` if the quotient does not fit back
/// into an `i128`.
pub fn pro_rata_share(
    env: &Env,
    available: i128,
    principal: i128,
    total_staked: i128,
) -> Option<i128> {
    if available <= 0 || principal <= 0 || total_staked <= 0 {
        return Some(0);
    }
    let product = I256::from_i128(env, available).mul(&I256::from_i128(env, principal));
    product.div(&I256::from_i128(env, total_staked)).to_i128()
}
