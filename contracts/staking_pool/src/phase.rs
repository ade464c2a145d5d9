//! Time-derived lifecycle of the pool.
//!
//! The phase is never stored. It is recomputed on every call from the ledger
//! timestamp, the deployment timestamp and the period length `T`:
//!
//! | Phase             | Window            |
//! |-------------------|-------------------|
//! | `FundingAndStake` | `0 ≤ e < T`       |
//! | `Locked`          | `T ≤ e < 2T`      |
//! | `Withdraw`        | `2T ≤ e < 4T`     |
//! | `OwnerReclaim`    | `e ≥ 4T`          |

use soroban_sdk::contracttype;

/// One week.
pub const DEFAULT_PERIOD_LENGTH: u64 = 604_800;

/// Period index at which the locked window starts.
pub const LOCK_STARTS: u64 = 1;
/// Period index at which withdrawals open.
pub const WITHDRAW_OPENS: u64 = 2;
/// Period index at which withdrawals close and the owner may reclaim.
pub const RECLAIM_OPENS: u64 = 4;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Phase {
    FundingAndStake = 0,
    Locked = 1,
    Withdraw = 2,
    OwnerReclaim = 3,
}

impl Phase {
    /// Phase for a given number of elapsed seconds.
    pub fn at(elapsed: u64, period_length: u64) -> Phase {
        match period_index(elapsed, period_length) {
            0 => Phase::FundingAndStake,
            LOCK_STARTS => Phase::Locked,
            i if i < RECLAIM_OPENS => Phase::Withdraw,
            _ => Phase::OwnerReclaim,
        }
    }
}

/// Seconds since deployment. A clock reading before deployment counts as 0.
pub fn elapsed(now: u64, deployed_at: u64) -> u64 {
    now.saturating_sub(deployed_at)
}

/// Number of whole periods that have passed (`floor(elapsed / T)`).
pub fn period_index(elapsed: u64, period_length: u64) -> u64 {
    if period_length == 0 {
        return u64::MAX;
    }
    elapsed / period_length
}

/// Absolute timestamps at which each window begins.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    pub deployed_at: u64,
    pub stake_closes_at: u64,
    pub withdraw_opens_at: u64,
    pub withdraw_closes_at: u64,
}

impl Schedule {
    /// `None` when the last boundary does not fit in a `u64` timestamp.
    pub fn new(deployed_at: u64, period_length: u64) -> Option<Schedule> {
        let boundary =
            |index: u64| period_length.checked_mul(index)?.checked_add(deployed_at);
        Some(Schedule {
            deployed_at,
            stake_closes_at: boundary(LOCK_STARTS)?,
            withdraw_opens_at: boundary(WITHDRAW_OPENS)?,
            withdraw_closes_at: boundary(RECLAIM_OPENS)?,
        })
    }
}
