//! Error codes returned by the staking pool.
//!
//! # Code ranges
//! | Range   | Purpose                          |
//! |---------|----------------------------------|
//! | 1 – 9   | Lifecycle / initialisation       |
//! | 10 – 19 | Authentication & authorisation   |
//! | 30 – 39 | Validation / input               |
//! | 40 – 49 | Pool state                       |
//! | 50 – 59 | Operation outside its time window|
//! | 60 – 69 | Value ledger and arithmetic      |

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// The caller is not the pool owner.
    Unauthorized = 10,

    // ── Validation (30–39) ───────────────────────────────────
    /// Zero or negative amount.
    InvalidAmount = 30,
    /// Zero period length, or one whose four windows overflow the clock.
    InvalidPeriod = 31,

    // ── Pool state (40–49) ───────────────────────────────────
    /// The owner already made the one-time reward deposit.
    AlreadyFunded = 40,
    /// Staking is protected until the owner has deposited the rewards.
    PoolNotFunded = 41,
    /// The caller has nothing staked (or already withdrew).
    NoActiveStake = 42,

    // ── Time windows (50–59) ─────────────────────────────────
    /// The owner can only deposit during the staking window.
    DepositWindowClosed = 50,
    /// Participants can only stake during the staking window.
    StakeWindowClosed = 51,
    /// Withdrawals open two periods after deployment.
    WithdrawWindowNotOpen = 52,
    /// Withdrawals close four periods after deployment.
    WithdrawWindowClosed = 53,
    /// The owner can only reclaim four periods after deployment.
    ReclaimWindowNotOpen = 54,

    // ── Ledger / arithmetic (60–69) ──────────────────────────
    /// The reward asset rejected a transfer (balance or allowance too low).
    TransferFailed = 60,
    Overflow = 61,
}

/// Coarse classification of [`ContractError`] codes.
///
/// Several codes belong to the same kind: every `*Window*` code is a
/// [`ErrorKind::WrongPhase`], differing only in which boundary was violated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Lifecycle,
    Unauthorized,
    InvalidAmount,
    AlreadyFunded,
    PoolNotFunded,
    WrongPhase,
    NoActiveStake,
    Ledger,
}

impl ContractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::InvalidPeriod => ErrorKind::Lifecycle,
            ContractError::Unauthorized => ErrorKind::Unauthorized,
            ContractError::InvalidAmount => ErrorKind::InvalidAmount,
            ContractError::AlreadyFunded => ErrorKind::AlreadyFunded,
            ContractError::PoolNotFunded => ErrorKind::PoolNotFunded,
            ContractError::NoActiveStake => ErrorKind::NoActiveStake,
            ContractError::DepositWindowClosed
            | ContractError::StakeWindowClosed
            | ContractError::WithdrawWindowNotOpen
            | ContractError::WithdrawWindowClosed
            | ContractError::ReclaimWindowNotOpen => ErrorKind::WrongPhase,
            ContractError::TransferFailed | ContractError::Overflow => ErrorKind::Ledger,
        }
    }

    pub fn is_wrong_phase(&self) -> bool {
        self.kind() == ErrorKind::WrongPhase
    }
}
