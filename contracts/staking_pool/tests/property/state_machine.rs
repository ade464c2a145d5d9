//! Property-based state machine tests for the staking pool.
//!
//! Random sequences of deposits, stakes, withdrawals, reclaims and clock
//! advances are replayed against a live pool. After every step:
//! - `total_staked_amount` equals the sum of all positions
//! - `stakers` equals the number of non-zero positions
//! - no value is created or destroyed across all accounts
//! - until the owner reclaims, the pool holds exactly the outstanding
//!   principal plus the undistributed reward pool
//! - a rejected call changes neither pool state nor any balance
//! - a withdrawal never pays less than the principal

use proptest::prelude::*;
use proptest_derive::Arbitrary;

use crate::harness::{advance, setup, total_value, TestContext, T};

const PARTICIPANTS: usize = 3;
const OWNER_BALANCE: i128 = 1_000_000;
const USER_BALANCE: i128 = 5_000;

#[derive(Clone, Debug, Arbitrary)]
enum Action {
    Deposit {
        #[proptest(strategy = "-10i128..=OWNER_BALANCE")]
        amount: i128,
    },
    Stake {
        #[proptest(strategy = "0usize..PARTICIPANTS")]
        who: usize,
        #[proptest(strategy = "-10i128..=3_000i128")]
        amount: i128,
    },
    Withdraw {
        #[proptest(strategy = "0usize..PARTICIPANTS")]
        who: usize,
    },
    Reclaim {
        by_owner: bool,
    },
    Advance {
        #[proptest(strategy = "0u64..(3 * T / 2)")]
        seconds: u64,
    },
}

fn positions(ctx: &TestContext) -> Vec<i128> {
    ctx.users
        .iter()
        .map(|u| ctx.client.staked_amount(u))
        .collect()
}

fn balances(ctx: &TestContext) -> Vec<i128> {
    let mut all: Vec<i128> = ctx.users.iter().map(|u| ctx.token.balance(u)).collect();
    all.push(ctx.token.balance(&ctx.owner));
    all.push(ctx.token.balance(&ctx.pool_id));
    all
}

/// Applies `action`; `Some(Ok(payout_and_principal))` for a withdrawal,
/// `Some(Err(()))` for any rejected call, `None` otherwise.
fn apply(ctx: &TestContext, action: &Action) -> Option<Result<(i128, i128), ()>> {
    match action {
        Action::Deposit { amount } => ctx
            .client
            .try_owner_deposit(&ctx.owner, amount)
            .err()
            .map(|_| Err(())),
        Action::Stake { who, amount } => ctx
            .client
            .try_stake(&ctx.users[*who], amount)
            .err()
            .map(|_| Err(())),
        Action::Withdraw { who } => {
            let staker = &ctx.users[*who];
            let principal = ctx.client.staked_amount(staker);
            match ctx.client.try_withdraw(staker) {
                Ok(Ok(paid)) => Some(Ok((paid, principal))),
                _ => Some(Err(())),
            }
        }
        Action::Reclaim { by_owner } => {
            let caller = if *by_owner {
                ctx.owner.clone()
            } else {
                ctx.users[0].clone()
            };
            ctx.client
                .try_owner_reclaim(&caller)
                .err()
                .map(|_| Err(()))
        }
        Action::Advance { seconds } => {
            advance(ctx, *seconds);
            None
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_ledger_invariants_hold(actions in prop::collection::vec(any::<Action>(), 1..40)) {
        let ctx = setup(OWNER_BALANCE, &[USER_BALANCE; PARTICIPANTS]);
        let supply = total_value(&ctx);

        for action in &actions {
            let state_before = ctx.client.get_state();
            let balances_before = balances(&ctx);

            match apply(&ctx, action) {
                Some(Err(())) => {
                    prop_assert_eq!(ctx.client.get_state(), state_before);
                    prop_assert_eq!(balances(&ctx), balances_before);
                }
                Some(Ok((paid, principal))) => {
                    prop_assert!(principal > 0);
                    prop_assert!(paid >= principal);
                }
                None => {}
            }

            let state = ctx.client.get_state();
            let positions = positions(&ctx);
            let sum: i128 = positions.iter().sum();
            let active = positions.iter().filter(|p| **p > 0).count() as u32;

            prop_assert_eq!(ctx.client.total_staked_amount(), sum);
            prop_assert_eq!(state.total_staked, sum);
            prop_assert_eq!(state.stakers, active);
            prop_assert_eq!(total_value(&ctx), supply);
            prop_assert!(state.reward_distributed <= state.reward_pool_balance);

            if state.reclaimed == 0 {
                prop_assert_eq!(
                    ctx.token.balance(&ctx.pool_id),
                    state.reward_pool_balance + state.total_staked - state.reward_distributed
                );
            }
        }
    }
}
