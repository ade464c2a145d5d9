use proptest::prelude::*;
use staking_pool::rewards;

use crate::harness::{set_time, setup, T};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Two stakers withdrawing one period apart split the first two tranches
    /// between them; the owner gets the last tranche back.
    #[test]
    fn prop_two_staker_cycle_conserves_value(
        reward_pool in 1i128..1_000_000_000_000_000_000_000_000_000i128,
        a in 1i128..1_000_000_000_000_000_000_000_000i128,
        b in 1i128..1_000_000_000_000_000_000_000_000i128,
    ) {
        let ctx = setup(reward_pool, &[a, b]);
        let (alice, bob) = (ctx.users[0].clone(), ctx.users[1].clone());

        ctx.client.owner_deposit(&ctx.owner, &reward_pool);
        ctx.client.stake(&alice, &a);
        ctx.client.stake(&bob, &b);

        set_time(&ctx, 2 * T);
        let paid_a = ctx.client.withdraw(&alice);
        set_time(&ctx, 3 * T);
        let paid_b = ctx.client.withdraw(&bob);
        set_time(&ctx, 4 * T);
        let swept = ctx.client.owner_reclaim(&ctx.owner);

        prop_assert!(paid_a >= a);
        prop_assert!(paid_b >= b);
        prop_assert_eq!(paid_a + paid_b + swept, reward_pool + a + b);

        let released_by_3t = rewards::released(&ctx.env, reward_pool, 3).unwrap();
        prop_assert_eq!(swept, reward_pool - released_by_3t);
        prop_assert_eq!(ctx.token.balance(&ctx.pool_id), 0);
    }

    /// The earlier of two equal stakers never receives more than the later one.
    #[test]
    fn prop_waiting_never_pays_less(
        reward_pool in 10i128..1_000_000_000_000i128,
        stake in 1i128..1_000_000i128,
    ) {
        let ctx = setup(reward_pool, &[stake, stake]);
        let (early, late) = (ctx.users[0].clone(), ctx.users[1].clone());

        ctx.client.owner_deposit(&ctx.owner, &reward_pool);
        ctx.client.stake(&early, &stake);
        ctx.client.stake(&late, &stake);

        set_time(&ctx, 2 * T + 1);
        let first = ctx.client.withdraw(&early);
        set_time(&ctx, 3 * T + 1);
        let second = ctx.client.withdraw(&late);

        prop_assert!(second >= first);
    }
}
