use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking_pool::{StakingPoolContract, StakingPoolContractClient};

pub const T: u64 = 1_000;

pub struct TestContext {
    pub env: Env,
    pub client: StakingPoolContractClient<'static>,
    pub token: TokenClient<'static>,
    pub pool_id: Address,
    pub owner: Address,
    pub users: Vec<Address>,
}

/// Deploys a reward asset and an initialized pool with period `T`.
///
/// The owner receives `owner_balance` and each user `user_balance`; every
/// account approves the pool for its full balance.
pub fn setup(owner_balance: i128, user_balances: &[i128]) -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let token = TokenClient::new(&env, &asset);

    let pool_id = env.register(StakingPoolContract, ());
    let client = StakingPoolContractClient::new(&env, &pool_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &asset, &T);

    let ctx = TestContext {
        env,
        client,
        token,
        pool_id,
        owner: owner.clone(),
        users: Vec::new(),
    };
    let users: Vec<Address> = user_balances
        .iter()
        .map(|amount| {
            let user = Address::generate(&ctx.env);
            fund(&ctx, &asset, &user, *amount);
            user
        })
        .collect();
    fund(&ctx, &asset, &owner, owner_balance);

    TestContext { users, ..ctx }
}

fn fund(ctx: &TestContext, asset: &Address, who: &Address, amount: i128) {
    StellarAssetClient::new(&ctx.env, asset).mint(who, &amount);
    let expiration = ctx.env.ledger().sequence() + 10_000;
    ctx.token.approve(who, &ctx.pool_id, &amount, &expiration);
}

pub fn advance(ctx: &TestContext, seconds: u64) {
    let now = ctx.env.ledger().timestamp();
    ctx.env.ledger().set_timestamp(now.saturating_add(seconds));
}

pub fn set_time(ctx: &TestContext, timestamp: u64) {
    ctx.env.ledger().set_timestamp(timestamp);
}

/// Sum of every account's balance on the reward asset.
pub fn total_value(ctx: &TestContext) -> i128 {
    let users: i128 = ctx.users.iter().map(|u| ctx.token.balance(u)).sum();
    users + ctx.token.balance(&ctx.owner) + ctx.token.balance(&ctx.pool_id)
}
