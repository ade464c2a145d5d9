#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking_pool::{StakingPoolContract, StakingPoolContractClient};

const PERIOD: u64 = 3_600;
const BALANCE: i128 = 1_000_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { amount: i64 },
    Stake { who: u8, amount: i64 },
    Withdraw { who: u8 },
    Reclaim,
    Advance { seconds: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let token = TokenClient::new(&env, &asset);
    let contract_id = env.register(StakingPoolContract, ());
    let client = StakingPoolContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &asset, &PERIOD);

    let mut accounts = vec![owner.clone()];
    for _ in 0..4 {
        accounts.push(Address::generate(&env));
    }
    let expiration = env.ledger().sequence() + 10_000;
    for account in &accounts {
        StellarAssetClient::new(&env, &asset).mint(account, &BALANCE);
        token.approve(account, &contract_id, &BALANCE, &expiration);
    }
    let supply = BALANCE * accounts.len() as i128;

    for action in actions {
        match action {
            FuzzAction::Deposit { amount } => {
                let _ = client.try_owner_deposit(&owner, &(amount as i128));
            }
            FuzzAction::Stake { who, amount } => {
                let caller = &accounts[who as usize % accounts.len()];
                let _ = client.try_stake(caller, &(amount as i128));
            }
            FuzzAction::Withdraw { who } => {
                let caller = &accounts[who as usize % accounts.len()];
                let principal = client.staked_amount(caller);
                if let Ok(Ok(paid)) = client.try_withdraw(caller) {
                    assert!(paid >= principal);
                }
            }
            FuzzAction::Reclaim => {
                let _ = client.try_owner_reclaim(&owner);
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + seconds as u64);
            }
        }

        // Positions always add up and no value leaks out of the system.
        let staked: i128 = accounts.iter().map(|a| client.staked_amount(a)).sum();
        assert_eq!(client.total_staked_amount(), staked);
        let held: i128 = accounts.iter().map(|a| token.balance(a)).sum::<i128>()
            + token.balance(&contract_id);
        assert_eq!(held, supply);
    }
});
