use soroban_sdk::{token, Address, Env};

use crate::errors::ContractError;

/// Value movement the pool needs from its reward asset.
///
/// `pull` draws on an allowance the sender granted to the pool beforehand
/// (the token's `approve`); `push` pays out of the pool's own balance. Either
/// call moves the whole amount or fails with no transfer at all.
pub trait ValueLedger {
    /// Move `amount` from `from` into the pool.
    fn pull(&self, from: &Address, amount: i128) -> Result<(), ContractError>;
    /// Move `amount` from the pool to `to`.
    fn push(&self, to: &Address, amount: i128) -> Result<(), ContractError>;
    /// The pool's own balance.
    fn held(&self) -> i128;
    fn balance(&self, who: &Address) -> i128;
}

/// [`ValueLedger`] backed by a SEP-41 token contract, acting on behalf of
/// the currently executing contract.
pub struct TokenLedger<'a> {
    client: token::TokenClient<'a>,
    pool: Address,
}

impl<'a> TokenLedger<'a> {
    pub fn new(env: &Env, asset: &Address) -> Self {
        TokenLedger {
            client: token::TokenClient::new(env, asset),
            pool: env.current_contract_address(),
        }
    }
}

impl ValueLedger for TokenLedger<'_> {
    fn pull(&self, from: &Address, amount: i128) -> Result<(), ContractError> {
        match self
            .client
            .try_transfer_from(&self.pool, from, &self.pool, &amount)
        {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::TransferFailed),
        }
    }

    fn push(&self, to: &Address, amount: i128) -> Result<(), ContractError> {
        match self.client.try_transfer(&self.pool, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::TransferFailed),
        }
    }

    fn held(&self) -> i128 {
        self.client.balance(&self.pool)
    }

    fn balance(&self, who: &Address) -> i128 {
        self.client.balance(who)
    }
}
