use bytes::Bytes;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use solovm_common::{Address, U256, types::Account};

/// The account snapshot visible to an execution.
///
/// One instance is shared mutably down the whole call tree, so accounts
/// inserted by CREATE inside a sub context are visible to the caller.
/// Nothing else is written back: balances, nonces and contract storage
/// keep their snapshot values.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct WorldState {
    pub accounts: FxHashMap<Address, Account>,
}

impl WorldState {
    pub fn new(accounts: FxHashMap<Address, Account>) -> Self {
        Self { accounts }
    }

    pub fn balance(&self, address: Address) -> U256 {
        self.accounts
            .get(&address)
            .map(|account| account.balance)
            .unwrap_or_default()
    }

    pub fn code(&self, address: Address) -> Bytes {
        self.accounts
            .get(&address)
            .map(|account| account.code.clone())
            .unwrap_or_default()
    }

    pub fn nonce(&self, address: Address) -> u64 {
        self.accounts
            .get(&address)
            .map(|account| account.nonce)
            .unwrap_or_default()
    }

    pub fn add_account(&mut self, address: Address, account: Account) {
        self.accounts.insert(address, account);
    }
}
