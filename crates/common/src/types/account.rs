use crate::{H256, U256, serde_utils};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single entry of the world state snapshot.
///
/// Missing accounts behave as the all zero default, so lookups never fail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, with = "serde_utils::u256::hex_str")]
    pub balance: U256,
    #[serde(default, with = "serde_utils::bytes")]
    pub code: Bytes,
    #[serde(default, with = "serde_utils::u64::hex_str")]
    pub nonce: u64,
    /// Storage as given by the snapshot. The engine's per invocation
    /// storage starts empty and writes are not merged back, so this is
    /// carried only for fixture completeness.
    #[serde(default)]
    pub storage: BTreeMap<H256, U256>,
}

impl Account {
    pub fn new(balance: U256, code: Bytes, nonce: u64) -> Self {
        Self {
            balance,
            code,
            nonce,
            storage: BTreeMap::new(),
        }
    }

    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }

    pub fn has_nonce(&self) -> bool {
        self.nonce != 0
    }

    pub fn is_empty(&self) -> bool {
        self.balance.is_zero() && !self.has_code() && !self.has_nonce()
    }
}
