use crate::{Address, U256, serde_utils};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The transaction envelope handed to the engine.
///
/// `to` is the executing contract and doubles as the storage scope;
/// `origin` stays fixed across sub contexts while `from` tracks the
/// immediate caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub to: Address,
    #[serde(default)]
    pub from: Address,
    #[serde(default)]
    pub origin: Address,
    #[serde(default, rename = "gasprice", with = "serde_utils::u256::hex_str")]
    pub gas_price: U256,
    #[serde(default, with = "serde_utils::u256::hex_str")]
    pub value: U256,
    #[serde(default, with = "serde_utils::bytes")]
    pub data: Bytes,
}
