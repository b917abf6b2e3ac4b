use crate::{Address, U256, serde_utils};
use serde::{Deserialize, Serialize};

/// The header fields the block level opcodes read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    #[serde(default)]
    pub coinbase: Address,
    #[serde(default, with = "serde_utils::u256::hex_str")]
    pub timestamp: U256,
    #[serde(default, with = "serde_utils::u256::hex_str")]
    pub number: U256,
    #[serde(default, with = "serde_utils::u256::hex_str")]
    pub difficulty: U256,
    #[serde(default, rename = "gaslimit", with = "serde_utils::u256::hex_str")]
    pub gas_limit: U256,
    #[serde(default, rename = "chainid", with = "serde_utils::u256::hex_str")]
    pub chain_id: U256,
}
