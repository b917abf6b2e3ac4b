use solovm_common::{Address, U256, types::BlockHeader};

/// Block level context, immutable for the lifetime of an execution and
/// inherited unchanged by sub contexts.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    pub coinbase: Address,
    pub timestamp: U256,
    pub block_number: U256,
    pub difficulty: U256,
    pub block_gas_limit: U256,
    pub chain_id: U256,
}

impl From<&BlockHeader> for Environment {
    fn from(header: &BlockHeader) -> Self {
        Self {
            coinbase: header.coinbase,
            timestamp: header.timestamp,
            block_number: header.number,
            difficulty: header.difficulty,
            block_gas_limit: header.gas_limit,
            chain_id: header.chain_id,
        }
    }
}
