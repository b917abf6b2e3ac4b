pub mod evm;
pub mod serde_utils;
pub mod types;
pub mod utils;

pub use ethereum_types::{Address, H256, U256};
