use solovm_common::U256;

pub const WORD_SIZE_IN_BYTES_USIZE: usize = 32;
pub const WORD_SIZE: usize = 32;

pub const STACK_LIMIT: usize = 1024;

/// Word pushed by CALL to report the sub context outcome.
pub const SUCCESS: U256 = U256::one();
pub const FAIL: U256 = U256::zero();
