use crate::errors::{ExceptionalHalt, VMError};
use solovm_common::{Address, U256, utils::u256_from_big_endian_const};

/// Zero extends a 20 byte address into a word.
pub fn address_to_word(address: Address) -> U256 {
    u256_from_big_endian_const(address.0)
}

/// Interprets the low 20 bytes of a word as an address.
pub fn word_to_address(word: U256) -> Address {
    #[allow(clippy::indexing_slicing, reason = "a word is always 32 bytes long")]
    Address::from_slice(&word.to_big_endian()[12..])
}

/// Converts a stack word into a host offset, rejecting values outside
/// the addressable range.
pub fn u256_to_usize(value: U256) -> Result<usize, VMError> {
    value
        .try_into()
        .map_err(|_| ExceptionalHalt::InvalidOffset.into())
}

/// Converts a (size, offset) operand pair. A zero size makes the offset
/// irrelevant, so it is not range checked in that case.
pub fn size_offset_to_usize(size: U256, offset: U256) -> Result<(usize, usize), VMError> {
    let size = u256_to_usize(size)?;
    let offset = if size == 0 { 0 } else { u256_to_usize(offset)? };
    Ok((size, offset))
}
