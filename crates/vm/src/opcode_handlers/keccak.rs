//! # Keccak-256 hashing
//!
//! Includes the following opcodes:
//!   - `SHA3`

use crate::{
    errors::{OpcodeResult, VMError},
    opcode_handlers::OpcodeHandler,
    utils::size_offset_to_usize,
    vm::VM,
};
use sha3::{Digest, Keccak256};
use solovm_common::utils::u256_from_big_endian;

/// Implementation for the `SHA3` opcode.
///
/// Hashes exactly `size` bytes read from memory, expanding it as needed.
pub struct OpSha3Handler;
impl OpcodeHandler for OpSha3Handler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let [offset, size] = vm.current_call_frame.stack.pop()?;
        let (size, offset) = size_offset_to_usize(size, offset)?;

        let mut hasher = Keccak256::new();
        hasher.update(vm.current_call_frame.memory.load_range(offset, size)?);
        vm.current_call_frame
            .stack
            .push(u256_from_big_endian(&hasher.finalize()))?;

        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }
}
