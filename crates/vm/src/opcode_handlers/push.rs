//! # Push operations
//!
//! Includes the following opcodes:
//!   - `PUSH1` to `PUSH32`

use crate::{
    errors::{OpcodeResult, VMError},
    opcode_handlers::OpcodeHandler,
    vm::VM,
};
use solovm_common::utils::u256_from_big_endian_const;

/// Implementation for the `PUSHn` opcodes, monomorphized per immediate
/// width.
pub struct OpPushHandler<const N: usize>;
impl<const N: usize> OpcodeHandler for OpPushHandler<N> {
    #[inline(always)]
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let current_call_frame = &mut vm.current_call_frame;

        // The immediate starts right after the opcode byte. Immediate
        // bytes that fall past the end of code read as zeros.
        let pc_offset = current_call_frame.pc.wrapping_add(1);
        let available = current_call_frame
            .bytecode
            .get(pc_offset..)
            .unwrap_or_default();
        let count = available.len().min(N);

        let mut value_bytes = [0u8; N];
        #[allow(clippy::indexing_slicing, reason = "count never exceeds either slice")]
        value_bytes[..count].copy_from_slice(&available[..count]);

        current_call_frame
            .stack
            .push(u256_from_big_endian_const(value_bytes))?;

        // The immediate bytes plus one for the next instruction.
        Ok(OpcodeResult::Continue {
            pc_increment: N.wrapping_add(1),
        })
    }
}
