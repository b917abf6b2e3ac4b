//! # Control flow, memory and storage operations
//!
//! Includes the following opcodes:
//!   - `POP`
//!   - `MLOAD`
//!   - `MSTORE`
//!   - `MSTORE8`
//!   - `SLOAD`
//!   - `SSTORE`
//!   - `JUMP`
//!   - `JUMPI`
//!   - `PC`
//!   - `MSIZE`
//!   - `JUMPDEST`

use crate::{
    errors::{OpcodeResult, VMError},
    opcode_handlers::OpcodeHandler,
    utils::u256_to_usize,
    vm::VM,
};
use solovm_common::{U256, utils::u256_to_h256};

/// Implementation for the `POP` opcode.
pub struct OpPopHandler;
impl OpcodeHandler for OpPopHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        vm.current_call_frame.stack.pop1()?;

        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }
}

/// Implementation for the `MLOAD` opcode.
pub struct OpMLoadHandler;
impl OpcodeHandler for OpMLoadHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let offset = u256_to_usize(vm.current_call_frame.stack.pop1()?)?;
        let value = vm.current_call_frame.memory.load_word(offset)?;
        vm.current_call_frame.stack.push(value)?;

        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }
}

/// Implementation for the `MSTORE` opcode.
pub struct OpMStoreHandler;
impl OpcodeHandler for OpMStoreHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let [offset, value] = vm.current_call_frame.stack.pop()?;
        let offset = u256_to_usize(offset)?;
        vm.current_call_frame.memory.store_word(offset, value)?;

        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }
}

/// Implementation for the `MSTORE8` opcode.
pub struct OpMStore8Handler;
impl OpcodeHandler for OpMStore8Handler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let [offset, value] = vm.current_call_frame.stack.pop()?;
        let offset = u256_to_usize(offset)?;
        vm.current_call_frame
            .memory
            .store_byte(offset, value.byte(0))?;

        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }
}

/// Implementation for the `SLOAD` opcode.
///
/// Reads the per invocation storage; unset keys read as zero.
pub struct OpSLoadHandler;
impl OpcodeHandler for OpSLoadHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let key = u256_to_h256(vm.current_call_frame.stack.pop1()?);
        let value = vm
            .current_call_frame
            .storage
            .get(&key)
            .copied()
            .unwrap_or_default();
        vm.current_call_frame.stack.push(value)?;

        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }
}

/// Implementation for the `SSTORE` opcode.
pub struct OpSStoreHandler;
impl OpcodeHandler for OpSStoreHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let [key, value] = vm.current_call_frame.stack.pop()?;
        vm.current_call_frame
            .storage
            .insert(u256_to_h256(key), value);

        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }
}

/// Implementation for the `JUMP` opcode.
pub struct OpJumpHandler;
impl OpcodeHandler for OpJumpHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let target = vm.current_call_frame.stack.pop1()?;
        jump(vm, target)?;

        Ok(OpcodeResult::Continue { pc_increment: 0 })
    }
}

/// Implementation for the `JUMPI` opcode.
pub struct OpJumpIHandler;
impl OpcodeHandler for OpJumpIHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let [target, condition] = vm.current_call_frame.stack.pop()?;
        if condition.is_zero() {
            return Ok(OpcodeResult::Continue { pc_increment: 1 });
        }

        jump(vm, target)?;
        Ok(OpcodeResult::Continue { pc_increment: 0 })
    }
}

/// Repositions the program counter so the next fetch reads the target.
///
/// The destination is not required to be a JUMPDEST: jumps into data or
/// past the end of code are not validated, the latter simply halting the
/// program on the next fetch.
fn jump(vm: &mut VM<'_>, target: U256) -> Result<(), VMError> {
    vm.current_call_frame.pc = u256_to_usize(target)?;
    Ok(())
}

/// Implementation for the `JUMPDEST` opcode: a no-op marker.
pub struct OpJumpDestHandler;
impl OpcodeHandler for OpJumpDestHandler {
    fn eval(_vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }
}

/// Implementation for the `PC` opcode.
pub struct OpPcHandler;
impl OpcodeHandler for OpPcHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        vm.current_call_frame
            .stack
            .push(U256::from(vm.current_call_frame.pc))?;

        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }
}

/// Implementation for the `MSIZE` opcode.
pub struct OpMSizeHandler;
impl OpcodeHandler for OpMSizeHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        vm.current_call_frame
            .stack
            .push(vm.current_call_frame.memory.len().into())?;

        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }
}
