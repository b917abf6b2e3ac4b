//! # System operations
//!
//! Includes the following opcodes:
//!   - `CREATE`
//!   - `CALL`
//!   - `RETURN`
//!   - `REVERT`
//!
//! CALL and CREATE spawn a nested [`VM`] over the shared world snapshot
//! with a derived transaction. A failing sub context is folded into the
//! parent as an unsuccessful result; only internal errors propagate.

use crate::{
    constants::{FAIL, SUCCESS},
    errors::{InternalError, OpcodeResult, ResultReason, VMError},
    opcode_handlers::OpcodeHandler,
    utils::{address_to_word, size_offset_to_usize, word_to_address},
    vm::VM,
};
use bytes::Bytes;
use solovm_common::{
    Address, U256, evm::calculate_create_address, types::Account, types::Transaction,
};

/// Implementation for the `CALL` opcode.
pub struct OpCallHandler;
impl OpcodeHandler for OpCallHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let [gas, callee, value, args_offset, args_len, return_offset, return_len] =
            vm.current_call_frame.stack.pop()?;
        // The core is unmetered: the gas operand is accepted and discarded.
        let _ = gas;

        let callee = word_to_address(callee);
        let (args_len, args_offset) = size_offset_to_usize(args_len, args_offset)?;
        let (return_len, return_offset) = size_offset_to_usize(return_len, return_offset)?;

        let calldata = Bytes::from(
            vm.current_call_frame
                .memory
                .load_range(args_offset, args_len)?,
        );
        let bytecode = vm.db.code(callee);

        vm.generic_call(callee, value, calldata, bytecode, return_offset, return_len)
    }
}

/// Implementation for the `CREATE` opcode.
pub struct OpCreateHandler;
impl OpcodeHandler for OpCreateHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let [value, code_offset, code_len] = vm.current_call_frame.stack.pop()?;
        let (code_len, code_offset) = size_offset_to_usize(code_len, code_offset)?;

        let init_code = Bytes::from(
            vm.current_call_frame
                .memory
                .load_range(code_offset, code_len)?,
        );

        vm.generic_create(value, init_code)
    }
}

/// Implementation for the `RETURN` opcode.
pub struct OpReturnHandler;
impl OpcodeHandler for OpReturnHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let [offset, len] = vm.current_call_frame.stack.pop()?;
        let (len, offset) = size_offset_to_usize(len, offset)?;

        if len != 0 {
            vm.current_call_frame.output =
                Bytes::from(vm.current_call_frame.memory.load_range(offset, len)?);
        }

        Ok(OpcodeResult::Halt(ResultReason::Return))
    }
}

/// Implementation for the `REVERT` opcode.
///
/// Not an error: a normal termination reporting failure, with the same
/// memory copy as RETURN.
pub struct OpRevertHandler;
impl OpcodeHandler for OpRevertHandler {
    fn eval(vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        let [offset, len] = vm.current_call_frame.stack.pop()?;
        let (len, offset) = size_offset_to_usize(len, offset)?;

        if len != 0 {
            vm.current_call_frame.output =
                Bytes::from(vm.current_call_frame.memory.load_range(offset, len)?);
        }

        Ok(OpcodeResult::Halt(ResultReason::Revert))
    }
}

impl<'a> VM<'a> {
    /// Common behavior for message calls: runs the callee's code in a
    /// nested engine and folds the result back into this frame.
    pub fn generic_call(
        &mut self,
        callee: Address,
        value: U256,
        calldata: Bytes,
        bytecode: Bytes,
        return_offset: usize,
        return_len: usize,
    ) -> Result<OpcodeResult, VMError> {
        let sub_tx = Transaction {
            to: callee,
            from: self.current_call_frame.to,
            origin: self.tx.origin,
            gas_price: self.tx.gas_price,
            value,
            data: calldata,
        };

        let report = {
            let mut vm = VM::new(bytecode, sub_tx, self.env.clone(), &mut *self.db);
            vm.execute()
        };

        let (success, output) = match report {
            Ok(report) => {
                let success = report.is_success();
                (success, report.output.unwrap_or_default())
            }
            Err(error) if error.should_propagate() => return Err(error),
            // A failing sub context reports as an unsuccessful call with
            // no return bytes; the parent keeps running.
            Err(_) => (false, Bytes::new()),
        };

        // The return region holds exactly `return_len` bytes, zero padded
        // when the sub call returned fewer.
        let copied = output.len().min(return_len);
        #[allow(clippy::indexing_slicing, reason = "copied never exceeds the output length")]
        self.current_call_frame
            .memory
            .store_data(return_offset, &output[..copied])?;
        self.current_call_frame.memory.store_zeros(
            return_offset.wrapping_add(copied),
            return_len
                .checked_sub(copied)
                .ok_or(InternalError::Underflow)?,
        )?;

        self.current_call_frame
            .stack
            .push(if success { SUCCESS } else { FAIL })?;

        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }

    /// Common behavior for contract creation: derives the new address
    /// from the deployer and its nonce, runs the init code in a nested
    /// engine and installs the returned bytes as the account's code.
    pub fn generic_create(&mut self, value: U256, init_code: Bytes) -> Result<OpcodeResult, VMError> {
        let deployer = self.current_call_frame.to;
        let deployer_nonce = self.db.nonce(deployer);
        let new_address = calculate_create_address(deployer, deployer_nonce);

        let sub_tx = Transaction {
            to: new_address,
            from: deployer,
            origin: self.tx.origin,
            gas_price: self.tx.gas_price,
            value,
            data: Bytes::new(),
        };

        let report = {
            let mut vm = VM::new(init_code, sub_tx, self.env.clone(), &mut *self.db);
            vm.execute()
        };

        match report {
            Ok(report) if !report.is_revert() => {
                // The returned bytes become the runtime code of the new
                // account, which starts with a zero nonce.
                let code = report.output.unwrap_or_default();
                self.db.add_account(new_address, Account::new(value, code, 0));
                self.current_call_frame
                    .stack
                    .push(address_to_word(new_address))?;
            }
            Ok(_) => self.current_call_frame.stack.push(FAIL)?,
            Err(error) if error.should_propagate() => return Err(error),
            Err(_) => self.current_call_frame.stack.push(FAIL)?,
        }

        Ok(OpcodeResult::Continue { pc_increment: 1 })
    }
}
