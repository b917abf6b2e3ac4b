use crate::{
    call_frame::CallFrame,
    db::WorldState,
    environment::Environment,
    errors::{ExecutionReport, OpcodeResult, ResultReason, TxResult, VMError},
    opcodes::{OPCODE_TABLE, Opcode},
};
use bytes::Bytes;
use solovm_common::types::{BlockHeader, Transaction};

/// A single execution context over one contract's bytecode.
///
/// Every invocation owns a fresh [`CallFrame`] (stack, memory, per
/// invocation storage) and borrows the world snapshot. CALL and CREATE
/// run a nested `VM` over the same snapshot with a derived transaction;
/// see [`crate::opcode_handlers::system`].
pub struct VM<'a> {
    pub current_call_frame: CallFrame,
    pub env: Environment,
    pub tx: Transaction,
    pub db: &'a mut WorldState,
}

impl<'a> VM<'a> {
    pub fn new(bytecode: Bytes, tx: Transaction, env: Environment, db: &'a mut WorldState) -> Self {
        let current_call_frame =
            CallFrame::new(tx.to, tx.from, tx.value, bytecode, tx.data.clone());
        Self {
            current_call_frame,
            env,
            tx,
            db,
        }
    }

    /// Entry point for callers holding the boundary types.
    pub fn from_context(
        bytecode: Bytes,
        tx: Transaction,
        header: &BlockHeader,
        db: &'a mut WorldState,
    ) -> Self {
        Self::new(bytecode, tx, Environment::from(header), db)
    }

    /// Main execution loop: fetch, decode, dispatch until the program
    /// terminates or fails.
    pub fn execute(&mut self) -> Result<ExecutionReport, VMError> {
        loop {
            let Some(opcode) = self.current_call_frame.next_opcode() else {
                // Ran past the end of code without an explicit
                // terminator: the stack is still reported, the outcome
                // stays undefined.
                return Ok(self.take_report(None, None));
            };

            match self.execute_opcode(opcode) {
                Ok(OpcodeResult::Continue { pc_increment }) => {
                    self.current_call_frame.increment_pc_by(pc_increment);
                }
                Ok(OpcodeResult::Halt(reason)) => return Ok(self.halt_report(reason)),
                Err(error) => return Err(error),
            }
        }
    }

    pub(crate) fn execute_opcode(&mut self, opcode: Opcode) -> Result<OpcodeResult, VMError> {
        #[allow(clippy::indexing_slicing, reason = "every opcode fits the 256 entry table")]
        OPCODE_TABLE[usize::from(opcode)].call(self)
    }

    fn halt_report(&mut self, reason: ResultReason) -> ExecutionReport {
        match reason {
            ResultReason::Stop => {
                // STOP counts as a clean termination only as the very
                // last byte of code; anywhere else the outcome is
                // undefined.
                let at_end = self
                    .current_call_frame
                    .pc
                    .wrapping_add(1)
                    == self.current_call_frame.bytecode.len();
                self.take_report(at_end.then_some(TxResult::Success), None)
            }
            ResultReason::Return => {
                let output = std::mem::take(&mut self.current_call_frame.output);
                self.take_report(Some(TxResult::Success), Some(output))
            }
            ResultReason::Revert => {
                let output = std::mem::take(&mut self.current_call_frame.output);
                self.take_report(Some(TxResult::Revert), Some(output))
            }
        }
    }

    fn take_report(&mut self, result: Option<TxResult>, output: Option<Bytes>) -> ExecutionReport {
        ExecutionReport {
            result,
            output,
            stack: self.current_call_frame.stack.to_vec(),
        }
    }
}
