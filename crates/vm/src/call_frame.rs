use crate::{
    constants::STACK_LIMIT,
    errors::ExceptionalHalt,
    memory::Memory,
    opcodes::Opcode,
};
use bytes::Bytes;
use solovm_common::{Address, H256, U256};
use std::collections::BTreeMap;

/// The operand stack.
///
/// Backed by a fixed capacity array that grows downwards: `offset` is the
/// index of the current top, `STACK_LIMIT` when empty. The observable
/// order is top first.
#[derive(Debug, Clone)]
pub struct Stack {
    pub values: Box<[U256; STACK_LIMIT]>,
    pub offset: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self {
            values: Box::new([U256::zero(); STACK_LIMIT]),
            offset: STACK_LIMIT,
        }
    }
}

impl Stack {
    /// Pops the top `N` operands at once, first array element topmost.
    #[inline(always)]
    pub fn pop<const N: usize>(&mut self) -> Result<[U256; N], ExceptionalHalt> {
        if self.len() < N {
            return Err(ExceptionalHalt::StackUnderflow);
        }

        let mut values = [U256::zero(); N];
        #[allow(clippy::indexing_slicing, reason = "length checked above")]
        values.copy_from_slice(&self.values[self.offset..self.offset + N]);
        self.offset += N;

        Ok(values)
    }

    #[inline(always)]
    pub fn pop1(&mut self) -> Result<U256, ExceptionalHalt> {
        let [value] = self.pop()?;
        Ok(value)
    }

    #[inline(always)]
    pub fn push(&mut self, value: U256) -> Result<(), ExceptionalHalt> {
        if self.offset == 0 {
            return Err(ExceptionalHalt::StackOverflow);
        }

        self.offset -= 1;
        #[allow(clippy::indexing_slicing, reason = "offset is in bounds after the check")]
        {
            self.values[self.offset] = value;
        }

        Ok(())
    }

    #[inline(always)]
    pub fn push_zero(&mut self) -> Result<(), ExceptionalHalt> {
        self.push(U256::zero())
    }

    /// Duplicates the `N`th operand from the top (1 based) onto the top.
    pub fn dup<const N: usize>(&mut self) -> Result<(), ExceptionalHalt> {
        let value = self.get(N - 1)?;
        self.push(value)
    }

    /// Swaps the top with the operand `N` positions below it.
    pub fn swap<const N: usize>(&mut self) -> Result<(), ExceptionalHalt> {
        if self.len() < N + 1 {
            return Err(ExceptionalHalt::StackUnderflow);
        }

        self.values.swap(self.offset, self.offset + N);
        Ok(())
    }

    /// Reads the operand `depth` positions from the top (0 is the top)
    /// without removing it.
    pub fn get(&self, depth: usize) -> Result<U256, ExceptionalHalt> {
        if depth >= self.len() {
            return Err(ExceptionalHalt::StackUnderflow);
        }

        #[allow(clippy::indexing_slicing, reason = "depth checked against length")]
        Ok(self.values[self.offset + depth])
    }

    pub fn len(&self) -> usize {
        STACK_LIMIT - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset == STACK_LIMIT
    }

    /// The stack contents, top first.
    pub fn to_vec(&self) -> Vec<U256> {
        #[allow(clippy::indexing_slicing, reason = "offset never exceeds the capacity")]
        self.values[self.offset..].to_vec()
    }
}

/// All the mutable state of one execution context.
///
/// Created fresh for every engine invocation and discarded when it
/// returns; in particular `storage` is scoped to the invocation and
/// writes to it are never merged back into the world snapshot.
#[derive(Debug, Clone, Default)]
pub struct CallFrame {
    pub pc: usize,
    /// The executing account, also the storage scope.
    pub to: Address,
    pub msg_sender: Address,
    pub msg_value: U256,
    pub bytecode: Bytes,
    pub calldata: Bytes,
    pub stack: Stack,
    pub memory: Memory,
    pub storage: BTreeMap<H256, U256>,
    /// Bytes staged by RETURN or REVERT.
    pub output: Bytes,
}

impl CallFrame {
    pub fn new(
        to: Address,
        msg_sender: Address,
        msg_value: U256,
        bytecode: Bytes,
        calldata: Bytes,
    ) -> Self {
        Self {
            to,
            msg_sender,
            msg_value,
            bytecode,
            calldata,
            ..Default::default()
        }
    }

    /// The opcode under the program counter, `None` once execution ran
    /// past the end of code.
    pub fn next_opcode(&self) -> Option<Opcode> {
        self.bytecode.get(self.pc).copied().map(Opcode::from)
    }

    pub fn increment_pc_by(&mut self, count: usize) {
        self.pc = self.pc.wrapping_add(count);
    }
}
