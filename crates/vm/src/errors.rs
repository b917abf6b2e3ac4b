use bytes::Bytes;
use solovm_common::U256;
use thiserror::Error;

/// Every way an engine invocation can fail.
///
/// Exceptional halts are the user visible failure modes of the bytecode
/// itself; internal errors are bug guards that should never fire on any
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VMError {
    #[error("exceptional halt: {0}")]
    ExceptionalHalt(#[from] ExceptionalHalt),
    #[error("internal error: {0}")]
    Internal(#[from] InternalError),
}

impl VMError {
    /// Internal errors abort the whole execution instead of being folded
    /// into a failed sub call.
    pub fn should_propagate(&self) -> bool {
        matches!(self, VMError::Internal(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExceptionalHalt {
    #[error("stack underflow")]
    StackUnderflow,
    #[error("stack overflow")]
    StackOverflow,
    #[error("invalid opcode")]
    InvalidOpcode,
    #[error("offset out of the addressable range")]
    InvalidOffset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InternalError {
    #[error("memory length is not a multiple of the word size")]
    InvalidMemoryLength,
    #[error("arithmetic operation overflowed")]
    Overflow,
    #[error("arithmetic operation underflowed")]
    Underflow,
}

/// Result of running a single opcode handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeResult {
    Continue { pc_increment: usize },
    Halt(ResultReason),
}

/// Why the engine stopped fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultReason {
    Stop,
    Return,
    Revert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxResult {
    Success,
    Revert,
}

/// What an engine invocation hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReport {
    /// `None` when the program halted mid code without an explicit
    /// terminator (including a STOP that is not the final byte of code).
    pub result: Option<TxResult>,
    /// Bytes produced by RETURN or REVERT, `None` otherwise.
    pub output: Option<Bytes>,
    /// Final operand stack, top first.
    pub stack: Vec<U256>,
}

impl ExecutionReport {
    pub fn is_success(&self) -> bool {
        matches!(self.result, Some(TxResult::Success))
    }

    pub fn is_revert(&self) -> bool {
        matches!(self.result, Some(TxResult::Revert))
    }
}
