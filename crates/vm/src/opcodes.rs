use crate::{
    errors::{OpcodeResult, VMError},
    opcode_handlers::{
        OpInvalidHandler, OpStopHandler, OpcodeHandler, arithmetic::*, bitwise_comparison::*,
        block::*, dup::*, environment::*, exchange::*, keccak::*, push::*,
        stack_memory_storage_flow::*, system::*,
    },
    vm::VM,
};

/// The instruction set of this machine.
///
/// Every byte outside this table decodes to `INVALID` and fails the
/// execution with an invalid opcode halt.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Hash)]
pub enum Opcode {
    // Stop and Arithmetic Operations
    STOP = 0x00,
    ADD = 0x01,
    MUL = 0x02,
    SUB = 0x03,
    DIV = 0x04,
    SDIV = 0x05,
    MOD = 0x06,
    SMOD = 0x07,

    // Comparison & Bitwise Logic Operations
    LT = 0x10,
    GT = 0x11,
    SLT = 0x12,
    SGT = 0x13,
    EQ = 0x14,
    ISZERO = 0x15,
    AND = 0x16,
    OR = 0x17,
    XOR = 0x18,
    NOT = 0x19,
    BYTE = 0x1A,

    // Keccak-256 hashing
    SHA3 = 0x20,

    // Environmental Information
    ADDRESS = 0x30,
    BALANCE = 0x31,
    ORIGIN = 0x32,
    CALLER = 0x33,
    CALLVALUE = 0x34,
    CALLDATALOAD = 0x35,
    CALLDATASIZE = 0x36,
    CALLDATACOPY = 0x37,
    CODESIZE = 0x38,
    CODECOPY = 0x39,
    GASPRICE = 0x3A,
    EXTCODESIZE = 0x3B,
    EXTCODECOPY = 0x3C,

    // Block Information
    COINBASE = 0x41,
    TIMESTAMP = 0x42,
    NUMBER = 0x43,
    DIFFICULTY = 0x44,
    GASLIMIT = 0x45,
    CHAINID = 0x46,
    SELFBALANCE = 0x47,

    // Stack, Memory, Storage, and Flow Operations
    POP = 0x50,
    MLOAD = 0x51,
    MSTORE = 0x52,
    MSTORE8 = 0x53,
    SLOAD = 0x54,
    SSTORE = 0x55,
    JUMP = 0x56,
    JUMPI = 0x57,
    PC = 0x58,
    MSIZE = 0x59,
    JUMPDEST = 0x5B,

    // Push Operations
    PUSH1 = 0x60,
    PUSH2 = 0x61,
    PUSH3 = 0x62,
    PUSH4 = 0x63,
    PUSH5 = 0x64,
    PUSH6 = 0x65,
    PUSH7 = 0x66,
    PUSH8 = 0x67,
    PUSH9 = 0x68,
    PUSH10 = 0x69,
    PUSH11 = 0x6A,
    PUSH12 = 0x6B,
    PUSH13 = 0x6C,
    PUSH14 = 0x6D,
    PUSH15 = 0x6E,
    PUSH16 = 0x6F,
    PUSH17 = 0x70,
    PUSH18 = 0x71,
    PUSH19 = 0x72,
    PUSH20 = 0x73,
    PUSH21 = 0x74,
    PUSH22 = 0x75,
    PUSH23 = 0x76,
    PUSH24 = 0x77,
    PUSH25 = 0x78,
    PUSH26 = 0x79,
    PUSH27 = 0x7A,
    PUSH28 = 0x7B,
    PUSH29 = 0x7C,
    PUSH30 = 0x7D,
    PUSH31 = 0x7E,
    PUSH32 = 0x7F,

    // Duplication Operations
    DUP1 = 0x80,
    DUP2 = 0x81,
    DUP3 = 0x82,
    DUP4 = 0x83,
    DUP5 = 0x84,
    DUP6 = 0x85,
    DUP7 = 0x86,
    DUP8 = 0x87,
    DUP9 = 0x88,
    DUP10 = 0x89,
    DUP11 = 0x8A,
    DUP12 = 0x8B,
    DUP13 = 0x8C,
    DUP14 = 0x8D,
    DUP15 = 0x8E,
    DUP16 = 0x8F,

    // Swap Operations
    SWAP1 = 0x90,
    SWAP2 = 0x91,
    SWAP3 = 0x92,
    SWAP4 = 0x93,
    SWAP5 = 0x94,
    SWAP6 = 0x95,
    SWAP7 = 0x96,
    SWAP8 = 0x97,
    SWAP9 = 0x98,
    SWAP10 = 0x99,
    SWAP11 = 0x9A,
    SWAP12 = 0x9B,
    SWAP13 = 0x9C,
    SWAP14 = 0x9D,
    SWAP15 = 0x9E,
    SWAP16 = 0x9F,

    // System Operations
    CREATE = 0xF0,
    CALL = 0xF1,
    RETURN = 0xF3,
    REVERT = 0xFD,
    INVALID = 0xFE,
}

impl From<u8> for Opcode {
    #[allow(clippy::as_conversions, clippy::indexing_slicing)]
    fn from(byte: u8) -> Self {
        // A manual lookup table instead of a match: a byte indexes the
        // table directly, unknown bytes land on INVALID.
        const DECODE_TABLE: [Opcode; 256] = {
            let mut table = [Opcode::INVALID; 256];
            table[0x00] = Opcode::STOP;
            table[0x01] = Opcode::ADD;
            table[0x02] = Opcode::MUL;
            table[0x03] = Opcode::SUB;
            table[0x04] = Opcode::DIV;
            table[0x05] = Opcode::SDIV;
            table[0x06] = Opcode::MOD;
            table[0x07] = Opcode::SMOD;
            table[0x10] = Opcode::LT;
            table[0x11] = Opcode::GT;
            table[0x12] = Opcode::SLT;
            table[0x13] = Opcode::SGT;
            table[0x14] = Opcode::EQ;
            table[0x15] = Opcode::ISZERO;
            table[0x16] = Opcode::AND;
            table[0x17] = Opcode::OR;
            table[0x18] = Opcode::XOR;
            table[0x19] = Opcode::NOT;
            table[0x1A] = Opcode::BYTE;
            table[0x20] = Opcode::SHA3;
            table[0x30] = Opcode::ADDRESS;
            table[0x31] = Opcode::BALANCE;
            table[0x32] = Opcode::ORIGIN;
            table[0x33] = Opcode::CALLER;
            table[0x34] = Opcode::CALLVALUE;
            table[0x35] = Opcode::CALLDATALOAD;
            table[0x36] = Opcode::CALLDATASIZE;
            table[0x37] = Opcode::CALLDATACOPY;
            table[0x38] = Opcode::CODESIZE;
            table[0x39] = Opcode::CODECOPY;
            table[0x3A] = Opcode::GASPRICE;
            table[0x3B] = Opcode::EXTCODESIZE;
            table[0x3C] = Opcode::EXTCODECOPY;
            table[0x41] = Opcode::COINBASE;
            table[0x42] = Opcode::TIMESTAMP;
            table[0x43] = Opcode::NUMBER;
            table[0x44] = Opcode::DIFFICULTY;
            table[0x45] = Opcode::GASLIMIT;
            table[0x46] = Opcode::CHAINID;
            table[0x47] = Opcode::SELFBALANCE;
            table[0x50] = Opcode::POP;
            table[0x51] = Opcode::MLOAD;
            table[0x52] = Opcode::MSTORE;
            table[0x53] = Opcode::MSTORE8;
            table[0x54] = Opcode::SLOAD;
            table[0x55] = Opcode::SSTORE;
            table[0x56] = Opcode::JUMP;
            table[0x57] = Opcode::JUMPI;
            table[0x58] = Opcode::PC;
            table[0x59] = Opcode::MSIZE;
            table[0x5B] = Opcode::JUMPDEST;
            table[0x60] = Opcode::PUSH1;
            table[0x61] = Opcode::PUSH2;
            table[0x62] = Opcode::PUSH3;
            table[0x63] = Opcode::PUSH4;
            table[0x64] = Opcode::PUSH5;
            table[0x65] = Opcode::PUSH6;
            table[0x66] = Opcode::PUSH7;
            table[0x67] = Opcode::PUSH8;
            table[0x68] = Opcode::PUSH9;
            table[0x69] = Opcode::PUSH10;
            table[0x6A] = Opcode::PUSH11;
            table[0x6B] = Opcode::PUSH12;
            table[0x6C] = Opcode::PUSH13;
            table[0x6D] = Opcode::PUSH14;
            table[0x6E] = Opcode::PUSH15;
            table[0x6F] = Opcode::PUSH16;
            table[0x70] = Opcode::PUSH17;
            table[0x71] = Opcode::PUSH18;
            table[0x72] = Opcode::PUSH19;
            table[0x73] = Opcode::PUSH20;
            table[0x74] = Opcode::PUSH21;
            table[0x75] = Opcode::PUSH22;
            table[0x76] = Opcode::PUSH23;
            table[0x77] = Opcode::PUSH24;
            table[0x78] = Opcode::PUSH25;
            table[0x79] = Opcode::PUSH26;
            table[0x7A] = Opcode::PUSH27;
            table[0x7B] = Opcode::PUSH28;
            table[0x7C] = Opcode::PUSH29;
            table[0x7D] = Opcode::PUSH30;
            table[0x7E] = Opcode::PUSH31;
            table[0x7F] = Opcode::PUSH32;
            table[0x80] = Opcode::DUP1;
            table[0x81] = Opcode::DUP2;
            table[0x82] = Opcode::DUP3;
            table[0x83] = Opcode::DUP4;
            table[0x84] = Opcode::DUP5;
            table[0x85] = Opcode::DUP6;
            table[0x86] = Opcode::DUP7;
            table[0x87] = Opcode::DUP8;
            table[0x88] = Opcode::DUP9;
            table[0x89] = Opcode::DUP10;
            table[0x8A] = Opcode::DUP11;
            table[0x8B] = Opcode::DUP12;
            table[0x8C] = Opcode::DUP13;
            table[0x8D] = Opcode::DUP14;
            table[0x8E] = Opcode::DUP15;
            table[0x8F] = Opcode::DUP16;
            table[0x90] = Opcode::SWAP1;
            table[0x91] = Opcode::SWAP2;
            table[0x92] = Opcode::SWAP3;
            table[0x93] = Opcode::SWAP4;
            table[0x94] = Opcode::SWAP5;
            table[0x95] = Opcode::SWAP6;
            table[0x96] = Opcode::SWAP7;
            table[0x97] = Opcode::SWAP8;
            table[0x98] = Opcode::SWAP9;
            table[0x99] = Opcode::SWAP10;
            table[0x9A] = Opcode::SWAP11;
            table[0x9B] = Opcode::SWAP12;
            table[0x9C] = Opcode::SWAP13;
            table[0x9D] = Opcode::SWAP14;
            table[0x9E] = Opcode::SWAP15;
            table[0x9F] = Opcode::SWAP16;
            table[0xF0] = Opcode::CREATE;
            table[0xF1] = Opcode::CALL;
            table[0xF3] = Opcode::RETURN;
            table[0xFD] = Opcode::REVERT;

            table
        };
        DECODE_TABLE[byte as usize]
    }
}

impl From<Opcode> for u8 {
    #[allow(clippy::as_conversions)]
    fn from(opcode: Opcode) -> Self {
        opcode as u8
    }
}

impl From<Opcode> for usize {
    #[allow(clippy::as_conversions)]
    fn from(opcode: Opcode) -> Self {
        opcode as usize
    }
}

/// Represents an opcode function handler.
#[derive(Clone, Copy)]
pub(crate) struct OpCodeFn(fn(&mut VM<'_>) -> Result<OpcodeResult, VMError>);

impl OpCodeFn {
    pub const fn new<T>() -> Self
    where
        T: OpcodeHandler,
    {
        Self(T::eval)
    }

    /// Call the opcode handler.
    #[inline(always)]
    pub fn call(self, vm: &mut VM<'_>) -> Result<OpcodeResult, VMError> {
        (self.0)(vm)
    }
}

/// Opcode lookup function pointer table. Faster than a conventional
/// match, and unimplemented opcodes fall through to the invalid handler.
#[allow(clippy::as_conversions, clippy::indexing_slicing)]
pub(crate) const OPCODE_TABLE: [OpCodeFn; 256] = {
    let mut table = [OpCodeFn::new::<OpInvalidHandler>(); 256];
    table[Opcode::STOP as usize] = OpCodeFn::new::<OpStopHandler>();
    table[Opcode::ADD as usize] = OpCodeFn::new::<OpAddHandler>();
    table[Opcode::MUL as usize] = OpCodeFn::new::<OpMulHandler>();
    table[Opcode::SUB as usize] = OpCodeFn::new::<OpSubHandler>();
    table[Opcode::DIV as usize] = OpCodeFn::new::<OpDivHandler>();
    table[Opcode::SDIV as usize] = OpCodeFn::new::<OpSDivHandler>();
    table[Opcode::MOD as usize] = OpCodeFn::new::<OpModHandler>();
    table[Opcode::SMOD as usize] = OpCodeFn::new::<OpSModHandler>();
    table[Opcode::LT as usize] = OpCodeFn::new::<OpLtHandler>();
    table[Opcode::GT as usize] = OpCodeFn::new::<OpGtHandler>();
    table[Opcode::SLT as usize] = OpCodeFn::new::<OpSltHandler>();
    table[Opcode::SGT as usize] = OpCodeFn::new::<OpSgtHandler>();
    table[Opcode::EQ as usize] = OpCodeFn::new::<OpEqHandler>();
    table[Opcode::ISZERO as usize] = OpCodeFn::new::<OpIsZeroHandler>();
    table[Opcode::AND as usize] = OpCodeFn::new::<OpAndHandler>();
    table[Opcode::OR as usize] = OpCodeFn::new::<OpOrHandler>();
    table[Opcode::XOR as usize] = OpCodeFn::new::<OpXorHandler>();
    table[Opcode::NOT as usize] = OpCodeFn::new::<OpNotHandler>();
    table[Opcode::BYTE as usize] = OpCodeFn::new::<OpByteHandler>();
    table[Opcode::SHA3 as usize] = OpCodeFn::new::<OpSha3Handler>();
    table[Opcode::ADDRESS as usize] = OpCodeFn::new::<OpAddressHandler>();
    table[Opcode::BALANCE as usize] = OpCodeFn::new::<OpBalanceHandler>();
    table[Opcode::ORIGIN as usize] = OpCodeFn::new::<OpOriginHandler>();
    table[Opcode::CALLER as usize] = OpCodeFn::new::<OpCallerHandler>();
    table[Opcode::CALLVALUE as usize] = OpCodeFn::new::<OpCallValueHandler>();
    table[Opcode::CALLDATALOAD as usize] = OpCodeFn::new::<OpCallDataLoadHandler>();
    table[Opcode::CALLDATASIZE as usize] = OpCodeFn::new::<OpCallDataSizeHandler>();
    table[Opcode::CALLDATACOPY as usize] = OpCodeFn::new::<OpCallDataCopyHandler>();
    table[Opcode::CODESIZE as usize] = OpCodeFn::new::<OpCodeSizeHandler>();
    table[Opcode::CODECOPY as usize] = OpCodeFn::new::<OpCodeCopyHandler>();
    table[Opcode::GASPRICE as usize] = OpCodeFn::new::<OpGasPriceHandler>();
    table[Opcode::EXTCODESIZE as usize] = OpCodeFn::new::<OpExtCodeSizeHandler>();
    table[Opcode::EXTCODECOPY as usize] = OpCodeFn::new::<OpExtCodeCopyHandler>();
    table[Opcode::COINBASE as usize] = OpCodeFn::new::<OpCoinbaseHandler>();
    table[Opcode::TIMESTAMP as usize] = OpCodeFn::new::<OpTimestampHandler>();
    table[Opcode::NUMBER as usize] = OpCodeFn::new::<OpNumberHandler>();
    table[Opcode::DIFFICULTY as usize] = OpCodeFn::new::<OpDifficultyHandler>();
    table[Opcode::GASLIMIT as usize] = OpCodeFn::new::<OpGasLimitHandler>();
    table[Opcode::CHAINID as usize] = OpCodeFn::new::<OpChainIdHandler>();
    table[Opcode::SELFBALANCE as usize] = OpCodeFn::new::<OpSelfBalanceHandler>();
    table[Opcode::POP as usize] = OpCodeFn::new::<OpPopHandler>();
    table[Opcode::MLOAD as usize] = OpCodeFn::new::<OpMLoadHandler>();
    table[Opcode::MSTORE as usize] = OpCodeFn::new::<OpMStoreHandler>();
    table[Opcode::MSTORE8 as usize] = OpCodeFn::new::<OpMStore8Handler>();
    table[Opcode::SLOAD as usize] = OpCodeFn::new::<OpSLoadHandler>();
    table[Opcode::SSTORE as usize] = OpCodeFn::new::<OpSStoreHandler>();
    table[Opcode::JUMP as usize] = OpCodeFn::new::<OpJumpHandler>();
    table[Opcode::JUMPI as usize] = OpCodeFn::new::<OpJumpIHandler>();
    table[Opcode::PC as usize] = OpCodeFn::new::<OpPcHandler>();
    table[Opcode::MSIZE as usize] = OpCodeFn::new::<OpMSizeHandler>();
    table[Opcode::JUMPDEST as usize] = OpCodeFn::new::<OpJumpDestHandler>();
    table[Opcode::PUSH1 as usize] = OpCodeFn::new::<OpPushHandler<1>>();
    table[Opcode::PUSH2 as usize] = OpCodeFn::new::<OpPushHandler<2>>();
    table[Opcode::PUSH3 as usize] = OpCodeFn::new::<OpPushHandler<3>>();
    table[Opcode::PUSH4 as usize] = OpCodeFn::new::<OpPushHandler<4>>();
    table[Opcode::PUSH5 as usize] = OpCodeFn::new::<OpPushHandler<5>>();
    table[Opcode::PUSH6 as usize] = OpCodeFn::new::<OpPushHandler<6>>();
    table[Opcode::PUSH7 as usize] = OpCodeFn::new::<OpPushHandler<7>>();
    table[Opcode::PUSH8 as usize] = OpCodeFn::new::<OpPushHandler<8>>();
    table[Opcode::PUSH9 as usize] = OpCodeFn::new::<OpPushHandler<9>>();
    table[Opcode::PUSH10 as usize] = OpCodeFn::new::<OpPushHandler<10>>();
    table[Opcode::PUSH11 as usize] = OpCodeFn::new::<OpPushHandler<11>>();
    table[Opcode::PUSH12 as usize] = OpCodeFn::new::<OpPushHandler<12>>();
    table[Opcode::PUSH13 as usize] = OpCodeFn::new::<OpPushHandler<13>>();
    table[Opcode::PUSH14 as usize] = OpCodeFn::new::<OpPushHandler<14>>();
    table[Opcode::PUSH15 as usize] = OpCodeFn::new::<OpPushHandler<15>>();
    table[Opcode::PUSH16 as usize] = OpCodeFn::new::<OpPushHandler<16>>();
    table[Opcode::PUSH17 as usize] = OpCodeFn::new::<OpPushHandler<17>>();
    table[Opcode::PUSH18 as usize] = OpCodeFn::new::<OpPushHandler<18>>();
    table[Opcode::PUSH19 as usize] = OpCodeFn::new::<OpPushHandler<19>>();
    table[Opcode::PUSH20 as usize] = OpCodeFn::new::<OpPushHandler<20>>();
    table[Opcode::PUSH21 as usize] = OpCodeFn::new::<OpPushHandler<21>>();
    table[Opcode::PUSH22 as usize] = OpCodeFn::new::<OpPushHandler<22>>();
    table[Opcode::PUSH23 as usize] = OpCodeFn::new::<OpPushHandler<23>>();
    table[Opcode::PUSH24 as usize] = OpCodeFn::new::<OpPushHandler<24>>();
    table[Opcode::PUSH25 as usize] = OpCodeFn::new::<OpPushHandler<25>>();
    table[Opcode::PUSH26 as usize] = OpCodeFn::new::<OpPushHandler<26>>();
    table[Opcode::PUSH27 as usize] = OpCodeFn::new::<OpPushHandler<27>>();
    table[Opcode::PUSH28 as usize] = OpCodeFn::new::<OpPushHandler<28>>();
    table[Opcode::PUSH29 as usize] = OpCodeFn::new::<OpPushHandler<29>>();
    table[Opcode::PUSH30 as usize] = OpCodeFn::new::<OpPushHandler<30>>();
    table[Opcode::PUSH31 as usize] = OpCodeFn::new::<OpPushHandler<31>>();
    table[Opcode::PUSH32 as usize] = OpCodeFn::new::<OpPushHandler<32>>();
    table[Opcode::DUP1 as usize] = OpCodeFn::new::<OpDupHandler<1>>();
    table[Opcode::DUP2 as usize] = OpCodeFn::new::<OpDupHandler<2>>();
    table[Opcode::DUP3 as usize] = OpCodeFn::new::<OpDupHandler<3>>();
    table[Opcode::DUP4 as usize] = OpCodeFn::new::<OpDupHandler<4>>();
    table[Opcode::DUP5 as usize] = OpCodeFn::new::<OpDupHandler<5>>();
    table[Opcode::DUP6 as usize] = OpCodeFn::new::<OpDupHandler<6>>();
    table[Opcode::DUP7 as usize] = OpCodeFn::new::<OpDupHandler<7>>();
    table[Opcode::DUP8 as usize] = OpCodeFn::new::<OpDupHandler<8>>();
    table[Opcode::DUP9 as usize] = OpCodeFn::new::<OpDupHandler<9>>();
    table[Opcode::DUP10 as usize] = OpCodeFn::new::<OpDupHandler<10>>();
    table[Opcode::DUP11 as usize] = OpCodeFn::new::<OpDupHandler<11>>();
    table[Opcode::DUP12 as usize] = OpCodeFn::new::<OpDupHandler<12>>();
    table[Opcode::DUP13 as usize] = OpCodeFn::new::<OpDupHandler<13>>();
    table[Opcode::DUP14 as usize] = OpCodeFn::new::<OpDupHandler<14>>();
    table[Opcode::DUP15 as usize] = OpCodeFn::new::<OpDupHandler<15>>();
    table[Opcode::DUP16 as usize] = OpCodeFn::new::<OpDupHandler<16>>();
    table[Opcode::SWAP1 as usize] = OpCodeFn::new::<OpSwapHandler<1>>();
    table[Opcode::SWAP2 as usize] = OpCodeFn::new::<OpSwapHandler<2>>();
    table[Opcode::SWAP3 as usize] = OpCodeFn::new::<OpSwapHandler<3>>();
    table[Opcode::SWAP4 as usize] = OpCodeFn::new::<OpSwapHandler<4>>();
    table[Opcode::SWAP5 as usize] = OpCodeFn::new::<OpSwapHandler<5>>();
    table[Opcode::SWAP6 as usize] = OpCodeFn::new::<OpSwapHandler<6>>();
    table[Opcode::SWAP7 as usize] = OpCodeFn::new::<OpSwapHandler<7>>();
    table[Opcode::SWAP8 as usize] = OpCodeFn::new::<OpSwapHandler<8>>();
    table[Opcode::SWAP9 as usize] = OpCodeFn::new::<OpSwapHandler<9>>();
    table[Opcode::SWAP10 as usize] = OpCodeFn::new::<OpSwapHandler<10>>();
    table[Opcode::SWAP11 as usize] = OpCodeFn::new::<OpSwapHandler<11>>();
    table[Opcode::SWAP12 as usize] = OpCodeFn::new::<OpSwapHandler<12>>();
    table[Opcode::SWAP13 as usize] = OpCodeFn::new::<OpSwapHandler<13>>();
    table[Opcode::SWAP14 as usize] = OpCodeFn::new::<OpSwapHandler<14>>();
    table[Opcode::SWAP15 as usize] = OpCodeFn::new::<OpSwapHandler<15>>();
    table[Opcode::SWAP16 as usize] = OpCodeFn::new::<OpSwapHandler<16>>();
    table[Opcode::CREATE as usize] = OpCodeFn::new::<OpCreateHandler>();
    table[Opcode::CALL as usize] = OpCodeFn::new::<OpCallHandler>();
    table[Opcode::RETURN as usize] = OpCodeFn::new::<OpReturnHandler>();
    table[Opcode::REVERT as usize] = OpCodeFn::new::<OpRevertHandler>();

    table
};
