//! Major opcodes (`opcode` field, instruction bits 31..26).

/// R-type vector ALU operation; the function code selects the operation.
pub const OP_ALU: u32 = 0b10_1010;

/// M-type doubleword load: `rD <- mem[immAddr]`.
pub const OP_LOAD: u32 = 0b10_0000;

/// M-type doubleword store: `mem[immAddr] <- rD`.
pub const OP_STORE: u32 = 0b10_0001;

/// Branch to `immAddr` when `rD == 0`.
pub const OP_BEZ: u32 = 0b10_0010;

/// Branch to `immAddr` when `rD != 0`.
pub const OP_BNEZ: u32 = 0b10_0011;

/// No operation.
pub const OP_NOP: u32 = 0b11_1100;
