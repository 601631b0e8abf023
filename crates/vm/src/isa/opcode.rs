//! Opcode Table.
//!
//! The instruction set is closed: ten opcodes, each with a fixed parameter list.
//! Every parameter has a role that does not depend on the declared mode:
//! a *value* parameter is always read as an operand, an *address* parameter is
//! always a destination. The table below is the single source of truth for arity,
//! roles, names and mnemonics.
//!
//! | Code | Opcode | Roles |
//! |---|---|---|
//! | 1 | Add | value, value, address |
//! | 2 | Multiply | value, value, address |
//! | 3 | Input | address |
//! | 4 | Output | value |
//! | 5 | JumpIfTrue | value, value |
//! | 6 | JumpIfFalse | value, value |
//! | 7 | LessThan | value, value, address |
//! | 8 | Equals | value, value, address |
//! | 9 | AdjustRelativeBase | value |
//! | 99 | Halt | |

use std::fmt;

/// The role a parameter plays for its opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Read as an operand value.
    Value,
    /// Used as a destination address.
    Address,
}

/// Coarse instruction class, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpClass {
    /// Add and Multiply.
    Arithmetic,
    /// LessThan and Equals.
    Comparison,
    /// Conditional jumps.
    Jump,
    /// Input and Output.
    Io,
    /// Relative base adjustment.
    RelativeBase,
    /// Halt.
    Halt,
}

/// An intcode operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `dst = a + b`
    Add,
    /// `dst = a * b`
    Multiply,
    /// `dst = input()`
    Input,
    /// `output(a)`
    Output,
    /// `if a != 0 { ip = b }`
    JumpIfTrue,
    /// `if a == 0 { ip = b }`
    JumpIfFalse,
    /// `dst = (a < b) as i64`
    LessThan,
    /// `dst = (a == b) as i64`
    Equals,
    /// `rb += a`
    AdjustRelativeBase,
    /// Stop the machine.
    Halt,
}

/// Static description of one opcode.
#[derive(Debug)]
pub struct OpcodeInfo {
    /// Numeric code found in the low two digits of an instruction word.
    pub code: i64,
    /// Descriptive name.
    pub name: &'static str,
    /// Short mnemonic used by the disassembler.
    pub mnemonic: &'static str,
    /// Role of each parameter, in order.
    pub roles: &'static [Role],
    /// Statistics class.
    pub class: OpClass,
}

const BINARY_STORE: &[Role] = &[Role::Value, Role::Value, Role::Address];
const STORE: &[Role] = &[Role::Address];
const UNARY: &[Role] = &[Role::Value];
const JUMP: &[Role] = &[Role::Value, Role::Value];

/// Opcode descriptions, indexed by `Opcode as usize`.
static OPCODE_TABLE: [OpcodeInfo; 10] = [
    OpcodeInfo {
        code: 1,
        name: "Add",
        mnemonic: "add",
        roles: BINARY_STORE,
        class: OpClass::Arithmetic,
    },
    OpcodeInfo {
        code: 2,
        name: "Multiply",
        mnemonic: "mul",
        roles: BINARY_STORE,
        class: OpClass::Arithmetic,
    },
    OpcodeInfo {
        code: 3,
        name: "Input",
        mnemonic: "in",
        roles: STORE,
        class: OpClass::Io,
    },
    OpcodeInfo {
        code: 4,
        name: "Output",
        mnemonic: "out",
        roles: UNARY,
        class: OpClass::Io,
    },
    OpcodeInfo {
        code: 5,
        name: "JumpIfTrue",
        mnemonic: "jnz",
        roles: JUMP,
        class: OpClass::Jump,
    },
    OpcodeInfo {
        code: 6,
        name: "JumpIfFalse",
        mnemonic: "jz",
        roles: JUMP,
        class: OpClass::Jump,
    },
    OpcodeInfo {
        code: 7,
        name: "LessThan",
        mnemonic: "lt",
        roles: BINARY_STORE,
        class: OpClass::Comparison,
    },
    OpcodeInfo {
        code: 8,
        name: "Equals",
        mnemonic: "eq",
        roles: BINARY_STORE,
        class: OpClass::Comparison,
    },
    OpcodeInfo {
        code: 9,
        name: "AdjustRelativeBase",
        mnemonic: "arb",
        roles: UNARY,
        class: OpClass::RelativeBase,
    },
    OpcodeInfo {
        code: 99,
        name: "Halt",
        mnemonic: "halt",
        roles: &[],
        class: OpClass::Halt,
    },
];

impl Opcode {
    /// Every opcode, in table order.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Multiply,
        Self::Input,
        Self::Output,
        Self::JumpIfTrue,
        Self::JumpIfFalse,
        Self::LessThan,
        Self::Equals,
        Self::AdjustRelativeBase,
        Self::Halt,
    ];

    /// Looks up an opcode by its numeric code.
    #[inline]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Add),
            2 => Some(Self::Multiply),
            3 => Some(Self::Input),
            4 => Some(Self::Output),
            5 => Some(Self::JumpIfTrue),
            6 => Some(Self::JumpIfFalse),
            7 => Some(Self::LessThan),
            8 => Some(Self::Equals),
            9 => Some(Self::AdjustRelativeBase),
            99 => Some(Self::Halt),
            _ => None,
        }
    }

    /// Returns the static description of this opcode.
    #[inline]
    pub fn info(self) -> &'static OpcodeInfo {
        &OPCODE_TABLE[self as usize]
    }

    /// Numeric code of the opcode.
    #[inline]
    pub fn code(self) -> i64 {
        self.info().code
    }

    /// Parameter roles, one per parameter.
    #[inline]
    pub fn roles(self) -> &'static [Role] {
        self.info().roles
    }

    /// Number of parameters.
    #[inline]
    pub fn arity(self) -> usize {
        self.roles().len()
    }

    /// Number of memory words the instruction occupies, opcode word included.
    #[inline]
    pub fn width(self) -> i64 {
        self.arity() as i64 + 1
    }

    /// Short mnemonic, e.g. `"add"`.
    #[inline]
    pub fn mnemonic(self) -> &'static str {
        self.info().mnemonic
    }

    /// Statistics class.
    #[inline]
    pub fn class(self) -> OpClass {
        self.info().class
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}
