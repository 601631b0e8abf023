//! Shared program fixtures.
//!
//! Small programs with well-known behavior, plus two full amplifier and diagnostic
//! programs used as end-to-end regression inputs.

/// Reads one value and echoes it back.
pub const ECHO: &[i64] = &[3, 0, 4, 0, 99];

/// Outputs a copy of itself using relative addressing.
pub const QUINE: &[i64] = &[
    109, 1, 204, -1, 1001, 100, 1, 100, 1008, 100, 16, 101, 1006, 101, 0, 99,
];

/// Outputs a 16-digit product.
pub const LARGE_PRODUCT: &[i64] = &[1102, 34915192, 34915192, 7, 4, 7, 99, 0];

/// Outputs its large immediate literal.
pub const LARGE_LITERAL: &[i64] = &[104, 1125899906842624, 99];

/// Outputs 1 if the input equals 8 (position mode), else 0.
pub const EQUALS_EIGHT_POSITION: &[i64] = &[3, 9, 8, 9, 10, 9, 4, 9, 99, -1, 8];

/// Outputs 1 if the input is less than 8 (position mode), else 0.
pub const LESS_THAN_EIGHT_POSITION: &[i64] = &[3, 9, 7, 9, 10, 9, 4, 9, 99, -1, 8];

/// Outputs 1 if the input equals 8 (immediate mode), else 0.
pub const EQUALS_EIGHT_IMMEDIATE: &[i64] = &[3, 3, 1108, -1, 8, 3, 4, 3, 99];

/// Outputs 1 if the input is less than 8 (immediate mode), else 0.
pub const LESS_THAN_EIGHT_IMMEDIATE: &[i64] = &[3, 3, 1107, -1, 8, 3, 4, 3, 99];

/// Outputs 0 if the input is zero, else 1 (position-mode jumps).
pub const NONZERO_POSITION: &[i64] = &[3, 12, 6, 12, 15, 1, 13, 14, 13, 4, 13, 99, -1, 0, 1, 9];

/// Outputs 0 if the input is zero, else 1 (immediate-mode jumps).
pub const NONZERO_IMMEDIATE: &[i64] = &[3, 3, 1105, -1, 9, 1101, 0, 0, 12, 4, 12, 99, 1];

/// Outputs 999, 1000 or 1001 as the input is below, equal to, or above 8.
pub const COMPARE_TO_EIGHT: &[i64] = &[
    3, 21, 1008, 21, 8, 20, 1005, 20, 22, 107, 8, 21, 20, 1006, 20, 31, 1106, 0, 36, 98, 0, 0,
    1002, 21, 125, 20, 4, 20, 1105, 1, 46, 104, 999, 1105, 1, 46, 1101, 1000, 1, 20, 4, 20,
    1105, 1, 46, 98, 99,
];

/// Linear amplifier example; best ordering `[4, 3, 2, 1, 0]` gives 43210.
pub const AMP_LINEAR: &[i64] = &[3, 15, 3, 16, 1002, 16, 10, 16, 1, 16, 15, 15, 4, 15, 99, 0, 0];

/// Feedback amplifier example; best ordering `[9, 8, 7, 6, 5]` gives 139629729.
pub const AMP_FEEDBACK: &[i64] = &[
    3, 26, 1001, 26, -4, 26, 3, 27, 1002, 27, 2, 27, 1, 27, 26, 27, 4, 27, 1001, 28, -1, 28,
    1005, 28, 6, 99, 0, 0, 5,
];

/// Full amplifier controller program, as program text.
pub const AMPLIFIER_PROGRAM: &str = concat!(
    "3,8,1001,8,10,8,105,1,0,0,21,42,67,84,97,118,199,280,361,442,99999,3,9,101,4,9,9,102,5,9,9",
    ",101,2,9,9,1002,9,2,9,4,9,99,3,9,101,5,9,9,102,5,9,9,1001,9,5,9,102,3,9,9,1001,9,2,9,4,9,9",
    "9,3,9,1001,9,5,9,1002,9,2,9,1001,9,5,9,4,9,99,3,9,1001,9,5,9,1002,9,3,9,4,9,99,3,9,102,4,9",
    ",9,101,4,9,9,102,2,9,9,101,3,9,9,4,9,99,3,9,102,2,9,9,4,9,3,9,1002,9,2,9,4,9,3,9,1001,9,2,",
    "9,4,9,3,9,102,2,9,9,4,9,3,9,102,2,9,9,4,9,3,9,1001,9,2,9,4,9,3,9,1002,9,2,9,4,9,3,9,102,2,",
    "9,9,4,9,3,9,1001,9,2,9,4,9,3,9,101,2,9,9,4,9,99,3,9,1001,9,1,9,4,9,3,9,101,2,9,9,4,9,3,9,1",
    "001,9,2,9,4,9,3,9,1002,9,2,9,4,9,3,9,101,2,9,9,4,9,3,9,1002,9,2,9,4,9,3,9,102,2,9,9,4,9,3,",
    "9,1002,9,2,9,4,9,3,9,101,1,9,9,4,9,3,9,101,2,9,9,4,9,99,3,9,101,1,9,9,4,9,3,9,1001,9,1,9,4",
    ",9,3,9,1002,9,2,9,4,9,3,9,1002,9,2,9,4,9,3,9,1002,9,2,9,4,9,3,9,1001,9,2,9,4,9,3,9,102,2,9",
    ",9,4,9,3,9,102,2,9,9,4,9,3,9,101,2,9,9,4,9,3,9,1001,9,2,9,4,9,99,3,9,102,2,9,9,4,9,3,9,102",
    ",2,9,9,4,9,3,9,1001,9,2,9,4,9,3,9,102,2,9,9,4,9,3,9,1001,9,2,9,4,9,3,9,102,2,9,9,4,9,3,9,1",
    "02,2,9,9,4,9,3,9,101,1,9,9,4,9,3,9,1001,9,2,9,4,9,3,9,1002,9,2,9,4,9,99,3,9,101,1,9,9,4,9,",
    "3,9,101,1,9,9,4,9,3,9,102,2,9,9,4,9,3,9,1001,9,2,9,4,9,3,9,1001,9,2,9,4,9,3,9,1002,9,2,9,4",
    ",9,3,9,101,1,9,9,4,9,3,9,102,2,9,9,4,9,3,9,1001,9,1,9,4,9,3,9,1001,9,2,9,4,9,99",
);

/// Best linear signal of [`AMPLIFIER_PROGRAM`] over phases 0..=4.
pub const AMPLIFIER_LINEAR_MAX: (i64, [i64; 5]) = (79723, [2, 3, 1, 0, 4]);

/// Best feedback signal of [`AMPLIFIER_PROGRAM`] over phases 5..=9.
pub const AMPLIFIER_FEEDBACK_MAX: (i64, [i64; 5]) = (70602018, [6, 9, 7, 8, 5]);

/// Full diagnostic program exercising every position/immediate opcode.
pub const DIAGNOSTIC_PROGRAM: &str = concat!(
    "3,225,1,225,6,6,1100,1,238,225,104,0,1102,79,14,225,1101,17,42,225,2,74,69,224,1001,224,-5",
    "733,224,4,224,1002,223,8,223,101,4,224,224,1,223,224,223,1002,191,83,224,1001,224,-2407,22",
    "4,4,224,102,8,223,223,101,2,224,224,1,223,224,223,1101,18,64,225,1102,63,22,225,1101,31,91",
    ",225,1001,65,26,224,101,-44,224,224,4,224,102,8,223,223,101,3,224,224,1,224,223,223,101,78",
    ",13,224,101,-157,224,224,4,224,1002,223,8,223,1001,224,3,224,1,224,223,223,102,87,187,224,",
    "101,-4698,224,224,4,224,102,8,223,223,1001,224,4,224,1,223,224,223,1102,79,85,224,101,-671",
    "5,224,224,4,224,1002,223,8,223,1001,224,2,224,1,224,223,223,1101,43,46,224,101,-89,224,224",
    ",4,224,1002,223,8,223,101,1,224,224,1,223,224,223,1101,54,12,225,1102,29,54,225,1,17,217,2",
    "24,101,-37,224,224,4,224,102,8,223,223,1001,224,3,224,1,223,224,223,1102,20,53,225,4,223,9",
    "9,0,0,0,677,0,0,0,0,0,0,0,0,0,0,0,1105,0,99999,1105,227,247,1105,1,99999,1005,227,99999,10",
    "05,0,256,1105,1,99999,1106,227,99999,1106,0,265,1105,1,99999,1006,0,99999,1006,227,274,110",
    "5,1,99999,1105,1,280,1105,1,99999,1,225,225,225,1101,294,0,0,105,1,0,1105,1,99999,1106,0,3",
    "00,1105,1,99999,1,225,225,225,1101,314,0,0,106,0,0,1105,1,99999,107,226,226,224,1002,223,2",
    ",223,1006,224,329,101,1,223,223,1108,677,226,224,1002,223,2,223,1006,224,344,101,1,223,223",
    ",7,677,226,224,102,2,223,223,1006,224,359,101,1,223,223,108,226,226,224,1002,223,2,223,100",
    "5,224,374,101,1,223,223,8,226,677,224,1002,223,2,223,1006,224,389,101,1,223,223,1108,226,2",
    "26,224,102,2,223,223,1006,224,404,101,1,223,223,1007,677,677,224,1002,223,2,223,1006,224,4",
    "19,101,1,223,223,8,677,677,224,1002,223,2,223,1005,224,434,1001,223,1,223,1008,226,226,224",
    ",102,2,223,223,1005,224,449,1001,223,1,223,1008,226,677,224,102,2,223,223,1006,224,464,101",
    ",1,223,223,1107,677,677,224,102,2,223,223,1006,224,479,101,1,223,223,107,677,677,224,1002,",
    "223,2,223,1005,224,494,1001,223,1,223,1107,226,677,224,1002,223,2,223,1005,224,509,101,1,2",
    "23,223,1108,226,677,224,102,2,223,223,1006,224,524,101,1,223,223,7,226,226,224,1002,223,2,",
    "223,1005,224,539,101,1,223,223,108,677,677,224,1002,223,2,223,1005,224,554,101,1,223,223,8",
    ",677,226,224,1002,223,2,223,1005,224,569,1001,223,1,223,1008,677,677,224,102,2,223,223,100",
    "6,224,584,101,1,223,223,107,226,677,224,102,2,223,223,1005,224,599,1001,223,1,223,7,226,67",
    "7,224,102,2,223,223,1005,224,614,101,1,223,223,1007,226,226,224,1002,223,2,223,1005,224,62",
    "9,101,1,223,223,1107,677,226,224,1002,223,2,223,1006,224,644,101,1,223,223,108,226,677,224",
    ",102,2,223,223,1006,224,659,101,1,223,223,1007,677,226,224,102,2,223,223,1006,224,674,101,",
    "1,223,223,4,223,99,226",
);

/// Final diagnostic code for system id 1 (all preceding checks output 0).
pub const DIAGNOSTIC_SYSTEM_1: i64 = 9025675;

/// Diagnostic code for system id 5.
pub const DIAGNOSTIC_SYSTEM_5: i64 = 11981754;
