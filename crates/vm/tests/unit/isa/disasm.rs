//! # Disassembler Tests

use intcode_vm::isa::disasm::{disassemble_at, disassemble_program, format_instruction};
use intcode_vm::isa::decode;
use pretty_assertions::assert_eq;

use crate::common::fixtures::{AMP_LINEAR, QUINE};

#[test]
fn test_listing_of_linear_amplifier() {
    let lines = disassemble_program(AMP_LINEAR);
    assert_eq!(
        lines,
        vec![
            "0000: in [15]",
            "0002: in [16]",
            "0004: mul [16], #10, [16]",
            "0008: add [16], [15], [15]",
            "0012: out [15]",
            "0014: halt",
            "0015: .data 0",
            "0016: .data 0",
        ]
    );
}

#[test]
fn test_relative_operands() {
    let lines = disassemble_program(&QUINE[..4]);
    assert_eq!(lines, vec!["0000: arb #1", "0002: out [rb-1]"]);
    assert_eq!(disassemble_at(&[22201, 1, 2, 3], 0).0, "add [rb+1], [rb+2], [rb+3]");
}

#[test]
fn test_truncated_instruction_is_data() {
    assert_eq!(
        disassemble_program(&[1, 2]),
        vec!["0000: .data 1", "0001: .data 2"]
    );
}

#[test]
fn test_past_end() {
    assert_eq!(disassemble_at(&[99], 1), (String::from(".end"), 0));
    assert_eq!(disassemble_at(&[99], 0), (String::from("halt"), 1));
}

#[test]
fn test_missing_literals_render_as_placeholder() {
    let inst = decode(1105).unwrap();
    assert_eq!(format_instruction(&inst, &[1]), "jnz #1, ?");
}
