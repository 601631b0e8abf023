//! # Address Tests
//!
//! Conversions from signed machine words to addresses.

use intcode_vm::common::Addr;

#[test]
fn test_from_word_accepts_zero_and_max() {
    assert_eq!(Addr::from_word(0), Some(Addr::new(0)));
    assert_eq!(Addr::from_word(i64::MAX).map(Addr::val), Some(i64::MAX as u64));
}

#[test]
fn test_offset_and_display() {
    let addr = Addr::new(10).offset(3);
    assert_eq!(addr.val(), 13);
    assert_eq!(addr.to_string(), "13");
}
