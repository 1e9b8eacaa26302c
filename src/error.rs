use derive_more::{Display, Error};

/// Errors produced by the fallible [`BitWord`](crate::BitWord) operations.
///
/// Out-of-range bit indices are deliberately not represented here: they are
/// defined no-ops, not errors.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum BitWordError {
    /// An incremental-assembly operation was given more flags than the word
    /// has bits. The word is left unchanged.
    #[display("bit sequence of length {len} exceeds word width {width}")]
    SequenceTooLong { len: usize, width: u32 },

    #[display("division by zero")]
    DivideByZero,

    #[display("modulo by zero")]
    ModuloByZero,
}
