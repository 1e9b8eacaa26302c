//! Fixed-width bit manipulation on a single integral word.
//!
//! The crate has two layers: the free primitives in [`ops`], pure functions
//! over any [`Word`] storage type, and [`BitWord`], a value type wrapping one
//! word and exposing the same operations as chainable methods plus
//! incremental assembly from a sequence of bit flags.
//!
//! Bit indices are 1-based throughout, index 1 being the least significant
//! bit. An index outside `[1, W]` is a defined no-op, never an error.

pub mod bitword;
pub mod error;
pub mod ops;
pub mod word;

pub use bitword::{BitIter, BitWord};
pub use error::BitWordError;
pub use word::Word;

pub type Bits8 = BitWord<u8>;
pub type Bits16 = BitWord<u16>;
pub type Bits32 = BitWord<u32>;
pub type Bits64 = BitWord<u64>;
pub type Bits128 = BitWord<u128>;

pub type IBits8 = BitWord<i8>;
pub type IBits16 = BitWord<i16>;
pub type IBits32 = BitWord<i32>;
pub type IBits64 = BitWord<i64>;
pub type IBits128 = BitWord<i128>;
