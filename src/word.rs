use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width integral storage for a [`BitWord`](crate::BitWord).
///
/// Implemented for the primitive integer types only; the trait is sealed, so
/// a `BitWord` over anything non-integral is rejected at compile time. All
/// arithmetic is two's-complement and wraps at the word width. Conversions
/// between widths go through a single `u128` funnel that sign-extends signed
/// values and zero-extends unsigned ones, which matches `as`-cast semantics.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Default
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    const BITS: u32;
    const SIGNED: bool;

    fn from_bit(bit: bool) -> Self;
    fn count_ones(self) -> u32;
    fn reverse_bits(self) -> Self;
    fn swap_bytes(self) -> Self;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_div(self, rhs: Self) -> Self;
    fn wrapping_rem(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;

    /// Zero-filling right shift, even for signed types.
    fn logical_shr(self, n: u32) -> Self;

    fn extend_to_u128(self) -> u128;
    fn truncate_from_u128(value: u128) -> Self;

    #[inline]
    fn zero() -> Self {
        Self::default()
    }

    #[inline]
    fn one() -> Self {
        Self::from_bit(true)
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

macro_rules! word_impl {
    ($word_type:ty, $unsigned_twin:ty, $signed:expr) => {
        impl sealed::Sealed for $word_type {}

        impl Word for $word_type {
            const BITS: u32 = <$word_type>::BITS;
            const SIGNED: bool = $signed;

            #[inline]
            fn from_bit(bit: bool) -> Self {
                bit as $word_type
            }
            #[inline]
            fn count_ones(self) -> u32 {
                <$word_type>::count_ones(self)
            }
            #[inline]
            fn reverse_bits(self) -> Self {
                <$word_type>::reverse_bits(self)
            }
            #[inline]
            fn swap_bytes(self) -> Self {
                <$word_type>::swap_bytes(self)
            }
            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$word_type>::wrapping_add(self, rhs)
            }
            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$word_type>::wrapping_sub(self, rhs)
            }
            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$word_type>::wrapping_mul(self, rhs)
            }
            #[inline]
            fn wrapping_div(self, rhs: Self) -> Self {
                <$word_type>::wrapping_div(self, rhs)
            }
            #[inline]
            fn wrapping_rem(self, rhs: Self) -> Self {
                <$word_type>::wrapping_rem(self, rhs)
            }
            #[inline]
            fn wrapping_neg(self) -> Self {
                <$word_type>::wrapping_neg(self)
            }
            #[inline]
            fn logical_shr(self, n: u32) -> Self {
                ((self as $unsigned_twin) >> n) as $word_type
            }
            #[inline]
            fn extend_to_u128(self) -> u128 {
                // Casting a signed value to u128 sign-extends first.
                self as u128
            }
            #[inline]
            fn truncate_from_u128(value: u128) -> Self {
                value as $word_type
            }
        }
    };
}

word_impl!(u8, u8, false);
word_impl!(u16, u16, false);
word_impl!(u32, u32, false);
word_impl!(u64, u64, false);
word_impl!(u128, u128, false);
word_impl!(i8, u8, true);
word_impl!(i16, u16, true);
word_impl!(i32, u32, true);
word_impl!(i64, u64, true);
word_impl!(i128, u128, true);
