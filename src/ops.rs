//! Free bit-manipulation primitives over a fixed-width [`Word`].
//!
//! Bit indices are 1-based with index 1 the least significant bit. An index
//! outside `[1, W]` is a defined no-op: the mutating primitives return the
//! input unchanged and [`check_bit`] returns `false`. Callers that want to
//! treat a bad index as a bug must check the range themselves.

use crate::word::Word;

#[inline]
fn in_range<T: Word>(index: u32) -> bool {
    (1..=T::BITS).contains(&index)
}

#[inline]
fn bit_mask<T: Word>(index: u32) -> T {
    T::one() << (index - 1)
}

/// Reverses the order of all `W` bits of `n`.
#[inline]
#[must_use]
pub fn reverse_bits<T: Word>(n: T) -> T {
    n.reverse_bits()
}

/// Reverses the order of the `W / 8` bytes of `n`.
#[inline]
#[must_use]
pub fn reverse_bytes<T: Word>(n: T) -> T {
    n.swap_bytes()
}

/// Number of set bits in `n`.
#[inline]
#[must_use]
pub fn count_ones<T: Word>(n: T) -> u32 {
    n.count_ones()
}

/// Number of clear bits in `n`. Always `W - count_ones(n)`.
#[inline]
#[must_use]
pub fn count_zeroes<T: Word>(n: T) -> u32 {
    T::BITS - n.count_ones()
}

/// Whether bit `index` of `n` is set. Out-of-range indices read as `false`.
#[inline]
#[must_use]
pub fn check_bit<T: Word>(n: T, index: u32) -> bool {
    if !in_range::<T>(index) {
        return false;
    }
    n.logical_shr(index - 1) & T::one() == T::one()
}

/// `n` with bit `index` set.
#[inline]
#[must_use]
pub fn set_bit<T: Word>(n: T, index: u32) -> T {
    if !in_range::<T>(index) {
        return n;
    }
    n | bit_mask::<T>(index)
}

/// `n` with bit `index` cleared.
#[inline]
#[must_use]
pub fn clear_bit<T: Word>(n: T, index: u32) -> T {
    if !in_range::<T>(index) {
        return n;
    }
    n & !bit_mask::<T>(index)
}

/// `n` with bit `index` inverted.
#[inline]
#[must_use]
pub fn toggle_bit<T: Word>(n: T, index: u32) -> T {
    if !in_range::<T>(index) {
        return n;
    }
    n ^ bit_mask::<T>(index)
}

/// Number of bit positions at which `x` and `y` differ.
#[inline]
#[must_use]
pub fn hamming_distance<T: Word>(x: T, y: T) -> u32 {
    (x ^ y).count_ones()
}

/// The low `count` bits of `n`, all other bits cleared.
///
/// `count == 0` yields zero and `count >= W` yields `n`.
#[inline]
#[must_use]
pub fn right_bits<T: Word>(n: T, count: u32) -> T {
    if count == 0 {
        return T::zero();
    }
    if count >= T::BITS {
        return n;
    }
    let mask = (T::one() << count).wrapping_sub(T::one());
    n & mask
}

/// The high `count` bits of `n`, shifted down to start at bit 1.
///
/// The shift is logical, so the vacated high bits are zero even for signed
/// words. `count == 0` yields zero and `count >= W` yields `n`.
#[inline]
#[must_use]
pub fn left_bits<T: Word>(n: T, count: u32) -> T {
    if count == 0 {
        return T::zero();
    }
    if count >= T::BITS {
        return n;
    }
    n.logical_shr(T::BITS - count)
}
