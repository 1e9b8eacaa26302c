use std::borrow::Borrow;
use std::fmt;

use crate::error::BitWordError;
use crate::ops;
use crate::word::Word;

/// A fixed-width integral value exposing bit-level inspection and mutation.
///
/// The width `W` is the bit width of the storage type and never changes.
/// Bit indices are 1-based, index 1 being the least significant bit; an
/// index outside `[1, W]` leaves the word unchanged (and reads as `false`),
/// matching the free primitives in [`ops`].
///
/// Mutating operations return `&mut Self` so they can be chained:
///
/// ```
/// use bitword::BitWord;
///
/// let mut word = BitWord::new(0u8);
/// word.set_bit(1).set_bit(3).toggle_bit(8);
/// assert_eq!(word.value(), 0b1000_0101);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct BitWord<T: Word> {
    number: T,
}

impl<T: Word> BitWord<T> {
    /// Bit width of the storage type.
    pub const WIDTH: u32 = T::BITS;

    #[must_use]
    pub fn new(number: T) -> Self {
        Self { number }
    }

    /// Builds a word from at most `W` flags, most significant first, as if
    /// by [`assign`](Self::assign) on a zeroed word.
    ///
    /// # Errors
    ///
    /// [`BitWordError::SequenceTooLong`] if more than `W` flags are given.
    pub fn try_from_bits(bits: &[bool]) -> Result<Self, BitWordError> {
        let mut word = Self::new(T::zero());
        word.assign(bits)?;
        Ok(word)
    }

    /// The stored integral value.
    #[must_use]
    pub fn value(&self) -> T {
        self.number
    }

    /// Bit width of the word. Equal to [`Self::WIDTH`].
    #[must_use]
    pub fn bit_width(&self) -> u32 {
        T::BITS
    }

    /// Number of set bits.
    #[must_use]
    pub fn ones(&self) -> u32 {
        ops::count_ones(self.number)
    }

    /// Number of clear bits. `ones() + zeroes()` is always the width.
    #[must_use]
    pub fn zeroes(&self) -> u32 {
        ops::count_zeroes(self.number)
    }

    /// Whether bit `index` is set. Out-of-range indices read as `false`.
    #[must_use]
    pub fn check_bit(&self, index: u32) -> bool {
        ops::check_bit(self.number, index)
    }

    /// Number of bit positions at which `self` and `other` differ.
    ///
    /// Accepts either a raw value or another `BitWord` of the same storage
    /// type.
    #[must_use]
    pub fn hamming_distance(&self, other: impl Borrow<T>) -> u32 {
        ops::hamming_distance(self.number, *other.borrow())
    }

    /// Iterator over all `W` bits, least significant first.
    #[must_use]
    pub fn bits(&self) -> BitIter<T> {
        BitIter::new(self.number)
    }

    /// All `W` bits as a vector, index 0 the least significant bit.
    #[must_use]
    pub fn to_bit_sequence(&self) -> Vec<bool> {
        self.bits().collect()
    }

    /// Binary rendering, most significant bit first, exactly `W` characters.
    #[must_use]
    pub fn to_bit_string(&self) -> String {
        let mut rendered = String::with_capacity(T::BITS as usize);
        for index in (1..=T::BITS).rev() {
            rendered.push(if self.check_bit(index) { '1' } else { '0' });
        }
        rendered
    }

    /// Binary rendering, least significant bit first, exactly `W` characters.
    #[must_use]
    pub fn to_bit_string_reversed(&self) -> String {
        let mut rendered = String::with_capacity(T::BITS as usize);
        for index in 1..=T::BITS {
            rendered.push(if self.check_bit(index) { '1' } else { '0' });
        }
        rendered
    }

    /// Explicit conversion to a different storage width.
    ///
    /// Truncates when narrowing; sign-extends when widening from a signed
    /// word and zero-extends from an unsigned one. This is the only
    /// cross-width conversion the type offers.
    #[must_use]
    pub fn resize<U: Word>(self) -> BitWord<U> {
        BitWord::new(U::truncate_from_u128(self.number.extend_to_u128()))
    }

    /// Reverses the order of all `W` bits.
    pub fn reverse_bits(&mut self) -> &mut Self {
        self.number = ops::reverse_bits(self.number);
        self
    }

    /// Reverses the order of the `W / 8` bytes.
    pub fn reverse_bytes(&mut self) -> &mut Self {
        self.number = ops::reverse_bytes(self.number);
        self
    }

    /// Sets bit `index`. Out of range is a no-op.
    pub fn set_bit(&mut self, index: u32) -> &mut Self {
        self.number = ops::set_bit(self.number, index);
        self
    }

    /// Clears bit `index`. Out of range is a no-op.
    pub fn clear_bit(&mut self, index: u32) -> &mut Self {
        self.number = ops::clear_bit(self.number, index);
        self
    }

    /// Inverts bit `index`. Out of range is a no-op.
    pub fn toggle_bit(&mut self, index: u32) -> &mut Self {
        self.number = ops::toggle_bit(self.number, index);
        self
    }

    /// Arithmetic negation, wrapping at the word width.
    ///
    /// Negation is only meaningful for signed storage; on unsigned words
    /// this is a defined no-op.
    pub fn negate(&mut self) -> &mut Self {
        if T::SIGNED {
            self.number = self.number.wrapping_neg();
        }
        self
    }

    /// Zeroes the word.
    pub fn clear(&mut self) -> &mut Self {
        self.number = T::zero();
        self
    }

    /// Bitwise complement of all `W` bits.
    pub fn invert(&mut self) -> &mut Self {
        self.number = !self.number;
        self
    }

    /// Replaces the stored value.
    pub fn set_value(&mut self, number: T) -> &mut Self {
        self.number = number;
        self
    }

    pub fn add(&mut self, operand: T) -> &mut Self {
        self.number = self.number.wrapping_add(operand);
        self
    }

    pub fn subtract(&mut self, operand: T) -> &mut Self {
        self.number = self.number.wrapping_sub(operand);
        self
    }

    pub fn multiply(&mut self, operand: T) -> &mut Self {
        self.number = self.number.wrapping_mul(operand);
        self
    }

    /// # Errors
    ///
    /// [`BitWordError::DivideByZero`] if `operand` is zero; the word is left
    /// unchanged.
    pub fn divide(&mut self, operand: T) -> Result<&mut Self, BitWordError> {
        if operand.is_zero() {
            return Err(BitWordError::DivideByZero);
        }
        self.number = self.number.wrapping_div(operand);
        Ok(self)
    }

    /// # Errors
    ///
    /// [`BitWordError::ModuloByZero`] if `operand` is zero; the word is left
    /// unchanged.
    pub fn modulo(&mut self, operand: T) -> Result<&mut Self, BitWordError> {
        if operand.is_zero() {
            return Err(BitWordError::ModuloByZero);
        }
        self.number = self.number.wrapping_rem(operand);
        Ok(self)
    }

    /// Shifts the flags in from the right, most significant flag first: for
    /// each flag the word is shifted left by one and the new bit 1 is set to
    /// the flag.
    ///
    /// The existing content moves up; there is no zero-fill beyond what the
    /// shifts produce. Starting from a zeroed word the result is exactly the
    /// flag pattern.
    ///
    /// # Errors
    ///
    /// [`BitWordError::SequenceTooLong`] if more than `W` flags are given;
    /// the word is left unchanged.
    pub fn insert_right(&mut self, bits: &[bool]) -> Result<&mut Self, BitWordError> {
        Self::check_sequence(bits.len())?;
        for &bit in bits {
            self.number = (self.number << 1) | T::from_bit(bit);
        }
        Ok(self)
    }

    /// Writes the flags at descending indices starting from bit `W`: the
    /// first flag lands on the most significant bit, the second on `W - 1`,
    /// and so on. Bits below the sequence are untouched.
    ///
    /// # Errors
    ///
    /// [`BitWordError::SequenceTooLong`] if more than `W` flags are given;
    /// the word is left unchanged.
    pub fn insert_left(&mut self, bits: &[bool]) -> Result<&mut Self, BitWordError> {
        Self::check_sequence(bits.len())?;
        for (offset, &bit) in bits.iter().enumerate() {
            // offset < W, so the index stays within [1, W].
            let index = T::BITS - offset as u32;
            self.number = if bit {
                ops::set_bit(self.number, index)
            } else {
                ops::clear_bit(self.number, index)
            };
        }
        Ok(self)
    }

    /// Replaces the word's contents with the flag pattern, most significant
    /// flag first: equivalent to clearing and then
    /// [`insert_right`](Self::insert_right).
    ///
    /// # Errors
    ///
    /// [`BitWordError::SequenceTooLong`] if more than `W` flags are given;
    /// the word is left unchanged.
    pub fn assign(&mut self, bits: &[bool]) -> Result<&mut Self, BitWordError> {
        Self::check_sequence(bits.len())?;
        self.number = T::zero();
        self.insert_right(bits)
    }

    fn check_sequence(len: usize) -> Result<(), BitWordError> {
        if len > T::BITS as usize {
            return Err(BitWordError::SequenceTooLong { len, width: T::BITS });
        }
        Ok(())
    }
}

impl<T: Word> From<T> for BitWord<T> {
    fn from(number: T) -> Self {
        Self::new(number)
    }
}

impl<T: Word> Borrow<T> for BitWord<T> {
    fn borrow(&self) -> &T {
        &self.number
    }
}

impl<T: Word> fmt::Display for BitWord<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_bit_string())
    }
}

impl<'life, T: Word> IntoIterator for &'life BitWord<T> {
    type Item = bool;
    type IntoIter = BitIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits()
    }
}

impl<T: Word> FromIterator<bool> for BitWord<T> {
    /// Collects up to `W` flags, least significant first (the order
    /// [`BitWord::bits`] yields them); extra flags beyond `W` are dropped.
    fn from_iter<I: IntoIterator<Item = bool>>(iterator: I) -> Self {
        let mut word = Self::new(T::zero());
        for (offset, bit) in iterator.into_iter().take(T::BITS as usize).enumerate() {
            if bit {
                word.set_bit(offset as u32 + 1);
            }
        }
        word
    }
}

/// Iterator over the bits of a word, least significant first.
pub struct BitIter<T: Word> {
    mask: T,
    word: T,
    remaining: u32,
}

impl<T: Word> BitIter<T> {
    fn new(word: T) -> Self {
        Self {
            mask: T::one(),
            word,
            remaining: T::BITS,
        }
    }
}

impl<T: Word> Iterator for BitIter<T> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        let bit = self.word & self.mask == self.mask;
        self.mask = self.mask << 1;
        self.remaining -= 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.remaining as usize;
        (size, Some(size))
    }
}

impl<T: Word> ExactSizeIterator for BitIter<T> {
    fn len(&self) -> usize {
        self.remaining as usize
    }
}
