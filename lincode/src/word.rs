use std::fmt;

/// A single row of a [`crate::BitMatrix`], or a word of a linear code. This is an alias for [`u64`]
pub type BitBlock = u64;

/// Number of bits in a [`BitBlock`]
pub const BLOCKSIZE: usize = 64;

/// Longest supported code length.
///
/// One bit short of [`BLOCKSIZE`], so that `2^n` and every mask of `n` bits fits in a [`BitBlock`].
pub const MAX_CODE_LENGTH: usize = BLOCKSIZE - 1;

/// Returns `base` raised to `exponent`, with `power(b, 0) == 1`.
#[inline]
pub fn power(base: BitBlock, exponent: u32) -> BitBlock {
    base.pow(exponent)
}

/// Returns a word with the low `width` bits set, i.e. every coordinate of a `width`-bit word.
///
/// # Panics
///
/// Panics in debug builds if `width` exceeds [`MAX_CODE_LENGTH`].
#[inline]
pub fn mask(width: usize) -> BitBlock {
    debug_assert!(width <= MAX_CODE_LENGTH);
    power(2, width as u32) - 1
}

/// Returns the unit vector with only `coordinate` set, in a word of `width` coordinates.
///
/// Coordinate 0 is the most significant of the `width` bits, so this is bit `width - 1 - coordinate`.
#[inline]
pub fn unit(coordinate: usize, width: usize) -> BitBlock {
    debug_assert!(coordinate < width);
    1 << (width - 1 - coordinate)
}

/// Returns the value at `coordinate` of a `width`-coordinate word.
#[inline]
pub fn coordinate(word: BitBlock, coordinate: usize, width: usize) -> bool {
    word & unit(coordinate, width) != 0
}

/// Hamming weight of a word
#[inline]
pub fn weight(word: BitBlock) -> u32 {
    word.count_ones()
}

/// Number of coordinates at which two words differ.
#[inline]
pub fn distance(word0: BitBlock, word1: BitBlock) -> u32 {
    weight(word0 ^ word1)
}

/// Computes the dot product (mod 2) of two words.
///
/// Returns `true` if the number of matching 1s is odd, otherwise `false`.
#[inline]
pub fn dot(word0: BitBlock, word1: BitBlock) -> bool {
    weight(word0 & word1) & 1 == 1
}

/// Number of bits needed to hold the word, i.e. one more than the index of its highest set bit.
#[inline]
pub fn significant_bits(word: BitBlock) -> usize {
    BLOCKSIZE - word.leading_zeros() as usize
}

/// Displays a word as a string of `0`s and `1`s, coordinate 0 first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bits {
    pub word: BitBlock,
    pub width: usize,
}

impl Bits {
    #[inline]
    pub fn new(word: BitBlock, width: usize) -> Self {
        Bits { word, width }
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in 0..self.width {
            write!(f, "{}", if coordinate(self.word, p, self.width) { 1 } else { 0 })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn powers_and_masks() {
        assert_eq!(power(2, 0), 1);
        assert_eq!(power(2, 10), 1024);
        assert_eq!(power(3, 4), 81);
        assert_eq!(mask(0), 0);
        assert_eq!(mask(4), 0b1111);
        assert_eq!(mask(MAX_CODE_LENGTH), BitBlock::MAX >> 1);
    }

    #[test]
    fn coordinates_read_left_to_right() {
        assert_eq!(unit(0, 4), 0b1000);
        assert_eq!(unit(3, 4), 0b0001);
        let w = 0b1011;
        let coords: Vec<bool> = (0..4).map(|p| coordinate(w, p, 4)).collect();
        assert_eq!(coords, vec![true, false, true, true]);
    }

    #[test]
    fn weight_distance_dot() {
        assert_eq!(weight(0b1011), 3);
        assert_eq!(distance(0b1011, 0b0101), 3);
        assert!(!dot(0b1011, 0b1010));
        assert!(!dot(0b1011, 0b0011));
        assert!(dot(0b1011, 0b0010));
        assert!(dot(0b1011, 0b1111));
        assert_eq!(significant_bits(0), 0);
        assert_eq!(significant_bits(0b100), 3);
    }

    #[test]
    fn display_bits() {
        assert_eq!(Bits::new(0b0101, 4).to_string(), "0101");
        assert_eq!(Bits::new(0b1, 1).to_string(), "1");
        assert_eq!(Bits::new(0, 0).to_string(), "");
    }
}
