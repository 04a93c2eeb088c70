use crate::{error::ECCError, permutation::Permutation, rref, word::*};
use log::warn;
use rand::Rng;
use std::{
    fmt,
    ops::{Index, Mul},
};

/// A matrix of bits over GF(2), stored as one [`BitBlock`] per row
///
/// Column `j` of a row is bit `cols - 1 - j` of its block, so the first column is the most significant of the
/// `cols` bits in use. Bits at or above `cols` are always 0, which bounds the number of columns by
/// [`MAX_CODE_LENGTH`].
///
/// Row order is significant: for a generator matrix it is the basis ordering used when encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    /// the number of logical columns in the matrix
    cols: usize,

    /// the rows of the matrix, in order
    data: Vec<BitBlock>,
}

pub trait RowOps {
    fn add_row(&mut self, from: usize, to: usize);
    fn swap_rows(&mut self, from: usize, to: usize);
}

impl BitMatrix {
    /// Builds a matrix with `cols` columns from raw rows.
    ///
    /// # Errors
    ///
    /// If `cols` exceeds [`MAX_CODE_LENGTH`], or if some row has bits set beyond its first `cols` coordinates
    pub fn from_rows(cols: usize, rows: Vec<BitBlock>) -> Result<Self, ECCError> {
        if cols > MAX_CODE_LENGTH {
            return Err(ECCError::InvalidLength(cols));
        }
        if let Some(&row) = rows.iter().find(|&&row| row & !mask(cols) != 0) {
            return Err(ECCError::DimensionMismatch {
                expected: cols,
                found: significant_bits(row),
            });
        }
        Ok(BitMatrix { cols, data: rows })
    }

    /// Builds a matrix with `cols` columns from raw rows, discarding any bits beyond the first `cols`
    /// coordinates.
    ///
    /// # Errors
    ///
    /// If `cols` exceeds [`MAX_CODE_LENGTH`]
    pub fn from_rows_truncated(cols: usize, rows: Vec<BitBlock>) -> Result<Self, ECCError> {
        if cols > MAX_CODE_LENGTH {
            return Err(ECCError::InvalidLength(cols));
        }
        let m = mask(cols);
        let stray = rows.iter().filter(|&&row| row & !m != 0).count();
        if stray > 0 {
            warn!("masked bits beyond coordinate {} in {} of {} rows", cols, stray, rows.len());
        }
        Ok(BitMatrix {
            cols,
            data: rows.into_iter().map(|row| row & m).collect(),
        })
    }

    /// # Panics
    ///
    /// If `cols` exceeds [`MAX_CODE_LENGTH`]
    pub fn build(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        assert!(cols <= MAX_CODE_LENGTH, "matrix can have at most {} columns", MAX_CODE_LENGTH);
        let data = (0..rows)
            .map(|i| {
                (0..cols)
                    .filter(|&j| f(i, j))
                    .fold(0, |row, j| row | unit(j, cols))
            })
            .collect();
        BitMatrix { cols, data }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(cols <= MAX_CODE_LENGTH, "matrix can have at most {} columns", MAX_CODE_LENGTH);
        BitMatrix {
            cols,
            data: vec![0; rows],
        }
    }

    pub fn identity(size: usize) -> Self {
        assert!(size <= MAX_CODE_LENGTH, "matrix can have at most {} columns", MAX_CODE_LENGTH);
        BitMatrix {
            cols: size,
            data: (0..size).map(|i| unit(i, size)).collect(),
        }
    }

    #[inline]
    pub fn random(rng: &mut impl Rng, rows: usize, cols: usize) -> Self {
        assert!(cols <= MAX_CODE_LENGTH, "matrix can have at most {} columns", MAX_CODE_LENGTH);
        let m = mask(cols);
        BitMatrix {
            cols,
            data: (0..rows).map(|_| rng.random::<BitBlock>() & m).collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn row(&self, row: usize) -> BitBlock {
        self.data[row]
    }

    #[inline]
    pub fn row_words(&self) -> &[BitBlock] {
        &self.data
    }

    #[inline]
    pub fn bit(&self, i: usize, j: usize) -> bool {
        assert!(j < self.cols, "column {} out of bounds for {} columns", j, self.cols);
        coordinate(self.data[i], j, self.cols)
    }

    #[inline]
    pub fn set_bit(&mut self, i: usize, j: usize, b: bool) {
        assert!(j < self.cols, "column {} out of bounds for {} columns", j, self.cols);
        if b {
            self.data[i] |= unit(j, self.cols);
        } else {
            self.data[i] &= !unit(j, self.cols);
        }
    }

    #[inline]
    pub fn clear_row(&mut self, row: usize) {
        self.data[row] = 0;
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&row| row == 0)
    }

    /// Returns the matrix restricted to the rows satisfying `f`, in their original order
    pub fn filter_rows(&self, f: impl Fn(BitBlock) -> bool) -> Self {
        BitMatrix {
            cols: self.cols,
            data: self.data.iter().copied().filter(|&row| f(row)).collect(),
        }
    }

    /// Returns a transposed copy of the matrix
    ///
    /// Row `j` of the result holds column `j` of `self`, with the entry from row `i` at coordinate `i`.
    ///
    /// # Panics
    ///
    /// If the matrix has more than [`MAX_CODE_LENGTH`] rows
    pub fn transposed(&self) -> Self {
        let rows = self.rows();
        assert!(
            rows <= MAX_CODE_LENGTH,
            "cannot transpose a matrix with {} rows, at most {} are supported",
            rows,
            MAX_CODE_LENGTH
        );
        let data = (0..self.cols)
            .map(|j| {
                self.data
                    .iter()
                    .enumerate()
                    .filter(|&(_, &row)| coordinate(row, j, self.cols))
                    .fold(0, |t, (i, _)| t | unit(i, rows))
            })
            .collect();
        BitMatrix { cols: rows, data }
    }

    /// Returns a copy of the matrix with its columns reordered, so that column `i` of the result is column
    /// `permutation[i]` of `self`.
    ///
    /// # Errors
    ///
    /// If the permutation does not have one entry per column
    pub fn permute_cols(&self, permutation: &Permutation) -> Result<Self, ECCError> {
        if permutation.len() != self.cols {
            return Err(ECCError::DimensionMismatch {
                expected: self.cols,
                found: permutation.len(),
            });
        }
        let transposed = self.transposed();
        let reordered = BitMatrix {
            cols: transposed.cols,
            data: (0..permutation.len())
                .map(|i| transposed.row(permutation[i]))
                .collect(),
        };
        Ok(reordered.transposed())
    }

    /// Multiplies the matrix by a word, seen as a column vector.
    ///
    /// Coordinate `i` of the returned `rows()`-bit word is the dot product of row `i` with `word`. For a
    /// parity check matrix this is the syndrome of `word`.
    #[inline]
    pub fn mul_word(&self, word: BitBlock) -> BitBlock {
        self.data
            .iter()
            .fold(0, |s, &row| (s << 1) | dot(row, word) as BitBlock)
    }

    /// Checks whether every row of `self` has dot product 0 with every row of `other`
    pub fn is_orthogonal_to(&self, other: &BitMatrix) -> bool {
        self.cols == other.cols && self.data.iter().all(|&row| other.mul_word(row) == 0)
    }

    /// Finds the first pair `(i, j)` such that row `i` of `self` is not orthogonal to row `j` of `other`
    pub fn first_non_orthogonal(&self, other: &BitMatrix) -> Option<(usize, usize)> {
        self.data.iter().enumerate().find_map(|(i, &row)| {
            other
                .data
                .iter()
                .position(|&other_row| dot(row, other_row))
                .map(|j| (i, j))
        })
    }

    /// Compute the rank of the matrix using gaussian elimination
    #[inline]
    pub fn rank(&self) -> usize {
        let mut m = self.clone();
        rref::gauss_jordan(&mut m).len()
    }
}

impl RowOps for BitMatrix {
    #[inline]
    fn add_row(&mut self, from: usize, to: usize) {
        self.data[to] ^= self.data[from];
    }

    #[inline]
    fn swap_rows(&mut self, from: usize, to: usize) {
        self.data.swap(from, to);
    }
}

impl Index<(usize, usize)> for BitMatrix {
    type Output = bool;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        if self.bit(index.0, index.1) {
            &true
        } else {
            &false
        }
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &row in &self.data {
            writeln!(f, "{}", Bits::new(row, self.cols))?;
        }

        Ok(())
    }
}

impl Mul for &BitMatrix {
    type Output = BitMatrix;
    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows() {
            panic!(
                "Attempting to multiply matrices of incompatible dimensions: {} != {}",
                self.cols,
                rhs.rows()
            );
        }

        let data = self
            .data
            .iter()
            .map(|&row| {
                (0..self.cols)
                    .filter(|&j| coordinate(row, j, self.cols))
                    .fold(0, |acc, j| acc ^ rhs.row(j))
            })
            .collect();

        BitMatrix {
            cols: rhs.cols,
            data,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn strict_and_truncated_rows() {
        assert!(BitMatrix::from_rows(4, vec![0b1011, 0b0101]).is_ok());
        assert_eq!(
            BitMatrix::from_rows(4, vec![0b1011, 0b10101]),
            Err(ECCError::DimensionMismatch {
                expected: 4,
                found: 5
            })
        );
        assert_eq!(
            BitMatrix::from_rows(64, vec![]),
            Err(ECCError::InvalidLength(64))
        );

        let m = BitMatrix::from_rows_truncated(4, vec![0b1011, 0b110101]).unwrap();
        assert_eq!(m.row_words(), &[0b1011, 0b0101]);
    }

    #[test]
    fn identity() {
        let m = BitMatrix::identity(40);
        for i in 0..40 {
            for j in 0..40 {
                assert_eq!(m[(i, j)], i == j);
            }
        }
    }

    #[test]
    fn get_set_bits() {
        let mut m = BitMatrix::zeros(3, 5);
        m.set_bit(0, 0, true);
        m.set_bit(2, 4, true);
        m.set_bit(1, 2, true);
        m.set_bit(1, 2, false);
        assert_eq!(m.row_words(), &[0b10000, 0, 0b00001]);
        assert!(m[(2, 4)]);
        assert!(!m[(1, 2)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_bit_past_last_column() {
        let mut m = BitMatrix::zeros(2, 5);
        m.set_bit(0, 5, true);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_past_last_column() {
        let m = BitMatrix::identity(4);
        let _ = m[(0, 4)];
    }

    #[test]
    fn build_matches_bits() {
        let m = BitMatrix::build(3, 4, |i, j| (i + j) % 2 == 0);
        assert_eq!(m.row_words(), &[0b1010, 0b0101, 0b1010]);
    }

    #[test]
    fn transpose_small() {
        // columns of 01100 / 00011, each as a 2-bit word
        let m = BitMatrix::from_rows(5, vec![0b01100, 0b00011]).unwrap();
        let t = m.transposed();
        assert_eq!(t.rows(), 5);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.row_words(), &[0b00, 0b10, 0b10, 0b01, 0b01]);
    }

    #[test]
    fn transpose() {
        let mut rng = SmallRng::seed_from_u64(1);
        let m = BitMatrix::random(&mut rng, 10, 4);
        let n = m.transposed();
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                assert_eq!(m[(i, j)], n[(j, i)]);
            }
        }
        assert_eq!(n.transposed(), m);

        let m = BitMatrix::random(&mut rng, 63, 50);
        let n = m.transposed();
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                assert_eq!(m[(i, j)], n[(j, i)]);
            }
        }
        assert_eq!(n.transposed(), m);
    }

    #[test]
    fn transpose_empty() {
        let m = BitMatrix::zeros(0, 4);
        let t = m.transposed();
        assert_eq!((t.rows(), t.cols()), (4, 0));
    }

    #[test]
    fn permute_and_restore_cols() {
        let mut rng = SmallRng::seed_from_u64(1);
        let m = BitMatrix::random(&mut rng, 6, 9);
        let p = Permutation::new(vec![3, 0, 8, 1, 2, 7, 6, 4, 5]).unwrap();
        let pm = m.permute_cols(&p).unwrap();
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                assert_eq!(pm[(i, j)], m[(i, p[j])]);
            }
        }
        assert_eq!(pm.permute_cols(&p.inverse()).unwrap(), m);

        assert_eq!(
            m.permute_cols(&Permutation::identity(4)),
            Err(ECCError::DimensionMismatch {
                expected: 9,
                found: 4
            })
        );
    }

    #[test]
    fn permute_cols_without_rows() {
        let m = BitMatrix::zeros(0, 3);
        let p = Permutation::new(vec![2, 0, 1]).unwrap();
        assert_eq!(m.permute_cols(&p).unwrap(), m);
    }

    #[test]
    fn mul_word_is_syndrome() {
        let h = BitMatrix::from_rows(4, vec![0b1010, 0b1101]).unwrap();
        assert_eq!(h.mul_word(0b1011), 0b00);
        assert_eq!(h.mul_word(0b0001), 0b01);
        assert_eq!(h.mul_word(0b1000), 0b11);
        assert_eq!(h.mul_word(0b0010), 0b10);
    }

    #[test]
    fn orthogonality() {
        let g = BitMatrix::from_rows(4, vec![0b1011, 0b0101]).unwrap();
        let h = BitMatrix::from_rows(4, vec![0b1010, 0b1101]).unwrap();
        assert!(g.is_orthogonal_to(&h));
        assert!(h.is_orthogonal_to(&g));
        assert_eq!(g.first_non_orthogonal(&h), None);

        let bad = BitMatrix::from_rows(4, vec![0b1010, 0b1000]).unwrap();
        assert!(!g.is_orthogonal_to(&bad));
        assert_eq!(g.first_non_orthogonal(&bad), Some((0, 1)));
    }

    #[test]
    fn matrix_mult() {
        let mut rng = SmallRng::seed_from_u64(1);
        let m1 = BitMatrix::random(&mut rng, 20, 30);
        let m2 = BitMatrix::random(&mut rng, 30, 25);
        let m3 = &m1 * &m2;

        for i in 0..m3.rows() {
            for j in 0..m3.cols() {
                let mut b = false;
                for k in 0..m1.cols() {
                    b ^= m1.bit(i, k) & m2.bit(k, j);
                }
                assert_eq!(m3.bit(i, j), b);
            }
        }
    }

    #[test]
    fn generator_times_parity_transpose_vanishes() {
        let g = BitMatrix::from_rows(4, vec![0b1011, 0b0101]).unwrap();
        let h = BitMatrix::from_rows(4, vec![0b1010, 0b1101]).unwrap();
        assert!((&g * &h.transposed()).is_zero());
    }

    #[test]
    fn rank() {
        assert_eq!(BitMatrix::identity(7).rank(), 7);
        assert_eq!(BitMatrix::zeros(3, 5).rank(), 0);
        let m = BitMatrix::from_rows(4, vec![0b1011, 0b0101, 0b1110]).unwrap();
        assert_eq!(m.rank(), 2);
    }

    #[test]
    fn display() {
        let m = BitMatrix::from_rows(4, vec![0b1011, 0b0101]).unwrap();
        assert_eq!(m.to_string(), "1011\n0101\n");
    }
}
