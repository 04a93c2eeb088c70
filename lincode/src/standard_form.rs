//! Systematic `(I | X)` form of a generator matrix
//!
//! A generator in reduced row echelon form has a unit column for each of its pivots. Moving those columns to the
//! front, in order, exposes the identity block. The permutation that does this is kept around, since the parity
//! check matrix derived from the systematic form has to be moved back to the original column order.

use log::debug;

use crate::{
    bitmatrix::BitMatrix,
    error::ECCError,
    permutation::Permutation,
    word::{mask, unit, BitBlock},
};

/// A generator matrix in systematic form, together with the column permutation producing it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandardForm {
    /// `permutation[i]` is the column of the original generator moved to position `i`
    pub permutation: Permutation,

    /// the permuted generator `G' = (I_k | X)`
    pub systematic: BitMatrix,
}

impl StandardForm {
    /// Dimension of the code, i.e. the number of rows of the systematic generator
    #[inline]
    pub fn dimension(&self) -> usize {
        self.systematic.rows()
    }
}

/// Keep the nonzero rows of a row-reduced matrix, which together form the generator matrix `G`
///
/// Any bits at or beyond coordinate `cols` are masked away before testing for zero.
pub fn build_generator(rref: &BitMatrix) -> BitMatrix {
    let m = mask(rref.cols());
    rref.filter_rows(|row| row & m != 0)
}

/// Returns true if the matrix is the full `n x n` identity, with row `i` the unit vector at coordinate `i`
pub fn is_identity(generator: &BitMatrix) -> bool {
    let n = generator.cols();
    generator.rows() == n && (0..n).all(|i| generator.row(i) == unit(i, n))
}

/// Find a column permutation moving the pivot columns of `generator` to the front
///
/// For each row `i`, the first column of `generator` equal to the unit vector at coordinate `i` is taken, in
/// order of rows. The remaining columns follow in ascending order.
///
/// # Errors
///
/// If some row has no unit column, which means `generator` was not in reduced row echelon form
pub fn find_permutation(generator: &BitMatrix) -> Result<Permutation, ECCError> {
    let k = generator.rows();
    let columns = generator.transposed();
    let mut used = vec![false; columns.rows()];
    let mut permutation = Vec::with_capacity(columns.rows());

    for place_value in (0..k).rev() {
        let target: BitBlock = 1 << place_value;
        let found = (0..columns.rows()).find(|&j| !used[j] && columns.row(j) == target);
        match found {
            Some(j) => {
                used[j] = true;
                permutation.push(j);
            }
            None => return Err(ECCError::NotReduced(k - 1 - place_value)),
        }
    }

    permutation.extend((0..columns.rows()).filter(|&j| !used[j]));
    Permutation::new(permutation)
}

/// Compute the systematic form `G' = (I_k | X)` of a generator in reduced row echelon form
///
/// # Errors
///
/// [`ECCError::DegenerateCode`] if the generator is already the full identity, so that there is no redundancy to
/// derive a parity check from. [`ECCError::NotReduced`] if the generator is not in reduced row echelon form.
pub fn build_standard_form(generator: &BitMatrix) -> Result<StandardForm, ECCError> {
    if is_identity(generator) {
        return Err(ECCError::DegenerateCode);
    }
    let permutation = find_permutation(generator)?;
    let systematic = generator.permute_cols(&permutation)?;
    debug!(
        "systematic form with k = {}, n = {}, permutation {}",
        systematic.rows(),
        systematic.cols(),
        permutation
    );
    Ok(StandardForm {
        permutation,
        systematic,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rref::reduce_to_rref;
    use rand::{rngs::SmallRng, SeedableRng};

    fn left_block_is_identity(m: &BitMatrix) -> bool {
        let k = m.rows();
        (0..k).all(|i| (0..k).all(|j| m[(i, j)] == (i == j)))
    }

    #[test]
    fn generator_drops_zero_rows() {
        let rref = BitMatrix::from_rows(4, vec![0b1011, 0, 0b0101, 0]).unwrap();
        let g = build_generator(&rref);
        assert_eq!(g.row_words(), &[0b1011, 0b0101]);
        assert_eq!(g.cols(), 4);

        let g = build_generator(&BitMatrix::zeros(3, 4));
        assert_eq!(g.rows(), 0);
    }

    #[test]
    fn identity_test() {
        assert!(is_identity(&BitMatrix::identity(3)));
        assert!(is_identity(
            &BitMatrix::from_rows(3, vec![0b100, 0b010, 0b001]).unwrap()
        ));
        // not square
        assert!(!is_identity(
            &BitMatrix::from_rows(3, vec![0b100, 0b010]).unwrap()
        ));
        // square, but rows out of order
        assert!(!is_identity(
            &BitMatrix::from_rows(3, vec![0b010, 0b100, 0b001]).unwrap()
        ));
    }

    #[test]
    fn degenerate_code() {
        let g = BitMatrix::from_rows(3, vec![0b100, 0b010, 0b001]).unwrap();
        assert_eq!(build_standard_form(&g), Err(ECCError::DegenerateCode));
    }

    #[test]
    fn already_systematic() {
        let g = BitMatrix::from_rows(4, vec![0b1011, 0b0101]).unwrap();
        let sf = build_standard_form(&g).unwrap();
        assert!(sf.permutation.is_identity());
        assert_eq!(sf.systematic, g);
        assert_eq!(sf.dimension(), 2);
    }

    #[test]
    fn pivots_not_leading() {
        let g = BitMatrix::from_rows(5, vec![0b01100, 0b00011]).unwrap();
        let sf = build_standard_form(&g).unwrap();
        assert_eq!(sf.permutation.as_slice(), &[1, 3, 0, 2, 4]);
        assert_eq!(sf.systematic.row_words(), &[0b10010, 0b01001]);
    }

    #[test]
    fn non_pivot_unit_column_is_skipped() {
        // column 2 equals the pivot column 0, only the first is taken
        let g = BitMatrix::from_rows(3, vec![0b101]).unwrap();
        let p = find_permutation(&g).unwrap();
        assert_eq!(p.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn unreduced_generator() {
        let g = BitMatrix::from_rows(3, vec![0b110, 0b110]).unwrap();
        assert_eq!(find_permutation(&g), Err(ECCError::NotReduced(0)));

        let g = BitMatrix::from_rows(3, vec![0b100, 0b110]).unwrap();
        assert_eq!(find_permutation(&g), Err(ECCError::NotReduced(0)));
    }

    #[test]
    fn zero_dimensional_generator() {
        let g = BitMatrix::zeros(0, 4);
        let sf = build_standard_form(&g).unwrap();
        assert!(sf.permutation.is_identity());
        assert_eq!(sf.permutation.len(), 4);
        assert_eq!(sf.systematic.rows(), 0);
    }

    #[test]
    fn random_standard_forms() {
        let mut rng = SmallRng::seed_from_u64(1);
        for (rows, cols) in [(3, 10), (6, 9), (12, 20), (20, 12), (1, 5)] {
            let m = BitMatrix::random(&mut rng, rows, cols);
            let g = build_generator(&reduce_to_rref(&m).unwrap());
            if is_identity(&g) {
                continue;
            }
            let sf = build_standard_form(&g).unwrap();
            assert_eq!(sf.systematic.rows(), g.rows());
            assert_eq!(sf.permutation.len(), cols);
            assert!(left_block_is_identity(&sf.systematic), "{}", sf.systematic);
            assert_eq!(
                sf.systematic.permute_cols(&sf.permutation.inverse()).unwrap(),
                g
            );
        }
    }
}
