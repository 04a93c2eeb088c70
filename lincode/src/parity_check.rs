use log::debug;

use crate::{
    bitmatrix::BitMatrix,
    error::ECCError,
    permutation::Permutation,
    standard_form::build_generator,
    word::unit,
};

/// Derive the parity check matrix `H` of the code generated by the systematic form `systematic = (I_k | X)`.
///
/// The parity check of the permuted code is `H' = (X^T | I_{n-k})` (over GF(2), `-X^T = X^T`). Its columns are
/// then moved back with the inverse of `permutation`, so that `H` checks the code spanned by `rref` in its
/// original coordinates.
///
/// # Errors
///
/// If `permutation` does not have one entry per column of `systematic`, or if some nonzero row of `rref` is not
/// orthogonal to the derived parity check (i.e. `systematic` is not a permuted form of `rref`)
pub fn derive_parity_check(
    systematic: &BitMatrix,
    rref: &BitMatrix,
    permutation: &Permutation,
) -> Result<BitMatrix, ECCError> {
    let n = systematic.cols();
    let k = systematic.rows();
    if permutation.len() != n {
        return Err(ECCError::DimensionMismatch {
            expected: n,
            found: permutation.len(),
        });
    }
    if k > n {
        return Err(ECCError::DimensionMismatch {
            expected: n,
            found: k,
        });
    }
    let redundancy = n - k;

    let columns = systematic.transposed();
    let x_transpose = BitMatrix::from_rows(k, columns.row_words()[k..].to_vec())?;
    debug!("X^T:\n{}", x_transpose);

    let h_permuted = BitMatrix::from_rows(
        n,
        (0..redundancy)
            .map(|i| (x_transpose.row(i) << redundancy) | unit(i, redundancy))
            .collect(),
    )?;
    debug!("H':\n{}", h_permuted);

    let reverse = permutation.inverse();
    debug!("permutation {}, reverse permutation {}", permutation, reverse);
    let parity_check = h_permuted.permute_cols(&reverse)?;

    if let Some((generator_row, parity_row)) =
        build_generator(rref).first_non_orthogonal(&parity_check)
    {
        return Err(ECCError::NotOrthogonal {
            generator_row,
            parity_row,
        });
    }

    Ok(parity_check)
}
