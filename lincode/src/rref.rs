//! Gauss-Jordan elimination over GF(2)

use log::{debug, trace};

use crate::{
    bitmatrix::{BitMatrix, RowOps},
    error::ECCError,
};

/// Reduce `matrix` to reduced row echelon form in place, returning the pivot columns.
///
/// Columns are scanned from coordinate 0. For each column the lowest candidate row at or below the current
/// pivot row is swapped into place, then added to every other row with a 1 in that column, which clears the
/// column above and below in one pass. Rows left without a pivot are zeroed.
pub(crate) fn gauss_jordan(matrix: &mut BitMatrix) -> Vec<usize> {
    let mut row = 0;
    let mut pcols = vec![];
    for pcol in 0..matrix.cols() {
        if row == matrix.rows() {
            break;
        }

        let Some(row1) = (row..matrix.rows()).find(|&i| matrix[(i, pcol)]) else {
            continue;
        };

        if row != row1 {
            matrix.swap_rows(row, row1);
        }

        for i in 0..matrix.rows() {
            if i != row && matrix[(i, pcol)] {
                matrix.add_row(row, i);
            }
        }

        trace!("pivot at row {} column {}", row, pcol);
        pcols.push(pcol);
        row += 1;
    }

    for i in row..matrix.rows() {
        matrix.clear_row(i);
    }

    pcols
}

/// Returns the reduced row echelon form of `matrix`
///
/// The result has the same dimensions as the input. Its nonzero rows come first and number exactly the rank
/// of the input.
///
/// # Errors
///
/// If the matrix has no rows
pub fn reduce_to_rref(matrix: &BitMatrix) -> Result<BitMatrix, ECCError> {
    if matrix.rows() == 0 {
        return Err(ECCError::EmptyInput);
    }
    let mut reduced = matrix.clone();
    let pcols = gauss_jordan(&mut reduced);
    debug!(
        "reduced {}x{} matrix to rank {}, pivot columns {:?}",
        matrix.rows(),
        matrix.cols(),
        pcols.len(),
        pcols
    );
    Ok(reduced)
}
