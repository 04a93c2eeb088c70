use thiserror::Error;

use crate::word::{BitBlock, MAX_CODE_LENGTH};

/// Errors raised while building or using a linear code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ECCError {
    /// A row or matrix has a bit-width inconsistent with the code length
    #[error("expected a width of at most {expected} bits, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("code length {0} is outside the supported range 1..={MAX_CODE_LENGTH}")]
    InvalidLength(usize),

    #[error("at least one row is required")]
    EmptyInput,

    /// Not a failure: the generator is the full identity, so every word is a codeword
    #[error("the generator matrix is the identity, the code is the whole space")]
    DegenerateCode,

    #[error("message {message} is outside the {k}-bit message space")]
    MessageOutOfRange { message: BitBlock, k: usize },

    #[error("word {word} does not fit in {n} coordinates")]
    WordOutOfRange { word: BitBlock, n: usize },

    #[error("matrix is not in reduced row echelon form: row {0} has no unit pivot column")]
    NotReduced(usize),

    #[error("{0:?} is not a permutation")]
    InvalidPermutation(Vec<usize>),

    #[error("generator row {generator_row} is not orthogonal to parity check row {parity_row}")]
    NotOrthogonal {
        generator_row: usize,
        parity_row: usize,
    },

    #[error("parity check admits {found} codewords, but the generator spans {expected}")]
    InconsistentCode { expected: usize, found: usize },

    #[error("invalid input token {0:?}")]
    InvalidToken(String),

    #[error("symbol {0:?} is not in the alphabet")]
    UnknownSymbol(char),

    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
}
