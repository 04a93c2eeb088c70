//! Reading a spanning set of codewords from text
//!
//! The format is a whitespace-separated list of integers. The first is the code length `n`, every following one
//! is a codeword of the spanning set, written in decimal or as a `0b`-prefixed binary literal.

use std::str::FromStr;

use crate::{
    bitmatrix::BitMatrix,
    error::ECCError,
    word::{BitBlock, MAX_CODE_LENGTH},
};

/// A code length and a nonempty list of words spanning the code
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningSet {
    pub code_length: usize,
    pub words: Vec<BitBlock>,
}

fn parse_word(token: &str) -> Result<BitBlock, ECCError> {
    let parsed = match token.strip_prefix("0b") {
        Some(bits) => BitBlock::from_str_radix(bits, 2),
        None => token.parse(),
    };
    parsed.map_err(|_| ECCError::InvalidToken(token.to_owned()))
}

impl SpanningSet {
    /// # Errors
    ///
    /// If a token is not an integer, if the code length is outside `1..=MAX_CODE_LENGTH`, or if no codewords follow
    /// the code length
    pub fn parse(text: &str) -> Result<Self, ECCError> {
        let mut tokens = text.split_whitespace();
        let code_length = match tokens.next() {
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| ECCError::InvalidToken(token.to_owned()))?,
            None => return Err(ECCError::EmptyInput),
        };
        if code_length == 0 || code_length > MAX_CODE_LENGTH {
            return Err(ECCError::InvalidLength(code_length));
        }
        let words = tokens.map(parse_word).collect::<Result<Vec<_>, _>>()?;
        if words.is_empty() {
            return Err(ECCError::EmptyInput);
        }
        Ok(SpanningSet { code_length, words })
    }

    /// The spanning set as the rows of a matrix, with bits beyond the code length dropped
    pub fn to_matrix(&self) -> Result<BitMatrix, ECCError> {
        BitMatrix::from_rows_truncated(self.code_length, self.words.clone())
    }
}

impl FromStr for SpanningSet {
    type Err = ECCError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpanningSet::parse(s)
    }
}
