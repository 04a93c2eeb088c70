//! A bijection between the codewords of a code and printable symbols, for human readable transcripts

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{error::ECCError, word::BitBlock};

/// Printed in place of a received word that is not a codeword
pub const ERASURE: char = '|';

/// The first symbol of every alphabet
pub const ALPHABET_BASE: char = 'A';

/// Maps the `i`-th of a list of codewords to the `i`-th symbol counting up from [`ALPHABET_BASE`]
#[derive(Clone, Debug)]
pub struct AlphabetMap {
    encoding: FxHashMap<BitBlock, char>,
    decoding: FxHashMap<char, BitBlock>,
    symbols: Vec<char>,
}

fn symbols() -> impl Iterator<Item = char> {
    (ALPHABET_BASE as u32..=char::MAX as u32)
        .filter_map(char::from_u32)
        .filter(|&c| c != ERASURE && !c.is_control() && !c.is_whitespace())
}

impl AlphabetMap {
    /// # Errors
    ///
    /// If `encoded_words` repeats a word, or holds more words than there are symbols
    pub fn new(encoded_words: &[BitBlock]) -> Result<Self, ECCError> {
        let symbols: Vec<char> = symbols().take(encoded_words.len()).collect();
        if symbols.len() < encoded_words.len() {
            return Err(ECCError::InvalidAlphabet(format!(
                "{} words do not fit in {} symbols",
                encoded_words.len(),
                symbols.len()
            )));
        }

        let mut encoding = FxHashMap::default();
        let mut decoding = FxHashMap::default();
        for (&word, &symbol) in encoded_words.iter().zip(&symbols) {
            if encoding.insert(word, symbol).is_some() {
                return Err(ECCError::InvalidAlphabet(format!("word {} appears twice", word)));
            }
            decoding.insert(symbol, word);
        }

        Ok(AlphabetMap {
            encoding,
            decoding,
            symbols,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols, in the order of the words they were built from
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn symbol(&self, word: BitBlock) -> Option<char> {
        self.encoding.get(&word).copied()
    }

    pub fn word(&self, symbol: char) -> Option<BitBlock> {
        self.decoding.get(&symbol).copied()
    }

    /// Renders words as symbols, with [`ERASURE`] for words outside the alphabet
    pub fn to_symbols(&self, words: &[BitBlock]) -> String {
        words
            .iter()
            .map(|&w| self.symbol(w).unwrap_or(ERASURE))
            .collect()
    }

    /// # Errors
    ///
    /// If a symbol is not in the alphabet
    pub fn to_words(&self, symbols: &str) -> Result<Vec<BitBlock>, ECCError> {
        symbols
            .chars()
            .map(|c| self.word(c).ok_or(ECCError::UnknownSymbol(c)))
            .collect()
    }
}

impl fmt::Display for AlphabetMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut by_word: Vec<_> = self.encoding.iter().collect();
        by_word.sort();
        for (i, (_, symbol)) in by_word.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
