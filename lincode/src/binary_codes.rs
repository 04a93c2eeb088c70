pub mod parallel;

use std::{fmt, ops::Div};

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::{
    bitmatrix::BitMatrix,
    error::ECCError,
    parity_check::derive_parity_check,
    rref::reduce_to_rref,
    standard_form::{build_generator, build_standard_form, is_identity},
    word::{mask, weight, BitBlock, MAX_CODE_LENGTH},
};

/// The minimum-weight words sharing one syndrome
#[derive(Clone, Debug)]
struct CosetLeaders {
    weight: u32,
    words: Vec<BitBlock>,
}

/// A binary linear code, given by its generator and parity check matrices
///
/// Construction enumerates all `2^n` words once, collecting the codewords and, for each syndrome, the
/// minimum-weight words of the corresponding coset. The code is immutable afterwards and can be shared freely
/// between threads.
#[derive(Clone, Debug)]
pub struct LinearCode {
    n_codeword_length: usize,
    k_codespace_dimension: usize,
    d_code_distance: Option<usize>,
    g_generator_matrix: BitMatrix,
    h_parity_check_matrix: BitMatrix,
    code_words: Vec<BitBlock>,
    coset_leaders: FxHashMap<BitBlock, CosetLeaders>,
}

/// Outcome of building a code from a spanning set
#[derive(Clone, Debug)]
pub enum Construction {
    Code(LinearCode),

    /// The spanning set has full rank, so the code is the whole space. There is no parity check and nothing to
    /// decode. Holds the generator, which is the identity.
    Degenerate(BitMatrix),
}

impl LinearCode {
    /// Builds the code from a generator matrix (`k` rows) and a parity check matrix (`n - k` rows) of the same
    /// width `n`.
    ///
    /// # Errors
    ///
    /// If `n` is 0 or larger than [`MAX_CODE_LENGTH`], if the matrices disagree on `n`, if a generator row fails
    /// the parity check, or if the parity check admits a number of codewords other than `2^k`
    pub fn new(generator: BitMatrix, parity_check: BitMatrix) -> Result<Self, ECCError> {
        let n = generator.cols();
        if n == 0 || n > MAX_CODE_LENGTH {
            return Err(ECCError::InvalidLength(n));
        }
        if parity_check.cols() != n {
            return Err(ECCError::DimensionMismatch {
                expected: n,
                found: parity_check.cols(),
            });
        }
        if let Some((generator_row, parity_row)) = generator.first_non_orthogonal(&parity_check) {
            return Err(ECCError::NotOrthogonal {
                generator_row,
                parity_row,
            });
        }
        let k = generator.rows();
        if k > n {
            return Err(ECCError::InconsistentCode {
                expected: n,
                found: k,
            });
        }

        let mut code_words = Vec::with_capacity(1 << k);
        let mut coset_leaders: FxHashMap<BitBlock, CosetLeaders> = FxHashMap::default();
        for word in 0..=mask(n) {
            let syndrome = parity_check.mul_word(word);
            if syndrome == 0 {
                code_words.push(word);
            }
            let w = weight(word);
            match coset_leaders.get_mut(&syndrome) {
                Some(leaders) if w < leaders.weight => {
                    leaders.weight = w;
                    leaders.words.clear();
                    leaders.words.push(word);
                }
                Some(leaders) if w == leaders.weight => leaders.words.push(word),
                Some(_) => {}
                None => {
                    coset_leaders.insert(
                        syndrome,
                        CosetLeaders {
                            weight: w,
                            words: vec![word],
                        },
                    );
                }
            }
        }

        if code_words.len() != 1 << k {
            return Err(ECCError::InconsistentCode {
                expected: 1 << k,
                found: code_words.len(),
            });
        }

        let d_code_distance = code_words.iter().skip(1).map(|&c| weight(c) as usize).min();
        debug!(
            "[{}, {}, {:?}] code with {} cosets",
            n,
            k,
            d_code_distance,
            coset_leaders.len()
        );

        Ok(LinearCode {
            n_codeword_length: n,
            k_codespace_dimension: k,
            d_code_distance,
            g_generator_matrix: generator,
            h_parity_check_matrix: parity_check,
            code_words,
            coset_leaders,
        })
    }

    /// Runs the whole pipeline on a spanning set of codewords, one per row of `subset`.
    ///
    /// The subset is row reduced, its nonzero rows become the generator, and the parity check is derived from the
    /// systematic form of the generator.
    ///
    /// # Errors
    ///
    /// If `subset` has no rows or zero columns
    pub fn from_spanning_set(subset: &BitMatrix) -> Result<Construction, ECCError> {
        if subset.cols() == 0 {
            return Err(ECCError::InvalidLength(0));
        }
        let rref = reduce_to_rref(subset)?;
        let generator = build_generator(&rref);
        if is_identity(&generator) {
            debug!("generator is I{}", generator.cols());
            return Ok(Construction::Degenerate(generator));
        }
        if generator.rows() == 0 {
            warn!("spanning set has rank 0, the code only contains the zero word");
        }
        let standard_form = build_standard_form(&generator)?;
        let parity_check = derive_parity_check(
            &standard_form.systematic,
            &rref,
            &standard_form.permutation,
        )?;
        LinearCode::new(generator, parity_check).map(Construction::Code)
    }

    /// Encodes a `k`-bit message as the sum of the generator rows selected by its bits.
    ///
    /// Bit `i` of `message` selects generator row `k - 1 - i`, so the first generator row goes with the most
    /// significant message bit.
    ///
    /// # Errors
    ///
    /// If `message` does not fit in `k` bits
    pub fn encode(&self, message: BitBlock) -> Result<BitBlock, ECCError> {
        let k = self.k_codespace_dimension;
        if message >= 1 << k {
            return Err(ECCError::MessageOutOfRange { message, k });
        }
        Ok((0..k)
            .filter(|&i| (message >> i) & 1 == 1)
            .fold(0, |word, i| word ^ self.g_generator_matrix.row(k - 1 - i)))
    }

    /// Decodes a received word to a nearest codeword.
    ///
    /// Among the codewords at minimum distance from `received`, the smallest wins. This is the codeword the
    /// exhaustive coset scan of [`LinearCode::decode_exhaustive`] picks, found here through the syndrome table.
    ///
    /// # Errors
    ///
    /// If `received` does not fit in `n` coordinates
    pub fn decode(&self, received: BitBlock) -> Result<BitBlock, ECCError> {
        self.check_word(received)?;
        let syndrome = self.syndrome(received);
        match self.coset_leaders.get(&syndrome) {
            Some(leaders) => Ok(leaders
                .words
                .iter()
                .map(|&e| received ^ e)
                .min()
                .unwrap_or(received)),
            None => self.decode_exhaustive(received),
        }
    }

    /// Decodes by scanning the coset `received + c` for every codeword `c` in ascending order, and subtracting
    /// the first element of least weight.
    ///
    /// # Errors
    ///
    /// If `received` does not fit in `n` coordinates
    pub fn decode_exhaustive(&self, received: BitBlock) -> Result<BitBlock, ECCError> {
        self.check_word(received)?;
        let mut error_word = received;
        let mut least_weight = u32::MAX;
        for &c in &self.code_words {
            let coset_word = received ^ c;
            let w = weight(coset_word);
            if w < least_weight {
                least_weight = w;
                error_word = coset_word;
            }
        }
        Ok(received ^ error_word)
    }

    /// Checks whether `word` is a codeword, i.e. fits in `n` coordinates and has zero syndrome
    pub fn is_code_word(&self, word: BitBlock) -> bool {
        word <= mask(self.n_codeword_length) && self.syndrome(word) == 0
    }

    /// The product of the parity check matrix with `word`, as an `(n - k)`-bit word
    #[inline]
    pub fn syndrome(&self, word: BitBlock) -> BitBlock {
        self.h_parity_check_matrix.mul_word(word)
    }

    fn check_word(&self, word: BitBlock) -> Result<(), ECCError> {
        if word > mask(self.n_codeword_length) {
            return Err(ECCError::WordOutOfRange {
                word,
                n: self.n_codeword_length,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn generator(&self) -> &BitMatrix {
        &self.g_generator_matrix
    }

    #[inline]
    pub fn parity_check(&self) -> &BitMatrix {
        &self.h_parity_check_matrix
    }

    /// All `2^k` codewords, in ascending order
    #[inline]
    pub fn code_words(&self) -> &[BitBlock] {
        &self.code_words
    }

    #[inline]
    pub fn code_length(&self) -> usize {
        self.n_codeword_length
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.k_codespace_dimension
    }

    /// The least weight of a nonzero codeword, or `None` if the code only holds the zero word
    #[inline]
    pub fn minimum_distance(&self) -> Option<usize> {
        self.d_code_distance
    }

    /// The number of bit errors per word that decoding is guaranteed to correct.
    ///
    /// For the zero code every error is corrected, so this is `n`.
    pub fn correctable_errors(&self) -> usize {
        match self.d_code_distance {
            Some(d) => (d - 1) / 2,
            None => self.n_codeword_length,
        }
    }

    /// the standard `[n,k,d]_q` notation, with `d = 0` for the zero code
    pub fn n_k_d_q(&self) -> [usize; 4] {
        [
            self.n_codeword_length,
            self.k_codespace_dimension,
            self.d_code_distance.unwrap_or(0),
            2,
        ]
    }

    /// Give the rate of information transfer.
    /// For a codespace of dimension `k` and codewords of length `n`
    /// the information transfer is slowed by a factor of `k/n`.
    /// This is compensated by the benefit of being able to detect and correct errors.
    pub fn rate<T: From<u32> + Div<T, Output = T>>(&self) -> T {
        let [n, k, _, _] = self.n_k_d_q();
        let n_t: T = (n as u32).into();
        let k_t: T = (k as u32).into();
        k_t / n_t
    }
}

impl fmt::Display for LinearCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [n, k, d, _] = self.n_k_d_q();
        write!(f, "[{}, {}, {}] binary linear code", n, k, d)
    }
}
