//! Noisy channels flipping bits of transmitted words

use log::debug;
use rand::{seq::index::sample, Rng};

use crate::word::{mask, BitBlock};

/// How a channel corrupts the words passing through it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoiseModel {
    /// Flip `errors_per_word` uniformly random bits of every word. Two flips can land on the same bit and cancel,
    /// so a word receives at most `errors_per_word` errors.
    Random { errors_per_word: usize },

    /// Pick a random number of distinct words and flip one run of consecutive bits in each, of random length
    /// below half the code length.
    Burst,
}

impl NoiseModel {
    /// Corrupt `words` of `code_length` bits in place
    pub fn apply(&self, words: &mut [BitBlock], code_length: usize, rng: &mut impl Rng) {
        match *self {
            NoiseModel::Random { errors_per_word } => {
                random_noise(words, code_length, errors_per_word, rng)
            }
            NoiseModel::Burst => burst_noise(words, code_length, rng),
        }
    }
}

pub fn random_noise(
    words: &mut [BitBlock],
    code_length: usize,
    errors_per_word: usize,
    rng: &mut impl Rng,
) {
    if code_length == 0 {
        return;
    }
    for _ in 0..errors_per_word {
        for word in words.iter_mut() {
            *word ^= 1 << rng.random_range(0..code_length);
        }
    }
}

pub fn burst_noise(words: &mut [BitBlock], code_length: usize, rng: &mut impl Rng) {
    if words.is_empty() || code_length < 2 {
        return;
    }
    let num_bursts = rng.random_range(0..words.len());
    let positions = sample(rng, words.len(), num_bursts);
    debug!("placing {} bursts", num_bursts);

    for position in positions.iter() {
        let burst_size = rng.random_range(0..code_length / 2);
        let burst_start = rng.random_range(0..code_length - burst_size);
        words[position] ^= mask(burst_size) << burst_start;
    }
}
