//! `lincode` builds a binary linear code from any spanning set of codewords and uses it to encode, check and decode
//! words. Some features include:
//! - Gauss-Jordan reduction of a spanning set to reduced row echelon form
//! - a column permutation bringing the generator into systematic form `(I_k | X)`
//! - the parity check matrix of the code in its original coordinates
//! - encoding of messages, and nearest-codeword decoding with a coset leader table
//! - noisy channels and a symbol alphabet for simulating transmissions
//!
//! Codewords of length `n` are stored in a single [`BitBlock`], with coordinate `0` in the most significant of the
//! `n` low bits. The two main data structures provided by this crate are:
//! - [`BitMatrix`]: a matrix whose rows are words of a fixed length, with the row operations needed for elimination
//! - [`LinearCode`]: a code with its generator, parity check, codeword list and decoding tables

#![allow(
    clippy::needless_range_loop,
    clippy::suspicious_arithmetic_impl,
    clippy::uninlined_format_args,
    clippy::bool_assert_comparison,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::bool_to_int_with_if
)]
pub mod alphabet;
pub mod binary_codes;
pub mod bitmatrix;
pub mod channel;
pub mod error;
pub mod input;
pub mod parity_check;
pub mod permutation;
pub mod rref;
pub mod standard_form;
pub mod word;

pub use alphabet::AlphabetMap;
pub use binary_codes::{parallel::ParallelCodeOps, Construction, LinearCode};
pub use bitmatrix::{BitMatrix, RowOps};
pub use channel::NoiseModel;
pub use error::ECCError;
pub use input::SpanningSet;
pub use parity_check::derive_parity_check;
pub use permutation::Permutation;
pub use rref::reduce_to_rref;
pub use standard_form::{build_generator, build_standard_form, find_permutation, is_identity, StandardForm};
pub use word::{BitBlock, Bits, MAX_CODE_LENGTH};
