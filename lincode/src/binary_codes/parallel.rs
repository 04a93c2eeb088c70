use crate::{binary_codes::LinearCode, error::ECCError, word::BitBlock};

use rayon::prelude::*;

/// Batch encoding and decoding, spread over the rayon thread pool
///
/// Every word is handled independently against the shared, read-only code.
pub trait ParallelCodeOps {
    fn par_encode(&self, messages: &[BitBlock]) -> Result<Vec<BitBlock>, ECCError>;
    fn par_decode(&self, received: &[BitBlock]) -> Result<Vec<BitBlock>, ECCError>;
}

impl ParallelCodeOps for LinearCode {
    fn par_encode(&self, messages: &[BitBlock]) -> Result<Vec<BitBlock>, ECCError> {
        messages.par_iter().map(|&m| self.encode(m)).collect()
    }

    fn par_decode(&self, received: &[BitBlock]) -> Result<Vec<BitBlock>, ECCError> {
        received.par_iter().map(|&w| self.decode(w)).collect()
    }
}
