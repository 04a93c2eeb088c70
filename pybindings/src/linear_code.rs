use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use lincode::{BitMatrix, Construction, ECCError, LinearCode, NoiseModel, ParallelCodeOps};
use rand::{rngs::SmallRng, SeedableRng};

pub(crate) fn value_error(e: ECCError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Row reduces the words `rows` of length `code_length`, returning the rows of the reduced matrix
#[pyfunction]
pub fn reduce_to_rref(code_length: usize, rows: Vec<u64>) -> PyResult<Vec<u64>> {
    let matrix = BitMatrix::from_rows_truncated(code_length, rows).map_err(value_error)?;
    let rref = lincode::reduce_to_rref(&matrix).map_err(value_error)?;
    Ok(rref.row_words().to_vec())
}

#[pyclass(name = "LinearCode")]
#[derive(Clone)]
pub struct PyLinearCode {
    pub(crate) inner: LinearCode,
}

#[pymethods]
impl PyLinearCode {
    /// Builds the code spanned by the words `subset` of length `code_length`
    #[new]
    pub fn new(code_length: usize, subset: Vec<u64>) -> PyResult<Self> {
        let matrix = BitMatrix::from_rows_truncated(code_length, subset).map_err(value_error)?;
        match LinearCode::from_spanning_set(&matrix).map_err(value_error)? {
            Construction::Code(code) => Ok(code.into()),
            Construction::Degenerate(_) => Err(PyValueError::new_err(format!(
                "The matrix G is I{}, the code has no parity check",
                code_length
            ))),
        }
    }

    /// Encodes a message of `dimension` bits
    pub fn encode(&self, message: u64) -> PyResult<u64> {
        self.inner.encode(message).map_err(value_error)
    }

    /// Returns the codeword nearest to `received`
    pub fn decode(&self, received: u64) -> PyResult<u64> {
        self.inner.decode(received).map_err(value_error)
    }

    /// Decodes a list of words in parallel
    pub fn decode_many(&self, received: Vec<u64>) -> PyResult<Vec<u64>> {
        self.inner.par_decode(&received).map_err(value_error)
    }

    pub fn is_code_word(&self, word: u64) -> bool {
        self.inner.is_code_word(word)
    }

    pub fn syndrome(&self, word: u64) -> u64 {
        self.inner.syndrome(word)
    }

    /// Encodes `messages` and sends them through a channel flipping `errors_per_word` random bits of each word,
    /// or bursts of bits when `burst` is set
    #[pyo3(signature = (messages, errors_per_word=3, burst=false, seed=None))]
    pub fn transmit(
        &self,
        messages: Vec<u64>,
        errors_per_word: usize,
        burst: bool,
        seed: Option<u64>,
    ) -> PyResult<Vec<u64>> {
        let mut rng = if let Some(s) = seed {
            SmallRng::seed_from_u64(s)
        } else {
            SmallRng::from_os_rng()
        };
        let noise = if burst {
            NoiseModel::Burst
        } else {
            NoiseModel::Random { errors_per_word }
        };
        let mut words = self.inner.par_encode(&messages).map_err(value_error)?;
        noise.apply(&mut words, self.inner.code_length(), &mut rng);
        Ok(words)
    }

    /// All codewords, in increasing order
    #[getter]
    pub fn code_words(&self) -> Vec<u64> {
        self.inner.code_words().to_vec()
    }

    /// Rows of the generator matrix
    #[getter]
    pub fn generator(&self) -> Vec<u64> {
        self.inner.generator().row_words().to_vec()
    }

    /// Rows of the parity check matrix
    #[getter]
    pub fn parity_check(&self) -> Vec<u64> {
        self.inner.parity_check().row_words().to_vec()
    }

    #[getter]
    pub fn code_length(&self) -> usize {
        self.inner.code_length()
    }

    #[getter]
    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    /// The minimum distance, or `None` for the code holding only the zero word
    #[getter]
    pub fn minimum_distance(&self) -> Option<usize> {
        self.inner.minimum_distance()
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        let [n, k, d, _] = self.inner.n_k_d_q();
        format!("LinearCode(n={}, k={}, d={})", n, k, d)
    }

    pub fn __len__(&self) -> usize {
        self.inner.code_words().len()
    }

    pub fn __contains__(&self, word: u64) -> bool {
        self.inner.is_code_word(word)
    }
}

impl From<LinearCode> for PyLinearCode {
    fn from(inner: LinearCode) -> Self {
        PyLinearCode { inner }
    }
}
