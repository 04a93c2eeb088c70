// There seems to be some issues with the pyo3 bindings generation on methods returning
// a `PyResult<T>`.
#![allow(clippy::useless_conversion)]

pub mod linear_code;

use crate::linear_code::{reduce_to_rref, PyLinearCode};
use pyo3::prelude::*;

#[pymodule]
fn lincode(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLinearCode>()?;
    m.add_function(wrap_pyfunction!(reduce_to_rref, m)?)?;
    Ok(())
}
