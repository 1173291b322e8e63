//! JSON export of sparse matrices
//!
//! The JSON form is the serialized [`MatrixData`]: `rows`, `cols` and a
//! row-major `entries` array of `{row, col, value}` objects.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sparsemat_core::{MatrixData, MatrixElement, SparseMatrix};
use tracing::debug;

use crate::file_io::prepare_parent;
use crate::{Error, IoConfig, Result};

/// Encode a matrix as pretty-printed JSON
pub fn to_json<T>(matrix: &SparseMatrix<T>) -> Result<String>
where
    T: MatrixElement + Serialize,
{
    Ok(serde_json::to_string_pretty(&matrix.to_data())?)
}

/// Decode a matrix from JSON
///
/// Entries go through `set_element`, so zeros in the input are dropped.
pub fn from_json<T>(json: &str) -> Result<SparseMatrix<T>>
where
    T: MatrixElement + DeserializeOwned,
{
    let data: MatrixData<T> = serde_json::from_str(json)?;
    Ok(SparseMatrix::from(data))
}

/// Write a matrix as a JSON file
pub fn write_json<T, P>(path: P, matrix: &SparseMatrix<T>, config: &IoConfig) -> Result<()>
where
    T: MatrixElement + Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    prepare_parent(path, config)?;

    let json = serde_json::to_vec_pretty(&matrix.to_data())?;
    fs::write(path, json).map_err(|e| Error::file(path, e))?;

    debug!(path = %path.display(), nnz = matrix.nnz(), "saved matrix as JSON");
    Ok(())
}
