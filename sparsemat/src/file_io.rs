//! File I/O for matrix text files
//!
//! This module reads and writes sparse matrices in the canonical text
//! format. Parsing itself lives in `sparsemat-core`; this layer adds file
//! handling, error context and logging.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use sparsemat_core::{MatrixElement, SparseMatrix};
use tracing::debug;

use crate::{Error, IoConfig, Result};

/// Entry point for loading and saving matrix text files
pub struct MatrixFile;

impl MatrixFile {
    /// Read a matrix file with the default configuration
    pub fn read_matrix<T, P>(path: P) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement,
        P: AsRef<Path>,
    {
        Self::read_matrix_with_config(path, &IoConfig::default())
    }

    /// Read a matrix file
    pub fn read_matrix_with_config<T, P>(path: P, config: &IoConfig) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
        let matrix = SparseMatrix::parse_with(&text, config.parse_options())
            .map_err(|e| Error::file_format(path, e))?;

        debug!(
            path = %path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Read matrix text from any reader
    pub fn read_from<T, R>(mut reader: R, config: &IoConfig) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement,
        R: Read,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(SparseMatrix::parse_with(&text, config.parse_options())?)
    }

    /// Write a matrix file with the default configuration
    pub fn write_matrix<T, P>(path: P, matrix: &SparseMatrix<T>) -> Result<()>
    where
        T: MatrixElement,
        P: AsRef<Path>,
    {
        Self::write_matrix_with_config(path, matrix, &IoConfig::default())
    }

    /// Write a matrix file, replacing any existing file
    pub fn write_matrix_with_config<T, P>(
        path: P,
        matrix: &SparseMatrix<T>,
        config: &IoConfig,
    ) -> Result<()>
    where
        T: MatrixElement,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        prepare_parent(path, config)?;

        let file = File::create(path).map_err(|e| Error::file(path, e))?;
        let mut writer = BufWriter::new(file);
        Self::write_to(&mut writer, matrix)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::file(path, e))?;

        debug!(
            path = %path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            "saved matrix"
        );
        Ok(())
    }

    /// Write the canonical text form followed by a newline
    pub fn write_to<T, W>(writer: &mut W, matrix: &SparseMatrix<T>) -> io::Result<()>
    where
        T: MatrixElement,
        W: Write + ?Sized,
    {
        writeln!(writer, "{matrix}")
    }
}

/// Create the parent directory of `path` when the config asks for it
pub(crate) fn prepare_parent(path: &Path, config: &IoConfig) -> Result<()> {
    if !config.create_dirs {
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::file(parent, e))?;
    }
    Ok(())
}
