#![no_std]

//! sparsemat core - sparse integer matrix engine
//!
//! This crate provides the sparse matrix data structure, its arithmetic,
//! and the pure text format definitions used by the `sparsemat` crate.
//! Nothing in here performs I/O.

extern crate alloc;

pub mod column_index;
pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use column_index::ColumnIndex;
pub use error::*;
pub use format::{parse_matrix_text, parse_matrix_text_with, Entry, MatrixData, ParseOptions};
pub use matrix::SparseMatrix;
pub use ops::{Operation, UnknownOperation};
pub use traits::*;
