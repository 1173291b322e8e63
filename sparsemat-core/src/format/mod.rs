//! Textual matrix format definitions
//!
//! This module defines the parsed matrix triple and the canonical text
//! codec. Loading and saving files is left to the `sparsemat` crate.

pub mod constants;
pub mod data;
pub mod text;

pub use constants::*;
pub use data::{Entry, MatrixData};
pub use text::{parse_matrix_text, parse_matrix_text_with, write_matrix_text, ParseOptions};
