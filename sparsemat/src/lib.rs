//! sparsemat - sparse integer matrices on disk and on the command line
//!
//! This library wraps the `sparsemat-core` engine with file adapters, an
//! optional JSON export, a tracing-based progress observer and the
//! interactive operation prompt.
//!
//! ## Architecture
//!
//! - **sparsemat-core**: the engine, its errors and the pure text codec (no I/O)
//! - **sparsemat**: file I/O, logging, configuration and user interaction
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sparsemat::{IoConfig, MatrixFile};
//!
//! fn example() -> sparsemat::Result<()> {
//!     let config = IoConfig::default().with_bounds_check(true);
//!     let a = MatrixFile::read_matrix_with_config::<i64, _>("a.txt", &config)?;
//!     let b = MatrixFile::read_matrix::<i64, _>("b.txt")?;
//!
//!     let product = a.multiply(&b)?;
//!     MatrixFile::write_matrix("product.txt", &product)?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use sparsemat_core::{
    // Engine
    ColumnIndex, Operation, SparseMatrix, UnknownOperation,
    // Traits
    MatrixElement, NoProgress, ProgressObserver,
    // Format definitions
    parse_matrix_text, parse_matrix_text_with, Entry, MatrixData, ParseOptions,
    // Error handling
    FormatError, FormatErrorKind, SparseError,
};

pub mod config;
pub mod error;
pub mod file_io;
#[cfg(feature = "serde")]
pub mod json;
pub mod progress;
pub mod session;

pub use config::IoConfig;
pub use error::{Error, Result};
pub use file_io::MatrixFile;
pub use progress::LogProgress;
pub use session::Session;
