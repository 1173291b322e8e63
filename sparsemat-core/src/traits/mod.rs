//! Abstract interfaces for the sparse matrix engine
//!
//! The element trait constrains what can be stored; the progress trait is
//! the observer seam for long-running multiplication.

pub mod element;
pub mod progress;

pub use element::MatrixElement;
pub use progress::{NoProgress, ProgressObserver};
