//! Validation utilities
//!
//! Pure checks on operand shapes and on individual lines of matrix text.

pub mod bounds;
pub mod parsing;

pub use bounds::{entry_in_bounds, validate_inner_dimensions, validate_same_shape};
pub use parsing::{parse_entry, parse_header};
