//! Validation utilities for matrix shapes and the text format
//!
//! Pure functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_coordinate, check_inner_dimensions, check_same_shape};
pub use parsing::{parse_entry_line, parse_header_line};
