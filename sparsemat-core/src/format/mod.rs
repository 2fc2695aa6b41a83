//! Line-oriented text format for sparse matrices
//!
//! ```text
//! rows=2
//! cols=2
//! (0, 0, 1)
//! (1, 1, 2)
//! ```
//!
//! Parsing is strict and all-or-nothing. Serialization emits entries in
//! row-major order so output is reproducible.

pub mod constants;
pub mod parser;
pub mod writer;

pub use parser::parse_matrix;
pub use writer::{write_matrix, Serialized};
