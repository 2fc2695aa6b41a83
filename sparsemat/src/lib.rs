//! sparsemat - Sparse Integer Matrix Files and Arithmetic
//!
//! This library loads sparse matrices from their text format, combines them
//! and writes results back to disk.
//!
//! ## Architecture
//!
//! - **sparsemat-core**: data model, text codec and arithmetic (no I/O)
//! - **sparsemat**: file I/O, session configuration and the interactive shell
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sparsemat::{load_matrix, multiply, save_matrix, Matrix};
//!
//! fn example() -> sparsemat::Result<()> {
//!     let a: Matrix = load_matrix("a.txt")?;
//!     let b: Matrix = load_matrix("b.txt")?;
//!     let product = multiply(&a, &b)?;
//!     save_matrix(&product, "product.txt")?;
//!     Ok(())
//! }
//! ```

// Re-export the core data model and arithmetic
pub use sparsemat_core::{
    // Data model
    Coord, Entry, Matrix, Shape,
    // Traits
    MatrixElement, Serialized, SparseMatrix,
    // Arithmetic
    add, combine, multiply, negate, subtract, BinaryOp, Operation,
    // Format
    parse_matrix, write_matrix,
    // Core errors
    MatrixError,
};

pub mod config;
pub mod error;
pub mod file_io;
pub mod shell;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use file_io::{load_matrix, save_matrix};
pub use shell::{MenuChoice, Session};
