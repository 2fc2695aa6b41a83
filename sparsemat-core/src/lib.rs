#![cfg_attr(not(test), no_std)]

//! sparsemat-core - Sparse Integer Matrix Core
//!
//! This crate provides the sparse matrix data model, its line-oriented text
//! format and the arithmetic engine. It performs no I/O: parsing works on
//! `&str` and serialization writes into any [`core::fmt::Write`].
//!
//! ```
//! use sparsemat_core::{add, multiply, parse_matrix, Matrix, Serialized};
//!
//! let a: Matrix = parse_matrix("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)").unwrap();
//! let b: Matrix = parse_matrix("rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)").unwrap();
//!
//! let sum = add(&a, &b).unwrap();
//! assert_eq!(sum.to_text(), "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)");
//!
//! let product = multiply(&a, &b).unwrap();
//! assert_eq!(product.get(0, 1), 4);
//! ```

extern crate alloc;

pub mod arithmetic;
pub mod error;
pub mod format;
pub mod store;
pub mod traits;
pub mod validation;

pub use arithmetic::{add, combine, multiply, negate, subtract, BinaryOp};
pub use error::{MatrixError, Operation, Result};
pub use format::{parse_matrix, write_matrix, Serialized};
pub use store::{Coord, Entry, Matrix, Shape};
pub use traits::{MatrixElement, SparseMatrix, WideInteger};
