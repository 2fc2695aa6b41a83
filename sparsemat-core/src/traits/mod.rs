//! Abstract interfaces for sparse matrices and their element types

pub mod element;
pub mod matrix;

pub use element::{MatrixElement, WideInteger};
pub use matrix::SparseMatrix;
