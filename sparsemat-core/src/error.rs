//! Error types for sparse matrix operations

use crate::store::Shape;

/// Arithmetic operation named in dimension errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur while building, parsing or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Malformed line in the text representation (1-based line number)
    #[error("Input file has wrong format (line {line})")]
    WrongFormat { line: usize },
    /// Coordinate outside the declared shape
    #[error("Index ({row}, {col}) out of bounds for {shape} matrix")]
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },
    /// Addition/subtraction over matrices of different shape
    #[error("Matrix dimensions must be the same for {op}")]
    DimensionMismatch {
        op: Operation,
        left: Shape,
        right: Shape,
    },
    /// Multiplication where the inner dimensions disagree
    #[error("Matrix dimensions are not suitable for multiplication")]
    DimensionIncompatible { left: Shape, right: Shape },
    /// Integer overflow while computing the entry at (row, col)
    #[error("Value overflow at ({row}, {col}) during {op}")]
    ValueOverflow { op: Operation, row: usize, col: usize },
}

impl MatrixError {
    /// Source line for format errors, if known
    pub fn line(&self) -> Option<usize> {
        match self {
            MatrixError::WrongFormat { line } => Some(*line),
            _ => None,
        }
    }
}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
