//! Addition, subtraction and multiplication over sparse matrices
//!
//! Every operation is a pure function of its operands and returns a fresh
//! [`Matrix`]. Overflow in any intermediate step fails with
//! [`MatrixError::ValueOverflow`].

use hashbrown::HashMap;

use crate::error::{MatrixError, Operation, Result};
use crate::store::{Coord, Matrix};
use crate::traits::{MatrixElement, WideInteger};
use crate::validation::{check_inner_dimensions, check_same_shape};

/// Elementwise operator shared by addition and subtraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
}

impl BinaryOp {
    pub const fn operation(self) -> Operation {
        match self {
            BinaryOp::Add => Operation::Addition,
            BinaryOp::Subtract => Operation::Subtraction,
        }
    }

    fn apply<T: MatrixElement>(self, lhs: T, rhs: T) -> Option<T> {
        match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Subtract => lhs.checked_sub(rhs),
        }
    }
}

/// Combine two equally shaped matrices elementwise
///
/// Visits the union of both key sets exactly once: every key of `lhs`, then
/// the keys of `rhs` that `lhs` does not hold. A key only in `rhs` is
/// combined against zero, so subtraction contributes `-rhs`.
pub fn combine<T: MatrixElement>(
    lhs: &Matrix<T>,
    rhs: &Matrix<T>,
    op: BinaryOp,
) -> Result<Matrix<T>> {
    check_same_shape(op.operation(), lhs.shape(), rhs.shape())?;

    let overflow = |coord: &Coord| MatrixError::ValueOverflow {
        op: op.operation(),
        row: coord.row,
        col: coord.col,
    };

    let mut result = Matrix::new(lhs.nrows(), lhs.ncols());
    for (coord, &a) in lhs.coords() {
        let b = rhs.stored(coord).unwrap_or_else(T::zero);
        let value = op.apply(a, b).ok_or_else(|| overflow(coord))?;
        result.insert_nonzero(*coord, value);
    }
    for (coord, &b) in rhs.coords() {
        if lhs.stored(coord).is_some() {
            continue;
        }
        let value = op.apply(T::zero(), b).ok_or_else(|| overflow(coord))?;
        result.insert_nonzero(*coord, value);
    }

    Ok(result)
}

/// `lhs + rhs`; shapes must match
pub fn add<T: MatrixElement>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
    combine(lhs, rhs, BinaryOp::Add)
}

/// `lhs - rhs`; shapes must match
pub fn subtract<T: MatrixElement>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
    combine(lhs, rhs, BinaryOp::Subtract)
}

/// Elementwise negation
pub fn negate<T: MatrixElement>(matrix: &Matrix<T>) -> Result<Matrix<T>> {
    let mut result = Matrix::new(matrix.nrows(), matrix.ncols());
    for (coord, &value) in matrix.coords() {
        let negated = value.checked_neg().ok_or(MatrixError::ValueOverflow {
            op: Operation::Subtraction,
            row: coord.row,
            col: coord.col,
        })?;
        result.insert_nonzero(*coord, negated);
    }
    Ok(result)
}

/// Exact running sum of wide products
///
/// Wraps in the wide type and counts the wraps, so the represented value is
/// `sum + carry * 2^bits` regardless of the order terms arrive in.
#[derive(Debug, Clone, Copy)]
struct Accumulator<W> {
    sum: W,
    carry: i64,
}

impl<W: WideInteger> Accumulator<W> {
    fn new() -> Self {
        Self {
            sum: W::zero(),
            carry: 0,
        }
    }

    fn push(&mut self, term: W) {
        let (sum, wrapped) = self.sum.overflowing_add(term);
        if wrapped {
            self.carry += if term.is_negative() { -1 } else { 1 };
        }
        self.sum = sum;
    }

    /// The total, if it fits in `T`
    fn finish<T: MatrixElement<Wide = W>>(self) -> Option<T> {
        if self.carry != 0 {
            return None;
        }
        T::narrow(self.sum)
    }
}

/// Matrix product `lhs * rhs`; requires `lhs.ncols() == rhs.nrows()`
///
/// `rhs` is indexed by row once, so each non-zero `lhs[r, k]` only meets the
/// non-zero entries of row `k` in `rhs`. Cost is O(nnz(lhs) * avg row nnz of
/// rhs). Products are summed exactly in `T::Wide` and narrowed once per cell,
/// so overflow is reported only when a final value does not fit in `T`.
/// Sums that cancel to zero are not stored.
pub fn multiply<T: MatrixElement>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
    let shape = check_inner_dimensions(lhs.shape(), rhs.shape())?;
    let rhs_rows = rhs.row_index();

    let overflow = |target: Coord| MatrixError::ValueOverflow {
        op: Operation::Multiplication,
        row: target.row,
        col: target.col,
    };

    let mut sums: HashMap<Coord, Accumulator<T::Wide>> = HashMap::new();
    for (coord, &a) in lhs.coords() {
        let Some(row) = rhs_rows.get(&coord.col) else {
            continue;
        };
        for &(col, b) in row {
            let target = Coord::new(coord.row, col);
            let product = a.widening_mul(b).ok_or_else(|| overflow(target))?;
            sums.entry(target).or_insert_with(Accumulator::new).push(product);
        }
    }

    let mut result = Matrix::new(shape.rows, shape.cols);
    for (coord, sum) in sums {
        let value = sum.finish::<T>().ok_or_else(|| overflow(coord))?;
        result.insert_nonzero(coord, value);
    }
    Ok(result)
}
