//! Shape and coordinate validation

use crate::error::{MatrixError, Operation, Result};
use crate::store::Shape;

/// Validate that (row, col) lies inside `shape`
pub const fn check_coordinate(shape: Shape, row: usize, col: usize) -> Result<()> {
    if !shape.contains(row, col) {
        return Err(MatrixError::IndexOutOfBounds { row, col, shape });
    }
    Ok(())
}

/// Validate that two operands have identical shapes (addition, subtraction)
pub fn check_same_shape(op: Operation, left: Shape, right: Shape) -> Result<()> {
    if left != right {
        return Err(MatrixError::DimensionMismatch { op, left, right });
    }
    Ok(())
}

/// Validate `left.cols == right.rows` and return the product shape
pub const fn check_inner_dimensions(left: Shape, right: Shape) -> Result<Shape> {
    if left.cols != right.rows {
        return Err(MatrixError::DimensionIncompatible { left, right });
    }
    Ok(Shape::new(left.rows, right.cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_coordinate() {
        let shape = Shape::new(2, 3);
        assert_eq!(check_coordinate(shape, 0, 0), Ok(()));
        assert_eq!(check_coordinate(shape, 1, 2), Ok(()));
        assert_eq!(
            check_coordinate(shape, 2, 0),
            Err(MatrixError::IndexOutOfBounds { row: 2, col: 0, shape })
        );
        assert!(check_coordinate(shape, 0, 3).is_err());

        // Nothing fits in an empty shape
        assert!(check_coordinate(Shape::new(0, 0), 0, 0).is_err());
    }

    #[test]
    fn test_check_same_shape() {
        let a = Shape::new(2, 2);
        assert_eq!(check_same_shape(Operation::Addition, a, a), Ok(()));
        assert_eq!(
            check_same_shape(Operation::Subtraction, a, Shape::new(2, 3)),
            Err(MatrixError::DimensionMismatch {
                op: Operation::Subtraction,
                left: a,
                right: Shape::new(2, 3),
            })
        );
    }

    #[test]
    fn test_check_inner_dimensions() {
        assert_eq!(
            check_inner_dimensions(Shape::new(2, 3), Shape::new(3, 4)),
            Ok(Shape::new(2, 4))
        );
        assert!(check_inner_dimensions(Shape::new(2, 3), Shape::new(2, 3)).is_err());
    }
}
