//! Coordinate-keyed sparse store
//!
//! A [`Matrix`] keeps only its non-zero entries in a hash map keyed by
//! [`Coord`]. Writing zero removes the key, so memory tracks the non-zero
//! count rather than `rows * cols`.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::Result;
use crate::traits::{MatrixElement, SparseMatrix};
use crate::validation::check_coordinate;

/// Matrix dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether (row, col) addresses a cell of this shape
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Composite (row, col) key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A single non-zero entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

/// Sparse matrix storing only non-zero values
#[derive(Debug, Clone)]
pub struct Matrix<T: MatrixElement = i64> {
    shape: Shape,
    elements: HashMap<Coord, T>,
}

impl<T: MatrixElement> Matrix<T> {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            elements: HashMap::new(),
        }
    }

    /// Build a matrix from (row, col, value) triples
    ///
    /// Triples are applied in order through [`Matrix::set`], so zeros are
    /// dropped and a repeated coordinate keeps its last value.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in entries {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn nrows(&self) -> usize {
        self.shape.rows
    }

    pub fn ncols(&self) -> usize {
        self.shape.cols
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Value at (row, col), or zero when nothing is stored there
    ///
    /// Out-of-range coordinates read as zero.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.elements
            .get(&Coord::new(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Store `value` at (row, col); a zero value removes the entry
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_coordinate(self.shape, row, col)?;
        let coord = Coord::new(row, col);
        if value.is_zero() {
            self.elements.remove(&coord);
        } else {
            self.elements.insert(coord, value);
        }
        Ok(())
    }

    /// Iterate stored entries in hash order
    pub fn entries(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        self.elements.iter().map(|(coord, &value)| Entry {
            row: coord.row,
            col: coord.col,
            value,
        })
    }

    /// Stored entries in row-major order
    ///
    /// This is the order used for serialization.
    pub fn sorted_entries(&self) -> Vec<Entry<T>> {
        let mut entries: Vec<Entry<T>> = self.entries().collect();
        entries.sort_unstable_by_key(|entry| (entry.row, entry.col));
        entries
    }

    /// Group entries by row: row -> [(col, value)]
    pub(crate) fn row_index(&self) -> HashMap<usize, Vec<(usize, T)>> {
        let mut index: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (coord, &value) in &self.elements {
            index.entry(coord.row).or_default().push((coord.col, value));
        }
        index
    }

    /// Insert without the bounds check; callers guarantee `coord` is in range
    pub(crate) fn insert_nonzero(&mut self, coord: Coord, value: T) {
        debug_assert!(self.shape.contains(coord.row, coord.col));
        if value.is_zero() {
            self.elements.remove(&coord);
        } else {
            self.elements.insert(coord, value);
        }
    }

    pub(crate) fn stored(&self, coord: &Coord) -> Option<T> {
        self.elements.get(coord).copied()
    }

    pub(crate) fn coords(&self) -> impl Iterator<Item = (&Coord, &T)> {
        self.elements.iter()
    }
}

impl<T: MatrixElement> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.elements == other.elements
    }
}

impl<T: MatrixElement> Eq for Matrix<T> {}

impl<T: MatrixElement> SparseMatrix for Matrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.stored(&Coord::new(row, col))
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.shape.rows, self.shape.cols)
    }

    fn nnz(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[test]
    fn test_set_and_get() {
        let mut m: Matrix = Matrix::new(3, 3);
        m.set(0, 1, 5).unwrap();
        m.set(2, 2, -7).unwrap();

        assert_eq!(m.get(0, 1), 5);
        assert_eq!(m.get(2, 2), -7);
        assert_eq!(m.get(1, 1), 0);
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut m: Matrix = Matrix::new(2, 2);
        m.set(1, 0, 9).unwrap();
        m.set(1, 0, 0).unwrap();

        assert_eq!(m.get(1, 0), 0);
        assert!(m.is_empty());
        assert_eq!(m.entries().count(), 0);

        // Zero on an absent key is a no-op
        m.set(0, 0, 0).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut m: Matrix = Matrix::new(2, 2);
        m.set(0, 0, 1).unwrap();
        m.set(0, 0, 4).unwrap();
        assert_eq!(m.get(0, 0), 4);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut m: Matrix = Matrix::new(2, 3);
        assert_eq!(
            m.set(2, 0, 1),
            Err(MatrixError::IndexOutOfBounds {
                row: 2,
                col: 0,
                shape: Shape::new(2, 3)
            })
        );
        assert!(m.set(0, 3, 1).is_err());
        assert!(m.is_empty());

        // Reads outside the shape are zero, not errors
        assert_eq!(m.get(10, 10), 0);
    }

    #[test]
    fn test_sorted_entries_row_major() {
        let m: Matrix = Matrix::from_entries(3, 3, [(2, 0, 1), (0, 2, 2), (0, 1, 3), (1, 1, 4)])
            .unwrap();
        let coords: Vec<(usize, usize)> =
            m.sorted_entries().iter().map(|e| (e.row, e.col)).collect();
        assert_eq!(coords, vec![(0, 1), (0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_sparse_matrix_trait() {
        let m: Matrix<i32> = Matrix::from_entries(4, 5, [(1, 2, 3)]).unwrap();
        assert_eq!(m.dimensions(), (4, 5));
        assert_eq!(m.get_element(1, 2), Some(3));
        assert_eq!(m.get_element(0, 0), None);
        assert_eq!(SparseMatrix::nnz(&m), 1);
        assert!((m.density() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a: Matrix = Matrix::from_entries(2, 2, [(0, 0, 1), (1, 1, 2)]).unwrap();
        let b: Matrix = Matrix::from_entries(2, 2, [(1, 1, 2), (0, 0, 1)]).unwrap();
        let c: Matrix = Matrix::from_entries(2, 3, [(1, 1, 2), (0, 0, 1)]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape_and_entry() {
        let json = serde_json::to_string(&Shape::new(2, 3)).unwrap();
        assert_eq!(json, r#"{"rows":2,"cols":3}"#);

        let entry: Entry<i64> = serde_json::from_str(r#"{"row":1,"col":0,"value":-5}"#).unwrap();
        assert_eq!(entry, Entry { row: 1, col: 0, value: -5 });
    }
}
