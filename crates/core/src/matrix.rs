use std::ops::{Index, IndexMut};

/// Square matrix stored as one contiguous row-major buffer.
///
/// Cell `(row, col)` lives at `cells[row * size + col]`. All three matrices
/// of a graph model (distances, predecessor sets, initial adjacency) use this
/// layout so a full row is a single slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> DenseMatrix<T> {
    /// Creates a `size × size` matrix with every cell set to `fill`.
    ///
    /// # Panics
    /// Panics if `size * size` overflows. `GraphModel::from_edges` caps `size`
    /// at `MAX_VERTICES` before calling this.
    pub fn new(size: usize, fill: T) -> Self {
        Self {
            size,
            cells: vec![fill; size * size],
        }
    }
}

impl<T> DenseMatrix<T> {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bounds-checked lookup.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, an empty matrix simply has no rows
        self.cells.chunks(self.size.max(1))
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.size, "column {} out of bounds", col);
        &self.cells[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.size, "column {} out of bounds", col);
        &mut self.cells[row * self.size + col]
    }
}
