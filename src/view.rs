use std::ops::{Index, IndexMut};

use crate::{Error, Result};

/// A column-major matrix view over caller-owned storage.
///
/// A [`MatrixView`] only stores the matrix dimensions and a mutable borrow of the element
/// storage. It never allocates, copies, or frees elements; the storage stays owned by the caller
/// and can be reused once the view is dropped.
///
/// # Construction
///
/// - [`MatrixView::new`] binds a view to a slice of elements, which must hold at least
///   `rows * columns` elements.
/// - [`MatrixView::from_bytes_mut`] reinterprets a raw, suitably aligned byte buffer as element
///   storage.
///
/// # Layout
///
/// Elements are stored in *column-major* order: the element at `(row, col)` lives at offset
/// `row + rows * col`, so consecutive elements walk down a column. Data given in row-major
/// notation has to be transposed when it is written to the storage:
///
/// ```
/// # use fixmat::*;
/// // [[1, 2],
/// //  [3, 4]]
/// let mut storage = [1.0, 3.0, 2.0, 4.0];
/// let mat = MatrixView::new(2, 2, &mut storage)?;
/// assert_eq!(mat[(0, 1)], 2.0);
/// assert_eq!(mat[(1, 0)], 3.0);
/// # Ok::<(), fixmat::Error>(())
/// ```
///
/// # Element Access
///
/// [`MatrixView`] implements [`Index`] and [`IndexMut`] for `(row, column)` tuples, with 0-based
/// indices. Indexing out of bounds will panic, just like it does for slices. [`MatrixView::get`]
/// and [`MatrixView::get_mut`] return [`Option`]s instead, and [`MatrixView::checked_index`]
/// returns an [`Error`].
pub struct MatrixView<'a, T = f32> {
    rows: usize,
    columns: usize,
    values: &'a mut [T],
}

impl<'a, T> MatrixView<'a, T> {
    /// Creates a `rows` x `columns` view over `storage`.
    ///
    /// The view covers the first `rows * columns` elements of `storage`; any remaining elements
    /// are left alone. No data is copied.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if `rows` or `columns` is zero, or if their product
    ///   overflows.
    /// - [`Error::BufferTooSmall`] if `storage` holds fewer than `rows * columns` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let mut storage = [0.0f32; 8];
    /// let mat = MatrixView::new(2, 3, &mut storage)?;
    /// assert_eq!(mat.numel(), 6);
    ///
    /// let mut storage = [0.0f32; 4];
    /// assert!(MatrixView::new(0, 3, &mut storage).is_err());
    /// assert!(MatrixView::new(2, 3, &mut storage).is_err());
    /// # Ok::<(), fixmat::Error>(())
    /// ```
    pub fn new(rows: usize, columns: usize, storage: &'a mut [T]) -> Result<Self> {
        let numel =
            element_count(rows, columns).ok_or(Error::InvalidDimensions { rows, columns })?;
        if storage.len() < numel {
            return Err(Error::BufferTooSmall {
                required: numel,
                len: storage.len(),
            });
        }

        Ok(Self {
            rows,
            columns,
            values: &mut storage[..numel],
        })
    }

    /// Creates a `rows` x `columns` view over a raw byte buffer.
    ///
    /// `bytes` must be aligned for `T` and its length must be a multiple of `size_of::<T>()`.
    /// This is useful when the storage is a statically allocated region that is not typed as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cast`] if `bytes` cannot be reinterpreted as a slice of `T`, and
    /// otherwise fails like [`MatrixView::new`].
    pub fn from_bytes_mut(rows: usize, columns: usize, bytes: &'a mut [u8]) -> Result<Self>
    where
        T: bytemuck::Pod,
    {
        let storage = bytemuck::try_cast_slice_mut(bytes).map_err(Error::Cast)?;
        Self::new(rows, columns, storage)
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the `(rows, columns)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns the number of elements, `rows * columns`.
    #[inline]
    pub fn numel(&self) -> usize {
        self.values.len()
    }

    /// Changes the number of rows and columns without touching the stored elements.
    ///
    /// The element count must stay the same. Since the storage is not reordered, every element
    /// keeps its linear offset; only its `(row, column)` position changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementCountMismatch`] if `rows * columns` differs from
    /// [`MatrixView::numel`]. The view is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let mut storage = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let mut mat = MatrixView::new(2, 3, &mut storage)?;
    /// mat.resize(3, 2)?;
    /// assert_eq!(mat.shape(), (3, 2));
    /// assert_eq!(mat[(2, 0)], 3.0);
    /// assert!(mat.resize(4, 2).is_err());
    /// # Ok::<(), fixmat::Error>(())
    /// ```
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<()> {
        if element_count(rows, columns) != Some(self.numel()) {
            return Err(Error::ElementCountMismatch {
                numel: self.numel(),
                rows,
                columns,
            });
        }

        self.rows = rows;
        self.columns = columns;
        Ok(())
    }

    /// Converts a `(row, col)` position into an offset into the storage.
    ///
    /// This is plain arithmetic (`row + rows * col`) and does not check whether the position is
    /// inside the matrix. Passing an out-of-range position yields an offset that refers to a
    /// different element, or to no element at all. Use [`MatrixView::checked_index`] when the
    /// position is not known to be valid.
    #[inline]
    pub fn linear_index(&self, row: usize, col: usize) -> usize {
        row + self.rows * col
    }

    /// Converts a `(row, col)` position into an offset into the storage, checking that the
    /// position is inside the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfRange`] if `row >= rows` or `col >= columns`.
    pub fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.columns {
            return Err(Error::PositionOutOfRange {
                row,
                column: col,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.linear_index(row, col))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        let index = self.checked_index(row, col).ok()?;
        self.values.get(index)
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        let index = self.checked_index(row, col).ok()?;
        self.values.get_mut(index)
    }

    /// Returns the elements in storage (column-major) order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &*self.values
    }

    /// Returns the elements in storage (column-major) order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.values
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Copy,
    {
        self.values.fill(value);
    }

    /// Borrows an identical [`MatrixView`] from `self` that may have a shorter lifetime.
    ///
    /// This is equivalent to the implicit "reborrowing" that happens on Rust references. Resizing
    /// the returned view does not affect `self`.
    #[inline]
    pub fn reborrow(&mut self) -> MatrixView<'_, T> {
        MatrixView {
            rows: self.rows,
            columns: self.columns,
            values: &mut *self.values,
        }
    }

    #[track_caller]
    fn index_or_panic(&self, row: usize, col: usize) -> usize {
        if row >= self.rows || col >= self.columns {
            panic!(
                "position ({row}, {col}) out of bounds for {} x {} matrix",
                self.rows, self.columns
            );
        }
        self.linear_index(row, col)
    }
}

/// Returns `rows * columns`, or [`None`] if either is zero or the product overflows.
fn element_count(rows: usize, columns: usize) -> Option<usize> {
    if rows == 0 || columns == 0 {
        return None;
    }
    rows.checked_mul(columns)
}

impl<T> Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.values[self.index_or_panic(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixView<'_, T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let index = self.index_or_panic(row, col);
        &mut self.values[index]
    }
}

// Views compare equal if they have the same shape and elements, regardless of the storage.
impl<T, U> PartialEq<MatrixView<'_, U>> for MatrixView<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &MatrixView<'_, U>) -> bool {
        self.shape() == other.shape() && self.as_slice() == other.as_slice()
    }
}
