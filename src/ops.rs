//! Matrix arithmetic over [`MatrixView`]s.
//!
//! All operations write into caller-provided views and never allocate. Shapes are validated
//! before anything is written, so a failed operation leaves every operand unchanged.

use crate::{traits::Number, Error, MatrixView, Result};

/// Computes the matrix product `a × b` and stores it in `result`.
///
/// `result` is zeroed and then accumulated into, so its previous contents are discarded. The
/// product is computed with the plain triple loop; it is meant for the small matrices found in
/// control loops, not for large problems where cache blocking matters.
///
/// Every operand is addressed through [`MatrixView::linear_index`], so output elements are
/// strided by `result.rows()` and the contraction runs over the shared dimension
/// `a.columns() == b.rows()`. (Older versions of this routine strided the output by
/// `a.rows()` and contracted over `b.rows()`. Both are equal to the correct values whenever the
/// shape checks pass, so results are unchanged.)
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `a.columns() != b.rows()`, or if `result` is not
/// `a.rows()` x `b.columns()`. `result` is not modified in that case.
///
/// # Examples
///
/// ```
/// # use fixmat::*;
/// // [[1, 2, 3],
/// //  [4, 5, 6]]
/// let mut a = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
/// // [[ 7,  8],
/// //  [ 9, 10],
/// //  [11, 12]]
/// let mut b = [7.0, 9.0, 11.0, 8.0, 10.0, 12.0];
/// let mut c = [0.0; 4];
///
/// let a = MatrixView::new(2, 3, &mut a)?;
/// let b = MatrixView::new(3, 2, &mut b)?;
/// let mut c = MatrixView::new(2, 2, &mut c)?;
/// multiply(&mut c, &a, &b)?;
///
/// assert_eq!(c.as_slice(), [58.0, 139.0, 64.0, 154.0]);
/// # Ok::<(), fixmat::Error>(())
/// ```
pub fn multiply<T: Number>(
    result: &mut MatrixView<'_, T>,
    a: &MatrixView<'_, T>,
    b: &MatrixView<'_, T>,
) -> Result<()> {
    if a.columns() != b.rows() {
        return Err(Error::DimensionMismatch {
            op: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }
    if result.shape() != (a.rows(), b.columns()) {
        return Err(Error::DimensionMismatch {
            op: "multiply",
            left: result.shape(),
            right: (a.rows(), b.columns()),
        });
    }

    result.fill(T::ZERO);

    let (lhs, rhs) = (a.as_slice(), b.as_slice());
    for i in 0..a.rows() {
        for j in 0..b.columns() {
            let out = result.linear_index(i, j);
            for k in 0..a.columns() {
                let product = lhs[a.linear_index(i, k)] * rhs[b.linear_index(k, j)];
                let values = result.as_mut_slice();
                values[out] = values[out] + product;
            }
        }
    }

    Ok(())
}

/// Returns the number of elements in the product `a × b`, which is `a.rows() * b.columns()`.
///
/// This can be used to size the storage for a [`multiply`] result. Returns [`None`] if the
/// element count overflows `usize`.
pub fn product_len<T>(a: &MatrixView<'_, T>, b: &MatrixView<'_, T>) -> Option<usize> {
    a.rows().checked_mul(b.columns())
}

/// Applies `f` to every element of `view`, in place.
///
/// Elements are visited in storage (column-major) order. This operation cannot fail; it returns
/// a [`Result`] like every other matrix operation so that calls can be chained with `?`.
///
/// # Examples
///
/// ```
/// # use fixmat::*;
/// let mut storage = [1.0f32, 4.0, 9.0, 16.0];
/// let mut mat = MatrixView::new(2, 2, &mut storage)?;
/// apply_unary(&mut mat, f32::sqrt)?;
/// assert_eq!(mat.as_slice(), [1.0, 2.0, 3.0, 4.0]);
/// # Ok::<(), fixmat::Error>(())
/// ```
pub fn apply_unary<T, F>(view: &mut MatrixView<'_, T>, mut f: F) -> Result<()>
where
    T: Copy,
    F: FnMut(T) -> T,
{
    for elem in view.as_mut_slice() {
        *elem = f(*elem);
    }
    Ok(())
}

/// Computes `a[i] = f(a[i], b[i])` for every element, storing the result in `a`.
///
/// This is how element-wise arithmetic is expressed: pass [`add`], [`subtract`],
/// [`multiply_scalars`] or [`divide`] (or any other closure) as `f`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `a` and `b` do not have the same number of rows and
/// columns. `a` is not modified in that case.
///
/// # Examples
///
/// ```
/// # use fixmat::*;
/// let mut a = [1.0, 2.0, 3.0, 4.0];
/// let mut b = [10.0, 20.0, 30.0, 40.0];
/// let mut a = MatrixView::new(2, 2, &mut a)?;
/// let b = MatrixView::new(2, 2, &mut b)?;
/// apply_binary(&mut a, &b, add)?;
/// assert_eq!(a.as_slice(), [11.0, 22.0, 33.0, 44.0]);
/// # Ok::<(), fixmat::Error>(())
/// ```
///
/// [`add`]: crate::add
/// [`subtract`]: crate::subtract
/// [`multiply_scalars`]: crate::multiply_scalars
/// [`divide`]: crate::divide
pub fn apply_binary<T, F>(
    a: &mut MatrixView<'_, T>,
    b: &MatrixView<'_, T>,
    mut f: F,
) -> Result<()>
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    if a.shape() != b.shape() {
        return Err(Error::DimensionMismatch {
            op: "apply_binary",
            left: a.shape(),
            right: b.shape(),
        });
    }

    for (lhs, &rhs) in a.as_mut_slice().iter_mut().zip(b.as_slice()) {
        *lhs = f(*lhs, rhs);
    }

    Ok(())
}

/// Gathers elements of `source` into `result`: `result[i] = source[indices[i]]`.
///
/// Both `result` and `source` are addressed by linear (storage order) offsets; use
/// [`MatrixView::linear_index`] to compute them from `(row, column)` positions.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if `indices.len()` differs from `result.numel()`.
/// - [`Error::IndexOutOfRange`] if any index is not less than `source.numel()`.
///
/// All indices are checked before `result` is written to.
///
/// # Examples
///
/// ```
/// # use fixmat::*;
/// let mut source = [10.0, 20.0, 30.0, 40.0, 50.0];
/// let mut result = [0.0; 3];
/// let source = MatrixView::new(5, 1, &mut source)?;
/// let mut result = MatrixView::new(1, 3, &mut result)?;
/// subsample(&mut result, &source, &[4, 0, 2])?;
/// assert_eq!(result.as_slice(), [50.0, 10.0, 30.0]);
/// # Ok::<(), fixmat::Error>(())
/// ```
pub fn subsample<T: Copy>(
    result: &mut MatrixView<'_, T>,
    source: &MatrixView<'_, T>,
    indices: &[usize],
) -> Result<()> {
    if result.numel() != indices.len() {
        return Err(Error::LengthMismatch {
            expected: result.numel(),
            got: indices.len(),
        });
    }
    if let Some(&index) = indices.iter().find(|&&index| index >= source.numel()) {
        return Err(Error::IndexOutOfRange {
            index,
            len: source.numel(),
        });
    }

    let values = source.as_slice();
    for (dest, &index) in result.as_mut_slice().iter_mut().zip(indices) {
        *dest = values[index];
    }

    Ok(())
}
