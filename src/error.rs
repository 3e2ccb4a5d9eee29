/// Errors returned by matrix construction and operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A row or column count of zero was given at construction, or `rows * columns` overflowed.
    #[error("invalid matrix dimensions {rows} x {columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    /// A resize would change the number of elements in the matrix.
    #[error("cannot resize matrix with {numel} elements to {rows} x {columns}")]
    ElementCountMismatch {
        numel: usize,
        rows: usize,
        columns: usize,
    },

    /// The operand shapes are incompatible for `op`.
    ///
    /// `left` and `right` are the `(rows, columns)` shapes that failed to line up.
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// The number of gather indices does not match the destination size.
    #[error("length mismatch: destination holds {expected} elements, got {got} indices")]
    LengthMismatch { expected: usize, got: usize },

    /// The caller-supplied storage is shorter than `rows * columns`.
    #[error("storage of length {len} is too small for {required} elements")]
    BufferTooSmall { required: usize, len: usize },

    /// A linear (storage order) index lies outside of the matrix.
    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// A `(row, column)` position lies outside of the matrix.
    #[error("position ({row}, {column}) out of range for {rows} x {columns} matrix")]
    PositionOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// An environment variable holds a value that could not be parsed.
    #[error("invalid value set for `{var}` variable: '{value}'")]
    InvalidConfig { var: &'static str, value: String },

    /// A byte buffer could not be reinterpreted as matrix elements.
    #[error("cannot reinterpret byte buffer: {0}")]
    Cast(bytemuck::PodCastError),
}

/// Convenience alias used throughout `fixmat`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
