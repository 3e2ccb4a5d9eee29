//! Text output of matrices, for debugging.
//!
//! None of the output here is meant to be parsed; the exact layout may change.

use std::{
    env::{self, VarError},
    fmt,
};

use itertools::Itertools;

use crate::{Error, MatrixView, Result};

/// Default column width of [`format_matrix`].
pub const DEFAULT_WIDTH: usize = 10;
/// Default number of decimal digits printed by [`format_matrix`].
pub const DEFAULT_PRECISION: usize = 4;

/// Spacing printed between the columns of a row.
const COLUMN_SEPARATOR: &str = "   ";

/// Controls how [`MatrixView`]s are printed by [`MatrixView::styled`].
///
/// The [`Default`] style right-aligns every element in a column of width [`DEFAULT_WIDTH`] and
/// prints [`DEFAULT_PRECISION`] decimal digits. This is also what the [`fmt::Display`] impl of
/// [`MatrixView`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayStyle {
    width: usize,
    precision: usize,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl DisplayStyle {
    /// Environment variable overriding the column width.
    pub const WIDTH_VAR: &'static str = "FIXMAT_DISPLAY_WIDTH";
    /// Environment variable overriding the number of decimal digits.
    pub const PRECISION_VAR: &'static str = "FIXMAT_DISPLAY_PRECISION";

    /// Sets the minimum width each element is padded to.
    pub fn width(self, width: usize) -> Self {
        Self { width, ..self }
    }

    /// Sets the number of decimal digits to print.
    pub fn precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }

    /// Creates the default style, overridden by the `FIXMAT_DISPLAY_WIDTH` and
    /// `FIXMAT_DISPLAY_PRECISION` environment variables if they are set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if a variable is set to something that isn't a
    /// non-negative integer.
    pub fn from_env() -> Result<Self> {
        let mut style = Self::default();
        if let Some(width) = read_var(Self::WIDTH_VAR)? {
            style.width = width;
        }
        if let Some(precision) = read_var(Self::PRECISION_VAR)? {
            style.precision = precision;
        }
        log::trace!("display style from environment: {style:?}");
        Ok(style)
    }
}

fn read_var(var: &'static str) -> Result<Option<usize>> {
    match env::var(var) {
        Ok(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidConfig { var, value: v }),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(s)) => Err(Error::InvalidConfig {
            var,
            value: s.to_string_lossy().into_owned(),
        }),
    }
}

/// A [`MatrixView`] paired with a [`DisplayStyle`], returned by [`MatrixView::styled`].
pub struct Styled<'v, 'a, T> {
    view: &'v MatrixView<'a, T>,
    style: DisplayStyle,
}

impl<'a, T> MatrixView<'a, T> {
    /// Returns a wrapper that prints `self` using `style`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let mut storage = [1.0, 3.0, 2.0, 4.0];
    /// let mat = MatrixView::new(2, 2, &mut storage)?;
    /// let style = DisplayStyle::default().width(4).precision(1);
    /// assert_eq!(mat.styled(style).to_string(), " 1.0    2.0\n 3.0    4.0\n");
    /// # Ok::<(), fixmat::Error>(())
    /// ```
    pub fn styled(&self, style: DisplayStyle) -> Styled<'_, 'a, T> {
        Styled { view: self, style }
    }
}

impl<T: fmt::Display> fmt::Display for Styled<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;
        let DisplayStyle { width, precision } = self.style;

        if f.alternate() {
            writeln!(f, "{}", format_dimensions(view))?;
        }
        for row in 0..view.rows() {
            let line = (0..view.columns()).format_with(COLUMN_SEPARATOR, |col, g| {
                g(&format_args!("{:>width$.precision$}", view[(row, col)]))
            });
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Prints the matrix row by row, with the [`Default`] [`DisplayStyle`].
///
/// The alternate flag (`{:#}`) additionally prints the dimensions in the first line.
impl<T: fmt::Display> fmt::Display for MatrixView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.styled(DisplayStyle::default()), f)
    }
}

impl<T: fmt::Debug> fmt::Debug for MatrixView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'v, 'a, T: fmt::Debug>(&'v MatrixView<'a, T>, usize);
        impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, '_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..self.0.columns() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..self.rows() {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

/// Formats the elements of `view` row by row, one row per line.
///
/// Each element is right-aligned to a width of 10 and printed with 4 decimal digits. Use
/// [`MatrixView::styled`] to print with a different [`DisplayStyle`].
///
/// # Examples
///
/// ```
/// # use fixmat::*;
/// let mut storage = [1.0, 3.0, 2.0, 4.0];
/// let mat = MatrixView::new(2, 2, &mut storage)?;
/// assert_eq!(
///     format_matrix(&mat),
///     "    1.0000       2.0000\n    3.0000       4.0000\n",
/// );
/// # Ok::<(), fixmat::Error>(())
/// ```
pub fn format_matrix<T: fmt::Display>(view: &MatrixView<'_, T>) -> String {
    view.to_string()
}

/// Formats the dimensions of `view` as `"<rows> x <columns>"`.
pub fn format_dimensions<T>(view: &MatrixView<'_, T>) -> String {
    format!("{} x {}", view.rows(), view.columns())
}
