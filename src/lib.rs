//! Fixed-layout matrix arithmetic over caller-owned storage.
//!
//! # Motivation
//!
//! Real-time control code usually knows the size of every matrix it works with ahead of time,
//! and often runs in contexts where heap allocation is not allowed (or at least undesirable).
//! This library only does the bookkeeping: a [`MatrixView`] binds a row and column count to a
//! slice the caller allocated (typically a `static` or stack array), and the free functions in
//! this crate operate on those views in place.
//!
//! ```
//! # use fixmat::*;
//! // A = [1, 2; 3, 4]
//! let mut a = [1.0f32, 3.0, 2.0, 4.0]; // note the (column-major) element order
//! let mut b = [0.0; 4];
//! let mut a = MatrixView::new(2, 2, &mut a)?;
//! let mut b = MatrixView::new(2, 2, &mut b)?;
//!
//! apply_unary(&mut a, |v| v + 1.0)?; // A = A + 1
//! multiply(&mut b, &a, &a)?; // B = A * A
//!
//! assert_eq!(b[(0, 0)], 2.0 * 2.0 + 3.0 * 4.0);
//! # Ok::<(), fixmat::Error>(())
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Never allocate matrix storage. Views borrow their elements, and every operation writes its
//!   output into a view provided by the caller.
//! - Support only a single, column-major, unpadded data layout.
//! - Check shapes and storage sizes, returning an [`Error`] instead of touching memory that
//!   doesn't belong to a view.
//! - Only multiplication and element-wise operations are provided. Inverses, determinants and
//!   decompositions are out of scope.
//!
//! # Environment Variables
//!
//! [`DisplayStyle::from_env`] reads the following variables:
//!
//! * `FIXMAT_DISPLAY_WIDTH`: minimum width of each printed element (default: 10).
//! * `FIXMAT_DISPLAY_PRECISION`: number of decimal digits to print (default: 4).
//!
//! Nothing else in this crate looks at the environment.

use log::LevelFilter;

mod display;
mod error;
mod ops;
mod scalar;
mod traits;
mod view;

pub use display::*;
pub use error::*;
pub use ops::*;
pub use scalar::*;
pub use traits::*;
pub use view::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `fixmat` will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` can be used to override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
