//! Walks through the `fixmat` API on statically sized buffers, logging every step.
//!
//! Run with `RUST_LOG=debug` (or in a debug build) to see the intermediate matrices. The
//! `FIXMAT_DISPLAY_*` variables control how they are printed.

use fixmat::{
    add, angle_between, apply_binary, apply_unary, format_dimensions, multiply, product_len,
    squared_distance, subsample, DisplayStyle, Element, MatrixView,
};

const ROWS: usize = 2;
const COLUMNS: usize = 2;

fn dump<T: Element>(name: &str, view: &MatrixView<'_, T>, style: DisplayStyle) {
    log::debug!("{name} ({}):\n{}", format_dimensions(view), view.styled(style));
}

fn main() -> anyhow::Result<()> {
    fixmat::init_logger!();

    let style = DisplayStyle::from_env()?;

    // A = [1, 2; 3, 4]
    let mut a_storage = [1.0f32, 3.0, 2.0, 4.0];
    let mut b_storage = [0.0f32; ROWS * COLUMNS];
    let mut ones_storage = [1.0f32; ROWS * COLUMNS];

    let mut a = MatrixView::new(ROWS, COLUMNS, &mut a_storage)?;
    let mut b = MatrixView::new(ROWS, COLUMNS, &mut b_storage)?;
    let ones = MatrixView::new(ROWS, COLUMNS, &mut ones_storage)?;
    dump("A", &a, style);

    // A = A + 1, once element-wise with a closure and once with a second matrix.
    apply_unary(&mut a, |v| v + 1.0)?;
    dump("A + 1", &a, style);
    apply_binary(&mut a, &ones, add)?;
    dump("A + 2", &a, style);

    // B = A * A
    if let Some(len) = product_len(&a, &a) {
        log::debug!("product has {len} elements");
    }
    multiply(&mut b, &a, &a)?;
    dump("A * A", &b, style);

    // Reinterpret B as a column vector and pick out its diagonal.
    b.resize(ROWS * COLUMNS, 1)?;
    let mut diag_storage = [0.0f32; ROWS];
    let mut diag = MatrixView::new(ROWS, 1, &mut diag_storage)?;
    let indices = [b.linear_index(0, 0), b.linear_index(3, 0)];
    subsample(&mut diag, &b, &indices)?;
    dump("diag(A * A)", &diag, style);

    let angle = angle_between(diag[(0, 0)], 0.0, diag[(0, 0)], diag[(1, 0)]);
    let dist = squared_distance(0.0, 0.0, diag[(0, 0)], diag[(1, 0)]);
    log::info!("diagonal as a 2D point: angle to X axis {angle:.4} rad, squared norm {dist}");

    print!("{b:#}");
    Ok(())
}
