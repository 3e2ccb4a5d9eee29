use std::f32::consts::FRAC_PI_2;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use fixmat::*;

const MAX_DIM: usize = 6;

fn random_dims(rng: &mut fastrand::Rng) -> (usize, usize) {
    (rng.usize(1..=MAX_DIM), rng.usize(1..=MAX_DIM))
}

fn random_fill(rng: &mut fastrand::Rng, storage: &mut [f32]) {
    for v in storage {
        *v = rng.f32() * 20.0 - 10.0;
    }
}

#[test]
fn construct_sets_numel() {
    let mut rng = fastrand::Rng::with_seed(1);
    let mut storage = [0.0f32; MAX_DIM * MAX_DIM];
    for _ in 0..100 {
        let (rows, columns) = random_dims(&mut rng);
        let mat = MatrixView::new(rows, columns, &mut storage).unwrap();
        assert_eq!(mat.shape(), (rows, columns));
        assert_eq!(mat.numel(), rows * columns);
    }

    for (rows, columns) in [(0, 0), (0, 1), (1, 0), (0, MAX_DIM)] {
        assert_eq!(
            MatrixView::new(rows, columns, &mut storage).err(),
            Some(Error::InvalidDimensions { rows, columns })
        );
    }
}

#[test]
fn construct_rejects_short_storage() {
    let mut storage = [0.0f32; 5];
    assert_eq!(
        MatrixView::new(2, 3, &mut storage).err(),
        Some(Error::BufferTooSmall {
            required: 6,
            len: 5
        })
    );
}

#[test]
fn resize_keeps_elements_in_place() {
    let mut rng = fastrand::Rng::with_seed(2);
    let mut storage = [0.0f32; 12];
    random_fill(&mut rng, &mut storage);
    let before = storage;

    let mut mat = MatrixView::new(3, 4, &mut storage).unwrap();
    for (rows, columns) in [(4, 3), (2, 6), (12, 1), (1, 12), (6, 2)] {
        mat.resize(rows, columns).unwrap();
        for col in 0..columns {
            for row in 0..rows {
                let index = mat.linear_index(row, col);
                assert_eq!(mat[(row, col)], before[index]);
            }
        }
    }

    assert!(mat.resize(5, 2).is_err());
    assert!(mat.resize(13, 1).is_err());
    assert_eq!(mat.shape(), (6, 2));
    assert_eq!(mat.as_slice(), before);
}

#[test]
fn multiply_known_product() {
    // [[1, 2, 3],
    //  [4, 5, 6]]
    let mut a = [1.0f32, 4.0, 2.0, 5.0, 3.0, 6.0];
    // [[ 7,  8],
    //  [ 9, 10],
    //  [11, 12]]
    let mut b = [7.0f32, 9.0, 11.0, 8.0, 10.0, 12.0];
    let mut c = [0.0f32; 4];

    let a = MatrixView::new(2, 3, &mut a).unwrap();
    let b = MatrixView::new(3, 2, &mut b).unwrap();
    let mut c = MatrixView::new(2, 2, &mut c).unwrap();
    multiply(&mut c, &a, &b).unwrap();

    assert_eq!(c[(0, 0)], 58.0);
    assert_eq!(c[(0, 1)], 64.0);
    assert_eq!(c[(1, 0)], 139.0);
    assert_eq!(c[(1, 1)], 154.0);
}

#[test]
fn multiply_matches_definition() {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..50 {
        let (m, n) = random_dims(&mut rng);
        let p = rng.usize(1..=MAX_DIM);

        let mut a = [0.0f32; MAX_DIM * MAX_DIM];
        let mut b = [0.0f32; MAX_DIM * MAX_DIM];
        let mut c = [f32::NAN; MAX_DIM * MAX_DIM];
        random_fill(&mut rng, &mut a);
        random_fill(&mut rng, &mut b);

        let a = MatrixView::new(m, n, &mut a).unwrap();
        let b = MatrixView::new(n, p, &mut b).unwrap();
        let mut c = MatrixView::new(m, p, &mut c).unwrap();
        assert_eq!(product_len(&a, &b), Some(c.numel()));
        multiply(&mut c, &a, &b).unwrap();

        for i in 0..m {
            for j in 0..p {
                let expected = (0..n).map(|k| a[(i, k)] * b[(k, j)]).sum::<f32>();
                assert_relative_eq!(c[(i, j)], expected, epsilon = 1e-4, max_relative = 1e-4);
            }
        }
    }
}

#[test]
fn multiply_identity() {
    let mut rng = fastrand::Rng::with_seed(4);
    let mut a = [0.0f32; 12];
    random_fill(&mut rng, &mut a);
    let mut eye = [0.0f32; 16];
    let mut c = [0.0f32; 12];

    let a = MatrixView::new(3, 4, &mut a).unwrap();
    let mut eye = MatrixView::new(4, 4, &mut eye).unwrap();
    for i in 0..4 {
        eye[(i, i)] = 1.0;
    }
    let mut c = MatrixView::new(3, 4, &mut c).unwrap();

    multiply(&mut c, &a, &eye).unwrap();
    assert_eq!(c, a);
}

#[test]
fn multiply_mismatch_leaves_result_untouched() {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..50 {
        let (m, n) = random_dims(&mut rng);
        let (k, p) = random_dims(&mut rng);
        if n == k {
            continue;
        }

        let mut a = [1.0f32; MAX_DIM * MAX_DIM];
        let mut b = [1.0f32; MAX_DIM * MAX_DIM];
        let mut c = [42.0f32; MAX_DIM * MAX_DIM];
        let a = MatrixView::new(m, n, &mut a).unwrap();
        let b = MatrixView::new(k, p, &mut b).unwrap();
        let mut c = MatrixView::new(m, p, &mut c).unwrap();

        assert!(matches!(
            multiply(&mut c, &a, &b),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(c.as_slice().iter().all(|&v| v == 42.0));
    }
}

#[test]
fn apply_identity_is_noop() {
    let mut rng = fastrand::Rng::with_seed(6);
    for _ in 0..20 {
        let (rows, columns) = random_dims(&mut rng);
        let mut storage = [0.0f32; MAX_DIM * MAX_DIM];
        random_fill(&mut rng, &mut storage);
        let before = storage;

        let mut mat = MatrixView::new(rows, columns, &mut storage).unwrap();
        apply_unary(&mut mat, |v| v).unwrap();
        assert_eq!(mat.as_slice(), &before[..rows * columns]);
    }
}

#[test]
fn apply_binary_elementwise() {
    let mut a = [1.0f32, 2.0, 3.0, 4.0];
    let mut b = [10.0f32, 20.0, 30.0, 40.0];
    let mut a = MatrixView::new(2, 2, &mut a).unwrap();
    let b = MatrixView::new(2, 2, &mut b).unwrap();

    apply_binary(&mut a, &b, add).unwrap();
    assert_eq!(a.as_slice(), [11.0, 22.0, 33.0, 44.0]);
    apply_binary(&mut a, &b, subtract).unwrap();
    assert_eq!(a.as_slice(), [1.0, 2.0, 3.0, 4.0]);
    apply_binary(&mut a, &b, multiply_scalars).unwrap();
    assert_eq!(a.as_slice(), [10.0, 40.0, 90.0, 160.0]);
    apply_binary(&mut a, &b, divide).unwrap();
    assert_eq!(a.as_slice(), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn apply_binary_checks_rows() {
    let mut a = [1.0f32; 6];
    let mut b = [1.0f32; 2];
    let mut a = MatrixView::new(3, 2, &mut a).unwrap();
    let b = MatrixView::new(1, 2, &mut b).unwrap();

    assert!(matches!(
        apply_binary(&mut a, &b, add),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(a.as_slice().iter().all(|&v| v == 1.0));
}

#[test]
fn subsample_gathers() {
    let mut source = [10.0f32, 20.0, 30.0, 40.0, 50.0];
    let mut result = [0.0f32; 3];
    let source = MatrixView::new(1, 5, &mut source).unwrap();
    let mut result = MatrixView::new(3, 1, &mut result).unwrap();

    subsample(&mut result, &source, &[4, 0, 2]).unwrap();
    assert_eq!(result.as_slice(), [50.0, 10.0, 30.0]);

    assert_eq!(
        subsample(&mut result, &source, &[0, 1, 2, 3]),
        Err(Error::LengthMismatch {
            expected: 3,
            got: 4
        })
    );
    assert_eq!(
        subsample(&mut result, &source, &[0, 1, 99]),
        Err(Error::IndexOutOfRange { index: 99, len: 5 })
    );
    assert_eq!(result.as_slice(), [50.0, 10.0, 30.0]);
}

#[test]
fn geometry_helpers() {
    assert_abs_diff_eq!(angle_between(1.0f32, 0.0, 0.0, 1.0), FRAC_PI_2, epsilon = 1e-6);
    assert_abs_diff_eq!(angle_between(1.0f32, 0.0, 1.0, 0.0), 0.0, epsilon = 1e-6);
    assert_eq!(squared_distance(0.0f32, 0.0, 3.0, 4.0), 25.0);
}

#[test]
fn display_is_row_major() {
    // [[1, 2],
    //  [3, 4],
    //  [5, 6]]
    let mut storage = [1.0f32, 3.0, 5.0, 2.0, 4.0, 6.0];
    let mat = MatrixView::new(3, 2, &mut storage).unwrap();

    let text = format_matrix(&mat);
    let rows = text.lines().collect::<Vec<_>>();
    assert_eq!(rows.len(), 3);
    for (row, expected) in rows.iter().zip([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]) {
        let values = row
            .split_whitespace()
            .map(|v| v.parse::<f32>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(values, expected);
    }
    assert_eq!(format_dimensions(&mat), "3 x 2");
    assert_eq!(format!("{mat:?}"), "[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]");
}
