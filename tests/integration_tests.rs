// tests/integration_tests.rs
//! Integration tests for the public matrix API and the reference fixtures.

use densemat::{Matrix, MatrixError};

/// Route library events to the test harness; set RUST_LOG=densemat=trace to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn test_constructors_all_kinds() {
    let m1 = Matrix::<f64>::empty();
    assert_eq!(m1.rows(), 0);
    assert_eq!(m1.cols(), 0);

    let mut m2 = Matrix::<f64>::new(2, 2).unwrap();
    m2[(1, 1)] = 123.456;
    assert_eq!(m2.shape(), (2, 2));
    assert_eq!(m2[(1, 1)], 123.456);

    let mut m3 = m2.clone();
    assert!(m2.equals(&m3));

    let m4 = Matrix::take_from(&mut m3);
    assert_eq!(m3.rows(), 0);
    assert_eq!(m3.cols(), 0);
    assert_eq!(m4.shape(), (2, 2));
    assert_eq!(m4[(1, 1)], m2[(1, 1)]);
}

#[test]
fn test_negative_dimensions_rejected() {
    let result = Matrix::<f64>::new(-1, -2);
    assert!(matches!(result, Err(MatrixError::InvalidDimension { rows: -1, cols: -2 })));

    let mut m = Matrix::<f64>::identity(2).unwrap();
    assert!(matches!(m.resize(Some(-3), None), Err(MatrixError::InvalidDimension { .. })));
    assert_eq!(m, Matrix::identity(2).unwrap());
}

#[test]
fn test_large_copy_equals_source() {
    let m1 = Matrix::<f64>::new(123, 123).unwrap();
    let m2 = m1.clone();
    assert!(m1.equals(&m2));
}

#[test]
fn test_sum_shape_mismatch() {
    let mut a = Matrix::<f64>::new(2, 3).unwrap();
    let b = Matrix::<f64>::new(3, 2).unwrap();

    let err = a.add_matrix(&b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            operation: "addition",
            left: (2, 3),
            right: (3, 2),
        }
    );
    assert!((&a - &b).is_err());
}

#[test]
fn test_product_shape() {
    let a = Matrix::<f64>::new(2, 3).unwrap();
    let b = Matrix::<f64>::new(3, 4).unwrap();
    assert_eq!((&a * &b).unwrap().shape(), (2, 4));
    assert!(matches!(&b * &a, Err(MatrixError::DimensionMismatch { .. })));
}

#[test]
fn test_transpose_assign_back() {
    let (rows, cols) = (2, 3);
    let mut m = Matrix::<f64>::new(rows as isize, cols as isize).unwrap();
    let mut res = Matrix::<f64>::new(cols as isize, rows as isize).unwrap();

    let mut c = 1.0;
    for i in 0..rows {
        for j in 0..cols {
            m[(i, j)] = c;
            res[(j, i)] = c;
            c += 1.0;
        }
    }

    m = m.transpose();
    assert!(m == res);
}

#[test]
fn test_determinant_fixtures() {
    let mut m = Matrix::<f64>::new(5, 5).unwrap();
    for i in 0..5 {
        for j in 0..5 {
            m[(i, j)] = j as f64;
        }
    }
    assert!(approx(m.determinant().unwrap(), 0.0, 1e-6));

    let m = Matrix::from_rows(&[
        [0.0, 6.0, -2.0, -1.0, 5.0],
        [0.0, 0.0, 0.0, -9.0, -7.0],
        [0.0, 15.0, 35.0, 0.0, 0.0],
        [0.0, -1.0, -11.0, -2.0, 1.0],
        [-2.0, -2.0, 3.0, 0.0, -2.0],
    ])
    .unwrap();
    assert!(approx(m.determinant().unwrap(), 2480.0, 1e-6));

    let m = Matrix::from_rows(&[[2.0, 3.0, 1.0], [7.0, 4.0, 1.0], [9.0, -2.0, 1.0]]).unwrap();
    assert!(approx(m.determinant().unwrap(), -32.0, 1e-6));

    let m = Matrix::from_rows(&[[2.0, 5.0, 7.0], [6.0, 3.0, 4.0], [5.0, -2.0, -3.0]]).unwrap();
    assert!(approx(m.determinant().unwrap(), -1.0, 1e-9));
}

#[test]
fn test_determinant_not_square() {
    let m = Matrix::<f64>::new(1, 2).unwrap();
    assert!(matches!(m.determinant(), Err(MatrixError::NotSquare { rows: 1, cols: 2 })));
}

#[test]
fn test_complements_fixture() {
    let given = Matrix::from_rows(&[[1.0, 2.0, 3.0], [0.0, 4.0, 2.0], [5.0, 2.0, 1.0]]).unwrap();
    let expected =
        Matrix::from_rows(&[[0.0, 10.0, -20.0], [4.0, -14.0, 8.0], [-8.0, -2.0, 4.0]]).unwrap();
    assert!(given.calc_complements().unwrap() == expected);

    let wide = Matrix::<f64>::new(3, 12).unwrap();
    assert!(wide.calc_complements().is_err());
}

#[test]
fn test_inverse_fixture() {
    let given = Matrix::from_rows(&[[2.0, 5.0, 7.0], [6.0, 3.0, 4.0], [5.0, -2.0, -3.0]]).unwrap();
    let expected =
        Matrix::from_rows(&[[1.0, -1.0, 1.0], [-38.0, 41.0, -34.0], [27.0, -29.0, 24.0]]).unwrap();
    assert!(given.inverse().unwrap() == expected);
}

#[test]
fn test_inverse_rational_fixture() {
    let d = 367429.0;
    let inverse_of_given = Matrix::from_rows(&[
        [44300.0 / d, -236300.0 / d, 200360.0 / d],
        [20600.0 / d, 56000.0 / d, -156483.0 / d],
        [30900.0 / d, 84000.0 / d, -51010.0 / d],
    ])
    .unwrap();
    let given =
        Matrix::from_rows(&[[2.8, 1.3, 7.01], [-1.03, -2.3, 3.01], [0.0, -3.0, 2.0]]).unwrap();

    let recovered = inverse_of_given.inverse().unwrap();
    for (a, b) in recovered.as_slice().iter().zip(given.as_slice()) {
        assert!(approx(*a, *b, 1e-6), "{} vs {}", a, b);
    }
}

#[test]
fn test_inverse_singular() {
    init_tracing();
    let mut m = Matrix::<f64>::new(3, 3).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            m[(i, j)] = (i * 3 + j) as f64;
        }
    }
    match m.inverse() {
        Err(MatrixError::SingularMatrix { determinant }) => assert!(determinant.abs() < 1e-7),
        other => panic!("expected singular matrix error, got {:?}", other),
    }
}

#[test]
fn test_scalar_multiplication_both_sides() {
    let m = Matrix::from_rows(&[[1.0, -2.0], [0.5, 4.0]]).unwrap();
    let left = 3.0_f64 * &m;
    let right = &m * 3.0;
    assert_eq!(left, right);
    assert_eq!(right.row(0).unwrap(), &[3.0, -6.0]);
}

#[test]
fn test_resize_round_trip() {
    init_tracing();
    let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    m.set_rows(4).unwrap().set_cols(5).unwrap();
    assert_eq!(m.shape(), (4, 5));
    assert_eq!(m[(1, 1)], 4.0);
    assert_eq!(m[(3, 4)], 0.0);

    m.resize(Some(2), Some(2)).unwrap();
    assert_eq!(m, Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap());
}

#[test]
fn test_single_precision() {
    let m = Matrix::<f32>::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
    let inv = m.inverse().unwrap();
    let product = (&m * &inv).unwrap();
    for i in 0..2 {
        for j in 0..2 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((product[(i, j)] - expected).abs() < 1e-5);
        }
    }
}
