use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::AxonError;
use crate::matrix::Matrix;

#[test]
fn test_zeros_shape() {
    let m = Matrix::zeros(3, 2);
    assert_eq!(m.shape(), (3, 2));
    for i in 0..3 {
        for j in 0..2 {
            assert_eq!(m[(i, j)], 0.0);
        }
    }
}

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(0, 1)], 2.0);
    assert_eq!(m[(1, 0)], 3.0);
    assert_eq!(m[(1, 1)], 4.0);
}

#[test]
fn test_from_vec_wrong_length() {
    let result = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(AxonError::ShapeMismatch { .. })));
}

#[test]
fn test_add_and_subtract() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Matrix::from_vec(2, 2, vec![0.5, 0.5, 0.5, 0.5]).unwrap();

    let sum = a.add(&b).unwrap();
    assert_eq!(sum[(0, 0)], 1.5);
    assert_eq!(sum[(1, 1)], 4.5);

    let diff = a.subtract(&b).unwrap();
    assert_eq!(diff[(0, 0)], 0.5);
    assert_eq!(diff[(1, 1)], 3.5);
}

#[test]
fn test_add_shape_mismatch() {
    let a = Matrix::zeros(2, 2);
    let b = Matrix::zeros(2, 3);
    assert!(matches!(a.add(&b), Err(AxonError::ShapeMismatch { .. })));
    assert!(matches!(a.subtract(&b), Err(AxonError::ShapeMismatch { .. })));
    assert!(matches!(
        a.multiply_elementwise(&b),
        Err(AxonError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_multiply() {
    // [1 2 3]   [7  8 ]   [58  64 ]
    // [4 5 6] x [9  10] = [139 154]
    //           [11 12]
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();

    let product = a.multiply(&b).unwrap();
    assert_eq!(product.shape(), (2, 2));
    assert_eq!(product[(0, 0)], 58.0);
    assert_eq!(product[(0, 1)], 64.0);
    assert_eq!(product[(1, 0)], 139.0);
    assert_eq!(product[(1, 1)], 154.0);
}

#[test]
fn test_multiply_inner_dimension_mismatch() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(2, 3);
    assert!(matches!(a.multiply(&b), Err(AxonError::ShapeMismatch { .. })));
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t[(0, 0)], 1.0);
    assert_eq!(t[(0, 1)], 4.0);
    assert_eq!(t[(2, 1)], 6.0);
}

#[test]
fn test_scale_and_elementwise() {
    let a = Matrix::from_vec(2, 2, vec![1.0, -2.0, 3.0, -4.0]).unwrap();

    let scaled = a.scale(2.0);
    assert_eq!(scaled[(0, 1)], -4.0);
    assert_eq!(scaled[(1, 0)], 6.0);

    let squared = a.multiply_elementwise(&a).unwrap();
    assert_eq!(squared[(0, 1)], 4.0);
    assert_eq!(squared[(1, 1)], 16.0);
}

#[test]
fn test_map() {
    let a = Matrix::from_vec(1, 3, vec![-1.0, 0.0, 1.0]).unwrap();
    let abs = a.map(f32::abs);
    assert_eq!(abs[(0, 0)], 1.0);
    assert_eq!(abs[(0, 1)], 0.0);
    assert_eq!(abs[(0, 2)], 1.0);
}

#[test]
fn test_random_range() {
    let mut rng = StdRng::seed_from_u64(3);
    let m = Matrix::random(10, 10, &mut rng);
    for i in 0..10 {
        for j in 0..10 {
            let v = m[(i, j)];
            assert!((-1.0..1.0).contains(&v), "entry {} out of [-1, 1)", v);
        }
    }
}

#[test]
fn test_column_round_trip() {
    let v = ndarray::array![1.0f32, 2.0, 3.0];
    let column = Matrix::from_column(v.view());
    assert_eq!(column.shape(), (3, 1));
    assert_eq!(column.column_to_array(), v);
}
