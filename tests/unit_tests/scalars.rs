//! The strain cache is generic over the scalar type. These tests run it on scalars other than `f64`.
use crate::unit_tests::general_deformation_gradient;
use matrixcompare::assert_matrix_eq;
use nalgebra::{matrix, Matrix3};
use num::rational::Ratio;
use smallstrain::strain::{infinitesimal_strain_tensor, StrainCache3};
use util::{Dual, Sparsity};

type Rational = Ratio<i64>;

fn rational(numer: i64, denom: i64) -> Rational {
    Rational::new(numer, denom)
}

fn rational_matrix(entries: [[i64; 3]; 3], denom: i64) -> Matrix3<Rational> {
    Matrix3::from_fn(|i, j| rational(entries[i][j], denom))
}

#[test]
fn single_precision() {
    let f: Matrix3<f32> = general_deformation_gradient().cast();
    let cache = StrainCache3::from_deformation_gradients(0, &[f]);
    let expected: Matrix3<f32> = matrix![1.0, 2.5, 2.5;
                                         2.5, 5.0, 6.5;
                                         2.5, 6.5, 8.0];
    assert_eq!(cache.strain(0), &expected);
    assert_eq!(*cache.trace_strain(0), 14.0);
}

#[test]
fn exact_uniaxial_stretch() {
    let f = rational_matrix([[11, 0, 0], [0, 10, 0], [0, 0, 10]], 10);
    let cache = StrainCache3::from_deformation_gradients(0, &[f]);

    let mut expected = Matrix3::zeros();
    expected[(0, 0)] = rational(1, 10);
    assert_eq!(cache.strain(0), &expected);
    assert_eq!(cache.trace_strain(0), &rational(1, 10));
}

#[test]
fn exact_strain_difference_is_symmetrized_gradient_difference() {
    let f = rational_matrix([[13, -2, 7], [5, 9, 1], [-4, 3, 11]], 7);
    let g = rational_matrix([[3, 8, -5], [2, 14, 6], [1, -9, 10]], 5);
    let h = f - g;

    let difference = infinitesimal_strain_tensor(&f) - infinitesimal_strain_tensor(&g);
    let expected = (h + h.transpose()) * rational(1, 2);
    assert_eq!(difference, expected);
}

#[test]
fn exact_symmetry_and_trace() {
    let gradients = [
        rational_matrix([[13, -2, 7], [5, 9, 1], [-4, 3, 11]], 7),
        rational_matrix([[3, 8, -5], [2, 14, 6], [1, -9, 10]], 5),
    ];
    let cache = StrainCache3::from_deformation_gradients(0, &gradients);
    for (eps, trace) in cache.iter() {
        assert_eq!(eps, &eps.transpose());
        assert_eq!(*trace, eps[(0, 0)] + eps[(1, 1)] + eps[(2, 2)]);
    }
}

#[test]
#[allow(non_snake_case)]
fn dual_numbers_give_directional_derivative_of_strain() {
    // d/dt eps(F + t dF) = sym(dF), independently of F
    let F = general_deformation_gradient();
    let dF = matrix![0.3, -1.2, 0.7;
                     2.0, 0.1, -0.4;
                     0.5, 1.5, -0.9];
    let F_dual = Matrix3::from_fn(|i, j| Dual::new(F[(i, j)], dF[(i, j)]));

    let cache = StrainCache3::from_deformation_gradients(0, &[F_dual]);
    let eps = cache.strain(0).map(|x| x.re);
    let deps = cache.strain(0).map(|x| x.eps);
    let dtrace = cache.trace_strain(0).eps;

    assert_matrix_eq!(eps, infinitesimal_strain_tensor(&F), comp = float);
    assert_matrix_eq!(deps, dF.symmetric_part(), comp = float);
    assert_eq!(dtrace, dF.trace());
}

#[test]
fn structural_dependencies_of_strain() {
    // Label the entry F_ij with the variable index 3 * i + j
    let f = Matrix3::from_fn(|i, j| Sparsity::variable(3 * i + j));
    let cache = StrainCache3::from_deformation_gradients(0, &[f]);
    let eps = cache.strain(0);

    for i in 0..3 {
        for j in 0..3 {
            let mut expected = vec![3 * i + j, 3 * j + i];
            expected.sort();
            expected.dedup();
            assert_eq!(eps[(i, j)].dependencies(), expected, "entry ({}, {})", i, j);
        }
    }
    assert_eq!(cache.trace_strain(0).dependencies(), vec![0, 4, 8]);
}

#[test]
fn structural_zero_gradient_entries_stay_out_of_strain() {
    // Only a single in-plane shear component is active
    let mut f = Matrix3::from_element(Sparsity::Zero);
    f[(0, 1)] = Sparsity::variable(1);
    let eps = infinitesimal_strain_tensor(&f);

    assert_eq!(eps[(0, 1)].dependencies(), vec![1]);
    assert_eq!(eps[(1, 0)].dependencies(), vec![1]);
    assert_eq!(eps[(0, 0)], Sparsity::Constant);
    assert_eq!(eps[(0, 2)], Sparsity::Zero);
    assert_eq!(eps[(2, 1)], Sparsity::Zero);
}
