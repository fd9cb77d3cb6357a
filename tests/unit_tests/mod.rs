use nalgebra::{matrix, Matrix3};

mod scalars;

/// Uniaxial stretch of 10% along the first axis.
fn uniaxial_stretch() -> Matrix3<f64> {
    matrix![1.1, 0.0, 0.0;
            0.0, 1.0, 0.0;
            0.0, 0.0, 1.0]
}

/// Pure shear in the x-y plane.
fn pure_shear() -> Matrix3<f64> {
    matrix![1.0, 0.05, 0.0;
            0.05, 1.0, 0.0;
            0.0, 0.0, 1.0]
}

/// An arbitrary, non-symmetric deformation gradient.
fn general_deformation_gradient() -> Matrix3<f64> {
    matrix![2.0, 1.0, 3.0;
            4.0, 6.0, 5.0;
            2.0, 8.0, 9.0]
}
