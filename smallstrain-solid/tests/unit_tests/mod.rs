use smallstrain::nalgebra::{matrix, Matrix2, Matrix3};
use smallstrain_solid::materials::LameParameters;


fn lame_parameters() -> LameParameters<f64> {
    LameParameters {
        mu: 384.0,
        lambda: 577.0,
    }
}

fn deformation_gradient_2d() -> Matrix2<f64> {
    matrix![1.0, 2.0;
            3.0, 4.0]
}

fn deformation_gradient_3d() -> Matrix3<f64> {
    matrix![1.0, 2.0, 3.0;
            4.0, 5.0, 6.0;
            7.0, 8.0, 9.0]
}
