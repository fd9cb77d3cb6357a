//! Proptest strategies for deformation gradients.
use crate::allocators::TensorAllocator;
use crate::SmallDim;
use ::proptest::collection::vec;
use ::proptest::prelude::*;
use nalgebra::{DefaultAllocator, OMatrix};

/// An arbitrary (not necessarily invertible) deformation gradient.
pub fn deformation_gradient<D>() -> impl Strategy<Value = OMatrix<f64, D, D>>
where
    D: SmallDim,
    DefaultAllocator: TensorAllocator<f64, D>,
{
    // Keep entries moderate so that sums and products stay well within double precision
    let range = -10.0..10.0;
    let n = D::dim() * D::dim();
    vec(range, n).prop_map(|entries| OMatrix::<f64, D, D>::from_iterator(entries))
}

/// A deformation gradient $\vec F = \vec I + \vec H$ where the displacement gradient $\vec H$
/// has entries bounded by `max_displacement_gradient` in magnitude.
///
/// This is the regime in which the small-strain approximation is meaningful.
pub fn small_deformation_gradient<D>(max_displacement_gradient: f64) -> impl Strategy<Value = OMatrix<f64, D, D>>
where
    D: SmallDim,
    DefaultAllocator: TensorAllocator<f64, D>,
{
    assert!(max_displacement_gradient >= 0.0);
    let range = -max_displacement_gradient..=max_displacement_gradient;
    let n = D::dim() * D::dim();
    vec(range, n).prop_map(|entries| OMatrix::<f64, D, D>::identity() + OMatrix::<f64, D, D>::from_iterator(entries))
}

/// Arbitrary deformation gradients for between 1 and `max_quadrature_points` quadrature points.
pub fn deformation_gradients<D>(max_quadrature_points: usize) -> impl Strategy<Value = Vec<OMatrix<f64, D, D>>>
where
    D: SmallDim,
    DefaultAllocator: TensorAllocator<f64, D>,
{
    assert!(max_quadrature_points >= 1);
    vec(deformation_gradient::<D>(), 1..=max_quadrature_points)
}
