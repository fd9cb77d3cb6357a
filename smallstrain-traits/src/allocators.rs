//! Helper traits for allocator trait bounds.
use nalgebra::allocator::Allocator;
use nalgebra::{DefaultAllocator, DimName, Scalar, U1};

/// An allocator for square matrices, column vectors and row vectors of a single dimension.
pub trait DimAllocator<T: Scalar, D: DimName>: Allocator<T, D> + Allocator<T, D, D> + Allocator<T, U1, D> {}

impl<T, D> DimAllocator<T, D> for DefaultAllocator
where
    T: Scalar,
    D: DimName,
    DefaultAllocator: Allocator<T, D> + Allocator<T, D, D> + Allocator<T, U1, D>,
{
}

/// An allocator for square matrices only.
///
/// This is all that is needed to store deformation gradients and strain tensors.
pub trait TensorAllocator<T: Scalar, D: DimName>: Allocator<T, D, D> {}

impl<T, D> TensorAllocator<T, D> for DefaultAllocator
where
    T: Scalar,
    D: DimName,
    DefaultAllocator: Allocator<T, D, D>,
{
}
