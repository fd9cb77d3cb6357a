//! The capability shared by caches of quantities derived from deformation gradients.
use crate::allocators::TensorAllocator;
use crate::SmallDim;
use nalgebra::{DefaultAllocator, OMatrix, Scalar};

/// A per-element cache of quantities derived from the deformation gradient at each quadrature point.
///
/// The cache never decides on its own when it is stale. The owning element calls
/// [`update`](Self::update) whenever its deformation gradients change (typically once per solver
/// iterate), after which consumers may read the derived quantities any number of times.
pub trait DeformationGradientCache<T, D>
where
    T: Scalar,
    D: SmallDim,
    DefaultAllocator: TensorAllocator<T, D>,
{
    /// The index of the element that owns this cache.
    fn element_index(&self) -> usize;

    /// The number of quadrature points the cache was sized for at construction.
    fn num_quadrature_points(&self) -> usize;

    /// Recompute all cached quantities from the given deformation gradients.
    ///
    /// # Panics
    ///
    /// Implementations must panic if `deformation_gradients.len()` differs from
    /// [`num_quadrature_points`](Self::num_quadrature_points), and must do so before modifying
    /// any cached entry.
    fn update(&mut self, deformation_gradients: &[OMatrix<T, D, D>]);
}
